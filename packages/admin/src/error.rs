use api::ApiError;
use booking_core::FormError;
use thiserror::Error;

/// Errors surfaced by the dashboard workflows.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// One of the collection listings answered with a non-success status.
    #[error("Failed to fetch admin data")]
    FetchFailed { status: u16 },
    #[error("not signed in")]
    NotSignedIn,
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl DashboardError {
    /// HTTP status behind the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            DashboardError::FetchFailed { status } => Some(*status),
            DashboardError::Api(err) => err.status(),
            DashboardError::NotSignedIn | DashboardError::Form(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_kept_for_backend_failures() {
        assert_eq!(DashboardError::FetchFailed { status: 401 }.status(), Some(401));

        let rejected = DashboardError::Api(ApiError::Status {
            status: 409,
            message: "Bus is in use".into(),
        });
        assert_eq!(rejected.status(), Some(409));
        assert_eq!(rejected.to_string(), "Bus is in use");

        assert_eq!(DashboardError::NotSignedIn.status(), None);
    }
}
