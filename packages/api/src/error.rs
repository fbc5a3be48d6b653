use thiserror::Error;

/// Errors talking to the admin API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a rejected request, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// Build a status error from a response body.
    ///
    /// Prefers an `error` or `message` field of a JSON body, then the raw
    /// body, then the status text.
    pub(crate) fn from_body(status: reqwest::StatusCode, body: &str) -> Self {
        let from_json = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["error", "message"]
                    .iter()
                    .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
            });
        let message = from_json
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty() && !trimmed.starts_with('{')).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                format!(
                    "HTTP error: {}",
                    status.canonical_reason().unwrap_or(status.as_str())
                )
            });
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn message_prefers_json_error_field() {
        let err = ApiError::from_body(StatusCode::BAD_REQUEST, r#"{"error":"Bus has schedules"}"#);
        assert_eq!(err.to_string(), "Bus has schedules");
        assert_eq!(err.status(), Some(400));

        let err = ApiError::from_body(StatusCode::CONFLICT, r#"{"message":"duplicate"}"#);
        assert_eq!(err.to_string(), "duplicate");
    }

    #[test]
    fn message_falls_back_to_text_then_status() {
        let err = ApiError::from_body(StatusCode::FORBIDDEN, "admin only\n");
        assert_eq!(err.to_string(), "admin only");

        let err = ApiError::from_body(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.to_string(), "HTTP error: Internal Server Error");
    }
}
