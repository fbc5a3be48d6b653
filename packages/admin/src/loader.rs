//! Parallel loading of the three resource collections.

use api::{AdminApi, ApiError, AuthToken};
use booking_core::{Bus, Route, Schedule};
use futures_util::future::try_join3;

use crate::error::DashboardError;

/// The three collections shown on the dashboard, always loaded together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub buses: Vec<Bus>,
    pub routes: Vec<Route>,
    pub schedules: Vec<Schedule>,
}

/// Fetch buses, schedules and routes concurrently.
///
/// Fails as a whole when any listing fails; the first failure wins.
/// Non-success statuses collapse into [`DashboardError::FetchFailed`].
pub async fn load_collections<A: AdminApi>(
    api: &A,
    token: &AuthToken,
) -> Result<Collections, DashboardError> {
    let (buses, schedules, routes) = try_join3(
        api.list_buses(token),
        api.list_schedules(token),
        api.list_routes(token),
    )
    .await
    .map_err(|err| match err {
        ApiError::Status { status, .. } => DashboardError::FetchFailed { status },
        other => DashboardError::Api(other),
    })?;

    Ok(Collections {
        buses,
        routes,
        schedules,
    })
}
