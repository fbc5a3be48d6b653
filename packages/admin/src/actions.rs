//! Single mutations against the admin API.
//!
//! These do not touch dashboard state; callers record the outcome with
//! [`crate::DashboardState`] and reload on success.

use api::{AdminApi, AuthToken};
use booking_core::{
    FormValues, NewResource, ResourceKind, ResourceRef, ScheduleId, ScheduleUpdate,
    UpdateResponse,
};
use tracing::info;

use crate::error::DashboardError;

fn require(token: Option<&AuthToken>) -> Result<&AuthToken, DashboardError> {
    token.ok_or(DashboardError::NotSignedIn)
}

/// Create a resource.
pub async fn create<A: AdminApi>(
    api: &A,
    token: Option<&AuthToken>,
    resource: &NewResource,
) -> Result<(), DashboardError> {
    let token = require(token)?;
    api.add(token, resource).await?;
    info!(kind = %resource.kind(), "Resource created");
    Ok(())
}

/// Parse add-form values of `kind` and create the resource.
pub async fn create_from_form<A: AdminApi>(
    api: &A,
    token: Option<&AuthToken>,
    kind: ResourceKind,
    values: &FormValues,
) -> Result<(), DashboardError> {
    let resource = NewResource::from_form(kind, values)?;
    create(api, token, &resource).await
}

/// Delete a resource.
pub async fn delete<A: AdminApi>(
    api: &A,
    token: Option<&AuthToken>,
    target: ResourceRef,
) -> Result<(), DashboardError> {
    let token = require(token)?;
    api.delete(token, target).await?;
    info!(%target, "Resource deleted");
    Ok(())
}

/// Apply a partial update to a schedule.
pub async fn update_schedule<A: AdminApi>(
    api: &A,
    token: Option<&AuthToken>,
    id: ScheduleId,
    update: &ScheduleUpdate,
) -> Result<UpdateResponse, DashboardError> {
    let token = require(token)?;
    let response = api.update_schedule(token, id, update).await?;
    info!(%id, "Schedule updated");
    Ok(response)
}
