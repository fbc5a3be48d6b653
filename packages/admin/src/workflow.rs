//! The dashboard workflows: reload, confirmed delete and schedule save.
//!
//! Each step updates the state through a [`StateCell`] only around the
//! awaited API calls, never across them, so the same functions drive a UI
//! signal and a plain [`DashboardState`].

use api::{AdminApi, AuthToken};
use booking_core::{ScheduleId, ScheduleUpdate};
use tracing::debug;

use crate::actions;
use crate::loader::load_collections;
use crate::state::DashboardState;

/// Somewhere a [`DashboardState`] can be updated in place.
pub trait StateCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R;
}

impl StateCell for DashboardState {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(self)
    }
}

/// Re-fetch all collections.
///
/// Returns whether the result was applied: `false` without a token or when
/// a newer load superseded this one.
pub async fn reload<A: AdminApi, S: StateCell>(
    api: &A,
    token: Option<&AuthToken>,
    state: &mut S,
) -> bool {
    let Some(token) = token else {
        debug!("No token, skipping load");
        return false;
    };
    let ticket = state.update(DashboardState::begin_load);
    let result = load_collections(api, token).await;
    state.update(|s| s.finish_load(ticket, result))
}

/// Delete the target the user confirmed, then reload.
///
/// Does nothing when no delete is pending. A failed delete leaves an error
/// notice and skips the reload. Returns whether the delete succeeded.
pub async fn delete_confirmed<A: AdminApi, S: StateCell>(
    api: &A,
    token: Option<&AuthToken>,
    state: &mut S,
) -> bool {
    let Some(target) = state.update(DashboardState::confirm_delete) else {
        return false;
    };
    let result = actions::delete(api, token, target).await;
    if !state.update(|s| s.finish_mutation(result)) {
        return false;
    }
    reload(api, token, state).await;
    true
}

/// Save the schedule being edited, then reload.
///
/// Success closes the editor with an info notice; failure keeps it open
/// with an error notice. Returns whether the update succeeded.
pub async fn save_schedule<A: AdminApi, S: StateCell>(
    api: &A,
    token: Option<&AuthToken>,
    id: ScheduleId,
    update: &ScheduleUpdate,
    state: &mut S,
) -> bool {
    let result = actions::update_schedule(api, token, id, update).await;
    if !state.update(|s| s.finish_update(result)) {
        return false;
    }
    reload(api, token, state).await;
    true
}
