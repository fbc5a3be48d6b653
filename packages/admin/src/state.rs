//! Dashboard state and its transitions.
//!
//! All transitions are synchronous; the async work (listing, mutations) runs
//! between them and hands its result back in. This keeps the state usable
//! from a UI signal as well as from a plain value (see [`crate::workflow`]).

use booking_core::{
    Bus, FormField, ResourceRef, Route, Schedule, UpdateResponse, schedule_form_fields,
};
use tracing::{debug, warn};

use crate::error::DashboardError;
use crate::loader::Collections;

/// Identifies one load; only the most recently issued load may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// A message for the user after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    fn failure(err: &DashboardError) -> Self {
        Notice::Error(format!("Error: {err}"))
    }
}

/// What the page should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView<'a> {
    Loading,
    Failed(&'a str),
    Ready,
}

/// State of the admin dashboard between reloads.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    collections: Collections,
    loading: bool,
    error: Option<String>,
    editing: Option<Schedule>,
    pending_delete: Option<ResourceRef>,
    notice: Option<Notice>,
    generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            collections: Collections::default(),
            loading: true,
            error: None,
            editing: None,
            pending_delete: None,
            notice: None,
            generation: 0,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buses(&self) -> &[Bus] {
        &self.collections.buses
    }

    pub fn routes(&self) -> &[Route] {
        &self.collections.routes
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.collections.schedules
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Loading wins over a stale error; an error replaces the data view.
    pub fn view(&self) -> DashboardView<'_> {
        if self.loading {
            DashboardView::Loading
        } else if let Some(err) = &self.error {
            DashboardView::Failed(err)
        } else {
            DashboardView::Ready
        }
    }

    /// Schedule add-form fields with options from the current collections.
    pub fn schedule_form_fields(&self) -> Vec<FormField> {
        schedule_form_fields(&self.collections.buses, &self.collections.routes)
    }

    // --- Loading ---

    /// Start a load. The error message is left alone until a load succeeds.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Apply the result of a load.
    ///
    /// Returns `false` when a newer load was started in the meantime; the
    /// result is then dropped.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Collections, DashboardError>,
    ) -> bool {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "Discarding stale load"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(collections) => {
                debug!(
                    buses = collections.buses.len(),
                    routes = collections.routes.len(),
                    schedules = collections.schedules.len(),
                    "Loaded admin data"
                );
                self.collections = collections;
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, status = ?err.status(), "Failed to load admin data");
                self.error = Some(err.to_string());
            }
        }
        true
    }

    // --- Delete workflow ---

    /// Ask for confirmation before deleting `target`.
    pub fn request_delete(&mut self, target: ResourceRef) {
        self.pending_delete = Some(target);
    }

    pub fn pending_delete(&self) -> Option<ResourceRef> {
        self.pending_delete
    }

    /// The user confirmed; returns the target to delete.
    pub fn confirm_delete(&mut self) -> Option<ResourceRef> {
        self.pending_delete.take()
    }

    /// The user declined; nothing is deleted.
    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Record the outcome of a create or delete. Returns whether to reload.
    pub fn finish_mutation(&mut self, result: Result<(), DashboardError>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Mutation failed");
                self.notice = Some(Notice::failure(&err));
                false
            }
        }
    }

    // --- Edit workflow ---

    pub fn editing(&self) -> Option<&Schedule> {
        self.editing.as_ref()
    }

    pub fn begin_edit(&mut self, schedule: Schedule) {
        self.editing = Some(schedule);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Record the outcome of a schedule update. Returns whether to reload.
    ///
    /// Success closes the editor; failure leaves it open.
    pub fn finish_update(&mut self, result: Result<UpdateResponse, DashboardError>) -> bool {
        match result {
            Ok(response) => {
                self.notice = Some(Notice::Info(response.message));
                self.editing = None;
                true
            }
            Err(err) => {
                warn!(error = %err, "Schedule update failed");
                self.notice = Some(Notice::failure(&err));
                false
            }
        }
    }

    // --- Notices ---

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
