//! Dashboard logic for managing buses, routes and schedules.
//!
//! This crate holds everything the admin page does that is not rendering:
//!
//! - `DashboardState` - collections, loading/error flags, edit and delete
//!   workflows, notices
//! - `load_collections` - the all-or-nothing parallel fetch of the three
//!   collections
//! - `workflow` - reload, confirmed delete and schedule save, run against
//!   any `AdminApi` and any `StateCell`
//!
//! # Usage
//!
//! ```ignore
//! use admin::{DashboardState, workflow};
//!
//! let mut state = DashboardState::new();
//! workflow::reload(&client, Some(&token), &mut state).await;
//! state.request_delete(ResourceRef::Bus(BusId(1)));
//! workflow::delete_confirmed(&client, Some(&token), &mut state).await;
//! ```

pub mod actions;
mod error;
mod loader;
mod state;
pub mod workflow;

pub use error::DashboardError;
pub use loader::{Collections, load_collections};
pub use state::{DashboardState, DashboardView, LoadTicket, Notice};
pub use workflow::StateCell;
