//! Core domain types for the transit admin dashboard.
//!
//! This crate contains shared types used across all packages:
//! - Bus, Route and Schedule records as returned by the admin API
//! - Creation and update payloads built from form input
//! - Add-form field schemas and derived select options
//! - Timestamp conversion between form inputs, the backend and the UI

mod bus;
mod form;
mod resource;
mod route;
mod schedule;
pub mod time;

pub use bus::{Bus, BusId, NewBus};
pub use form::{
    FieldKind, FormError, FormField, FormValues, SelectOption, bus_form_fields, bus_options,
    fields, route_form_fields, route_options, schedule_form_fields,
};
pub use resource::{NewResource, ResourceKind, ResourceRef};
pub use route::{NewRoute, Route, RouteId};
pub use schedule::{NewSchedule, Schedule, ScheduleId, ScheduleUpdate, UpdateResponse};
