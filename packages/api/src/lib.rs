//! REST client for the transit booking admin API.
//!
//! This crate contains:
//! - `AdminApi`, the seam the dashboard logic is written against
//! - `AdminClient`, its `reqwest` implementation for `/api/admin`
//! - Configuration and the bearer token handed in by the auth context

mod client;
mod config;
mod error;

pub use client::{AdminApi, AdminClient, AuthToken};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ApiError;

// Re-export core types for convenience
pub use booking_core::{
    Bus, BusId, NewBus, NewResource, NewRoute, NewSchedule, ResourceKind, ResourceRef, Route,
    RouteId, Schedule, ScheduleId, ScheduleUpdate, UpdateResponse,
};
