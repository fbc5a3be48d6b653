//! Resource kinds managed by the dashboard.

use serde::{Deserialize, Serialize};

use crate::bus::{BusId, NewBus};
use crate::form::{FormError, FormValues};
use crate::route::{NewRoute, RouteId};
use crate::schedule::{NewSchedule, ScheduleId};

/// One of the backend-managed resource collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Bus,
    Route,
    Schedule,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Bus, ResourceKind::Route, ResourceKind::Schedule];

    /// Lowercase name, also the collection path segment.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Bus => "bus",
            ResourceKind::Route => "route",
            ResourceKind::Schedule => "schedule",
        }
    }

    /// Title used on the add-form.
    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Bus => "Bus",
            ResourceKind::Route => "Route",
            ResourceKind::Schedule => "Schedule",
        }
    }

    /// Question asked before deleting a resource of this kind.
    pub fn confirm_message(self) -> String {
        format!(
            "Are you sure you want to delete this {}? This cannot be undone.",
            self.as_str()
        )
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A specific resource, addressed by kind and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceRef {
    Bus(BusId),
    Route(RouteId),
    Schedule(ScheduleId),
}

impl ResourceRef {
    pub fn kind(self) -> ResourceKind {
        match self {
            ResourceRef::Bus(_) => ResourceKind::Bus,
            ResourceRef::Route(_) => ResourceKind::Route,
            ResourceRef::Schedule(_) => ResourceKind::Schedule,
        }
    }

    /// The numeric id regardless of kind.
    pub fn raw_id(self) -> i64 {
        match self {
            ResourceRef::Bus(id) => id.0,
            ResourceRef::Route(id) => id.0,
            ResourceRef::Schedule(id) => id.0,
        }
    }
}

impl std::fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind(), self.raw_id())
    }
}

/// A creation payload for any resource kind.
#[derive(Debug, Clone, PartialEq)]
pub enum NewResource {
    Bus(NewBus),
    Route(NewRoute),
    Schedule(NewSchedule),
}

impl NewResource {
    /// Parse the add-form values of the given kind.
    pub fn from_form(kind: ResourceKind, values: &FormValues) -> Result<Self, FormError> {
        Ok(match kind {
            ResourceKind::Bus => NewResource::Bus(NewBus::from_form(values)?),
            ResourceKind::Route => NewResource::Route(NewRoute::from_form(values)?),
            ResourceKind::Schedule => NewResource::Schedule(NewSchedule::from_form(values)?),
        })
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            NewResource::Bus(_) => ResourceKind::Bus,
            NewResource::Route(_) => ResourceKind::Route,
            NewResource::Schedule(_) => ResourceKind::Schedule,
        }
    }
}
