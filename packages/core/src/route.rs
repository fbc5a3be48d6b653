//! Route domain types.

use serde::{Deserialize, Serialize};

use crate::form::{FormError, FormValues, fields};

/// Backend-assigned identifier for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub i64);

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RouteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A route between two cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "RouteID")]
    pub id: RouteId,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Destination")]
    pub destination: String,
}

impl Route {
    /// Display label, e.g. `Mumbai to Pune`.
    pub fn label(&self) -> String {
        format!("{} to {}", self.source, self.destination)
    }
}

/// Payload for creating a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoute {
    pub source: String,
    pub destination: String,
}

impl NewRoute {
    /// Build the payload from the route add-form values.
    pub fn from_form(values: &FormValues) -> Result<Self, FormError> {
        Ok(Self {
            source: values.text(fields::SOURCE),
            destination: values.text(fields::DESTINATION),
        })
    }
}
