//! Add-form field schemas, form values and derived select options.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bus::Bus;
use crate::route::Route;
use crate::time;

/// Field names as submitted to the backend.
pub mod fields {
    pub const REG_NUMBER: &str = "regNumber";
    pub const CAPACITY: &str = "capacity";
    pub const BUS_TYPE: &str = "busType";
    pub const SOURCE: &str = "source";
    pub const DESTINATION: &str = "destination";
    pub const BUS_ID: &str = "busId";
    pub const ROUTE_ID: &str = "routeId";
    pub const DEPARTURE_TIME: &str = "departureTime";
    pub const ARRIVAL_TIME: &str = "arrivalTime";
    pub const FARE: &str = "fare";
    pub const AVAILABLE_SEATS: &str = "availableSeats";
}

/// Errors turning form input into a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid date and time '{0}'")]
    InvalidTimestamp(String),
}

/// A label/value pair for a `select` input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Input kind of a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    DateTimeLocal,
    Select {
        /// Placeholder entry shown before a choice is made.
        default_option: &'static str,
        options: Vec<SelectOption>,
    },
}

impl FieldKind {
    /// HTML input type for non-select fields.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::DateTimeLocal => "datetime-local",
            FieldKind::Select { .. } => "select",
        }
    }
}

/// Schema for one add-form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            placeholder: None,
        }
    }

    fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Raw string values of a form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, builder style.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    /// The raw value, or `""` when unset.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn text(&self, name: &str) -> String {
        self.get(name).trim().to_string()
    }

    pub(crate) fn optional(&self, name: &str) -> Option<&str> {
        let value = self.get(name).trim();
        (!value.is_empty()).then_some(value)
    }

    pub(crate) fn number<T: FromStr>(&self, name: &str, label: &'static str) -> Result<T, FormError> {
        self.optional_number(name, label)?
            .ok_or(FormError::Missing { field: label })
    }

    pub(crate) fn optional_number<T: FromStr>(
        &self,
        name: &str,
        label: &'static str,
    ) -> Result<Option<T>, FormError> {
        self.optional(name)
            .map(|raw| {
                raw.parse().map_err(|_| FormError::InvalidNumber {
                    field: label,
                    value: raw.to_string(),
                })
            })
            .transpose()
    }

    pub(crate) fn timestamp(&self, name: &str, label: &'static str) -> Result<String, FormError> {
        let raw = self.optional(name).ok_or(FormError::Missing { field: label })?;
        time::to_backend_timestamp(raw)
    }
}

/// Fields of the bus add-form.
pub fn bus_form_fields() -> Vec<FormField> {
    vec![
        FormField::new(fields::REG_NUMBER, "Registration Number", FieldKind::Text)
            .with_placeholder("MH01AB1234"),
        FormField::new(fields::CAPACITY, "Capacity", FieldKind::Number).with_placeholder("40"),
        FormField::new(fields::BUS_TYPE, "Bus Type", FieldKind::Text)
            .with_placeholder("AC Sleeper"),
    ]
}

/// Fields of the route add-form.
pub fn route_form_fields() -> Vec<FormField> {
    vec![
        FormField::new(fields::SOURCE, "Source", FieldKind::Text).with_placeholder("Mumbai"),
        FormField::new(fields::DESTINATION, "Destination", FieldKind::Text)
            .with_placeholder("Pune"),
    ]
}

/// Fields of the schedule add-form, with bus and route choices taken from
/// the current collections.
pub fn schedule_form_fields(buses: &[Bus], routes: &[Route]) -> Vec<FormField> {
    vec![
        FormField::new(
            fields::BUS_ID,
            "Select Bus",
            FieldKind::Select {
                default_option: "Choose a bus...",
                options: bus_options(buses),
            },
        ),
        FormField::new(
            fields::ROUTE_ID,
            "Select Route",
            FieldKind::Select {
                default_option: "Choose a route...",
                options: route_options(routes),
            },
        ),
        FormField::new(fields::DEPARTURE_TIME, "Departure Time", FieldKind::DateTimeLocal),
        FormField::new(fields::ARRIVAL_TIME, "Arrival Time", FieldKind::DateTimeLocal),
        FormField::new(fields::FARE, "Fare", FieldKind::Number).with_placeholder("650.00"),
        FormField::new(fields::AVAILABLE_SEATS, "Available Seats", FieldKind::Number)
            .with_placeholder("40"),
    ]
}

/// Bus choices labelled `<reg> (<type>)`.
pub fn bus_options(buses: &[Bus]) -> Vec<SelectOption> {
    buses
        .iter()
        .map(|bus| SelectOption {
            value: bus.id.to_string(),
            label: bus.label(),
        })
        .collect()
}

/// Route choices labelled `<source> to <destination>`.
pub fn route_options(routes: &[Route]) -> Vec<SelectOption> {
    routes
        .iter()
        .map(|route| SelectOption {
            value: route.id.to_string(),
            label: route.label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use crate::{BusId, NewBus, RouteId};

    fn bus(id: i64, reg: &str, kind: &str) -> Bus {
        Bus {
            id: BusId(id),
            reg_number: reg.to_string(),
            capacity: 40,
            bus_type: kind.to_string(),
        }
    }

    #[test]
    fn options_follow_collections() {
        let buses = vec![bus(1, "MH01AB1234", "AC"), bus(2, "MH02CD5678", "Sleeper")];
        let routes = vec![Route {
            id: RouteId(9),
            source: "Mumbai".into(),
            destination: "Pune".into(),
        }];

        let options = bus_options(&buses);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "1");
        assert_eq!(options[0].label, "MH01AB1234 (AC)");
        assert_eq!(route_options(&routes)[0].label, "Mumbai to Pune");

        let fields = schedule_form_fields(&buses, &routes);
        match &fields[0].kind {
            FieldKind::Select { default_option, options } => {
                assert_eq!(*default_option, "Choose a bus...");
                assert_eq!(options.len(), 2);
            }
            other => panic!("expected select, got {other:?}"),
        }
        match &schedule_form_fields(&[], &[])[1].kind {
            FieldKind::Select { options, .. } => assert!(options.is_empty()),
            other => panic!("expected select, got {other:?}"),
        }
    }

    #[test]
    fn bus_form_parses_capacity() {
        let values = FormValues::new()
            .with(fields::REG_NUMBER, " MH01AB1234 ")
            .with(fields::CAPACITY, "40")
            .with(fields::BUS_TYPE, "AC Sleeper");
        let bus = NewBus::from_form(&values).unwrap();
        assert_eq!(bus.reg_number, "MH01AB1234");
        assert_eq!(bus.capacity, 40);

        let json = serde_json::to_value(&bus).unwrap();
        assert_eq!(json["regNumber"], "MH01AB1234");
        assert_eq!(json["busType"], "AC Sleeper");
    }

    #[test]
    fn non_numeric_capacity_is_rejected() {
        let values = FormValues::new().with(fields::CAPACITY, "forty");
        let err = NewBus::from_form(&values).unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidNumber {
                field: "Capacity",
                value: "forty".into()
            }
        );
        assert_eq!(err.to_string(), "Capacity must be a number, got 'forty'");
    }

    #[test]
    fn field_schemas_match_input_types() {
        let kinds: Vec<_> = bus_form_fields().iter().map(|f| f.kind.input_type()).collect();
        assert_eq!(kinds, ["text", "number", "text"]);
        assert_eq!(route_form_fields()[1].placeholder, Some("Pune"));
    }
}
