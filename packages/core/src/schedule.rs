//! Schedule domain types.

use serde::{Deserialize, Serialize};

use crate::bus::BusId;
use crate::form::{FormError, FormValues, fields};
use crate::route::RouteId;
use crate::time;

/// Backend-assigned identifier for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleId(pub i64);

impl std::fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled trip of a bus along a route.
///
/// The listing joins in the bus registration and the route endpoints so the
/// dashboard can display a schedule without looking up the other collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "ScheduleID")]
    pub id: ScheduleId,
    #[serde(rename = "BusID", default, skip_serializing_if = "Option::is_none")]
    pub bus_id: Option<BusId>,
    #[serde(rename = "RouteID", default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<RouteId>,
    #[serde(rename = "RegNumber", default)]
    pub reg_number: String,
    #[serde(rename = "Source", default)]
    pub source: String,
    #[serde(rename = "Destination", default)]
    pub destination: String,
    #[serde(rename = "DepartureTime")]
    pub departure_time: String,
    #[serde(rename = "ArrivalTime")]
    pub arrival_time: String,
    #[serde(rename = "Fare")]
    pub fare: f64,
    #[serde(rename = "AvailableSeats")]
    pub available_seats: u32,
}

impl Schedule {
    /// Route line, e.g. `Mumbai to Pune`.
    pub fn route_label(&self) -> String {
        format!("{} to {}", self.source, self.destination)
    }

    /// Departure formatted for display, e.g. `1/5/24, 10:00 am`.
    pub fn departure_label(&self) -> String {
        time::format_short(&self.departure_time)
    }

    /// Fare and seat line, e.g. `Fare: ₹650 | Seats: 40`.
    pub fn fare_label(&self) -> String {
        format!("Fare: ₹{} | Seats: {}", self.fare, self.available_seats)
    }
}

/// Payload for creating a schedule.
///
/// Times are in the backend's `YYYY-MM-DD HH:MM` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    pub bus_id: BusId,
    pub route_id: RouteId,
    pub departure_time: String,
    pub arrival_time: String,
    pub fare: f64,
    pub available_seats: u32,
}

impl NewSchedule {
    /// Build the payload from the schedule add-form values.
    ///
    /// `datetime-local` values are converted to the backend format.
    pub fn from_form(values: &FormValues) -> Result<Self, FormError> {
        Ok(Self {
            bus_id: values.number(fields::BUS_ID, "Bus")?,
            route_id: values.number(fields::ROUTE_ID, "Route")?,
            departure_time: values.timestamp(fields::DEPARTURE_TIME, "Departure Time")?,
            arrival_time: values.timestamp(fields::ARRIVAL_TIME, "Arrival Time")?,
            fare: values.number(fields::FARE, "Fare")?,
            available_seats: values.number(fields::AVAILABLE_SEATS, "Available Seats")?,
        })
    }
}

/// Partial update of a schedule. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_seats: Option<u32>,
}

impl ScheduleUpdate {
    /// Build an update from the edit modal values. Blank fields are omitted.
    pub fn from_form(values: &FormValues) -> Result<Self, FormError> {
        Ok(Self {
            departure_time: values
                .optional(fields::DEPARTURE_TIME)
                .map(time::to_backend_timestamp)
                .transpose()?,
            arrival_time: values
                .optional(fields::ARRIVAL_TIME)
                .map(time::to_backend_timestamp)
                .transpose()?,
            fare: values.optional_number(fields::FARE, "Fare")?,
            available_seats: values.optional_number(fields::AVAILABLE_SEATS, "Available Seats")?,
        })
    }

    /// Form values pre-populated from an existing schedule.
    pub fn form_values(schedule: &Schedule) -> FormValues {
        FormValues::new()
            .with(
                fields::DEPARTURE_TIME,
                time::to_local_input(&schedule.departure_time),
            )
            .with(
                fields::ARRIVAL_TIME,
                time::to_local_input(&schedule.arrival_time),
            )
            .with(fields::FARE, schedule.fare.to_string())
            .with(fields::AVAILABLE_SEATS, schedule.available_seats.to_string())
    }

    /// Whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Confirmation returned by the backend after an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
}
