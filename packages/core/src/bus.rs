//! Bus domain types.

use serde::{Deserialize, Serialize};

use crate::form::{FormError, FormValues, fields};

/// Backend-assigned identifier for a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusId(pub i64);

impl std::fmt::Display for BusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BusId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A bus as listed by the admin API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    #[serde(rename = "BusID")]
    pub id: BusId,
    #[serde(rename = "RegNumber")]
    pub reg_number: String,
    #[serde(rename = "Capacity")]
    pub capacity: u32,
    #[serde(rename = "BusType")]
    pub bus_type: String,
}

impl Bus {
    /// Display label, e.g. `MH01AB1234 (AC)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.reg_number, self.bus_type)
    }

    /// Capacity line, e.g. `40 Seats`.
    pub fn seats_label(&self) -> String {
        format!("{} Seats", self.capacity)
    }
}

/// Payload for creating a bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBus {
    pub reg_number: String,
    pub capacity: u32,
    pub bus_type: String,
}

impl NewBus {
    /// Build the payload from the bus add-form values.
    pub fn from_form(values: &FormValues) -> Result<Self, FormError> {
        Ok(Self {
            reg_number: values.text(fields::REG_NUMBER),
            capacity: values.number(fields::CAPACITY, "Capacity")?,
            bus_type: values.text(fields::BUS_TYPE),
        })
    }
}
