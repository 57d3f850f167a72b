//! Vehicle record and status.

use super::{FleetDomainError, VehicleId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational status of a vehicle.
///
/// Any status may follow any other; the dispatch desk moves vehicles back to
/// `Available` by hand once a call or repair is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    /// Free to be assigned to a call.
    #[default]
    #[serde(rename = "Available")]
    Available,
    /// Off the road for repairs or servicing.
    #[serde(rename = "In for maintenance")]
    InForMaintenance,
    /// Bound to a call schedule.
    #[serde(rename = "Assigned to Call")]
    AssignedToCall,
}

impl VehicleStatus {
    /// Every status, in the order offered to users.
    pub const ALL: [Self; 3] = [Self::Available, Self::InForMaintenance, Self::AssignedToCall];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::InForMaintenance => "In for maintenance",
            Self::AssignedToCall => "Assigned to Call",
        }
    }
}

impl TryFrom<&str> for VehicleStatus {
    type Error = FleetDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| FleetDomainError::UnknownVehicleStatus(value.to_owned()))
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle in the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    make: String,
    model: String,
    year: i32,
    status: VehicleStatus,
}

impl Vehicle {
    /// Creates an `Available` vehicle.
    #[must_use]
    pub fn new(
        id: VehicleId,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id,
            make: make.into(),
            model: model.into(),
            year,
            status: VehicleStatus::Available,
        }
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the vehicle key.
    #[must_use]
    pub const fn id(&self) -> &VehicleId {
        &self.id
    }

    /// Returns the manufacturer.
    #[must_use]
    pub fn make(&self) -> &str {
        &self.make
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the model year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> VehicleStatus {
        self.status
    }

    /// Returns `true` when the vehicle can take a call.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    /// Replaces the status.
    pub const fn update_status(&mut self, status: VehicleStatus) {
        self.status = status;
    }
}

/// Parses a model year typed into a form.
///
/// # Errors
///
/// Returns [`FleetDomainError::InvalidYear`] when the trimmed input is not an
/// integer.
pub fn parse_year(input: &str) -> Result<i32, FleetDomainError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| FleetDomainError::InvalidYear(input.to_owned()))
}
