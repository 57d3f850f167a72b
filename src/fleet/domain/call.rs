//! Customer call schedules and job categories.

use super::{CallId, FleetDomainError, VehicleId};
use crate::inventory::domain::KitType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Service category requested by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    /// Furnace and boiler work.
    #[serde(rename = "Heating")]
    Heating,
    /// Air conditioning work.
    #[serde(rename = "AC")]
    Ac,
    /// General plumbing.
    #[serde(rename = "Plumbing")]
    Plumbing,
    /// Drain and sewer clearing.
    #[serde(rename = "Drain/Sewer")]
    DrainSewer,
    /// Electrical work.
    #[serde(rename = "Electrical")]
    Electrical,
}

impl JobType {
    /// Every job type, in the order offered to users.
    pub const ALL: [Self; 5] = [
        Self::Heating,
        Self::Ac,
        Self::Plumbing,
        Self::DrainSewer,
        Self::Electrical,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heating => "Heating",
            Self::Ac => "AC",
            Self::Plumbing => "Plumbing",
            Self::DrainSewer => "Drain/Sewer",
            Self::Electrical => "Electrical",
        }
    }

    /// Returns the service kit a technician takes for this kind of job.
    #[must_use]
    pub const fn kit(self) -> KitType {
        match self {
            Self::Heating => KitType::Heating,
            Self::Ac => KitType::Ac,
            Self::Plumbing => KitType::Plumbing,
            Self::DrainSewer => KitType::DrainSewer,
            Self::Electrical => KitType::Electrical,
        }
    }
}

impl TryFrom<&str> for JobType {
    type Error = FleetDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|job_type| job_type.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| FleetDomainError::UnknownJobType(value.to_owned()))
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled customer call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSchedule {
    id: CallId,
    customer_name: String,
    date: String,
    time: String,
    job_type: Option<JobType>,
    vehicle_id: Option<VehicleId>,
}

impl CallSchedule {
    /// Creates an unassigned call without a job type.
    #[must_use]
    pub fn new(
        id: CallId,
        customer_name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            date: date.into(),
            time: time.into(),
            job_type: None,
            vehicle_id: None,
        }
    }

    /// Sets the job type.
    #[must_use]
    pub const fn with_job_type(mut self, job_type: JobType) -> Self {
        self.job_type = Some(job_type);
        self
    }

    /// Sets the assigned vehicle.
    #[must_use]
    pub fn with_vehicle(mut self, vehicle_id: VehicleId) -> Self {
        self.vehicle_id = Some(vehicle_id);
        self
    }

    /// Returns the call key.
    #[must_use]
    pub const fn id(&self) -> &CallId {
        &self.id
    }

    /// Returns the customer name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the call date as entered.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the call time as entered.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the job type, if recorded.
    #[must_use]
    pub const fn job_type(&self) -> Option<JobType> {
        self.job_type
    }

    /// Returns the assigned vehicle, if any.
    #[must_use]
    pub const fn vehicle_id(&self) -> Option<&VehicleId> {
        self.vehicle_id.as_ref()
    }

    /// Assigns a vehicle, replacing any earlier assignment.
    pub fn assign_vehicle(&mut self, vehicle_id: VehicleId) {
        self.vehicle_id = Some(vehicle_id);
    }
}
