//! Maintenance entries before and after persistence.

use super::{MaintenanceId, VehicleId};
use serde::{Deserialize, Serialize};

/// A maintenance job entered by the user, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintenance {
    date: String,
    description: String,
    completed: bool,
}

impl Maintenance {
    /// Creates an open maintenance job.
    #[must_use]
    pub fn new(date: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Returns the scheduled date as entered.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the job description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the job is done.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the job as done.
    pub const fn complete_maintenance(&mut self) {
        self.completed = true;
    }
}

/// Parameter object for reconstructing a stored maintenance record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMaintenanceData {
    /// Generated row identifier.
    pub id: MaintenanceId,
    /// Vehicle the job belongs to.
    pub vehicle_id: VehicleId,
    /// Scheduled date as entered.
    pub date: String,
    /// Job description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}

/// A stored maintenance record.
///
/// The vehicle reference is not checked; records outlive removed vehicles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    id: MaintenanceId,
    vehicle_id: VehicleId,
    maintenance: Maintenance,
}

impl MaintenanceRecord {
    /// Binds an unsaved job to its generated identifier and vehicle.
    #[must_use]
    pub const fn new(id: MaintenanceId, vehicle_id: VehicleId, maintenance: Maintenance) -> Self {
        Self {
            id,
            vehicle_id,
            maintenance,
        }
    }

    /// Reconstructs a record from storage.
    #[must_use]
    pub fn from_persisted(data: PersistedMaintenanceData) -> Self {
        Self {
            id: data.id,
            vehicle_id: data.vehicle_id,
            maintenance: Maintenance {
                date: data.date,
                description: data.description,
                completed: data.completed,
            },
        }
    }

    /// Returns the generated identifier.
    #[must_use]
    pub const fn id(&self) -> MaintenanceId {
        self.id
    }

    /// Returns the referenced vehicle key.
    #[must_use]
    pub const fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    /// Returns the job details.
    #[must_use]
    pub const fn maintenance(&self) -> &Maintenance {
        &self.maintenance
    }

    /// Returns the scheduled date as entered.
    #[must_use]
    pub fn date(&self) -> &str {
        self.maintenance.date()
    }

    /// Returns the job description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.maintenance.description()
    }

    /// Returns whether the job is done.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.maintenance.completed
    }

    /// Marks the job as done.
    pub const fn complete_maintenance(&mut self) {
        self.maintenance.completed = true;
    }
}
