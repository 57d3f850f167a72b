//! The fixed set of service kits.

use super::InventoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five service kits a technician takes on a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KitType {
    /// Kit for heating jobs.
    #[serde(rename = "Heating Service Kit")]
    Heating,
    /// Kit for air conditioning jobs.
    #[serde(rename = "AC Service Kit")]
    Ac,
    /// Kit for plumbing jobs.
    #[serde(rename = "Plumbing Service Kit")]
    Plumbing,
    /// Kit for drain and sewer jobs.
    #[serde(rename = "Drain/Sewer Service Kit")]
    DrainSewer,
    /// Kit for electrical jobs.
    #[serde(rename = "Electrical Service Kit")]
    Electrical,
}

impl KitType {
    /// Every kit type. The set is closed.
    pub const ALL: [Self; 5] = [
        Self::Heating,
        Self::Ac,
        Self::Plumbing,
        Self::DrainSewer,
        Self::Electrical,
    ];

    /// Returns the item name shown to users and stored in the `inventory`
    /// table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heating => "Heating Service Kit",
            Self::Ac => "AC Service Kit",
            Self::Plumbing => "Plumbing Service Kit",
            Self::DrainSewer => "Drain/Sewer Service Kit",
            Self::Electrical => "Electrical Service Kit",
        }
    }
}

impl TryFrom<&str> for KitType {
    type Error = InventoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kit| kit.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| InventoryError::UnknownKit(value.to_owned()))
    }
}

impl fmt::Display for KitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
