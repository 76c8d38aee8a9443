// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Driver roster types and assignment eligibility.

use crate::error::DomainError;
use crate::types::DriverId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Duty status of a driver.
///
/// [`Self::OnTrip`] is owned by the trip lifecycle manager; the roster only
/// toggles between the other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverStatus {
    /// On shift and assignable.
    #[serde(rename = "On Duty")]
    OnDuty,
    /// Off shift.
    #[serde(rename = "Off Duty")]
    OffDuty,
    /// Suspended from duty.
    Suspended,
    /// Reserved by a dispatched trip.
    #[serde(rename = "On Trip")]
    OnTrip,
}

impl DriverStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnDuty => "On Duty",
            Self::OffDuty => "Off Duty",
            Self::Suspended => "Suspended",
            Self::OnTrip => "On Trip",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "On Duty" => Ok(Self::OnDuty),
            "Off Duty" => Ok(Self::OffDuty),
            "Suspended" => Ok(Self::Suspended),
            "On Trip" => Ok(Self::OnTrip),
            _ => Err(DomainError::InvalidStatus {
                kind: "driver status",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for DriverStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rostered driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// The driver identifier.
    pub id: DriverId,
    /// The driver's name (informational, not unique).
    pub name: String,
    /// Commercial license number.
    pub license_number: String,
    /// License expiry date. A driver whose license has expired is never
    /// eligible for a new assignment.
    pub license_expiry: Date,
    /// Current duty status.
    pub status: DriverStatus,
    /// Trip completion rate percentage. Informational only.
    pub completion_rate: u8,
    /// Safety score percentage. Informational only.
    pub safety_score: u8,
    /// Complaint count. Informational only.
    pub complaints: u32,
}

impl Driver {
    /// Returns true if the driver may be assigned to a new trip.
    ///
    /// Eligibility requires the driver to be on duty AND hold a license that
    /// expires strictly after `today`.
    #[must_use]
    pub fn is_eligible(&self, today: Date) -> bool {
        matches!(self.status, DriverStatus::OnDuty) && self.license_expiry > today
    }

    /// Explains why the driver is not eligible for assignment.
    ///
    /// Returns `None` when the driver is eligible.
    #[must_use]
    pub fn ineligibility_reason(&self, today: Date) -> Option<String> {
        if !matches!(self.status, DriverStatus::OnDuty) {
            return Some(format!("driver is {}", self.status));
        }
        if self.license_expiry <= today {
            return Some(format!("license expired on {}", self.license_expiry));
        }
        None
    }
}
