// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vehicle registry types.

use crate::error::DomainError;
use crate::types::{PlateNumber, VehicleId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Operational status of a vehicle.
///
/// Status is owned by the trip lifecycle manager: while a trip references a
/// vehicle, no other component may set this field directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    /// Ready for a new assignment.
    Available,
    /// Reserved by a dispatched trip.
    #[serde(rename = "On Trip")]
    OnTrip,
    /// In the shop for service. An open service log holds the vehicle here.
    /// Older persisted datasets call this "In Shop".
    #[serde(alias = "In Shop")]
    Maintenance,
    /// Removed from active service. Retired vehicles do not participate in
    /// plate uniqueness and cannot be assigned.
    Retired,
}

impl VehicleStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::OnTrip => "On Trip",
            Self::Maintenance => "Maintenance",
            Self::Retired => "Retired",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// Accepts the legacy alias `"In Shop"` for [`Self::Maintenance`], which
    /// appears in older persisted datasets.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "Available" => Ok(Self::Available),
            "On Trip" => Ok(Self::OnTrip),
            "Maintenance" | "In Shop" => Ok(Self::Maintenance),
            "Retired" => Ok(Self::Retired),
            _ => Err(DomainError::InvalidStatus {
                kind: "vehicle status",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered fleet vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// The vehicle identifier.
    pub id: VehicleId,
    /// Display name, e.g. "Volvo FH16".
    pub name_model: String,
    /// License plate, unique among non-retired vehicles.
    pub plate_number: PlateNumber,
    /// Maximum cargo capacity in pounds. Always positive.
    pub max_capacity: u32,
    /// Odometer reading in miles. Monotonically non-decreasing over the
    /// vehicle's lifetime.
    pub odometer: u32,
    /// Current operational status.
    pub status: VehicleStatus,
}

impl Vehicle {
    /// Creates a new vehicle in the [`VehicleStatus::Available`] state.
    #[must_use]
    pub const fn new(
        id: VehicleId,
        name_model: String,
        plate_number: PlateNumber,
        max_capacity: u32,
        odometer: u32,
    ) -> Self {
        Self {
            id,
            name_model,
            plate_number,
            max_capacity,
            odometer,
            status: VehicleStatus::Available,
        }
    }

    /// Returns true if the vehicle can be assigned to a new trip.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.status, VehicleStatus::Available)
    }
}
