// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Trip lifecycle states and transition rules.
//!
//! A trip moves Draft → Dispatched → Completed, with Cancelled reachable
//! from both non-terminal states. Completed and Cancelled are terminal.
//! Status transitions are operator-initiated only; the system never advances
//! a trip based on time alone.

use crate::error::DomainError;
use crate::types::{DriverId, TripId, VehicleId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    /// Created and validated, nothing reserved yet.
    Draft,
    /// In active execution; the vehicle and driver are reserved.
    Dispatched,
    /// Finished with a recorded end odometer. Terminal.
    Completed,
    /// Voided. Terminal. Cancellation is a status, not a deletion.
    Cancelled,
}

impl TripStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Dispatched => "Dispatched",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "Draft" => Ok(Self::Draft),
            "Dispatched" => Ok(Self::Dispatched),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus {
                kind: "trip status",
                value: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition to another
    /// state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Display ordering priority: active trips sort before historical ones.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Draft => 1,
            Self::Dispatched => 2,
            Self::Completed => 3,
            Self::Cancelled => 4,
        }
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// Valid transitions are:
    /// - Draft → Dispatched
    /// - Draft → Cancelled
    /// - Dispatched → Completed
    /// - Dispatched → Cancelled
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if the transition is not
    /// allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition out of terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: String::from("cannot transition from terminal state"),
            });
        }

        let valid = match self {
            Self::Draft => matches!(new_status, Self::Dispatched | Self::Cancelled),
            Self::Dispatched => matches!(new_status, Self::Completed | Self::Cancelled),
            Self::Completed | Self::Cancelled => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: String::from("transition not permitted by trip lifecycle rules"),
            })
        }
    }
}

impl FromStr for TripStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated trip-creation input, before an identifier has been assigned.
///
/// This is the normalized payload produced by the API boundary and consumed
/// by `validation::validate_trip_creation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDraft {
    /// Cargo weight in pounds.
    pub cargo_weight: u32,
    /// Free-text origin label.
    pub origin: String,
    /// Free-text destination label.
    pub destination: String,
    /// Odometer snapshot at creation, in miles.
    pub start_odometer: u32,
}

/// A dispatch assignment linking one vehicle and one driver between an
/// origin and a destination.
///
/// Trips are never physically deleted; cancellation is a terminal status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// The trip identifier, assigned at creation.
    pub id: TripId,
    /// Weak reference into the vehicle collection.
    pub vehicle_id: VehicleId,
    /// Weak reference into the driver collection.
    pub driver_id: DriverId,
    /// Cargo weight in pounds. Positive and within the assigned vehicle's
    /// capacity at creation time.
    pub cargo_weight: u32,
    /// Free-text origin label.
    pub origin: String,
    /// Free-text destination label.
    pub destination: String,
    /// Odometer snapshot at creation, in miles.
    pub start_odometer: u32,
    /// Recorded end reading. `None` until completion; once set, strictly
    /// greater than `start_odometer`.
    pub end_odometer: Option<u32>,
    /// Lifecycle status.
    pub status: TripStatus,
}

impl Trip {
    /// Creates a new trip in the [`TripStatus::Draft`] state with no end
    /// odometer.
    #[must_use]
    pub fn new(id: TripId, vehicle_id: VehicleId, driver_id: DriverId, draft: TripDraft) -> Self {
        Self {
            id,
            vehicle_id,
            driver_id,
            cargo_weight: draft.cargo_weight,
            origin: draft.origin,
            destination: draft.destination,
            start_odometer: draft.start_odometer,
            end_odometer: None,
            status: TripStatus::Draft,
        }
    }

    /// Distance covered by the trip in miles, or `None` until completion.
    #[must_use]
    pub fn distance(&self) -> Option<u32> {
        self.end_odometer
            .map(|end| end.saturating_sub(self.start_odometer))
    }
}
