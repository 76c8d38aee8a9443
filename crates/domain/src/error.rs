// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and lifecycle transitions.
///
/// Every variant is a recoverable, user-facing validation failure. None of
/// them is fatal; callers surface them as display messages and leave entity
/// state unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is absent or empty.
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// Cargo weight or vehicle capacity is not a positive value.
    InvalidWeight(String),
    /// An odometer reading violates monotonicity or is otherwise unusable.
    InvalidOdometer(String),
    /// Cargo weight exceeds the assigned vehicle's maximum capacity.
    CapacityExceeded {
        /// The requested cargo weight in pounds.
        cargo_weight: u32,
        /// The vehicle's maximum capacity in pounds.
        max_capacity: u32,
        /// The vehicle's display name.
        vehicle: String,
    },
    /// A lifecycle transition is not permitted from the current status.
    InvalidTransition {
        /// The status the entity is currently in.
        from: String,
        /// The status the transition would have produced.
        to: String,
        /// Why the transition is not allowed.
        reason: String,
    },
    /// The vehicle is not available for the requested assignment.
    VehicleNotAvailable {
        /// The vehicle identifier.
        vehicle_id: String,
        /// The vehicle's current status.
        status: String,
    },
    /// The driver is not eligible for a new assignment.
    DriverNotEligible {
        /// The driver identifier.
        driver_id: String,
        /// Why the driver is ineligible.
        reason: String,
    },
    /// A license plate already exists among non-retired vehicles.
    DuplicatePlate {
        /// The duplicate plate value.
        plate: String,
    },
    /// A status or category string is not recognized.
    InvalidStatus {
        /// The kind of value being parsed (e.g. "trip status").
        kind: &'static str,
        /// The unrecognized value.
        value: String,
    },
    /// Vehicle does not exist.
    VehicleNotFound(String),
    /// Driver does not exist.
    DriverNotFound(String),
    /// Trip does not exist.
    TripNotFound(String),
    /// Service log does not exist.
    ServiceLogNotFound(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing field: {field} is required"),
            Self::InvalidWeight(msg) => write!(f, "Invalid weight: {msg}"),
            Self::InvalidOdometer(msg) => write!(f, "Invalid odometer: {msg}"),
            Self::CapacityExceeded {
                cargo_weight,
                max_capacity,
                vehicle,
            } => {
                write!(
                    f,
                    "Cargo weight ({cargo_weight} lbs) exceeds max capacity of {vehicle} ({max_capacity} lbs)"
                )
            }
            Self::InvalidTransition { from, to, reason } => {
                write!(f, "Invalid transition from '{from}' to '{to}': {reason}")
            }
            Self::VehicleNotAvailable { vehicle_id, status } => {
                write!(f, "Vehicle {vehicle_id} is not available (status: {status})")
            }
            Self::DriverNotEligible { driver_id, reason } => {
                write!(f, "Driver {driver_id} is not eligible: {reason}")
            }
            Self::DuplicatePlate { plate } => {
                write!(
                    f,
                    "License plate '{plate}' already exists in the registry and must be unique"
                )
            }
            Self::InvalidStatus { kind, value } => {
                write!(f, "Unknown {kind}: '{value}'")
            }
            Self::VehicleNotFound(id) => write!(f, "Vehicle '{id}' not found"),
            Self::DriverNotFound(id) => write!(f, "Driver '{id}' not found"),
            Self::TripNotFound(id) => write!(f, "Trip '{id}' not found"),
            Self::ServiceLogNotFound(id) => write!(f, "Service log '{id}' not found"),
        }
    }
}

impl std::error::Error for DomainError {}
