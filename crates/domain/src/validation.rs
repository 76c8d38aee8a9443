// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure validation rules consumed before any state mutation.
//!
//! Every function in this module is deterministic and side-effect free. The
//! lifecycle manager calls these before constructing a new state; on error
//! nothing is mutated.

use crate::driver::Driver;
use crate::error::DomainError;
use crate::trip::{Trip, TripDraft};
use crate::types::PlateNumber;
use crate::vehicle::{Vehicle, VehicleStatus};
use time::Date;

/// Validates the preconditions for creating a trip.
///
/// The selectable vehicle/driver sets are already restricted upstream (only
/// available vehicles and eligible drivers are offered), but availability and
/// eligibility are re-checked here so a stale reference cannot bypass
/// validation.
///
/// # Errors
///
/// Returns an error if:
/// - Origin or destination is empty (`MissingField`)
/// - Cargo weight is zero (`InvalidWeight`)
/// - Cargo weight exceeds the vehicle's maximum capacity (`CapacityExceeded`)
/// - The vehicle is not available (`VehicleNotAvailable`)
/// - The driver is off duty, suspended, on a trip, or holds an expired
///   license (`DriverNotEligible`)
pub fn validate_trip_creation(
    draft: &TripDraft,
    vehicle: &Vehicle,
    driver: &Driver,
    today: Date,
) -> Result<(), DomainError> {
    // Rule: route labels must not be empty
    if draft.origin.trim().is_empty() {
        return Err(DomainError::MissingField { field: "origin" });
    }
    if draft.destination.trim().is_empty() {
        return Err(DomainError::MissingField {
            field: "destination",
        });
    }

    // Rule: cargo weight must be positive
    if draft.cargo_weight == 0 {
        return Err(DomainError::InvalidWeight(String::from(
            "Cargo weight must be a positive number",
        )));
    }

    // Rule: cargo must fit the assigned vehicle
    if draft.cargo_weight > vehicle.max_capacity {
        return Err(DomainError::CapacityExceeded {
            cargo_weight: draft.cargo_weight,
            max_capacity: vehicle.max_capacity,
            vehicle: vehicle.name_model.clone(),
        });
    }

    // Defensive re-checks: upstream filtering offers only available vehicles
    // and eligible drivers, but a stale selection must not slip through.
    if !vehicle.is_available() {
        return Err(DomainError::VehicleNotAvailable {
            vehicle_id: vehicle.id.to_string(),
            status: vehicle.status.to_string(),
        });
    }
    if let Some(reason) = driver.ineligibility_reason(today) {
        return Err(DomainError::DriverNotEligible {
            driver_id: driver.id.to_string(),
            reason,
        });
    }

    Ok(())
}

/// Validates the end odometer reading for completing a trip.
///
/// # Errors
///
/// Returns `DomainError::InvalidOdometer` unless the reading is strictly
/// greater than the trip's start odometer.
pub fn validate_trip_completion(trip: &Trip, end_odometer: u32) -> Result<u32, DomainError> {
    if end_odometer <= trip.start_odometer {
        return Err(DomainError::InvalidOdometer(format!(
            "End odometer must be greater than start odometer ({} mi)",
            trip.start_odometer
        )));
    }
    Ok(end_odometer)
}

/// Validates a new vehicle registration.
///
/// # Errors
///
/// Returns an error if:
/// - The name/model or plate is empty (`MissingField`)
/// - The capacity is zero (`InvalidWeight`)
/// - The plate already exists among non-retired vehicles (`DuplicatePlate`)
pub fn validate_vehicle_registration(
    name_model: &str,
    plate_number: &PlateNumber,
    max_capacity: u32,
    existing: &[Vehicle],
) -> Result<(), DomainError> {
    if name_model.trim().is_empty() {
        return Err(DomainError::MissingField {
            field: "name/model",
        });
    }
    if plate_number.is_empty() {
        return Err(DomainError::MissingField {
            field: "plate number",
        });
    }
    if max_capacity == 0 {
        return Err(DomainError::InvalidWeight(String::from(
            "Max capacity must be a positive number",
        )));
    }

    // Rule: plates are unique among non-retired vehicles. A retired vehicle
    // releases its plate back to the pool.
    let duplicate = existing
        .iter()
        .any(|v| v.status != VehicleStatus::Retired && v.plate_number == *plate_number);
    if duplicate {
        return Err(DomainError::DuplicatePlate {
            plate: plate_number.value().to_string(),
        });
    }

    Ok(())
}

/// Validates an update to an existing vehicle.
///
/// The plate is immutable after registration, so it is not re-validated here.
///
/// # Errors
///
/// Returns an error if:
/// - The name/model is empty (`MissingField`)
/// - The capacity is zero (`InvalidWeight`)
/// - The new odometer reading is lower than the current one
///   (`InvalidOdometer`; odometer readings never decrease)
pub fn validate_vehicle_update(
    vehicle: &Vehicle,
    name_model: &str,
    max_capacity: u32,
    odometer: u32,
) -> Result<(), DomainError> {
    if name_model.trim().is_empty() {
        return Err(DomainError::MissingField {
            field: "name/model",
        });
    }
    if max_capacity == 0 {
        return Err(DomainError::InvalidWeight(String::from(
            "Max capacity must be a positive number",
        )));
    }
    if odometer < vehicle.odometer {
        return Err(DomainError::InvalidOdometer(format!(
            "Odometer cannot be decreased. Current reading is {} mi",
            vehicle.odometer
        )));
    }
    Ok(())
}

/// Validates the preconditions for opening a service log.
///
/// # Errors
///
/// Returns an error if:
/// - The service type is empty (`MissingField`)
/// - The vehicle is out on a trip (`VehicleNotAvailable`); a vehicle cannot
///   enter the shop mid-trip
pub fn validate_service_log(service_type: &str, vehicle: &Vehicle) -> Result<(), DomainError> {
    if service_type.trim().is_empty() {
        return Err(DomainError::MissingField {
            field: "service type",
        });
    }
    if vehicle.status == VehicleStatus::OnTrip {
        return Err(DomainError::VehicleNotAvailable {
            vehicle_id: vehicle.id.to_string(),
            status: vehicle.status.to_string(),
        });
    }
    Ok(())
}
