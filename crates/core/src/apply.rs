// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::id::IdProvider;
use crate::state::{State, TransitionEvent, TransitionResult};
use fleet_dispatch_domain::{
    DomainError, DriverStatus, Expense, ExpenseStatus, ServiceLog, ServiceStatus, Trip, TripDraft,
    TripStatus, Vehicle, VehicleStatus, validate_service_log, validate_trip_completion,
    validate_trip_creation, validate_vehicle_registration, validate_vehicle_update,
};
use time::Date;

/// Applies a command to the current state, producing a new state and a
/// transition event.
///
/// This function is the single point of truth for cross-entity consistency:
/// a trip's Dispatched status and its vehicle's/driver's "On Trip" status
/// must never diverge, and centralizing every transition here is what
/// prevents an orphaned "On Trip" vehicle whose trip was cancelled without a
/// release.
///
/// Transitions are atomic. The input state is never mutated; on success a
/// fresh state is returned, on error the caller keeps the old one untouched.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `today` - The current date, used for driver eligibility and datestamps
/// * `ids` - The injected identifier provider
///
/// # Errors
///
/// Returns an error if the command violates domain rules, references an
/// entity that does not exist, or requests a transition that is not permitted
/// from the entity's current status.
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &State,
    command: Command,
    today: Date,
    ids: &mut dyn IdProvider,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateTrip {
            vehicle_id,
            driver_id,
            cargo_weight,
            origin,
            destination,
            start_odometer,
        } => {
            let vehicle: &Vehicle = state.find_vehicle(&vehicle_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::VehicleNotFound(vehicle_id.to_string()))
            })?;
            let driver = state.find_driver(&driver_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::DriverNotFound(driver_id.to_string()))
            })?;

            let details = format!("Created draft trip from {origin} to {destination}");
            let draft = TripDraft {
                cargo_weight,
                origin,
                destination,
                start_odometer,
            };
            validate_trip_creation(&draft, vehicle, driver, today)?;

            // Creation reserves nothing: the vehicle and driver are only
            // mutated at dispatch time.
            let trip_id = ids.next_trip_id();
            let trip = Trip::new(trip_id.clone(), vehicle_id, driver_id, draft);

            let mut new_state: State = state.clone();
            new_state.trips.push(trip);

            let event = TransitionEvent::new(
                String::from("CreateTrip"),
                trip_id.value().to_string(),
                Some(details),
            );

            Ok(TransitionResult { new_state, event })
        }
        Command::DispatchTrip { trip_id } => {
            let trip = state.find_trip(&trip_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::TripNotFound(trip_id.to_string()))
            })?;
            trip.status.validate_transition(TripStatus::Dispatched)?;

            let vehicle = state.find_vehicle(&trip.vehicle_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::VehicleNotFound(
                    trip.vehicle_id.to_string(),
                ))
            })?;
            let driver = state.find_driver(&trip.driver_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::DriverNotFound(trip.driver_id.to_string()))
            })?;

            // Re-check at dispatch time: another trip may have reserved the
            // vehicle or driver since this draft was created.
            if !vehicle.is_available() {
                return Err(CoreError::DomainViolation(
                    DomainError::VehicleNotAvailable {
                        vehicle_id: vehicle.id.to_string(),
                        status: vehicle.status.to_string(),
                    },
                ));
            }
            if let Some(reason) = driver.ineligibility_reason(today) {
                return Err(CoreError::DomainViolation(DomainError::DriverNotEligible {
                    driver_id: driver.id.to_string(),
                    reason,
                }));
            }

            let vehicle_id = trip.vehicle_id.clone();
            let driver_id = trip.driver_id.clone();

            let mut new_state: State = state.clone();
            if let Some(t) = new_state.find_trip_mut(&trip_id) {
                t.status = TripStatus::Dispatched;
            }
            if let Some(v) = new_state.find_vehicle_mut(&vehicle_id) {
                v.status = VehicleStatus::OnTrip;
            }
            if let Some(d) = new_state.find_driver_mut(&driver_id) {
                d.status = DriverStatus::OnTrip;
            }

            let event = TransitionEvent::new(
                String::from("DispatchTrip"),
                trip_id.value().to_string(),
                Some(format!(
                    "Dispatched with vehicle {vehicle_id} and driver {driver_id}"
                )),
            );

            Ok(TransitionResult { new_state, event })
        }
        Command::CompleteTrip {
            trip_id,
            end_odometer,
        } => {
            let trip = state.find_trip(&trip_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::TripNotFound(trip_id.to_string()))
            })?;
            trip.status.validate_transition(TripStatus::Completed)?;
            let end = validate_trip_completion(trip, end_odometer)?;

            let vehicle_id = trip.vehicle_id.clone();
            let driver_id = trip.driver_id.clone();
            let distance = end - trip.start_odometer;

            let mut new_state: State = state.clone();
            if let Some(t) = new_state.find_trip_mut(&trip_id) {
                t.status = TripStatus::Completed;
                t.end_odometer = Some(end);
            }
            // Release the reservation. The references are weak, so a dangling
            // vehicle or driver is skipped rather than treated as an error.
            if let Some(v) = new_state.find_vehicle_mut(&vehicle_id) {
                v.status = VehicleStatus::Available;
                // The registry odometer never decreases; advance it to the
                // recorded end reading if that is ahead.
                v.odometer = v.odometer.max(end);
            }
            if let Some(d) = new_state.find_driver_mut(&driver_id) {
                d.status = DriverStatus::OnDuty;
            }

            let event = TransitionEvent::new(
                String::from("CompleteTrip"),
                trip_id.value().to_string(),
                Some(format!("Completed at {end} mi ({distance} mi covered)")),
            );

            Ok(TransitionResult { new_state, event })
        }
        Command::CancelTrip { trip_id } => {
            let trip = state.find_trip(&trip_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::TripNotFound(trip_id.to_string()))
            })?;
            trip.status.validate_transition(TripStatus::Cancelled)?;

            let was_dispatched = trip.status == TripStatus::Dispatched;
            let vehicle_id = trip.vehicle_id.clone();
            let driver_id = trip.driver_id.clone();

            let mut new_state: State = state.clone();
            if let Some(t) = new_state.find_trip_mut(&trip_id) {
                t.status = TripStatus::Cancelled;
            }
            // A Draft trip reserved nothing, so there is nothing to release.
            if was_dispatched {
                if let Some(v) = new_state.find_vehicle_mut(&vehicle_id) {
                    v.status = VehicleStatus::Available;
                }
                if let Some(d) = new_state.find_driver_mut(&driver_id) {
                    d.status = DriverStatus::OnDuty;
                }
            }

            let details = if was_dispatched {
                format!("Cancelled and released vehicle {vehicle_id} and driver {driver_id}")
            } else {
                String::from("Cancelled before dispatch")
            };
            let event = TransitionEvent::new(
                String::from("CancelTrip"),
                trip_id.value().to_string(),
                Some(details),
            );

            Ok(TransitionResult { new_state, event })
        }
        Command::RegisterVehicle {
            name_model,
            plate_number,
            max_capacity,
            odometer,
        } => {
            validate_vehicle_registration(&name_model, &plate_number, max_capacity, &state.vehicles)?;

            let vehicle_id = ids.next_vehicle_id();
            let details = format!("Registered {name_model} with plate {plate_number}");
            let vehicle = Vehicle::new(
                vehicle_id.clone(),
                name_model,
                plate_number,
                max_capacity,
                odometer,
            );

            let mut new_state: State = state.clone();
            new_state.vehicles.push(vehicle);

            let event = TransitionEvent::new(
                String::from("RegisterVehicle"),
                vehicle_id.value().to_string(),
                Some(details),
            );

            Ok(TransitionResult { new_state, event })
        }
        Command::UpdateVehicle {
            vehicle_id,
            name_model,
            max_capacity,
            odometer,
        } => {
            let vehicle = state.find_vehicle(&vehicle_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::VehicleNotFound(vehicle_id.to_string()))
            })?;
            validate_vehicle_update(vehicle, &name_model, max_capacity, odometer)?;

            let mut new_state: State = state.clone();
            if let Some(v) = new_state.find_vehicle_mut(&vehicle_id) {
                v.name_model = name_model;
                v.max_capacity = max_capacity;
                v.odometer = odometer;
            }

            let event = TransitionEvent::new(
                String::from("UpdateVehicle"),
                vehicle_id.value().to_string(),
                Some(String::from("Updated vehicle details")),
            );

            Ok(TransitionResult { new_state, event })
        }
        Command::ToggleVehicleRetired { vehicle_id } => {
            let vehicle = state.find_vehicle(&vehicle_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::VehicleNotFound(vehicle_id.to_string()))
            })?;

            let new_status = match vehicle.status {
                VehicleStatus::Available => VehicleStatus::Retired,
                VehicleStatus::Retired => {
                    // Re-activating must not reintroduce a duplicate plate: the
                    // plate may have been reused while this vehicle was retired.
                    let plate_taken = state.vehicles.iter().any(|v| {
                        v.id != vehicle.id
                            && v.status != VehicleStatus::Retired
                            && v.plate_number == vehicle.plate_number
                    });
                    if plate_taken {
                        return Err(CoreError::DomainViolation(DomainError::DuplicatePlate {
                            plate: vehicle.plate_number.value().to_string(),
                        }));
                    }
                    VehicleStatus::Available
                }
                VehicleStatus::OnTrip | VehicleStatus::Maintenance => {
                    return Err(CoreError::DomainViolation(
                        DomainError::VehicleNotAvailable {
                            vehicle_id: vehicle.id.to_string(),
                            status: vehicle.status.to_string(),
                        },
                    ));
                }
            };

            let mut new_state: State = state.clone();
            if let Some(v) = new_state.find_vehicle_mut(&vehicle_id) {
                v.status = new_status;
            }

            let event = TransitionEvent::new(
                String::from("ToggleVehicleRetired"),
                vehicle_id.value().to_string(),
                Some(format!("Vehicle is now {new_status}")),
            );

            Ok(TransitionResult { new_state, event })
        }
        Command::CreateServiceLog {
            vehicle_id,
            service_type,
            category,
            description,
            cost,
        } => {
            let vehicle = state.find_vehicle(&vehicle_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::VehicleNotFound(vehicle_id.to_string()))
            })?;
            validate_service_log(&service_type, vehicle)?;

            let log_id = ids.next_service_log_id();
            let details = format!("Opened {category} service: {service_type}");
            let log = ServiceLog::new(
                log_id.clone(),
                vehicle_id.clone(),
                service_type,
                category,
                description,
                cost,
                today,
            );

            let mut new_state: State = state.clone();
            new_state.service_logs.push(log);
            // An open log holds an Available vehicle in the shop. Retired
            // vehicles keep their status.
            if let Some(v) = new_state.find_vehicle_mut(&vehicle_id)
                && v.status == VehicleStatus::Available
            {
                v.status = VehicleStatus::Maintenance;
            }

            let event = TransitionEvent::new(
                String::from("CreateServiceLog"),
                log_id.value().to_string(),
                Some(details),
            );

            Ok(TransitionResult { new_state, event })
        }
        Command::CompleteServiceLog { log_id } => {
            let log = state.find_service_log(&log_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::ServiceLogNotFound(log_id.to_string()))
            })?;
            if log.status == ServiceStatus::Completed {
                return Err(CoreError::DomainViolation(DomainError::InvalidTransition {
                    from: log.status.to_string(),
                    to: ServiceStatus::Completed.to_string(),
                    reason: String::from("service log is already completed"),
                }));
            }

            let vehicle_id = log.vehicle_id.clone();

            let mut new_state: State = state.clone();
            if let Some(l) = new_state.find_service_log_mut(&log_id) {
                l.status = ServiceStatus::Completed;
                l.date_completed = Some(today);
            }
            // Release the vehicle from the shop only once no other open log
            // still holds it.
            let still_held = new_state
                .service_logs
                .iter()
                .any(|l| l.vehicle_id == vehicle_id && l.status == ServiceStatus::Open);
            if !still_held
                && let Some(v) = new_state.find_vehicle_mut(&vehicle_id)
                && v.status == VehicleStatus::Maintenance
            {
                v.status = VehicleStatus::Available;
            }

            let event = TransitionEvent::new(
                String::from("CompleteServiceLog"),
                log_id.value().to_string(),
                Some(format!("Completed service on vehicle {vehicle_id}")),
            );

            Ok(TransitionResult { new_state, event })
        }
        Command::LogExpense {
            trip_id,
            fuel_cost,
            misc_expense,
        } => {
            let trip = state.find_trip(&trip_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::TripNotFound(trip_id.to_string()))
            })?;
            // Expenses only make sense for trips that actually ran.
            if matches!(trip.status, TripStatus::Draft | TripStatus::Cancelled) {
                return Err(CoreError::DomainViolation(DomainError::InvalidTransition {
                    from: trip.status.to_string(),
                    to: String::from("Expensed"),
                    reason: String::from(
                        "expenses may only be logged for dispatched or completed trips",
                    ),
                }));
            }

            let expense_id = ids.next_expense_id();
            let expense = Expense {
                id: expense_id.clone(),
                trip_id: trip.id.clone(),
                driver_id: trip.driver_id.clone(),
                distance: trip.distance().unwrap_or(0),
                fuel_cost,
                misc_expense,
                status: ExpenseStatus::Pending,
                date: today,
            };

            let mut new_state: State = state.clone();
            new_state.expenses.push(expense);

            let event = TransitionEvent::new(
                String::from("LogExpense"),
                expense_id.value().to_string(),
                Some(format!("Logged expense against trip {trip_id}")),
            );

            Ok(TransitionResult { new_state, event })
        }
    }
}
