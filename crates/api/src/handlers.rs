// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Each state-changing handler:
//! - coerces the raw form input into typed values
//! - translates the request into a core command
//! - applies the command through the store
//! - translates any errors to API errors
//!
//! On failure nothing is mutated; the error maps to a user-facing message.

use fleet_dispatch::Command;
use fleet_dispatch_domain::{
    DriverExpenseStats, DriverId, FleetSummary, PlateNumber, ServiceCategory, ServiceLogId,
    TripId, TripStatus, VehicleId,
};
use fleet_dispatch_store::{FleetStore, StorageBackend};
use std::str::FromStr;
use time::Date;
use tracing::info;

use crate::error::{ApiError, translate_domain_error, translate_store_error};
use crate::input::{optional_number, required_number, required_positive, required_text};
use crate::request_response::{
    CancelTripRequest, CancelTripResponse, CompleteServiceLogRequest, CompleteServiceLogResponse,
    CompleteTripRequest, CompleteTripResponse, CreateServiceLogRequest, CreateServiceLogResponse,
    CreateTripRequest, CreateTripResponse, DispatchTripRequest, DispatchTripResponse,
    DriverExpenseStatsRequest, ListDriversResponse, ListExpensesResponse, ListServiceLogsResponse,
    ListTripsResponse, ListVehiclesResponse, LogExpenseRequest, LogExpenseResponse,
    RegisterVehicleRequest, RegisterVehicleResponse, ToggleVehicleRetiredRequest,
    ToggleVehicleRetiredResponse, UpdateVehicleRequest, UpdateVehicleResponse,
};

/// Creates a trip in the Draft state.
///
/// # Errors
///
/// Returns an error if a field is missing or malformed, the vehicle or
/// driver does not exist, the cargo exceeds the vehicle's capacity, or the
/// vehicle/driver is not assignable.
pub fn create_trip<B: StorageBackend>(
    store: &mut FleetStore<B>,
    request: CreateTripRequest,
    today: Date,
) -> Result<CreateTripResponse, ApiError> {
    let vehicle_id = required_text("vehicle", &request.vehicle_id)?;
    let driver_id = required_text("driver", &request.driver_id)?;
    let cargo_weight = required_positive("cargo weight", &request.cargo_weight)?;
    let origin = required_text("origin", &request.origin)?;
    let destination = required_text("destination", &request.destination)?;
    let start_odometer = required_number("start odometer", &request.start_odometer)?;

    let command = Command::CreateTrip {
        vehicle_id: VehicleId::new(&vehicle_id),
        driver_id: DriverId::new(&driver_id),
        cargo_weight,
        origin,
        destination,
        start_odometer,
    };
    let event = store.apply(command, today).map_err(translate_store_error)?;
    info!(trip_id = %event.subject, "trip created");

    Ok(CreateTripResponse {
        trip_id: event.subject,
        status: TripStatus::Draft.to_string(),
        message: String::from("Trip created in Draft"),
    })
}

/// Dispatches a draft trip, reserving its vehicle and driver.
///
/// # Errors
///
/// Returns an error if the trip does not exist, is not in Draft, or its
/// vehicle/driver can no longer be reserved.
pub fn dispatch_trip<B: StorageBackend>(
    store: &mut FleetStore<B>,
    request: DispatchTripRequest,
    today: Date,
) -> Result<DispatchTripResponse, ApiError> {
    let trip_id = required_text("trip", &request.trip_id)?;

    let command = Command::DispatchTrip {
        trip_id: TripId::new(&trip_id),
    };
    let event = store.apply(command, today).map_err(translate_store_error)?;
    info!(trip_id = %event.subject, "trip dispatched");

    let trip = store
        .state()
        .find_trip(&TripId::new(&trip_id))
        .ok_or_else(|| ApiError::Internal {
            message: format!("Trip '{trip_id}' vanished after dispatch"),
        })?;

    Ok(DispatchTripResponse {
        trip_id,
        vehicle_id: trip.vehicle_id.to_string(),
        driver_id: trip.driver_id.to_string(),
        message: String::from("Trip dispatched; vehicle and driver reserved"),
    })
}

/// Completes a dispatched trip, recording the end odometer reading.
///
/// # Errors
///
/// Returns an error if the trip does not exist, is not Dispatched, the
/// reading is missing or malformed, or the reading is not greater than the
/// trip's start odometer.
pub fn complete_trip<B: StorageBackend>(
    store: &mut FleetStore<B>,
    request: CompleteTripRequest,
    today: Date,
) -> Result<CompleteTripResponse, ApiError> {
    let trip_id = required_text("trip", &request.trip_id)?;
    let end_odometer = required_number("end odometer", &request.end_odometer)?;

    let command = Command::CompleteTrip {
        trip_id: TripId::new(&trip_id),
        end_odometer,
    };
    let event = store.apply(command, today).map_err(translate_store_error)?;
    info!(trip_id = %event.subject, end_odometer, "trip completed");

    let trip = store
        .state()
        .find_trip(&TripId::new(&trip_id))
        .ok_or_else(|| ApiError::Internal {
            message: format!("Trip '{trip_id}' vanished after completion"),
        })?;

    Ok(CompleteTripResponse {
        trip_id,
        end_odometer,
        distance: trip.distance().unwrap_or(0),
        message: String::from("Trip completed; vehicle and driver released"),
    })
}

/// Cancels a draft or dispatched trip.
///
/// # Errors
///
/// Returns an error if the trip does not exist or is already terminal.
pub fn cancel_trip<B: StorageBackend>(
    store: &mut FleetStore<B>,
    request: CancelTripRequest,
    today: Date,
) -> Result<CancelTripResponse, ApiError> {
    let trip_id = required_text("trip", &request.trip_id)?;

    let command = Command::CancelTrip {
        trip_id: TripId::new(&trip_id),
    };
    let event = store.apply(command, today).map_err(translate_store_error)?;
    info!(trip_id = %event.subject, "trip cancelled");

    Ok(CancelTripResponse {
        trip_id,
        message: String::from("Trip cancelled"),
    })
}

/// Registers a new vehicle in the Available state.
///
/// # Errors
///
/// Returns an error if a field is missing or malformed, or the plate is
/// already in use by a non-retired vehicle.
pub fn register_vehicle<B: StorageBackend>(
    store: &mut FleetStore<B>,
    request: RegisterVehicleRequest,
    today: Date,
) -> Result<RegisterVehicleResponse, ApiError> {
    let name_model = required_text("name/model", &request.name_model)?;
    let plate = required_text("plate number", &request.plate_number)?;
    let max_capacity = required_positive("max capacity", &request.max_capacity)?;
    let odometer = required_number("odometer", &request.odometer)?;

    let plate_number = PlateNumber::new(&plate);
    let command = Command::RegisterVehicle {
        name_model,
        plate_number: plate_number.clone(),
        max_capacity,
        odometer,
    };
    let event = store.apply(command, today).map_err(translate_store_error)?;
    info!(vehicle_id = %event.subject, "vehicle registered");

    Ok(RegisterVehicleResponse {
        vehicle_id: event.subject,
        plate_number: plate_number.value().to_string(),
        message: String::from("Vehicle registered"),
    })
}

/// Updates an existing vehicle's details. The plate is immutable.
///
/// # Errors
///
/// Returns an error if a field is missing or malformed, the vehicle does
/// not exist, or the new odometer reading is lower than the current one.
pub fn update_vehicle<B: StorageBackend>(
    store: &mut FleetStore<B>,
    request: UpdateVehicleRequest,
    today: Date,
) -> Result<UpdateVehicleResponse, ApiError> {
    let vehicle_id = required_text("vehicle", &request.vehicle_id)?;
    let name_model = required_text("name/model", &request.name_model)?;
    let max_capacity = required_positive("max capacity", &request.max_capacity)?;
    let odometer = required_number("odometer", &request.odometer)?;

    let command = Command::UpdateVehicle {
        vehicle_id: VehicleId::new(&vehicle_id),
        name_model,
        max_capacity,
        odometer,
    };
    store.apply(command, today).map_err(translate_store_error)?;

    Ok(UpdateVehicleResponse {
        vehicle_id,
        message: String::from("Vehicle updated"),
    })
}

/// Toggles a vehicle between Available and Retired.
///
/// # Errors
///
/// Returns an error if the vehicle does not exist, is reserved or in the
/// shop, or reactivation would reintroduce a duplicate plate.
pub fn toggle_vehicle_retired<B: StorageBackend>(
    store: &mut FleetStore<B>,
    request: ToggleVehicleRetiredRequest,
    today: Date,
) -> Result<ToggleVehicleRetiredResponse, ApiError> {
    let vehicle_id = required_text("vehicle", &request.vehicle_id)?;

    let command = Command::ToggleVehicleRetired {
        vehicle_id: VehicleId::new(&vehicle_id),
    };
    store.apply(command, today).map_err(translate_store_error)?;

    let vehicle = store
        .state()
        .find_vehicle(&VehicleId::new(&vehicle_id))
        .ok_or_else(|| ApiError::Internal {
            message: format!("Vehicle '{vehicle_id}' vanished after toggle"),
        })?;

    Ok(ToggleVehicleRetiredResponse {
        vehicle_id,
        status: vehicle.status.to_string(),
        message: format!("Vehicle is now {}", vehicle.status),
    })
}

/// Opens a maintenance service log, holding the vehicle in the shop.
///
/// # Errors
///
/// Returns an error if a field is missing or malformed, the category is
/// unknown, the vehicle does not exist, or the vehicle is out on a trip.
pub fn create_service_log<B: StorageBackend>(
    store: &mut FleetStore<B>,
    request: CreateServiceLogRequest,
    today: Date,
) -> Result<CreateServiceLogResponse, ApiError> {
    let vehicle_id = required_text("vehicle", &request.vehicle_id)?;
    let service_type = required_text("service type", &request.service_type)?;
    let category = ServiceCategory::from_str(request.category.trim())
        .map_err(translate_domain_error)?;
    let cost = required_number("cost", &request.cost)?;

    let command = Command::CreateServiceLog {
        vehicle_id: VehicleId::new(&vehicle_id),
        service_type,
        category,
        description: request.description.trim().to_string(),
        cost,
    };
    let event = store.apply(command, today).map_err(translate_store_error)?;
    info!(log_id = %event.subject, vehicle_id = %vehicle_id, "service log opened");

    Ok(CreateServiceLogResponse {
        log_id: event.subject,
        vehicle_id,
        message: String::from("Service log opened"),
    })
}

/// Completes an open service log, releasing the vehicle from the shop once
/// no other open log holds it.
///
/// # Errors
///
/// Returns an error if the log does not exist or is already completed.
pub fn complete_service_log<B: StorageBackend>(
    store: &mut FleetStore<B>,
    request: CompleteServiceLogRequest,
    today: Date,
) -> Result<CompleteServiceLogResponse, ApiError> {
    let log_id = required_text("service log", &request.log_id)?;

    let command = Command::CompleteServiceLog {
        log_id: ServiceLogId::new(&log_id),
    };
    store.apply(command, today).map_err(translate_store_error)?;

    let log = store
        .state()
        .find_service_log(&ServiceLogId::new(&log_id))
        .ok_or_else(|| ApiError::Internal {
            message: format!("Service log '{log_id}' vanished after completion"),
        })?;

    Ok(CompleteServiceLogResponse {
        log_id,
        vehicle_id: log.vehicle_id.to_string(),
        message: String::from("Service log completed"),
    })
}

/// Logs an expense against a dispatched or completed trip.
///
/// # Errors
///
/// Returns an error if a field is malformed, the trip does not exist, or
/// the trip never ran (Draft or Cancelled).
pub fn log_expense<B: StorageBackend>(
    store: &mut FleetStore<B>,
    request: LogExpenseRequest,
    today: Date,
) -> Result<LogExpenseResponse, ApiError> {
    let trip_id = required_text("trip", &request.trip_id)?;
    let fuel_cost = required_number("fuel cost", &request.fuel_cost)?;
    let misc_expense = optional_number("misc expense", &request.misc_expense)?;

    let command = Command::LogExpense {
        trip_id: TripId::new(&trip_id),
        fuel_cost,
        misc_expense,
    };
    let event = store.apply(command, today).map_err(translate_store_error)?;

    Ok(LogExpenseResponse {
        expense_id: event.subject,
        trip_id,
        total: u64::from(fuel_cost) + u64::from(misc_expense),
        message: String::from("Expense logged"),
    })
}

// ---------------------------------------------------------------------------
// Read-only handlers
// ---------------------------------------------------------------------------

/// Lists every registered vehicle.
#[must_use]
pub fn list_vehicles<B: StorageBackend>(store: &FleetStore<B>) -> ListVehiclesResponse {
    ListVehiclesResponse {
        vehicles: store.state().vehicles.iter().map(Into::into).collect(),
    }
}

/// Lists vehicles available for assignment.
#[must_use]
pub fn list_available_vehicles<B: StorageBackend>(store: &FleetStore<B>) -> ListVehiclesResponse {
    ListVehiclesResponse {
        vehicles: store
            .available_vehicles()
            .into_iter()
            .map(Into::into)
            .collect(),
    }
}

/// Lists every rostered driver.
#[must_use]
pub fn list_drivers<B: StorageBackend>(store: &FleetStore<B>) -> ListDriversResponse {
    ListDriversResponse {
        drivers: store.state().drivers.iter().map(Into::into).collect(),
    }
}

/// Lists drivers eligible for a new assignment as of `today`.
#[must_use]
pub fn list_eligible_drivers<B: StorageBackend>(
    store: &FleetStore<B>,
    today: Date,
) -> ListDriversResponse {
    ListDriversResponse {
        drivers: store
            .eligible_drivers(today)
            .into_iter()
            .map(Into::into)
            .collect(),
    }
}

/// Lists trips sorted for display: active first, historical last.
#[must_use]
pub fn list_trips<B: StorageBackend>(store: &FleetStore<B>) -> ListTripsResponse {
    ListTripsResponse {
        trips: store
            .trips_by_status_priority()
            .iter()
            .map(Into::into)
            .collect(),
    }
}

/// Lists maintenance history, newest first.
#[must_use]
pub fn list_service_logs<B: StorageBackend>(store: &FleetStore<B>) -> ListServiceLogsResponse {
    ListServiceLogsResponse {
        service_logs: store.service_logs().into_iter().map(Into::into).collect(),
    }
}

/// Lists every expense record.
#[must_use]
pub fn list_expenses<B: StorageBackend>(store: &FleetStore<B>) -> ListExpensesResponse {
    ListExpensesResponse {
        expenses: store.expenses().iter().map(Into::into).collect(),
    }
}

/// Headline fleet figures for the dashboard.
#[must_use]
pub fn get_fleet_summary<B: StorageBackend>(store: &FleetStore<B>) -> FleetSummary {
    store.fleet_summary()
}

/// Aggregated expense figures for one driver.
///
/// # Errors
///
/// Returns an error if the driver identifier is empty or unknown.
pub fn get_driver_expense_stats<B: StorageBackend>(
    store: &FleetStore<B>,
    request: DriverExpenseStatsRequest,
) -> Result<DriverExpenseStats, ApiError> {
    let driver_id = required_text("driver", &request.driver_id)?;
    let id = DriverId::new(&driver_id);
    if store.state().find_driver(&id).is_none() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Driver"),
            message: format!("Driver '{driver_id}' does not exist"),
        });
    }
    Ok(store.driver_expense_stats(&id))
}
