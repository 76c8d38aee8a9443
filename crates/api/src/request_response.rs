// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry every field as the raw string a form submitted; the
//! handlers coerce and validate. Responses are serializable views distinct
//! from the domain types.

use fleet_dispatch_domain::{Driver, Expense, ServiceLog, Trip, Vehicle};
use time::Date;

/// API request to create a new trip. All fields are raw form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTripRequest {
    /// The selected vehicle identifier.
    pub vehicle_id: String,
    /// The selected driver identifier.
    pub driver_id: String,
    /// Cargo weight in pounds.
    pub cargo_weight: String,
    /// Free-text origin label.
    pub origin: String,
    /// Free-text destination label.
    pub destination: String,
    /// Starting odometer reading in miles.
    pub start_odometer: String,
}

/// API response for a successful trip creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTripResponse {
    /// The generated trip identifier.
    pub trip_id: String,
    /// The trip status ("Draft").
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API request to dispatch a draft trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTripRequest {
    /// The trip identifier.
    pub trip_id: String,
}

/// API response for a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DispatchTripResponse {
    /// The trip identifier.
    pub trip_id: String,
    /// The reserved vehicle identifier.
    pub vehicle_id: String,
    /// The reserved driver identifier.
    pub driver_id: String,
    /// A success message.
    pub message: String,
}

/// API request to complete a dispatched trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTripRequest {
    /// The trip identifier.
    pub trip_id: String,
    /// The end odometer reading, raw form input.
    pub end_odometer: String,
}

/// API response for a successful completion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompleteTripResponse {
    /// The trip identifier.
    pub trip_id: String,
    /// The recorded end odometer reading in miles.
    pub end_odometer: u32,
    /// The distance covered in miles.
    pub distance: u32,
    /// A success message.
    pub message: String,
}

/// API request to cancel a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelTripRequest {
    /// The trip identifier.
    pub trip_id: String,
}

/// API response for a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelTripResponse {
    /// The trip identifier.
    pub trip_id: String,
    /// A success message.
    pub message: String,
}

/// API request to register a new vehicle. All fields are raw form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterVehicleRequest {
    /// Display name, e.g. "Scania R500".
    pub name_model: String,
    /// License plate.
    pub plate_number: String,
    /// Maximum capacity in pounds.
    pub max_capacity: String,
    /// Current odometer reading in miles.
    pub odometer: String,
}

/// API response for a successful vehicle registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterVehicleResponse {
    /// The generated vehicle identifier.
    pub vehicle_id: String,
    /// The normalized plate.
    pub plate_number: String,
    /// A success message.
    pub message: String,
}

/// API request to update an existing vehicle. The plate is immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateVehicleRequest {
    /// The vehicle identifier.
    pub vehicle_id: String,
    /// New display name.
    pub name_model: String,
    /// New maximum capacity in pounds.
    pub max_capacity: String,
    /// New odometer reading in miles.
    pub odometer: String,
}

/// API response for a successful vehicle update.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateVehicleResponse {
    /// The vehicle identifier.
    pub vehicle_id: String,
    /// A success message.
    pub message: String,
}

/// API request to toggle a vehicle between Available and Retired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleVehicleRetiredRequest {
    /// The vehicle identifier.
    pub vehicle_id: String,
}

/// API response for a successful retire/reactivate toggle.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleVehicleRetiredResponse {
    /// The vehicle identifier.
    pub vehicle_id: String,
    /// The vehicle's new status.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API request to open a maintenance service log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateServiceLogRequest {
    /// The vehicle identifier.
    pub vehicle_id: String,
    /// Short description of the work.
    pub service_type: String,
    /// "Preventative" or "Reactive".
    pub category: String,
    /// Free-text detail. May be empty.
    pub description: String,
    /// Cost in whole currency units.
    pub cost: String,
}

/// API response for a successfully opened service log.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateServiceLogResponse {
    /// The generated log identifier.
    pub log_id: String,
    /// The vehicle identifier.
    pub vehicle_id: String,
    /// A success message.
    pub message: String,
}

/// API request to complete an open service log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteServiceLogRequest {
    /// The log identifier.
    pub log_id: String,
}

/// API response for a successfully completed service log.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompleteServiceLogResponse {
    /// The log identifier.
    pub log_id: String,
    /// The vehicle identifier.
    pub vehicle_id: String,
    /// A success message.
    pub message: String,
}

/// API request to log an expense against a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogExpenseRequest {
    /// The trip identifier.
    pub trip_id: String,
    /// Fuel cost in whole currency units.
    pub fuel_cost: String,
    /// Miscellaneous cost. Empty means zero.
    pub misc_expense: String,
}

/// API response for a successfully logged expense.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogExpenseResponse {
    /// The generated expense identifier.
    pub expense_id: String,
    /// The trip identifier.
    pub trip_id: String,
    /// Total cost of the record.
    pub total: u64,
    /// A success message.
    pub message: String,
}

/// API request for one driver's expense statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverExpenseStatsRequest {
    /// The driver identifier.
    pub driver_id: String,
}

/// Vehicle information for listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VehicleInfo {
    /// The vehicle identifier.
    pub id: String,
    /// Display name.
    pub name_model: String,
    /// License plate.
    pub plate_number: String,
    /// Maximum capacity in pounds.
    pub max_capacity: u32,
    /// Odometer reading in miles.
    pub odometer: u32,
    /// Current status.
    pub status: String,
}

impl From<&Vehicle> for VehicleInfo {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.to_string(),
            name_model: vehicle.name_model.clone(),
            plate_number: vehicle.plate_number.to_string(),
            max_capacity: vehicle.max_capacity,
            odometer: vehicle.odometer,
            status: vehicle.status.to_string(),
        }
    }
}

/// Driver information for listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DriverInfo {
    /// The driver identifier.
    pub id: String,
    /// The driver's name.
    pub name: String,
    /// Commercial license number.
    pub license_number: String,
    /// License expiry date.
    pub license_expiry: Date,
    /// Current duty status.
    pub status: String,
    /// Completion rate percentage.
    pub completion_rate: u8,
    /// Safety score percentage.
    pub safety_score: u8,
    /// Complaint count.
    pub complaints: u32,
}

impl From<&Driver> for DriverInfo {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id.to_string(),
            name: driver.name.clone(),
            license_number: driver.license_number.clone(),
            license_expiry: driver.license_expiry,
            status: driver.status.to_string(),
            completion_rate: driver.completion_rate,
            safety_score: driver.safety_score,
            complaints: driver.complaints,
        }
    }
}

/// Trip information for listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TripInfo {
    /// The trip identifier.
    pub id: String,
    /// The assigned vehicle identifier.
    pub vehicle_id: String,
    /// The assigned driver identifier.
    pub driver_id: String,
    /// Cargo weight in pounds.
    pub cargo_weight: u32,
    /// Free-text origin label.
    pub origin: String,
    /// Free-text destination label.
    pub destination: String,
    /// Starting odometer reading in miles.
    pub start_odometer: u32,
    /// End odometer reading, if completed.
    pub end_odometer: Option<u32>,
    /// Distance covered, if completed.
    pub distance: Option<u32>,
    /// Lifecycle status.
    pub status: String,
}

impl From<&Trip> for TripInfo {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id.to_string(),
            vehicle_id: trip.vehicle_id.to_string(),
            driver_id: trip.driver_id.to_string(),
            cargo_weight: trip.cargo_weight,
            origin: trip.origin.clone(),
            destination: trip.destination.clone(),
            start_odometer: trip.start_odometer,
            end_odometer: trip.end_odometer,
            distance: trip.distance(),
            status: trip.status.to_string(),
        }
    }
}

/// Service log information for listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServiceLogInfo {
    /// The log identifier.
    pub id: String,
    /// The vehicle identifier.
    pub vehicle_id: String,
    /// Short description of the work.
    pub service_type: String,
    /// Preventative or reactive classification.
    pub category: String,
    /// Free-text detail.
    pub description: String,
    /// Cost in whole currency units.
    pub cost: u32,
    /// Open or completed.
    pub status: String,
    /// Date the log was opened.
    pub date_created: Date,
    /// Date the work was completed, if it was.
    pub date_completed: Option<Date>,
}

impl From<&ServiceLog> for ServiceLogInfo {
    fn from(log: &ServiceLog) -> Self {
        Self {
            id: log.id.to_string(),
            vehicle_id: log.vehicle_id.to_string(),
            service_type: log.service_type.clone(),
            category: log.category.to_string(),
            description: log.description.clone(),
            cost: log.cost,
            status: log.status.to_string(),
            date_created: log.date_created,
            date_completed: log.date_completed,
        }
    }
}

/// Expense information for listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExpenseInfo {
    /// The expense identifier.
    pub id: String,
    /// The trip this expense belongs to.
    pub trip_id: String,
    /// The driver the expense is attributed to.
    pub driver_id: String,
    /// Distance covered in miles.
    pub distance: u32,
    /// Fuel cost in whole currency units.
    pub fuel_cost: u32,
    /// Miscellaneous cost in whole currency units.
    pub misc_expense: u32,
    /// Review status.
    pub status: String,
    /// Date the expense was logged.
    pub date: Date,
}

impl From<&Expense> for ExpenseInfo {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            trip_id: expense.trip_id.to_string(),
            driver_id: expense.driver_id.to_string(),
            distance: expense.distance,
            fuel_cost: expense.fuel_cost,
            misc_expense: expense.misc_expense,
            status: expense.status.to_string(),
            date: expense.date,
        }
    }
}

/// API response listing vehicles.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListVehiclesResponse {
    /// The vehicles.
    pub vehicles: Vec<VehicleInfo>,
}

/// API response listing drivers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListDriversResponse {
    /// The drivers.
    pub drivers: Vec<DriverInfo>,
}

/// API response listing trips.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListTripsResponse {
    /// The trips, sorted active-first.
    pub trips: Vec<TripInfo>,
}

/// API response listing service logs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListServiceLogsResponse {
    /// The service logs, newest first.
    pub service_logs: Vec<ServiceLogInfo>,
}

/// API response listing expenses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListExpensesResponse {
    /// The expense records.
    pub expenses: Vec<ExpenseInfo>,
}
