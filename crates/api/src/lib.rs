// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod demo;
mod error;
mod handlers;
mod input;
mod request_response;

#[cfg(test)]
mod tests;

pub use demo::{DemoConfig, generate_state};
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_store_error};
pub use handlers::{
    cancel_trip, complete_service_log, complete_trip, create_service_log, create_trip,
    dispatch_trip, get_driver_expense_stats, get_fleet_summary, list_available_vehicles,
    list_drivers, list_eligible_drivers, list_expenses, list_service_logs, list_trips,
    list_vehicles, log_expense, register_vehicle, toggle_vehicle_retired, update_vehicle,
};
pub use input::InputError;
pub use request_response::{
    CancelTripRequest, CancelTripResponse, CompleteServiceLogRequest, CompleteServiceLogResponse,
    CompleteTripRequest, CompleteTripResponse, CreateServiceLogRequest, CreateServiceLogResponse,
    CreateTripRequest, CreateTripResponse, DispatchTripRequest, DispatchTripResponse,
    DriverExpenseStatsRequest, DriverInfo, ExpenseInfo, ListDriversResponse, ListExpensesResponse,
    ListServiceLogsResponse, ListTripsResponse, ListVehiclesResponse, LogExpenseRequest,
    LogExpenseResponse, RegisterVehicleRequest, RegisterVehicleResponse, ServiceLogInfo,
    ToggleVehicleRetiredRequest, ToggleVehicleRetiredResponse, TripInfo, UpdateVehicleRequest,
    UpdateVehicleResponse, VehicleInfo,
};
