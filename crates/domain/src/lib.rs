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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod driver;
mod error;
mod expense;
mod projection;
mod service_log;
mod trip;
mod types;
mod validation;
mod vehicle;

#[cfg(test)]
mod tests;

pub use driver::{Driver, DriverStatus};
pub use error::DomainError;
pub use expense::{Expense, ExpenseStatus};
pub use projection::{
    DriverExpenseStats, FleetSummary, available_vehicles, driver_expense_stats, eligible_drivers,
    fleet_summary, sort_trips_by_status_priority,
};
pub use service_log::{ServiceCategory, ServiceLog, ServiceStatus};
pub use trip::{Trip, TripDraft, TripStatus};
pub use types::{DriverId, ExpenseId, PlateNumber, ServiceLogId, TripId, VehicleId};
pub use validation::{
    validate_service_log, validate_trip_completion, validate_trip_creation,
    validate_vehicle_registration, validate_vehicle_update,
};
pub use vehicle::{Vehicle, VehicleStatus};
