// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only projections over the entity collections.
//!
//! These functions are pure derivations recomputed on every read. Nothing
//! here caches or mutates; presentation surfaces call them through the store.

use crate::driver::Driver;
use crate::expense::Expense;
use crate::trip::Trip;
use crate::types::DriverId;
use crate::vehicle::{Vehicle, VehicleStatus};
use serde::{Deserialize, Serialize};
use time::Date;

/// All vehicles currently available for assignment.
#[must_use]
pub fn available_vehicles(vehicles: &[Vehicle]) -> Vec<&Vehicle> {
    vehicles.iter().filter(|v| v.is_available()).collect()
}

/// All drivers eligible for a new assignment: on duty with a license that
/// expires strictly after `today`.
#[must_use]
pub fn eligible_drivers(drivers: &[Driver], today: Date) -> Vec<&Driver> {
    drivers.iter().filter(|d| d.is_eligible(today)).collect()
}

/// Trips sorted for display: Draft, then Dispatched, then Completed, then
/// Cancelled. The sort is stable, so ties preserve original relative order.
#[must_use]
pub fn sort_trips_by_status_priority(trips: &[Trip]) -> Vec<Trip> {
    let mut sorted: Vec<Trip> = trips.to_vec();
    sorted.sort_by_key(|t| t.status.priority());
    sorted
}

/// Headline figures for the fleet dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    /// Total registered vehicles.
    pub total: usize,
    /// Vehicles available for assignment.
    pub available: usize,
    /// Vehicles out on a trip.
    pub on_trip: usize,
    /// Vehicles in the shop.
    pub in_maintenance: usize,
    /// Retired vehicles.
    pub retired: usize,
    /// Combined capacity of available vehicles, in pounds.
    pub available_capacity: u64,
    /// Percentage of the non-retired fleet currently out on a trip.
    pub utilization_pct: f64,
}

/// Computes the fleet dashboard summary.
#[must_use]
pub fn fleet_summary(vehicles: &[Vehicle]) -> FleetSummary {
    let total = vehicles.len();
    let available = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Available)
        .count();
    let on_trip = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::OnTrip)
        .count();
    let in_maintenance = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Maintenance)
        .count();
    let retired = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Retired)
        .count();
    let available_capacity: u64 = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Available)
        .map(|v| u64::from(v.max_capacity))
        .sum();

    let non_retired = total - retired;
    let utilization_pct = if non_retired == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let pct = (on_trip as f64 / non_retired as f64) * 100.0;
        pct
    };

    FleetSummary {
        total,
        available,
        on_trip,
        in_maintenance,
        retired,
        available_capacity,
        utilization_pct,
    }
}

/// Aggregated expense figures for one driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverExpenseStats {
    /// Sum of fuel and miscellaneous costs across all records.
    pub total_spend: u64,
    /// Average spend per expense record, rounded down. Zero when there are
    /// no records.
    pub avg_per_trip: u64,
    /// Number of expense records.
    pub count: usize,
}

/// Aggregates expenses attributed to the given driver.
#[must_use]
pub fn driver_expense_stats(expenses: &[Expense], driver_id: &DriverId) -> DriverExpenseStats {
    let records: Vec<&Expense> = expenses
        .iter()
        .filter(|e| e.driver_id == *driver_id)
        .collect();

    if records.is_empty() {
        return DriverExpenseStats {
            total_spend: 0,
            avg_per_trip: 0,
            count: 0,
        };
    }

    let total_spend: u64 = records.iter().map(|e| e.total()).sum();
    let count = records.len();

    DriverExpenseStats {
        total_spend,
        avg_per_trip: total_spend / count as u64,
        count,
    }
}
