// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_dispatch_domain::{DriverId, PlateNumber, ServiceCategory, ServiceLogId, TripId, VehicleId};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. Every status field on
/// a vehicle or driver is written exclusively by applying one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a trip in the Draft state. No vehicle or driver is mutated.
    CreateTrip {
        /// The vehicle to assign.
        vehicle_id: VehicleId,
        /// The driver to assign.
        driver_id: DriverId,
        /// Cargo weight in pounds.
        cargo_weight: u32,
        /// Free-text origin label.
        origin: String,
        /// Free-text destination label.
        destination: String,
        /// Odometer snapshot at creation, in miles.
        start_odometer: u32,
    },
    /// Move a Draft trip into execution, reserving its vehicle and driver.
    DispatchTrip {
        /// The trip to dispatch.
        trip_id: TripId,
    },
    /// Complete a Dispatched trip, recording the end odometer and releasing
    /// the vehicle and driver.
    CompleteTrip {
        /// The trip to complete.
        trip_id: TripId,
        /// End odometer reading in miles. Must be strictly greater than the
        /// trip's start odometer.
        end_odometer: u32,
    },
    /// Cancel a Draft or Dispatched trip. Cancelling a Dispatched trip
    /// releases its reservation.
    CancelTrip {
        /// The trip to cancel.
        trip_id: TripId,
    },
    /// Register a new vehicle in the Available state.
    RegisterVehicle {
        /// Display name, e.g. "Scania R500".
        name_model: String,
        /// License plate, unique among non-retired vehicles.
        plate_number: PlateNumber,
        /// Maximum cargo capacity in pounds.
        max_capacity: u32,
        /// Current odometer reading in miles.
        odometer: u32,
    },
    /// Update an existing vehicle. The plate is immutable.
    UpdateVehicle {
        /// The vehicle to update.
        vehicle_id: VehicleId,
        /// New display name.
        name_model: String,
        /// New maximum capacity in pounds.
        max_capacity: u32,
        /// New odometer reading. May not decrease.
        odometer: u32,
    },
    /// Toggle a vehicle between Available and Retired.
    ToggleVehicleRetired {
        /// The vehicle to toggle.
        vehicle_id: VehicleId,
    },
    /// Open a maintenance service log, moving an Available vehicle into the
    /// shop.
    CreateServiceLog {
        /// The vehicle being serviced.
        vehicle_id: VehicleId,
        /// Short description of the work.
        service_type: String,
        /// Preventative or reactive classification.
        category: ServiceCategory,
        /// Free-text detail.
        description: String,
        /// Cost in whole currency units.
        cost: u32,
    },
    /// Complete an open service log, releasing the vehicle from the shop once
    /// no other open log holds it.
    CompleteServiceLog {
        /// The log to complete.
        log_id: ServiceLogId,
    },
    /// Log an expense against a dispatched or completed trip.
    LogExpense {
        /// The trip the expense belongs to.
        trip_id: TripId,
        /// Fuel cost in whole currency units.
        fuel_cost: u32,
        /// Miscellaneous cost in whole currency units.
        misc_expense: u32,
    },
}
