// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_dispatch_domain::{
    Driver, DriverId, Expense, ServiceLog, ServiceLogId, Trip, TripId, Vehicle, VehicleId,
};

/// The complete system state: every entity collection the store owns.
///
/// The entity store exclusively owns these collections. The lifecycle manager
/// (`apply`) is the sole writer of the `status` fields on vehicles and
/// drivers; no other component may set them directly while a trip references
/// the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The vehicle registry.
    pub vehicles: Vec<Vehicle>,
    /// The driver roster.
    pub drivers: Vec<Driver>,
    /// All trips, including terminal ones. Trips are never deleted.
    pub trips: Vec<Trip>,
    /// Maintenance service logs.
    pub service_logs: Vec<ServiceLog>,
    /// Trip expense records.
    pub expenses: Vec<Expense>,
}

impl State {
    /// Creates a new empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vehicles: Vec::new(),
            drivers: Vec::new(),
            trips: Vec::new(),
            service_logs: Vec::new(),
            expenses: Vec::new(),
        }
    }

    /// Looks up a vehicle by identifier.
    #[must_use]
    pub fn find_vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == *id)
    }

    /// Looks up a driver by identifier.
    #[must_use]
    pub fn find_driver(&self, id: &DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == *id)
    }

    /// Looks up a trip by identifier.
    #[must_use]
    pub fn find_trip(&self, id: &TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == *id)
    }

    /// Looks up a service log by identifier.
    #[must_use]
    pub fn find_service_log(&self, id: &ServiceLogId) -> Option<&ServiceLog> {
        self.service_logs.iter().find(|l| l.id == *id)
    }

    pub(crate) fn find_vehicle_mut(&mut self, id: &VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id == *id)
    }

    pub(crate) fn find_driver_mut(&mut self, id: &DriverId) -> Option<&mut Driver> {
        self.drivers.iter_mut().find(|d| d.id == *id)
    }

    pub(crate) fn find_trip_mut(&mut self, id: &TripId) -> Option<&mut Trip> {
        self.trips.iter_mut().find(|t| t.id == *id)
    }

    pub(crate) fn find_service_log_mut(&mut self, id: &ServiceLogId) -> Option<&mut ServiceLog> {
        self.service_logs.iter_mut().find(|l| l.id == *id)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// A record of one successful state transition.
///
/// Every successful command produces exactly one event. The store forwards
/// events to its subscribers so presentation surfaces can react to mutations
/// they did not initiate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEvent {
    /// The name of the command that ran (e.g. "`DispatchTrip`").
    pub name: String,
    /// The identifier of the entity the command acted on.
    pub subject: String,
    /// Optional additional details about the transition.
    pub details: Option<String>,
}

impl TransitionEvent {
    /// Creates a new `TransitionEvent`.
    #[must_use]
    pub const fn new(name: String, subject: String, details: Option<String>) -> Self {
        Self {
            name,
            subject,
            details,
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The event recording this transition.
    pub event: TransitionEvent,
}
