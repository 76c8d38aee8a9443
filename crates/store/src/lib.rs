// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity store and persistence layer for the Fleet Dispatch System.
//!
//! This crate owns the entity collections and routes every mutation through
//! the lifecycle manager in `fleet-dispatch`. Each collection is persisted as
//! one JSON document under a namespaced key in a key-value backend.
//!
//! ## Backend Support
//!
//! - **Memory** (default for tests) — process-local map, nothing survives
//!   the process
//! - **JSON files** — one file per key inside a data directory; the default
//!   for the CLI surface
//!
//! ## Durability Model
//!
//! Persistence is a synchronous side effect performed after each in-memory
//! mutation, not part of the transactional boundary. A crash between the
//! in-memory update and the write leaves the persisted snapshot stale; on
//! the next open the store loads whatever snapshot survives and falls back
//! to the hard-coded seed dataset for keys that are missing or corrupt.
//!
//! ## Testing Philosophy
//!
//! - Standard tests run against the memory backend only
//! - File backend tests write into unique per-test temp directories
//! - No external infrastructure is ever required

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

mod backend;
mod error;
mod seed;

#[cfg(test)]
mod tests;

use fleet_dispatch::{
    Command, IdProvider, SequentialIds, State, TransitionEvent, apply as apply_command,
};
use fleet_dispatch_domain::{
    Driver, DriverExpenseStats, DriverId, Expense, FleetSummary, ServiceLog, Trip, Vehicle,
    available_vehicles, driver_expense_stats, eligible_drivers, fleet_summary,
    sort_trips_by_status_priority,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use time::Date;
use tracing::{debug, warn};

pub use backend::StorageBackend;
pub use backend::file::JsonFileBackend;
pub use backend::memory::MemoryBackend;
pub use error::StoreError;
pub use seed::{
    seed_drivers, seed_expenses, seed_service_logs, seed_state, seed_trips, seed_vehicles,
};

/// Namespaced keys under which each collection is persisted.
pub mod keys {
    /// The vehicle registry.
    pub const VEHICLES: &str = "fleet_v2_vehicles";
    /// The driver roster.
    pub const DRIVERS: &str = "fleet_v2_drivers";
    /// The trip log.
    pub const TRIPS: &str = "fleet_v2_trips";
    /// Maintenance service logs.
    pub const SERVICE_LOGS: &str = "fleet_v2_service_logs";
    /// Trip expense records.
    pub const EXPENSES: &str = "fleet_v2_expenses";
}

/// Handle returned by [`FleetStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&TransitionEvent)>;

/// The entity store.
///
/// Exclusively owns every collection and is the only way to mutate them:
/// all writes go through [`FleetStore::apply`], which routes the command
/// through the lifecycle manager, persists the result, and notifies
/// subscribers. Reads are pure projections recomputed per call.
pub struct FleetStore<B: StorageBackend> {
    state: State,
    backend: B,
    ids: Box<dyn IdProvider>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<B: StorageBackend> FleetStore<B> {
    /// Opens the store, loading each collection from the backend.
    ///
    /// A missing or corrupt key falls back to the seed dataset for that
    /// collection. Identifier generation continues after the highest numeric
    /// suffix found in the loaded data.
    #[must_use]
    pub fn open(backend: B) -> Self {
        let state = load_state(&backend);
        let ids: Box<dyn IdProvider> = Box::new(SequentialIds::continuing_from(&state));
        Self::with_state(backend, state, ids)
    }

    /// Opens the store with a caller-supplied identifier provider.
    #[must_use]
    pub fn open_with_ids(backend: B, ids: Box<dyn IdProvider>) -> Self {
        let state = load_state(&backend);
        Self::with_state(backend, state, ids)
    }

    fn with_state(backend: B, state: State, ids: Box<dyn IdProvider>) -> Self {
        debug!(
            vehicles = state.vehicles.len(),
            drivers = state.drivers.len(),
            trips = state.trips.len(),
            service_logs = state.service_logs.len(),
            expenses = state.expenses.len(),
            "opened fleet store"
        );
        Self {
            state,
            backend,
            ids,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current state. Read-only; mutations go through [`Self::apply`].
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// The underlying backend. Read-only; useful for inspecting persisted
    /// documents in tests.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Applies a command, persists every collection, and notifies
    /// subscribers.
    ///
    /// Subscribers observe the in-memory mutation before the persistence
    /// write happens; persistence is a trailing side effect outside the
    /// transactional boundary. If the write fails the in-memory state stays
    /// applied and the error is reported to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Rejected`] when the lifecycle manager refuses
    /// the command (no state changed), or an I/O/serialization error when
    /// the persistence write fails (state changed in memory).
    pub fn apply(&mut self, command: Command, today: Date) -> Result<TransitionEvent, StoreError> {
        let result = apply_command(&self.state, command, today, self.ids.as_mut())?;
        self.state = result.new_state;
        debug!(
            command = %result.event.name,
            subject = %result.event.subject,
            "applied command"
        );
        self.notify(&result.event);
        self.persist_all()?;
        Ok(result.event)
    }

    /// Replaces the whole state, persists it, and notifies subscribers.
    ///
    /// Used to install generated demo populations.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the new state fails.
    pub fn reset(&mut self, state: State) -> Result<TransitionEvent, StoreError> {
        self.state = state;
        self.ids = Box::new(SequentialIds::continuing_from(&self.state));
        let event = TransitionEvent::new(
            String::from("ResetState"),
            String::from("store"),
            Some(format!(
                "Installed dataset with {} vehicles, {} drivers, {} trips",
                self.state.vehicles.len(),
                self.state.drivers.len(),
                self.state.trips.len()
            )),
        );
        self.notify(&event);
        self.persist_all()?;
        Ok(event)
    }

    /// Registers a callback invoked after every successful mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&TransitionEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscription. Returns true if it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    // ------------------------------------------------------------------
    // Read-only projections (recomputed on every call)
    // ------------------------------------------------------------------

    /// All vehicles available for assignment.
    #[must_use]
    pub fn available_vehicles(&self) -> Vec<&Vehicle> {
        available_vehicles(&self.state.vehicles)
    }

    /// All drivers eligible for a new assignment as of `today`.
    #[must_use]
    pub fn eligible_drivers(&self, today: Date) -> Vec<&Driver> {
        eligible_drivers(&self.state.drivers, today)
    }

    /// Trips sorted for display: active first, historical last.
    #[must_use]
    pub fn trips_by_status_priority(&self) -> Vec<Trip> {
        sort_trips_by_status_priority(&self.state.trips)
    }

    /// Maintenance history, newest first.
    #[must_use]
    pub fn service_logs(&self) -> Vec<&ServiceLog> {
        let mut logs: Vec<&ServiceLog> = self.state.service_logs.iter().collect();
        logs.sort_by(|a, b| b.date_created.cmp(&a.date_created));
        logs
    }

    /// All expense records.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    /// Headline fleet figures.
    #[must_use]
    pub fn fleet_summary(&self) -> FleetSummary {
        fleet_summary(&self.state.vehicles)
    }

    /// Aggregated expense figures for one driver.
    #[must_use]
    pub fn driver_expense_stats(&self, driver_id: &DriverId) -> DriverExpenseStats {
        driver_expense_stats(&self.state.expenses, driver_id)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    fn persist_all(&mut self) -> Result<(), StoreError> {
        persist_collection(&mut self.backend, keys::VEHICLES, &self.state.vehicles)?;
        persist_collection(&mut self.backend, keys::DRIVERS, &self.state.drivers)?;
        persist_collection(&mut self.backend, keys::TRIPS, &self.state.trips)?;
        persist_collection(
            &mut self.backend,
            keys::SERVICE_LOGS,
            &self.state.service_logs,
        )?;
        persist_collection(&mut self.backend, keys::EXPENSES, &self.state.expenses)?;
        Ok(())
    }

    fn notify(&mut self, event: &TransitionEvent) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(event);
        }
    }
}

fn load_state<B: StorageBackend>(backend: &B) -> State {
    State {
        vehicles: load_collection(backend, keys::VEHICLES, seed::seed_vehicles),
        drivers: load_collection(backend, keys::DRIVERS, seed::seed_drivers),
        trips: load_collection(backend, keys::TRIPS, seed::seed_trips),
        service_logs: load_collection(backend, keys::SERVICE_LOGS, seed::seed_service_logs),
        expenses: load_collection(backend, keys::EXPENSES, seed::seed_expenses),
    }
}

/// Loads one collection, falling back to its seed on a missing or corrupt
/// key. Falling back is never fatal; the replaced snapshot is overwritten on
/// the next mutation.
fn load_collection<B, T>(backend: &B, key: &str, seed: fn() -> Vec<T>) -> Vec<T>
where
    B: StorageBackend,
    T: DeserializeOwned,
{
    match backend.load(key) {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(items) => items,
            Err(e) => {
                warn!(key, error = %e, "corrupt collection, falling back to seed data");
                seed()
            }
        },
        Ok(None) => seed(),
        Err(e) => {
            warn!(key, error = %e, "unreadable collection, falling back to seed data");
            seed()
        }
    }
}

fn persist_collection<B, T>(backend: &mut B, key: &str, items: &[T]) -> Result<(), StoreError>
where
    B: StorageBackend,
    T: Serialize,
{
    let payload = serde_json::to_string(items).map_err(|e| StoreError::Serialization {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    backend.save(key, &payload)
}
