// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::FleetStore;
use crate::backend::memory::MemoryBackend;
use fleet_dispatch::Command;
use fleet_dispatch_domain::{DriverId, VehicleId};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 08 - 01);

/// Atomic counter for generating unique per-test data directories.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions.
static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn unique_temp_dir() -> PathBuf {
    let n = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("fleet-dispatch-store-test-{}-{n}", std::process::id()))
}

/// A store over an empty memory backend, so every collection starts from the
/// seed dataset.
pub fn seeded_store() -> FleetStore<MemoryBackend> {
    FleetStore::open(MemoryBackend::new())
}

/// A trip-creation command against the seed vehicle V1 and seed driver D1.
pub fn create_trip_command() -> Command {
    Command::CreateTrip {
        vehicle_id: VehicleId::new("V1"),
        driver_id: DriverId::new("D1"),
        cargo_weight: 20000,
        origin: String::from("Dallas Hub"),
        destination: String::from("Austin Terminal"),
        start_odometer: 125_000,
    }
}
