// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{CompleteTripRequest, CreateTripRequest, DispatchTripRequest};
use fleet_dispatch_store::{FleetStore, MemoryBackend};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 08 - 01);

/// A store over an empty memory backend: seed data only.
pub fn seeded_store() -> FleetStore<MemoryBackend> {
    FleetStore::open(MemoryBackend::new())
}

/// A well-formed creation request against seed vehicle V1 / seed driver D1.
pub fn create_trip_request() -> CreateTripRequest {
    CreateTripRequest {
        vehicle_id: String::from("V1"),
        driver_id: String::from("D1"),
        cargo_weight: String::from("20000"),
        origin: String::from("Dallas Hub"),
        destination: String::from("Austin Terminal"),
        start_odometer: String::from("125000"),
    }
}

pub fn dispatch_request(trip_id: &str) -> DispatchTripRequest {
    DispatchTripRequest {
        trip_id: String::from(trip_id),
    }
}

pub fn complete_request(trip_id: &str, end_odometer: &str) -> CompleteTripRequest {
    CompleteTripRequest {
        trip_id: String::from(trip_id),
        end_odometer: String::from(end_odometer),
    }
}
