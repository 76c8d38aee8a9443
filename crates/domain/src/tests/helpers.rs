// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::driver::{Driver, DriverStatus};
use crate::trip::{Trip, TripDraft};
use crate::types::{DriverId, PlateNumber, TripId, VehicleId};
use crate::vehicle::Vehicle;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 08 - 01);

pub fn create_test_vehicle(id: &str, max_capacity: u32) -> Vehicle {
    Vehicle::new(
        VehicleId::new(id),
        String::from("Volvo FH16"),
        PlateNumber::new(&format!("VO-{id}")),
        max_capacity,
        120_000,
    )
}

pub fn create_test_driver(id: &str) -> Driver {
    Driver {
        id: DriverId::new(id),
        name: String::from("Amit Sharma"),
        license_number: String::from("DL-482913"),
        license_expiry: date!(2027 - 06 - 20),
        status: DriverStatus::OnDuty,
        completion_rate: 96,
        safety_score: 91,
        complaints: 0,
    }
}

pub fn create_test_draft(cargo_weight: u32, start_odometer: u32) -> TripDraft {
    TripDraft {
        cargo_weight,
        origin: String::from("Dallas Hub"),
        destination: String::from("Austin Terminal"),
        start_odometer,
    }
}

pub fn create_test_trip(id: &str, vehicle: &Vehicle, driver: &Driver) -> Trip {
    Trip::new(
        TripId::new(id),
        vehicle.id.clone(),
        driver.id.clone(),
        create_test_draft(20000, 1000),
    )
}
