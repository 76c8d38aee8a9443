// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::id::SequentialIds;
use crate::state::State;
use fleet_dispatch_domain::{
    Driver, DriverId, DriverStatus, PlateNumber, Vehicle, VehicleId,
};
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
        name: String::from("Priya Patel"),
        license_number: String::from("DL-731842"),
        license_expiry: date!(2027 - 06 - 20),
        status: DriverStatus::OnDuty,
        completion_rate: 94,
        safety_score: 88,
        complaints: 0,
    }
}

/// One available vehicle (V1, 45000 lbs) and one eligible driver (D1).
pub fn create_test_state() -> State {
    let mut state = State::new();
    state.vehicles.push(create_test_vehicle("V1", 45000));
    state.drivers.push(create_test_driver("D1"));
    state
}

pub fn create_trip_command(vehicle: &str, driver: &str, cargo_weight: u32) -> Command {
    Command::CreateTrip {
        vehicle_id: VehicleId::new(vehicle),
        driver_id: DriverId::new(driver),
        cargo_weight,
        origin: String::from("Dallas Hub"),
        destination: String::from("Austin Terminal"),
        start_odometer: 1000,
    }
}

pub fn create_test_ids() -> SequentialIds {
    SequentialIds::new()
}
