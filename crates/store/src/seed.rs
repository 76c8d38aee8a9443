// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hard-coded seed dataset.
//!
//! Used as the fallback for any collection whose persisted key is missing or
//! corrupt. The dataset is small, deterministic, and internally consistent:
//! the one Maintenance vehicle has an open service log, the one historical
//! trip is completed, and no reservation is outstanding.

use fleet_dispatch::State;
use fleet_dispatch_domain::{
    Driver, DriverId, DriverStatus, Expense, ExpenseId, ExpenseStatus, PlateNumber,
    ServiceCategory, ServiceLog, ServiceLogId, ServiceStatus, Trip, TripDraft, TripId, TripStatus,
    Vehicle, VehicleId, VehicleStatus,
};
use time::macros::date;

/// The seed vehicle registry.
#[must_use]
pub fn seed_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new(
            VehicleId::new("V1"),
            String::from("Freightliner M2"),
            PlateNumber::new("XYZ-1234"),
            28000,
            125_000,
        ),
        Vehicle::new(
            VehicleId::new("V2"),
            String::from("Ford Transit"),
            PlateNumber::new("ABC-9876"),
            3500,
            45000,
        ),
        Vehicle {
            id: VehicleId::new("V3"),
            name_model: String::from("Volvo VNL"),
            plate_number: PlateNumber::new("LMN-4567"),
            max_capacity: 45000,
            odometer: 210_000,
            status: VehicleStatus::Maintenance,
        },
        Vehicle::new(
            VehicleId::new("V4"),
            String::from("Mercedes Sprinter"),
            PlateNumber::new("DEF-3456"),
            4000,
            32000,
        ),
        Vehicle {
            id: VehicleId::new("V5"),
            name_model: String::from("Peterbilt 579"),
            plate_number: PlateNumber::new("GHI-7890"),
            max_capacity: 52000,
            odometer: 450_000,
            status: VehicleStatus::Retired,
        },
    ]
}

/// The seed driver roster.
#[must_use]
pub fn seed_drivers() -> Vec<Driver> {
    vec![
        Driver {
            id: DriverId::new("D1"),
            name: String::from("Amit Sharma"),
            license_number: String::from("DL-482913"),
            license_expiry: date!(2027 - 06 - 20),
            status: DriverStatus::OnDuty,
            completion_rate: 96,
            safety_score: 91,
            complaints: 0,
        },
        Driver {
            id: DriverId::new("D2"),
            name: String::from("Jane Smith"),
            license_number: String::from("DL-157320"),
            license_expiry: date!(2027 - 02 - 20),
            status: DriverStatus::OnDuty,
            completion_rate: 92,
            safety_score: 95,
            complaints: 1,
        },
        Driver {
            id: DriverId::new("D3"),
            name: String::from("Suresh Verma"),
            license_number: String::from("DL-664201"),
            license_expiry: date!(2026 - 12 - 20),
            status: DriverStatus::OffDuty,
            completion_rate: 89,
            safety_score: 84,
            complaints: 0,
        },
        Driver {
            id: DriverId::new("D4"),
            name: String::from("María García"),
            license_number: String::from("DL-908415"),
            license_expiry: date!(2027 - 09 - 20),
            status: DriverStatus::Suspended,
            completion_rate: 85,
            safety_score: 72,
            complaints: 2,
        },
    ]
}

/// The seed trip log: one completed historical trip, nothing reserved.
#[must_use]
pub fn seed_trips() -> Vec<Trip> {
    let mut completed = Trip::new(
        TripId::new("T1"),
        VehicleId::new("V1"),
        DriverId::new("D1"),
        TripDraft {
            cargo_weight: 18000,
            origin: String::from("Chicago"),
            destination: String::from("Dallas"),
            start_odometer: 124_000,
        },
    );
    completed.status = TripStatus::Completed;
    completed.end_odometer = Some(124_950);
    vec![completed]
}

/// The seed maintenance history. The open entry matches the seed vehicle
/// that sits in Maintenance.
#[must_use]
pub fn seed_service_logs() -> Vec<ServiceLog> {
    vec![
        ServiceLog {
            id: ServiceLogId::new("LOG-1"),
            vehicle_id: VehicleId::new("V1"),
            service_type: String::from("Engine Oil Change"),
            category: ServiceCategory::Preventative,
            description: String::from("Regular 10k mile service. Full synthetic oil used."),
            cost: 450,
            status: ServiceStatus::Completed,
            date_created: date!(2026 - 06 - 15),
            date_completed: Some(date!(2026 - 06 - 15)),
        },
        ServiceLog {
            id: ServiceLogId::new("LOG-2"),
            vehicle_id: VehicleId::new("V2"),
            service_type: String::from("Brake Pad Replacement"),
            category: ServiceCategory::Reactive,
            description: String::from("Front brake pads worn down to 2mm. Replaced with OEM parts."),
            cost: 850,
            status: ServiceStatus::Completed,
            date_created: date!(2026 - 06 - 20),
            date_completed: Some(date!(2026 - 06 - 21)),
        },
        ServiceLog {
            id: ServiceLogId::new("LOG-3"),
            vehicle_id: VehicleId::new("V3"),
            service_type: String::from("Tire Rotation & Balance"),
            category: ServiceCategory::Preventative,
            description: String::from("Standard tire maintenance and alignment check."),
            cost: 120,
            status: ServiceStatus::Open,
            date_created: date!(2026 - 07 - 25),
            date_completed: None,
        },
    ]
}

/// The seed expense ledger: one approved record for the completed trip.
#[must_use]
pub fn seed_expenses() -> Vec<Expense> {
    vec![Expense {
        id: ExpenseId::new("EXP-1"),
        trip_id: TripId::new("T1"),
        driver_id: DriverId::new("D1"),
        distance: 950,
        fuel_cost: 9500,
        misc_expense: 250,
        status: ExpenseStatus::Approved,
        date: date!(2026 - 07 - 02),
    }]
}

/// The full seed state.
#[must_use]
pub fn seed_state() -> State {
    State {
        vehicles: seed_vehicles(),
        drivers: seed_drivers(),
        trips: seed_trips(),
        service_logs: seed_service_logs(),
        expenses: seed_expenses(),
    }
}
