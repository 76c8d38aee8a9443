// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Randomized demo dataset generator.
//!
//! Produces Vehicle/Driver/Trip/Expense populations for demo sessions. The
//! output is an opaque dataset conforming to the domain schemas; generation
//! fixes up statuses so the dispatched-trip reservation invariant holds even
//! though the draws are random.

use fleet_dispatch::State;
use fleet_dispatch_domain::{
    Driver, DriverId, DriverStatus, Expense, ExpenseId, ExpenseStatus, PlateNumber, Trip,
    TripDraft, TripId, TripStatus, Vehicle, VehicleId, VehicleStatus,
};
use rand::{Rng, RngExt};
use time::{Date, Month};

const BRANDS: &[(&str, &[&str])] = &[
    ("Volvo", &["FH16", "FMX", "FM", "VNL 860"]),
    ("Scania", &["R500", "G410", "P250", "Next Gen S"]),
    ("Mercedes-Benz", &["Actros", "Arocs", "Atego", "Unimog"]),
    ("MAN", &["TGX", "TGS", "TGM", "TGL"]),
    ("BharatBenz", &["3528C", "1923R", "2823R", "4228R"]),
    ("Ashok Leyland", &["Ecomet 1215", "U-3518", "Captain 2523", "Boss 1215"]),
    ("Tata Motors", &["Prima 5530.S", "Signa 4825.TK", "Ultra 1918.T", "LPT 1613"]),
    ("Eicher", &["Pro 6055", "Pro 3015", "Pro 2049", "Pro 8040"]),
];

const CAPACITIES: &[u32] = &[15000, 28000, 42000, 45000, 52000];

const FIRST_NAMES: &[&str] = &[
    "Amit", "Rajesh", "Suresh", "Michael", "Jane", "Sarah", "Priya", "Vikram", "Anjali", "David",
    "James", "Linda", "Robert", "Maria", "Arjun", "Sanjay", "Komal", "Deepak",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Verma", "Singh", "Smith", "Doe", "Kapoor", "Patel", "Das", "Roy", "Choudhury",
    "Iyer", "Menon", "Reddy", "Khan", "Wilson", "García",
];

const CITIES: &[&str] = &[
    "New York", "Chicago", "Miami", "Houston", "San Francisco", "Dallas", "Austin", "Seattle",
    "Boston", "Philadelphia", "Mumbai", "Delhi", "Bangalore", "Chennai", "Pune",
];

/// Population sizes for a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of vehicles to generate.
    pub vehicles: usize,
    /// Number of drivers to generate.
    pub drivers: usize,
    /// Number of trips to generate.
    pub trips: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            vehicles: 50,
            drivers: 40,
            trips: 75,
        }
    }
}

fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Generates a full demo state.
///
/// Trips drawn as Dispatched reserve their vehicle and driver; a draw whose
/// vehicle or driver is no longer free is demoted to Draft so the dataset
/// never violates the reservation invariant. Expenses are derived from the
/// dispatched and completed trips, the way a live ledger would fill up.
#[must_use]
pub fn generate_state(config: &DemoConfig, today: Date, rng: &mut impl Rng) -> State {
    let vehicles = generate_vehicles(config.vehicles, rng);
    let drivers = generate_drivers(config.drivers, today, rng);

    let mut state = State {
        vehicles,
        drivers,
        trips: Vec::new(),
        service_logs: Vec::new(),
        expenses: Vec::new(),
    };
    generate_trips(&mut state, config.trips, rng);
    generate_expenses(&mut state, today, rng);
    state
}

fn generate_vehicles(count: usize, rng: &mut impl Rng) -> Vec<Vehicle> {
    let mut list = Vec::with_capacity(count);
    for i in 1..=count {
        let (brand, models) = *pick(rng, BRANDS);
        let model = *pick(rng, models);
        // Index-based plate digits keep the registry free of duplicates.
        let prefix: String = brand.chars().take(2).collect::<String>().to_uppercase();
        let plate = format!("{prefix}-{}", 1000 + i);
        let status = *pick(
            rng,
            &[
                VehicleStatus::Available,
                VehicleStatus::Available,
                VehicleStatus::Available,
                VehicleStatus::Maintenance,
            ],
        );
        list.push(Vehicle {
            id: VehicleId::new(&format!("V{i}")),
            name_model: format!("{brand} {model}"),
            plate_number: PlateNumber::new(&plate),
            max_capacity: *pick(rng, CAPACITIES),
            odometer: rng.random_range(10000..160_000),
            status,
        });
    }
    list
}

fn generate_drivers(count: usize, today: Date, rng: &mut impl Rng) -> Vec<Driver> {
    let mut list = Vec::with_capacity(count);
    for i in 1..=count {
        let name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
        let status = *pick(
            rng,
            &[
                DriverStatus::OnDuty,
                DriverStatus::OnDuty,
                DriverStatus::OnDuty,
                DriverStatus::OffDuty,
                DriverStatus::Suspended,
            ],
        );
        // A slice of the roster carries an already-expired license.
        let year_offset = *pick(rng, &[-1_i32, 1, 1, 2, 3]);
        let month = Month::try_from(rng.random_range(1..=12_u8)).unwrap_or(Month::January);
        let license_expiry =
            Date::from_calendar_date(today.year() + year_offset, month, 20).unwrap_or(today);
        list.push(Driver {
            id: DriverId::new(&format!("D{i}")),
            name,
            license_number: format!("DL-{}", rng.random_range(100_000_u32..1_000_000)),
            license_expiry,
            status,
            completion_rate: rng.random_range(85..=100_u8),
            safety_score: rng.random_range(80..=100_u8),
            complaints: *pick(rng, &[0, 0, 0, 1, 2, 0, 0]),
        });
    }
    list
}

fn generate_trips(state: &mut State, count: usize, rng: &mut impl Rng) {
    for i in 1..=count {
        let vehicle_idx = rng.random_range(0..state.vehicles.len());
        let driver_idx = rng.random_range(0..state.drivers.len());

        let origin = *pick(rng, CITIES);
        let mut destination = *pick(rng, CITIES);
        while destination == origin {
            destination = *pick(rng, CITIES);
        }

        let mut status = *pick(
            rng,
            &[
                TripStatus::Draft,
                TripStatus::Dispatched,
                TripStatus::Completed,
                TripStatus::Cancelled,
            ],
        );
        // A dispatch draw only sticks if the reservation can actually be
        // taken; otherwise the trip stays a draft.
        if status == TripStatus::Dispatched {
            let vehicle_free = state.vehicles[vehicle_idx].status == VehicleStatus::Available;
            let driver_free = state.drivers[driver_idx].status == DriverStatus::OnDuty;
            if vehicle_free && driver_free {
                state.vehicles[vehicle_idx].status = VehicleStatus::OnTrip;
                state.drivers[driver_idx].status = DriverStatus::OnTrip;
            } else {
                status = TripStatus::Draft;
            }
        }

        let vehicle = &state.vehicles[vehicle_idx];
        let cargo_weight = rng.random_range(5000..=vehicle.max_capacity);
        let start_odometer = vehicle.odometer.saturating_sub(rng.random_range(0..5000));

        let mut trip = Trip::new(
            TripId::new(&format!("T{i}")),
            vehicle.id.clone(),
            state.drivers[driver_idx].id.clone(),
            TripDraft {
                cargo_weight,
                origin: String::from(origin),
                destination: String::from(destination),
                start_odometer,
            },
        );
        trip.status = status;
        if status == TripStatus::Completed {
            trip.end_odometer = Some(start_odometer + rng.random_range(300..2300));
        }
        state.trips.push(trip);
    }
}

fn generate_expenses(state: &mut State, today: Date, rng: &mut impl Rng) {
    let mut expenses = Vec::new();
    for (idx, trip) in state
        .trips
        .iter()
        .filter(|t| matches!(t.status, TripStatus::Completed | TripStatus::Dispatched))
        .enumerate()
    {
        let status = if trip.status == TripStatus::Completed {
            *pick(rng, &[ExpenseStatus::Approved, ExpenseStatus::Completed])
        } else {
            ExpenseStatus::Pending
        };
        expenses.push(Expense {
            id: ExpenseId::new(&format!("EXP-{}", 1000 + idx)),
            trip_id: trip.id.clone(),
            driver_id: trip.driver_id.clone(),
            distance: trip
                .distance()
                .unwrap_or_else(|| rng.random_range(100..600)),
            fuel_cost: rng.random_range(5000..20000),
            misc_expense: *pick(rng, &[0, 0, 500, 1000, 250]),
            status,
            date: today,
        });
    }
    state.expenses = expenses;
}
