// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for maintenance service logs and trip expenses.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::State;
use fleet_dispatch_domain::{
    DomainError, ServiceCategory, ServiceLogId, ServiceStatus, TripId, VehicleId, VehicleStatus,
};

use super::helpers::{TODAY, create_test_ids, create_test_state, create_trip_command};

fn create_log(vehicle: &str, service_type: &str) -> Command {
    Command::CreateServiceLog {
        vehicle_id: VehicleId::new(vehicle),
        service_type: String::from(service_type),
        category: ServiceCategory::Preventative,
        description: String::from("Regular 10k mile service"),
        cost: 450,
    }
}

fn complete_log(log: &str) -> Command {
    Command::CompleteServiceLog {
        log_id: ServiceLogId::new(log),
    }
}

fn run(state: &State, command: Command) -> State {
    let mut ids = crate::id::SequentialIds::continuing_from(state);
    apply(state, command, TODAY, &mut ids).unwrap().new_state
}

// ============================================================================
// Service logs
// ============================================================================

#[test]
fn test_create_service_log_opens_log_and_holds_vehicle() {
    let state = run(&create_test_state(), create_log("V1", "Engine Oil Change"));

    let log = state.find_service_log(&ServiceLogId::new("LOG-1")).unwrap();
    assert_eq!(log.status, ServiceStatus::Open);
    assert_eq!(log.date_created, TODAY);
    assert_eq!(log.date_completed, None);

    let vehicle = state.find_vehicle(&VehicleId::new("V1")).unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Maintenance);
}

#[test]
fn test_service_log_rejected_while_vehicle_on_trip() {
    let state = run(&create_test_state(), create_trip_command("V1", "D1", 20000));
    let state = run(
        &state,
        Command::DispatchTrip {
            trip_id: TripId::new("T1"),
        },
    );
    let mut ids = create_test_ids();

    let result = apply(&state, create_log("V1", "Brake Check"), TODAY, &mut ids);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::VehicleNotAvailable { .. })
    ));
}

#[test]
fn test_complete_service_log_releases_vehicle() {
    let state = run(&create_test_state(), create_log("V1", "Engine Oil Change"));
    let state = run(&state, complete_log("LOG-1"));

    let log = state.find_service_log(&ServiceLogId::new("LOG-1")).unwrap();
    assert_eq!(log.status, ServiceStatus::Completed);
    assert_eq!(log.date_completed, Some(TODAY));

    let vehicle = state.find_vehicle(&VehicleId::new("V1")).unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Available);
}

#[test]
fn test_vehicle_stays_in_shop_while_another_log_is_open() {
    let state = run(&create_test_state(), create_log("V1", "Engine Oil Change"));
    let state = run(&state, create_log("V1", "Tire Rotation"));
    let state = run(&state, complete_log("LOG-1"));

    // LOG-2 is still open, so the vehicle stays in Maintenance.
    let vehicle = state.find_vehicle(&VehicleId::new("V1")).unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Maintenance);

    let state = run(&state, complete_log("LOG-2"));
    let vehicle = state.find_vehicle(&VehicleId::new("V1")).unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Available);
}

#[test]
fn test_complete_service_log_twice_fails() {
    let state = run(&create_test_state(), create_log("V1", "Engine Oil Change"));
    let state = run(&state, complete_log("LOG-1"));
    let mut ids = create_test_ids();

    let result = apply(&state, complete_log("LOG-1"), TODAY, &mut ids);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidTransition { .. })
    ));
}

#[test]
fn test_vehicle_in_maintenance_cannot_be_dispatched() {
    let state = run(&create_test_state(), create_log("V1", "Engine Oil Change"));
    let mut ids = create_test_ids();

    // Trip creation re-checks availability, so the shop blocks new trips.
    let result = apply(
        &state,
        create_trip_command("V1", "D1", 20000),
        TODAY,
        &mut ids,
    );
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::VehicleNotAvailable { .. })
    ));
}

// ============================================================================
// Expenses
// ============================================================================

#[test]
fn test_log_expense_snapshots_driver_and_distance() {
    let state = run(&create_test_state(), create_trip_command("V1", "D1", 20000));
    let state = run(
        &state,
        Command::DispatchTrip {
            trip_id: TripId::new("T1"),
        },
    );
    let state = run(
        &state,
        Command::CompleteTrip {
            trip_id: TripId::new("T1"),
            end_odometer: 1500,
        },
    );
    let state = run(
        &state,
        Command::LogExpense {
            trip_id: TripId::new("T1"),
            fuel_cost: 8000,
            misc_expense: 500,
        },
    );

    let expense = &state.expenses[0];
    assert_eq!(expense.id.value(), "EXP-1");
    assert_eq!(expense.driver_id.value(), "D1");
    assert_eq!(expense.distance, 500);
    assert_eq!(expense.total(), 8500);
    assert_eq!(expense.date, TODAY);
}

#[test]
fn test_expense_on_dispatched_trip_has_zero_distance() {
    let state = run(&create_test_state(), create_trip_command("V1", "D1", 20000));
    let state = run(
        &state,
        Command::DispatchTrip {
            trip_id: TripId::new("T1"),
        },
    );
    let state = run(
        &state,
        Command::LogExpense {
            trip_id: TripId::new("T1"),
            fuel_cost: 3000,
            misc_expense: 0,
        },
    );

    assert_eq!(state.expenses[0].distance, 0);
}

#[test]
fn test_expense_on_draft_trip_is_rejected() {
    let state = run(&create_test_state(), create_trip_command("V1", "D1", 20000));
    let mut ids = create_test_ids();

    let result = apply(
        &state,
        Command::LogExpense {
            trip_id: TripId::new("T1"),
            fuel_cost: 3000,
            misc_expense: 0,
        },
        TODAY,
        &mut ids,
    );
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidTransition { .. })
    ));
}

#[test]
fn test_expense_on_unknown_trip_is_rejected() {
    let state = create_test_state();
    let mut ids = create_test_ids();

    let result = apply(
        &state,
        Command::LogExpense {
            trip_id: TripId::new("T404"),
            fuel_cost: 3000,
            misc_expense: 0,
        },
        TODAY,
        &mut ids,
    );
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::TripNotFound(_))
    ));
}
