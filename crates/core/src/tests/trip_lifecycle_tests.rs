// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the trip lifecycle and its cross-entity status synchronization.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::State;
use fleet_dispatch_domain::{
    DomainError, DriverId, DriverStatus, TripId, TripStatus, VehicleId, VehicleStatus,
};

use super::helpers::{TODAY, create_test_ids, create_test_state, create_trip_command};

fn dispatch(trip: &str) -> Command {
    Command::DispatchTrip {
        trip_id: TripId::new(trip),
    }
}

fn complete(trip: &str, end_odometer: u32) -> Command {
    Command::CompleteTrip {
        trip_id: TripId::new(trip),
        end_odometer,
    }
}

fn cancel(trip: &str) -> Command {
    Command::CancelTrip {
        trip_id: TripId::new(trip),
    }
}

/// Runs a sequence of commands, asserting each one succeeds.
fn run_all(state: State, commands: Vec<Command>) -> State {
    let mut ids = create_test_ids();
    let mut current = state;
    for command in commands {
        let result = apply(&current, command, TODAY, &mut ids).unwrap();
        current = result.new_state;
    }
    current
}

fn vehicle_status(state: &State, id: &str) -> VehicleStatus {
    state.find_vehicle(&VehicleId::new(id)).unwrap().status
}

fn driver_status(state: &State, id: &str) -> DriverStatus {
    state.find_driver(&DriverId::new(id)).unwrap().status
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn test_create_trip_starts_in_draft_and_reserves_nothing() {
    let state = create_test_state();
    let mut ids = create_test_ids();

    let result = apply(
        &state,
        create_trip_command("V1", "D1", 20000),
        TODAY,
        &mut ids,
    )
    .unwrap();

    let trip = result.new_state.find_trip(&TripId::new("T1")).unwrap();
    assert_eq!(trip.status, TripStatus::Draft);
    assert_eq!(trip.end_odometer, None);
    assert_eq!(trip.start_odometer, 1000);

    // Creation must not touch the vehicle or driver.
    assert_eq!(vehicle_status(&result.new_state, "V1"), VehicleStatus::Available);
    assert_eq!(driver_status(&result.new_state, "D1"), DriverStatus::OnDuty);

    assert_eq!(result.event.name, "CreateTrip");
    assert_eq!(result.event.subject, "T1");
}

#[test]
fn test_create_trip_over_capacity_fails_and_mutates_nothing() {
    let state = create_test_state();
    let mut ids = create_test_ids();

    let result = apply(
        &state,
        create_trip_command("V1", "D1", 50000),
        TODAY,
        &mut ids,
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::CapacityExceeded {
            cargo_weight: 50000,
            max_capacity: 45000,
            ..
        })
    ));
    // The caller keeps the old state; nothing was inserted into it.
    assert!(state.trips.is_empty());
}

#[test]
fn test_create_trip_with_unknown_vehicle_fails() {
    let state = create_test_state();
    let mut ids = create_test_ids();

    let result = apply(
        &state,
        create_trip_command("V999", "D1", 20000),
        TODAY,
        &mut ids,
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::VehicleNotFound(_))
    ));
}

#[test]
fn test_generated_trip_ids_are_sequential() {
    let state = run_all(
        create_test_state(),
        vec![create_trip_command("V1", "D1", 10000)],
    );

    // Second trip for the same vehicle is fine while both are drafts... it
    // is dispatch that reserves, not creation.
    let mut ids = crate::id::SequentialIds::continuing_from(&state);
    let result = apply(
        &state,
        create_trip_command("V1", "D1", 12000),
        TODAY,
        &mut ids,
    )
    .unwrap();

    assert!(result.new_state.find_trip(&TripId::new("T2")).is_some());
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_reserves_vehicle_and_driver() {
    let state = run_all(
        create_test_state(),
        vec![create_trip_command("V1", "D1", 20000), dispatch("T1")],
    );

    assert_eq!(
        state.find_trip(&TripId::new("T1")).unwrap().status,
        TripStatus::Dispatched
    );
    assert_eq!(vehicle_status(&state, "V1"), VehicleStatus::OnTrip);
    assert_eq!(driver_status(&state, "D1"), DriverStatus::OnTrip);
}

#[test]
fn test_dispatch_of_unknown_trip_fails() {
    let state = create_test_state();
    let mut ids = create_test_ids();

    let result = apply(&state, dispatch("T404"), TODAY, &mut ids);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::TripNotFound(_))
    ));
}

#[test]
fn test_dispatch_twice_fails_with_invalid_transition() {
    let state = run_all(
        create_test_state(),
        vec![create_trip_command("V1", "D1", 20000), dispatch("T1")],
    );
    let mut ids = create_test_ids();

    let result = apply(&state, dispatch("T1"), TODAY, &mut ids);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidTransition { .. })
    ));
}

#[test]
fn test_second_draft_cannot_dispatch_while_vehicle_is_reserved() {
    // Two drafts on the same vehicle are legal; the second dispatch must be
    // rejected, otherwise completing the first trip would release a vehicle
    // the second still needs.
    let state = run_all(
        create_test_state(),
        vec![
            create_trip_command("V1", "D1", 20000),
            create_trip_command("V1", "D1", 15000),
            dispatch("T1"),
        ],
    );
    let mut ids = create_test_ids();

    let result = apply(&state, dispatch("T2"), TODAY, &mut ids);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::VehicleNotAvailable { .. })
    ));
}

// ============================================================================
// Completion
// ============================================================================

#[test]
fn test_complete_records_odometer_and_releases_assets() {
    let state = run_all(
        create_test_state(),
        vec![
            create_trip_command("V1", "D1", 20000),
            dispatch("T1"),
            complete("T1", 1500),
        ],
    );

    let trip = state.find_trip(&TripId::new("T1")).unwrap();
    assert_eq!(trip.status, TripStatus::Completed);
    assert_eq!(trip.end_odometer, Some(1500));
    assert_eq!(trip.distance(), Some(500));

    assert_eq!(vehicle_status(&state, "V1"), VehicleStatus::Available);
    assert_eq!(driver_status(&state, "D1"), DriverStatus::OnDuty);
}

#[test]
fn test_complete_with_lower_odometer_fails_and_mutates_nothing() {
    let state = run_all(
        create_test_state(),
        vec![create_trip_command("V1", "D1", 20000), dispatch("T1")],
    );
    let mut ids = create_test_ids();

    let result = apply(&state, complete("T1", 900), TODAY, &mut ids);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidOdometer(_))
    ));

    // The trip is still dispatched and the reservation still holds.
    let trip = state.find_trip(&TripId::new("T1")).unwrap();
    assert_eq!(trip.status, TripStatus::Dispatched);
    assert_eq!(trip.end_odometer, None);
    assert_eq!(vehicle_status(&state, "V1"), VehicleStatus::OnTrip);
    assert_eq!(driver_status(&state, "D1"), DriverStatus::OnTrip);
}

#[test]
fn test_complete_of_draft_trip_fails() {
    let state = run_all(
        create_test_state(),
        vec![create_trip_command("V1", "D1", 20000)],
    );
    let mut ids = create_test_ids();

    let result = apply(&state, complete("T1", 1500), TODAY, &mut ids);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidTransition { .. })
    ));
}

#[test]
fn test_complete_twice_fails_without_further_mutation() {
    let state = run_all(
        create_test_state(),
        vec![
            create_trip_command("V1", "D1", 20000),
            dispatch("T1"),
            complete("T1", 1500),
        ],
    );
    let mut ids = create_test_ids();

    let result = apply(&state, complete("T1", 2000), TODAY, &mut ids);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidTransition { .. })
    ));

    // First completion's record stands untouched.
    let trip = state.find_trip(&TripId::new("T1")).unwrap();
    assert_eq!(trip.end_odometer, Some(1500));
    assert_eq!(vehicle_status(&state, "V1"), VehicleStatus::Available);
}

#[test]
fn test_complete_advances_vehicle_odometer() {
    let state = run_all(
        create_test_state(),
        vec![
            create_trip_command("V1", "D1", 20000),
            dispatch("T1"),
            complete("T1", 125_000),
        ],
    );

    // End reading 125000 is ahead of the registry reading 120000.
    let vehicle = state.find_vehicle(&VehicleId::new("V1")).unwrap();
    assert_eq!(vehicle.odometer, 125_000);
}

#[test]
fn test_complete_never_lowers_vehicle_odometer() {
    // The trip's own start reading (1000) is below the registry reading; the
    // registry value must not move backwards when the trip ends at 1500.
    let state = run_all(
        create_test_state(),
        vec![
            create_trip_command("V1", "D1", 20000),
            dispatch("T1"),
            complete("T1", 1500),
        ],
    );

    let vehicle = state.find_vehicle(&VehicleId::new("V1")).unwrap();
    assert_eq!(vehicle.odometer, 120_000);
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn test_cancel_draft_trip_mutates_no_assets() {
    let state = run_all(
        create_test_state(),
        vec![create_trip_command("V1", "D1", 20000), cancel("T1")],
    );

    assert_eq!(
        state.find_trip(&TripId::new("T1")).unwrap().status,
        TripStatus::Cancelled
    );
    assert_eq!(vehicle_status(&state, "V1"), VehicleStatus::Available);
    assert_eq!(driver_status(&state, "D1"), DriverStatus::OnDuty);
}

#[test]
fn test_cancel_dispatched_trip_releases_reservation() {
    let state = run_all(
        create_test_state(),
        vec![
            create_trip_command("V1", "D1", 20000),
            dispatch("T1"),
            cancel("T1"),
        ],
    );

    assert_eq!(
        state.find_trip(&TripId::new("T1")).unwrap().status,
        TripStatus::Cancelled
    );
    assert_eq!(vehicle_status(&state, "V1"), VehicleStatus::Available);
    assert_eq!(driver_status(&state, "D1"), DriverStatus::OnDuty);
}

#[test]
fn test_dispatch_after_cancel_fails() {
    let state = run_all(
        create_test_state(),
        vec![
            create_trip_command("V1", "D1", 20000),
            dispatch("T1"),
            cancel("T1"),
        ],
    );
    let mut ids = create_test_ids();

    let result = apply(&state, dispatch("T1"), TODAY, &mut ids);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidTransition { .. })
    ));
}

#[test]
fn test_cancel_twice_fails_without_further_mutation() {
    let state = run_all(
        create_test_state(),
        vec![
            create_trip_command("V1", "D1", 20000),
            dispatch("T1"),
            cancel("T1"),
        ],
    );
    let mut ids = create_test_ids();

    let result = apply(&state, cancel("T1"), TODAY, &mut ids);
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidTransition { .. })
    ));
    assert_eq!(vehicle_status(&state, "V1"), VehicleStatus::Available);
    assert_eq!(driver_status(&state, "D1"), DriverStatus::OnDuty);
}

// ============================================================================
// Cross-entity invariants
// ============================================================================

/// For every dispatched trip the referenced vehicle and driver are On Trip;
/// for trips in any other status no reservation is held on their account.
fn assert_reservation_invariant(state: &State) {
    for trip in &state.trips {
        if trip.status == TripStatus::Dispatched {
            let vehicle = state.find_vehicle(&trip.vehicle_id).unwrap();
            let driver = state.find_driver(&trip.driver_id).unwrap();
            assert_eq!(vehicle.status, VehicleStatus::OnTrip, "trip {}", trip.id);
            assert_eq!(driver.status, DriverStatus::OnTrip, "trip {}", trip.id);
        }
    }
    for vehicle in &state.vehicles {
        if vehicle.status == VehicleStatus::OnTrip {
            assert!(
                state
                    .trips
                    .iter()
                    .any(|t| t.status == TripStatus::Dispatched && t.vehicle_id == vehicle.id),
                "vehicle {} is On Trip with no dispatched trip",
                vehicle.id
            );
        }
    }
    for driver in &state.drivers {
        if driver.status == DriverStatus::OnTrip {
            assert!(
                state
                    .trips
                    .iter()
                    .any(|t| t.status == TripStatus::Dispatched && t.driver_id == driver.id),
                "driver {} is On Trip with no dispatched trip",
                driver.id
            );
        }
    }
}

#[test]
fn test_invariant_holds_across_full_lifecycle() {
    let mut ids = create_test_ids();
    let mut state = create_test_state();

    let steps = vec![
        create_trip_command("V1", "D1", 20000),
        dispatch("T1"),
        complete("T1", 1500),
        create_trip_command("V1", "D1", 30000),
        dispatch("T2"),
        cancel("T2"),
        create_trip_command("V1", "D1", 10000),
        cancel("T3"),
    ];

    for command in steps {
        let result = apply(&state, command, TODAY, &mut ids).unwrap();
        state = result.new_state;
        assert_reservation_invariant(&state);
    }
}
