// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary tests for vehicle registry, service log, and stats handlers.

use crate::error::ApiError;
use crate::handlers::{
    complete_service_log, create_service_log, get_driver_expense_stats, get_fleet_summary,
    list_available_vehicles, list_service_logs, list_vehicles, register_vehicle,
    toggle_vehicle_retired, update_vehicle,
};
use crate::request_response::{
    CompleteServiceLogRequest, CreateServiceLogRequest, DriverExpenseStatsRequest,
    RegisterVehicleRequest, ToggleVehicleRetiredRequest, UpdateVehicleRequest,
};
use fleet_dispatch_domain::{VehicleId, VehicleStatus};

use super::helpers::{TODAY, seeded_store};

fn register_request(plate: &str) -> RegisterVehicleRequest {
    RegisterVehicleRequest {
        name_model: String::from("Scania R500"),
        plate_number: String::from(plate),
        max_capacity: String::from("42000"),
        odometer: String::from("0"),
    }
}

#[test]
fn test_register_vehicle_normalizes_plate() {
    let mut store = seeded_store();

    let response = register_vehicle(&mut store, register_request("sc-5521"), TODAY).unwrap();
    assert_eq!(response.plate_number, "SC-5521");

    let vehicle = store
        .state()
        .find_vehicle(&VehicleId::new(&response.vehicle_id))
        .unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Available);
}

#[test]
fn test_register_vehicle_rejects_duplicate_plate() {
    let mut store = seeded_store();

    // XYZ-1234 belongs to seed vehicle V1.
    let err = register_vehicle(&mut store, register_request("xyz-1234"), TODAY).unwrap_err();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "unique_plate"
    ));
}

#[test]
fn test_register_vehicle_rejects_zero_capacity() {
    let mut store = seeded_store();

    let request = RegisterVehicleRequest {
        max_capacity: String::from("0"),
        ..register_request("SC-5521")
    };
    let err = register_vehicle(&mut store, request, TODAY).unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidInput { field, .. } if field == "max capacity"
    ));
}

#[test]
fn test_update_vehicle_enforces_odometer_monotonicity() {
    let mut store = seeded_store();

    // Seed vehicle V1 sits at 125000 mi.
    let err = update_vehicle(
        &mut store,
        UpdateVehicleRequest {
            vehicle_id: String::from("V1"),
            name_model: String::from("Freightliner M2"),
            max_capacity: String::from("28000"),
            odometer: String::from("100000"),
        },
        TODAY,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidInput { field, .. } if field == "odometer"
    ));
}

#[test]
fn test_toggle_retired_round_trip() {
    let mut store = seeded_store();

    let retired = toggle_vehicle_retired(
        &mut store,
        ToggleVehicleRetiredRequest {
            vehicle_id: String::from("V1"),
        },
        TODAY,
    )
    .unwrap();
    assert_eq!(retired.status, "Retired");

    let reactivated = toggle_vehicle_retired(
        &mut store,
        ToggleVehicleRetiredRequest {
            vehicle_id: String::from("V1"),
        },
        TODAY,
    )
    .unwrap();
    assert_eq!(reactivated.status, "Available");
}

#[test]
fn test_available_listing_shrinks_after_retirement() {
    let mut store = seeded_store();
    assert_eq!(list_available_vehicles(&store).vehicles.len(), 3);

    toggle_vehicle_retired(
        &mut store,
        ToggleVehicleRetiredRequest {
            vehicle_id: String::from("V1"),
        },
        TODAY,
    )
    .unwrap();

    assert_eq!(list_available_vehicles(&store).vehicles.len(), 2);
    // The full listing still shows every vehicle.
    assert_eq!(list_vehicles(&store).vehicles.len(), 5);
}

#[test]
fn test_service_log_lifecycle_through_the_boundary() {
    let mut store = seeded_store();

    let opened = create_service_log(
        &mut store,
        CreateServiceLogRequest {
            vehicle_id: String::from("V1"),
            service_type: String::from("Engine Oil Change"),
            category: String::from("Preventative"),
            description: String::from("Regular 10k mile service"),
            cost: String::from("450"),
        },
        TODAY,
    )
    .unwrap();

    assert_eq!(
        store
            .state()
            .find_vehicle(&VehicleId::new("V1"))
            .unwrap()
            .status,
        VehicleStatus::Maintenance
    );

    complete_service_log(
        &mut store,
        CompleteServiceLogRequest {
            log_id: opened.log_id.clone(),
        },
        TODAY,
    )
    .unwrap();

    assert_eq!(
        store
            .state()
            .find_vehicle(&VehicleId::new("V1"))
            .unwrap()
            .status,
        VehicleStatus::Available
    );
}

#[test]
fn test_service_log_with_unknown_category_is_invalid_input() {
    let mut store = seeded_store();

    let err = create_service_log(
        &mut store,
        CreateServiceLogRequest {
            vehicle_id: String::from("V1"),
            service_type: String::from("Oil Change"),
            category: String::from("Cosmetic"),
            description: String::new(),
            cost: String::from("100"),
        },
        TODAY,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidInput { field, .. } if field == "service category"
    ));
}

#[test]
fn test_fleet_summary_reflects_mutations() {
    let mut store = seeded_store();
    let before = get_fleet_summary(&store);
    assert_eq!(before.available, 3);

    toggle_vehicle_retired(
        &mut store,
        ToggleVehicleRetiredRequest {
            vehicle_id: String::from("V1"),
        },
        TODAY,
    )
    .unwrap();

    let after = get_fleet_summary(&store);
    assert_eq!(after.available, 2);
    assert_eq!(after.retired, 2);
}

#[test]
fn test_driver_expense_stats_for_unknown_driver() {
    let store = seeded_store();

    let err = get_driver_expense_stats(
        &store,
        DriverExpenseStatsRequest {
            driver_id: String::from("D404"),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_driver_expense_stats_over_seed_ledger() {
    let store = seeded_store();

    let stats = get_driver_expense_stats(
        &store,
        DriverExpenseStatsRequest {
            driver_id: String::from("D1"),
        },
    )
    .unwrap();
    assert_eq!(stats.count, 1);
    assert_eq!(stats.total_spend, 9750);
}

#[test]
fn test_list_service_logs_newest_first() {
    let store = seeded_store();

    let listed = list_service_logs(&store);
    assert_eq!(listed.service_logs.len(), 3);
    // Seed log LOG-3 was opened last.
    assert_eq!(listed.service_logs[0].id, "LOG-3");
}
