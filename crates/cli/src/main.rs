// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command line surface for the Fleet Dispatch System.
//!
//! Arguments are passed through to the API boundary as the raw strings a
//! form would submit; every validation rule lives below this layer. State is
//! persisted as JSON files inside the data directory, so sessions pick up
//! where the previous one left off.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use fleet_dispatch_api::{
    CancelTripRequest, CompleteServiceLogRequest, CompleteTripRequest, CreateServiceLogRequest,
    CreateTripRequest, DemoConfig, DispatchTripRequest, DriverExpenseStatsRequest,
    LogExpenseRequest, RegisterVehicleRequest, ToggleVehicleRetiredRequest, UpdateVehicleRequest,
    cancel_trip, complete_service_log, complete_trip, create_service_log, create_trip,
    dispatch_trip, generate_state, get_driver_expense_stats, get_fleet_summary,
    list_available_vehicles, list_drivers, list_eligible_drivers, list_expenses,
    list_service_logs, list_trips, list_vehicles, log_expense, register_vehicle,
    toggle_vehicle_retired, update_vehicle,
};
use fleet_dispatch_store::{FleetStore, JsonFileBackend};
use serde::Serialize;
use std::path::PathBuf;
use time::{Date, OffsetDateTime};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Fleet Dispatch CLI - trip dispatch, vehicle registry, maintenance logs,
/// and expenses over a JSON file store.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the persisted JSON data files.
    #[arg(short, long, default_value = "fleet-data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Headline fleet figures.
    Summary,

    /// Vehicle registry operations.
    #[command(subcommand)]
    Vehicle(VehicleCommand),

    /// Driver roster queries.
    #[command(subcommand)]
    Driver(DriverCommand),

    /// Trip lifecycle operations.
    #[command(subcommand)]
    Trip(TripCommand),

    /// Maintenance service logs.
    #[command(subcommand)]
    Service(ServiceCommand),

    /// Trip expenses.
    #[command(subcommand)]
    Expense(ExpenseCommand),

    /// Replace the dataset with a randomized demo population.
    Demo {
        /// Number of vehicles to generate.
        #[arg(long, default_value_t = 50)]
        vehicles: usize,

        /// Number of drivers to generate.
        #[arg(long, default_value_t = 40)]
        drivers: usize,

        /// Number of trips to generate.
        #[arg(long, default_value_t = 75)]
        trips: usize,
    },
}

#[derive(Debug, Subcommand)]
enum VehicleCommand {
    /// List vehicles.
    List {
        /// Only vehicles available for assignment.
        #[arg(long)]
        available: bool,
    },

    /// Register a new vehicle.
    Register {
        /// Display name, e.g. "Scania R500".
        name_model: String,
        /// License plate (unique among non-retired vehicles).
        plate_number: String,
        /// Maximum cargo capacity in pounds.
        max_capacity: String,
        /// Current odometer reading in miles.
        odometer: String,
    },

    /// Update a vehicle's name, capacity, or odometer. The plate is
    /// immutable.
    Update {
        /// The vehicle identifier.
        vehicle_id: String,
        /// New display name.
        name_model: String,
        /// New maximum capacity in pounds.
        max_capacity: String,
        /// New odometer reading in miles (may not decrease).
        odometer: String,
    },

    /// Toggle a vehicle between Available and Retired.
    Retire {
        /// The vehicle identifier.
        vehicle_id: String,
    },
}

#[derive(Debug, Subcommand)]
enum DriverCommand {
    /// List drivers.
    List {
        /// Only drivers eligible for a new assignment today.
        #[arg(long)]
        eligible: bool,
    },
}

#[derive(Debug, Subcommand)]
enum TripCommand {
    /// List trips, active first.
    List,

    /// Create a trip in the Draft state.
    Create {
        /// The vehicle identifier.
        vehicle_id: String,
        /// The driver identifier.
        driver_id: String,
        /// Cargo weight in pounds.
        cargo_weight: String,
        /// Free-text origin label.
        origin: String,
        /// Free-text destination label.
        destination: String,
        /// Starting odometer reading in miles.
        start_odometer: String,
    },

    /// Dispatch a draft trip, reserving its vehicle and driver.
    Dispatch {
        /// The trip identifier.
        trip_id: String,
    },

    /// Complete a dispatched trip with its end odometer reading.
    Complete {
        /// The trip identifier.
        trip_id: String,
        /// End odometer reading in miles.
        end_odometer: String,
    },

    /// Cancel a draft or dispatched trip.
    Cancel {
        /// The trip identifier.
        trip_id: String,
    },
}

#[derive(Debug, Subcommand)]
enum ServiceCommand {
    /// List maintenance history, newest first.
    List,

    /// Open a service log, holding the vehicle in the shop.
    Open {
        /// The vehicle identifier.
        vehicle_id: String,
        /// Short description of the work, e.g. "Engine Oil Change".
        service_type: String,
        /// Cost in whole currency units.
        cost: String,
        /// "Preventative" or "Reactive".
        #[arg(long, default_value = "Preventative")]
        category: String,
        /// Free-text detail.
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Complete an open service log.
    Complete {
        /// The log identifier.
        log_id: String,
    },
}

#[derive(Debug, Subcommand)]
enum ExpenseCommand {
    /// List expense records.
    List,

    /// Log an expense against a dispatched or completed trip.
    Log {
        /// The trip identifier.
        trip_id: String,
        /// Fuel cost in whole currency units.
        fuel_cost: String,
        /// Miscellaneous cost. Defaults to zero.
        #[arg(long, default_value = "")]
        misc: String,
    },

    /// Aggregated expense figures for one driver.
    Stats {
        /// The driver identifier.
        driver_id: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    let backend = JsonFileBackend::open(&args.data_dir)?;
    let mut store = FleetStore::open(backend);
    let today: Date = OffsetDateTime::now_utc().date();

    match args.command {
        Command::Summary => print_json(&get_fleet_summary(&store)),
        Command::Vehicle(command) => run_vehicle(&mut store, command, today),
        Command::Driver(command) => run_driver(&store, command, today),
        Command::Trip(command) => run_trip(&mut store, command, today),
        Command::Service(command) => run_service(&mut store, command, today),
        Command::Expense(command) => run_expense(&mut store, command, today),
        Command::Demo {
            vehicles,
            drivers,
            trips,
        } => {
            let config = DemoConfig {
                vehicles,
                drivers,
                trips,
            };
            let state = generate_state(&config, today, &mut rand::rng());
            let event = store.reset(state)?;
            info!("{}", event.details.unwrap_or_default());
            print_json(&get_fleet_summary(&store))
        }
    }
}

fn run_vehicle(
    store: &mut FleetStore<JsonFileBackend>,
    command: VehicleCommand,
    today: Date,
) -> Result<()> {
    match command {
        VehicleCommand::List { available } => {
            if available {
                print_json(&list_available_vehicles(store))
            } else {
                print_json(&list_vehicles(store))
            }
        }
        VehicleCommand::Register {
            name_model,
            plate_number,
            max_capacity,
            odometer,
        } => {
            let response = register_vehicle(
                store,
                RegisterVehicleRequest {
                    name_model,
                    plate_number,
                    max_capacity,
                    odometer,
                },
                today,
            )?;
            print_json(&response)
        }
        VehicleCommand::Update {
            vehicle_id,
            name_model,
            max_capacity,
            odometer,
        } => {
            let response = update_vehicle(
                store,
                UpdateVehicleRequest {
                    vehicle_id,
                    name_model,
                    max_capacity,
                    odometer,
                },
                today,
            )?;
            print_json(&response)
        }
        VehicleCommand::Retire { vehicle_id } => {
            let response =
                toggle_vehicle_retired(store, ToggleVehicleRetiredRequest { vehicle_id }, today)?;
            print_json(&response)
        }
    }
}

fn run_driver(
    store: &FleetStore<JsonFileBackend>,
    command: DriverCommand,
    today: Date,
) -> Result<()> {
    match command {
        DriverCommand::List { eligible } => {
            if eligible {
                print_json(&list_eligible_drivers(store, today))
            } else {
                print_json(&list_drivers(store))
            }
        }
    }
}

fn run_trip(
    store: &mut FleetStore<JsonFileBackend>,
    command: TripCommand,
    today: Date,
) -> Result<()> {
    match command {
        TripCommand::List => print_json(&list_trips(store)),
        TripCommand::Create {
            vehicle_id,
            driver_id,
            cargo_weight,
            origin,
            destination,
            start_odometer,
        } => {
            let response = create_trip(
                store,
                CreateTripRequest {
                    vehicle_id,
                    driver_id,
                    cargo_weight,
                    origin,
                    destination,
                    start_odometer,
                },
                today,
            )?;
            print_json(&response)
        }
        TripCommand::Dispatch { trip_id } => {
            let response = dispatch_trip(store, DispatchTripRequest { trip_id }, today)?;
            print_json(&response)
        }
        TripCommand::Complete {
            trip_id,
            end_odometer,
        } => {
            let response = complete_trip(
                store,
                CompleteTripRequest {
                    trip_id,
                    end_odometer,
                },
                today,
            )?;
            print_json(&response)
        }
        TripCommand::Cancel { trip_id } => {
            let response = cancel_trip(store, CancelTripRequest { trip_id }, today)?;
            print_json(&response)
        }
    }
}

fn run_service(
    store: &mut FleetStore<JsonFileBackend>,
    command: ServiceCommand,
    today: Date,
) -> Result<()> {
    match command {
        ServiceCommand::List => print_json(&list_service_logs(store)),
        ServiceCommand::Open {
            vehicle_id,
            service_type,
            cost,
            category,
            description,
        } => {
            let response = create_service_log(
                store,
                CreateServiceLogRequest {
                    vehicle_id,
                    service_type,
                    category,
                    description,
                    cost,
                },
                today,
            )?;
            print_json(&response)
        }
        ServiceCommand::Complete { log_id } => {
            let response = complete_service_log(store, CompleteServiceLogRequest { log_id }, today)?;
            print_json(&response)
        }
    }
}

fn run_expense(
    store: &mut FleetStore<JsonFileBackend>,
    command: ExpenseCommand,
    today: Date,
) -> Result<()> {
    match command {
        ExpenseCommand::List => print_json(&list_expenses(store)),
        ExpenseCommand::Log {
            trip_id,
            fuel_cost,
            misc,
        } => {
            let response = log_expense(
                store,
                LogExpenseRequest {
                    trip_id,
                    fuel_cost,
                    misc_expense: misc,
                },
                today,
            )?;
            print_json(&response)
        }
        ExpenseCommand::Stats { driver_id } => {
            let response = get_driver_expense_stats(store, DriverExpenseStatsRequest { driver_id })?;
            print_json(&response)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
