//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `vehicle_core` linkage and print version metadata.
//! - Exercise the service against a seeded in-memory store.
//!
//! Logging is enabled when `VEHICLE_LOG_DIR` is set (absolute path);
//! `VEHICLE_LOG_LEVEL` overrides the build default level.

use std::collections::BTreeSet;
use std::process::ExitCode;
use vehicle_core::{
    init_logging, InMemoryVehicleRepository, LogConfig, Vehicle, VehicleService,
    VehicleServiceError,
};

fn main() -> ExitCode {
    println!("vehicle_core ping={}", vehicle_core::ping());
    println!("vehicle_core version={}", vehicle_core::core_version());

    match LogConfig::from_env().and_then(|config| match config {
        Some(config) => init_logging(&config).map(|()| true),
        None => Ok(false),
    }) {
        Ok(enabled) => println!("logging enabled={enabled}"),
        Err(err) => {
            eprintln!("logging setup failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    let service = VehicleService::new(InMemoryVehicleRepository::new());
    if let Err(err) = run_demo(&service) {
        log::error!(
            "event=cli_demo module=cli status=error status_code={}",
            err.status_code()
        );
        eprintln!("demo failed: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_demo(service: &VehicleService<InMemoryVehicleRepository>) -> Result<(), VehicleServiceError> {
    for vehicle in demo_fleet() {
        service.add(vehicle)?;
    }

    let vehicles = service.find_all()?;
    let mut ids: Vec<_> = vehicles.keys().copied().collect();
    ids.sort_unstable();
    for id in ids {
        match serde_json::to_string(&vehicles[&id]) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("failed to encode vehicle {id}: {err}"),
        }
    }

    let brands: BTreeSet<&str> = vehicles.values().map(|v| v.brand.as_str()).collect();
    for brand in brands {
        println!("avg_capacity brand={brand} value={:.2}", service.get_avg_capacity(brand)?);
    }

    let too_old =
        Vehicle::new("Benz", "Patent-Motorwagen", "HIST-1885").with_fabrication_year(1885);
    if let Err(err) = service.add(too_old) {
        println!("rejected status={} reason={err}", err.status_code());
    }
    Ok(())
}

fn demo_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::new("Toyota", "Corolla", "TY-001")
            .with_color("red")
            .with_fabrication_year(2018)
            .with_capacity(5)
            .with_max_speed(180.0)
            .with_fuel_type("gasoline")
            .with_transmission("manual")
            .with_weight(1300.0)
            .with_dimensions(1.4, 4.6, 1.8),
        Vehicle::new("Toyota", "Hiace", "TY-002")
            .with_color("white")
            .with_fabrication_year(2020)
            .with_capacity(12)
            .with_max_speed(150.0)
            .with_fuel_type("diesel")
            .with_transmission("manual")
            .with_weight(2200.0)
            .with_dimensions(2.1, 5.3, 1.9),
        Vehicle::new("Fiat", "500", "FT-001")
            .with_color("blue")
            .with_fabrication_year(2015)
            .with_capacity(4)
            .with_max_speed(160.0)
            .with_fuel_type("gasoline")
            .with_transmission("automatic")
            .with_weight(900.0)
            .with_dimensions(1.5, 3.6, 1.6),
    ]
}
