//! Core domain logic for the vehicle record store.
//! This crate owns the vehicle collection and its business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, logging_status, LogConfig, LogLevel, LoggingError,
};
pub use model::filter::{EqualFilter, RangeFilter};
pub use model::vehicle::{Dimensions, Vehicle, VehicleId};
pub use repo::vehicle_repo::{
    InMemoryVehicleRepository, RepoError, RepoResult, VehicleMap, VehicleRepository,
};
pub use service::vehicle_service::{
    ServiceResult, VehicleService, VehicleServiceError, FABRICATION_YEAR_ATTRIBUTE,
    MIN_FABRICATION_YEAR,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
