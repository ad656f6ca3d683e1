//! Vehicle use-case service.
//!
//! # Responsibility
//! - Validate candidate vehicles before repository writes.
//! - Expose list/filter lookups and the per-brand capacity aggregate.
//! - Translate repository errors into use-case errors.
//!
//! # Invariants
//! - Writes with a fabrication year before `MIN_FABRICATION_YEAR` never reach
//!   the repository.
//! - Repository outcomes are propagated without retries or recovery.

use crate::model::filter::EqualFilter;
use crate::model::vehicle::{Vehicle, VehicleId};
use crate::repo::vehicle_repo::{RepoError, VehicleMap, VehicleRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Year of the first production automobile; earlier years are rejected.
pub const MIN_FABRICATION_YEAR: i32 = 1886;

/// Attribute name reported when the fabrication year rule fails.
pub const FABRICATION_YEAR_ATTRIBUTE: &str = "FabricationYear";

pub type ServiceResult<T> = Result<T, VehicleServiceError>;

/// Service error for vehicle use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleServiceError {
    /// A supplied value breaks a domain rule.
    InvalidAttribute { attribute: &'static str },
    /// Registration already belongs to another vehicle.
    VehicleExistent { registration: String },
    /// Update target does not exist.
    VehicleNotFound(VehicleId),
    /// Aggregate query matched no vehicle.
    VehiclesNotFound { brand: String },
    /// Store failure outside the domain taxonomy.
    Repo(RepoError),
}

impl VehicleServiceError {
    /// HTTP status the transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAttribute { .. } => 400,
            Self::VehicleExistent { .. } => 409,
            Self::VehicleNotFound(_) | Self::VehiclesNotFound { .. } => 404,
            Self::Repo(_) => 500,
        }
    }
}

impl Display for VehicleServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAttribute { attribute } => write!(f, "attribute {attribute} is invalid"),
            Self::VehicleExistent { registration } => {
                write!(f, "vehicle registration already exists: {registration}")
            }
            Self::VehicleNotFound(id) => write!(f, "vehicle not found: {id}"),
            Self::VehiclesNotFound { brand } => write!(f, "no vehicles found for brand `{brand}`"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for VehicleServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for VehicleServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::VehicleExistent { registration } => Self::VehicleExistent { registration },
            RepoError::VehicleNotFound(id) => Self::VehicleNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper over a vehicle repository.
pub struct VehicleService<R: VehicleRepository> {
    repo: R,
}

impl<R: VehicleRepository> VehicleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a copy of every stored vehicle.
    pub fn find_all(&self) -> ServiceResult<VehicleMap> {
        Ok(self.repo.find_all()?)
    }

    /// Validates and stores a new vehicle.
    ///
    /// # Errors
    /// - `InvalidAttribute` when the fabrication year is before 1886.
    /// - `VehicleExistent` when the registration is already stored.
    pub fn add(&self, candidate: Vehicle) -> ServiceResult<Vehicle> {
        validate_fabrication_year(&candidate, "vehicle_add")?;
        Ok(self.repo.add(candidate)?)
    }

    /// Validates and replaces every attribute of an existing vehicle.
    ///
    /// # Errors
    /// - `InvalidAttribute` when the fabrication year is before 1886.
    /// - `VehicleNotFound` when `vehicle.id` is not stored.
    /// - `VehicleExistent` when another vehicle holds the registration.
    pub fn update(&self, vehicle: Vehicle) -> ServiceResult<Vehicle> {
        validate_fabrication_year(&vehicle, "vehicle_update")?;
        Ok(self.repo.update(vehicle)?)
    }

    /// Returns vehicles matching every active predicate of `filter`.
    pub fn find_all_equal_to(&self, filter: &EqualFilter) -> ServiceResult<VehicleMap> {
        Ok(self.repo.find_all_equal_to(filter)?)
    }

    /// Returns vehicles with exactly this color and fabrication year.
    ///
    /// Empty color or zero year leaves that predicate inactive.
    pub fn find_by_color_and_year(
        &self,
        color: &str,
        fabrication_year: i32,
    ) -> ServiceResult<VehicleMap> {
        let filter = EqualFilter::new()
            .with_color(color)
            .with_fabrication_year(fabrication_year);
        self.find_all_equal_to(&filter)
    }

    /// Returns the mean passenger capacity of vehicles of `brand`.
    ///
    /// Brand matching is exact and case-sensitive.
    ///
    /// # Errors
    /// - `VehiclesNotFound` when no stored vehicle has this brand.
    pub fn get_avg_capacity(&self, brand: &str) -> ServiceResult<f64> {
        let vehicles = self.repo.find_all()?;
        let capacities: Vec<u32> = vehicles
            .values()
            .filter(|vehicle| vehicle.brand == brand)
            .map(|vehicle| vehicle.capacity)
            .collect();

        if capacities.is_empty() {
            warn!("event=vehicle_avg_capacity module=service status=rejected reason=no_match");
            return Err(VehicleServiceError::VehiclesNotFound {
                brand: brand.to_string(),
            });
        }

        let total: f64 = capacities.iter().map(|capacity| f64::from(*capacity)).sum();
        let avg = total / capacities.len() as f64;

        info!(
            "event=vehicle_avg_capacity module=service status=ok matched={}",
            capacities.len()
        );
        Ok(avg)
    }
}

fn validate_fabrication_year(vehicle: &Vehicle, event: &str) -> ServiceResult<()> {
    if vehicle.fabrication_year < MIN_FABRICATION_YEAR {
        warn!(
            "event={event} module=service status=rejected reason=invalid_attribute attribute={FABRICATION_YEAR_ATTRIBUTE}"
        );
        return Err(VehicleServiceError::InvalidAttribute {
            attribute: FABRICATION_YEAR_ATTRIBUTE,
        });
    }
    Ok(())
}
