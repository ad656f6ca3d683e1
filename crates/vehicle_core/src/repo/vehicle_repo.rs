//! Vehicle repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide create/list/filter/update APIs over the vehicle collection.
//! - Assign identifiers and enforce registration uniqueness.
//!
//! # Invariants
//! - New ids are `max(existing ids) + 1`, starting at 1.
//! - No two stored vehicles share a registration.
//! - `update` never changes a vehicle's id.
//! - Every returned value is an independent copy.

use crate::model::filter::EqualFilter;
use crate::model::vehicle::{Vehicle, VehicleId};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Snapshot of vehicles keyed by id. Iteration order is unspecified.
pub type VehicleMap = HashMap<VehicleId, Vehicle>;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for vehicle mutations and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Another stored vehicle already holds this registration.
    VehicleExistent { registration: String },
    /// Update target id is not stored.
    VehicleNotFound(VehicleId),
    /// Id `0` is reserved for unsaved vehicles and cannot be seeded.
    ReservedId(VehicleId),
    /// The highest stored id leaves no room for another one.
    IdSpaceExhausted,
    /// A writer panicked while holding the collection lock.
    LockPoisoned(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VehicleExistent { registration } => {
                write!(f, "vehicle registration already exists: {registration}")
            }
            Self::VehicleNotFound(id) => write!(f, "vehicle not found: {id}"),
            Self::ReservedId(id) => write!(f, "vehicle id {id} is reserved"),
            Self::IdSpaceExhausted => write!(f, "vehicle id space exhausted"),
            Self::LockPoisoned(operation) => {
                write!(f, "vehicle store lock poisoned during {operation}")
            }
        }
    }
}

impl Error for RepoError {}

/// Repository interface for vehicle CRUD operations.
pub trait VehicleRepository {
    fn find_all(&self) -> RepoResult<VehicleMap>;
    fn add(&self, candidate: Vehicle) -> RepoResult<Vehicle>;
    fn update(&self, vehicle: Vehicle) -> RepoResult<Vehicle>;
    fn find_all_equal_to(&self, filter: &EqualFilter) -> RepoResult<VehicleMap>;
}

impl<R: VehicleRepository + ?Sized> VehicleRepository for &R {
    fn find_all(&self) -> RepoResult<VehicleMap> {
        (**self).find_all()
    }

    fn add(&self, candidate: Vehicle) -> RepoResult<Vehicle> {
        (**self).add(candidate)
    }

    fn update(&self, vehicle: Vehicle) -> RepoResult<Vehicle> {
        (**self).update(vehicle)
    }

    fn find_all_equal_to(&self, filter: &EqualFilter) -> RepoResult<VehicleMap> {
        (**self).find_all_equal_to(filter)
    }
}

/// Process-lifetime vehicle store backed by a `HashMap`.
///
/// Shared-read / exclusive-write through an internal `RwLock`, so one instance
/// can be handed to several callers by reference.
#[derive(Debug, Default)]
pub struct InMemoryVehicleRepository {
    db: RwLock<VehicleMap>,
}

impl InMemoryVehicleRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `vehicles`.
    ///
    /// Map keys are authoritative: each record's `id` field is rewritten to
    /// its key.
    ///
    /// # Errors
    /// - `ReservedId` when a key is `0`.
    /// - `VehicleExistent` when two records share a non-empty registration.
    pub fn with_vehicles(vehicles: VehicleMap) -> RepoResult<Self> {
        let mut db = VehicleMap::with_capacity(vehicles.len());
        for (id, mut vehicle) in vehicles {
            if id == 0 {
                return Err(RepoError::ReservedId(id));
            }
            if registration_taken(&db, &vehicle.registration, None) {
                return Err(RepoError::VehicleExistent {
                    registration: vehicle.registration,
                });
            }
            vehicle.id = id;
            db.insert(id, vehicle);
        }
        Ok(Self {
            db: RwLock::new(db),
        })
    }

    /// Returns the number of stored vehicles.
    pub fn len(&self) -> RepoResult<usize> {
        Ok(self.read("len")?.len())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.read("is_empty")?.is_empty())
    }

    fn read(&self, operation: &'static str) -> RepoResult<RwLockReadGuard<'_, VehicleMap>> {
        self.db
            .read()
            .map_err(|_| RepoError::LockPoisoned(operation))
    }

    fn write(&self, operation: &'static str) -> RepoResult<RwLockWriteGuard<'_, VehicleMap>> {
        self.db
            .write()
            .map_err(|_| RepoError::LockPoisoned(operation))
    }
}

impl VehicleRepository for InMemoryVehicleRepository {
    fn find_all(&self) -> RepoResult<VehicleMap> {
        Ok(self.read("find_all")?.clone())
    }

    fn add(&self, mut candidate: Vehicle) -> RepoResult<Vehicle> {
        let mut db = self.write("add")?;

        if registration_taken(&db, &candidate.registration, None) {
            warn!("event=vehicle_add module=repo status=rejected reason=registration_conflict");
            return Err(RepoError::VehicleExistent {
                registration: candidate.registration,
            });
        }

        let Some(id) = last_id(&db).checked_add(1) else {
            warn!("event=vehicle_add module=repo status=rejected reason=id_space_exhausted");
            return Err(RepoError::IdSpaceExhausted);
        };
        candidate.id = id;
        db.insert(id, candidate.clone());

        info!("event=vehicle_add module=repo status=ok id={id}");
        Ok(candidate)
    }

    fn update(&self, vehicle: Vehicle) -> RepoResult<Vehicle> {
        let mut db = self.write("update")?;
        let id = vehicle.id;

        if !db.contains_key(&id) {
            warn!("event=vehicle_update module=repo status=rejected reason=not_found id={id}");
            return Err(RepoError::VehicleNotFound(id));
        }

        if registration_taken(&db, &vehicle.registration, Some(id)) {
            warn!(
                "event=vehicle_update module=repo status=rejected reason=registration_conflict id={id}"
            );
            return Err(RepoError::VehicleExistent {
                registration: vehicle.registration,
            });
        }

        db.insert(id, vehicle.clone());

        info!("event=vehicle_update module=repo status=ok id={id}");
        Ok(vehicle)
    }

    fn find_all_equal_to(&self, filter: &EqualFilter) -> RepoResult<VehicleMap> {
        let db = self.read("find_all_equal_to")?;
        let matched: VehicleMap = db
            .iter()
            .filter(|(_, vehicle)| filter.matches(vehicle))
            .map(|(id, vehicle)| (*id, vehicle.clone()))
            .collect();

        debug!(
            "event=vehicle_filter module=repo status=ok scanned={} matched={}",
            db.len(),
            matched.len()
        );
        Ok(matched)
    }
}

fn last_id(db: &VehicleMap) -> VehicleId {
    db.keys().copied().max().unwrap_or(0)
}

/// Returns whether a vehicle other than `exclude` holds `registration`.
///
/// Empty registrations never conflict.
fn registration_taken(db: &VehicleMap, registration: &str, exclude: Option<VehicleId>) -> bool {
    !registration.is_empty()
        && db
            .iter()
            .any(|(id, stored)| Some(*id) != exclude && stored.registration == registration)
}
