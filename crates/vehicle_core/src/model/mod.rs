//! Vehicle domain model and query specification.
//!
//! # Responsibility
//! - Define the vehicle record shared by store, service and callers.
//! - Define the filter shape used for multi-field lookups.
//!
//! # Invariants
//! - Every stored vehicle is identified by a store-assigned `VehicleId`.
//! - Records are never hard-deleted by core.

pub mod filter;
pub mod vehicle;
