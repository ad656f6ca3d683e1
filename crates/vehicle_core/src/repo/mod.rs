//! Repository layer abstractions and the in-memory store.
//!
//! # Responsibility
//! - Define the vehicle data access contract.
//! - Own the id -> vehicle collection and its uniqueness invariant.
//!
//! # Invariants
//! - The repository is the only writer of the collection.
//! - Read APIs hand out clones, never references into live state.
//! - Conflicts and missing records are semantic errors, not panics.

pub mod vehicle_repo;
