//! Core use-case services.
//!
//! # Responsibility
//! - Apply domain validation before repository writes.
//! - Compute aggregates over repository query results.

pub mod vehicle_service;
