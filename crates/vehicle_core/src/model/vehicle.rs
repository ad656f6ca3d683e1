//! Vehicle domain model.
//!
//! # Responsibility
//! - Define the canonical vehicle record owned by the store.
//! - Fix the external field naming used by request/response bodies.
//!
//! # Invariants
//! - `id` is assigned by the store; caller-supplied values are ignored on create.
//! - `registration` is business-unique across the stored collection.

use serde::{Deserialize, Serialize};

/// Store-assigned vehicle identifier.
///
/// Identifiers start at 1; `0` means "not yet stored".
pub type VehicleId = u64;

/// Physical dimensions of a vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// Canonical vehicle record.
///
/// Serialized with the flat field names the HTTP layer exchanges
/// (`year`, `passengers`, `height`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Absent in create bodies; defaults to `0` until the store assigns one.
    #[serde(default)]
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    /// External unique identifier such as a license plate.
    pub registration: String,
    pub color: String,
    #[serde(rename = "year")]
    pub fabrication_year: i32,
    /// Passenger capacity.
    #[serde(rename = "passengers")]
    pub capacity: u32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    #[serde(flatten)]
    pub dimensions: Dimensions,
}

impl Vehicle {
    /// Creates an unsaved vehicle with the identifying attributes set.
    ///
    /// Remaining attributes start at their zero values and can be filled in
    /// with the `with_*` helpers or by direct field assignment.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        registration: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            registration: registration.into(),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_fabrication_year(mut self, year: i32) -> Self {
        self.fabrication_year = year;
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = fuel_type.into();
        self
    }

    pub fn with_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = transmission.into();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_dimensions(mut self, height: f64, length: f64, width: f64) -> Self {
        self.dimensions = Dimensions {
            height,
            length,
            width,
        };
        self
    }

    /// Returns whether the store has assigned an identifier yet.
    pub fn is_stored(&self) -> bool {
        self.id != 0
    }
}
