//! Equality/range filter specification for vehicle lookups.
//!
//! # Responsibility
//! - Describe conjunctive equality and inclusive range predicates.
//! - Evaluate a filter against a single vehicle.
//!
//! # Invariants
//! - A predicate is inactive when it holds its field's zero/empty value.
//! - A range is inactive when either bound is zero.
//! - Active predicates are combined with AND; no active predicate matches all.
//!
//! Zero doubles as "unset", so filtering for a literal zero capacity, year or
//! dimension is not expressible.

use crate::model::vehicle::Vehicle;

/// Inclusive `[min, max]` range predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeFilter<T> {
    /// Lower bound, inclusive. Zero leaves the whole range inactive.
    pub min: T,
    /// Upper bound, inclusive. Zero leaves the whole range inactive.
    pub max: T,
}

impl<T> RangeFilter<T>
where
    T: Copy + PartialOrd + Default,
{
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Returns whether both bounds are set (non-zero).
    pub fn is_active(&self) -> bool {
        let zero = T::default();
        self.min != zero && self.max != zero
    }

    /// Inclusive bounds check. Does not consult `is_active`.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    fn admits(&self, value: T) -> bool {
        !self.is_active() || self.contains(value)
    }
}

/// Query specification for `find_all_equal_to`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EqualFilter {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub fabrication_year: i32,
    pub capacity: u32,
    pub fuel_type: String,
    pub transmission: String,

    pub fabrication_year_range: RangeFilter<i32>,
    pub length_range: RangeFilter<f64>,
    pub width_range: RangeFilter<f64>,
    pub weight_range: RangeFilter<f64>,
}

impl EqualFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact brand match; empty disables it.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Exact model match; empty disables it.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Exact color match; empty disables it.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Exact fabrication year; `0` disables it.
    pub fn with_fabrication_year(mut self, year: i32) -> Self {
        self.fabrication_year = year;
        self
    }

    /// Exact passenger capacity; `0` disables it.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Exact fuel type match; empty disables it.
    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = fuel_type.into();
        self
    }

    /// Exact transmission match; empty disables it.
    pub fn with_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = transmission.into();
        self
    }

    /// Inclusive fabrication year range; a zero bound disables it.
    pub fn with_fabrication_year_range(mut self, min: i32, max: i32) -> Self {
        self.fabrication_year_range = RangeFilter::new(min, max);
        self
    }

    /// Inclusive length range; a zero bound disables it.
    pub fn with_length_range(mut self, min: f64, max: f64) -> Self {
        self.length_range = RangeFilter::new(min, max);
        self
    }

    /// Inclusive width range; a zero bound disables it.
    pub fn with_width_range(mut self, min: f64, max: f64) -> Self {
        self.width_range = RangeFilter::new(min, max);
        self
    }

    /// Inclusive weight range; a zero bound disables it.
    pub fn with_weight_range(mut self, min: f64, max: f64) -> Self {
        self.weight_range = RangeFilter::new(min, max);
        self
    }

    /// Returns whether no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.brand.is_empty()
            && self.model.is_empty()
            && self.color.is_empty()
            && self.fabrication_year == 0
            && self.capacity == 0
            && self.fuel_type.is_empty()
            && self.transmission.is_empty()
            && !self.fabrication_year_range.is_active()
            && !self.length_range.is_active()
            && !self.width_range.is_active()
            && !self.weight_range.is_active()
    }

    /// Returns whether `vehicle` satisfies every active predicate.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        text_admits(&self.brand, &vehicle.brand)
            && text_admits(&self.model, &vehicle.model)
            && text_admits(&self.color, &vehicle.color)
            && (self.fabrication_year == 0 || self.fabrication_year == vehicle.fabrication_year)
            && (self.capacity == 0 || self.capacity == vehicle.capacity)
            && text_admits(&self.fuel_type, &vehicle.fuel_type)
            && text_admits(&self.transmission, &vehicle.transmission)
            && self
                .fabrication_year_range
                .admits(vehicle.fabrication_year)
            && self.length_range.admits(vehicle.dimensions.length)
            && self.width_range.admits(vehicle.dimensions.width)
            && self.weight_range.admits(vehicle.weight)
    }
}

fn text_admits(expected: &str, actual: &str) -> bool {
    expected.is_empty() || expected == actual
}
