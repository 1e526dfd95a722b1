//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., pressure, volume,
//! temperature). This module provides extensions that are useful for
//! equation-of-state modeling but aren't included in [`uom`]:
//!
//! - Quantity aliases for dimensions [`uom`] has no named quantity for,
//!   such as the reciprocal pressure carried by the second pressure
//!   derivative of the bulk modulus.
//! - The [`TemperatureDifference`] trait, which subtracts one absolute
//!   temperature from another to get a temperature interval. [`uom`] does not
//!   allow subtracting two `ThermodynamicTemperature` values directly.

mod quantities;
mod temperature_difference;

pub use quantities::{MolarEntropy, ReciprocalPressure, ThermalExpansivity, reciprocal_pascals};
pub use temperature_difference::TemperatureDifference;
