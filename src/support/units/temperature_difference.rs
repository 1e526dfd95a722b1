use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// [`uom`] distinguishes absolute temperatures ([`ThermodynamicTemperature`])
/// from temperature differences ([`TemperatureInterval`]) and does not
/// implement subtraction between two absolute temperatures. Equation-of-state
/// formulas lean heavily on `T − T₀` terms, so this trait provides the
/// subtraction as a [`minus`](Self::minus) method returning an interval.
///
/// For the upstream discussion of this limitation, see
/// [uom#380](https://github.com/iliekturtles/uom/issues/380) and
/// [uom#289](https://github.com/iliekturtles/uom/issues/289).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
