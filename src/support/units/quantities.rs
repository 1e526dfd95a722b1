use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Pressure, Ratio},
        pressure::pascal,
        ratio::ratio,
    },
    typenum::{N1, N2, P1, P2, Z0},
};

/// Molar entropy, J/(mol·K) in SI.
///
/// Dimensionally identical to [`uom::si::f64::MolarHeatCapacity`]; the alias
/// names the role the quantity plays rather than its dimension.
pub type MolarEntropy = Quantity<ISQ<P2, P1, N2, Z0, N1, N1, Z0>, SI<f64>, f64>;

/// Reciprocal pressure, 1/Pa in SI.
///
/// Carried by the second pressure derivative of the isothermal bulk modulus,
/// `K''₀`. Construct values with [`reciprocal_pascals`].
pub type ReciprocalPressure = Quantity<ISQ<P1, N1, P2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Volumetric thermal expansivity, 1/K in SI.
pub type ThermalExpansivity = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`ReciprocalPressure`] from a value expressed in 1/Pa.
///
/// [`uom`] has no named quantity for this dimension, so there is no unit to
/// use with `Quantity::new`. Dividing a dimensionless ratio by one pascal
/// produces the correctly dimensioned quantity.
#[must_use]
pub fn reciprocal_pascals(value: f64) -> ReciprocalPressure {
    Ratio::new::<ratio>(value) / Pressure::new::<pascal>(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reciprocal_pressure_cancels_against_pressure() {
        let kdprime = reciprocal_pascals(-0.02e-9);
        let k = Pressure::new::<pascal>(250.0e9);

        let product = (k * kdprime).get::<ratio>();
        assert_relative_eq!(product, -5.0);
    }
}
