use thiserror::Error;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// Errors that may occur when evaluating an equation of state.
///
/// Every variant is a local, recoverable condition: a sweep over many
/// pressure-temperature points can match on the variant, skip or report the
/// bad point, and continue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EosError {
    /// An input is outside the mathematical validity of the model.
    ///
    /// For example, a non-positive volume feeding a fractional power, or a
    /// non-positive temperature feeding a logarithm.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// No volume produces the requested pressure at this temperature.
    ///
    /// The bracket search found no sign change in the pressure residual,
    /// meaning the requested pressure lies outside the equation of state's
    /// range of validity for this material.
    #[error(
        "cannot find a volume for {pressure:?} at {temperature:?}; the pressure may be outside \
         the range of validity for this equation of state"
    )]
    RootNotBracketed {
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    },

    /// The volume refinement hit its iteration budget before converging.
    #[error("volume search hit the iteration limit after {iters} iterations")]
    NonConvergence {
        /// Pressure residual at the best volume estimate.
        residual: Pressure,
        /// Iterations performed.
        iters: usize,
    },
}
