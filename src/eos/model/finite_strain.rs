//! Eulerian finite-strain helpers.
//!
//! The compressive part of the free energy is a fixed fourth-order expansion
//! in the Eulerian finite strain `f`. The third- and fourth-order
//! coefficients `a₃` and `a₄` are algebraic rearrangements of the expansion
//! in terms of the calibrated bulk modulus and its pressure derivatives; they
//! are not free parameters.

use uom::si::{
    f64::{MolarEnergy, MolarVolume},
    ratio::ratio,
};

use crate::eos::params::SolidParameters;

/// Computes the Eulerian finite strain `f = ½[(V₀/V)^(2/3) − 1]`.
///
/// Domain: `V > 0`. Positive under compression, zero at the reference
/// volume, approaching −½ at infinite expansion.
pub(crate) fn strain(volume: MolarVolume, params: &SolidParameters) -> f64 {
    ((params.v_0 / volume).get::<ratio>().powf(2.0 / 3.0) - 1.0) / 2.0
}

/// Returns the third- and fourth-order expansion coefficients `(a₃, a₄)`.
///
/// `a₃ = 3(K′₀ − 4)` and `a₄ = 9[K₀·K″₀ + K′₀(K′₀ − 7)] + 143`. Shared by
/// the pressure and free-energy formulas so the two cannot drift apart.
pub(crate) fn expansion_coefficients(params: &SolidParameters) -> (f64, f64) {
    let kprime = params.kprime_0;
    let a3 = 3.0 * (kprime - 4.0);
    let a4 = 9.0 * ((params.k_0 * params.kdprime_0).get::<ratio>() + kprime * (kprime - 7.0))
        + 143.0;
    (a3, a4)
}

/// Computes the compressive free energy
/// `F_cmp = 9·K₀·V₀·(f²/2 + a₃·f³/6 + a₄·f⁴/24)`.
pub(crate) fn compressive_free_energy(
    volume: MolarVolume,
    params: &SolidParameters,
) -> MolarEnergy {
    let f = strain(volume, params);
    let (a3, a4) = expansion_coefficients(params);

    let series = f * f / 2.0 + a3 * f * f * f / 6.0 + a4 * f * f * f * f / 24.0;
    9.0 * params.k_0 * params.v_0 * series
}
