use num_traits::Float;
use thiserror::Error;

/// Default growth ratio for the expanding bracket search.
///
/// Each failed probe multiplies the step by this ratio, so the searched
/// interval grows geometrically while earlier probes stay densely spaced
/// near the seed.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Configuration for the expanding bracket search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketConfig<F> {
    /// Factor applied to the probe step after each failed iteration.
    ///
    /// Must be greater than one for the search space to grow.
    pub growth: F,

    /// Maximum number of expansion steps before giving up.
    pub max_iters: usize,
}

impl Default for BracketConfig<f64> {
    fn default() -> Self {
        Self {
            growth: GOLDEN_RATIO,
            max_iters: 100,
        }
    }
}

/// Errors that can occur during the bracket search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BracketError {
    /// The search space was exhausted without finding a sign change.
    ///
    /// For a pressure-volume inversion this means the requested pressure is
    /// not achieved at any probed volume.
    #[error("no sign change found within {iters} expansion steps")]
    NoSignChange { iters: usize },

    /// The seed point, the initial step, or the function value at the seed
    /// was not a finite number.
    #[error("bracket search seeded with a non-finite point, step, or residual")]
    InvalidSeed,
}

/// An interval over which a function changes sign.
///
/// `a` and `b` are not necessarily ordered; the guarantee is that `fa` and
/// `fb` have opposite signs (or one of them is exactly zero), so a root lies
/// between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<F> {
    pub a: F,
    pub b: F,
    pub fa: F,
    pub fb: F,
}

/// Searches outward from `x0` for an interval over which `f` changes sign.
///
/// The probe points are `x0 ± dx`, with `dx` multiplied by
/// [`growth`](BracketConfig::growth) after each failed round, so the search
/// covers `x0 ± dx·growthⁿ` after `n` rounds. The first probe whose value has
/// the opposite sign of `f(x0)` closes the bracket.
///
/// Probes at which `f` evaluates to a non-finite value carry no sign
/// information and are skipped; the search keeps expanding on both sides
/// until the iteration cap is hit. This lets a residual report "outside my
/// domain" as `NaN` without aborting the whole search.
///
/// # Errors
///
/// Returns [`BracketError::NoSignChange`] if the iteration cap is exhausted,
/// or [`BracketError::InvalidSeed`] if `x0`, `dx`, or `f(x0)` is non-finite
/// or `dx` is zero.
pub fn bracket<F: Float>(
    mut f: impl FnMut(F) -> F,
    x0: F,
    dx: F,
    config: &BracketConfig<F>,
) -> Result<Bracket<F>, BracketError> {
    if !x0.is_finite() || !dx.is_finite() || dx == F::zero() {
        return Err(BracketError::InvalidSeed);
    }

    let f0 = f(x0);
    if !f0.is_finite() {
        return Err(BracketError::InvalidSeed);
    }
    if f0 == F::zero() {
        // The seed is already a root; degenerate bracket.
        return Ok(Bracket {
            a: x0,
            b: x0,
            fa: f0,
            fb: f0,
        });
    }

    let mut dx = dx.abs();
    for _ in 0..config.max_iters {
        let hi = x0 + dx;
        let f_hi = f(hi);
        if closes_bracket(f0, f_hi) {
            return Ok(Bracket {
                a: x0,
                b: hi,
                fa: f0,
                fb: f_hi,
            });
        }

        let lo = x0 - dx;
        let f_lo = f(lo);
        if closes_bracket(f0, f_lo) {
            return Ok(Bracket {
                a: x0,
                b: lo,
                fa: f0,
                fb: f_lo,
            });
        }

        dx = dx * config.growth;
    }

    Err(BracketError::NoSignChange {
        iters: config.max_iters,
    })
}

/// A probe closes the bracket if its value is finite and has the opposite
/// sign of the seed value (or is exactly zero).
fn closes_bracket<F: Float>(f0: F, f_probe: F) -> bool {
    f_probe.is_finite() && f0 * f_probe <= F::zero()
}
