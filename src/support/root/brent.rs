use num_traits::Float;
use thiserror::Error;

use super::Bracket;

/// Configuration for Brent root refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrentConfig<F> {
    /// Maximum number of refinement iterations.
    pub max_iters: usize,

    /// Absolute tolerance on the root location.
    pub x_abs_tol: F,

    /// Relative tolerance on the root location.
    pub x_rel_tol: F,
}

impl Default for BrentConfig<f64> {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 2e-12,
            x_rel_tol: 4.0 * f64::EPSILON,
        }
    }
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<F> {
    /// Location of the root.
    pub root: F,

    /// Function value at [`root`](Self::root).
    pub residual: F,

    /// Refinement iterations performed.
    pub iters: usize,
}

/// Errors that can occur during Brent refinement.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError<F> {
    /// The supplied interval does not bracket a root.
    #[error("interval endpoints have the same sign; no root is bracketed")]
    NotABracket,

    /// The iteration budget was exhausted before the tolerance was met.
    #[error("iteration limit of {iters} reached before convergence")]
    MaxIters {
        /// Best root estimate when iteration stopped.
        best: F,
        /// Function value at the best estimate.
        residual: F,
        /// Iterations performed.
        iters: usize,
    },
}

/// Refines a sign-changing interval to a root using Brent's method.
///
/// Each iteration attempts an inverse quadratic interpolation (or secant)
/// step and falls back to bisection whenever the interpolated step would
/// leave the bracket or converge too slowly, so progress is never worse than
/// bisection. Convergence is declared when the bracket width drops below
/// `x_rel_tol·|x| + x_abs_tol/2` or the function value is exactly zero.
///
/// # Errors
///
/// Returns [`SolveError::NotABracket`] if the interval endpoints have the
/// same sign, or [`SolveError::MaxIters`] with the best estimate so far if
/// the iteration budget runs out.
pub fn brent<F: Float>(
    mut f: impl FnMut(F) -> F,
    interval: Bracket<F>,
    config: &BrentConfig<F>,
) -> Result<Solution<F>, SolveError<F>> {
    let Bracket {
        mut a,
        mut b,
        mut fa,
        mut fb,
    } = interval;

    if fa * fb > F::zero() {
        return Err(SolveError::NotABracket);
    }

    let one = F::one();
    let two = one + one;
    let three = two + one;
    let half = two.recip();

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iters in 0..config.max_iters {
        // Keep the root bracketed between b and c, with b the best estimate.
        if (fb > F::zero() && fc > F::zero()) || (fb < F::zero() && fc < F::zero()) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = config.x_rel_tol * b.abs() + half * config.x_abs_tol;
        let midpoint = half * (c - b);
        if midpoint.abs() <= tol || fb == F::zero() {
            return Ok(Solution {
                root: b,
                residual: fb,
                iters,
            });
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // Attempt inverse quadratic interpolation (secant if a == c).
            let s = fb / fa;
            let mut p;
            let mut q;
            if a == c {
                p = two * midpoint * s;
                q = one - s;
            } else {
                let inv_q = fa / fc;
                let r = fb / fc;
                p = s * (two * midpoint * inv_q * (inv_q - r) - (b - a) * (r - one));
                q = (inv_q - one) * (r - one) * (s - one);
            }
            if p > F::zero() {
                q = -q;
            }
            p = p.abs();

            // Accept the interpolated step only if it stays within bounds
            // and shrinks faster than the previous pair of steps.
            let min1 = three * midpoint * q - (tol * q).abs();
            let min2 = (e * q).abs();
            if two * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = midpoint;
                e = d;
            }
        } else {
            d = midpoint;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol {
            b = b + d;
        } else {
            b = b + tol.copysign(midpoint);
        }
        fb = f(b);
    }

    Err(SolveError::MaxIters {
        best: b,
        residual: fb,
        iters: config.max_iters,
    })
}
