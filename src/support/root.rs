//! Scalar root finding for equation-of-state inversion.
//!
//! Inverting a pressure-volume relation means solving `residual(V) = 0` for
//! `V`, where the residual is the difference between a requested pressure and
//! the pressure the model evaluates at a candidate volume. The solve happens
//! in two stages:
//!
//! 1. [`bracket`]: starting from a seed point, probe outward in both
//!    directions with a geometrically growing step until the residual changes
//!    sign. Failure here means the requested value is unreachable anywhere
//!    near the seed.
//! 2. [`brent`]: refine the sign-changing interval to a root with Brent's
//!    method (inverse quadratic interpolation and secant steps, falling back
//!    to bisection), which is derivative-free and guaranteed to stay within
//!    the bracket.
//!
//! Both stages are generic over [`num_traits::Float`], take explicit
//! configuration with documented defaults, and bound their iteration counts,
//! surfacing typed errors instead of looping unboundedly.

mod bracket;
mod brent;

pub use bracket::{Bracket, BracketConfig, BracketError, GOLDEN_RATIO, bracket};
pub use brent::{BrentConfig, Solution, SolveError, brent};
