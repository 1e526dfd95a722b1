//! # Mineral EOS
//!
//! Finite-strain equation-of-state models for solid mineral phases, intended
//! for planetary interior modeling.
//!
//! Given a set of calibrated material parameters for one phase, the models in
//! this crate evaluate pressure as a function of volume and temperature,
//! invert that relation numerically to recover volume from pressure and
//! temperature, and derive a consistent set of thermodynamic potentials
//! (Helmholtz and Gibbs free energy, entropy, enthalpy, internal energy) from
//! a single finite-strain free-energy expansion.
//!
//! ## Crate layout
//!
//! - [`eos`]: The [`EquationOfState`](eos::EquationOfState) contract,
//!   calibrated parameter sets, and the finite-strain solid model.
//! - [`support`]: Supporting utilities used by the models (scalar root
//!   finding, unit extensions).
//!
//! ## Units
//!
//! All quantities crossing the public API are [`uom`] quantities in SI:
//! pascals for pressure and moduli, kelvin for temperature, cubic meters per
//! mole for volume, and joules per mole (or per mole-kelvin) for energies and
//! entropy.

pub mod eos;
pub mod support;
