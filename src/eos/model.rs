//! Equation-of-state model implementations.

pub mod finite_strain_solid;

pub(crate) mod finite_strain;
pub(crate) mod thermal;

pub use finite_strain_solid::{FiniteStrainSolid, SolidPhase, VolumeSolverConfig};
