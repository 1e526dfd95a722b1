//! Equation-of-state models for solid mineral phases.
//!
//! The [`EquationOfState`] trait is the seam between a model and its
//! consumers: a mineral collaborator constructs a model from a calibrated
//! [`params::SolidParameters`] set, and downstream code queries properties
//! through the trait without knowing which expansion is underneath.
//!
//! The one model currently provided is
//! [`model::FiniteStrainSolid`], a fourth-order Eulerian finite-strain
//! free-energy expansion with a power-law Grüneisen thermal term.
//!
//! # Example
//!
//! ```
//! use mineral_eos::eos::{
//!     EquationOfState, model::FiniteStrainSolid, params::SolidParametersBuilder,
//! };
//! use mineral_eos::support::units::{MolarEntropy, reciprocal_pascals};
//! use uom::si::{
//!     f64::{MolarEnergy, MolarHeatCapacity, MolarVolume, Pressure, ThermodynamicTemperature},
//!     molar_energy::joule_per_mole,
//!     molar_heat_capacity::joule_per_kelvin_mole,
//!     molar_volume::cubic_meter_per_mole,
//!     pressure::gigapascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = SolidParametersBuilder::new()
//!     .v_0(MolarVolume::new::<cubic_meter_per_mole>(1.0e-5))
//!     .t_0(ThermodynamicTemperature::new::<kelvin>(300.0))
//!     .e_0(MolarEnergy::new::<joule_per_mole>(0.0))
//!     .s_0(MolarEntropy::new::<joule_per_kelvin_mole>(0.0))
//!     .k_0(Pressure::new::<gigapascal>(250.0))
//!     .kprime_0(4.0)
//!     .kdprime_0(reciprocal_pascals(-0.02e-9))
//!     .n(1.0)
//!     .cv(MolarHeatCapacity::new::<joule_per_kelvin_mole>(100.0))
//!     .grueneisen_0(1.5)
//!     .q_0(1.0)
//!     .build()?;
//!
//! let eos = FiniteStrainSolid::new(params);
//!
//! // Compressing to 25 GPa at room temperature shrinks the volume.
//! let t = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let v = eos.volume(Pressure::new::<gigapascal>(25.0), t)?;
//! assert!(v < params.v_0);
//! # Ok(())
//! # }
//! ```

mod equation_of_state;
mod error;

pub mod model;
pub mod params;

pub use equation_of_state::EquationOfState;
pub use error::EosError;
