use uom::si::f64::{
    MolarEnergy, MolarHeatCapacity, MolarVolume, Pressure, Ratio, ThermodynamicTemperature,
};

use crate::support::units::{MolarEntropy, ThermalExpansivity};

use super::EosError;

/// The property contract an equation of state exposes to its consumers.
///
/// A mineral collaborator supplies a calibrated parameter set at construction
/// and forwards pressure/temperature queries here; a comparison or plotting
/// collaborator sweeps these methods over arrays of seismic pressures and
/// temperatures. Every method is a pure, idempotent function of its explicit
/// arguments: no state is retained between calls, so one model value may be
/// shared across any number of concurrent evaluations.
///
/// Most properties take the full `(pressure, temperature, volume)` state
/// point for interface uniformity even when a particular model ignores some
/// of it; callers must not assume any single argument is load-bearing. The
/// exceptions are [`volume`](Self::volume), which *produces* the volume, and
/// [`enthalpy`](Self::enthalpy)/[`gibbs_free_energy`](Self::gibbs_free_energy),
/// which recover it internally.
pub trait EquationOfState {
    /// Returns the pressure at the given temperature and volume.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::OutOfDomain`] if `volume` is not positive.
    fn pressure(
        &self,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<Pressure, EosError>;

    /// Returns the volume at the given pressure and temperature by numerical
    /// inversion of [`pressure`](Self::pressure).
    ///
    /// This is an iterative bracket-then-refine root solve, not an O(1)
    /// formula evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::RootNotBracketed`] if no volume reaches the
    /// requested pressure, or [`EosError::NonConvergence`] if the refinement
    /// exhausts its iteration budget.
    fn volume(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarVolume, EosError>;

    /// Returns the Grüneisen parameter (dimensionless).
    ///
    /// # Errors
    ///
    /// Returns [`EosError::OutOfDomain`] if `volume` is not positive.
    fn grueneisen_parameter(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<Ratio, EosError>;

    /// Returns the isothermal bulk modulus.
    ///
    /// # Errors
    ///
    /// Returns [`EosError`] if the modulus cannot be calculated.
    fn isothermal_bulk_modulus(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<Pressure, EosError>;

    /// Returns the adiabatic bulk modulus.
    ///
    /// # Errors
    ///
    /// Returns [`EosError`] if the modulus cannot be calculated.
    fn adiabatic_bulk_modulus(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<Pressure, EosError>;

    /// Returns the shear modulus.
    ///
    /// # Errors
    ///
    /// Returns [`EosError`] if the modulus cannot be calculated.
    fn shear_modulus(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<Pressure, EosError>;

    /// Returns the molar heat capacity at constant volume.
    ///
    /// # Errors
    ///
    /// Returns [`EosError`] if the heat capacity cannot be calculated.
    fn molar_heat_capacity_v(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<MolarHeatCapacity, EosError>;

    /// Returns the molar heat capacity at constant pressure.
    ///
    /// # Errors
    ///
    /// Returns [`EosError`] if the heat capacity cannot be calculated.
    fn molar_heat_capacity_p(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<MolarHeatCapacity, EosError>;

    /// Returns the volumetric thermal expansivity.
    ///
    /// # Errors
    ///
    /// Returns [`EosError`] if the expansivity cannot be calculated.
    fn thermal_expansivity(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<ThermalExpansivity, EosError>;

    /// Returns the molar entropy.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::OutOfDomain`] if `temperature` or `volume` is not
    /// positive.
    fn entropy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<MolarEntropy, EosError>;

    /// Returns the molar Helmholtz free energy.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::OutOfDomain`] if `temperature` or `volume` is not
    /// positive.
    fn helmholtz_free_energy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<MolarEnergy, EosError>;

    /// Returns the molar internal energy, `U = F + T·S`.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::OutOfDomain`] if `temperature` or `volume` is not
    /// positive.
    fn internal_energy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<MolarEnergy, EosError>;

    /// Returns the molar enthalpy, `H = F + T·S + P·V`.
    ///
    /// The volume is recovered internally via [`volume`](Self::volume), so
    /// this triggers a root-finding inversion.
    ///
    /// # Errors
    ///
    /// Returns any error the internal [`volume`](Self::volume) inversion or
    /// potential evaluation produces.
    fn enthalpy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEnergy, EosError>;

    /// Returns the molar Gibbs free energy, `G = F + P·V`.
    ///
    /// The volume is recovered internally via [`volume`](Self::volume), so
    /// this triggers a root-finding inversion.
    ///
    /// # Errors
    ///
    /// Returns any error the internal [`volume`](Self::volume) inversion or
    /// potential evaluation produces.
    fn gibbs_free_energy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEnergy, EosError>;
}
