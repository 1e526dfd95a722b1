//! Finite-strain solid equation of state.
//!
//! `FiniteStrainSolid` implements the free-energy expansion for a solid
//! mineral phase used in planetary interior modeling: a fourth-order Eulerian
//! finite-strain compressive term plus a thermal term built on a constant
//! `Cv` and a power-law Grüneisen parameter.
//!
//! # Assumptions
//!
//! - The compressive free energy is a fixed fourth-order truncation in the
//!   Eulerian finite strain.
//! - `Cv` is constant and `γ(V) = γ₀·(V/V₀)^q₀`.
//! - Several derivative properties (bulk moduli, shear modulus, `Cp`,
//!   thermal expansivity) are not modeled and evaluate to zero. This is a
//!   documented model limitation, not an error: rigorous values would
//!   require numerically differentiating the expansion.
//!
//! # Volume inversion
//!
//! There is no closed form for `V(P, T)`, so [`EquationOfState::volume`]
//! solves `P − pressure(T, V) = 0` numerically: an expanding bracket search
//! seeded at `V₀` finds a sign change in the residual, and Brent's method
//! refines it. Solver knobs live in [`VolumeSolverConfig`].

use uom::{
    ConstZero,
    si::{
        f64::{MolarEnergy, MolarHeatCapacity, MolarVolume, Pressure, Ratio, ThermodynamicTemperature},
        molar_volume::cubic_meter_per_mole,
        pressure::pascal,
        ratio::ratio,
        thermodynamic_temperature::kelvin,
    },
};

use crate::eos::{
    EosError, EquationOfState,
    params::{ParameterError, SolidParameters},
};
use crate::support::{
    root::{self, BracketConfig, BrentConfig},
    units::{MolarEntropy, TemperatureDifference, ThermalExpansivity},
};

use super::{finite_strain, thermal};

/// Solver configuration for the pressure-to-volume inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeSolverConfig {
    /// First probe step of the bracket search, as a fraction of `V₀`.
    pub initial_step: f64,

    /// Growth factor applied to the probe step after each failed round.
    pub bracket_growth: f64,

    /// Maximum expansion rounds for the bracket search.
    pub max_bracket_iters: usize,

    /// Maximum refinement iterations for Brent's method.
    pub max_root_iters: usize,

    /// Absolute tolerance on the volume root, in m³/mol.
    pub x_abs_tol: f64,

    /// Relative tolerance on the volume root.
    pub x_rel_tol: f64,
}

impl Default for VolumeSolverConfig {
    fn default() -> Self {
        Self {
            initial_step: 1e-2,
            bracket_growth: root::GOLDEN_RATIO,
            max_bracket_iters: 100,
            max_root_iters: 100,
            x_abs_tol: 2e-12,
            x_rel_tol: 4.0 * f64::EPSILON,
        }
    }
}

impl VolumeSolverConfig {
    /// Converts this configuration into a bracket search configuration.
    fn bracket(&self) -> BracketConfig<f64> {
        BracketConfig {
            growth: self.bracket_growth,
            max_iters: self.max_bracket_iters,
        }
    }

    /// Converts this configuration into a Brent refinement configuration.
    fn brent(&self) -> BrentConfig<f64> {
        BrentConfig {
            max_iters: self.max_root_iters,
            x_abs_tol: self.x_abs_tol,
            x_rel_tol: self.x_rel_tol,
        }
    }
}

/// Calibration constants required by the [`FiniteStrainSolid`] model.
///
/// Implement this for a marker type representing one mineral phase so
/// calibrations can be defined as types and picked up with
/// [`FiniteStrainSolid::from_phase`].
pub trait SolidPhase {
    /// Returns the staged calibration for this phase.
    fn parameters() -> crate::eos::params::SolidParametersBuilder;
}

/// Finite-strain equation of state for a solid mineral phase.
///
/// Immutable and `Copy`; one value can serve arbitrarily many concurrent
/// evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteStrainSolid {
    params: SolidParameters,
    solver: VolumeSolverConfig,
}

impl FiniteStrainSolid {
    /// Creates a model over a validated calibration.
    #[must_use]
    pub fn new(params: SolidParameters) -> Self {
        Self {
            params,
            solver: VolumeSolverConfig::default(),
        }
    }

    /// Creates a model from a phase's calibration constants.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if the phase's calibration is missing a
    /// constant or contains a non-finite value.
    pub fn from_phase<P: SolidPhase>() -> Result<Self, ParameterError> {
        Ok(Self::new(P::parameters().build()?))
    }

    /// Replaces the volume solver configuration.
    #[must_use]
    pub fn with_solver_config(mut self, solver: VolumeSolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Returns the calibration this model evaluates.
    #[must_use]
    pub fn parameters(&self) -> &SolidParameters {
        &self.params
    }

    fn ensure_positive_volume(&self, volume: MolarVolume) -> Result<(), EosError> {
        if volume.get::<cubic_meter_per_mole>() <= 0.0 {
            return Err(EosError::OutOfDomain {
                context: format!("volume {volume:?} must be positive"),
            });
        }
        Ok(())
    }
}

impl EquationOfState for FiniteStrainSolid {
    /// Computes pressure as the volume derivative of the total free energy:
    /// `P = 3·K₀·(1+2f)^{5/2}·(f + a₃·f²/2 + a₄·f³/6) + Cv·(T−T₀)·γ(V)/V`.
    fn pressure(
        &self,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<Pressure, EosError> {
        self.ensure_positive_volume(volume)?;
        let params = &self.params;

        let f = finite_strain::strain(volume, params);
        let (a3, a4) = finite_strain::expansion_coefficients(params);
        let compressive = 3.0
            * params.k_0
            * (1.0 + 2.0 * f).powf(2.5)
            * (f + a3 * f * f / 2.0 + a4 * f * f * f / 6.0);

        let thermal_pressure = params.cv
            * temperature.minus(params.t_0)
            * thermal::grueneisen(volume, params)
            / volume;

        Ok(compressive + thermal_pressure)
    }

    /// Recovers volume by solving `P − pressure(T, V) = 0` for `V`.
    ///
    /// The bracket search is seeded at `V₀` with a first step of
    /// `initial_step·V₀` and probes both directions; volumes at which the
    /// pressure is undefined (non-positive candidates) are skipped as
    /// carrying no sign information.
    fn volume(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarVolume, EosError> {
        let v_0 = self.params.v_0.get::<cubic_meter_per_mole>();

        let delta_pressure = |x: f64| {
            if x <= 0.0 {
                return f64::NAN;
            }
            let candidate = MolarVolume::new::<cubic_meter_per_mole>(x);
            match self.pressure(temperature, candidate) {
                Ok(p) => (pressure - p).get::<pascal>(),
                Err(_) => f64::NAN,
            }
        };

        let found = root::bracket(
            &delta_pressure,
            v_0,
            self.solver.initial_step * v_0,
            &self.solver.bracket(),
        )
        .map_err(|err| match err {
            root::BracketError::NoSignChange { .. } => EosError::RootNotBracketed {
                pressure,
                temperature,
            },
            root::BracketError::InvalidSeed => EosError::OutOfDomain {
                context: format!(
                    "volume search could not be seeded from V_0 = {:?}",
                    self.params.v_0
                ),
            },
        })?;

        let solution =
            root::brent(&delta_pressure, found, &self.solver.brent()).map_err(|err| match err {
                root::SolveError::NotABracket => EosError::RootNotBracketed {
                    pressure,
                    temperature,
                },
                root::SolveError::MaxIters {
                    residual, iters, ..
                } => EosError::NonConvergence {
                    residual: Pressure::new::<pascal>(residual),
                    iters,
                },
            })?;

        Ok(MolarVolume::new::<cubic_meter_per_mole>(solution.root))
    }

    /// Computes `γ(V) = γ₀·(V/V₀)^q₀`.
    ///
    /// Pressure and temperature are accepted for interface uniformity but do
    /// not enter this model's Grüneisen parameter.
    fn grueneisen_parameter(
        &self,
        _pressure: Pressure,
        _temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<Ratio, EosError> {
        self.ensure_positive_volume(volume)?;
        Ok(Ratio::new::<ratio>(thermal::grueneisen(
            volume,
            &self.params,
        )))
    }

    /// Not modeled by this equation of state; always zero.
    fn isothermal_bulk_modulus(
        &self,
        _pressure: Pressure,
        _temperature: ThermodynamicTemperature,
        _volume: MolarVolume,
    ) -> Result<Pressure, EosError> {
        Ok(Pressure::ZERO)
    }

    /// Not modeled by this equation of state; always zero.
    fn adiabatic_bulk_modulus(
        &self,
        _pressure: Pressure,
        _temperature: ThermodynamicTemperature,
        _volume: MolarVolume,
    ) -> Result<Pressure, EosError> {
        Ok(Pressure::ZERO)
    }

    /// Not modeled by this equation of state; always zero.
    fn shear_modulus(
        &self,
        _pressure: Pressure,
        _temperature: ThermodynamicTemperature,
        _volume: MolarVolume,
    ) -> Result<Pressure, EosError> {
        Ok(Pressure::ZERO)
    }

    /// Returns the constant `Cv` of the calibration.
    fn molar_heat_capacity_v(
        &self,
        _pressure: Pressure,
        _temperature: ThermodynamicTemperature,
        _volume: MolarVolume,
    ) -> Result<MolarHeatCapacity, EosError> {
        Ok(self.params.cv)
    }

    /// Not modeled by this equation of state; always zero.
    fn molar_heat_capacity_p(
        &self,
        _pressure: Pressure,
        _temperature: ThermodynamicTemperature,
        _volume: MolarVolume,
    ) -> Result<MolarHeatCapacity, EosError> {
        Ok(MolarHeatCapacity::ZERO)
    }

    /// Not modeled by this equation of state; always zero.
    fn thermal_expansivity(
        &self,
        _pressure: Pressure,
        _temperature: ThermodynamicTemperature,
        _volume: MolarVolume,
    ) -> Result<ThermalExpansivity, EosError> {
        Ok(ThermalExpansivity::ZERO)
    }

    /// Computes `S = S₀ + I(V) + Cv·ln(T/T₀)`, with `I(V)` the thermal
    /// pressure integral.
    fn entropy(
        &self,
        _pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<MolarEntropy, EosError> {
        self.ensure_positive_volume(volume)?;
        let params = &self.params;

        let t = temperature.get::<kelvin>();
        if t <= 0.0 {
            return Err(EosError::OutOfDomain {
                context: format!("entropy needs a positive temperature, got {t} K"),
            });
        }

        Ok(params.s_0
            + thermal::thermal_pressure_integral(volume, params)
            + params.cv * (temperature / params.t_0).ln())
    }

    /// Computes `F = E₀ − T₀·S₀ + F_cmp(V) + F_th(T, V)`.
    fn helmholtz_free_energy(
        &self,
        _pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<MolarEnergy, EosError> {
        self.ensure_positive_volume(volume)?;
        let params = &self.params;

        Ok(params.e_0 - params.s_0 * params.t_0
            + finite_strain::compressive_free_energy(volume, params)
            + thermal::thermal_free_energy(temperature, volume, params)?)
    }

    fn internal_energy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        volume: MolarVolume,
    ) -> Result<MolarEnergy, EosError> {
        Ok(self.helmholtz_free_energy(pressure, temperature, volume)?
            + self.entropy(pressure, temperature, volume)? * temperature)
    }

    fn enthalpy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEnergy, EosError> {
        let volume = self.volume(pressure, temperature)?;

        Ok(self.helmholtz_free_energy(pressure, temperature, volume)?
            + self.entropy(pressure, temperature, volume)? * temperature
            + pressure * volume)
    }

    fn gibbs_free_energy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEnergy, EosError> {
        let volume = self.volume(pressure, temperature)?;

        Ok(self.helmholtz_free_energy(pressure, temperature, volume)? + pressure * volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        molar_energy::joule_per_mole,
        molar_heat_capacity::joule_per_kelvin_mole,
        pressure::gigapascal,
        thermodynamic_temperature::kelvin,
    };

    use crate::eos::params::SolidParametersBuilder;
    use crate::support::units::reciprocal_pascals;

    /// The calibration used throughout: `V₀ = 1e-5 m³/mol`, `T₀ = 300 K`,
    /// `K₀ = 250 GPa`, `K′₀ = 4`, `K″₀ = −0.02e-9 1/Pa`, `Cv = 100`,
    /// `γ₀ = 1.5`, `q₀ = 1`.
    fn scenario_params() -> SolidParameters {
        SolidParameters {
            v_0: MolarVolume::new::<cubic_meter_per_mole>(1.0e-5),
            t_0: ThermodynamicTemperature::new::<kelvin>(300.0),
            e_0: MolarEnergy::new::<joule_per_mole>(0.0),
            s_0: MolarEntropy::new::<joule_per_kelvin_mole>(0.0),
            k_0: Pressure::new::<pascal>(250.0e9),
            kprime_0: 4.0,
            kdprime_0: reciprocal_pascals(-0.02e-9),
            n: 1.0,
            cv: MolarHeatCapacity::new::<joule_per_kelvin_mole>(100.0),
            grueneisen_0: 1.5,
            q_0: 1.0,
        }
    }

    fn kelvins(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    #[test]
    fn pressure_vanishes_at_the_reference_state() {
        let eos = FiniteStrainSolid::new(scenario_params());
        let params = eos.parameters();

        let p = eos.pressure(params.t_0, params.v_0).unwrap();
        assert_relative_eq!(p.get::<pascal>(), 0.0);
    }

    #[test]
    fn zero_pressure_recovers_the_reference_volume() {
        let eos = FiniteStrainSolid::new(scenario_params());

        let v = eos.volume(Pressure::ZERO, kelvins(300.0)).unwrap();
        assert_relative_eq!(
            v.get::<cubic_meter_per_mole>(),
            1.0e-5,
            max_relative = 1e-10
        );
    }

    #[test]
    fn pressure_volume_round_trip() {
        let eos = FiniteStrainSolid::new(scenario_params());
        let t = kelvins(1800.0);
        let v_in = MolarVolume::new::<cubic_meter_per_mole>(0.8e-5);

        let p = eos.pressure(t, v_in).unwrap();
        let v_out = eos.volume(p, t).unwrap();

        assert_relative_eq!(
            v_out.get::<cubic_meter_per_mole>(),
            v_in.get::<cubic_meter_per_mole>(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn compression_reduces_volume() {
        let eos = FiniteStrainSolid::new(scenario_params());

        let v = eos
            .volume(Pressure::new::<gigapascal>(100.0), kelvins(300.0))
            .unwrap();
        assert!(v < eos.parameters().v_0);
        assert!(v.get::<cubic_meter_per_mole>() > 0.0);
    }

    #[test]
    fn grueneisen_parameter_at_reference_volume() {
        let eos = FiniteStrainSolid::new(scenario_params());
        let params = *eos.parameters();

        let gamma = eos
            .grueneisen_parameter(Pressure::ZERO, params.t_0, params.v_0)
            .unwrap();
        assert_relative_eq!(gamma.get::<ratio>(), 1.5);
    }

    #[test]
    fn reference_state_identities() {
        let params = SolidParameters {
            e_0: MolarEnergy::new::<joule_per_mole>(1000.0),
            s_0: MolarEntropy::new::<joule_per_kelvin_mole>(50.0),
            ..scenario_params()
        };
        let eos = FiniteStrainSolid::new(params);
        let (t_0, v_0) = (params.t_0, params.v_0);

        // S(T₀, V₀) = S₀ by construction.
        let s = eos.entropy(Pressure::ZERO, t_0, v_0).unwrap();
        assert_relative_eq!(s.get::<joule_per_kelvin_mole>(), 50.0);

        // F(T₀, V₀) = E₀ − T₀·S₀.
        let f = eos.helmholtz_free_energy(Pressure::ZERO, t_0, v_0).unwrap();
        assert_relative_eq!(f.get::<joule_per_mole>(), 1000.0 - 300.0 * 50.0);

        // U = F + T·S recovers E₀ at the reference state.
        let u = eos.internal_energy(Pressure::ZERO, t_0, v_0).unwrap();
        assert_relative_eq!(u.get::<joule_per_mole>(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn enthalpy_and_gibbs_reduce_to_identities_at_zero_pressure() {
        let params = SolidParameters {
            e_0: MolarEnergy::new::<joule_per_mole>(1000.0),
            s_0: MolarEntropy::new::<joule_per_kelvin_mole>(50.0),
            ..scenario_params()
        };
        let eos = FiniteStrainSolid::new(params);

        // At P = 0 and T = T₀ the inversion lands on V₀, so
        // H = E₀ and G = E₀ − T₀·S₀.
        let h = eos.enthalpy(Pressure::ZERO, params.t_0).unwrap();
        assert_relative_eq!(h.get::<joule_per_mole>(), 1000.0, max_relative = 1e-9);

        let g = eos.gibbs_free_energy(Pressure::ZERO, params.t_0).unwrap();
        assert_relative_eq!(
            g.get::<joule_per_mole>(),
            1000.0 - 300.0 * 50.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn unreachable_pressure_is_reported_as_not_bracketed() {
        let eos = FiniteStrainSolid::new(scenario_params());

        // A huge tension: no volume reaches −1 TPa for this calibration.
        let err = eos
            .volume(Pressure::new::<pascal>(-1.0e12), kelvins(300.0))
            .unwrap_err();
        assert!(matches!(err, EosError::RootNotBracketed { .. }));
    }

    #[test]
    fn exhausted_refinement_budget_is_reported() {
        let eos = FiniteStrainSolid::new(scenario_params()).with_solver_config(
            VolumeSolverConfig {
                max_root_iters: 1,
                ..VolumeSolverConfig::default()
            },
        );

        let err = eos
            .volume(Pressure::new::<gigapascal>(50.0), kelvins(300.0))
            .unwrap_err();
        assert!(matches!(err, EosError::NonConvergence { iters: 1, .. }));
    }

    #[test]
    fn non_positive_volume_is_out_of_domain() {
        let eos = FiniteStrainSolid::new(scenario_params());
        let bad = MolarVolume::new::<cubic_meter_per_mole>(-1.0e-5);

        assert!(matches!(
            eos.pressure(kelvins(300.0), bad),
            Err(EosError::OutOfDomain { .. })
        ));
        assert!(matches!(
            eos.entropy(Pressure::ZERO, kelvins(300.0), bad),
            Err(EosError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn unmodeled_properties_evaluate_to_zero() {
        let eos = FiniteStrainSolid::new(scenario_params());
        let (p, t, v) = (
            Pressure::new::<gigapascal>(10.0),
            kelvins(1000.0),
            MolarVolume::new::<cubic_meter_per_mole>(0.9e-5),
        );

        assert_eq!(eos.isothermal_bulk_modulus(p, t, v).unwrap(), Pressure::ZERO);
        assert_eq!(eos.adiabatic_bulk_modulus(p, t, v).unwrap(), Pressure::ZERO);
        assert_eq!(eos.shear_modulus(p, t, v).unwrap(), Pressure::ZERO);
        assert_eq!(
            eos.molar_heat_capacity_p(p, t, v).unwrap(),
            MolarHeatCapacity::ZERO
        );
        assert_eq!(
            eos.thermal_expansivity(p, t, v).unwrap(),
            ThermalExpansivity::ZERO
        );

        // Cv stays the calibrated constant, not zero.
        assert_relative_eq!(
            eos.molar_heat_capacity_v(p, t, v)
                .unwrap()
                .get::<joule_per_kelvin_mole>(),
            100.0
        );
    }

    #[test]
    fn phases_define_calibrations_as_types() {
        struct Periclase;

        impl SolidPhase for Periclase {
            fn parameters() -> SolidParametersBuilder {
                SolidParametersBuilder::new()
                    .v_0(MolarVolume::new::<cubic_meter_per_mole>(1.124e-5))
                    .t_0(kelvins(300.0))
                    .e_0(MolarEnergy::new::<joule_per_mole>(0.0))
                    .s_0(MolarEntropy::new::<joule_per_kelvin_mole>(26.9))
                    .k_0(Pressure::new::<gigapascal>(161.0))
                    .kprime_0(3.8)
                    .kdprime_0(reciprocal_pascals(-0.04e-9))
                    .n(2.0)
                    .cv(MolarHeatCapacity::new::<joule_per_kelvin_mole>(49.4))
                    .grueneisen_0(1.36)
                    .q_0(1.7)
            }
        }

        let eos = FiniteStrainSolid::from_phase::<Periclase>().unwrap();

        let p = eos
            .pressure(eos.parameters().t_0, eos.parameters().v_0)
            .unwrap();
        assert_relative_eq!(p.get::<pascal>(), 0.0);
    }
}
