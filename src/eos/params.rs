//! Calibrated parameter sets for solid mineral phases.
//!
//! A [`SolidParameters`] value holds the eleven calibration constants a
//! finite-strain equation of state needs, each in its [`uom`] quantity.
//! Parameter sets typically originate in an external mineral database that
//! supplies the constants one key at a time; [`SolidParametersBuilder`]
//! stages that construction and reports any absent key by its database name
//! (`"V_0"`, `"K_0"`, ...) when [`build`](SolidParametersBuilder::build) is
//! called.
//!
//! Beyond presence and finiteness, no physical plausibility bounds are
//! enforced (e.g., `K_0 > 0` is not checked). Calibrations are taken at face
//! value; a nonsensical calibration produces nonsensical properties, not an
//! error.

use thiserror::Error;
use uom::si::f64::{MolarEnergy, MolarHeatCapacity, MolarVolume, Pressure, ThermodynamicTemperature};

use crate::support::units::{MolarEntropy, ReciprocalPressure};

/// Errors that may occur when building a [`SolidParameters`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// A required calibration constant was never supplied.
    #[error("params object missing parameter: {name}")]
    Missing { name: &'static str },

    /// A supplied calibration constant is NaN or infinite.
    ///
    /// A non-finite constant would silently poison every downstream formula,
    /// so it is rejected at construction instead.
    #[error("parameter {name} is not a finite number")]
    NotFinite { name: &'static str },
}

/// Calibrated constants for one solid mineral phase.
///
/// Immutable once constructed and `Copy`, so a single calibration can be
/// shared freely across threads and evaluations. Construct via
/// [`SolidParametersBuilder`] when constants arrive key-by-key from a
/// database, or as a struct literal when they are known statically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidParameters {
    /// Reference volume `V₀` at the reference state.
    pub v_0: MolarVolume,
    /// Reference temperature `T₀`.
    pub t_0: ThermodynamicTemperature,
    /// Internal energy `E₀` at the reference state.
    pub e_0: MolarEnergy,
    /// Entropy `S₀` at the reference state.
    pub s_0: MolarEntropy,
    /// Isothermal bulk modulus `K₀` at the reference state.
    pub k_0: Pressure,
    /// First pressure derivative of the bulk modulus, `K′₀` (dimensionless).
    pub kprime_0: f64,
    /// Second pressure derivative of the bulk modulus, `K″₀`.
    pub kdprime_0: ReciprocalPressure,
    /// Atoms per formula unit.
    ///
    /// Carried for compatibility with mineral databases; not used by the
    /// finite-strain formulas themselves.
    pub n: f64,
    /// Heat capacity at constant volume, treated as temperature-independent.
    pub cv: MolarHeatCapacity,
    /// Grüneisen parameter `γ₀` at the reference volume (dimensionless).
    pub grueneisen_0: f64,
    /// Volume-scaling exponent `q₀` of the Grüneisen parameter.
    pub q_0: f64,
}

impl SolidParameters {
    /// Checks every constant for NaN or infinity.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotFinite`] naming the first offending key.
    pub fn ensure_finite(&self) -> Result<(), ParameterError> {
        let fields = [
            ("V_0", self.v_0.value),
            ("T_0", self.t_0.value),
            ("E_0", self.e_0.value),
            ("S_0", self.s_0.value),
            ("K_0", self.k_0.value),
            ("Kprime_0", self.kprime_0),
            ("Kdprime_0", self.kdprime_0.value),
            ("n", self.n),
            ("Cv", self.cv.value),
            ("grueneisen_0", self.grueneisen_0),
            ("q_0", self.q_0),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name });
            }
        }
        Ok(())
    }
}

/// Staged construction of a [`SolidParameters`] set.
///
/// Every constant is optional until [`build`](Self::build), which fails with
/// a [`ParameterError::Missing`] naming the first absent key. Setter names
/// and error key names follow the mineral-database spelling of each constant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolidParametersBuilder {
    v_0: Option<MolarVolume>,
    t_0: Option<ThermodynamicTemperature>,
    e_0: Option<MolarEnergy>,
    s_0: Option<MolarEntropy>,
    k_0: Option<Pressure>,
    kprime_0: Option<f64>,
    kdprime_0: Option<ReciprocalPressure>,
    n: Option<f64>,
    cv: Option<MolarHeatCapacity>,
    grueneisen_0: Option<f64>,
    q_0: Option<f64>,
}

impl SolidParametersBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn v_0(mut self, v_0: MolarVolume) -> Self {
        self.v_0 = Some(v_0);
        self
    }

    #[must_use]
    pub fn t_0(mut self, t_0: ThermodynamicTemperature) -> Self {
        self.t_0 = Some(t_0);
        self
    }

    #[must_use]
    pub fn e_0(mut self, e_0: MolarEnergy) -> Self {
        self.e_0 = Some(e_0);
        self
    }

    #[must_use]
    pub fn s_0(mut self, s_0: MolarEntropy) -> Self {
        self.s_0 = Some(s_0);
        self
    }

    #[must_use]
    pub fn k_0(mut self, k_0: Pressure) -> Self {
        self.k_0 = Some(k_0);
        self
    }

    #[must_use]
    pub fn kprime_0(mut self, kprime_0: f64) -> Self {
        self.kprime_0 = Some(kprime_0);
        self
    }

    #[must_use]
    pub fn kdprime_0(mut self, kdprime_0: ReciprocalPressure) -> Self {
        self.kdprime_0 = Some(kdprime_0);
        self
    }

    #[must_use]
    pub fn n(mut self, n: f64) -> Self {
        self.n = Some(n);
        self
    }

    #[must_use]
    pub fn cv(mut self, cv: MolarHeatCapacity) -> Self {
        self.cv = Some(cv);
        self
    }

    #[must_use]
    pub fn grueneisen_0(mut self, grueneisen_0: f64) -> Self {
        self.grueneisen_0 = Some(grueneisen_0);
        self
    }

    #[must_use]
    pub fn q_0(mut self, q_0: f64) -> Self {
        self.q_0 = Some(q_0);
        self
    }

    /// Validates the staged constants and produces a [`SolidParameters`] set.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Missing`] naming the first absent key, or
    /// [`ParameterError::NotFinite`] if any supplied constant is NaN or
    /// infinite.
    pub fn build(self) -> Result<SolidParameters, ParameterError> {
        let params = SolidParameters {
            v_0: self.v_0.ok_or(ParameterError::Missing { name: "V_0" })?,
            t_0: self.t_0.ok_or(ParameterError::Missing { name: "T_0" })?,
            e_0: self.e_0.ok_or(ParameterError::Missing { name: "E_0" })?,
            s_0: self.s_0.ok_or(ParameterError::Missing { name: "S_0" })?,
            k_0: self.k_0.ok_or(ParameterError::Missing { name: "K_0" })?,
            kprime_0: self
                .kprime_0
                .ok_or(ParameterError::Missing { name: "Kprime_0" })?,
            kdprime_0: self
                .kdprime_0
                .ok_or(ParameterError::Missing { name: "Kdprime_0" })?,
            n: self.n.ok_or(ParameterError::Missing { name: "n" })?,
            cv: self.cv.ok_or(ParameterError::Missing { name: "Cv" })?,
            grueneisen_0: self
                .grueneisen_0
                .ok_or(ParameterError::Missing { name: "grueneisen_0" })?,
            q_0: self.q_0.ok_or(ParameterError::Missing { name: "q_0" })?,
        };

        params.ensure_finite()?;
        Ok(params)
    }
}
