//! Thermal contribution to the free energy.
//!
//! The thermal model assumes a constant-volume heat capacity and a Grüneisen
//! parameter that scales as a power law in volume,
//! `γ(V) = γ₀·(V/V₀)^q₀`. Under that assumption the integral of `α·K_T`
//! from `V₀` to `V` has a closed form, which feeds both the thermal free
//! energy and the entropy.

use uom::si::{
    f64::{MolarEnergy, MolarVolume, TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::eos::{EosError, params::SolidParameters};
use crate::support::units::{MolarEntropy, TemperatureDifference};

/// Computes the Grüneisen parameter `γ(V) = γ₀·(V/V₀)^q₀`.
///
/// A function of volume only; temperature does not enter this model.
pub(crate) fn grueneisen(volume: MolarVolume, params: &SolidParameters) -> f64 {
    params.grueneisen_0 * (volume / params.v_0).get::<ratio>().powf(params.q_0)
}

/// Evaluates the integral of `α·K_T(V, T₀)` from `V₀` to `V`.
///
/// With the power-law Grüneisen model the closed form is
/// `Cv·γ₀/q₀·[(V/V₀)^q₀ − 1]`. That expression divides by `q₀`; at
/// `q₀ = 0` the analytic limit `Cv·γ₀·ln(V/V₀)` is used instead, so a
/// volume-independent Grüneisen calibration is valid input rather than a
/// division by zero.
pub(crate) fn thermal_pressure_integral(
    volume: MolarVolume,
    params: &SolidParameters,
) -> MolarEntropy {
    let x = (volume / params.v_0).get::<ratio>();

    if params.q_0 == 0.0 {
        params.cv * (params.grueneisen_0 * x.ln())
    } else {
        params.cv * (params.grueneisen_0 / params.q_0 * (x.powf(params.q_0) - 1.0))
    }
}

/// Computes the thermal free energy
/// `F_th = −S₀·(T−T₀) − Cv·[T·ln(T/T₀) − (T−T₀)] − I(V)·(T−T₀)`.
///
/// # Errors
///
/// Returns [`EosError::OutOfDomain`] if the temperature or the calibrated
/// reference temperature is not positive, since the logarithm is undefined
/// there.
pub(crate) fn thermal_free_energy(
    temperature: ThermodynamicTemperature,
    volume: MolarVolume,
    params: &SolidParameters,
) -> Result<MolarEnergy, EosError> {
    let t = temperature.get::<kelvin>();
    let t_0 = params.t_0.get::<kelvin>();
    if t <= 0.0 || t_0 <= 0.0 {
        return Err(EosError::OutOfDomain {
            context: format!(
                "thermal free energy needs positive temperatures, got T = {t} K with T_0 = {t_0} K"
            ),
        });
    }

    let delta_t = temperature.minus(params.t_0);
    let sensible = TemperatureInterval::new::<delta_kelvin>(t * (t / t_0).ln() - (t - t_0));

    Ok(-(params.s_0 * delta_t)
        - params.cv * sensible
        - thermal_pressure_integral(volume, params) * delta_t)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{MolarHeatCapacity, Pressure},
        molar_energy::joule_per_mole,
        molar_heat_capacity::joule_per_kelvin_mole,
        molar_volume::cubic_meter_per_mole,
        pressure::pascal,
    };

    use crate::support::units::reciprocal_pascals;

    fn params_with_q(q_0: f64) -> SolidParameters {
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
            q_0,
        }
    }

    #[test]
    fn grueneisen_equals_reference_value_at_reference_volume() {
        let params = params_with_q(1.0);
        assert_relative_eq!(grueneisen(params.v_0, &params), 1.5);
    }

    #[test]
    fn integral_vanishes_at_reference_volume() {
        let params = params_with_q(1.0);

        let integral = thermal_pressure_integral(params.v_0, &params);
        assert_relative_eq!(integral.get::<joule_per_kelvin_mole>(), 0.0);
    }

    #[test]
    fn integral_matches_hand_computation() {
        let params = params_with_q(1.0);
        let volume = params.v_0 * 0.8;

        // Cv·γ₀/q₀·[(V/V₀)^q₀ − 1] = 100·1.5·(0.8 − 1) = −30.
        let integral = thermal_pressure_integral(volume, &params);
        assert_relative_eq!(integral.get::<joule_per_kelvin_mole>(), -30.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_q_uses_the_log_limit() {
        let at_zero = params_with_q(0.0);
        let near_zero = params_with_q(1e-7);
        let volume = at_zero.v_0 * 0.8;

        let limit = thermal_pressure_integral(volume, &at_zero);
        let nearby = thermal_pressure_integral(volume, &near_zero);

        // Cv·γ₀·ln(0.8) and the closed form at q₀ → 0 must agree.
        assert_relative_eq!(
            limit.get::<joule_per_kelvin_mole>(),
            100.0 * 1.5 * 0.8_f64.ln(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            limit.get::<joule_per_kelvin_mole>(),
            nearby.get::<joule_per_kelvin_mole>(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn thermal_energy_vanishes_at_reference_temperature() {
        let params = params_with_q(1.0);
        let volume = params.v_0 * 0.9;

        let energy = thermal_free_energy(params.t_0, volume, &params).unwrap();
        assert_relative_eq!(energy.get::<joule_per_mole>(), 0.0);
    }

    #[test]
    fn thermal_energy_matches_hand_computation() {
        let params = params_with_q(1.0);
        let t = ThermodynamicTemperature::new::<kelvin>(1800.0);

        // At V = V₀ the integral term drops out:
        // F_th = −Cv·[T·ln(T/T₀) − (T−T₀)].
        let expected = -100.0 * (1800.0 * (1800.0_f64 / 300.0).ln() - 1500.0);

        let energy = thermal_free_energy(t, params.v_0, &params).unwrap();
        assert_relative_eq!(energy.get::<joule_per_mole>(), expected, epsilon = 1e-9);
    }

    #[test]
    fn non_positive_temperature_is_out_of_domain() {
        let params = params_with_q(1.0);
        let t = ThermodynamicTemperature::new::<kelvin>(0.0);

        let err = thermal_free_energy(t, params.v_0, &params).unwrap_err();
        assert!(matches!(err, EosError::OutOfDomain { .. }));
    }
}
