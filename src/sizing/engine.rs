//! Closed-form sizing equations.

use crate::converter::{ConverterSpec, OperatingPoint, Topology};
use crate::error::{DesignerError, Result};

use super::DesignResult;

/// Size the passive components of a converter.
///
/// Computes, in order: duty cycle, input and average inductor current,
/// inductance from the target current ripple, capacitance from the target
/// voltage ripple, and the ripple actually realized by the chosen L and C.
///
/// Returns [`DesignerError::ArithmeticDegeneracy`] when any stage leaves
/// its physical range (D outside (0, 1), a non-positive or non-finite
/// current, L, C or ripple). No partial result is ever returned.
pub fn size(spec: &ConverterSpec) -> Result<DesignResult> {
    let topology = spec.topology();
    let _span = tracing::debug_span!("size", %topology).entered();
    let p = spec.point();

    let d = duty_cycle(topology, p);
    if !(d.is_finite() && d > 0.0 && d < 1.0) {
        tracing::warn!(d, "duty cycle outside (0, 1)");
        return Err(DesignerError::degenerate("duty cycle", d));
    }

    let (iin, il_avg) = currents(topology, p, d);
    ensure_positive("input current", iin)?;
    ensure_positive("average inductor current", il_avg)?;

    let delta_il = il_avg * p.current_ripple;
    let l = inductance(topology, p, d, delta_il);
    ensure_positive("inductance", l)?;

    // Ripple is peak-to-peak, so the target scales with |Vout|
    let delta_vout = p.vout.abs() * p.voltage_ripple;
    let c = capacitance(topology, p, d, l, delta_vout);
    ensure_positive("capacitance", c)?;

    let (current_ripple, voltage_ripple) = realized_ripple(topology, p, d, l, c);
    ensure_positive("inductor current ripple", current_ripple)?;
    ensure_positive("output voltage ripple", voltage_ripple)?;

    let il_peak = il_avg + current_ripple / 2.0;
    ensure_positive("peak inductor current", il_peak)?;

    tracing::debug!(d, l, c, il_avg, il_peak, "sized converter");

    Ok(DesignResult {
        spec: *spec,
        duty_cycle: d,
        inductance: l,
        capacitance: c,
        input_current: iin,
        inductor_current_avg: il_avg,
        inductor_current_peak: il_peak,
        current_ripple,
        voltage_ripple,
        // Ideal switch model: both devices carry the inductor peak
        switch_current_peak: il_peak,
        diode_current_peak: il_peak,
    })
}

fn ensure_positive(quantity: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        tracing::warn!(quantity, value, "degenerate design");
        Err(DesignerError::degenerate(quantity, value))
    }
}

/// Duty cycle D, including the efficiency correction.
fn duty_cycle(topology: Topology, p: &OperatingPoint) -> f64 {
    let vin_eff = p.vin * p.efficiency;
    match topology {
        Topology::Buck => p.vout / vin_eff,
        Topology::Boost => 1.0 - vin_eff / p.vout,
        Topology::BuckBoost => {
            if p.vout < 0.0 {
                p.vout / (p.vout - vin_eff)
            } else {
                p.vout / (vin_eff + p.vout)
            }
        }
    }
}

/// Input current and average inductor current.
fn currents(topology: Topology, p: &OperatingPoint, d: f64) -> (f64, f64) {
    let vin_eff = p.vin * p.efficiency;
    match topology {
        Topology::Buck => (p.iout * p.vout / vin_eff, p.iout),
        Topology::Boost => {
            let iin = p.iout * p.vout / vin_eff;
            (iin, iin)
        }
        Topology::BuckBoost => {
            let iin = p.iout * p.vout.abs() / vin_eff;
            (iin, iin / (1.0 - d))
        }
    }
}

/// Inductance for a target peak-to-peak current ripple `delta_il`.
fn inductance(topology: Topology, p: &OperatingPoint, d: f64, delta_il: f64) -> f64 {
    match topology {
        Topology::Buck => (p.vin - p.vout) * d / (p.fsw * delta_il),
        Topology::Boost | Topology::BuckBoost => p.vin * d / (p.fsw * delta_il),
    }
}

/// Capacitance for a target peak-to-peak output ripple `delta_vout`.
fn capacitance(topology: Topology, p: &OperatingPoint, d: f64, l: f64, delta_vout: f64) -> f64 {
    match topology {
        Topology::Buck => (1.0 - d) / (8.0 * l * p.fsw.powi(2) * delta_vout),
        Topology::Boost | Topology::BuckBoost => p.iout * d / (p.fsw * delta_vout),
    }
}

/// Current and voltage ripple realized by the chosen L and C.
fn realized_ripple(topology: Topology, p: &OperatingPoint, d: f64, l: f64, c: f64) -> (f64, f64) {
    match topology {
        Topology::Buck => (
            (p.vin - p.vout) * d / (p.fsw * l),
            (1.0 - d) / (8.0 * l * c * p.fsw.powi(2)),
        ),
        Topology::Boost | Topology::BuckBoost => {
            (p.vin * d / (p.fsw * l), p.iout * d / (p.fsw * c))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec(topology: Topology, vin: f64, vout: f64) -> ConverterSpec {
        let point = OperatingPoint {
            vin,
            vout,
            ..OperatingPoint::defaults(topology)
        };
        ConverterSpec::new(topology, point).unwrap()
    }

    fn assert_ripple_exact(result: &DesignResult) {
        let s = result.spec();
        let target_il = result.inductor_current_avg() * s.current_ripple();
        let target_v = s.vout().abs() * s.voltage_ripple();
        assert_relative_eq!(result.current_ripple(), target_il, max_relative = 1e-9);
        assert_relative_eq!(result.voltage_ripple(), target_v, max_relative = 1e-9);
    }

    #[test]
    fn test_buck_reference_design() {
        let result = size(&spec(Topology::Buck, 12.0, 5.0)).unwrap();

        assert_relative_eq!(result.duty_cycle(), 5.0 / 10.8, max_relative = 1e-12);
        assert!((result.duty_cycle() - 0.4630).abs() < 1e-4);
        assert_eq!(result.inductor_current_avg(), 2.0);
        assert!(result.inductance() > 0.0);
        assert!(result.capacitance() > 0.0);
        assert_eq!(result.switch_current_peak(), result.inductor_current_peak());
        assert_eq!(result.diode_current_peak(), result.inductor_current_peak());

        // L = (12 - 5) * D / (500k * 0.6)
        let expected_l = 7.0 * result.duty_cycle() / (500e3 * 0.6);
        assert_relative_eq!(result.inductance(), expected_l, max_relative = 1e-12);
        assert_relative_eq!(result.inductor_current_peak(), 2.3, max_relative = 1e-9);
        assert_ripple_exact(&result);
    }

    #[test]
    fn test_boost_reference_design() {
        let result = size(&spec(Topology::Boost, 12.0, 24.0)).unwrap();

        // D = 1 - Vin * eta / Vout
        assert_relative_eq!(result.duty_cycle(), 0.55, max_relative = 1e-12);
        assert_relative_eq!(result.input_current(), 2.0 * 24.0 / 10.8, max_relative = 1e-12);
        assert_eq!(result.inductor_current_avg(), result.input_current());
        assert!(result.inductor_current_avg() > result.spec().iout());
        assert_ripple_exact(&result);
    }

    #[test]
    fn test_buck_boost_negative_output() {
        let result = size(&spec(Topology::BuckBoost, 12.0, -12.0)).unwrap();

        let d = -12.0 / (-12.0 - 10.8);
        assert_relative_eq!(result.duty_cycle(), d, max_relative = 1e-12);
        let iin = 2.0 * 12.0 / 10.8;
        assert_relative_eq!(result.input_current(), iin, max_relative = 1e-12);
        assert_relative_eq!(result.inductor_current_avg(), iin / (1.0 - d), max_relative = 1e-12);
        assert!(result.inductor_current_avg().is_finite());
        assert!(result.inductor_current_avg() > 0.0);
        assert!(result.capacitance() > 0.0);
        assert_ripple_exact(&result);
    }

    #[test]
    fn test_buck_boost_positive_output() {
        let result = size(&spec(Topology::BuckBoost, 12.0, 18.0)).unwrap();
        assert_relative_eq!(result.duty_cycle(), 18.0 / (10.8 + 18.0), max_relative = 1e-12);
        assert_ripple_exact(&result);
    }

    #[test]
    fn test_ripple_exact_across_operating_points() {
        let cases = [
            (Topology::Buck, 48.0, 3.3),
            (Topology::Buck, 5.0, 1.2),
            (Topology::Boost, 3.7, 5.0),
            (Topology::Boost, 12.0, 400.0),
            (Topology::BuckBoost, 24.0, -5.0),
            (Topology::BuckBoost, 5.0, 30.0),
        ];
        for (topology, vin, vout) in cases {
            let result = size(&spec(topology, vin, vout)).unwrap();
            assert!(result.duty_cycle() > 0.0 && result.duty_cycle() < 1.0);
            assert_ripple_exact(&result);
        }
    }

    #[test]
    fn test_buck_duty_cycle_at_or_above_one_is_degenerate() {
        // 11 V from 12 V at 90 % needs D = 11 / 10.8 > 1
        let err = size(&spec(Topology::Buck, 12.0, 11.0)).unwrap_err();
        match err {
            DesignerError::ArithmeticDegeneracy { quantity, value } => {
                assert_eq!(quantity, "duty cycle");
                assert!(value > 1.0);
            }
            other => panic!("expected degeneracy, got {other:?}"),
        }
    }

    #[test]
    fn test_buck_boost_extreme_ratio_is_degenerate() {
        // Vout - Vin * eta rounds to Vout, so D evaluates to exactly 1
        let point = OperatingPoint {
            vin: 12.0,
            vout: -1e20,
            ..OperatingPoint::defaults(Topology::BuckBoost)
        };
        let spec = ConverterSpec::new(Topology::BuckBoost, point).unwrap();
        match size(&spec) {
            Err(DesignerError::ArithmeticDegeneracy { quantity, value }) => {
                assert_eq!(quantity, "duty cycle");
                assert_eq!(value, 1.0);
            }
            other => panic!("expected degeneracy, got {other:?}"),
        }
    }

    #[test]
    fn test_vanishing_input_voltage_is_degenerate() {
        let point = OperatingPoint {
            vin: 1e-300,
            vout: 24.0,
            ..OperatingPoint::defaults(Topology::Boost)
        };
        let spec = ConverterSpec::new(Topology::Boost, point).unwrap();
        assert!(matches!(
            size(&spec),
            Err(DesignerError::ArithmeticDegeneracy { .. })
        ));
    }

    #[test]
    fn test_sizing_is_deterministic() {
        let s = spec(Topology::Boost, 5.0, 12.0);
        assert_eq!(size(&s).unwrap(), size(&s).unwrap());
    }

    #[test]
    fn test_ratings() {
        let result = size(&spec(Topology::BuckBoost, 12.0, -24.0)).unwrap();
        let ratings = result.ratings();
        assert_eq!(ratings.capacitor_voltage, 24.0);
        assert_eq!(ratings.switch_voltage, 12.0);
        assert_eq!(ratings.diode_voltage, 24.0);
        assert_eq!(ratings.inductor_current, result.inductor_current_peak());
        assert_eq!(ratings.switch_current, result.switch_current_peak());
        assert_eq!(ratings.diode_current, result.diode_current_peak());
    }

    #[test]
    fn test_power_balance_follows_efficiency() {
        let result = size(&spec(Topology::Buck, 12.0, 5.0)).unwrap();
        assert_relative_eq!(
            result.output_power() / result.input_power(),
            0.9,
            max_relative = 1e-12
        );
    }
}
