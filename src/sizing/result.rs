//! Sizing results.

use crate::converter::{ConverterSpec, Topology};

/// Voltage and current ratings for the power-stage components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentRatings {
    /// Inductor peak current (A)
    pub inductor_current: f64,
    /// Output capacitor working voltage (V)
    pub capacitor_voltage: f64,
    /// Switch blocking voltage (V)
    pub switch_voltage: f64,
    /// Switch peak current (A)
    pub switch_current: f64,
    /// Diode reverse voltage (V)
    pub diode_voltage: f64,
    /// Diode peak current (A)
    pub diode_current: f64,
}

/// The outcome of sizing a [`ConverterSpec`].
///
/// Produced once per sizing run and never mutated afterwards. The
/// waveform synthesizer, the report writer and the design file format all
/// read from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignResult {
    pub(super) spec: ConverterSpec,
    pub(super) duty_cycle: f64,
    pub(super) inductance: f64,
    pub(super) capacitance: f64,
    pub(super) input_current: f64,
    pub(super) inductor_current_avg: f64,
    pub(super) inductor_current_peak: f64,
    pub(super) current_ripple: f64,
    pub(super) voltage_ripple: f64,
    pub(super) switch_current_peak: f64,
    pub(super) diode_current_peak: f64,
}

impl DesignResult {
    /// The specification this design was sized from.
    pub fn spec(&self) -> &ConverterSpec {
        &self.spec
    }

    pub fn topology(&self) -> Topology {
        self.spec.topology()
    }

    /// Switch duty cycle D.
    pub fn duty_cycle(&self) -> f64 {
        self.duty_cycle
    }

    /// Inductance in henries.
    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    /// Output capacitance in farads.
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    pub fn input_current(&self) -> f64 {
        self.input_current
    }

    pub fn inductor_current_avg(&self) -> f64 {
        self.inductor_current_avg
    }

    pub fn inductor_current_peak(&self) -> f64 {
        self.inductor_current_peak
    }

    /// Realized peak-to-peak inductor current ripple (A).
    pub fn current_ripple(&self) -> f64 {
        self.current_ripple
    }

    /// Realized peak-to-peak output voltage ripple (V).
    pub fn voltage_ripple(&self) -> f64 {
        self.voltage_ripple
    }

    pub fn switch_current_peak(&self) -> f64 {
        self.switch_current_peak
    }

    pub fn diode_current_peak(&self) -> f64 {
        self.diode_current_peak
    }

    /// Realized voltage ripple as a percentage of |Vout|.
    pub fn voltage_ripple_percent(&self) -> f64 {
        self.voltage_ripple / self.spec.vout().abs() * 100.0
    }

    /// Realized current ripple as a percentage of the average inductor current.
    pub fn current_ripple_percent(&self) -> f64 {
        self.current_ripple / self.inductor_current_avg * 100.0
    }

    /// Input power Vin * Iin (W).
    pub fn input_power(&self) -> f64 {
        self.spec.vin() * self.input_current
    }

    /// Output power |Vout| * Iout (W).
    pub fn output_power(&self) -> f64 {
        self.spec.vout().abs() * self.spec.iout()
    }

    /// Component ratings derived from the operating point.
    pub fn ratings(&self) -> ComponentRatings {
        let vin = self.spec.vin();
        let vout = self.spec.vout().abs();
        ComponentRatings {
            inductor_current: self.inductor_current_peak,
            capacitor_voltage: vout,
            switch_voltage: vin,
            switch_current: self.switch_current_peak,
            diode_voltage: vin.max(vout),
            diode_current: self.diode_current_peak,
        }
    }
}
