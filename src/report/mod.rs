//! Human-readable design reports and waveform export.
//!
//! [`Report`] renders a sized design as plain text: the operating point,
//! the calculated values, component ratings and power figures. Waveforms
//! are exported as CSV via [`write_waveforms_csv`].

mod csv;

pub use csv::write_waveforms_csv;

use std::fmt;

use crate::sizing::DesignResult;
use crate::units::format_si;

/// A printable summary of a sized design.
pub struct Report<'a> {
    result: &'a DesignResult,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a DesignResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        let spec = r.spec();
        let ratings = r.ratings();

        writeln!(f, "DC-DC Converter Design Report")?;
        writeln!(f, "Converter Type: {}", spec.topology())?;
        writeln!(f)?;

        writeln!(f, "Design Parameters:")?;
        writeln!(f, "  - Input Voltage: {:.2} V", spec.vin())?;
        writeln!(f, "  - Output Voltage: {:.2} V", spec.vout())?;
        writeln!(f, "  - Output Current: {:.2} A", spec.iout())?;
        writeln!(f, "  - Switching Frequency: {:.1} kHz", spec.fsw() / 1e3)?;
        writeln!(f, "  - Efficiency: {:.1}%", spec.efficiency() * 100.0)?;
        writeln!(f)?;

        writeln!(f, "Calculated Values:")?;
        writeln!(f, "  - Duty Cycle: {:.3}", r.duty_cycle())?;
        writeln!(f, "  - Input Current: {:.3} A", r.input_current())?;
        writeln!(f, "  - Inductor Value: {}", format_si(r.inductance(), "H", 2))?;
        writeln!(f, "  - Inductor Current (avg): {:.2} A", r.inductor_current_avg())?;
        writeln!(f, "  - Inductor Current (peak): {:.2} A", r.inductor_current_peak())?;
        writeln!(f, "  - Capacitor Value: {}", format_si(r.capacitance(), "F", 2))?;
        writeln!(f, "  - Voltage Ripple: {:.2}%", r.voltage_ripple_percent())?;
        writeln!(f, "  - Current Ripple: {:.1}%", r.current_ripple_percent())?;
        writeln!(f)?;

        writeln!(f, "Component Ratings:")?;
        writeln!(
            f,
            "  - Inductor: {}, {:.2} A peak",
            format_si(r.inductance(), "H", 2),
            ratings.inductor_current
        )?;
        writeln!(
            f,
            "  - Capacitor: {}, {:.1} V",
            format_si(r.capacitance(), "F", 2),
            ratings.capacitor_voltage
        )?;
        writeln!(
            f,
            "  - Switch: {:.1} V, {:.2} A",
            ratings.switch_voltage, ratings.switch_current
        )?;
        writeln!(
            f,
            "  - Diode: {:.1} V, {:.2} A",
            ratings.diode_voltage, ratings.diode_current
        )?;
        writeln!(f)?;

        writeln!(f, "Additional Details:")?;
        writeln!(f, "  - Input Power: {:.2} W", r.input_power())?;
        writeln!(f, "  - Output Power: {:.2} W", r.output_power())?;
        writeln!(f, "  - Switching Frequency: {:.0} Hz", spec.fsw())?;
        writeln!(f, "  - Inductor Ripple Current: {:.4} A", r.current_ripple())?;
        write!(f, "  - Output Voltage Ripple: {:.4} V", r.voltage_ripple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{ConverterSpec, Topology};
    use crate::sizing::size;

    #[test]
    fn test_buck_report_contents() {
        let result = size(&ConverterSpec::defaults(Topology::Buck)).unwrap();
        let text = Report::new(&result).to_string();

        assert!(text.contains("Converter Type: Buck"));
        assert!(text.contains("Switching Frequency: 500.0 kHz"));
        assert!(text.contains("Efficiency: 90.0%"));
        assert!(text.contains("Duty Cycle: 0.463"));
        assert!(text.contains("Inductor Current (avg): 2.00 A"));
        assert!(text.contains("Inductor Current (peak): 2.30 A"));
        assert!(text.contains("Voltage Ripple: 1.00%"));
        assert!(text.contains("Current Ripple: 30.0%"));
        assert!(text.contains("Switching Frequency: 500000 Hz"));
    }

    #[test]
    fn test_buck_boost_report_uses_output_magnitude() {
        let result = size(&ConverterSpec::defaults(Topology::BuckBoost)).unwrap();
        let text = Report::new(&result).to_string();

        assert!(text.contains("Converter Type: Buck-Boost"));
        assert!(text.contains("Output Voltage: -12.00 V"));
        assert!(text.contains("Voltage Ripple: 1.00%"));
        assert!(text.contains("Diode: 12.0 V"));
        assert!(text.contains("Output Power: 24.00 W"));
    }
}
