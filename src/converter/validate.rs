//! Operating point validation.

use crate::error::{DesignerError, Result};

use super::{OperatingPoint, Topology};

/// Validate an operating point for sizing.
///
/// Checks:
/// - All quantities are finite
/// - Vin, Iout and fsw are positive, Vout is non-zero
/// - Efficiency lies in (0, 1]
/// - Both ripple targets are positive
/// - Buck steps down and Boost steps up
///
/// Buck-Boost accepts any non-zero output voltage.
pub fn validate_operating_point(topology: Topology, point: &OperatingPoint) -> Result<()> {
    let fields = [
        ("Input voltage", point.vin),
        ("Output voltage", point.vout),
        ("Output current", point.iout),
        ("Switching frequency", point.fsw),
        ("Efficiency", point.efficiency),
        ("Voltage ripple", point.voltage_ripple),
        ("Current ripple", point.current_ripple),
    ];
    if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
        return Err(DesignerError::invalid_spec(format!("{name} must be a finite number")));
    }

    if point.vin <= 0.0 {
        return Err(DesignerError::invalid_spec("Input voltage must be positive"));
    }
    if point.vout == 0.0 {
        return Err(DesignerError::invalid_spec("Output voltage cannot be zero"));
    }
    if point.iout <= 0.0 {
        return Err(DesignerError::invalid_spec("Output current must be positive"));
    }
    if point.fsw <= 0.0 {
        return Err(DesignerError::invalid_spec("Switching frequency must be positive"));
    }
    if !(point.efficiency > 0.0 && point.efficiency <= 1.0) {
        return Err(DesignerError::invalid_spec("Efficiency must be between 0 and 1"));
    }
    if point.voltage_ripple <= 0.0 {
        return Err(DesignerError::invalid_spec("Voltage ripple must be positive"));
    }
    if point.current_ripple <= 0.0 {
        return Err(DesignerError::invalid_spec("Current ripple must be positive"));
    }

    match topology {
        Topology::Buck if point.vout >= point.vin => Err(DesignerError::invalid_spec(
            "For Buck converter, output voltage must be less than input voltage",
        )),
        Topology::Boost if point.vout <= point.vin => Err(DesignerError::invalid_spec(
            "For Boost converter, output voltage must be greater than input voltage",
        )),
        _ => Ok(()),
    }
}
