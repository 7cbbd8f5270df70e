//! Engineering-notation quantities.
//!
//! Values at the CLI and WASM boundary may carry a single SI suffix
//! (`500k`, `22u`, `4.7µ`). Reports render derived component values back
//! with a matching prefix.

use crate::error::{DesignerError, Result};

/// SI prefixes used when formatting, largest first.
const PREFIXES: [(f64, &str); 7] = [
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
    (1e-9, "n"),
];

fn suffix_multiplier(ch: char) -> Option<f64> {
    match ch {
        'p' => Some(1e-12),
        'n' => Some(1e-9),
        'u' | 'µ' => Some(1e-6),
        'm' => Some(1e-3),
        'k' | 'K' => Some(1e3),
        'M' => Some(1e6),
        'G' => Some(1e9),
        _ => None,
    }
}

/// Parse a number string with optional unit suffix.
pub fn parse_value(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let Some(last) = trimmed.chars().last() else {
        return Err(DesignerError::invalid_value(text, "empty value"));
    };

    let (num_str, multiplier) = match suffix_multiplier(last) {
        Some(mult) => (&trimmed[..trimmed.len() - last.len_utf8()], mult),
        None => (trimmed, 1.0),
    };

    let value = num_str
        .parse::<f64>()
        .map_err(|e| DesignerError::invalid_value(text, e.to_string()))?;

    if !value.is_finite() {
        return Err(DesignerError::invalid_value(text, "value must be finite"));
    }

    Ok(value * multiplier)
}

/// Parse a frequency given in kHz unless it carries its own suffix.
///
/// `"500"` and `"500k"` both yield 500 000 Hz; `"1M"` yields 1 MHz.
pub fn parse_frequency_khz(text: &str) -> Result<f64> {
    let has_suffix = text.trim().chars().last().and_then(suffix_multiplier).is_some();
    let value = parse_value(text)?;
    Ok(if has_suffix { value } else { value * 1e3 })
}

/// Format a value with an SI prefix and unit, e.g. `22.22 µH`.
pub fn format_si(value: f64, unit: &str, decimals: usize) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return format!("{:.*} {}", decimals, value, unit);
    }

    let (scale, prefix) = PREFIXES
        .iter()
        .copied()
        .find(|(scale, _)| magnitude >= *scale)
        .unwrap_or((1e-12, "p"));

    format!("{:.*} {}{}", decimals, value / scale, prefix, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_value() {
        assert_relative_eq!(parse_value("10k").unwrap(), 10_000.0);
        assert_relative_eq!(parse_value("100n").unwrap(), 100e-9);
        assert_relative_eq!(parse_value("4.7u").unwrap(), 4.7e-6);
        assert_relative_eq!(parse_value("4.7µ").unwrap(), 4.7e-6);
        assert_relative_eq!(parse_value("1M").unwrap(), 1_000_000.0);
        assert_relative_eq!(parse_value("-12").unwrap(), -12.0);
        assert_relative_eq!(parse_value("1e-9").unwrap(), 1e-9);
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert!(parse_value("").is_err());
        assert!(parse_value("abc").is_err());
        assert!(parse_value("k").is_err());
        assert!(parse_value("inf").is_err());
    }

    #[test]
    fn test_parse_frequency_khz() {
        assert_relative_eq!(parse_frequency_khz("500").unwrap(), 500e3);
        assert_relative_eq!(parse_frequency_khz("500k").unwrap(), 500e3);
        assert_relative_eq!(parse_frequency_khz("1.2M").unwrap(), 1.2e6);
    }

    #[test]
    fn test_format_si() {
        assert_eq!(format_si(22.5e-6, "H", 2), "22.50 µH");
        assert_eq!(format_si(500e3, "Hz", 1), "500.0 kHz");
        assert_eq!(format_si(12.0, "V", 1), "12.0 V");
        assert_eq!(format_si(-12.0, "V", 1), "-12.0 V");
        assert_eq!(format_si(0.0, "A", 2), "0.00 A");
    }
}
