//! Design file persistence.
//!
//! A design is stored as a topology tag plus a flat map of parameter name
//! to value, all in base SI units (switching frequency in Hz):
//!
//! ```json
//! {
//!   "type": "Buck",
//!   "parameters": {
//!     "vin": 12.0,
//!     "vout": 5.0,
//!     "fsw": 500000.0,
//!     "voltage_ripple_target": 0.01,
//!     "inductor": 2.16e-5,
//!     ...
//!   }
//! }
//! ```
//!
//! Only the operating point is read back. Derived values are written for
//! reference and recomputed by [`size`] on load.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::converter::{ConverterSpec, OperatingPoint, Topology};
use crate::error::{DesignerError, Result};
use crate::sizing::{size, DesignResult};

/// A persisted converter design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRecord {
    #[serde(rename = "type")]
    pub topology: Topology,
    pub parameters: BTreeMap<String, f64>,
}

impl DesignRecord {
    /// Capture a sized design.
    pub fn from_design(result: &DesignResult) -> Self {
        let spec = result.spec();
        let parameters = [
            ("vin", spec.vin()),
            ("vout", spec.vout()),
            ("iout", spec.iout()),
            ("fsw", spec.fsw()),
            ("efficiency", spec.efficiency()),
            ("voltage_ripple_target", spec.voltage_ripple()),
            ("current_ripple_target", spec.current_ripple()),
            ("duty_cycle", result.duty_cycle()),
            ("inductor", result.inductance()),
            ("capacitor", result.capacitance()),
            ("voltage_ripple", result.voltage_ripple()),
            ("current_ripple", result.current_ripple()),
            ("input_current", result.input_current()),
            ("inductor_current_avg", result.inductor_current_avg()),
            ("inductor_current_peak", result.inductor_current_peak()),
            ("switch_current_peak", result.switch_current_peak()),
            ("diode_current_peak", result.diode_current_peak()),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

        Self {
            topology: spec.topology(),
            parameters,
        }
    }

    fn get(&self, name: &str) -> Result<f64> {
        self.parameters
            .get(name)
            .copied()
            .ok_or_else(|| DesignerError::MissingParameter {
                name: name.to_string(),
            })
    }

    /// Rebuild and validate the specification this record was sized from.
    ///
    /// Records without explicit ripple targets recover them from the stored
    /// realized ripple, which equals the target for any sized design.
    pub fn to_spec(&self) -> Result<ConverterSpec> {
        let vout = self.get("vout")?;

        let voltage_ripple = match self.get("voltage_ripple_target") {
            Ok(target) => target,
            Err(_) if vout == 0.0 => {
                return Err(DesignerError::invalid_spec("Output voltage cannot be zero"));
            }
            Err(_) => self.get("voltage_ripple")? / vout.abs(),
        };
        let current_ripple = match self.get("current_ripple_target") {
            Ok(target) => target,
            Err(_) => self.get("current_ripple")? / self.get("inductor_current_avg")?,
        };

        let point = OperatingPoint {
            vin: self.get("vin")?,
            vout,
            iout: self.get("iout")?,
            fsw: self.get("fsw")?,
            efficiency: self.get("efficiency")?,
            voltage_ripple,
            current_ripple,
        };
        ConverterSpec::new(self.topology, point)
    }

    /// Rebuild the specification and size it again.
    pub fn to_design(&self) -> Result<DesignResult> {
        size(&self.to_spec()?)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the record to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| DesignerError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::info!(path = %path.display(), topology = %self.topology, "saved design");
        Ok(())
    }

    /// Read a record from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| DesignerError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let record = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), topology = %record.topology, "loaded design");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn buck() -> DesignResult {
        size(&ConverterSpec::defaults(Topology::Buck)).unwrap()
    }

    #[test]
    fn test_record_layout() {
        let result = buck();
        let record = DesignRecord::from_design(&result);
        assert_eq!(record.topology, Topology::Buck);
        assert_eq!(record.parameters["fsw"], 500e3);
        assert_eq!(record.parameters["inductor"], result.inductance());
        assert_eq!(record.parameters.len(), 17);

        let json = record.to_json().unwrap();
        assert!(json.contains("\"type\": \"Buck\""));
        assert!(json.contains("\"parameters\""));
    }

    #[test]
    fn test_buck_boost_tag() {
        let result = size(&ConverterSpec::defaults(Topology::BuckBoost)).unwrap();
        let json = DesignRecord::from_design(&result).to_json().unwrap();
        assert!(json.contains("\"type\": \"Buck-Boost\""));
    }

    #[test]
    fn test_json_round_trip_reproduces_design() {
        for topology in Topology::ALL {
            let result = size(&ConverterSpec::defaults(topology)).unwrap();
            let json = DesignRecord::from_design(&result).to_json().unwrap();
            let restored = DesignRecord::from_json(&json).unwrap().to_design().unwrap();
            assert_eq!(restored, result);
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design.json");

        let result = buck();
        DesignRecord::from_design(&result).save(&path).unwrap();
        let restored = DesignRecord::load(&path).unwrap().to_design().unwrap();
        assert_eq!(restored, result);
    }

    #[test]
    fn test_record_without_targets_recovers_them() {
        let result = buck();
        let mut record = DesignRecord::from_design(&result);
        record.parameters.remove("voltage_ripple_target");
        record.parameters.remove("current_ripple_target");

        let spec = record.to_spec().unwrap();
        assert_relative_eq!(spec.voltage_ripple(), 0.01, max_relative = 1e-9);
        assert_relative_eq!(spec.current_ripple(), 0.30, max_relative = 1e-9);
    }

    #[test]
    fn test_record_without_targets_and_zero_output_voltage() {
        let mut record = DesignRecord::from_design(&buck());
        record.parameters.remove("voltage_ripple_target");
        record.parameters.remove("current_ripple_target");
        record.parameters.insert("vout".to_string(), 0.0);
        match record.to_spec() {
            Err(DesignerError::InvalidSpec { reason }) => {
                assert_eq!(reason, "Output voltage cannot be zero")
            }
            other => panic!("expected InvalidSpec, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_parameter() {
        let mut record = DesignRecord::from_design(&buck());
        record.parameters.remove("iout");
        match record.to_spec() {
            Err(DesignerError::MissingParameter { name }) => assert_eq!(name, "iout"),
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let mut record = DesignRecord::from_design(&buck());
        record.parameters.insert("vout".to_string(), 20.0);
        assert!(matches!(record.to_spec(), Err(DesignerError::InvalidSpec { .. })));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            DesignRecord::from_json("{\"type\": \"Flyback\", \"parameters\": {}}"),
            Err(DesignerError::Serialization { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DesignRecord::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DesignerError::FileReadError { .. }));
    }
}
