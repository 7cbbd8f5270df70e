//! Core types for converter specifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validate::validate_operating_point;
use crate::error::{DesignerError, Result};

/// Switching converter topology.
///
/// Every formula stage of the sizing engine matches on this enum
/// exhaustively, so adding a topology forces each stage to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topology {
    /// Step-down converter
    Buck,
    /// Step-up converter
    Boost,
    /// Inverting step-down-or-up converter
    #[serde(rename = "Buck-Boost")]
    BuckBoost,
}

impl Topology {
    /// All supported topologies, in menu order.
    pub const ALL: [Topology; 3] = [Topology::Buck, Topology::Boost, Topology::BuckBoost];

    /// Display name as written to design files.
    pub fn name(&self) -> &'static str {
        match self {
            Topology::Buck => "Buck",
            Topology::Boost => "Boost",
            Topology::BuckBoost => "Buck-Boost",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topology {
    type Err = DesignerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "buck" => Ok(Topology::Buck),
            "boost" => Ok(Topology::Boost),
            "buck-boost" | "buckboost" | "buck_boost" => Ok(Topology::BuckBoost),
            _ => Err(DesignerError::UnknownTopology {
                name: s.to_string(),
            }),
        }
    }
}

/// Raw operating parameters, in SI units and fractions.
///
/// This is the unvalidated form collected at the boundary. Turn it into a
/// [`ConverterSpec`] with [`ConverterSpec::new`] before sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Input voltage (V)
    pub vin: f64,
    /// Output voltage (V), negative for an inverting Buck-Boost
    pub vout: f64,
    /// Output current (A)
    pub iout: f64,
    /// Switching frequency (Hz)
    pub fsw: f64,
    /// Conversion efficiency, in (0, 1]
    pub efficiency: f64,
    /// Target output voltage ripple as a fraction of |Vout|
    pub voltage_ripple: f64,
    /// Target inductor current ripple as a fraction of the average inductor current
    pub current_ripple: f64,
}

impl OperatingPoint {
    /// Default operating point for a topology.
    ///
    /// 12 V in, 2 A out, 500 kHz, 90 % efficiency, 1 % voltage ripple and
    /// 30 % current ripple. The output voltage is 5 V for Buck, 24 V for
    /// Boost and -12 V for Buck-Boost.
    pub fn defaults(topology: Topology) -> Self {
        let vout = match topology {
            Topology::Buck => 5.0,
            Topology::Boost => 24.0,
            Topology::BuckBoost => -12.0,
        };
        Self {
            vin: 12.0,
            vout,
            iout: 2.0,
            fsw: 500e3,
            efficiency: 0.9,
            voltage_ripple: 0.01,
            current_ripple: 0.30,
        }
    }
}

/// A validated converter specification.
///
/// Immutable once constructed: every invariant checked by
/// [`validate_operating_point`] holds for the lifetime of the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConverterSpec {
    topology: Topology,
    point: OperatingPoint,
}

impl ConverterSpec {
    /// Validate an operating point for the given topology.
    pub fn new(topology: Topology, point: OperatingPoint) -> Result<Self> {
        validate_operating_point(topology, &point)?;
        Ok(Self { topology, point })
    }

    /// The default design for a topology.
    ///
    /// Skips [`ConverterSpec::new`]: every default operating point passes
    /// [`validate_operating_point`], which `test_defaults_are_valid` checks.
    pub fn defaults(topology: Topology) -> Self {
        let point = OperatingPoint::defaults(topology);
        debug_assert!(validate_operating_point(topology, &point).is_ok());
        Self { topology, point }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The validated operating parameters.
    pub fn point(&self) -> &OperatingPoint {
        &self.point
    }

    pub fn vin(&self) -> f64 {
        self.point.vin
    }

    pub fn vout(&self) -> f64 {
        self.point.vout
    }

    pub fn iout(&self) -> f64 {
        self.point.iout
    }

    /// Switching frequency in Hz.
    pub fn fsw(&self) -> f64 {
        self.point.fsw
    }

    pub fn efficiency(&self) -> f64 {
        self.point.efficiency
    }

    /// Target voltage ripple fraction.
    pub fn voltage_ripple(&self) -> f64 {
        self.point.voltage_ripple
    }

    /// Target current ripple fraction.
    pub fn current_ripple(&self) -> f64 {
        self.point.current_ripple
    }
}
