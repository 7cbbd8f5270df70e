//! Waveform channels and display modes.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{DesignerError, Result};

/// A synthesized signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Switch control signal (1.0 = ON, 0.0 = OFF)
    Switch,
    /// Inductor current (A)
    InductorCurrent,
    /// Input voltage with switching noise (V)
    InputVoltage,
    /// Output voltage with ripple (V)
    OutputVoltage,
    /// Input power (W)
    InputPower,
    /// Output power (W)
    OutputPower,
}

impl Channel {
    /// All channels, in plotting order.
    pub const ALL: [Channel; 6] = [
        Channel::Switch,
        Channel::InductorCurrent,
        Channel::InputVoltage,
        Channel::OutputVoltage,
        Channel::InputPower,
        Channel::OutputPower,
    ];

    /// Machine name, used for CSV headers and lookups.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Switch => "switch",
            Channel::InductorCurrent => "inductor_current",
            Channel::InputVoltage => "input_voltage",
            Channel::OutputVoltage => "output_voltage",
            Channel::InputPower => "input_power",
            Channel::OutputPower => "output_power",
        }
    }

    /// Unit of the sampled values.
    pub fn unit(&self) -> &'static str {
        match self {
            Channel::Switch => "",
            Channel::InductorCurrent => "A",
            Channel::InputVoltage | Channel::OutputVoltage => "V",
            Channel::InputPower | Channel::OutputPower => "W",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = DesignerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Channel::ALL
            .into_iter()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| DesignerError::UnknownChannel {
                name: s.to_string(),
            })
    }
}

/// Which group of plots to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Every channel
    #[default]
    All,
    /// Switch control signal only
    Duty,
    /// Inductor current only
    Current,
    /// Input and output voltage
    Voltage,
}

impl DisplayMode {
    /// Channels rendered in this mode.
    pub fn channels(&self) -> BTreeSet<Channel> {
        match self {
            DisplayMode::All => Channel::ALL.into_iter().collect(),
            DisplayMode::Duty => BTreeSet::from([Channel::Switch]),
            DisplayMode::Current => BTreeSet::from([Channel::InductorCurrent]),
            DisplayMode::Voltage => BTreeSet::from([Channel::InputVoltage, Channel::OutputVoltage]),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = DesignerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(DisplayMode::All),
            "duty" => Ok(DisplayMode::Duty),
            "current" => Ok(DisplayMode::Current),
            "voltage" => Ok(DisplayMode::Voltage),
            _ => Err(DesignerError::UnknownDisplayMode {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_names_parse_back() {
        for channel in Channel::ALL {
            assert_eq!(channel.name().parse::<Channel>().unwrap(), channel);
        }
        assert_eq!("Inductor-Current".parse::<Channel>().unwrap(), Channel::InductorCurrent);
        assert!("ripple".parse::<Channel>().is_err());
    }

    #[test]
    fn test_display_mode_channels() {
        assert_eq!(DisplayMode::All.channels().len(), 6);
        assert_eq!(
            DisplayMode::Duty.channels().into_iter().collect::<Vec<_>>(),
            vec![Channel::Switch]
        );
        assert_eq!(
            DisplayMode::Voltage.channels().into_iter().collect::<Vec<_>>(),
            vec![Channel::InputVoltage, Channel::OutputVoltage]
        );
        assert!("scope".parse::<DisplayMode>().is_err());
    }
}
