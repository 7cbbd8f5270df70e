//! Idealized waveform reconstruction.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::converter::Topology;
use crate::error::{DesignerError, Result};
use crate::sizing::DesignResult;
use crate::{DEFAULT_INPUT_NOISE_FRACTION, DEFAULT_NUM_SAMPLES, DEFAULT_PERIODS};

use super::Channel;

/// Configuration for waveform synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisConfig {
    /// Number of samples across the whole window.
    pub num_samples: usize,
    /// Window length in switching periods.
    pub periods: u32,
    /// Amplitude of the input voltage noise as a fraction of Vin.
    pub input_noise_fraction: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            num_samples: DEFAULT_NUM_SAMPLES,
            periods: DEFAULT_PERIODS,
            input_noise_fraction: DEFAULT_INPUT_NOISE_FRACTION,
        }
    }
}

impl SynthesisConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of samples in the window.
    pub fn with_num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Set the window length in switching periods.
    pub fn with_periods(mut self, periods: u32) -> Self {
        self.periods = periods;
        self
    }

    /// Set the input noise amplitude as a fraction of Vin.
    pub fn with_input_noise_fraction(mut self, fraction: f64) -> Self {
        self.input_noise_fraction = fraction;
        self
    }

    /// Check that the configuration describes a usable sample grid.
    pub fn validate(&self) -> Result<()> {
        if self.num_samples < 2 {
            return Err(DesignerError::InvalidSynthesisParam {
                message: format!("need at least 2 samples, got {}", self.num_samples),
            });
        }
        if self.periods == 0 {
            return Err(DesignerError::InvalidSynthesisParam {
                message: "window must span at least one period".to_string(),
            });
        }
        if !(self.input_noise_fraction.is_finite() && self.input_noise_fraction >= 0.0) {
            return Err(DesignerError::InvalidSynthesisParam {
                message: format!(
                    "input noise fraction must be a non-negative number, got {}",
                    self.input_noise_fraction
                ),
            });
        }
        Ok(())
    }
}

/// Sampled channels on a shared time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveforms {
    time: Vec<f64>,
    traces: BTreeMap<Channel, Vec<f64>>,
}

impl Waveforms {
    /// Sample times in seconds.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Sampled values of a channel, if it was requested.
    pub fn values(&self, channel: Channel) -> Option<&[f64]> {
        self.traces.get(&channel).map(Vec::as_slice)
    }

    /// `(t, value)` pairs of a channel, if it was requested.
    pub fn points(&self, channel: Channel) -> Option<impl Iterator<Item = (f64, f64)> + '_> {
        let values = self.traces.get(&channel)?;
        Some(self.time.iter().copied().zip(values.iter().copied()))
    }

    /// Synthesized channels, in plotting order.
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.traces.keys().copied()
    }

    /// Number of samples per channel.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Synthesize channels over two switching periods at 1000 samples.
pub fn synthesize(result: &DesignResult, channels: impl IntoIterator<Item = Channel>) -> Waveforms {
    render(result, channels, &SynthesisConfig::default())
}

/// Synthesize channels with a custom sample grid.
pub fn synthesize_with_config(
    result: &DesignResult,
    channels: impl IntoIterator<Item = Channel>,
    config: &SynthesisConfig,
) -> Result<Waveforms> {
    config.validate()?;
    Ok(render(result, channels, config))
}

fn render(
    result: &DesignResult,
    channels: impl IntoIterator<Item = Channel>,
    config: &SynthesisConfig,
) -> Waveforms {
    let model = SignalModel::new(result, config.input_noise_fraction);
    let _span = tracing::debug_span!("synthesize", topology = %model.topology).entered();

    let stop = f64::from(config.periods) * model.period;
    let time = linspace(stop, config.num_samples);

    let traces: BTreeMap<Channel, Vec<f64>> = channels
        .into_iter()
        .map(|channel| {
            let values = time.iter().map(|&t| model.sample(channel, t)).collect();
            (channel, values)
        })
        .collect();

    tracing::debug!(samples = time.len(), channels = traces.len(), "synthesized waveforms");

    Waveforms { time, traces }
}

/// `n` evenly spaced points from 0 to `stop`, both ends included.
fn linspace(stop: f64, n: usize) -> Vec<f64> {
    let step = stop / (n - 1) as f64;
    let mut grid: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
    if let Some(last) = grid.last_mut() {
        *last = stop;
    }
    grid
}

/// Quantities the channel generators read, hoisted out of the sample loop.
struct SignalModel {
    topology: Topology,
    period: f64,
    on_time: f64,
    fsw: f64,
    vin: f64,
    vout: f64,
    iout: f64,
    input_current: f64,
    inductance: f64,
    il_valley: f64,
    il_peak: f64,
    voltage_ripple: f64,
    input_noise: f64,
}

impl SignalModel {
    fn new(result: &DesignResult, input_noise_fraction: f64) -> Self {
        let spec = result.spec();
        let period = 1.0 / spec.fsw();
        Self {
            topology: spec.topology(),
            period,
            on_time: result.duty_cycle() * period,
            fsw: spec.fsw(),
            vin: spec.vin(),
            vout: spec.vout(),
            iout: spec.iout(),
            input_current: result.input_current(),
            inductance: result.inductance(),
            il_valley: result.inductor_current_avg() - result.current_ripple() / 2.0,
            il_peak: result.inductor_current_peak(),
            voltage_ripple: result.voltage_ripple(),
            input_noise: input_noise_fraction * spec.vin(),
        }
    }

    fn sample(&self, channel: Channel, t: f64) -> f64 {
        match channel {
            Channel::Switch => {
                if t % self.period < self.on_time {
                    1.0
                } else {
                    0.0
                }
            }
            Channel::InductorCurrent => self.inductor_current(t),
            Channel::InputVoltage => self.vin + self.input_noise * self.switching_sine(t),
            Channel::OutputVoltage => self.vout + self.voltage_ripple * self.switching_sine(t),
            Channel::InputPower => self.vin * self.input_current,
            Channel::OutputPower => {
                (self.vout + self.voltage_ripple * self.switching_sine(t)) * self.iout
            }
        }
    }

    fn switching_sine(&self, t: f64) -> f64 {
        (2.0 * PI * self.fsw * t).sin()
    }

    /// Triangular inductor current: rises from the valley while the switch
    /// is ON, falls from the peak while it is OFF.
    fn inductor_current(&self, t: f64) -> f64 {
        let phase = t % self.period;
        let l = self.inductance;
        if phase < self.on_time {
            let slope = match self.topology {
                Topology::Buck => (self.vin - self.vout) / l,
                Topology::Boost | Topology::BuckBoost => self.vin / l,
            };
            self.il_valley + slope * phase
        } else {
            let slope = match self.topology {
                Topology::Buck => -self.vout / l,
                Topology::Boost => (self.vin - self.vout) / l,
                Topology::BuckBoost => -self.vout / l,
            };
            self.il_peak + slope * (phase - self.on_time)
        }
    }
}
