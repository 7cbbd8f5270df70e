//! # DC-DC Designer
//!
//! Component sizing and waveform synthesis for switching DC-DC converters.
//!
//! This library provides:
//! - Validated converter specifications for Buck, Boost and Buck-Boost topologies
//! - A closed-form sizing engine for duty cycle, L, C, currents, ripple and ratings
//! - Idealized switch, inductor current, voltage and power waveforms
//! - JSON design files, text reports and CSV waveform export
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`converter`] - Topologies, operating points and validation
//! - [`sizing`] - The sizing engine and its [`DesignResult`]
//! - [`waveform`] - Waveform synthesis over a fixed time window
//! - [`persist`] - Design file format
//! - [`report`] - Text reports and CSV export
//! - [`units`] - Engineering-notation parsing and formatting
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! dcdc design --topology buck --vin 12 --vout 5 --iout 2 --fsw 500 --save buck.json
//! dcdc open buck.json --waveforms buck.csv --mode current
//! ```
//!
//! The CSV has a `time` column followed by one column per channel, ready for
//! gnuplot, a spreadsheet or any other CSV plotter.
//!
//! ### Library
//!
//! ```
//! use dcdc_designer::{size, synthesize, Channel, ConverterSpec, OperatingPoint, Topology};
//!
//! let point = OperatingPoint {
//!     vin: 12.0,
//!     vout: 5.0,
//!     ..OperatingPoint::defaults(Topology::Buck)
//! };
//! let spec = ConverterSpec::new(Topology::Buck, point)?;
//! let design = size(&spec)?;
//! let waves = synthesize(&design, [Channel::InductorCurrent]);
//! assert_eq!(waves.len(), 1000);
//! # Ok::<(), dcdc_designer::DesignerError>(())
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmDesigner } from 'dcdc_designer';
//!
//! const design = new WasmDesigner("Buck", 12, 5, 2, 500, 0.9, 1, 30);
//! const il = design.waveform("inductor_current");
//! ```

pub mod converter;
pub mod error;
pub mod persist;
pub mod report;
pub mod sizing;
pub mod units;
pub mod waveform;

// Re-export main types for convenience
pub use converter::{ConverterSpec, OperatingPoint, Topology};
pub use error::{DesignerError, Result};
pub use persist::DesignRecord;
pub use sizing::{size, ComponentRatings, DesignResult};
pub use waveform::{
    synthesize, synthesize_with_config, Channel, DisplayMode, SynthesisConfig, Waveforms,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmDesigner;

/// Default number of waveform samples
pub const DEFAULT_NUM_SAMPLES: usize = 1000;

/// Default waveform window, in switching periods
pub const DEFAULT_PERIODS: u32 = 2;

/// Input voltage switching-noise amplitude, as a fraction of Vin
pub const DEFAULT_INPUT_NOISE_FRACTION: f64 = 0.05;
