//! Waveform synthesizer.
//!
//! Reconstructs idealized converter signals from a
//! [`DesignResult`](crate::sizing::DesignResult). Nothing is integrated:
//! each sample is a closed-form function of the design and its time, so
//! regenerating a waveform is bit-for-bit reproducible.
//!
//! ## Channels
//!
//! | Channel          | Model                                                  |
//! |------------------|--------------------------------------------------------|
//! | switch           | 1 while `t mod T < D·T`, else 0                        |
//! | inductor_current | valley + ON slope while ON, peak + OFF slope while OFF |
//! | input_voltage    | Vin + 5 % Vin · sin(2π·fsw·t)                          |
//! | output_voltage   | Vout + dVout · sin(2π·fsw·t)                           |
//! | input_power      | Vin · Iin                                              |
//! | output_power     | (Vout + dVout · sin(2π·fsw·t)) · Iout                  |
//!
//! The default window covers two switching periods with 1000 samples,
//! both end points included.

mod channel;
mod synth;

pub use channel::{Channel, DisplayMode};
pub use synth::{synthesize, synthesize_with_config, SynthesisConfig, Waveforms};
