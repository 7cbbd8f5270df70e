//! Converter sizing engine.
//!
//! Maps a validated [`ConverterSpec`](crate::converter::ConverterSpec) to a
//! [`DesignResult`] through four per-topology stages:
//!
//! ```text
//! duty cycle D  ->  Iin, IL_avg  ->  L from dIL target  ->  C from dVout target
//! ```
//!
//! followed by the ripple actually realized by the chosen L and C and the
//! resulting peak currents. Sizing is ripple-exact: the realized ripple
//! equals the target up to floating-point rounding.
//!
//! | Topology   | D                                  | IL_avg        | L                      | C                      |
//! |------------|------------------------------------|---------------|------------------------|------------------------|
//! | Buck       | Vout / (Vin·η)                     | Iout          | (Vin−Vout)·D / (f·dIL) | (1−D) / (8·L·f²·dV)    |
//! | Boost      | 1 − Vin·η / Vout                   | Iin           | Vin·D / (f·dIL)        | Iout·D / (f·dV)        |
//! | Buck-Boost | Vout / (Vout − Vin·η) if Vout < 0, else Vout / (Vin·η + Vout) | Iin / (1−D) | Vin·D / (f·dIL) | Iout·D / (f·dV) |

mod engine;
mod result;

pub use engine::size;
pub use result::{ComponentRatings, DesignResult};
