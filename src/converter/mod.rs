//! Converter specifications and validation.
//!
//! This module provides the input side of a design: the [`Topology`] tag,
//! the raw [`OperatingPoint`] gathered at the boundary, and the validated
//! [`ConverterSpec`] that the sizing engine accepts.

mod types;
mod validate;

pub use types::{ConverterSpec, OperatingPoint, Topology};
pub use validate::validate_operating_point;
