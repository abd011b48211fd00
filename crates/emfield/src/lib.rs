//! Electromagnetic field sources and superposition.
//!
//! This crate provides the `FieldSource` trait and the concrete field
//! maps used by beamline elements (uniform dipole field, quadrupole
//! gradient, RF cavity), plus the `FieldManager` that sums enabled
//! sources at a query point.

pub mod manager;
pub mod quadrupole;
pub mod rf;
pub mod source;
pub mod uniform;
pub mod value;

#[cfg(test)]
mod value_test;

pub use manager::FieldManager;
pub use quadrupole::QuadrupoleField;
pub use rf::RfField;
pub use source::FieldSource;
pub use uniform::UniformBField;
pub use value::{BoundingBox, FieldValue};
