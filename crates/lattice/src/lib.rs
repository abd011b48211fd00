//! Beamline description: apertures, components and the lattice.
//!
//! A lattice is an ordered sequence of components (drifts, magnets,
//! cavities, detectors) with longitudinal s-positions assigned as the
//! prefix sum of component lengths. Field-bearing components own
//! their field sources and publish them to an `emfield::FieldManager`
//! for tracking.

pub mod aperture;
pub mod component;
pub mod fodo;
#[allow(clippy::module_inception)]
pub mod lattice;

#[cfg(test)]
mod fodo_test;

pub use aperture::{Aperture, ApertureShape};
pub use component::{Component, ComponentKind, Hit};
pub use fodo::FodoCellParams;
pub use lattice::{Lattice, LatticeType};
