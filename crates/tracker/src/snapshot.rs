//! Read-only views for external consumers.
//!
//! The renderer and UI read particle and component state through
//! these snapshots; nothing here can mutate engine state.

use nalgebra::{Point3, Vector3};

use crate::engine::SimulationEngine;

/// Read-only view of one particle.
#[derive(Debug, Clone)]
pub struct ParticleSnapshot {
    pub id: u64,
    pub position: Point3<f64>,
    pub momentum: Vector3<f64>,
    /// Kinetic energy (J)
    pub kinetic_energy: f64,
    pub charge: f64,
    pub active: bool,
}

/// Read-only view of one beamline component.
#[derive(Debug, Clone)]
pub struct ComponentSnapshot {
    pub type_name: &'static str,
    pub name: String,
    pub s_position: f64,
    pub length: f64,
    /// Horizontal aperture radius / half-width (m)
    pub aperture: f64,
    /// Dipole field (T)
    pub field: Option<f64>,
    /// Quadrupole gradient (T/m)
    pub gradient: Option<f64>,
    /// RF voltage (V)
    pub voltage: Option<f64>,
    /// RF frequency (Hz)
    pub frequency: Option<f64>,
    /// RF phase (rad)
    pub phase: Option<f64>,
}

impl SimulationEngine {
    /// Iterate read-only snapshots of every particle.
    pub fn particle_snapshots(&self) -> impl Iterator<Item = ParticleSnapshot> + '_ {
        self.ensemble().iter().map(|p| ParticleSnapshot {
            id: p.id(),
            position: *p.position(),
            momentum: *p.momentum(),
            kinetic_energy: p.kinetic_energy(),
            charge: p.charge(),
            active: p.is_active(),
        })
    }

    /// Iterate read-only snapshots of every lattice component.
    pub fn component_snapshots(&self) -> impl Iterator<Item = ComponentSnapshot> + '_ {
        self.lattice()
            .map(|l| l.components())
            .unwrap_or(&[])
            .iter()
            .map(|c| ComponentSnapshot {
                type_name: c.type_name(),
                name: c.name().to_string(),
                s_position: c.s_position(),
                length: c.length(),
                aperture: c.aperture().radius_x,
                field: c.field(),
                gradient: c.gradient(),
                voltage: c.voltage(),
                frequency: c.frequency(),
                phase: c.phase(),
            })
    }
}
