//! Particle tracking: integrator strategies and the simulation
//! engine.
//!
//! The engine advances an ensemble of relativistic particles through
//! the superposed fields of a beamline lattice with a fixed-timestep
//! accumulator loop, detects aperture losses, and publishes beam and
//! performance statistics.

pub mod config;
pub mod engine;
pub mod integrators;
pub mod snapshot;


pub use config::{
    load_lattice, save_lattice, Config, ConfigError, RenderConfig, SimulationConfig, WindowConfig,
};
pub use engine::{SimulationEngine, SimulationState, SimulationStats};
pub use integrators::{Boris, Euler, Integrator, IntegratorKind, Rk4, VelocityVerlet};
pub use snapshot::{ComponentSnapshot, ParticleSnapshot};
