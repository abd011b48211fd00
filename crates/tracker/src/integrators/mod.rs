//! Numerical integrators for the relativistic Lorentz equation.
//!
//! All integrators advance one particle by one fixed timestep against
//! the fields published by a `FieldManager`. Different schemes can be
//! swapped at runtime without touching particle state.

use beam::Particle;
use emfield::{FieldManager, FieldValue};
use nalgebra::Vector3;

pub mod boris;
pub mod euler;
pub mod rk4;
pub mod velocity_verlet;

#[cfg(test)]
mod boris_test;
#[cfg(test)]
mod integrators_test;

pub use boris::Boris;
pub use euler::Euler;
pub use rk4::Rk4;
pub use velocity_verlet::VelocityVerlet;

/// A time integrator for charged-particle motion.
///
/// Integrators advance position and momentum by exactly one timestep,
/// evaluating the electromagnetic field at the positions and times
/// their scheme requires. Inactive particles are a no-op.
///
/// # Examples
///
/// ```
/// use beam::Particle;
/// use emfield::FieldManager;
/// use nalgebra::{Point3, Vector3};
/// use tracker::integrators::{Boris, Integrator};
/// use units::constants::C;
///
/// let mut proton = Particle::proton(Point3::origin(), Vector3::zeros());
/// proton.set_velocity(Vector3::new(0.1 * C, 0.0, 0.0));
///
/// let fields = FieldManager::new();
/// let boris = Boris;
/// boris.step(&mut proton, &fields, 0.0, 1e-12);
/// assert!(proton.position().x > 0.0);
/// ```
pub trait Integrator: Send + Sync {
    /// Advance a particle by one timestep.
    ///
    /// # Arguments
    ///
    /// * `particle` - The particle to update (modified in place)
    /// * `fields` - Field sources to evaluate
    /// * `time` - Current simulation time (s)
    /// * `dt` - Timestep (s)
    fn step(&self, particle: &mut Particle, fields: &FieldManager, time: f64, dt: f64);

    /// Display name of this scheme.
    fn name(&self) -> &'static str;

    /// Order of accuracy.
    fn order(&self) -> u32;
}

/// The available integration schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorKind {
    Euler,
    VelocityVerlet,
    #[default]
    Boris,
    Rk4,
}

impl IntegratorKind {
    /// Instantiate the integrator for this kind.
    pub fn create(self) -> Box<dyn Integrator> {
        match self {
            IntegratorKind::Euler => Box::new(Euler),
            IntegratorKind::VelocityVerlet => Box::new(VelocityVerlet),
            IntegratorKind::Boris => Box::new(Boris),
            IntegratorKind::Rk4 => Box::new(Rk4),
        }
    }

    /// Map a configuration index to a kind. Unknown indices fall
    /// back to Boris with a warning.
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => IntegratorKind::Euler,
            1 => IntegratorKind::VelocityVerlet,
            2 => IntegratorKind::Boris,
            3 => IntegratorKind::Rk4,
            _ => {
                log::warn!("unknown integrator index {}, defaulting to Boris", index);
                IntegratorKind::Boris
            }
        }
    }

    pub fn index(self) -> i64 {
        match self {
            IntegratorKind::Euler => 0,
            IntegratorKind::VelocityVerlet => 1,
            IntegratorKind::Boris => 2,
            IntegratorKind::Rk4 => 3,
        }
    }
}

/// Lorentz force f = q(E + v × B).
pub(crate) fn lorentz_force(charge: f64, velocity: &Vector3<f64>, field: &FieldValue) -> Vector3<f64> {
    (field.e + velocity.cross(&field.b)) * charge
}
