use beam::Particle;
use emfield::FieldManager;

use super::{lorentz_force, Integrator};

/// Explicit Euler integrator (1st order).
///
/// Included for diagnostics and comparison only: it neither conserves
/// energy nor preserves phase-space volume, and its error grows
/// quickly in magnetic fields. Use [`Boris`](super::Boris) for
/// production tracking.
pub struct Euler;

impl Integrator for Euler {
    fn step(&self, particle: &mut Particle, fields: &FieldManager, time: f64, dt: f64) {
        if !particle.is_active() {
            return;
        }

        let pos = *particle.position();
        let mom = *particle.momentum();

        let field = fields.evaluate(&pos, time);
        let vel = particle.velocity();
        let force = lorentz_force(particle.charge(), &vel, &field);

        particle.set_momentum(mom + force * dt);

        // Position advances with the post-kick velocity
        let new_vel = particle.velocity();
        particle.set_position(pos + new_vel * dt);
    }

    fn name(&self) -> &'static str {
        "Euler"
    }

    fn order(&self) -> u32 {
        1
    }
}
