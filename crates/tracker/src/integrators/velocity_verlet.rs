use beam::Particle;
use emfield::FieldManager;

use super::{lorentz_force, Integrator};

/// Velocity Verlet integrator (2nd order).
///
/// Symplectic in conservative limits; a good general-purpose scheme
/// when the fields vary slowly over a step. The position advances by
/// a half step with the old velocity and a half step with the new
/// one:
///
/// 1. x' = x + v·dt/2
/// 2. p ← p + f(x, t)·dt
/// 3. x ← x' + v_new·dt/2
pub struct VelocityVerlet;

impl Integrator for VelocityVerlet {
    fn step(&self, particle: &mut Particle, fields: &FieldManager, time: f64, dt: f64) {
        if !particle.is_active() {
            return;
        }

        let pos = *particle.position();
        let mom = *particle.momentum();

        let field = fields.evaluate(&pos, time);
        let vel = particle.velocity();
        let force = lorentz_force(particle.charge(), &vel, &field);

        let half_pos = pos + vel * (dt * 0.5);

        particle.set_momentum(mom + force * dt);

        let new_vel = particle.velocity();
        particle.set_position(half_pos + new_vel * (dt * 0.5));
    }

    fn name(&self) -> &'static str {
        "Velocity Verlet"
    }

    fn order(&self) -> u32 {
        2
    }
}
