use beam::Particle;
use emfield::FieldManager;
use units::relativistic;

use super::Integrator;

/// Boris pusher (2nd order, phase-space-volume preserving).
///
/// The de-facto standard for charged particles in magnetic fields.
/// The electric impulse is split around a pure rotation by the
/// magnetic field, so kinetic energy is conserved identically in pure
/// B-fields (to floating-point rounding) and a uniform field yields a
/// circular orbit of radius |p|/(|q|·|B|).
///
/// 1. p⁻ = p + q·E·dt/2
/// 2. γ from |p⁻|
/// 3. t = q·B·dt/(2·γ·m), s = 2t/(1 + |t|²)
/// 4. u' = u⁻ + u⁻ × t, u⁺ = u⁻ + u' × s
/// 5. p = u⁺·γ·m + q·E·dt/2
/// 6. x ← x + v_new·dt
pub struct Boris;

impl Integrator for Boris {
    fn step(&self, particle: &mut Particle, fields: &FieldManager, time: f64, dt: f64) {
        if !particle.is_active() {
            return;
        }

        let pos = *particle.position();
        let mom = *particle.momentum();
        let q = particle.charge();
        let m = particle.mass();

        let field = fields.evaluate(&pos, time);

        // First half of the electric impulse
        let mom_minus = mom + field.e * (q * dt * 0.5);

        let gamma = relativistic::gamma_from_momentum(mom_minus.norm(), m);

        // Rotation vectors
        let t = field.b * (q * dt / (2.0 * gamma * m));
        let t_mag2 = t.dot(&t);
        let s = t * (2.0 / (1.0 + t_mag2));

        // Rotate u = p/(gamma*m) around B
        let u_minus = mom_minus / (gamma * m);
        let u_prime = u_minus + u_minus.cross(&t);
        let u_plus = u_minus + u_prime.cross(&s);

        let mom_plus = u_plus * (gamma * m);

        // Second half of the electric impulse
        particle.set_momentum(mom_plus + field.e * (q * dt * 0.5));

        let new_vel = particle.velocity();
        particle.set_position(pos + new_vel * dt);
    }

    fn name(&self) -> &'static str {
        "Boris"
    }

    fn order(&self) -> u32 {
        2
    }
}
