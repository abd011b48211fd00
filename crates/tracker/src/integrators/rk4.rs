use beam::Particle;
use emfield::FieldManager;
use nalgebra::{Point3, Vector3};
use units::relativistic;

use super::{lorentz_force, Integrator};

/// Classical 4th-order Runge–Kutta on (x, p).
///
/// Higher accuracy per step at the cost of four field evaluations.
/// The derivative of the phase-space state is (dx/dt, dp/dt) =
/// (v, f) with v = p/(γm) and f the Lorentz force at (x, t).
pub struct Rk4;

/// Phase-space derivative: (dx/dt, dp/dt).
struct Derivative {
    velocity: Vector3<f64>,
    force: Vector3<f64>,
}

impl Rk4 {
    fn derivative(
        particle: &Particle,
        position: &Point3<f64>,
        momentum: &Vector3<f64>,
        fields: &FieldManager,
        time: f64,
    ) -> Derivative {
        let m = particle.mass();
        let q = particle.charge();

        let gamma = relativistic::gamma_from_momentum(momentum.norm(), m);
        let velocity = momentum / (gamma * m);

        let field = fields.evaluate(position, time);
        let force = lorentz_force(q, &velocity, &field);

        Derivative { velocity, force }
    }
}

impl Integrator for Rk4 {
    fn step(&self, particle: &mut Particle, fields: &FieldManager, time: f64, dt: f64) {
        if !particle.is_active() {
            return;
        }

        let pos = *particle.position();
        let mom = *particle.momentum();

        let k1 = Self::derivative(particle, &pos, &mom, fields, time);

        let pos2 = pos + k1.velocity * (dt * 0.5);
        let mom2 = mom + k1.force * (dt * 0.5);
        let k2 = Self::derivative(particle, &pos2, &mom2, fields, time + dt * 0.5);

        let pos3 = pos + k2.velocity * (dt * 0.5);
        let mom3 = mom + k2.force * (dt * 0.5);
        let k3 = Self::derivative(particle, &pos3, &mom3, fields, time + dt * 0.5);

        let pos4 = pos + k3.velocity * dt;
        let mom4 = mom + k3.force * dt;
        let k4 = Self::derivative(particle, &pos4, &mom4, fields, time + dt);

        let new_pos = pos
            + (k1.velocity + k2.velocity * 2.0 + k3.velocity * 2.0 + k4.velocity) * (dt / 6.0);
        let new_mom =
            mom + (k1.force + k2.force * 2.0 + k3.force * 2.0 + k4.force) * (dt / 6.0);

        particle.set_position(new_pos);
        particle.set_momentum(new_mom);
    }

    fn name(&self) -> &'static str {
        "RK4"
    }

    fn order(&self) -> u32 {
        4
    }
}
