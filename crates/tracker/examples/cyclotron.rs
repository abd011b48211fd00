//! Single-proton cyclotron orbit in a uniform magnetic field,
//! comparing the Boris pusher against the analytic gyroradius.
//!
//! Run with: cargo run --example cyclotron

use std::f64::consts::PI;
use std::sync::Arc;

use beam::Particle;
use emfield::{FieldManager, UniformBField};
use nalgebra::{Point3, Vector3};
use tracker::{Integrator, IntegratorKind};
use units::constants::{C, ELEMENTARY_CHARGE, PROTON_MASS};

fn main() {
    let b = 1.0; // Tesla, along +z

    let mut proton = Particle::proton(Point3::origin(), Vector3::zeros());
    proton.set_velocity(Vector3::new(0.1 * C, 0.0, 0.0));

    let gamma = proton.gamma();
    let period = 2.0 * PI * gamma * PROTON_MASS / (ELEMENTARY_CHARGE * b);
    let radius = proton.momentum_magnitude() / (ELEMENTARY_CHARGE * b);
    println!("gyroperiod {:.4e} s, gyroradius {:.4} m", period, radius);

    let mut fields = FieldManager::new();
    fields.add_source(Arc::new(UniformBField::new(Vector3::new(0.0, 0.0, b))));

    let steps_per_turn = 1000;
    let dt = period / steps_per_turn as f64;

    for kind in [
        IntegratorKind::Euler,
        IntegratorKind::VelocityVerlet,
        IntegratorKind::Boris,
        IntegratorKind::Rk4,
    ] {
        let integrator = kind.create();

        let mut p = Particle::proton(Point3::origin(), Vector3::zeros());
        p.set_velocity(Vector3::new(0.1 * C, 0.0, 0.0));
        let initial_ke = p.kinetic_energy();

        let mut time = 0.0;
        for _ in 0..steps_per_turn {
            integrator.step(&mut p, &fields, time, dt);
            time += dt;
        }

        // After one full turn the orbit should close on the origin
        let closure = (p.position().x.powi(2) + p.position().y.powi(2)).sqrt();
        let energy_drift = (p.kinetic_energy() - initial_ke).abs() / initial_ke;

        println!(
            "{:<16} closure error {:.3e} m ({:.3}% of r), energy drift {:.3e}",
            integrator.name(),
            closure,
            100.0 * closure / radius,
            energy_drift
        );
    }
}
