mod tests {
    use std::f64::consts::PI;
    use std::sync::Arc;

    use beam::Particle;
    use emfield::{FieldManager, UniformBField};
    use nalgebra::{Point3, Vector3};
    use units::constants::{C, ELEMENTARY_CHARGE};
    use units::Energy;

    use crate::integrators::{Boris, Integrator};

    fn uniform_bz(b: f64) -> FieldManager {
        let mut fields = FieldManager::new();
        fields.add_source(Arc::new(UniformBField::new(Vector3::new(0.0, 0.0, b))));
        fields
    }

    #[test]
    fn test_drift_is_linear() {
        let mut p = Particle::proton(Point3::origin(), Vector3::zeros());
        p.set_velocity(Vector3::new(0.1 * C, 0.0, 0.0));
        let v = p.velocity();

        let fields = FieldManager::new();
        let dt = 1e-9;
        Boris.step(&mut p, &fields, 0.0, dt);

        let expected = v.x * dt;
        assert!((p.position().x - expected).abs() < 1e-10 * expected.abs());
    }

    #[test]
    fn test_cyclotron_orbit_closes() {
        // A proton at 0.1c in a 1 T field returns to its starting
        // point after one cyclotron period
        let mut p = Particle::proton(Point3::origin(), Vector3::zeros());
        p.set_velocity(Vector3::new(0.1 * C, 0.0, 0.0));

        let b = 1.0;
        let gamma = p.gamma();
        let period = 2.0 * PI * gamma * p.mass() / (ELEMENTARY_CHARGE * b);
        let dt = period / 1000.0;

        let radius = p.momentum_magnitude() / (ELEMENTARY_CHARGE * b);

        let fields = uniform_bz(b);
        let mut time = 0.0;
        for _ in 0..1000 {
            Boris.step(&mut p, &fields, time, dt);
            time += dt;
        }

        let closure = (p.position().x * p.position().x + p.position().y * p.position().y).sqrt();
        assert!(
            closure <= 0.05 * radius,
            "closure = {:e}, radius = {:e}",
            closure,
            radius
        );
    }

    #[test]
    fn test_orbit_radius_matches_theory() {
        let mut p = Particle::proton(Point3::origin(), Vector3::zeros());
        p.set_velocity(Vector3::new(0.1 * C, 0.0, 0.0));

        let b = 1.0;
        let radius = p.momentum_magnitude() / (ELEMENTARY_CHARGE * b);
        let gamma = p.gamma();
        let period = 2.0 * PI * gamma * p.mass() / (ELEMENTARY_CHARGE * b);
        let dt = period / 1000.0;

        // Starting at the origin moving +x with B = +z, the orbit
        // centre sits at (0, -r)
        let center_y = -radius;

        let fields = uniform_bz(b);
        let mut time = 0.0;
        let mut max_deviation: f64 = 0.0;
        for _ in 0..1000 {
            Boris.step(&mut p, &fields, time, dt);
            time += dt;

            let dx = p.position().x;
            let dy = p.position().y - center_y;
            let r = (dx * dx + dy * dy).sqrt();
            max_deviation = max_deviation.max((r - radius).abs() / radius);
        }

        assert!(max_deviation < 0.01, "max deviation = {:e}", max_deviation);
    }

    #[test]
    fn test_energy_conserved_in_pure_magnetic_field() {
        // 10 MeV proton, 1 T, 10^4 steps at 1 ps
        let mut p = Particle::proton(Point3::origin(), Vector3::zeros());
        p.set_kinetic_energy(
            Energy::from_mev(10.0).to_joules(),
            Vector3::new(1.0, 0.0, 0.0),
        );
        let initial_ke = p.kinetic_energy();

        let fields = uniform_bz(1.0);
        let mut time = 0.0;
        let dt = 1e-12;
        for _ in 0..10_000 {
            Boris.step(&mut p, &fields, time, dt);
            time += dt;
        }

        let rel = (p.kinetic_energy() - initial_ke).abs() / initial_ke;
        assert!(rel < 1e-10, "relative drift = {:e}", rel);
    }

    #[test]
    fn test_electric_field_accelerates() {
        use emfield::RfField;

        // A DC-like kick from an RF cavity sampled at its crest
        let mut p = Particle::proton(Point3::origin(), Vector3::new(0.0, 0.0, 1e-20));
        let initial_ke = p.kinetic_energy();

        let mut fields = FieldManager::new();
        fields.add_source(Arc::new(RfField::new(
            1.0e6,
            1.0,
            0.0,
            Point3::origin(),
            0.5,
            0.1,
        )));

        for _ in 0..100 {
            Boris.step(&mut p, &fields, 0.0, 1e-12);
        }

        assert!(p.kinetic_energy() > initial_ke);
    }

    #[test]
    fn test_inactive_particle_untouched() {
        let mut p = Particle::proton(Point3::origin(), Vector3::zeros());
        p.set_velocity(Vector3::new(0.1 * C, 0.0, 0.0));
        p.set_active(false);

        let fields = uniform_bz(1.0);
        Boris.step(&mut p, &fields, 0.0, 1e-12);
        assert_eq!(*p.position(), Point3::origin());
    }

    #[test]
    fn test_metadata() {
        assert_eq!(Boris.name(), "Boris");
        assert_eq!(Boris.order(), 2);
    }
}
