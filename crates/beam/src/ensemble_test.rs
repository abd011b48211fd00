mod tests {
    use nalgebra::{Point3, Vector3};

    use crate::ensemble::ParticleEnsemble;
    use crate::particle::Particle;

    fn proton_at(x: f64, y: f64) -> Particle {
        Particle::proton(Point3::new(x, y, 0.0), Vector3::new(0.0, 0.0, 1e-19))
    }

    #[test]
    fn test_push_and_count() {
        let mut ensemble = ParticleEnsemble::new();
        assert!(ensemble.is_empty());

        ensemble.push(proton_at(0.0, 0.0));
        ensemble.push(proton_at(0.01, 0.0));

        assert_eq!(ensemble.len(), 2);
        assert_eq!(ensemble.active_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut ensemble = ParticleEnsemble::new();
        ensemble.push(proton_at(0.0, 0.0));
        ensemble.clear();
        assert!(ensemble.is_empty());
    }

    #[test]
    fn test_indexed_access() {
        let mut ensemble = ParticleEnsemble::new();
        ensemble.push(proton_at(0.5, 0.0));

        assert_eq!(ensemble.get(0).unwrap().position().x, 0.5);
        assert!(ensemble.get(1).is_none());

        ensemble.get_mut(0).unwrap().set_active(false);
        assert_eq!(ensemble.active_count(), 0);
    }

    #[test]
    fn test_remove_inactive_is_stable() {
        let mut ensemble = ParticleEnsemble::new();
        ensemble.push(proton_at(1.0, 0.0));
        ensemble.push(proton_at(2.0, 0.0));
        ensemble.push(proton_at(3.0, 0.0));

        ensemble.get_mut(1).unwrap().set_active(false);
        ensemble.remove_inactive();

        assert_eq!(ensemble.len(), 2);
        assert_eq!(ensemble.get(0).unwrap().position().x, 1.0);
        assert_eq!(ensemble.get(1).unwrap().position().x, 3.0);
    }

    #[test]
    fn test_apply_aperture() {
        let mut ensemble = ParticleEnsemble::new();
        ensemble.push(proton_at(0.0, 0.0));
        ensemble.push(proton_at(0.05, 0.0));
        ensemble.push(proton_at(0.0, 0.2));
        ensemble.push(proton_at(0.2, 0.2));

        let lost = ensemble.apply_aperture(0.1);
        assert_eq!(lost, 2);
        assert_eq!(ensemble.active_count(), 2);

        // A second sweep finds nothing new to lose
        assert_eq!(ensemble.apply_aperture(0.1), 0);
    }

    #[test]
    fn test_aperture_boundary_inclusive() {
        let p = proton_at(0.1, 0.0);
        assert!(ParticleEnsemble::is_within_aperture(&p, 0.1));

        let q = proton_at(0.1000001, 0.0);
        assert!(!ParticleEnsemble::is_within_aperture(&q, 0.1));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut ensemble = ParticleEnsemble::new();
        for i in 0..5 {
            ensemble.push(proton_at(i as f64, 0.0));
        }

        let xs: Vec<f64> = ensemble.iter().map(|p| p.position().x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_reference_momentum() {
        let mut ensemble = ParticleEnsemble::new();
        assert_eq!(ensemble.reference_momentum(), 0.0);
        ensemble.set_reference_momentum(3.5e-19);
        assert_eq!(ensemble.reference_momentum(), 3.5e-19);
    }
}
