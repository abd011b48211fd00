mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use units::constants::{C, PROTON_MASS};
    use units::relativistic;
    use units::Energy;

    use crate::ensemble::ParticleEnsemble;
    use crate::generator::{BeamDistribution, BeamParameters, ParticleSpecies};

    fn small_beam(distribution: BeamDistribution, seed: u64) -> BeamParameters {
        BeamParameters {
            num_particles: 200,
            distribution,
            seed,
            ..Default::default()
        }
    }

    #[test]
    fn test_generates_requested_count() {
        let mut ensemble = ParticleEnsemble::new();
        ensemble.generate_beam(&small_beam(BeamDistribution::Gaussian, 42));
        assert_eq!(ensemble.len(), 200);
        assert_eq!(ensemble.active_count(), 200);
    }

    #[test]
    fn test_replaces_previous_beam() {
        let mut ensemble = ParticleEnsemble::new();
        ensemble.generate_beam(&small_beam(BeamDistribution::Gaussian, 42));
        ensemble.generate_beam(&BeamParameters {
            num_particles: 50,
            ..Default::default()
        });
        assert_eq!(ensemble.len(), 50);
    }

    #[test]
    fn test_reference_momentum_from_kinetic_energy() {
        let mut ensemble = ParticleEnsemble::new();
        let params = BeamParameters {
            kinetic_energy: Energy::from_gev(1.0).to_joules(),
            ..Default::default()
        };
        ensemble.generate_beam(&params);

        let gamma = relativistic::gamma_from_kinetic_energy(params.kinetic_energy, PROTON_MASS);
        let beta = relativistic::beta_from_gamma(gamma);
        let expected = gamma * beta * PROTON_MASS * C;

        assert_relative_eq!(ensemble.reference_momentum(), expected);
    }

    #[test]
    fn test_same_seed_is_bitwise_identical() {
        let mut a = ParticleEnsemble::new();
        let mut b = ParticleEnsemble::new();
        a.generate_beam(&small_beam(BeamDistribution::Gaussian, 99));
        b.generate_beam(&small_beam(BeamDistribution::Gaussian, 99));

        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.position().x.to_bits(), pb.position().x.to_bits());
            assert_eq!(pa.position().y.to_bits(), pb.position().y.to_bits());
            assert_eq!(pa.position().z.to_bits(), pb.position().z.to_bits());
            assert_eq!(pa.momentum().x.to_bits(), pb.momentum().x.to_bits());
            assert_eq!(pa.momentum().y.to_bits(), pb.momentum().y.to_bits());
            assert_eq!(pa.momentum().z.to_bits(), pb.momentum().z.to_bits());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = ParticleEnsemble::new();
        let mut b = ParticleEnsemble::new();
        a.generate_beam(&small_beam(BeamDistribution::Gaussian, 1));
        b.generate_beam(&small_beam(BeamDistribution::Gaussian, 2));

        let same = a
            .iter()
            .zip(b.iter())
            .all(|(pa, pb)| pa.position() == pb.position());
        assert!(!same);
    }

    #[test]
    fn test_species_selection() {
        let mut ensemble = ParticleEnsemble::new();
        ensemble.generate_beam(&BeamParameters {
            species: ParticleSpecies::Electron,
            num_particles: 10,
            kinetic_energy: Energy::from_mev(10.0).to_joules(),
            ..Default::default()
        });

        for p in &ensemble {
            assert!(p.charge() < 0.0);
        }
    }

    #[test]
    fn test_gaussian_beam_size() {
        let mut ensemble = ParticleEnsemble::new();
        ensemble.generate_beam(&BeamParameters {
            num_particles: 20_000,
            sigma_x: 1e-3,
            sigma_y: 2e-3,
            ..Default::default()
        });

        let stats = ensemble.statistics();
        assert!((stats.rms_size.x - 1e-3).abs() / 1e-3 < 0.05);
        assert!((stats.rms_size.y - 2e-3).abs() / 2e-3 < 0.05);
    }

    #[test]
    fn test_uniform_beam_rms_matches_gaussian() {
        let mut ensemble = ParticleEnsemble::new();
        ensemble.generate_beam(&BeamParameters {
            num_particles: 20_000,
            distribution: BeamDistribution::Uniform,
            sigma_x: 1e-3,
            ..Default::default()
        });

        let stats = ensemble.statistics();
        assert!((stats.rms_size.x - 1e-3).abs() / 1e-3 < 0.05);
    }

    #[test]
    fn test_waterbag_positions_bounded() {
        let params = BeamParameters {
            num_particles: 5000,
            distribution: BeamDistribution::Waterbag,
            sigma_x: 1e-3,
            sigma_y: 1e-3,
            sigma_z: 1e-2,
            ..Default::default()
        };
        let mut ensemble = ParticleEnsemble::new();
        ensemble.generate_beam(&params);

        for p in &ensemble {
            assert!(p.position().x.abs() <= params.sigma_x + 1e-15);
            assert!(p.position().z.abs() <= params.sigma_z + 1e-15);
        }
    }

    #[test]
    fn test_position_offset_and_direction() {
        let mut ensemble = ParticleEnsemble::new();
        ensemble.generate_beam(&BeamParameters {
            num_particles: 1000,
            position_offset: Vector3::new(0.0, 0.0, 5.0),
            direction: Vector3::new(1.0, 0.0, 0.0),
            sigma_px: 0.0,
            sigma_py: 0.0,
            sigma_delta: 0.0,
            ..Default::default()
        });

        let stats = ensemble.statistics();
        assert!((stats.mean_position.z - 5.0).abs() < 1e-3);

        // All momentum along +x when the spreads are zero
        for p in &ensemble {
            assert!(p.momentum().x > 0.0);
            assert_relative_eq!(p.momentum().y, 0.0);
            assert_relative_eq!(p.momentum().z, 0.0);
        }
    }

    #[test]
    fn test_vertical_direction_uses_alternate_basis() {
        // direction.y > 0.9 switches the perpendicular construction
        let mut ensemble = ParticleEnsemble::new();
        ensemble.generate_beam(&BeamParameters {
            num_particles: 100,
            direction: Vector3::new(0.0, 1.0, 0.0),
            ..Default::default()
        });

        let stats = ensemble.statistics();
        assert!(stats.mean_momentum.y > 0.0);
    }
}
