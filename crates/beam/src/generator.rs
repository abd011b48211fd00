//! Deterministic beam generation.

use nalgebra::{Point3, Vector3};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::constants::C;
use units::energy::GEV_TO_J;
use units::relativistic;

use crate::ensemble::ParticleEnsemble;
use crate::particle::Particle;
use crate::sampling::{sample_gaussian, sample_uniform_rms, sample_waterbag};

/// Particle species a beam can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleSpecies {
    Electron,
    Positron,
    Proton,
    Antiproton,
}

impl ParticleSpecies {
    /// Create one particle of this species at the origin, at rest.
    pub fn create(self) -> Particle {
        let origin = Point3::origin();
        let zero = Vector3::zeros();
        match self {
            ParticleSpecies::Electron => Particle::electron(origin, zero),
            ParticleSpecies::Positron => Particle::positron(origin, zero),
            ParticleSpecies::Proton => Particle::proton(origin, zero),
            ParticleSpecies::Antiproton => Particle::antiproton(origin, zero),
        }
    }
}

/// Phase-space distribution of the generated beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeamDistribution {
    /// Independent normal draws per coordinate
    Gaussian,
    /// Uniform draws scaled so the RMS matches the Gaussian sigmas
    Uniform,
    /// Uniform filling of the 3D ball in position space
    Waterbag,
}

/// Parameters for beam generation.
///
/// Sigmas are RMS values: positions in metres, transverse momentum
/// kicks and the momentum spread relative to the reference momentum.
#[derive(Debug, Clone)]
pub struct BeamParameters {
    pub species: ParticleSpecies,
    pub num_particles: usize,
    /// Kinetic energy per particle (J)
    pub kinetic_energy: f64,
    /// Horizontal beam size (m)
    pub sigma_x: f64,
    /// Vertical beam size (m)
    pub sigma_y: f64,
    /// Bunch length (m)
    pub sigma_z: f64,
    /// Relative horizontal momentum spread
    pub sigma_px: f64,
    /// Relative vertical momentum spread
    pub sigma_py: f64,
    /// Relative momentum deviation spread
    pub sigma_delta: f64,
    /// Centre of the generated bunch (m)
    pub position_offset: Vector3<f64>,
    /// Mean beam direction, normalized on use
    pub direction: Vector3<f64>,
    pub distribution: BeamDistribution,
    /// PRNG seed for reproducible generation
    pub seed: u64,
}

impl Default for BeamParameters {
    fn default() -> Self {
        Self {
            species: ParticleSpecies::Proton,
            num_particles: 1000,
            kinetic_energy: GEV_TO_J,
            sigma_x: 1e-3,
            sigma_y: 1e-3,
            sigma_z: 1e-2,
            sigma_px: 1e-4,
            sigma_py: 1e-4,
            sigma_delta: 1e-3,
            position_offset: Vector3::zeros(),
            direction: Vector3::new(0.0, 0.0, 1.0),
            distribution: BeamDistribution::Gaussian,
            seed: 42,
        }
    }
}

impl ParticleEnsemble {
    /// Generate a beam, replacing any existing ensemble content.
    ///
    /// Computes the reference momentum p₀ from the requested kinetic
    /// energy, stores it on the ensemble, then draws each particle's
    /// position and momentum deviation from the configured
    /// distribution. Given the same parameters and seed, the
    /// generated beam is identical call to call.
    pub fn generate_beam(&mut self, params: &BeamParameters) {
        self.clear();

        let mut rng = ChaChaRng::seed_from_u64(params.seed);

        let mass = params.species.create().mass();

        // Reference momentum from the kinetic energy
        let gamma = relativistic::gamma_from_kinetic_energy(params.kinetic_energy, mass);
        let beta = relativistic::beta_from_gamma(gamma);
        let p_ref = gamma * beta * mass * C;
        self.set_reference_momentum(p_ref);

        let dir = params.direction.normalize();

        // Transverse basis perpendicular to the beam direction
        let perp_x = if dir.y.abs() < 0.9 {
            dir.cross(&Vector3::new(0.0, 1.0, 0.0)).normalize()
        } else {
            dir.cross(&Vector3::new(1.0, 0.0, 0.0)).normalize()
        };
        let perp_y = dir.cross(&perp_x);

        for _ in 0..params.num_particles {
            let mut particle = params.species.create();

            let (dx, dy, dz) = match params.distribution {
                BeamDistribution::Gaussian => (
                    sample_gaussian(&mut rng, 0.0, params.sigma_x),
                    sample_gaussian(&mut rng, 0.0, params.sigma_y),
                    sample_gaussian(&mut rng, 0.0, params.sigma_z),
                ),
                BeamDistribution::Uniform => (
                    sample_uniform_rms(&mut rng, params.sigma_x),
                    sample_uniform_rms(&mut rng, params.sigma_y),
                    sample_uniform_rms(&mut rng, params.sigma_z),
                ),
                BeamDistribution::Waterbag => {
                    sample_waterbag(&mut rng, params.sigma_x, params.sigma_y, params.sigma_z)
                }
            };

            let position = Point3::from(params.position_offset + Vector3::new(dx, dy, dz));
            particle.set_position(position);

            // Momentum deviations; the waterbag beam shares the
            // uniform momentum draws
            let (dpx, dpy, delta) = match params.distribution {
                BeamDistribution::Gaussian => (
                    sample_gaussian(&mut rng, 0.0, params.sigma_px),
                    sample_gaussian(&mut rng, 0.0, params.sigma_py),
                    sample_gaussian(&mut rng, 0.0, params.sigma_delta),
                ),
                BeamDistribution::Uniform | BeamDistribution::Waterbag => (
                    sample_uniform_rms(&mut rng, params.sigma_px),
                    sample_uniform_rms(&mut rng, params.sigma_py),
                    sample_uniform_rms(&mut rng, params.sigma_delta),
                ),
            };

            let p_mag = p_ref * (1.0 + delta);
            let momentum = dir * p_mag + perp_x * (p_ref * dpx) + perp_y * (p_ref * dpy);
            particle.set_momentum(momentum);

            self.push(particle);
        }
    }
}
