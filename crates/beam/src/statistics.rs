//! Aggregate beam statistics.

use nalgebra::{Point3, Vector3};
use units::relativistic;

use crate::ensemble::ParticleEnsemble;
use crate::particle::Particle;

/// Snapshot of the beam's aggregate properties.
///
/// All moments are computed over active particles only. With no
/// active particles every moment is zero and only the counts are
/// populated.
#[derive(Debug, Clone)]
pub struct BeamStatistics {
    pub total_particles: usize,
    pub active_particles: usize,
    pub lost_particles: usize,

    pub mean_position: Point3<f64>,
    /// RMS beam size per axis (m)
    pub rms_size: Vector3<f64>,

    pub mean_momentum: Vector3<f64>,
    pub rms_momentum: Vector3<f64>,

    /// Mean kinetic energy (J)
    pub mean_energy: f64,
    /// RMS kinetic energy spread (J)
    pub rms_energy: f64,
    pub min_energy: f64,
    pub max_energy: f64,

    /// Geometric emittance in the horizontal plane (m·rad)
    pub emittance_x: f64,
    /// Geometric emittance in the vertical plane (m·rad)
    pub emittance_y: f64,

    /// βγ·ε, invariant under acceleration
    pub normalized_emittance_x: f64,
    pub normalized_emittance_y: f64,
}

impl Default for BeamStatistics {
    fn default() -> Self {
        Self {
            total_particles: 0,
            active_particles: 0,
            lost_particles: 0,
            mean_position: Point3::origin(),
            rms_size: Vector3::zeros(),
            mean_momentum: Vector3::zeros(),
            rms_momentum: Vector3::zeros(),
            mean_energy: 0.0,
            rms_energy: 0.0,
            min_energy: 0.0,
            max_energy: 0.0,
            emittance_x: 0.0,
            emittance_y: 0.0,
            normalized_emittance_x: 0.0,
            normalized_emittance_y: 0.0,
        }
    }
}

impl ParticleEnsemble {
    /// Compute beam statistics over the active particles.
    pub fn statistics(&self) -> BeamStatistics {
        let mut stats = BeamStatistics {
            total_particles: self.len(),
            ..Default::default()
        };

        if self.is_empty() {
            return stats;
        }

        let active: Vec<&Particle> = self.iter().filter(|p| p.is_active()).collect();
        stats.active_particles = active.len();
        stats.lost_particles = stats.total_particles - stats.active_particles;

        if active.is_empty() {
            return stats;
        }

        // First pass: means and energy extrema
        let mut sum_pos = Vector3::zeros();
        let mut sum_mom = Vector3::zeros();
        let mut sum_energy = 0.0;
        stats.min_energy = active[0].kinetic_energy();
        stats.max_energy = stats.min_energy;

        for p in &active {
            sum_pos += p.position().coords;
            sum_mom += p.momentum();
            let ke = p.kinetic_energy();
            sum_energy += ke;
            stats.min_energy = stats.min_energy.min(ke);
            stats.max_energy = stats.max_energy.max(ke);
        }

        let n = active.len() as f64;
        stats.mean_position = Point3::from(sum_pos / n);
        stats.mean_momentum = sum_mom / n;
        stats.mean_energy = sum_energy / n;

        // Second pass: second moments around the means
        let mut sum_pos_sq = Vector3::zeros();
        let mut sum_mom_sq = Vector3::zeros();
        let mut sum_energy_sq = 0.0;

        // Emittance accumulators over particles with usable p_z
        let mut n_slope = 0usize;
        let (mut sum_x2, mut sum_xp2, mut sum_xxp) = (0.0, 0.0, 0.0);
        let (mut sum_y2, mut sum_yp2, mut sum_yyp) = (0.0, 0.0, 0.0);

        for p in &active {
            let d_pos = p.position() - stats.mean_position;
            let d_mom = p.momentum() - stats.mean_momentum;
            let d_energy = p.kinetic_energy() - stats.mean_energy;

            sum_pos_sq += d_pos.component_mul(&d_pos);
            sum_mom_sq += d_mom.component_mul(&d_mom);
            sum_energy_sq += d_energy * d_energy;

            // Trace-space slopes x' = px/pz, y' = py/pz
            let pz = p.momentum().z;
            if pz.abs() > 1e-30 {
                let xp = p.momentum().x / pz;
                let yp = p.momentum().y / pz;

                sum_x2 += d_pos.x * d_pos.x;
                sum_xp2 += xp * xp;
                sum_xxp += d_pos.x * xp;

                sum_y2 += d_pos.y * d_pos.y;
                sum_yp2 += yp * yp;
                sum_yyp += d_pos.y * yp;

                n_slope += 1;
            }
        }

        stats.rms_size = (sum_pos_sq / n).map(f64::sqrt);
        stats.rms_momentum = (sum_mom_sq / n).map(f64::sqrt);
        stats.rms_energy = (sum_energy_sq / n).sqrt();

        // Geometric emittance: sqrt(<x^2><x'^2> - <x x'>^2), averaged
        // over the particles that contributed a slope
        if n_slope > 0 {
            let m = n_slope as f64;
            let avg_x2 = sum_x2 / m;
            let avg_xp2 = sum_xp2 / m;
            let avg_xxp = sum_xxp / m;
            stats.emittance_x = (avg_x2 * avg_xp2 - avg_xxp * avg_xxp).max(0.0).sqrt();

            let avg_y2 = sum_y2 / m;
            let avg_yp2 = sum_yp2 / m;
            let avg_yyp = sum_yyp / m;
            stats.emittance_y = (avg_y2 * avg_yp2 - avg_yyp * avg_yyp).max(0.0).sqrt();
        }

        // Normalized emittance scales by beta*gamma of the reference
        // momentum, using the first active particle's mass
        let p_ref = self.reference_momentum();
        if p_ref > 0.0 {
            let mass = active[0].mass();
            let gamma = relativistic::gamma_from_momentum(p_ref, mass);
            let beta = relativistic::beta_from_gamma(gamma);
            let beta_gamma = beta * gamma;

            stats.normalized_emittance_x = beta_gamma * stats.emittance_x;
            stats.normalized_emittance_y = beta_gamma * stats.emittance_y;
        }

        stats
    }
}
