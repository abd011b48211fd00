//! Deterministic sampling primitives for beam generation.
//!
//! All draws go through an explicitly seeded `ChaChaRng`, so a given
//! seed reproduces the same beam bit for bit in single-threaded use.
//! Normal deviates use the Box–Muller transform; the algorithm is
//! part of the reproducibility contract because the bitwise output
//! depends on it.

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

/// Sample from a Gaussian (normal) distribution using the Box–Muller
/// transform.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
///
/// # Returns
/// A sample from N(mean, std_dev²)
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-12);
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample from the symmetric uniform distribution √3·σ·U(−1, 1).
///
/// The √3 scaling makes the RMS of the draw equal to σ, so uniform
/// and Gaussian beams with the same σ have the same second moment.
pub fn sample_uniform_rms(rng: &mut ChaChaRng, sigma: f64) -> f64 {
    let u: f64 = rng.random_range(-1.0..1.0);
    u * sigma * 3.0_f64.sqrt()
}

/// Sample a point uniformly inside the unit ball, scaled per axis.
///
/// Draws radius r = |u|^(1/3), polar angle θ = acos(U(−1,1)) and
/// azimuth φ = π·U(−1,1), then scales each Cartesian component by the
/// given σ. Used for the waterbag beam distribution.
pub fn sample_waterbag(
    rng: &mut ChaChaRng,
    sigma_x: f64,
    sigma_y: f64,
    sigma_z: f64,
) -> (f64, f64, f64) {
    let r = rng.random_range(-1.0..1.0_f64).abs().cbrt();
    let theta = rng.random_range(-1.0..1.0_f64).acos();
    let phi = rng.random_range(-1.0..1.0_f64) * PI;

    let dx = r * theta.sin() * phi.cos() * sigma_x;
    let dy = r * theta.sin() * phi.sin() * sigma_y;
    let dz = r * theta.cos() * sigma_z;
    (dx, dy, dz)
}
