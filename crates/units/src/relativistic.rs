//! Relativistic kinematics helpers.
//!
//! Conversions between the Lorentz factor γ, the velocity ratio
//! β = v/c, momentum magnitude, and kinetic/total energy. All inputs
//! and outputs are SI (kg, m/s, J).

use crate::constants::{C, C_SQUARED};

/// Lorentz factor from a velocity magnitude.
///
/// γ = 1/√(1 − v²/c²)
pub fn gamma_from_velocity(v: f64) -> f64 {
    let beta = v / C;
    1.0 / (1.0 - beta * beta).sqrt()
}

/// Lorentz factor from β = v/c.
pub fn gamma_from_beta(beta: f64) -> f64 {
    1.0 / (1.0 - beta * beta).sqrt()
}

/// β = v/c from the Lorentz factor.
///
/// β = √(1 − 1/γ²)
pub fn beta_from_gamma(gamma: f64) -> f64 {
    (1.0 - 1.0 / (gamma * gamma)).sqrt()
}

/// Lorentz factor from kinetic energy and rest mass.
///
/// γ = 1 + K/(m·c²)
pub fn gamma_from_kinetic_energy(kinetic_energy: f64, rest_mass: f64) -> f64 {
    1.0 + kinetic_energy / (rest_mass * C_SQUARED)
}

/// Kinetic energy (J) from the Lorentz factor and rest mass.
///
/// K = (γ − 1)·m·c²
pub fn kinetic_energy_from_gamma(gamma: f64, rest_mass: f64) -> f64 {
    (gamma - 1.0) * rest_mass * C_SQUARED
}

/// Total energy (J) from the Lorentz factor and rest mass.
///
/// E = γ·m·c²
pub fn total_energy_from_gamma(gamma: f64, rest_mass: f64) -> f64 {
    gamma * rest_mass * C_SQUARED
}

/// Momentum magnitude (kg·m/s) from the Lorentz factor and rest mass.
///
/// p = γ·β·m·c
pub fn momentum_from_gamma(gamma: f64, rest_mass: f64) -> f64 {
    let beta = beta_from_gamma(gamma);
    gamma * beta * rest_mass * C
}

/// Lorentz factor from a momentum magnitude and rest mass.
///
/// γ = √(1 + (p/(m·c))²)
pub fn gamma_from_momentum(momentum: f64, rest_mass: f64) -> f64 {
    let p_over_mc = momentum / (rest_mass * C);
    (1.0 + p_over_mc * p_over_mc).sqrt()
}
