//! Physical constants in SI units.
//!
//! All values are the CODATA 2018 recommended values
//! (https://physics.nist.gov/cuu/Constants/).

/// Speed of light in vacuum (m/s)
pub const C: f64 = 299_792_458.0;

/// Speed of light squared (m²/s²)
pub const C_SQUARED: f64 = C * C;

/// Elementary charge (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Electron rest mass (kg)
pub const ELECTRON_MASS: f64 = 9.109_383_7015e-31;

/// Proton rest mass (kg)
pub const PROTON_MASS: f64 = 1.672_621_923_69e-27;

/// Neutron rest mass (kg)
pub const NEUTRON_MASS: f64 = 1.674_927_498_04e-27;

/// Atomic mass unit (kg)
pub const ATOMIC_MASS_UNIT: f64 = 1.660_539_066_60e-27;

/// Vacuum permittivity ε₀ (F/m)
pub const EPSILON_0: f64 = 8.854_187_8128e-12;

/// Vacuum permeability μ₀ (H/m)
pub const MU_0: f64 = 1.256_637_062_12e-6;

/// Planck constant (J·s)
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Boltzmann constant (J/K)
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Fine structure constant (dimensionless)
pub const FINE_STRUCTURE: f64 = 7.297_352_5693e-3;

/// Classical electron radius (m)
pub const ELECTRON_RADIUS: f64 = 2.817_940_3262e-15;

/// Electron rest energy m_e·c² (J)
pub const ELECTRON_REST_ENERGY: f64 = ELECTRON_MASS * C_SQUARED;

/// Proton rest energy m_p·c² (J)
pub const PROTON_REST_ENERGY: f64 = PROTON_MASS * C_SQUARED;
