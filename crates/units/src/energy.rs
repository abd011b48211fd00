use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::ELEMENTARY_CHARGE;

/// One electron volt in joules
pub const EV_TO_J: f64 = ELEMENTARY_CHARGE;

/// One kiloelectron volt in joules
pub const KEV_TO_J: f64 = 1.0e3 * EV_TO_J;

/// One megaelectron volt in joules
pub const MEV_TO_J: f64 = 1.0e6 * EV_TO_J;

/// One gigaelectron volt in joules
pub const GEV_TO_J: f64 = 1.0e9 * EV_TO_J;

/// One teraelectron volt in joules
pub const TEV_TO_J: f64 = 1.0e12 * EV_TO_J;

/// A physical energy quantity using f64 precision.
///
/// The `Energy` struct represents energy values with joules as the
/// base unit. Accelerator parameters are usually quoted in electron
/// volts (or MeV/GeV/TeV), while the equations of motion work in SI,
/// so both sides get direct constructors and accessors.
///
/// # Examples
///
/// ```rust
/// use units::Energy;
///
/// let beam = Energy::from_gev(7000.0);      // LHC-scale beam
/// let rest = Energy::from_mev(938.272);     // proton rest energy
///
/// let joules = beam.to_joules();
/// let in_tev = beam.to_tev();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Energy(f64); // Base unit: joules

impl Energy {
    /// Creates a new `Energy` from a value in joules.
    pub fn from_joules(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Energy` from a value in electron volts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Energy;
    ///
    /// let ionization = Energy::from_electron_volts(13.6);
    /// ```
    pub fn from_electron_volts(value: f64) -> Self {
        Self(value * EV_TO_J)
    }

    /// Creates a new `Energy` from a value in kiloelectron volts.
    pub fn from_kev(value: f64) -> Self {
        Self(value * KEV_TO_J)
    }

    /// Creates a new `Energy` from a value in megaelectron volts.
    pub fn from_mev(value: f64) -> Self {
        Self(value * MEV_TO_J)
    }

    /// Creates a new `Energy` from a value in gigaelectron volts.
    pub fn from_gev(value: f64) -> Self {
        Self(value * GEV_TO_J)
    }

    /// Creates a new `Energy` from a value in teraelectron volts.
    pub fn from_tev(value: f64) -> Self {
        Self(value * TEV_TO_J)
    }

    pub fn to_joules(&self) -> f64 {
        self.0
    }

    pub fn to_electron_volts(&self) -> f64 {
        self.0 / EV_TO_J
    }

    pub fn to_kev(&self) -> f64 {
        self.0 / KEV_TO_J
    }

    pub fn to_mev(&self) -> f64 {
        self.0 / MEV_TO_J
    }

    pub fn to_gev(&self) -> f64 {
        self.0 / GEV_TO_J
    }

    pub fn to_tev(&self) -> f64 {
        self.0 / TEV_TO_J
    }
}

impl Add for Energy {
    type Output = Energy;

    fn add(self, rhs: Energy) -> Energy {
        Energy(self.0 + rhs.0)
    }
}

impl Sub for Energy {
    type Output = Energy;

    fn sub(self, rhs: Energy) -> Energy {
        Energy(self.0 - rhs.0)
    }
}

impl Mul<f64> for Energy {
    type Output = Energy;

    fn mul(self, rhs: f64) -> Energy {
        Energy(self.0 * rhs)
    }
}

impl Div<f64> for Energy {
    type Output = Energy;

    fn div(self, rhs: f64) -> Energy {
        Energy(self.0 / rhs)
    }
}
