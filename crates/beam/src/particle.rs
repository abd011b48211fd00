use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::{Point3, Vector3};
use units::constants::{C, C_SQUARED, ELECTRON_MASS, ELEMENTARY_CHARGE, PROTON_MASS};
use units::relativistic;

// Process-wide id counter. Ids are unique and monotone, not dense.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A charged particle in 6D phase space.
///
/// Tracks position (m) and momentum (kg·m/s) together with the rest
/// mass and charge, and caches the derived relativistic quantities
/// γ and β = v/c. Every momentum or velocity mutation recomputes the
/// cache, so the state always satisfies
/// γ = √(1 + (|p|/(m·c))²) and |v| < c.
///
/// # Examples
///
/// ```
/// use beam::Particle;
/// use nalgebra::{Point3, Vector3};
/// use units::Energy;
///
/// let mut p = Particle::proton(Point3::origin(), Vector3::zeros());
/// p.set_kinetic_energy(Energy::from_gev(1.0).to_joules(), Vector3::new(0.0, 0.0, 1.0));
/// assert!(p.gamma() > 1.0);
/// assert!(p.beta() < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Particle {
    position: Point3<f64>,
    momentum: Vector3<f64>,
    mass: f64,
    charge: f64,
    rest_energy: f64,
    gamma: f64,
    beta: f64,
    active: bool,
    id: u64,
}

impl Particle {
    /// Construct a particle with the given properties.
    ///
    /// # Arguments
    ///
    /// * `mass` - Rest mass (kg), must be positive
    /// * `charge` - Electric charge (C), may be negative
    /// * `position` - Initial position (m)
    /// * `momentum` - Initial momentum (kg·m/s)
    pub fn new(mass: f64, charge: f64, position: Point3<f64>, momentum: Vector3<f64>) -> Self {
        let mut particle = Self {
            position,
            momentum,
            mass,
            charge,
            rest_energy: mass * C_SQUARED,
            gamma: 1.0,
            beta: 0.0,
            active: true,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        };
        particle.update_derived_quantities();
        particle
    }

    pub fn electron(position: Point3<f64>, momentum: Vector3<f64>) -> Self {
        Self::new(ELECTRON_MASS, -ELEMENTARY_CHARGE, position, momentum)
    }

    pub fn positron(position: Point3<f64>, momentum: Vector3<f64>) -> Self {
        Self::new(ELECTRON_MASS, ELEMENTARY_CHARGE, position, momentum)
    }

    pub fn proton(position: Point3<f64>, momentum: Vector3<f64>) -> Self {
        Self::new(PROTON_MASS, ELEMENTARY_CHARGE, position, momentum)
    }

    pub fn antiproton(position: Point3<f64>, momentum: Vector3<f64>) -> Self {
        Self::new(PROTON_MASS, -ELEMENTARY_CHARGE, position, momentum)
    }

    pub fn position(&self) -> &Point3<f64> {
        &self.position
    }

    /// Set the position. Positions carry no invariants, so this is a
    /// plain store.
    pub fn set_position(&mut self, position: Point3<f64>) {
        self.position = position;
    }

    pub fn momentum(&self) -> &Vector3<f64> {
        &self.momentum
    }

    pub fn set_momentum(&mut self, momentum: Vector3<f64>) {
        self.momentum = momentum;
        self.update_derived_quantities();
    }

    pub fn set_px(&mut self, px: f64) {
        self.momentum.x = px;
        self.update_derived_quantities();
    }

    pub fn set_py(&mut self, py: f64) {
        self.momentum.y = py;
        self.update_derived_quantities();
    }

    pub fn set_pz(&mut self, pz: f64) {
        self.momentum.z = pz;
        self.update_derived_quantities();
    }

    pub fn momentum_magnitude(&self) -> f64 {
        self.momentum.norm()
    }

    /// Velocity (m/s), derived from momentum: v = p/(γ·m).
    pub fn velocity(&self) -> Vector3<f64> {
        if self.gamma > 0.0 && self.mass > 0.0 {
            self.momentum / (self.gamma * self.mass)
        } else {
            Vector3::zeros()
        }
    }

    /// Set the velocity and update momentum accordingly.
    ///
    /// A requested speed at or above c is clamped to 0.999999·c; the
    /// particle never enters a superluminal state.
    pub fn set_velocity(&mut self, velocity: Vector3<f64>) {
        let speed = velocity.norm();
        if speed >= C {
            let scale = 0.999999 * C / speed;
            let clamped = velocity * scale;
            self.beta = clamped.norm() / C;
            self.gamma = relativistic::gamma_from_beta(self.beta);
            self.momentum = clamped * (self.gamma * self.mass);
        } else if speed > 0.0 {
            self.beta = speed / C;
            self.gamma = relativistic::gamma_from_beta(self.beta);
            self.momentum = velocity * (self.gamma * self.mass);
        } else {
            self.beta = 0.0;
            self.gamma = 1.0;
            self.momentum = Vector3::zeros();
        }
    }

    /// Speed |v| in m/s.
    pub fn speed(&self) -> f64 {
        self.beta * C
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    /// Rest energy m·c² (J), fixed at construction.
    pub fn rest_energy(&self) -> f64 {
        self.rest_energy
    }

    /// Lorentz factor γ ≥ 1.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// β = v/c ∈ [0, 1).
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Total energy E = γ·m·c² (J).
    pub fn total_energy(&self) -> f64 {
        self.gamma * self.rest_energy
    }

    /// Kinetic energy K = (γ − 1)·m·c² (J).
    pub fn kinetic_energy(&self) -> f64 {
        (self.gamma - 1.0) * self.rest_energy
    }

    /// Set the kinetic energy (J) and point the momentum along
    /// `direction`.
    ///
    /// A near-zero direction falls back to the current momentum
    /// direction, or +z for a particle at rest.
    pub fn set_kinetic_energy(&mut self, kinetic_energy: f64, direction: Vector3<f64>) {
        self.gamma = 1.0 + kinetic_energy / self.rest_energy;
        self.beta = relativistic::beta_from_gamma(self.gamma);

        let dir = if direction.norm() < 1e-10 {
            let current = self.momentum_magnitude();
            if current > 1e-30 {
                self.momentum / current
            } else {
                Vector3::new(0.0, 0.0, 1.0)
            }
        } else {
            direction.normalize()
        };

        // p = gamma * beta * m * c
        let momentum_magnitude = self.gamma * self.beta * self.mass * C;
        self.momentum = dir * momentum_magnitude;
    }

    /// Relative momentum deviation δ = (|p| − p₀)/p₀.
    pub fn delta(&self, reference_momentum: f64) -> f64 {
        (self.momentum_magnitude() - reference_momentum) / reference_momentum
    }

    /// Whether the particle is still tracked (not lost on an
    /// aperture).
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Unique particle id from a process-wide monotonic counter.
    pub fn id(&self) -> u64 {
        self.id
    }

    fn update_derived_quantities(&mut self) {
        let p = self.momentum_magnitude();
        if p > 0.0 && self.mass > 0.0 {
            self.gamma = relativistic::gamma_from_momentum(p, self.mass);
            self.beta = relativistic::beta_from_gamma(self.gamma);
        } else {
            self.gamma = 1.0;
            self.beta = 0.0;
        }
    }
}
