use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

use crate::source::FieldSource;
use crate::value::{BoundingBox, FieldValue};

/// RF cavity with an oscillating longitudinal electric field.
///
/// Inside the cavity aperture and z-window the field is
/// E_z = (V/L)·cos(ω·t + φ) with ω = 2π·f; the magnetic field is
/// always zero.
#[derive(Debug, Clone)]
pub struct RfField {
    voltage: f64,
    frequency: f64,
    omega: f64,
    phase: f64,
    center: Point3<f64>,
    length: f64,
    aperture: f64,
    bounds: BoundingBox,
    enabled: bool,
}

impl RfField {
    /// Create an RF cavity field.
    ///
    /// # Arguments
    ///
    /// * `voltage` - Peak voltage (V)
    /// * `frequency` - RF frequency (Hz)
    /// * `phase` - Phase offset (rad)
    /// * `center` - Cavity centre in global coordinates (m)
    /// * `length` - Cavity length along z (m)
    /// * `aperture` - Radial aperture (m)
    pub fn new(
        voltage: f64,
        frequency: f64,
        phase: f64,
        center: Point3<f64>,
        length: f64,
        aperture: f64,
    ) -> Self {
        let half_length = length / 2.0;
        let bounds = BoundingBox::new(
            Point3::new(
                center.x - aperture,
                center.y - aperture,
                center.z - half_length,
            ),
            Point3::new(
                center.x + aperture,
                center.y + aperture,
                center.z + half_length,
            ),
        );
        Self {
            voltage,
            frequency,
            omega: 2.0 * PI * frequency,
            phase,
            center,
            length,
            aperture,
            bounds,
            enabled: true,
        }
    }

    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    pub fn set_voltage(&mut self, voltage: f64) {
        self.voltage = voltage;
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Update the frequency, keeping the cached angular frequency in
    /// step.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
        self.omega = 2.0 * PI * frequency;
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn set_phase(&mut self, phase: f64) {
        self.phase = phase;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl FieldSource for RfField {
    fn evaluate(&self, position: &Point3<f64>, time: f64) -> FieldValue {
        if !self.bounds.contains(position) {
            return FieldValue::zero();
        }

        let x = position.x - self.center.x;
        let y = position.y - self.center.y;
        let r = (x * x + y * y).sqrt();
        if r > self.aperture {
            return FieldValue::zero();
        }

        let e_z = (self.voltage / self.length) * (self.omega * time + self.phase).cos();
        FieldValue::new(Vector3::new(0.0, 0.0, e_z), Vector3::zeros())
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
