use nalgebra::{Point3, Vector3};

use crate::source::FieldSource;
use crate::value::{BoundingBox, FieldValue};

/// Quadrupole magnetic field for transverse focusing.
///
/// In local coordinates centred on the magnet the field components
/// are Bx = G·y, By = G·x, Bz = 0, where G is the gradient in T/m.
/// A positive gradient focuses in the horizontal plane and defocuses
/// in the vertical plane.
#[derive(Debug, Clone)]
pub struct QuadrupoleField {
    gradient: f64,
    center: Point3<f64>,
    length: f64,
    aperture: f64,
    bounds: BoundingBox,
    enabled: bool,
}

impl QuadrupoleField {
    /// Create a quadrupole field.
    ///
    /// # Arguments
    ///
    /// * `gradient` - Field gradient in T/m; positive focuses horizontally
    /// * `center` - Magnet centre in global coordinates (m)
    /// * `length` - Effective length along z (m)
    /// * `aperture` - Radial aperture (m)
    pub fn new(gradient: f64, center: Point3<f64>, length: f64, aperture: f64) -> Self {
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
            gradient,
            center,
            length,
            aperture,
            bounds,
            enabled: true,
        }
    }

    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    pub fn set_gradient(&mut self, gradient: f64) {
        self.gradient = gradient;
    }

    pub fn aperture(&self) -> f64 {
        self.aperture
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl FieldSource for QuadrupoleField {
    fn evaluate(&self, position: &Point3<f64>, _time: f64) -> FieldValue {
        if !self.bounds.contains(position) {
            return FieldValue::zero();
        }

        // Local transverse coordinates relative to the magnet centre
        let x = position.x - self.center.x;
        let y = position.y - self.center.y;

        let r = (x * x + y * y).sqrt();
        if r > self.aperture {
            return FieldValue::zero();
        }

        let b = Vector3::new(self.gradient * y, self.gradient * x, 0.0);
        FieldValue::new(Vector3::zeros(), b)
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
