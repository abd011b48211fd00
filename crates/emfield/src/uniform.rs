use nalgebra::{Point3, Vector3};

use crate::source::FieldSource;
use crate::value::{BoundingBox, FieldValue};

/// Uniform magnetic field, the hard-edge dipole magnet approximation.
///
/// Returns (0, B) inside its bounds and zero outside. Bounds default
/// to all space, which models an ideal infinite dipole for tests and
/// single-particle studies.
#[derive(Debug, Clone)]
pub struct UniformBField {
    field: Vector3<f64>,
    bounds: BoundingBox,
    enabled: bool,
}

impl UniformBField {
    /// Create an unbounded uniform field with the given B vector (T).
    pub fn new(field: Vector3<f64>) -> Self {
        Self::with_bounds(field, BoundingBox::infinite())
    }

    /// Create a uniform field restricted to a bounding box.
    pub fn with_bounds(field: Vector3<f64>, bounds: BoundingBox) -> Self {
        Self {
            field,
            bounds,
            enabled: true,
        }
    }

    pub fn field(&self) -> &Vector3<f64> {
        &self.field
    }

    pub fn set_field(&mut self, field: Vector3<f64>) {
        self.field = field;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl FieldSource for UniformBField {
    fn evaluate(&self, position: &Point3<f64>, _time: f64) -> FieldValue {
        if !self.bounds.is_infinite() && !self.bounds.contains(position) {
            return FieldValue::zero();
        }
        FieldValue::new(Vector3::zeros(), self.field)
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
