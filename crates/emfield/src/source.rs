//! The field-source strategy trait.

use nalgebra::Point3;

use crate::value::{BoundingBox, FieldValue};

/// A source of electromagnetic field in the beamline.
///
/// Field sources are evaluated at a position and time and summed by
/// the [`FieldManager`](crate::FieldManager). New field shapes can be
/// added without touching the manager or the integrators.
///
/// Sources are immutable once shared: beamline elements build a fresh
/// source whenever one of their parameters changes, and the manager
/// is re-populated to pick up the replacement.
///
/// # Examples
///
/// ```
/// use emfield::{FieldSource, UniformBField};
/// use nalgebra::{Point3, Vector3};
///
/// let dipole = UniformBField::new(Vector3::new(0.0, 1.5, 0.0));
/// let field = dipole.evaluate(&Point3::origin(), 0.0);
/// assert_eq!(field.b.y, 1.5);
/// ```
pub trait FieldSource: Send + Sync {
    /// Evaluate the field at a position (m, global coordinates) and
    /// simulation time (s).
    fn evaluate(&self, position: &Point3<f64>, time: f64) -> FieldValue;

    /// Bounding box of the active field region.
    fn bounding_box(&self) -> BoundingBox;

    /// Whether a position lies within the active field region.
    ///
    /// The default implementation tests the bounding box; sources
    /// with tighter shapes (e.g. a radial aperture) override this.
    fn is_inside(&self, position: &Point3<f64>) -> bool {
        self.bounding_box().contains(position)
    }

    /// Whether this source currently contributes to superposition.
    fn is_enabled(&self) -> bool;
}
