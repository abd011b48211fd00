use std::sync::Arc;

use nalgebra::Point3;

use crate::source::FieldSource;
use crate::value::FieldValue;

/// Superposition of field sources.
///
/// The manager holds shared references to field sources owned by
/// beamline elements and sums the contributions of every source that
/// is enabled and whose inside-test passes. Clearing the manager
/// drops the references, not the sources themselves.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use emfield::{FieldManager, UniformBField};
/// use nalgebra::{Point3, Vector3};
///
/// let mut manager = FieldManager::new();
/// manager.add_source(Arc::new(UniformBField::new(Vector3::new(0.0, 0.0, 1.0))));
/// manager.add_source(Arc::new(UniformBField::new(Vector3::new(0.0, 0.0, 0.5))));
///
/// let field = manager.evaluate(&Point3::origin(), 0.0);
/// assert_eq!(field.b.z, 1.5);
/// ```
#[derive(Default)]
pub struct FieldManager {
    sources: Vec<Arc<dyn FieldSource>>,
}

impl FieldManager {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a field source to the superposition.
    pub fn add_source(&mut self, source: Arc<dyn FieldSource>) {
        self.sources.push(source);
    }

    /// Remove a specific source by reference identity.
    pub fn remove_source(&mut self, source: &Arc<dyn FieldSource>) {
        self.sources.retain(|s| !Arc::ptr_eq(s, source));
    }

    /// Drop all source references.
    pub fn clear(&mut self) {
        self.sources.clear();
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn sources(&self) -> &[Arc<dyn FieldSource>] {
        &self.sources
    }

    /// Total field at a position and time: the sum of `evaluate`
    /// over all sources that are enabled and contain the position.
    pub fn evaluate(&self, position: &Point3<f64>, time: f64) -> FieldValue {
        self.sources
            .iter()
            .filter(|s| s.is_enabled() && s.is_inside(position))
            .map(|s| s.evaluate(position, time))
            .fold(FieldValue::zero(), |acc, f| acc + f)
    }
}
