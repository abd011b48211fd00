use nalgebra::{Point3, Vector3};
use std::ops::{Add, AddAssign, Mul};

/// An electromagnetic field value at a point.
///
/// Field values form a commutative monoid under component-wise
/// addition with `FieldValue::zero()` as the identity, which is what
/// makes superposition over many sources a plain fold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldValue {
    /// Electric field (V/m)
    pub e: Vector3<f64>,
    /// Magnetic field (T)
    pub b: Vector3<f64>,
}

impl FieldValue {
    pub fn new(e: Vector3<f64>, b: Vector3<f64>) -> Self {
        Self { e, b }
    }

    /// The additive identity: no field.
    pub fn zero() -> Self {
        Self {
            e: Vector3::zeros(),
            b: Vector3::zeros(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for FieldValue {
    type Output = FieldValue;

    fn add(self, rhs: FieldValue) -> FieldValue {
        FieldValue {
            e: self.e + rhs.e,
            b: self.b + rhs.b,
        }
    }
}

impl AddAssign for FieldValue {
    fn add_assign(&mut self, rhs: FieldValue) {
        self.e += rhs.e;
        self.b += rhs.b;
    }
}

impl Mul<f64> for FieldValue {
    type Output = FieldValue;

    fn mul(self, rhs: f64) -> FieldValue {
        FieldValue {
            e: self.e * rhs,
            b: self.b * rhs,
        }
    }
}

/// Axis-aligned bounding box for spatial queries.
///
/// The default box is infinite in every direction; containment is
/// inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// An all-space box.
    pub fn infinite() -> Self {
        Self {
            min: Point3::new(
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ),
            max: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
        }
    }

    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    pub fn is_infinite(&self) -> bool {
        self.min.x == f64::NEG_INFINITY || self.max.x == f64::INFINITY
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::infinite()
    }
}
