mod tests {
    use nalgebra::{Point3, Vector3};

    use crate::value::{BoundingBox, FieldValue};

    #[test]
    fn test_zero_is_additive_identity() {
        let f = FieldValue::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0));
        let sum = f + FieldValue::zero();
        assert_eq!(sum, f);
    }

    #[test]
    fn test_addition_is_componentwise() {
        let a = FieldValue::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let b = FieldValue::new(Vector3::new(2.0, 0.0, 0.0), Vector3::new(0.0, 0.5, 0.0));

        let sum = a + b;
        assert_eq!(sum.e.x, 3.0);
        assert_eq!(sum.b.y, 1.5);

        // Addition commutes
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_add_assign() {
        let mut total = FieldValue::zero();
        total += FieldValue::new(Vector3::new(1.0, 0.0, 0.0), Vector3::zeros());
        total += FieldValue::new(Vector3::new(1.0, 0.0, 0.0), Vector3::zeros());
        assert_eq!(total.e.x, 2.0);
    }

    #[test]
    fn test_scalar_multiplication() {
        let f = FieldValue::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0));
        let scaled = f * 2.0;
        assert_eq!(scaled.e, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(scaled.b, Vector3::new(8.0, 10.0, 12.0));
    }

    #[test]
    fn test_default_box_is_infinite() {
        let bbox = BoundingBox::default();
        assert!(bbox.is_infinite());
        assert!(bbox.contains(&Point3::new(1e30, -1e30, 0.0)));
    }

    #[test]
    fn test_containment_is_inclusive() {
        let bbox = BoundingBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        assert!(bbox.contains(&Point3::origin()));
        assert!(bbox.contains(&Point3::new(1.0, 1.0, 1.0)));
        assert!(bbox.contains(&Point3::new(-1.0, -1.0, -1.0)));
        assert!(!bbox.contains(&Point3::new(1.0001, 0.0, 0.0)));
        assert!(!bbox.is_infinite());
    }
}
