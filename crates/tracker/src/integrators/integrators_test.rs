mod tests {
    use crate::integrators::IntegratorKind;

    #[test]
    fn test_kind_creates_matching_integrator() {
        assert_eq!(IntegratorKind::Euler.create().name(), "Euler");
        assert_eq!(
            IntegratorKind::VelocityVerlet.create().name(),
            "Velocity Verlet"
        );
        assert_eq!(IntegratorKind::Boris.create().name(), "Boris");
        assert_eq!(IntegratorKind::Rk4.create().name(), "RK4");
    }

    #[test]
    fn test_index_round_trip() {
        for kind in [
            IntegratorKind::Euler,
            IntegratorKind::VelocityVerlet,
            IntegratorKind::Boris,
            IntegratorKind::Rk4,
        ] {
            assert_eq!(IntegratorKind::from_index(kind.index()), kind);
        }
    }

    #[test]
    fn test_unknown_index_defaults_to_boris() {
        assert_eq!(IntegratorKind::from_index(-1), IntegratorKind::Boris);
        assert_eq!(IntegratorKind::from_index(99), IntegratorKind::Boris);
    }

    #[test]
    fn test_default_kind_is_boris() {
        assert_eq!(IntegratorKind::default(), IntegratorKind::Boris);
    }
}
