mod tests {
    use approx::assert_relative_eq;

    use crate::fodo::FodoCellParams;
    use crate::lattice::Lattice;

    #[test]
    fn test_single_cell_structure() {
        let mut lattice = Lattice::new();
        lattice.build_fodo_cell(&FodoCellParams::default(), "FODO");
        lattice.compute_lattice();

        // Exactly QF, Drift, QD, Drift
        assert_eq!(lattice.component_count(), 4);
        assert_eq!(lattice.component(0).unwrap().name(), "FODO_QF");
        assert_eq!(lattice.component(1).unwrap().name(), "FODO_D1");
        assert_eq!(lattice.component(2).unwrap().name(), "FODO_QD");
        assert_eq!(lattice.component(3).unwrap().name(), "FODO_D2");

        // Gradients (+G, 0, -G, 0)
        assert_relative_eq!(lattice.component(0).unwrap().gradient().unwrap(), 50.0);
        assert!(lattice.component(1).unwrap().gradient().is_none());
        assert_relative_eq!(lattice.component(2).unwrap().gradient().unwrap(), -50.0);
        assert!(lattice.component(3).unwrap().gradient().is_none());

        // The cell totals the configured length
        assert_relative_eq!(lattice.total_length(), 10.0);
    }

    #[test]
    fn test_computed_drift_length() {
        let params = FodoCellParams {
            cell_length: 10.0,
            quad_length: 0.5,
            ..Default::default()
        };
        let mut lattice = Lattice::new();
        lattice.build_fodo_cell(&params, "FODO");

        // d = (C - 2*lq)/2 = 4.5
        assert_relative_eq!(lattice.component(1).unwrap().length(), 4.5);
        assert_relative_eq!(lattice.component(3).unwrap().length(), 4.5);
    }

    #[test]
    fn test_explicit_drift_length() {
        let params = FodoCellParams {
            drift_length: 2.0,
            ..Default::default()
        };
        let mut lattice = Lattice::new();
        lattice.build_fodo_cell(&params, "FODO");
        lattice.compute_lattice();

        assert_relative_eq!(lattice.component(1).unwrap().length(), 2.0);
        // Explicit drifts override the cell-length bookkeeping
        assert_relative_eq!(lattice.total_length(), 5.0);
    }

    #[test]
    fn test_four_cell_lattice() {
        let params = FodoCellParams {
            cell_length: 10.0,
            quad_length: 0.5,
            quad_gradient: 50.0,
            ..Default::default()
        };
        let mut lattice = Lattice::new();
        lattice.build_fodo_lattice(&params, 4);
        lattice.compute_lattice();

        assert_eq!(lattice.component_count(), 16);
        assert_eq!(lattice.quadrupole_count(), 8);
        assert_relative_eq!(lattice.total_length(), 40.0);

        let focusing = lattice
            .quadrupoles()
            .filter(|q| q.gradient().unwrap() > 0.0)
            .count();
        let defocusing = lattice
            .quadrupoles()
            .filter(|q| q.gradient().unwrap() < 0.0)
            .count();
        assert_eq!(focusing, 4);
        assert_eq!(defocusing, 4);
    }

    #[test]
    fn test_cell_names_are_numbered() {
        let mut lattice = Lattice::new();
        lattice.build_fodo_lattice(&FodoCellParams::default(), 2);

        assert!(lattice.component_by_name("FODO_1_QF").is_some());
        assert!(lattice.component_by_name("FODO_2_QD").is_some());
    }

    #[test]
    fn test_aperture_applied_to_quads() {
        let params = FodoCellParams {
            aperture: 0.03,
            ..Default::default()
        };
        let mut lattice = Lattice::new();
        lattice.build_fodo_cell(&params, "FODO");

        let qf = lattice.component_by_name("FODO_QF").unwrap();
        assert_relative_eq!(qf.aperture().radius_x, 0.03);
    }
}
