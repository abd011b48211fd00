mod tests {
    use approx::assert_relative_eq;

    use crate::constants::ELEMENTARY_CHARGE;
    use crate::energy::{Energy, GEV_TO_J, MEV_TO_J};

    #[test]
    fn test_energy_conversions() {
        // 1 eV is the elementary charge in joules
        let ev = Energy::from_electron_volts(1.0);
        assert_relative_eq!(ev.to_joules(), ELEMENTARY_CHARGE);

        // Metric prefixes
        let gev = Energy::from_gev(1.0);
        assert_relative_eq!(gev.to_joules(), GEV_TO_J);
        assert_relative_eq!(gev.to_mev(), 1000.0);
        assert_relative_eq!(gev.to_electron_volts(), 1.0e9);

        // Round trip
        let original = 938.272;
        let round_trip = Energy::from_joules(Energy::from_mev(original).to_joules()).to_mev();
        assert_relative_eq!(round_trip, original);
    }

    #[test]
    fn test_energy_arithmetic_operations() {
        let e1 = Energy::from_mev(2.0);
        let e2 = Energy::from_mev(1.5);

        assert_relative_eq!((e1 + e2).to_mev(), 3.5);
        assert_relative_eq!((e1 - e2).to_mev(), 0.5);
        assert_relative_eq!((e1 * 3.0).to_mev(), 6.0);
        assert_relative_eq!((e1 / 4.0).to_mev(), 0.5);
    }

    #[test]
    fn test_tev_scale() {
        // 7 TeV in joules, the LHC beam energy
        let beam = Energy::from_tev(7.0);
        assert_relative_eq!(beam.to_joules(), 7.0e12 * ELEMENTARY_CHARGE);
        assert_relative_eq!(beam.to_gev(), 7000.0);
    }

    #[test]
    fn test_mev_constant_consistency() {
        assert_relative_eq!(MEV_TO_J, 1.0e6 * ELEMENTARY_CHARGE);
    }
}
