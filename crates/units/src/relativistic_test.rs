mod tests {
    use approx::assert_relative_eq;

    use crate::constants::{C, C_SQUARED, PROTON_MASS};
    use crate::energy::Energy;
    use crate::relativistic::{
        beta_from_gamma, gamma_from_beta, gamma_from_kinetic_energy, gamma_from_momentum,
        gamma_from_velocity, kinetic_energy_from_gamma, momentum_from_gamma,
        total_energy_from_gamma,
    };

    #[test]
    fn test_gamma_at_rest() {
        assert_relative_eq!(gamma_from_beta(0.0), 1.0);
        assert_relative_eq!(gamma_from_velocity(0.0), 1.0);
        assert_relative_eq!(beta_from_gamma(1.0), 0.0);
    }

    #[test]
    fn test_gamma_beta_round_trip() {
        for &beta in &[0.1, 0.5, 0.9, 0.999] {
            let gamma = gamma_from_beta(beta);
            assert!(gamma >= 1.0);
            assert_relative_eq!(beta_from_gamma(gamma), beta, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_half_light_speed() {
        // gamma(0.5c) = 1/sqrt(0.75)
        let gamma = gamma_from_beta(0.5);
        assert_relative_eq!(gamma, 1.0 / 0.75f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_kinetic_energy_round_trip() {
        let k = Energy::from_gev(1.0).to_joules();
        let gamma = gamma_from_kinetic_energy(k, PROTON_MASS);
        let back = kinetic_energy_from_gamma(gamma, PROTON_MASS);
        assert_relative_eq!(back, k, max_relative = 1e-12);
    }

    #[test]
    fn test_momentum_gamma_round_trip() {
        let gamma = 7.5;
        let p = momentum_from_gamma(gamma, PROTON_MASS);
        assert_relative_eq!(gamma_from_momentum(p, PROTON_MASS), gamma, max_relative = 1e-12);
    }

    #[test]
    fn test_energy_momentum_identity() {
        // E^2 = (pc)^2 + (mc^2)^2
        let gamma = 8.0;
        let e = total_energy_from_gamma(gamma, PROTON_MASS);
        let p = momentum_from_gamma(gamma, PROTON_MASS);
        let rest = PROTON_MASS * C_SQUARED;

        let lhs = e * e;
        let rhs = (p * C) * (p * C) + rest * rest;
        assert_relative_eq!(lhs, rhs, max_relative = 1e-12);
    }

    #[test]
    fn test_lhc_proton_gamma() {
        // A 7 TeV proton sits near gamma = 7461
        let k = Energy::from_tev(7.0).to_joules();
        let gamma = gamma_from_kinetic_energy(k, PROTON_MASS);
        assert!(gamma > 7450.0 && gamma < 7475.0, "gamma = {}", gamma);

        let beta = beta_from_gamma(gamma);
        assert!(beta > 0.999999 && beta < 1.0);
    }
}
