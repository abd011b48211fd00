//! FODO cell construction.

use crate::aperture::Aperture;
use crate::component::Component;
use crate::lattice::Lattice;

/// Parameters for a standard FODO cell.
#[derive(Debug, Clone, Copy)]
pub struct FodoCellParams {
    /// Total cell length (m)
    pub cell_length: f64,
    /// Quadrupole length (m)
    pub quad_length: f64,
    /// Quadrupole gradient magnitude (T/m)
    pub quad_gradient: f64,
    /// Drift length (m); computed from the cell length when ≤ 0
    pub drift_length: f64,
    /// Aperture radius (m)
    pub aperture: f64,
}

impl Default for FodoCellParams {
    fn default() -> Self {
        Self {
            cell_length: 10.0,
            quad_length: 0.5,
            quad_gradient: 50.0,
            drift_length: 0.0,
            aperture: 0.05,
        }
    }
}

impl Lattice {
    /// Append one FODO cell: QF, drift, QD, drift.
    ///
    /// QF focuses horizontally (+G), QD defocuses (−G). When no
    /// explicit drift length is given it is chosen as
    /// d = (C − 2·ℓ_q)/2 so the cell totals the configured length.
    /// Component names take the given prefix.
    pub fn build_fodo_cell(&mut self, params: &FodoCellParams, cell_name: &str) {
        let drift_length = if params.drift_length > 0.0 {
            params.drift_length
        } else {
            (params.cell_length - 2.0 * params.quad_length) / 2.0
        };

        let aperture = Aperture::circular(params.aperture);

        self.add_component(Component::quadrupole(
            format!("{}_QF", cell_name),
            params.quad_length,
            params.quad_gradient,
            aperture,
        ));
        self.add_drift_named(drift_length, format!("{}_D1", cell_name));
        self.add_component(Component::quadrupole(
            format!("{}_QD", cell_name),
            params.quad_length,
            -params.quad_gradient,
            aperture,
        ));
        self.add_drift_named(drift_length, format!("{}_D2", cell_name));
    }

    /// Append a chain of FODO cells named `FODO_1` .. `FODO_n`.
    pub fn build_fodo_lattice(&mut self, params: &FodoCellParams, num_cells: usize) {
        for i in 0..num_cells {
            let cell_name = format!("FODO_{}", i + 1);
            self.build_fodo_cell(params, &cell_name);
        }
    }
}
