/// Transverse cross-section shapes for the beam channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApertureShape {
    Circular,
    Elliptical,
    Rectangular,
}

/// Aperture of a beamline component.
///
/// `radius_x`/`radius_y` are radii for the circular and elliptical
/// shapes and half-widths for the rectangular shape. The circular
/// shape only uses `radius_x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aperture {
    pub shape: ApertureShape,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Aperture {
    /// Circular aperture of the given radius (m).
    pub fn circular(radius: f64) -> Self {
        Self {
            shape: ApertureShape::Circular,
            radius_x: radius,
            radius_y: radius,
        }
    }

    /// Elliptical aperture with the given semi-axes (m).
    pub fn elliptical(radius_x: f64, radius_y: f64) -> Self {
        Self {
            shape: ApertureShape::Elliptical,
            radius_x,
            radius_y,
        }
    }

    /// Rectangular aperture with the given half-widths (m).
    pub fn rectangular(half_width: f64, half_height: f64) -> Self {
        Self {
            shape: ApertureShape::Rectangular,
            radius_x: half_width,
            radius_y: half_height,
        }
    }

    /// Containment test in local transverse coordinates, inclusive
    /// on the boundary.
    pub fn is_inside(&self, x: f64, y: f64) -> bool {
        match self.shape {
            ApertureShape::Circular => {
                let r = (x * x + y * y).sqrt();
                r <= self.radius_x
            }
            ApertureShape::Elliptical => {
                let nx = x / self.radius_x;
                let ny = y / self.radius_y;
                nx * nx + ny * ny <= 1.0
            }
            ApertureShape::Rectangular => x.abs() <= self.radius_x && y.abs() <= self.radius_y,
        }
    }
}

impl Default for Aperture {
    fn default() -> Self {
        Self::circular(0.05)
    }
}
