use std::sync::Arc;

use emfield::{BoundingBox, FieldSource, QuadrupoleField, RfField, UniformBField};
use nalgebra::{Point3, UnitQuaternion, Vector3};
use units::constants::ELEMENTARY_CHARGE;

use crate::aperture::Aperture;

/// A particle passage recorded by a detector.
#[derive(Debug, Clone)]
pub struct Hit {
    pub time: f64,
    pub position: Point3<f64>,
    pub momentum: Vector3<f64>,
    pub particle_id: u64,
}

/// The closed set of beamline element kinds with their per-kind
/// parameters.
#[derive(Debug, Clone)]
pub enum ComponentKind {
    /// Drift space; defines the vacuum chamber only
    BeamPipe,
    /// Bending magnet with a vertical field (T)
    Dipole { field: f64 },
    /// Focusing/defocusing magnet with a gradient (T/m)
    Quadrupole { gradient: f64 },
    /// Accelerating cavity
    RfCavity {
        voltage: f64,
        frequency: f64,
        phase: f64,
    },
    /// Thin instrumented plane recording particle passages
    Detector { hits: Vec<Hit> },
}

/// A beamline element.
///
/// Components share geometry (name, length, aperture, s-position,
/// global placement) and differ in their kind-specific parameters.
/// Field-bearing kinds build their field source lazily; mutating a
/// field parameter drops the cached source so the next query
/// rebuilds it with the new value.
#[derive(Clone)]
pub struct Component {
    name: String,
    length: f64,
    aperture: Aperture,
    s_position: f64,
    position: Point3<f64>,
    rotation: UnitQuaternion<f64>,
    kind: ComponentKind,
    source: Option<Arc<dyn FieldSource>>,
}

impl Component {
    fn new(name: impl Into<String>, length: f64, aperture: Aperture, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            length,
            aperture,
            s_position: 0.0,
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
            kind,
            source: None,
        }
    }

    /// Drift space of the given length.
    pub fn beam_pipe(name: impl Into<String>, length: f64, aperture: Aperture) -> Self {
        Self::new(name, length, aperture, ComponentKind::BeamPipe)
    }

    /// Dipole magnet with a vertical field in Tesla (bends in the
    /// horizontal plane).
    pub fn dipole(name: impl Into<String>, length: f64, field: f64, aperture: Aperture) -> Self {
        Self::new(name, length, aperture, ComponentKind::Dipole { field })
    }

    /// Quadrupole magnet with a gradient in T/m; positive focuses
    /// horizontally.
    pub fn quadrupole(
        name: impl Into<String>,
        length: f64,
        gradient: f64,
        aperture: Aperture,
    ) -> Self {
        Self::new(name, length, aperture, ComponentKind::Quadrupole { gradient })
    }

    /// RF cavity with peak voltage (V), frequency (Hz) and
    /// synchronous phase (rad).
    pub fn rf_cavity(
        name: impl Into<String>,
        length: f64,
        voltage: f64,
        frequency: f64,
        phase: f64,
        aperture: Aperture,
    ) -> Self {
        Self::new(
            name,
            length,
            aperture,
            ComponentKind::RfCavity {
                voltage,
                frequency,
                phase,
            },
        )
    }

    /// Thin detector plane.
    pub fn detector(name: impl Into<String>, aperture: Aperture) -> Self {
        Self::new(name, 0.001, aperture, ComponentKind::Detector { hits: Vec::new() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ComponentKind::BeamPipe => "BeamPipe",
            ComponentKind::Dipole { .. } => "Dipole",
            ComponentKind::Quadrupole { .. } => "Quadrupole",
            ComponentKind::RfCavity { .. } => "RFCavity",
            ComponentKind::Detector { .. } => "Detector",
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn aperture(&self) -> &Aperture {
        &self.aperture
    }

    /// Longitudinal position along the beamline (m), assigned by
    /// `Lattice::compute_lattice`.
    pub fn s_position(&self) -> f64 {
        self.s_position
    }

    pub fn set_s_position(&mut self, s: f64) {
        self.s_position = s;
    }

    pub fn entrance_s(&self) -> f64 {
        self.s_position
    }

    pub fn exit_s(&self) -> f64 {
        self.s_position + self.length
    }

    /// Whether an s-coordinate falls within [entrance, exit).
    pub fn contains_s(&self, s: f64) -> bool {
        s >= self.s_position && s < self.s_position + self.length
    }

    pub fn position(&self) -> &Point3<f64> {
        &self.position
    }

    /// Place the component in global coordinates. The cached field
    /// source carries the old placement, so it is invalidated.
    pub fn set_position(&mut self, position: Point3<f64>) {
        self.position = position;
        self.source = None;
    }

    pub fn rotation(&self) -> &UnitQuaternion<f64> {
        &self.rotation
    }

    pub fn set_rotation(&mut self, rotation: UnitQuaternion<f64>) {
        self.rotation = rotation;
        self.source = None;
    }

    /// Transform a global position to local component coordinates.
    pub fn to_local(&self, global: &Point3<f64>) -> Point3<f64> {
        let translated = global - self.position;
        Point3::from(self.rotation.inverse_transform_vector(&translated))
    }

    /// Transform a local position to global coordinates.
    pub fn to_global(&self, local: &Point3<f64>) -> Point3<f64> {
        self.position + self.rotation.transform_vector(&local.coords)
    }

    /// Whether a global position lies inside this component's
    /// aperture: local z within [0, L], then the 2D shape test.
    pub fn is_inside_aperture(&self, global: &Point3<f64>) -> bool {
        let local = self.to_local(global);
        if local.z < 0.0 || local.z > self.length {
            return false;
        }
        self.aperture.is_inside(local.x, local.y)
    }

    /// Dipole field strength (T); `None` for other kinds.
    pub fn field(&self) -> Option<f64> {
        match self.kind {
            ComponentKind::Dipole { field } => Some(field),
            _ => None,
        }
    }

    /// Set the dipole field strength; no-op for other kinds.
    pub fn set_field(&mut self, value: f64) {
        if let ComponentKind::Dipole { ref mut field } = self.kind {
            *field = value;
            self.source = None;
        }
    }

    /// Quadrupole gradient (T/m); `None` for other kinds.
    pub fn gradient(&self) -> Option<f64> {
        match self.kind {
            ComponentKind::Quadrupole { gradient } => Some(gradient),
            _ => None,
        }
    }

    pub fn set_gradient(&mut self, value: f64) {
        if let ComponentKind::Quadrupole { ref mut gradient } = self.kind {
            *gradient = value;
            self.source = None;
        }
    }

    pub fn voltage(&self) -> Option<f64> {
        match self.kind {
            ComponentKind::RfCavity { voltage, .. } => Some(voltage),
            _ => None,
        }
    }

    pub fn set_voltage(&mut self, value: f64) {
        if let ComponentKind::RfCavity { ref mut voltage, .. } = self.kind {
            *voltage = value;
            self.source = None;
        }
    }

    pub fn frequency(&self) -> Option<f64> {
        match self.kind {
            ComponentKind::RfCavity { frequency, .. } => Some(frequency),
            _ => None,
        }
    }

    pub fn set_frequency(&mut self, value: f64) {
        if let ComponentKind::RfCavity { ref mut frequency, .. } = self.kind {
            *frequency = value;
            self.source = None;
        }
    }

    pub fn phase(&self) -> Option<f64> {
        match self.kind {
            ComponentKind::RfCavity { phase, .. } => Some(phase),
            _ => None,
        }
    }

    pub fn set_phase(&mut self, value: f64) {
        if let ComponentKind::RfCavity { ref mut phase, .. } = self.kind {
            *phase = value;
            self.source = None;
        }
    }

    /// Bending angle (rad) of a dipole for the given reference
    /// momentum: θ = e·|B|·L/p.
    pub fn bending_angle(&self, momentum: f64) -> Option<f64> {
        self.field()
            .map(|b| ELEMENTARY_CHARGE * b.abs() * self.length / momentum)
    }

    /// Bending radius (m) of a dipole: ρ = p/(e·|B|), infinite for a
    /// vanishing field.
    pub fn bending_radius(&self, momentum: f64) -> Option<f64> {
        self.field().map(|b| {
            if b.abs() < 1e-10 {
                f64::INFINITY
            } else {
                momentum / (ELEMENTARY_CHARGE * b.abs())
            }
        })
    }

    /// Normalized quadrupole strength K1 = e·G/p (m⁻²).
    pub fn k1(&self, momentum: f64) -> Option<f64> {
        self.gradient()
            .map(|g| ELEMENTARY_CHARGE * g / momentum)
    }

    /// Whether a quadrupole focuses in the horizontal plane.
    pub fn is_focusing(&self) -> Option<bool> {
        self.gradient().map(|g| g > 0.0)
    }

    /// Energy gain (J) per pass through an RF cavity at the given
    /// particle phase: ΔE = e·V·cos φ.
    pub fn energy_gain(&self, phase: f64) -> Option<f64> {
        self.voltage().map(|v| ELEMENTARY_CHARGE * v * phase.cos())
    }

    /// Record a particle passage; no-op unless this is a detector.
    pub fn record_hit(
        &mut self,
        time: f64,
        position: Point3<f64>,
        momentum: Vector3<f64>,
        particle_id: u64,
    ) {
        if let ComponentKind::Detector { ref mut hits } = self.kind {
            hits.push(Hit {
                time,
                position,
                momentum,
                particle_id,
            });
        }
    }

    pub fn hits(&self) -> &[Hit] {
        match &self.kind {
            ComponentKind::Detector { hits } => hits,
            _ => &[],
        }
    }

    pub fn hit_count(&self) -> usize {
        self.hits().len()
    }

    pub fn clear_hits(&mut self) {
        if let ComponentKind::Detector { ref mut hits } = self.kind {
            hits.clear();
        }
    }

    /// The component's field source, building it on first access.
    ///
    /// Beam pipes and detectors carry no field and return `None`.
    /// The returned `Arc` is shared with the field manager; parameter
    /// setters drop this cache so a later call publishes a source
    /// with the new parameters.
    pub fn field_source(&mut self) -> Option<Arc<dyn FieldSource>> {
        match self.kind {
            ComponentKind::BeamPipe | ComponentKind::Detector { .. } => None,
            ComponentKind::Dipole { field } => {
                if self.source.is_none() {
                    // Vertical field, bending in the horizontal plane
                    let b = Vector3::new(0.0, field, 0.0);
                    let half_length = self.length / 2.0;
                    let r = self.aperture.radius_x;
                    let bounds = BoundingBox::new(
                        Point3::new(
                            self.position.x - r,
                            self.position.y - r,
                            self.position.z - half_length,
                        ),
                        Point3::new(
                            self.position.x + r,
                            self.position.y + r,
                            self.position.z + half_length,
                        ),
                    );
                    self.source = Some(Arc::new(UniformBField::with_bounds(b, bounds)));
                }
                self.source.clone()
            }
            ComponentKind::Quadrupole { gradient } => {
                if self.source.is_none() {
                    self.source = Some(Arc::new(QuadrupoleField::new(
                        gradient,
                        self.position,
                        self.length,
                        self.aperture.radius_x,
                    )));
                }
                self.source.clone()
            }
            ComponentKind::RfCavity {
                voltage,
                frequency,
                phase,
            } => {
                if self.source.is_none() {
                    self.source = Some(Arc::new(RfField::new(
                        voltage,
                        frequency,
                        phase,
                        self.position,
                        self.length,
                        self.aperture.radius_x,
                    )));
                }
                self.source.clone()
            }
        }
    }
}
