use emfield::FieldManager;

use crate::component::{Component, ComponentKind};

/// Topology of the beamline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatticeType {
    /// Single-pass machine (linac)
    Linear,
    /// Periodic machine (synchrotron, storage ring)
    Circular,
}

/// Ordered sequence of beamline components.
///
/// After `compute_lattice` each component's s-position is the prefix
/// sum of the lengths before it, and the total length is the sum of
/// all lengths. Adding components leaves s-positions stale until the
/// next recompute.
pub struct Lattice {
    components: Vec<Component>,
    lattice_type: LatticeType,
    total_length: f64,
    drift_counter: usize,
}

impl Lattice {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            lattice_type: LatticeType::Linear,
            total_length: 0.0,
            drift_counter: 0,
        }
    }

    pub fn lattice_type(&self) -> LatticeType {
        self.lattice_type
    }

    pub fn set_lattice_type(&mut self, lattice_type: LatticeType) {
        self.lattice_type = lattice_type;
    }

    /// Whether the lattice is a closed ring.
    pub fn is_closed(&self) -> bool {
        self.lattice_type == LatticeType::Circular
    }

    /// Append a component to the end of the beamline.
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Insert a component at an index; out-of-range indices are a
    /// silent no-op.
    pub fn insert_component(&mut self, index: usize, component: Component) {
        if index <= self.components.len() {
            self.components.insert(index, component);
        }
    }

    /// Remove the component at an index; out-of-range indices are a
    /// silent no-op.
    pub fn remove_component(&mut self, index: usize) {
        if index < self.components.len() {
            self.components.remove(index);
        }
    }

    /// Remove every component with the given name; no match is a
    /// silent no-op.
    pub fn remove_component_by_name(&mut self, name: &str) {
        self.components.retain(|c| c.name() != name);
    }

    pub fn clear(&mut self) {
        self.components.clear();
        self.total_length = 0.0;
        self.drift_counter = 0;
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn component(&self, index: usize) -> Option<&Component> {
        self.components.get(index)
    }

    pub fn component_mut(&mut self, index: usize) -> Option<&mut Component> {
        self.components.get_mut(index)
    }

    /// First component with the given name, if any.
    pub fn component_by_name(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    pub fn component_by_name_mut(&mut self, name: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.name() == name)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    /// Component whose [entrance, exit) interval contains s.
    ///
    /// For circular lattices s is reduced modulo the total length,
    /// with negative values wrapped into [0, total). On a linear
    /// lattice an s outside the beamline finds nothing.
    pub fn component_at_s(&self, s: f64) -> Option<&Component> {
        let mut s = s;
        if self.lattice_type == LatticeType::Circular && self.total_length > 0.0 {
            s = s.rem_euclid(self.total_length);
        }
        self.components.iter().find(|c| c.contains_s(s))
    }

    /// Append a drift with an auto-numbered name.
    pub fn add_drift(&mut self, length: f64) {
        self.drift_counter += 1;
        let name = format!("Drift_{}", self.drift_counter);
        self.components
            .push(Component::beam_pipe(name, length, Default::default()));
    }

    /// Append a drift with an explicit name.
    pub fn add_drift_named(&mut self, length: f64, name: impl Into<String>) {
        self.components
            .push(Component::beam_pipe(name, length, Default::default()));
    }

    /// Recompute s-positions as the prefix sum of component lengths
    /// and refresh the total length.
    pub fn compute_lattice(&mut self) {
        self.update_s_positions();
    }

    /// Mark the lattice circular and recompute s-positions.
    pub fn close_ring(&mut self) {
        self.lattice_type = LatticeType::Circular;
        self.update_s_positions();
    }

    fn update_s_positions(&mut self) {
        let mut s = 0.0;
        for component in &mut self.components {
            component.set_s_position(s);
            s += component.length();
        }
        self.total_length = s;
    }

    /// Total beamline length (m). Valid after `compute_lattice`.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Ring circumference; alias of the total length.
    pub fn circumference(&self) -> f64 {
        self.total_length
    }

    /// Append the field source of every field-bearing component to
    /// the manager. The manager is not cleared first, so a rebuild
    /// is `manager.clear()` followed by this call.
    pub fn populate_field_manager(&mut self, manager: &mut FieldManager) {
        for component in &mut self.components {
            if let Some(source) = component.field_source() {
                manager.add_source(source);
            }
        }
    }

    pub fn dipoles(&self) -> impl Iterator<Item = &Component> {
        self.components
            .iter()
            .filter(|c| matches!(c.kind(), ComponentKind::Dipole { .. }))
    }

    pub fn quadrupoles(&self) -> impl Iterator<Item = &Component> {
        self.components
            .iter()
            .filter(|c| matches!(c.kind(), ComponentKind::Quadrupole { .. }))
    }

    pub fn rf_cavities(&self) -> impl Iterator<Item = &Component> {
        self.components
            .iter()
            .filter(|c| matches!(c.kind(), ComponentKind::RfCavity { .. }))
    }

    pub fn dipole_count(&self) -> usize {
        self.dipoles().count()
    }

    pub fn quadrupole_count(&self) -> usize {
        self.quadrupoles().count()
    }

    /// Total bending angle (rad) over all dipoles for a reference
    /// momentum: Σ e·|B_i|·L_i / p₀.
    pub fn total_bending_angle(&self, momentum: f64) -> f64 {
        self.dipoles()
            .filter_map(|d| d.bending_angle(momentum))
            .sum()
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self::new()
    }
}
