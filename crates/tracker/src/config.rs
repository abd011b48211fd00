//! JSON configuration shapes and persistence.
//!
//! The main configuration carries three sections (simulation, window,
//! render); the window and render sections belong to the outer
//! application and are only carried through. Lattice files describe a
//! beamline as a list of typed component entries.

use std::fs;
use std::path::Path;

use beam::BeamParameters;
use lattice::{Aperture, Component, Lattice, LatticeType};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use units::Energy;

use crate::engine::SimulationEngine;
use crate::integrators::IntegratorKind;

/// Configuration I/O failures. Callers are expected to report these
/// and keep the previously-held configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Physics/engine knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Fixed integration timestep (s)
    pub time_step: f64,
    /// Wall-clock to simulated-time multiplier
    pub time_scale: f64,
    /// 0 = Euler, 1 = Verlet, 2 = Boris, 3 = RK4
    pub integrator_type: i64,
    pub particle_count: u64,
    /// Beam kinetic energy (eV)
    pub beam_energy: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 1e-11,
            time_scale: 1e6,
            integrator_type: IntegratorKind::Boris.index(),
            particle_count: 1000,
            beam_energy: 1e9,
        }
    }
}

/// Window settings, owned by the windowing layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub vsync: bool,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            vsync: true,
            fullscreen: false,
        }
    }
}

/// Rendering settings, owned by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    pub wireframe: bool,
    pub show_grid: bool,
    pub show_axes: bool,
    pub particle_size: f32,
    pub color_scheme: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wireframe: false,
            show_grid: true,
            show_axes: true,
            particle_size: 2.0,
            color_scheme: 0,
        }
    }
}

// Sections are optional in the file; absent sections keep their
// current values.
#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    simulation: Option<SimulationConfig>,
    window: Option<WindowConfig>,
    render: Option<RenderConfig>,
}

/// Top-level configuration with its three sections.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub window: WindowConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from a JSON file, replacing only the
    /// sections present in the file.
    ///
    /// On error the configuration is left unchanged; the caller
    /// continues with the previously-held values.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let partial: PartialConfig = serde_json::from_str(&text)?;

        if let Some(simulation) = partial.simulation {
            self.simulation = simulation;
        }
        if let Some(window) = partial.window {
            self.window = window;
        }
        if let Some(render) = partial.render {
            self.render = render;
        }

        info!("config: loaded configuration from {}", path.display());
        Ok(())
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        info!("config: saved configuration to {}", path.display());
        Ok(())
    }

    /// Apply the simulation section to an engine.
    pub fn apply_to_engine(&self, engine: &mut SimulationEngine) {
        engine.set_time_step(self.simulation.time_step);
        engine.set_time_scale(self.simulation.time_scale);
        engine.set_integrator(IntegratorKind::from_index(self.simulation.integrator_type));
    }

    /// Beam parameters from the simulation section: particle count
    /// and kinetic energy (the file carries eV), everything else at
    /// its default.
    pub fn beam_parameters(&self) -> BeamParameters {
        BeamParameters {
            num_particles: self.simulation.particle_count as usize,
            kinetic_energy: Energy::from_electron_volts(self.simulation.beam_energy).to_joules(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentEntry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default = "default_component_name")]
    name: String,
    #[serde(default = "default_component_length")]
    length: f64,
    #[serde(default = "default_component_aperture")]
    aperture: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    s_position: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gradient: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    voltage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phase: Option<f64>,
}

fn default_component_name() -> String {
    "unnamed".to_string()
}

fn default_component_length() -> f64 {
    1.0
}

fn default_component_aperture() -> f64 {
    0.05
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LatticeFile {
    #[serde(default = "default_lattice_type")]
    lattice_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_length: Option<f64>,
    #[serde(default)]
    components: Vec<ComponentEntry>,
}

fn default_lattice_type() -> String {
    "linear".to_string()
}

/// Load a beamline lattice from a JSON file.
///
/// Unknown component types are skipped with a warning; missing
/// per-component keys take their documented defaults. The lattice is
/// computed before it is returned, so s-positions are valid.
pub fn load_lattice(path: impl AsRef<Path>) -> Result<Lattice, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let file: LatticeFile = serde_json::from_str(&text)?;

    let mut lattice = Lattice::new();
    if file.lattice_type == "circular" {
        lattice.set_lattice_type(LatticeType::Circular);
    }

    for entry in file.components {
        let aperture = Aperture::circular(entry.aperture);
        match entry.kind.as_str() {
            "drift" | "beampipe" => {
                lattice.add_component(Component::beam_pipe(entry.name, entry.length, aperture));
            }
            "dipole" => {
                let field = entry.field.unwrap_or(1.0);
                lattice.add_component(Component::dipole(
                    entry.name,
                    entry.length,
                    field,
                    aperture,
                ));
            }
            "quadrupole" => {
                let gradient = entry.gradient.unwrap_or(10.0);
                lattice.add_component(Component::quadrupole(
                    entry.name,
                    entry.length,
                    gradient,
                    aperture,
                ));
            }
            "rfcavity" => {
                let voltage = entry.voltage.unwrap_or(1e6);
                let frequency = entry.frequency.unwrap_or(500e6);
                let phase = entry.phase.unwrap_or(0.0);
                lattice.add_component(Component::rf_cavity(
                    entry.name,
                    entry.length,
                    voltage,
                    frequency,
                    phase,
                    aperture,
                ));
            }
            other => {
                warn!("config: skipping component of unknown type '{}'", other);
            }
        }
    }

    lattice.compute_lattice();
    info!(
        "config: loaded lattice from {} with {} components",
        path.display(),
        lattice.component_count()
    );
    Ok(lattice)
}

/// Save a beamline lattice as pretty-printed JSON.
pub fn save_lattice(lattice: &Lattice, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();

    let components = lattice
        .components()
        .iter()
        .map(|c| ComponentEntry {
            kind: match c.type_name() {
                "BeamPipe" => "beampipe",
                "Dipole" => "dipole",
                "Quadrupole" => "quadrupole",
                "RFCavity" => "rfcavity",
                _ => "unknown",
            }
            .to_string(),
            name: c.name().to_string(),
            length: c.length(),
            aperture: c.aperture().radius_x,
            s_position: Some(c.s_position()),
            field: c.field(),
            gradient: c.gradient(),
            voltage: c.voltage(),
            frequency: c.frequency(),
            phase: c.phase(),
        })
        .collect();

    let file = LatticeFile {
        lattice_type: if lattice.is_closed() {
            "circular".to_string()
        } else {
            "linear".to_string()
        },
        total_length: Some(lattice.total_length()),
        components,
    };

    let text = serde_json::to_string_pretty(&file)?;
    fs::write(path, text)?;
    info!("config: saved lattice to {}", path.display());
    Ok(())
}
