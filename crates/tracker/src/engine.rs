//! The simulation controller.

use beam::{BeamParameters, Particle, ParticleEnsemble};
use emfield::FieldManager;
use lattice::Lattice;
use log::{debug, info};

use crate::integrators::{Integrator, IntegratorKind};

/// Simulation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Stopped,
    Running,
    Paused,
}

/// Aggregate simulation counters and performance figures.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Total simulated time (s)
    pub simulation_time: f64,
    /// Total integration sub-steps taken
    pub step_count: u64,
    /// Sub-steps per wall-clock second over the last second
    pub steps_per_second: f64,
    /// Active particles
    pub particle_count: usize,
    /// Particles lost on apertures
    pub lost_particle_count: usize,
    /// Mean kinetic energy of the active beam (J)
    pub average_energy: f64,
    /// RMS kinetic-energy spread (J)
    pub energy_spread: f64,
}

/// Callback invoked when a particle is lost, with a snapshot of the
/// particle and a human-readable reason.
pub type LossCallback = Box<dyn FnMut(&Particle, &str) + Send>;

/// Hard fallback aperture for particles in gaps between components
/// (m). A drop-dead cutoff, not a physical model.
const DEFAULT_FALLBACK_APERTURE: f64 = 0.10;

/// Orchestrates the beam-dynamics simulation.
///
/// Owns the particle ensemble, the field manager and (optionally) a
/// lattice. The outer application feeds wall-clock frame times into
/// [`update`](Self::update); the engine scales them, accumulates
/// them, and drains the accumulator in fixed integration sub-steps.
pub struct SimulationEngine {
    ensemble: ParticleEnsemble,
    field_manager: FieldManager,
    lattice: Option<Lattice>,
    integrator: Box<dyn Integrator>,
    integrator_kind: IntegratorKind,

    state: SimulationState,
    time_step: f64,
    time_scale: f64,
    accumulated_time: f64,
    current_time: f64,
    max_steps_per_tick: usize,
    fallback_aperture: f64,

    stats: SimulationStats,
    loss_callback: Option<LossCallback>,

    // Performance tracking over the last wall-second
    wall_timer: f64,
    steps_this_second: u64,
}

impl SimulationEngine {
    pub fn new() -> Self {
        let integrator_kind = IntegratorKind::default();
        Self {
            ensemble: ParticleEnsemble::new(),
            field_manager: FieldManager::new(),
            lattice: None,
            integrator: integrator_kind.create(),
            integrator_kind,
            state: SimulationState::Stopped,
            time_step: 1e-11,
            time_scale: 1.0,
            accumulated_time: 0.0,
            current_time: 0.0,
            max_steps_per_tick: 10_000,
            fallback_aperture: DEFAULT_FALLBACK_APERTURE,
            stats: SimulationStats::default(),
            loss_callback: None,
            wall_timer: 0.0,
            steps_this_second: 0,
        }
    }

    /// Bind a lattice and rebuild the field manager from it.
    pub fn set_lattice(&mut self, lattice: Lattice) {
        self.lattice = Some(lattice);
        self.refresh_fields();
        if let Some(lattice) = &self.lattice {
            debug!(
                "engine: bound lattice with {} components",
                lattice.component_count()
            );
        }
    }

    /// Unbind the lattice; aperture losses stop being detected.
    pub fn clear_lattice(&mut self) {
        self.lattice = None;
        self.field_manager.clear();
    }

    pub fn lattice(&self) -> Option<&Lattice> {
        self.lattice.as_ref()
    }

    /// Mutable lattice access. After mutating component parameters,
    /// call [`refresh_fields`](Self::refresh_fields) so the field
    /// manager publishes the rebuilt sources.
    pub fn lattice_mut(&mut self) -> Option<&mut Lattice> {
        self.lattice.as_mut()
    }

    /// Rebuild the field manager from the bound lattice.
    pub fn refresh_fields(&mut self) {
        self.field_manager.clear();
        if let Some(lattice) = &mut self.lattice {
            lattice.populate_field_manager(&mut self.field_manager);
        }
    }

    pub fn field_manager(&self) -> &FieldManager {
        &self.field_manager
    }

    pub fn ensemble(&self) -> &ParticleEnsemble {
        &self.ensemble
    }

    pub fn ensemble_mut(&mut self) -> &mut ParticleEnsemble {
        &mut self.ensemble
    }

    /// Swap the integration scheme. Particle state is untouched, so
    /// swapping mid-simulation is safe.
    pub fn set_integrator(&mut self, kind: IntegratorKind) {
        self.integrator_kind = kind;
        self.integrator = kind.create();
        debug!("engine: integrator set to {}", self.integrator.name());
    }

    pub fn integrator_kind(&self) -> IntegratorKind {
        self.integrator_kind
    }

    /// Fixed integration timestep (s).
    pub fn set_time_step(&mut self, dt: f64) {
        self.time_step = dt;
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Multiplier from wall-clock time to simulated time; clamped to
    /// be non-negative.
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Cap on integration sub-steps per outer tick, the backpressure
    /// against a too-small timestep or too-large time scale.
    pub fn set_max_steps_per_tick(&mut self, max_steps: usize) {
        self.max_steps_per_tick = max_steps;
    }

    pub fn max_steps_per_tick(&self) -> usize {
        self.max_steps_per_tick
    }

    /// Radius (m) of the drop-dead cutoff for particles in gaps
    /// between components.
    pub fn set_fallback_aperture(&mut self, radius: f64) {
        self.fallback_aperture = radius;
    }

    pub fn fallback_aperture(&self) -> f64 {
        self.fallback_aperture
    }

    pub fn set_loss_callback(&mut self, callback: LossCallback) {
        self.loss_callback = Some(callback);
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == SimulationState::Paused
    }

    /// Start the simulation, resetting first when stopped.
    pub fn start(&mut self) {
        if self.state == SimulationState::Stopped {
            self.reset();
        }
        self.state = SimulationState::Running;
        info!("engine: simulation started");
    }

    /// Stop the simulation; takes effect at the next outer tick.
    pub fn stop(&mut self) {
        self.state = SimulationState::Stopped;
        info!(
            "engine: simulation stopped (time: {:.6e} s, steps: {})",
            self.stats.simulation_time, self.stats.step_count
        );
    }

    pub fn pause(&mut self) {
        if self.state == SimulationState::Running {
            self.state = SimulationState::Paused;
            info!("engine: simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.state == SimulationState::Paused {
            self.state = SimulationState::Running;
            info!("engine: simulation resumed");
        }
    }

    /// Clear the ensemble, counters and accumulator. Integrator
    /// selection, timestep, time scale and the lattice binding are
    /// preserved.
    pub fn reset(&mut self) {
        self.stats = SimulationStats::default();
        self.accumulated_time = 0.0;
        self.current_time = 0.0;
        self.wall_timer = 0.0;
        self.steps_this_second = 0;
        self.ensemble.clear();
        info!("engine: simulation reset");
    }

    /// Advance by one outer tick.
    ///
    /// Scales and accumulates the wall-clock frame time, then drains
    /// the accumulator in fixed sub-steps up to the per-tick cap.
    /// When the cap is hit with more than one step of backlog the
    /// excess is discarded so a slow frame cannot snowball.
    pub fn update(&mut self, delta_time: f64) {
        if self.state != SimulationState::Running {
            return;
        }

        self.accumulated_time += delta_time * self.time_scale;

        let mut steps_this_tick = 0;
        while self.accumulated_time >= self.time_step && steps_this_tick < self.max_steps_per_tick
        {
            self.step();
            self.accumulated_time -= self.time_step;
            steps_this_tick += 1;
        }

        if steps_this_tick >= self.max_steps_per_tick && self.accumulated_time > self.time_step {
            self.accumulated_time = 0.0;
        }

        self.update_stats(delta_time);
    }

    /// Perform a single integration sub-step: push every active
    /// particle, detect losses, advance the simulation clock.
    pub fn step(&mut self) {
        let time = self.current_time;
        let dt = self.time_step;
        let integrator = &*self.integrator;
        let field_manager = &self.field_manager;

        for particle in self.ensemble.iter_mut() {
            if !particle.is_active() {
                continue;
            }
            integrator.step(particle, field_manager, time, dt);
        }

        self.check_particle_losses();

        self.current_time += self.time_step;
        self.stats.simulation_time = self.current_time;
        self.stats.step_count += 1;
        self.steps_this_second += 1;
    }

    /// Simulation statistics snapshot.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Generate the default commissioning beam: 1000 protons at
    /// 1 GeV with millimetre transverse size.
    pub fn load_default_beam(&mut self) {
        let params = BeamParameters::default();
        self.ensemble.generate_beam(&params);
        info!(
            "engine: initialized default beam with {} particles",
            params.num_particles
        );
    }

    fn update_stats(&mut self, frame_time: f64) {
        self.wall_timer += frame_time;
        if self.wall_timer >= 1.0 {
            self.stats.steps_per_second = self.steps_this_second as f64 / self.wall_timer;
            self.steps_this_second = 0;
            self.wall_timer = 0.0;
        }

        self.stats.particle_count = self.ensemble.active_count();

        let beam_stats = self.ensemble.statistics();
        self.stats.average_energy = beam_stats.mean_energy;
        self.stats.energy_spread = beam_stats.rms_energy;
    }

    /// Loss sweep at the end of a sub-step.
    ///
    /// With a non-empty lattice bound, a particle is lost when it is
    /// inside no component's aperture and its transverse radius also
    /// exceeds the fallback cutoff. Without a lattice no aperture
    /// losses occur.
    fn check_particle_losses(&mut self) {
        let Some(lattice) = &self.lattice else {
            return;
        };
        let components = lattice.components();
        if components.is_empty() {
            return;
        }

        for particle in self.ensemble.iter_mut() {
            if !particle.is_active() {
                continue;
            }

            let pos = particle.position();
            let inside_any = components.iter().any(|c| c.is_inside_aperture(pos));
            if inside_any {
                continue;
            }

            let radial = (pos.x * pos.x + pos.y * pos.y).sqrt();
            if radial > self.fallback_aperture {
                particle.set_active(false);
                self.stats.lost_particle_count += 1;

                if let Some(callback) = &mut self.loss_callback {
                    let reason = format!(
                        "outside all apertures, r = {:.4} m exceeds {:.2} m fallback",
                        radial, self.fallback_aperture
                    );
                    callback(particle, &reason);
                }
            }
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}
