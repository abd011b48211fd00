//! Track a 1 GeV proton beam through a FODO channel and print beam
//! statistics as it goes.
//!
//! Run with: cargo run --example fodo_tracking

use beam::{BeamParameters, ParticleSpecies};
use lattice::{FodoCellParams, Lattice};
use tracker::{IntegratorKind, SimulationEngine};
use units::Energy;

fn main() {
    // Four standard 10 m FODO cells
    let params = FodoCellParams {
        cell_length: 10.0,
        quad_length: 0.5,
        quad_gradient: 30.0,
        aperture: 0.05,
        ..Default::default()
    };
    let mut lattice = Lattice::new();
    lattice.build_fodo_lattice(&params, 4);
    lattice.compute_lattice();

    println!(
        "FODO channel: {} components, {:.1} m, {} quadrupoles",
        lattice.component_count(),
        lattice.total_length(),
        lattice.quadrupole_count()
    );

    let mut engine = SimulationEngine::new();
    engine.set_lattice(lattice);
    engine.set_integrator(IntegratorKind::Boris);
    engine.set_time_step(1e-11);

    engine.ensemble_mut().generate_beam(&BeamParameters {
        species: ParticleSpecies::Proton,
        num_particles: 2000,
        kinetic_energy: Energy::from_gev(1.0).to_joules(),
        sigma_x: 1e-3,
        sigma_y: 1e-3,
        sigma_z: 1e-2,
        seed: 42,
        ..Default::default()
    });

    let stats = engine.ensemble().statistics();
    println!(
        "generated {} protons, mean K = {:.3} GeV",
        stats.total_particles,
        Energy::from_joules(stats.mean_energy).to_gev()
    );

    // 10k sub-steps of 10 ps each
    for block in 0..10 {
        for _ in 0..1000 {
            engine.step();
        }

        let beam = engine.ensemble().statistics();
        println!(
            "t = {:8.2} ns | z = {:7.3} m | sigma_x = {:.3e} m | eps_x = {:.3e} m.rad | active {}",
            engine.stats().simulation_time * 1e9,
            beam.mean_position.z,
            beam.rms_size.x,
            beam.emittance_x,
            beam.active_particles
        );

        if beam.active_particles == 0 {
            println!("beam fully lost after block {}", block);
            break;
        }
    }

    println!(
        "done: {} steps, {} particles lost",
        engine.stats().step_count,
        engine.stats().lost_particle_count
    );
}
