//! Dg collision demo entry point
//!
//! Runs the sliding-collision arena headless: a seeded random walk drives
//! the puck for the configured time and a JSON summary is printed.
//!
//! Usage: `dg-collision [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

#[cfg(not(target_arch = "wasm32"))]
use dg::collision::{Thrust, TickInput, Turn, tick};
#[cfg(not(target_arch = "wasm32"))]
use dg::{Settings, World};
#[cfg(not(target_arch = "wasm32"))]
use rand::{Rng, SeedableRng};
#[cfg(not(target_arch = "wasm32"))]
use rand_pcg::Pcg32;
#[cfg(not(target_arch = "wasm32"))]
use serde::Serialize;

/// How long the random walk holds each input, in seconds
#[cfg(not(target_arch = "wasm32"))]
const HOLD_SECONDS: f32 = 0.5;

/// End-of-run report
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Serialize)]
struct RunSummary {
    ticks: u64,
    simulated_seconds: f32,
    final_center: [f32; 2],
    final_angle: f32,
    distance_travelled: f32,
    /// Ticks where the puck was driven but did not move
    stalled_ticks: u64,
    resets: u32,
    move_rate: f32,
    scene_lines: usize,
    scene_points: usize,
    scene_disks: usize,
}

/// Pick the next held input for the random walk
#[cfg(not(target_arch = "wasm32"))]
fn random_input(rng: &mut Pcg32) -> TickInput {
    let turn = match rng.random_range(0..3) {
        0 => Turn::Left,
        1 => Turn::Right,
        _ => Turn::None,
    };
    let thrust = match rng.random_range(0..10) {
        0 => Thrust::Reverse,
        1 => Thrust::None,
        _ => Thrust::Forward,
    };
    TickInput {
        turn,
        thrust,
        faster: rng.random_bool(0.05),
        slower: rng.random_bool(0.05),
        reset: rng.random_bool(0.01),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(settings: &Settings) -> RunSummary {
    let mut world: World<f32> = settings.build_world();
    let mut rng = Pcg32::seed_from_u64(settings.input_seed);
    let dt = settings.dt();
    let total = settings.total_ticks();
    let hold = ((HOLD_SECONDS / dt).round() as u64).max(1);

    let mut held = TickInput::default();
    let mut distance = 0.0;
    let mut stalled = 0;
    let mut resets = 0;

    for i in 0..total {
        // One-shot keys only fire on the tick a new input is chosen
        let input = if i % hold == 0 {
            held = random_input(&mut rng);
            held
        } else {
            TickInput {
                faster: false,
                slower: false,
                reset: false,
                ..held
            }
        };
        if input.reset {
            resets += 1;
        }

        let before = world.player.disk.center();
        tick(&mut world, &input, dt);
        let moved = world.player.disk.center().distance(before);
        distance += moved;
        if input.thrust != Thrust::None && world.move_rate > 0.0 && moved == 0.0 && !input.reset {
            stalled += 1;
        }
    }

    let center = world.player.disk.center();
    RunSummary {
        ticks: world.ticks,
        simulated_seconds: total as f32 * dt,
        final_center: [center.x(), center.y()],
        final_angle: dg::math::wrap_angle(world.player.angle),
        distance_travelled: distance,
        stalled_ticks: stalled,
        resets,
        move_rate: world.move_rate,
        scene_lines: world.scene.lines.len(),
        scene_points: world.scene.points.len(),
        scene_disks: world.scene.disks.len(),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm; the demo is native
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Dg collision demo starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    let summary = run(&settings);
    log::info!(
        "Simulated {} ticks, puck travelled {:.3}",
        summary.ticks,
        summary.distance_travelled
    );

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to encode summary: {e}");
            std::process::exit(1);
        }
    }
}
