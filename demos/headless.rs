//! # Headless Demo
//!
//! Drives the engine the way a windowed host would — fixed 10 ms cadence,
//! double-click formation toggles — but prints scene statistics instead of
//! drawing.
//!
//! Run with: `cargo run --example headless [particle_count]`

use std::thread;
use std::time::Duration;

use swarm2d::prelude::*;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 800.0;
const FRAME: Duration = Duration::from_millis(10);

fn main() {
    let count: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(500);

    println!("=== Swarm2D Headless Demo ===");
    println!("Particles: {}", count);
    println!("Canvas: {}x{}", WIDTH, HEIGHT);
    println!();

    let mut engine = Engine::new().with_config(Config {
        particle_count: count,
        ..Config::default()
    });
    engine.initialize(WIDTH, HEIGHT);

    // Phase 1: free flight.
    run_phase(&mut engine, "free flight", 200);

    // Phase 2: double-left-click pulls everyone into a circle.
    engine.on_multi_click(MouseButton::Left, 2);
    run_phase(&mut engine, "circle formation", 400);

    // Phase 3: swap to a rotated square.
    engine.set_shape_angle(std::f64::consts::FRAC_PI_4);
    engine.on_multi_click(MouseButton::Right, 2);
    run_phase(&mut engine, "square formation", 400);

    // Phase 4: hold the pointer down at the center, magnet on.
    engine.on_multi_click(MouseButton::Right, 2);
    engine.on_pointer_move(DVec2::new(WIDTH / 2.0, HEIGHT / 2.0));
    engine.on_pointer_down();
    run_phase(&mut engine, "magnet", 200);
    engine.on_pointer_up();

    println!("done.");
}

fn run_phase(engine: &mut Engine, name: &str, frames: usize) {
    for _ in 0..frames {
        engine.step(WIDTH, HEIGHT);
        thread::sleep(FRAME);
    }

    let center = DVec2::new(WIDTH / 2.0, HEIGHT / 2.0);
    let mean_dist = engine
        .particles()
        .iter()
        .map(|p| p.position.distance(center))
        .sum::<f64>()
        / engine.particles().len() as f64;
    let mean_speed = engine
        .particles()
        .iter()
        .map(|p| p.velocity.length())
        .sum::<f64>()
        / engine.particles().len() as f64;

    println!(
        "{:>18}: {} frames | mean dist from center {:7.2} | mean speed {:6.3}",
        name,
        frames,
        mean_dist,
        mean_speed
    );
}
