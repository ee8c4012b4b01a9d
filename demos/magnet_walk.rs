//! # Magnet Walk Demo
//!
//! Sweeps a held pointer across the canvas and reports how many particles
//! the magnet has gathered near it, exercising the drag/press/release event
//! surface.
//!
//! Run with: `cargo run --example magnet_walk`

use swarm2d::prelude::*;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 800.0;

fn main() {
    println!("=== Swarm2D Magnet Walk ===");

    let mut engine = Engine::new();
    engine.initialize(WIDTH, HEIGHT);
    engine.on_pointer_down();

    // Drag the pointer left to right along the middle of the canvas.
    for leg in 0..8 {
        let x = 100.0 + leg as f64 * 85.0;
        let pointer = DVec2::new(x, HEIGHT / 2.0);
        engine.on_pointer_drag(pointer);

        for _ in 0..150 {
            engine.step(WIDTH, HEIGHT);
        }

        let radius = engine.config().magnet_radius;
        let gathered = engine
            .particles()
            .iter()
            .filter(|p| p.position.distance(pointer) < radius)
            .count();

        println!(
            "pointer at ({:5.0}, {:5.0}) | {:4} particles within the magnet radius",
            pointer.x, pointer.y, gathered
        );
    }

    engine.on_pointer_up();
    println!("released.");
}
