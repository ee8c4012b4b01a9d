//! # Swarm2D - Interactive 2D Particle Formations
//!
//! CPU particle simulation with a small, host-agnostic API: hundreds of
//! point particles bounce around a canvas, collide elastically, and can be
//! pulled into circle or square formations or toward the pointer.
//!
//! Swarm2D is only the simulation core. Windowing, drawing, timers, and
//! parsing of user-typed parameters all belong to the host; the engine just
//! advances state one frame at a time and exposes a particle snapshot to
//! draw from.
//!
//! ## Quick Start
//!
//! ```
//! use swarm2d::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.initialize(800.0, 800.0);
//!
//! // In your frame loop (a 10 ms cadence works well):
//! engine.step(800.0, 800.0);
//!
//! // Forward input events between steps:
//! engine.on_pointer_move(DVec2::new(400.0, 300.0));
//! engine.on_pointer_down();                        // engage the magnet
//! engine.on_multi_click(MouseButton::Left, 2);     // double-click: circle
//!
//! // Draw from the snapshot:
//! for p in engine.particles() {
//!     let _ = (p.position, p.color);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The frame
//!
//! [`Engine::step`] runs a strict sequence over every particle:
//!
//! 1. integrate `position += velocity`
//! 2. reflect off the canvas edges, attenuating by `particle_elasticity`
//! 3. pull toward formation targets (if a shape is active)
//! 4. pull toward the pointer (while a button is held)
//! 5. resolve pairwise elastic collisions (O(n²))
//!
//! ### Formations
//!
//! A double left-click toggles the circle, a double right-click the square;
//! at most one is active at a time ([`Shape`] behind an `Option`). Target
//! layouts come from [`shapes::circle_targets`] and
//! [`shapes::square_targets`] and are recomputed whenever the particle
//! count, shape radius, or (for the square) shape angle changes.
//!
//! ### Configuration
//!
//! Every tunable in [`Config`] has a runtime setter on the engine. Values
//! are not clamped; degenerate settings (elasticity above 1, negative radii)
//! are accepted and simulated as-is. [`Config::validate`] is an opt-in
//! finite-ness check for hosts that want one.
//!
//! ### Determinism
//!
//! [`Engine::with_seed`] makes spawning fully deterministic for tests and
//! recordings; [`Engine::new`] seeds from entropy for interactive use.
//!
//! ## Threading
//!
//! The engine is single-threaded by design: `step()` runs to completion with
//! no internal suspension, and setters/event handlers are meant to be called
//! between steps from the same thread. Wrap it in a mutex (or own it in one
//! task) if your host is multi-threaded.

pub mod collisions;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod particle;
pub mod shapes;
pub mod spawn;

pub use config::Config;
pub use engine::Engine;
pub use error::ConfigError;
pub use glam::{DVec2, Vec3};
pub use input::{ClickTracker, MouseButton};
pub use particle::Particle;
pub use shapes::Shape;
pub use spawn::Spawner;

/// Convenient re-exports for common usage.
///
/// ```
/// use swarm2d::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::engine::Engine;
    pub use crate::error::ConfigError;
    pub use crate::input::{ClickTracker, MouseButton};
    pub use crate::particle::Particle;
    pub use crate::shapes::Shape;
    pub use crate::spawn::Spawner;
    pub use crate::{DVec2, Vec3};
}
