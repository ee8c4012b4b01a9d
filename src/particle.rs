//! The particle type owned by the simulation engine.

use glam::{DVec2, Vec3};

/// One point particle in the simulation.
///
/// Particles are plain data: the engine integrates `position` from `velocity`
/// every frame, and `target` holds the spot the particle is pulled toward
/// while a formation is active.
///
/// `color` is a render-only seed (three channels in `[0, 1)`). The engine
/// carries it but never reads it; it stays stable for the particle's lifetime
/// so hosts can use it as a per-particle identity when drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current position in canvas pixels.
    pub position: DVec2,
    /// Velocity in pixels per frame.
    pub velocity: DVec2,
    /// Assigned spot within the active formation, if any.
    pub target: DVec2,
    /// Render-only color seed, stable per particle.
    pub color: Vec3,
}

impl Particle {
    /// Create a particle at rest at the origin.
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            target: DVec2::ZERO,
            color: Vec3::ZERO,
        }
    }

    /// Advance the position by one frame's velocity.
    #[inline]
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new()
    }
}
