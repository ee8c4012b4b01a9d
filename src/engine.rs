//! The simulation engine.
//!
//! [`Engine`] owns the particle collection and configuration and advances the
//! whole scene one frame at a time. The host is expected to:
//!
//! 1. call [`Engine::initialize`] once (and again for a restart),
//! 2. call [`Engine::step`] on a fixed cadence,
//! 3. forward pointer and click events between steps,
//! 4. push validated parameter values through the setters.
//!
//! A step is a strict sequence over the full collection: integrate positions,
//! reflect off the canvas edges, pull toward the active formation, pull
//! toward a held pointer, then resolve pairwise collisions. Everything is
//! synchronous and bounded (O(n²) in the particle count); the engine has no
//! internal threads or suspension points, so hosts sharing it across threads
//! must serialize all calls themselves.

use glam::DVec2;

use crate::collisions;
use crate::config::Config;
use crate::input::MouseButton;
use crate::particle::Particle;
use crate::shapes::{self, Shape};
use crate::spawn::Spawner;

/// Interactive 2D particle simulation.
pub struct Engine {
    config: Config,
    particles: Vec<Particle>,
    spawner: Spawner,
    /// Canvas size from the most recent `initialize`/`step` call.
    bounds: DVec2,
    /// Last reported pointer position. Starts at infinity so the magnet
    /// cannot fire before the pointer has ever moved.
    pointer: DVec2,
    magnet_active: bool,
    shape: Option<Shape>,
}

impl Engine {
    /// Create an engine with default configuration and an entropy-seeded
    /// particle spawner.
    pub fn new() -> Self {
        Self::with_spawner(Spawner::from_entropy())
    }

    /// Create an engine whose particle spawning is fully deterministic.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_spawner(Spawner::from_seed(seed))
    }

    fn with_spawner(spawner: Spawner) -> Self {
        Self {
            config: Config::default(),
            particles: Vec::new(),
            spawner,
            bounds: DVec2::ZERO,
            pointer: DVec2::INFINITY,
            magnet_active: false,
            shape: None,
        }
    }

    /// Replace the whole configuration before the first `initialize`.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    // ========== Lifecycle ==========

    /// Generate all particles and reset interaction state.
    ///
    /// Clears any active formation and magnet, then spawns
    /// `config.particle_count` fresh particles over the given canvas. Safe to
    /// call repeatedly; each call re-randomizes the scene.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.bounds = DVec2::new(width, height);
        self.magnet_active = false;
        self.shape = None;

        self.particles.clear();
        let starting_velocity = self.config.starting_velocity;
        for _ in 0..self.config.particle_count {
            self.particles
                .push(self.spawner.particle(width, height, starting_velocity));
        }

        log::debug!(
            "initialized {} particles over {}x{}",
            self.particles.len(),
            width,
            height
        );
    }

    /// Advance the simulation by one frame.
    ///
    /// The canvas size is supplied per frame so hosts with resizable canvases
    /// need no extra plumbing; particles end the step inside
    /// `[0, width - 1] x [0, height - 1]`.
    pub fn step(&mut self, width: f64, height: f64) {
        self.bounds = DVec2::new(width, height);

        self.integrate_and_reflect(width, height);

        if self.shape.is_some() {
            self.apply_shape_attraction();
        }

        if self.magnet_active {
            self.apply_magnet();
        }

        if self.config.collisions_enabled {
            collisions::resolve(
                &mut self.particles,
                self.config.particle_size,
                self.config.particle_elasticity,
            );
        }
    }

    // ========== Frame phases ==========

    /// Apply velocities and bounce off the canvas edges.
    ///
    /// Each axis reflects independently: an out-of-range coordinate is
    /// clamped back into `[0, limit-1]` and that axis's velocity is negated
    /// and attenuated by `particle_elasticity`.
    fn integrate_and_reflect(&mut self, width: f64, height: f64) {
        let elasticity = self.config.particle_elasticity;

        for p in &mut self.particles {
            p.integrate();

            // max-then-min rather than `clamp`: a sub-pixel canvas makes the
            // range empty, and `f64::clamp` would panic on it.
            if p.position.x > width - 1.0 || p.position.x < 0.0 {
                p.position.x = p.position.x.max(0.0).min(width - 1.0);
                p.velocity.x *= -elasticity;
            }

            if p.position.y > height - 1.0 || p.position.y < 0.0 {
                p.position.y = p.position.y.max(0.0).min(height - 1.0);
                p.velocity.y *= -elasticity;
            }
        }
    }

    /// Pull each particle toward its formation target.
    ///
    /// The desired velocity points at the target with magnitude
    /// `shape_force / dist^(2*shape_exponent)`; each frame the particle's
    /// velocity moves a `shape_elasticity` fraction of the way toward it, a
    /// first-order low-pass filter on the correction.
    fn apply_shape_attraction(&mut self) {
        let force = self.config.shape_force;
        let elasticity = self.config.shape_elasticity;
        let exponent = self.config.shape_exponent;

        for p in &mut self.particles {
            let diff = p.target - p.position;
            let desired = diff * (force / diff.length_squared().powf(exponent));
            p.velocity += (desired - p.velocity) * elasticity;
        }
    }

    /// Pull particles near the pointer toward it.
    ///
    /// Constant-magnitude attraction: inside `magnet_radius` (strict
    /// squared-distance test) every particle gains a `magnet_force` impulse
    /// toward the pointer, regardless of how close it already is.
    fn apply_magnet(&mut self) {
        let radius_sq = self.config.magnet_radius * self.config.magnet_radius;
        let force = self.config.magnet_force;
        let pointer = self.pointer;

        for p in &mut self.particles {
            let diff = pointer - p.position;
            let distance_sq = diff.length_squared();

            if distance_sq < radius_sq {
                p.velocity += diff * (force / distance_sq.sqrt());
            }
        }
    }

    /// Recompute every particle's formation target for the active shape.
    fn regenerate_targets(&mut self) {
        let center = self.bounds * 0.5;
        let targets = match self.shape {
            Some(Shape::Circle) => shapes::circle_targets(
                self.particles.len(),
                self.config.shape_radius,
                center,
            ),
            Some(Shape::Square) => shapes::square_targets(
                self.particles.len(),
                self.config.shape_radius,
                self.config.shape_angle,
                center,
            ),
            None => return,
        };

        for (p, target) in self.particles.iter_mut().zip(targets) {
            p.target = target;
        }
    }

    // ========== Event handlers ==========

    /// Record the pointer position.
    pub fn on_pointer_move(&mut self, position: DVec2) {
        self.pointer = position;
    }

    /// Record the pointer position while a button is held.
    pub fn on_pointer_drag(&mut self, position: DVec2) {
        self.pointer = position;
    }

    /// Engage the magnet.
    pub fn on_pointer_down(&mut self) {
        self.magnet_active = true;
    }

    /// Release the magnet.
    pub fn on_pointer_up(&mut self) {
        self.magnet_active = false;
    }

    /// React to a click of the given multiplicity.
    ///
    /// Only even multiplicities (double, quadruple, ...) act: left toggles
    /// the circle formation, right toggles the square, each clearing the
    /// other. Turning a formation on assigns fresh targets immediately.
    pub fn on_multi_click(&mut self, button: MouseButton, clicks: u32) {
        if clicks == 0 || clicks % 2 != 0 {
            return;
        }

        match button {
            MouseButton::Left => {
                self.shape = match self.shape {
                    Some(Shape::Circle) => None,
                    _ => Some(Shape::Circle),
                };
            }
            MouseButton::Right => {
                self.shape = match self.shape {
                    Some(Shape::Square) => None,
                    _ => Some(Shape::Square),
                };
            }
            MouseButton::Middle => return,
        }

        log::debug!("formation toggled to {:?}", self.shape);
        self.regenerate_targets();
    }

    // ========== Configuration setters ==========

    /// Set the formation radius, reshaping any active formation.
    pub fn set_shape_radius(&mut self, shape_radius: f64) {
        self.config.shape_radius = shape_radius;
        self.regenerate_targets();
    }

    /// Set the square formation's rotation angle.
    ///
    /// Only the square needs new targets; the circle is rotation-invariant.
    pub fn set_shape_angle(&mut self, shape_angle: f64) {
        self.config.shape_angle = shape_angle;
        if self.shape == Some(Shape::Square) {
            self.regenerate_targets();
        }
    }

    /// Set the shape-attraction force magnitude.
    pub fn set_shape_force(&mut self, shape_force: f64) {
        self.config.shape_force = shape_force;
    }

    /// Set the fraction of the shape correction applied per frame.
    pub fn set_shape_elasticity(&mut self, shape_elasticity: f64) {
        self.config.shape_elasticity = shape_elasticity;
    }

    /// Set the distance-falloff exponent of the shape force.
    pub fn set_shape_exponent(&mut self, shape_exponent: f64) {
        self.config.shape_exponent = shape_exponent;
    }

    /// Set the magnet's radius of effect.
    pub fn set_magnet_radius(&mut self, magnet_radius: f64) {
        self.config.magnet_radius = magnet_radius;
    }

    /// Set the magnet's attraction force.
    pub fn set_magnet_force(&mut self, magnet_force: f64) {
        self.config.magnet_force = magnet_force;
    }

    /// Grow or trim the particle collection to `count`.
    ///
    /// Growth appends freshly spawned particles; shrinking removes the oldest
    /// particles first. Any active formation is re-laid-out for the new
    /// count.
    pub fn set_particle_count(&mut self, count: usize) {
        self.config.particle_count = count;

        let (width, height) = (self.bounds.x, self.bounds.y);
        let starting_velocity = self.config.starting_velocity;
        while self.particles.len() < count {
            self.particles
                .push(self.spawner.particle(width, height, starting_velocity));
        }

        if self.particles.len() > count {
            let excess = self.particles.len() - count;
            self.particles.drain(0..excess);
        }

        log::debug!("particle count set to {}", count);
        self.regenerate_targets();
    }

    /// Set the particle radius used for collisions.
    pub fn set_particle_size(&mut self, particle_size: f64) {
        self.config.particle_size = particle_size;
    }

    /// Set the restitution factor for bounces and collisions.
    pub fn set_particle_elasticity(&mut self, particle_elasticity: f64) {
        self.config.particle_elasticity = particle_elasticity;
    }

    /// Set the spawn-time velocity bound for future particles.
    pub fn set_starting_velocity(&mut self, starting_velocity: f64) {
        self.config.starting_velocity = starting_velocity;
    }

    /// Enable or disable pairwise collision resolution.
    pub fn set_collisions_enabled(&mut self, collisions_enabled: bool) {
        self.config.collisions_enabled = collisions_enabled;
    }

    // ========== Accessors ==========

    /// Snapshot of all particles, in insertion order, for rendering.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The active formation, if any.
    #[inline]
    pub fn shape(&self) -> Option<Shape> {
        self.shape
    }

    /// Last reported pointer position.
    #[inline]
    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    /// Whether the magnet is currently engaged.
    #[inline]
    pub fn magnet_active(&self) -> bool {
        self.magnet_active
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
