//! Simulation tunables.
//!
//! Every field of [`Config`] can be changed at runtime through the engine's
//! setters without recreating the particle collection (particle count being
//! the one that grows or trims it). None of the values are clamped: the
//! engine deliberately accepts physically degenerate settings — an
//! elasticity above 1 injects energy on every bounce, a negative radius
//! turns shapes inside out — because exploring those regimes is part of the
//! simulator's appeal. Hosts that want a sanity check can call
//! [`Config::validate`] before applying user input.

use crate::error::ConfigError;

/// All user-controllable simulation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Radius of the circle formation / half-side of the square formation.
    pub shape_radius: f64,
    /// Rotation in radians applied to the square formation.
    pub shape_angle: f64,
    /// Magnitude of the shape-attraction velocity correction.
    pub shape_force: f64,
    /// Fraction of the velocity correction applied per frame (0..1).
    pub shape_elasticity: f64,
    /// Exponent controlling how distance weakens the shape force.
    pub shape_exponent: f64,
    /// Radius within which the pointer magnet acts.
    pub magnet_radius: f64,
    /// Magnitude of the magnet attraction.
    pub magnet_force: f64,
    /// Number of particles in the scene.
    pub particle_count: usize,
    /// Particle radius used for collision detection (and rendering).
    pub particle_size: f64,
    /// Velocity retained after a bounce or collision (1 = fully elastic).
    pub particle_elasticity: f64,
    /// Maximum magnitude of each velocity component at spawn.
    pub starting_velocity: f64,
    /// Whether pairwise collision resolution runs each frame.
    pub collisions_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shape_radius: 300.0,
            shape_angle: 0.0,
            shape_force: 1.2,
            shape_elasticity: 0.03,
            shape_exponent: 0.2,
            magnet_radius: 100.0,
            magnet_force: 0.3,
            particle_count: 500,
            particle_size: 1.0,
            particle_elasticity: 0.999,
            starting_velocity: 1.0,
            collisions_enabled: true,
        }
    }
}

impl Config {
    /// Check that every numeric field is finite.
    ///
    /// Non-finite values would poison every position and velocity they touch,
    /// so they are the one thing worth rejecting up front. Finite but
    /// physically nonsensical values pass on purpose.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("shape_radius", self.shape_radius),
            ("shape_angle", self.shape_angle),
            ("shape_force", self.shape_force),
            ("shape_elasticity", self.shape_elasticity),
            ("shape_exponent", self.shape_exponent),
            ("magnet_radius", self.magnet_radius),
            ("magnet_force", self.magnet_force),
            ("particle_size", self.particle_size),
            ("particle_elasticity", self.particle_elasticity),
            ("starting_velocity", self.starting_velocity),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field: name, value });
            }
        }

        Ok(())
    }
}
