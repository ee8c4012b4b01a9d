//! Pairwise elastic collision resolution.
//!
//! One pass per frame over every unordered pair of particles, O(n²). Two
//! particles collide when their centers are within one diameter
//! (`2 * particle_size`) of each other; colliding pairs exchange the
//! component of their relative velocity along the line of centers, the
//! equal-mass elastic solution.

use crate::particle::Particle;

/// Resolve all pairwise collisions for one frame.
///
/// The scan is an index-based double loop with `j > i`, so each unordered
/// pair is visited exactly once. After particle `i` has been checked against
/// every later partner, its velocity is scaled by `elasticity` once if any of
/// those checks collided — once per pass, not once per collision.
///
/// Exactly coincident particles (`dist² == 0`) are skipped: there is no line
/// of centers to exchange velocity along.
pub fn resolve(particles: &mut [Particle], particle_size: f64, elasticity: f64) {
    let diameter_sq = 4.0 * particle_size * particle_size;

    for i in 0..particles.len() {
        let mut collided = false;

        for j in (i + 1)..particles.len() {
            let diff = particles[i].position - particles[j].position;
            let distance_sq = diff.length_squared();

            if distance_sq > 0.0 && distance_sq <= diameter_sq {
                collided = true;

                let rel_vel = particles[i].velocity - particles[j].velocity;
                let impulse = diff * (rel_vel.dot(diff) / distance_sq);

                particles[i].velocity -= impulse;
                particles[j].velocity += impulse;
            }
        }

        if collided {
            particles[i].velocity *= elasticity;
        }
    }
}
