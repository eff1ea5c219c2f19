//! Per-frame simulation step
//!
//! One call per rendered frame, taking the measured delta time. The order
//! inside a step is fixed: integrate, bounds, advance pillars, spawn, score,
//! collide. Scoring runs before collision so a frame that does both on the
//! same pillar still counts the pass.

use glam::Vec3;

use super::collision::sphere_intersects_aabb;
use super::state::{GameState, Phase};

/// Advance the simulation by `dt` seconds.
///
/// Velocity integrates before position (semi-implicit Euler). A bounds exit
/// ends the step immediately: pillars do not move on that frame. Callers are
/// expected to clamp pathological `dt` values; the step itself only assumes
/// `dt` is non-negative.
pub fn step(state: &mut GameState, dt: f32) {
    if state.phase != Phase::Running {
        return;
    }

    state.velocity += state.tuning.gravity * dt;
    state.position += state.velocity * dt;

    // Strict comparisons: resting exactly on a bound is still alive
    if state.position < state.tuning.lower_bound || state.position > state.tuning.upper_bound {
        state.phase = Phase::Dead;
        return;
    }

    state.pillars.advance(dt, state.tuning.pillar_speed);
    state.pillars.maybe_spawn(&state.tuning, &mut state.rng);

    state.score += state
        .pillars
        .mark_passed(state.tuning.player_x, state.tuning.pillar_width);

    let center = Vec3::new(state.tuning.player_x, state.position, 0.0);
    for pillar in state.pillars.pillars() {
        for region in pillar.solid_regions(&state.tuning) {
            if sphere_intersects_aabb(center, state.tuning.player_radius, &region) {
                state.phase = Phase::Dead;
                return;
            }
        }
    }
}
