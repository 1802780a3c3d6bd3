//! Per-tick simulation update
//!
//! One call advances the world by one bounded delta: integrate lateral
//! motion, scroll the world, run window maintenance, score gap passages,
//! then test collisions - all against the same updated geometry. The tick
//! either commits a full new state or ends the run; there is no partial
//! failure path.

use crate::config::Config;
use crate::consts::*;
use crate::sim::collision;
use crate::sim::level;
use crate::sim::state::{GameEvent, GameState, GameStatus};
use crate::wrap_degrees;

/// Advance the simulation by one tick while playing.
///
/// Deltas are in frame units (1.0 = one 60 Hz frame) and are clamped here as
/// a final guard, so no caller can tunnel the character through a platform.
/// Returns the one-shot events the tick produced, in order.
pub fn tick(state: &mut GameState, config: &Config, delta: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.status != GameStatus::Playing {
        return events;
    }

    let delta = delta.clamp(0.0, MAX_DELTA);
    state.time_ticks += 1;

    // Kinematics
    state.propeller_phase = wrap_degrees(state.propeller_phase + PROPELLER_SPIN_RATE * delta);
    state.velocity_x = (state.velocity_x + LATERAL_ACCEL * state.direction.signum() * delta)
        .clamp(-MAX_VELOCITY_X, MAX_VELOCITY_X);
    state.character_x += state.velocity_x * delta;
    state.rotation_angle = state.velocity_x / MAX_VELOCITY_X * ROTATION_SCALE;
    state.scroll_offset += SCROLL_SPEED * delta;

    // Level window upkeep with the new scroll committed
    level::maintain(state, config, delta);

    // Scoring: a platform scores once, the instant its top edge scrolls below
    // the character. Gap geometry only; hammers never factor in.
    let scroll = state.scroll_offset;
    let character_y = state.character_y;
    for platform in &mut state.platforms {
        if !platform.passed && platform.screen_y(scroll) > character_y {
            platform.passed = true;
            state.score += 1;
            events.push(GameEvent::Scored(state.score));
        }
    }

    // Collision against the geometry committed above
    if let Some(kind) = collision::check(state, config) {
        log::info!(
            "run over: {:?} at tick {} with score {}",
            kind,
            state.time_ticks,
            state.score
        );
        state.status = GameStatus::GameOver;
        events.push(GameEvent::Died);
    }

    events
}
