//! Procedural level window
//!
//! The generator keeps a fixed-size window of platforms ahead of the
//! character: randomized gap placement, randomized hammer phase, eviction out
//! the bottom, top-up above the highest anchor. Run every tick while playing,
//! it guarantees an unbroken forward sequence at any scroll speed.

use rand::Rng;

use crate::config::Config;
use crate::consts::*;
use crate::sim::state::{Direction, GameState, Platform};

/// Spawn one platform anchored at `base_y` with a randomized gap and hammer phase.
pub fn spawn_platform(state: &mut GameState, base_y: f32, config: &Config) -> Platform {
    let gap_x = match config.gap_x_range() {
        Some((min, max)) => state.rng.random_range(min..max),
        // Resize shrank the screen past the configured margins; center the gap
        // rather than wedging the run (validated configs never get here at init).
        None => ((config.screen_width - config.gap_width) / 2.0).max(0.0),
    };

    Platform {
        id: state.next_platform_id(),
        base_y,
        gap_x,
        gap_width: config.gap_width,
        hammer_angle: state
            .rng
            .random_range(-HAMMER_MAX_ANGLE / 2.0..HAMMER_MAX_ANGLE / 2.0),
        hammer_direction: Direction::random(&mut state.rng),
        passed: false,
    }
}

/// Fill an empty window from scratch: first platform a fixed offset above the
/// bottom edge, the rest stacked upward at the configured spacing.
pub fn populate_window(state: &mut GameState, config: &Config) {
    debug_assert!(state.platforms.is_empty());
    for i in 0..config.platform_count {
        let base_y =
            config.screen_height - FIRST_PLATFORM_OFFSET - i as f32 * config.platform_spacing;
        let platform = spawn_platform(state, base_y, config);
        state.platforms.push(platform);
    }
}

/// Per-tick maintenance: advance hammer phases, recycle platforms that
/// scrolled off the bottom, and top the window back up above the highest
/// anchor. The window size is restored before this function returns.
pub fn maintain(state: &mut GameState, config: &Config, delta: f32) {
    for platform in &mut state.platforms {
        platform.hammer_angle +=
            HAMMER_SWING_SPEED * platform.hammer_direction.signum() * delta;
        // Bounce at the amplitude bound; a reflection, not a pendulum. The
        // clamp keeps a large-delta overshoot from latching at the edge.
        if platform.hammer_angle.abs() > HAMMER_MAX_ANGLE {
            platform.hammer_angle = platform
                .hammer_angle
                .clamp(-HAMMER_MAX_ANGLE, HAMMER_MAX_ANGLE);
            platform.hammer_direction = platform.hammer_direction.flipped();
        }
    }

    let evict_below = config.screen_height + EVICT_MARGIN;
    let scroll = state.scroll_offset;
    let before = state.platforms.len();
    state.platforms.retain(|p| p.screen_y(scroll) < evict_below);
    if state.platforms.len() != before {
        log::debug!(
            "recycled {} platform(s) at scroll {:.0}",
            before - state.platforms.len(),
            scroll
        );
    }

    while state.platforms.len() < config.platform_count {
        let highest = state
            .platforms
            .iter()
            .map(|p| p.base_y)
            .fold(f32::INFINITY, f32::min);
        let base_y = if highest.is_finite() {
            highest - config.platform_spacing
        } else {
            config.screen_height - FIRST_PLATFORM_OFFSET - scroll
        };
        let platform = spawn_platform(state, base_y, config);
        state.platforms.push(platform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state(config: &Config) -> GameState {
        let mut state = GameState::new(42, config);
        state.status = crate::sim::state::GameStatus::Playing;
        state
    }

    #[test]
    fn test_generated_gaps_always_traversable() {
        let config = Config::default();
        let mut state = playing_state(&config);
        for i in 0..200 {
            let platform = spawn_platform(&mut state, -200.0 * i as f32, &config);
            assert!(platform.gap_width >= CHARACTER_WIDTH);
            assert!(platform.gap_x >= 0.0);
            assert!(platform.gap_right() <= config.screen_width);
            assert!(!platform.passed);
        }
    }

    #[test]
    fn test_window_size_held_constant() {
        let config = Config::default();
        let mut state = playing_state(&config);
        for _ in 0..2000 {
            state.scroll_offset += SCROLL_SPEED;
            maintain(&mut state, &config, 1.0);
            assert_eq!(state.platforms.len(), config.platform_count);
        }
    }

    #[test]
    fn test_topup_spawns_above_highest() {
        let config = Config::default();
        let mut state = playing_state(&config);
        // Scroll far enough to evict the lowest platform
        state.scroll_offset = EVICT_MARGIN + FIRST_PLATFORM_OFFSET + 1.0;
        let highest_before = state
            .platforms
            .iter()
            .map(|p| p.base_y)
            .fold(f32::INFINITY, f32::min);
        maintain(&mut state, &config, 1.0);
        let highest_after = state
            .platforms
            .iter()
            .map(|p| p.base_y)
            .fold(f32::INFINITY, f32::min);
        assert_eq!(highest_after, highest_before - config.platform_spacing);
    }

    #[test]
    fn test_hammer_bounces_at_amplitude_bound() {
        let config = Config::default();
        let mut state = playing_state(&config);
        state.platforms[0].hammer_angle = HAMMER_MAX_ANGLE - 0.001;
        state.platforms[0].hammer_direction = Direction::Right;
        maintain(&mut state, &config, 2.0);
        assert_eq!(state.platforms[0].hammer_direction, Direction::Left);
        // Next pass swings back down
        let angle = state.platforms[0].hammer_angle;
        maintain(&mut state, &config, 1.0);
        assert!(state.platforms[0].hammer_angle < angle);
    }

    #[test]
    fn test_hammer_phase_bounded_over_time() {
        let config = Config::default();
        let mut state = playing_state(&config);
        for i in 0..10_000 {
            // Alternate clean and laggy deltas
            let delta = if i % 3 == 0 { 2.0 } else { 1.0 };
            maintain(&mut state, &config, delta);
            for platform in &state.platforms {
                assert!(platform.hammer_angle.abs() <= HAMMER_MAX_ANGLE);
            }
        }
    }
}
