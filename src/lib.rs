//! Sky Hopper - a gravity-reversal copter arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, level window, collisions, state)
//! - `engine`: Lifecycle state machine and collaborator wiring
//! - `clock`: Frame-delta normalization for the external driver loop
//! - `audio`: Fire-and-forget sound event sink
//! - `persistence`: High score storage abstraction
//!
//! Rendering, input capture, and the scheduling loop live outside this crate;
//! they call `start`/`tap_or_reverse`/`restart`/`advance` and read the
//! published state snapshot once per tick.

pub mod audio;
pub mod clock;
pub mod config;
pub mod engine;
pub mod persistence;
pub mod sim;

pub use clock::FrameClock;
pub use config::{Config, ConfigError};
pub use engine::Engine;

/// Game tuning constants
///
/// Spacing, speeds, and box sizes directly set the difficulty curve; they are
/// named here rather than inlined so the sim stays tunable and testable.
pub mod consts {
    /// Lateral acceleration applied each tick, px per normalized tick squared
    pub const LATERAL_ACCEL: f32 = 0.3;
    /// Velocity clamp, px per normalized tick
    pub const MAX_VELOCITY_X: f32 = 6.0;
    /// Constant world scroll, px per normalized tick
    pub const SCROLL_SPEED: f32 = 3.0;
    /// Velocity multiplier applied on a direction reversal
    pub const TAP_DAMPING: f32 = 0.3;
    /// Display tilt at full lateral speed, degrees
    pub const ROTATION_SCALE: f32 = 20.0;
    /// Propeller spin, degrees per normalized tick
    pub const PROPELLER_SPIN_RATE: f32 = 30.0;

    /// Character bounding box
    pub const CHARACTER_WIDTH: f32 = 32.0;
    pub const CHARACTER_HEIGHT: f32 = 50.0;
    /// Character's fixed screen height above the bottom edge
    pub const CHARACTER_ANCHOR_FROM_BOTTOM: f32 = 150.0;

    /// Vertical distance between consecutive platforms
    pub const PLATFORM_SPACING: f32 = 200.0;
    /// Live platform window size
    pub const PLATFORM_COUNT: usize = 6;
    /// Platform bar thickness
    pub const PLATFORM_HEIGHT: f32 = 24.0;
    /// First platform spawns this far above the bottom edge
    pub const FIRST_PLATFORM_OFFSET: f32 = 300.0;
    /// Passable opening width
    pub const GAP_WIDTH: f32 = 70.0;
    /// Gap placement margin from either wall
    pub const GAP_MARGIN: f32 = 60.0;
    /// Required slack between character width and gap width
    pub const GAP_CLEARANCE: f32 = 8.0;
    /// Platforms are recycled once this far below the bottom edge
    pub const EVICT_MARGIN: f32 = 100.0;

    /// Hammer swing rate, radians per normalized tick
    pub const HAMMER_SWING_SPEED: f32 = 0.04;
    /// Swing amplitude bound, radians
    pub const HAMMER_MAX_ANGLE: f32 = 0.8;
    /// Pivot-to-head chain length
    pub const HAMMER_CHAIN_LENGTH: f32 = 50.0;
    /// Hammer head bounding box
    pub const HAMMER_WIDTH: f32 = 24.0;
    pub const HAMMER_HEIGHT: f32 = 36.0;
    /// Pivot offset outward from the gap edge
    pub const HAMMER_PIVOT_INSET: f32 = 12.0;
    /// Pivot offset below the platform top edge
    pub const HAMMER_PIVOT_DROP: f32 = 24.0;

    /// Target frame interval the tick delta is normalized against
    pub const FRAME_INTERVAL_MS: f64 = 16.67;
    /// Delta clamp: a stalled driver may never advance more than this many frames
    pub const MAX_DELTA: f32 = 2.0;
    /// Ticks to settle after a restart before physics resumes
    pub const RESTART_SETTLE_DELAY: f32 = 6.0;
}

/// Wrap an accumulating angle into [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!((wrap_degrees(365.0) - 5.0).abs() < 1e-4);
        assert!((wrap_degrees(-30.0) - 330.0).abs() < 1e-4);
    }
}
