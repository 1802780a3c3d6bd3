//! Frame-delta bookkeeping for the external driver loop
//!
//! The host scheduler (requestAnimationFrame in a browser, any "call me again
//! soon" mechanism elsewhere) hands us a monotonic timestamp each invocation.
//! We normalize the elapsed time against the target frame interval and clamp
//! it, so a stall (hidden tab, GC pause, debugger) can never tunnel the
//! character through a platform or double-fire a score in one step.

use crate::consts::{FRAME_INTERVAL_MS, MAX_DELTA};

/// Converts driver timestamps into clamped, frame-normalized tick deltas.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta for this invocation, in frame units (1.0 = one 60 Hz frame).
    ///
    /// The first call after construction or `reset` reports exactly one frame.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let delta = match self.last_ms {
            Some(last) => ((now_ms - last) / FRAME_INTERVAL_MS) as f32,
            None => 1.0,
        };
        self.last_ms = Some(now_ms);
        delta.clamp(0.0, MAX_DELTA)
    }

    /// Forget the previous timestamp (used across start/restart so the first
    /// frame of a fresh run never sees the dead time spent on the menu).
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_delta_is_one_frame() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(1000.0), 1.0);
    }

    #[test]
    fn test_delta_normalized_to_frame_interval() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        let delta = clock.delta(FRAME_INTERVAL_MS);
        assert!((delta - 1.0).abs() < 1e-4);
        let delta = clock.delta(FRAME_INTERVAL_MS * 1.5);
        assert!((delta - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_stall_clamped() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        // Five seconds in the background must not become 300 frames
        assert_eq!(clock.delta(5000.0), MAX_DELTA);
    }

    #[test]
    fn test_backwards_time_yields_zero() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        assert_eq!(clock.delta(900.0), 0.0);
    }

    #[test]
    fn test_reset_forgets_dead_time() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        clock.reset();
        assert_eq!(clock.delta(10_000.0), 1.0);
    }
}
