//! Runtime configuration
//!
//! Screen geometry arrives from the host at startup and on resize; the
//! remaining fields default from `consts` and exist so tests and alternate
//! difficulty presets can override them. Degenerate setups are rejected here,
//! at construction, never discovered mid-game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration rejected at engine construction
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("screen {width}x{height} is too small to play on")]
    DegenerateScreen { width: f32, height: f32 },

    #[error("gap width {gap_width} leaves no valid placement on a {screen_width} px screen")]
    GapWiderThanScreen { gap_width: f32, screen_width: f32 },

    #[error("gap width {gap_width} is narrower than the character needs ({required})")]
    GapNarrowerThanCharacter { gap_width: f32, required: f32 },
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub gap_width: f32,
    pub gap_margin: f32,
    pub platform_count: usize,
    pub platform_spacing: f32,
    /// Swinging hammer obstacles flanking each gap
    pub hammers_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 360.0,
            screen_height: 640.0,
            gap_width: GAP_WIDTH,
            gap_margin: GAP_MARGIN,
            platform_count: PLATFORM_COUNT,
            platform_spacing: PLATFORM_SPACING,
            hammers_enabled: true,
        }
    }
}

impl Config {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Self::default()
        }
    }

    /// Validate that the generator can always place a passable gap
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width < CHARACTER_WIDTH * 2.0
            || self.screen_height <= CHARACTER_ANCHOR_FROM_BOTTOM
        {
            return Err(ConfigError::DegenerateScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        let required = CHARACTER_WIDTH + GAP_CLEARANCE;
        if self.gap_width < required {
            return Err(ConfigError::GapNarrowerThanCharacter {
                gap_width: self.gap_width,
                required,
            });
        }

        if self.gap_x_range().is_none() {
            return Err(ConfigError::GapWiderThanScreen {
                gap_width: self.gap_width,
                screen_width: self.screen_width,
            });
        }

        Ok(())
    }

    /// Valid `gap_x` placement interval, or None when the screen is too narrow
    pub fn gap_x_range(&self) -> Option<(f32, f32)> {
        let min = self.gap_margin;
        let max = self.screen_width - self.gap_width - self.gap_margin;
        (max > min).then_some((min, max))
    }

    /// The character's fixed vertical screen position
    pub fn character_y(&self) -> f32 {
        self.screen_height - CHARACTER_ANCHOR_FROM_BOTTOM
    }

    /// Clamp a character center X so the bounding box stays on screen
    pub fn clamp_character_x(&self, x: f32) -> f32 {
        let half = CHARACTER_WIDTH / 2.0;
        x.clamp(half, self.screen_width - half)
    }
}
