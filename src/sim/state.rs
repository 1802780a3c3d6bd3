//! Game state and core simulation types
//!
//! The single mutable aggregate lives here. The engine owns it exclusively;
//! everything outside the simulation reads a snapshot and nothing more.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::sim::level;

/// Lifecycle state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for a start input; cosmetic animation only
    Idle,
    /// Physics, generation, and collision all active
    Playing,
    /// Frozen, awaiting a restart input
    GameOver,
}

/// Sign of the lateral acceleration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn signum(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn random(rng: &mut Pcg32) -> Self {
        if rng.random_bool(0.5) {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

/// One scrolling platform with a passable gap and a pair of swinging hammers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    /// Fixed world-space anchor; on-screen position = `base_y + scroll_offset`
    pub base_y: f32,
    /// Left edge of the passable opening
    pub gap_x: f32,
    pub gap_width: f32,
    /// Current swing phase, radians, bouncing within the amplitude bound
    pub hammer_angle: f32,
    pub hammer_direction: Direction,
    /// Set once when the platform scrolls below the character; never unset
    pub passed: bool,
}

impl Platform {
    /// Current on-screen top edge of the bar
    #[inline]
    pub fn screen_y(&self, scroll_offset: f32) -> f32 {
        self.base_y + scroll_offset
    }

    /// Right edge of the passable opening
    #[inline]
    pub fn gap_right(&self) -> f32 {
        self.gap_x + self.gap_width
    }
}

/// One-shot notifications produced by a tick, consumed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A platform was passed; carries the new total score
    Scored(u32),
    /// Collision ended the run
    Died,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Character center, screen space
    pub character_x: f32,
    pub character_y: f32,
    /// Signed lateral speed, clamped to the velocity bound
    pub velocity_x: f32,
    pub direction: Direction,
    /// Display tilt derived from velocity; no physical meaning
    pub rotation_angle: f32,
    /// Cosmetic spin phase, degrees in [0, 360)
    pub propeller_phase: f32,
    /// Accumulated world scroll; monotonically increasing while playing
    pub scroll_offset: f32,
    /// Live forward window, ordered oldest (lowest) first
    pub platforms: Vec<Platform>,
    /// Platforms passed since the run started
    pub score: u32,
    pub status: GameStatus,
    /// Tick counter for logging and diagnostics
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    /// Create an idle state with a fresh platform window
    pub fn new(seed: u64, config: &Config) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            character_x: 0.0,
            character_y: 0.0,
            velocity_x: 0.0,
            direction: Direction::Right,
            rotation_angle: 0.0,
            propeller_phase: 0.0,
            scroll_offset: 0.0,
            platforms: Vec::with_capacity(config.platform_count),
            score: 0,
            status: GameStatus::Idle,
            time_ticks: 0,
            next_id: 1,
        };
        state.reset(config);
        state
    }

    /// Reset every mutable field for a new run; the RNG stream continues so
    /// each run gets a fresh layout while the session stays reproducible.
    pub fn reset(&mut self, config: &Config) {
        self.character_x = config.screen_width / 2.0;
        self.character_y = config.character_y();
        self.velocity_x = 0.0;
        self.direction = Direction::random(&mut self.rng);
        self.rotation_angle = 0.0;
        self.propeller_phase = 0.0;
        self.scroll_offset = 0.0;
        self.score = 0;
        self.status = GameStatus::Idle;
        self.time_ticks = 0;
        self.platforms.clear();
        level::populate_window(self, config);
    }

    /// Allocate a platform ID; unique for the lifetime of the state
    pub fn next_platform_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
