//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Bounded tick deltas only
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionKind, character_aabb, check, hammer_heads};
pub use level::{maintain, populate_window, spawn_platform};
pub use state::{Direction, GameEvent, GameState, GameStatus, Platform};
pub use tick::tick;
