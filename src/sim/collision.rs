//! Collision detection
//!
//! Everything is axis-aligned boxes in screen space: the character against
//! the walls, each platform bar (minus its gap), and the swinging hammer
//! heads. Checks run against the same delta-updated geometry the tick
//! commits, never against stale positions.

use glam::Vec2;

use crate::config::Config;
use crate::consts::*;
use crate::sim::state::{GameState, Platform};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Strict overlap; touching edges do not collide
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// What the character hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    PlatformBar,
    Hammer,
}

/// The character's bounding box around its screen-space center
pub fn character_aabb(x: f32, y: f32) -> Aabb {
    Aabb::from_center(
        Vec2::new(x, y),
        Vec2::new(CHARACTER_WIDTH / 2.0, CHARACTER_HEIGHT / 2.0),
    )
}

/// Current head boxes of the hammer pair flanking a platform's gap.
///
/// Left and right hammers hang from pivots just outside the gap edges and
/// swing at mirrored angles; the head box hangs chain-length below the pivot
/// along the current swing direction.
pub fn hammer_heads(platform: &Platform, screen_y: f32) -> [Aabb; 2] {
    let head = |pivot_x: f32, angle: f32| {
        let head_x = pivot_x + angle.sin() * HAMMER_CHAIN_LENGTH;
        let head_top = screen_y + HAMMER_PIVOT_DROP + angle.cos() * HAMMER_CHAIN_LENGTH;
        Aabb {
            min: Vec2::new(head_x - HAMMER_WIDTH / 2.0, head_top),
            max: Vec2::new(head_x + HAMMER_WIDTH / 2.0, head_top + HAMMER_HEIGHT),
        }
    };

    [
        head(platform.gap_x - HAMMER_PIVOT_INSET, platform.hammer_angle),
        head(
            platform.gap_right() + HAMMER_PIVOT_INSET,
            -platform.hammer_angle,
        ),
    ]
}

/// Test the character against walls, platform bars, and hammers, in that
/// order. Returns the first hit, or None when the tick is survivable.
pub fn check(state: &GameState, config: &Config) -> Option<CollisionKind> {
    let character = character_aabb(state.character_x, state.character_y);

    if character.min.x < 0.0 || character.max.x > config.screen_width {
        return Some(CollisionKind::Wall);
    }

    for platform in &state.platforms {
        let top = platform.screen_y(state.scroll_offset);
        let bottom = top + PLATFORM_HEIGHT;

        // Bar: collides at platform height unless fully inside the gap
        if character.max.y > top && character.min.y < bottom {
            let inside_gap =
                character.min.x >= platform.gap_x && character.max.x <= platform.gap_right();
            if !inside_gap {
                return Some(CollisionKind::PlatformBar);
            }
        }

        if config.hammers_enabled {
            for head in hammer_heads(platform, top) {
                if character.intersects(&head) {
                    return Some(CollisionKind::Hammer);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Direction;

    fn bare_platform(gap_x: f32, gap_width: f32, base_y: f32) -> Platform {
        Platform {
            id: 1,
            base_y,
            gap_x,
            gap_width,
            hammer_angle: 0.0,
            hammer_direction: Direction::Right,
            passed: false,
        }
    }

    fn state_with(platforms: Vec<Platform>, config: &Config) -> GameState {
        let mut state = GameState::new(1, config);
        state.platforms = platforms;
        state
    }

    #[test]
    fn test_wall_collision_left_of_screen() {
        let config = Config::default();
        let mut state = state_with(vec![], &config);
        state.character_x = -1.0;
        assert_eq!(check(&state, &config), Some(CollisionKind::Wall));
    }

    #[test]
    fn test_wall_collision_right_of_screen() {
        let config = Config::default();
        let mut state = state_with(vec![], &config);
        state.character_x = config.screen_width - 1.0;
        assert_eq!(check(&state, &config), Some(CollisionKind::Wall));
    }

    #[test]
    fn test_clean_gap_passage() {
        let config = Config {
            hammers_enabled: false,
            ..Config::default()
        };
        // Platform at exactly the character's height, character inside the gap
        let character_y = config.character_y();
        let platform = bare_platform(100.0, 110.0, character_y);
        let mut state = state_with(vec![platform], &config);
        state.character_x = 150.0;
        assert_eq!(check(&state, &config), None);
    }

    #[test]
    fn test_bar_hit_outside_gap() {
        let config = Config {
            hammers_enabled: false,
            ..Config::default()
        };
        let character_y = config.character_y();
        let platform = bare_platform(200.0, 70.0, character_y);
        let mut state = state_with(vec![platform], &config);
        state.character_x = 100.0;
        assert_eq!(check(&state, &config), Some(CollisionKind::PlatformBar));
    }

    #[test]
    fn test_bar_hit_straddling_gap_edge() {
        let config = Config {
            hammers_enabled: false,
            ..Config::default()
        };
        let character_y = config.character_y();
        let platform = bare_platform(100.0, 70.0, character_y);
        let mut state = state_with(vec![platform], &config);
        // Left edge of the box pokes 6 px into the bar
        state.character_x = 100.0 + CHARACTER_WIDTH / 2.0 - 6.0;
        assert_eq!(check(&state, &config), Some(CollisionKind::PlatformBar));
    }

    #[test]
    fn test_no_collision_outside_vertical_band() {
        let config = Config {
            hammers_enabled: false,
            ..Config::default()
        };
        let platform = bare_platform(200.0, 70.0, config.character_y() - 400.0);
        let mut state = state_with(vec![platform], &config);
        state.character_x = 100.0;
        assert_eq!(check(&state, &config), None);
    }

    #[test]
    fn test_hammer_head_hit_in_gap() {
        let config = Config::default();
        let character_y = config.character_y();
        // Hang the platform so the left hammer head sits at character height
        let head_drop = HAMMER_PIVOT_DROP + HAMMER_CHAIN_LENGTH;
        let platform = bare_platform(150.0, 70.0, character_y - head_drop);
        let mut state = state_with(vec![platform], &config);
        // Straight-down hammer head is centered on the pivot X
        state.character_x = 150.0 - HAMMER_PIVOT_INSET;
        assert_eq!(check(&state, &config), Some(CollisionKind::Hammer));
    }

    #[test]
    fn test_hammers_disabled_skips_head_check() {
        let config = Config {
            hammers_enabled: false,
            ..Config::default()
        };
        let character_y = config.character_y();
        let head_drop = HAMMER_PIVOT_DROP + HAMMER_CHAIN_LENGTH;
        let platform = bare_platform(150.0, 70.0, character_y - head_drop);
        let mut state = state_with(vec![platform], &config);
        state.character_x = 150.0 - HAMMER_PIVOT_INSET;
        assert_eq!(check(&state, &config), None);
    }

    #[test]
    fn test_hammer_heads_mirror() {
        let platform = Platform {
            hammer_angle: 0.5,
            ..bare_platform(100.0, 70.0, 0.0)
        };
        let [left, right] = hammer_heads(&platform, 0.0);
        // Swung heads stay at the same height and mirror around the gap center
        assert!((left.min.y - right.min.y).abs() < 1e-4);
        let gap_center = platform.gap_x + platform.gap_width / 2.0;
        let left_off = gap_center - (left.min.x + left.max.x) / 2.0;
        let right_off = (right.min.x + right.max.x) / 2.0 - gap_center;
        assert!((left_off - right_off).abs() < 1e-3);
    }

    #[test]
    fn test_aabb_touching_edges_do_not_collide() {
        let a = Aabb::from_center(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        assert!(!a.intersects(&b));
        let c = Aabb::from_center(Vec2::new(19.0, 0.0), Vec2::splat(10.0));
        assert!(a.intersects(&c));
    }
}
