//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (insertion order, compacted once per pass)
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod effects;
pub mod geom;
pub mod level;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{BrickFace, WallBounce};
pub use geom::Rect;
pub use level::{LevelPattern, generate_level, level_speed, random_grid_kind};
pub use snapshot::{Hud, Scene};
pub use state::{
    Ball, Brick, BrickKind, Color, GameEvent, GamePhase, GameState, Paddle, Particle, Powerup,
    PowerupKind,
};
pub use tick::{TickInput, activate_powerup, hit_brick, tick};
