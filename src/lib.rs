//! Block Breaker - a deterministic brick-breaker simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, levels, game state)
//! - `platform`: Input capture turned into per-tick commands
//! - `persistence`: Key-value storage for the high score and settings
//! - `highscores`: Persisted best score with graceful degradation
//! - `settings`: Player preferences
//! - `game`: Host session tying the simulation to storage

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::HighScore;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants (per-tick units, one tick per frame)
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the paddle's top edge to the bottom of the field
    pub const PADDLE_BOTTOM_OFFSET: f32 = 45.0;
    /// Width multiplier while the enlarge power-up is active
    pub const PADDLE_ENLARGE_FACTOR: f32 = 1.5;
    pub const PADDLE_ENLARGE_TICKS: u32 = 600;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_BASE_SPEED: f32 = 4.0;
    /// Balls this far below the field are gone
    pub const BALL_EXIT_MARGIN: f32 = 50.0;
    /// Smallest magnitude allowed on an axis right after it was reflected
    pub const MIN_BOUNCE_COMPONENT: f32 = 2.0;
    /// A perpendicular component below this after a side bounce is pushed to MIN_BOUNCE_COMPONENT
    pub const ANTI_TRAP_THRESHOLD: f32 = 1.0;
    /// Paddle reflection arc (fractions of π), left edge to right edge
    pub const PADDLE_ARC_START: f32 = 0.2;
    pub const PADDLE_ARC_SPAN: f32 = 0.6;

    /// Brick grid
    pub const BRICK_COLUMNS: u32 = 10;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_CELL_WIDTH: f32 = 80.0;
    pub const BRICK_CELL_HEIGHT: f32 = 30.0;
    pub const BRICK_LEFT: f32 = 10.0;
    pub const BRICK_TOP: f32 = 50.0;
    /// Per-level ball speed increase
    pub const LEVEL_SPEED_STEP: f32 = 0.1;

    /// Power-ups
    pub const POWERUP_DROP_CHANCE: f64 = 0.15;
    pub const POWERUP_HALF_SIZE: f32 = 15.0;
    pub const POWERUP_FALL_SPEED: f32 = 3.0;
    pub const POWERUP_SPIN: f32 = 0.1;

    /// Particles
    pub const HIT_BURST_COUNT: usize = 8;
    pub const HIT_BURST_SPREAD: f32 = 6.0;
    pub const DESTROY_BURST_COUNT: usize = 12;
    pub const DESTROY_BURST_SPREAD: f32 = 8.0;
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    pub const PARTICLE_DECAY: f32 = 0.02;

    /// Run defaults
    pub const INITIAL_LIVES: u32 = 3;
}
