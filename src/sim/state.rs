//! Game state and core simulation types
//!
//! `GameState` is the simulation context: it owns every entity collection and
//! both RNG streams, and is handed explicitly to every operation.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::{Rect, with_speed};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// RGBA color; alpha in 0-1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    /// Opaque color from a 0xRRGGBB literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Wall bounce sparks
pub const WALL_HIT_COLOR: Color = Color::hex(0xcbd5e0);
/// Paddle bounce sparks
pub const PADDLE_HIT_COLOR: Color = Color::hex(0x48bb78);

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Speed at level 1; level scaling multiplies this
    pub base_speed: f32,
}

impl Ball {
    /// Ball at the field center heading up, left (`dir_x < 0`) or right
    pub fn spawn(id: u32, dir_x: f32, speed: f32) -> Self {
        let dir_x = if dir_x < 0.0 { -1.0 } else { 1.0 };
        Self {
            id,
            pos: field_center(),
            vel: with_speed(Vec2::new(dir_x, -1.0), speed),
            radius: BALL_RADIUS,
            base_speed: BALL_BASE_SPEED,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }
}

/// Center of the play field
pub fn field_center() -> Vec2 {
    Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0)
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal movement per tick while a direction is held
    pub speed: f32,
    /// Width restored when the enlarge power-up expires
    pub normal_width: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                (FIELD_WIDTH - PADDLE_WIDTH) / 2.0,
                FIELD_HEIGHT - PADDLE_BOTTOM_OFFSET,
            ),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            normal_width: PADDLE_WIDTH,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Keep the paddle fully inside the field horizontally
    pub fn clamp_to_field(&mut self) {
        self.pos.x = self.pos.x.clamp(0.0, (FIELD_WIDTH - self.width).max(0.0));
    }

    pub fn reset_width(&mut self) {
        self.width = self.normal_width;
    }
}

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    #[default]
    Normal,
    Strong,
    /// Cannot be destroyed, doesn't count for level clear
    Unbreakable,
}

impl BrickKind {
    /// Hits needed to destroy; unbreakable bricks carry a sentinel that is never decremented
    pub fn hits(self) -> u8 {
        match self {
            BrickKind::Normal => 1,
            BrickKind::Strong => 2,
            BrickKind::Unbreakable => u8::MAX,
        }
    }

    /// Score per successful hit
    pub fn points(self) -> u64 {
        match self {
            BrickKind::Normal => 10,
            BrickKind::Strong => 20,
            BrickKind::Unbreakable => 0,
        }
    }

    pub fn base_color(self) -> Color {
        match self {
            BrickKind::Normal => Color::hex(0x4299e1),
            BrickKind::Strong => Color::hex(0x9f7aea),
            BrickKind::Unbreakable => Color::hex(0xa0aec0),
        }
    }

    pub fn is_breakable(self) -> bool {
        self != BrickKind::Unbreakable
    }
}

/// A brick entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
    pub kind: BrickKind,
    pub hits: u8,
    pub max_hits: u8,
    pub color: Color,
}

impl Brick {
    /// Brick occupying grid cell (`col`, `row`)
    pub fn new(id: u32, col: u32, row: u32, kind: BrickKind) -> Self {
        let hits = kind.hits();
        Self {
            id,
            rect: Rect::new(
                col as f32 * BRICK_CELL_WIDTH + BRICK_LEFT,
                row as f32 * BRICK_CELL_HEIGHT + BRICK_TOP,
                BRICK_WIDTH,
                BRICK_HEIGHT,
            ),
            kind,
            hits,
            max_hits: hits,
            color: kind.base_color(),
        }
    }

    /// Breakable brick with no hits left, waiting to be compacted out
    pub fn is_destroyed(&self) -> bool {
        self.kind.is_breakable() && self.hits == 0
    }

    /// Fade the base color by the fraction of hits left
    pub fn recolor(&mut self) {
        let alpha = self.hits as f32 / self.max_hits.max(1) as f32;
        self.color = self.kind.base_color().with_alpha(alpha);
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    EnlargePaddle,
    MultiBall,
    ExtraLife,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [
        PowerupKind::EnlargePaddle,
        PowerupKind::MultiBall,
        PowerupKind::ExtraLife,
    ];

    pub fn color(self) -> Color {
        match self {
            PowerupKind::EnlargePaddle => Color::hex(0x48bb78),
            PowerupKind::MultiBall => Color::hex(0x4299e1),
            PowerupKind::ExtraLife => Color::hex(0xf56565),
        }
    }
}

/// A falling power-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Powerup {
    pub id: u32,
    pub kind: PowerupKind,
    /// Center
    pub pos: Vec2,
    pub vel: Vec2,
    /// Cosmetic spin (radians)
    pub rotation: f32,
}

impl Powerup {
    pub fn new(id: u32, kind: PowerupKind, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            vel: Vec2::new(0.0, POWERUP_FALL_SPEED),
            rotation: 0.0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, Vec2::splat(POWERUP_HALF_SIZE))
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// 1 at spawn, removed at 0
    pub life: f32,
}

/// Something that happened during a tick (for hosts: logging, persistence, audio)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallHit { ball_id: u32 },
    PaddleHit { ball_id: u32 },
    BrickHit { brick_id: u32, kind: BrickKind },
    BrickDestroyed { brick_id: u32, kind: BrickKind },
    PowerupSpawned { kind: PowerupKind },
    PowerupCaught { kind: PowerupKind },
    LifeLost { lives_left: u32 },
    LevelComplete { next_level: u32 },
    GameOver { score: u64, new_high_score: bool },
    Restarted,
}

/// Default particle cap
pub const MAX_PARTICLES: usize = 256;

/// Salt separating the cosmetic RNG stream from the gameplay stream
const FX_STREAM_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current level (1-based)
    pub level: u32,
    pub lives: u32,
    pub score: u64,
    /// Best score known to this session (loaded by the host)
    pub high_score: u64,
    pub phase: GamePhase,
    /// Ticks left on the enlarge-paddle effect (0 = inactive)
    pub powerup_timer: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    /// Active balls (the first one seeds multi-ball)
    pub balls: Vec<Ball>,
    pub bricks: Vec<Brick>,
    pub powerups: Vec<Powerup>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Cosmetic cap; bursts stop spawning at this count
    pub max_particles: usize,
    /// Events recorded during the last tick
    pub events: Vec<GameEvent>,
    /// Gameplay randomness (drops, multi-ball angles, random levels, serve direction)
    pub rng: Pcg32,
    /// Cosmetic randomness (particles), kept apart so effects never shift gameplay
    pub fx_rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new run at level 1 with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            level: 1,
            lives: INITIAL_LIVES,
            score: 0,
            high_score: 0,
            phase: GamePhase::Playing,
            powerup_timer: 0,
            time_ticks: 0,
            paddle: Paddle::default(),
            balls: Vec::new(),
            bricks: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            max_particles: MAX_PARTICLES,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            fx_rng: Pcg32::seed_from_u64(seed ^ FX_STREAM_SALT),
            next_id: 1,
        };

        state.reset_run();

        state
    }

    /// Create a new run that already knows the persisted high score
    pub fn with_high_score(seed: u64, high_score: u64) -> Self {
        let mut state = Self::new(seed);
        state.high_score = high_score;
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset score, lives, level and every entity; level 1 is rebuilt
    ///
    /// The high score and RNG streams carry over.
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.lives = INITIAL_LIVES;
        self.level = 1;
        self.phase = GamePhase::Playing;
        self.powerup_timer = 0;
        self.paddle = Paddle::default();
        self.balls.clear();
        self.powerups.clear();
        self.particles.clear();

        let id = self.next_entity_id();
        self.balls.push(Ball::spawn(id, 1.0, BALL_BASE_SPEED));

        super::level::start_level(self);
    }

    /// Number of bricks still required for the level clear
    pub fn breakable_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.kind.is_breakable()).count()
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
