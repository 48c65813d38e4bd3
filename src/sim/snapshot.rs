//! Immutable per-frame view of the simulation for renderers and HUDs

use glam::Vec2;
use serde::Serialize;

use super::geom::Rect;
use super::state::{Color, GamePhase, GameState, PowerupKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallSprite {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrickSprite {
    pub rect: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerupSprite {
    pub center: Vec2,
    pub kind: PowerupKind,
    pub rotation: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleSprite {
    pub pos: Vec2,
    pub color: Color,
    /// Doubles as opacity
    pub life: f32,
}

/// Text values for the HUD and the game-over overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub high_score: u64,
    pub phase: GamePhase,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub paddle: Rect,
    /// Enlarge effect active (renderers outline the paddle)
    pub paddle_powered: bool,
    pub balls: Vec<BallSprite>,
    pub bricks: Vec<BrickSprite>,
    pub powerups: Vec<PowerupSprite>,
    pub particles: Vec<ParticleSprite>,
    pub hud: Hud,
}

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        Self {
            paddle: state.paddle.rect(),
            paddle_powered: state.powerup_timer > 0,
            balls: state
                .balls
                .iter()
                .map(|b| BallSprite {
                    center: b.pos,
                    radius: b.radius,
                })
                .collect(),
            bricks: state
                .bricks
                .iter()
                .map(|b| BrickSprite {
                    rect: b.rect,
                    color: b.color,
                })
                .collect(),
            powerups: state
                .powerups
                .iter()
                .map(|p| PowerupSprite {
                    center: p.pos,
                    kind: p.kind,
                    rotation: p.rotation,
                    color: p.kind.color(),
                })
                .collect(),
            particles: state
                .particles
                .iter()
                .map(|p| ParticleSprite {
                    pos: p.pos,
                    color: p.color,
                    life: p.life,
                })
                .collect(),
            hud: Hud::capture(state),
        }
    }
}

impl Hud {
    pub fn capture(state: &GameState) -> Self {
        Self {
            score: state.score,
            lives: state.lives,
            level: state.level,
            high_score: state.high_score,
            phase: state.phase,
        }
    }

    /// Overlay text once the run is over
    pub fn game_over_text(&self) -> Option<String> {
        (self.phase == GamePhase::GameOver).then(|| {
            format!(
                "Game Over - Final Score: {} - High Score: {}",
                self.score, self.high_score
            )
        })
    }
}
