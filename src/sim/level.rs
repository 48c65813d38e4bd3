//! Level generation
//!
//! Levels 1-3 use fixed patterns; every level past that draws a randomized
//! grid whose row count grows with the level index.

use rand::Rng;

use super::geom::with_speed;
use super::state::{Brick, BrickKind, GameState};
use crate::consts::*;

/// Named brick layouts, in play order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelPattern {
    /// 5 rows of normal bricks
    FullGrid,
    /// 6 rows, the top two strong
    StrongTop,
    /// 7 rows, top three strong, two unbreakable sentinels on row 3
    Sentinels,
    /// Growing randomized grid
    Random,
}

impl LevelPattern {
    /// Pattern used for a 1-based level index
    pub fn for_level(level: u32) -> Self {
        match level {
            0 | 1 => LevelPattern::FullGrid,
            2 => LevelPattern::StrongTop,
            3 => LevelPattern::Sentinels,
            _ => LevelPattern::Random,
        }
    }

    /// Row count for this pattern at `level`
    pub fn rows(self, level: u32) -> u32 {
        match self {
            LevelPattern::FullGrid => 5,
            LevelPattern::StrongTop => 6,
            LevelPattern::Sentinels => 7,
            LevelPattern::Random => random_grid_rows(level),
        }
    }
}

/// Rows for randomized levels: one more per level, capped at 8
pub fn random_grid_rows(level: u32) -> u32 {
    (level + 1).min(8)
}

/// Brick kind for one cell of a randomized level
///
/// 10% unbreakable; otherwise 30% strong; otherwise normal.
pub fn random_grid_kind<R: Rng>(rng: &mut R) -> BrickKind {
    if rng.random_bool(0.1) {
        BrickKind::Unbreakable
    } else if rng.random_bool(0.3) {
        BrickKind::Strong
    } else {
        BrickKind::Normal
    }
}

/// Brick layout for `level`; ids come from `next_id`
pub fn generate_level<R: Rng>(
    level: u32,
    rng: &mut R,
    mut next_id: impl FnMut() -> u32,
) -> Vec<Brick> {
    let pattern = LevelPattern::for_level(level);
    let rows = pattern.rows(level);
    let mut bricks = Vec::with_capacity((rows * BRICK_COLUMNS) as usize);

    for row in 0..rows {
        for col in 0..BRICK_COLUMNS {
            let kind = match pattern {
                LevelPattern::FullGrid => BrickKind::Normal,
                LevelPattern::StrongTop => {
                    if row < 2 {
                        BrickKind::Strong
                    } else {
                        BrickKind::Normal
                    }
                }
                LevelPattern::Sentinels => {
                    if row == 3 && (col == 2 || col == 7) {
                        BrickKind::Unbreakable
                    } else if row < 3 {
                        BrickKind::Strong
                    } else {
                        BrickKind::Normal
                    }
                }
                LevelPattern::Random => random_grid_kind(rng),
            };
            bricks.push(Brick::new(next_id(), col, row, kind));
        }
    }

    bricks
}

/// Ball speed for a level: base speed plus 10% per level past the first
pub fn level_speed(base_speed: f32, level: u32) -> f32 {
    base_speed * (1.0 + LEVEL_SPEED_STEP * level.saturating_sub(1) as f32)
}

/// Build the current level's bricks and rescale every ball to the level speed
pub fn start_level(state: &mut GameState) {
    let level = state.level;
    let mut rng = state.rng.clone();
    let bricks = generate_level(level, &mut rng, || state.next_entity_id());
    state.rng = rng;
    state.bricks = bricks;

    for ball in &mut state.balls {
        ball.vel = with_speed(ball.vel, level_speed(ball.base_speed, level));
    }

    log::info!(
        "Level {}: {:?}, {} bricks ({} breakable)",
        level,
        LevelPattern::for_level(level),
        state.bricks.len(),
        state.breakable_bricks()
    );
}
