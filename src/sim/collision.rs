//! Collision detection and response
//!
//! Balls are circles tested through their bounding boxes against the walls,
//! the paddle and the brick rectangles. Every response keeps the reflected
//! velocity component at least `MIN_BOUNCE_COMPONENT` in magnitude so a ball
//! can never settle into a purely horizontal or vertical loop.
//!
//! There is no sub-stepping: a ball fast enough to cross a whole brick in one
//! tick passes through it. Ball speed grows 10% of base per level with no
//! cap, so from roughly level 50 on a ball moves about a brick's height per
//! tick and can tunnel through bricks.

use std::f32::consts::PI;

use glam::Vec2;

use super::geom::{Rect, enforce_min_component, lift_small_component};
use super::state::{Ball, Paddle, Powerup};
use crate::consts::*;

/// Which walls a ball touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallBounce {
    /// Left or right wall
    pub side: bool,
    pub top: bool,
}

impl WallBounce {
    pub fn any(&self) -> bool {
        self.side || self.top
    }

    /// Walls touched; a corner counts twice
    pub fn hits(&self) -> usize {
        [self.side, self.top].iter().filter(|&&hit| hit).count()
    }
}

/// Reflect a ball off the left, right and top walls
///
/// The reflected component is pointed away from the wall, pushed to the
/// minimum magnitude, and the ball is moved back inside the field.
pub fn bounce_walls(ball: &mut Ball) -> WallBounce {
    let mut bounce = WallBounce::default();

    if ball.pos.x - ball.radius <= 0.0 {
        ball.vel.x = enforce_min_component(ball.vel.x, MIN_BOUNCE_COMPONENT).abs();
        ball.pos.x = ball.radius;
        bounce.side = true;
    } else if ball.pos.x + ball.radius >= FIELD_WIDTH {
        ball.vel.x = -enforce_min_component(ball.vel.x, MIN_BOUNCE_COMPONENT).abs();
        ball.pos.x = FIELD_WIDTH - ball.radius;
        bounce.side = true;
    }
    if bounce.side {
        // Keep a side bounce from turning into an endless horizontal shuttle
        ball.vel.y = lift_small_component(ball.vel.y, ANTI_TRAP_THRESHOLD, MIN_BOUNCE_COMPONENT);
    }

    if ball.pos.y - ball.radius <= 0.0 {
        ball.vel.y = enforce_min_component(ball.vel.y, MIN_BOUNCE_COMPONENT).abs();
        ball.pos.y = ball.radius;
        bounce.top = true;
    }

    bounce
}

/// True once a ball is far enough below the field to be gone
pub fn has_exited(ball: &Ball) -> bool {
    ball.pos.y > FIELD_HEIGHT + BALL_EXIT_MARGIN
}

/// Outgoing velocity for a paddle hit at `hit_pos` (0 = left edge, 1 = right edge)
///
/// The direction sweeps the 0.2π-0.8π arc: the left edge sends the ball up
/// and to the left, the center straight up, the right edge up and to the right.
pub fn paddle_reflection(hit_pos: f32, speed: f32) -> Vec2 {
    let angle = PI * (PADDLE_ARC_START + hit_pos.clamp(0.0, 1.0) * PADDLE_ARC_SPAN);
    Vec2::new(-speed * angle.cos(), -speed * angle.sin())
}

/// Bounce a ball off the paddle if its lower edge has reached the paddle top
/// while its center is within the paddle span
///
/// Returns true on a hit. The ball is set exactly on the paddle surface.
pub fn bounce_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    let rect = paddle.rect();
    let reached_top = ball.pos.y + ball.radius >= rect.top();
    let not_past = ball.pos.y - ball.radius <= rect.bottom();
    let within_span = ball.pos.x >= rect.left() && ball.pos.x <= rect.right();
    if !(reached_top && not_past && within_span) {
        return false;
    }

    let hit_pos = (ball.pos.x - rect.left()) / rect.size.x.max(f32::EPSILON);
    ball.vel = paddle_reflection(hit_pos, ball.speed());
    ball.pos.y = rect.top() - ball.radius;
    ball.vel.y = ball.vel.y.min(-MIN_BOUNCE_COMPONENT);
    true
}

/// Face of a brick a ball struck, decided by the shallower overlap axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickFace {
    /// Left or right face: horizontal velocity flips
    Side,
    /// Top or bottom face: vertical velocity flips
    Cap,
}

/// Face hit if the ball's bounding box overlaps `brick`
pub fn brick_face(ball: &Ball, brick: &Rect) -> Option<BrickFace> {
    let bounds = ball.bounds();
    if !bounds.overlaps(brick) {
        return None;
    }
    let depth = bounds.overlap_depth(brick);
    if depth.x < depth.y {
        Some(BrickFace::Side)
    } else {
        Some(BrickFace::Cap)
    }
}

/// Reflect a ball off a brick face
///
/// The ball is not moved: overlapping several bricks in one tick applies
/// one flip per brick against the same position.
pub fn bounce_brick(ball: &mut Ball, face: BrickFace) {
    match face {
        BrickFace::Side => {
            ball.vel.x = enforce_min_component(-ball.vel.x, MIN_BOUNCE_COMPONENT);
            ball.vel.y =
                lift_small_component(ball.vel.y, ANTI_TRAP_THRESHOLD, MIN_BOUNCE_COMPONENT);
        }
        BrickFace::Cap => {
            ball.vel.y = enforce_min_component(-ball.vel.y, MIN_BOUNCE_COMPONENT);
        }
    }
}

/// True if a falling power-up touches the paddle
pub fn powerup_caught(powerup: &Powerup, paddle: &Paddle) -> bool {
    powerup.bounds().overlaps(&paddle.rect())
}
