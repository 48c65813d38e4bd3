//! Particle bursts and per-tick aging of cosmetic and falling entities
//!
//! Particles never affect gameplay. They draw from `fx_rng` so toggling or
//! capping them leaves the gameplay RNG stream untouched.

use glam::Vec2;
use rand::Rng;

use super::geom::Rect;
use super::state::{Color, GameState, Particle, Powerup};
use crate::consts::*;

/// Small burst at an impact point (walls, paddle, unbreakable bricks, catches)
pub fn hit_burst(state: &mut GameState, at: Vec2, color: Color) {
    for _ in 0..HIT_BURST_COUNT {
        if state.particles.len() >= state.max_particles {
            return;
        }
        let vel = random_spread(state, HIT_BURST_SPREAD);
        state.particles.push(Particle {
            pos: at,
            vel,
            color,
            life: 1.0,
        });
    }
}

/// Larger, faster burst scattered over a destroyed brick
pub fn destroy_burst(state: &mut GameState, area: Rect, color: Color) {
    for _ in 0..DESTROY_BURST_COUNT {
        if state.particles.len() >= state.max_particles {
            return;
        }
        let offset = Vec2::new(state.fx_rng.random::<f32>(), state.fx_rng.random::<f32>());
        let vel = random_spread(state, DESTROY_BURST_SPREAD);
        state.particles.push(Particle {
            pos: area.pos + offset * area.size,
            vel,
            color,
            life: 1.0,
        });
    }
}

/// Velocity with each component uniform in (-spread/2, spread/2)
fn random_spread(state: &mut GameState, spread: f32) -> Vec2 {
    Vec2::new(
        (state.fx_rng.random::<f32>() - 0.5) * spread,
        (state.fx_rng.random::<f32>() - 0.5) * spread,
    )
}

/// Move particles, apply gravity, fade; drop the dead ones
pub fn age_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel.y += PARTICLE_GRAVITY;
        particle.life -= PARTICLE_DECAY;
    }
    particles.retain(|p| p.life > 0.0);
}

/// Drop power-ups, spin them; remove those past the bottom of the field
pub fn age_powerups(powerups: &mut Vec<Powerup>) {
    for powerup in powerups.iter_mut() {
        powerup.pos += powerup.vel;
        powerup.rotation += POWERUP_SPIN;
    }
    powerups.retain(|p| p.pos.y <= FIELD_HEIGHT);
}
