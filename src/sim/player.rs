//! The player-controlled square

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::first_overlap;
use super::input::{InputState, Key};
use super::obstacle::Obstacle;
use super::rect::Rect;
use crate::consts::*;
use crate::{screen_max, screen_min};

/// Result of a player update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStep {
    /// Player moved (or stood still) without touching anything
    Clear,
    /// Player overlaps the obstacle at this index; no movement happened
    Hit(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Base speed in pixels/sec
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(Self::spawn_pos(), Vec2::splat(PLAYER_SIZE)),
            speed: PLAYER_SPEED,
        }
    }
}

impl Player {
    pub fn spawn_pos() -> Vec2 {
        Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y)
    }

    pub fn reset(&mut self) {
        self.rect.pos = Self::spawn_pos();
    }

    /// Input direction on each axis (-1, 0 or 1); up beats down, left beats right
    pub fn input_direction(input: &InputState) -> Vec2 {
        let y = if input.is_down(Key::Up) {
            -1.0
        } else if input.is_down(Key::Down) {
            1.0
        } else {
            0.0
        };

        let x = if input.is_down(Key::Left) {
            -1.0
        } else if input.is_down(Key::Right) {
            1.0
        } else {
            0.0
        };

        Vec2::new(x, y)
    }

    /// Check for a hit, then move by input, boost and dt
    pub fn update(
        &mut self,
        input: &InputState,
        multiplier: f32,
        obstacles: &[Obstacle],
        dt: f32,
    ) -> PlayerStep {
        if let Some(index) = first_overlap(&self.rect, obstacles) {
            return PlayerStep::Hit(index);
        }

        let direction = Self::input_direction(input);
        if direction != Vec2::ZERO {
            let velocity = direction.normalize() * self.speed * multiplier;
            self.rect.pos += velocity * dt;
            self.rect.clamp_inside(screen_min(), screen_max());
        }

        PlayerStep::Clear
    }
}
