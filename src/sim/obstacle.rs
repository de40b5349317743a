//! Obstacle boxes and the AI that moves them
//!
//! Each obstacle is a rectangle with a velocity. Its AI decides how it moves
//! and how it reacts to the edge of its allowed area. Reflection applies the
//! reflected velocity twice after the unreflected step, so an edge frame
//! moves the box three times along the reflecting axis.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::{screen_max, screen_min};

/// Movement strategy attached to an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleAi {
    /// Moves on both axes, bounces off all four canvas edges
    Bouncing,
    /// Moves horizontally only, turning around at the limits
    LeftRight { left_limit: f32, right_limit: f32 },
}

impl ObstacleAi {
    /// Advance `rect` by `vel` for one frame, reflecting `vel` at the edges
    pub fn update(&self, rect: &mut Rect, vel: &mut Vec2, dt: f32) {
        match *self {
            ObstacleAi::Bouncing => {
                let min = screen_min();
                let max = screen_max();
                let off_vertical = rect.bottom() > max.y || rect.top() < min.y;
                let off_horizontal = rect.left() < min.x || rect.right() > max.x;

                rect.pos.y += vel.y * dt;
                rect.pos.x += vel.x * dt;

                if off_vertical {
                    vel.y = -vel.y;
                    rect.pos.y += vel.y * dt;
                    rect.pos.y += vel.y * dt;
                }

                if off_horizontal {
                    vel.x = -vel.x;
                    rect.pos.x += vel.x * dt;
                    rect.pos.x += vel.x * dt;
                }
            }
            ObstacleAi::LeftRight {
                left_limit,
                right_limit,
            } => {
                let off_edge = rect.left() < left_limit || rect.right() > right_limit;

                rect.pos.x += vel.x * dt;
                if off_edge {
                    vel.x = -vel.x;
                    rect.pos.x += vel.x * dt;
                    rect.pos.x += vel.x * dt;
                }
            }
        }
    }
}

/// Values an obstacle was created with, restored on reset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpawn {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

/// Square particle trailing a patrolling obstacle, relative to its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thruster {
    pub origin: Vec2,
    pub size: f32,
}

/// A moving obstacle box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub vel: Vec2,
    /// Obstacles without an AI stay where they are
    pub ai: Option<ObstacleAi>,
    spawn: ObstacleSpawn,
}

impl Obstacle {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2, ai: Option<ObstacleAi>) -> Self {
        Self {
            rect: Rect::new(pos, size),
            vel,
            ai,
            spawn: ObstacleSpawn { pos, vel, size },
        }
    }

    /// Construction values
    pub fn spawn(&self) -> &ObstacleSpawn {
        &self.spawn
    }

    /// Restore position, velocity and size to the construction values
    pub fn reset(&mut self) {
        self.rect.pos = self.spawn.pos;
        self.rect.size = self.spawn.size;
        self.vel = self.spawn.vel;
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(ai) = self.ai {
            ai.update(&mut self.rect, &mut self.vel, dt);
        }
    }

    /// Whether this obstacle is drawn as a patrolling box
    pub fn is_patrol(&self) -> bool {
        matches!(self.ai, Some(ObstacleAi::LeftRight { .. }))
    }

    /// Thruster particle at play time `time` (patrolling obstacles only)
    pub fn thruster(&self, time: f32) -> Option<Thruster> {
        if !self.is_patrol() {
            return None;
        }

        let half = self.rect.half_extents();
        let forward = self.vel.x > 0.0;
        let wave = (time * 12.0).cos();

        let origin_y = 0.3 * self.rect.size.y * (time * 3.0).sin();
        let origin_x = if forward {
            -self.rect.size.x
        } else {
            self.rect.size.x
        };
        let jitter = if forward {
            wave * half.x
        } else {
            wave * -half.x
        };

        Some(Thruster {
            origin: Vec2::new(origin_x + jitter, origin_y),
            size: 8.0 - 4.0 * wave,
        })
    }
}

/// The fixed set of obstacles for a session
pub fn default_obstacles() -> Vec<Obstacle> {
    vec![
        Obstacle::new(
            Vec2::new(SCREEN_WIDTH * 0.25, SCREEN_HEIGHT * 0.25),
            Vec2::new(60.0, -220.0),
            Vec2::new(48.0, 48.0),
            Some(ObstacleAi::Bouncing),
        ),
        Obstacle::new(
            Vec2::new(SCREEN_WIDTH * 0.45, SCREEN_HEIGHT * 0.25),
            Vec2::new(-60.0, 100.0),
            Vec2::new(48.0, 48.0),
            Some(ObstacleAi::Bouncing),
        ),
        Obstacle::new(
            Vec2::new(SCREEN_WIDTH * 0.5, SCREEN_HEIGHT * 0.25),
            Vec2::new(92.0, 125.0),
            Vec2::new(32.0, 48.0),
            Some(ObstacleAi::LeftRight {
                left_limit: 0.0,
                right_limit: SCREEN_WIDTH,
            }),
        ),
    ]
}
