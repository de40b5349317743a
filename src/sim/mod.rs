//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Variable timestep supplied by the caller
//! - Stable iteration order (obstacle list order)
//! - No rendering or platform dependencies

pub mod boost;
pub mod collision;
pub mod input;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use boost::{BoostGauge, GaugeStatus};
pub use collision::{first_overlap, rects_overlap};
pub use input::{Edge, EdgeLatch, InputState, Key};
pub use obstacle::{Obstacle, ObstacleAi, ObstacleSpawn, Thruster, default_obstacles};
pub use player::{Player, PlayerStep};
pub use rect::Rect;
pub use score::ScoreTimer;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
