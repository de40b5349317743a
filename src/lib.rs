//! Boost Dodge - A single-screen box dodging arcade game
//!
//! Core modules:
//! - `sim`: Simulation (obstacles, player, boost gauge, score, game phases)
//! - `renderer`: Canvas 2D drawing of a state snapshot
//! - `platform`: Frame clock and browser glue helpers
//! - `highscores`: High score persistence (LocalStorage)
//! - `settings`: Display preferences

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 150.0;
    pub const PLAYER_SIZE: f32 = 32.0;
    /// Spawn point as a fraction of the screen
    pub const PLAYER_SPAWN_X: f32 = SCREEN_WIDTH * 0.5;
    pub const PLAYER_SPAWN_Y: f32 = SCREEN_HEIGHT * 0.85;

    /// Speed multiplier while boosting
    pub const BOOST_MULTIPLIER: f32 = 1.9;
    pub const BOOST_MAX: u32 = 100;
    /// Seconds per drain/refill decision
    pub const BOOST_RATE: f32 = 0.3;
    /// Units drained per decision
    pub const BOOST_FLOW: u32 = 5;

    /// Seconds of play per score point
    pub const SCORE_INTERVAL: f32 = 1.0;

    /// Clock ticks are milliseconds
    pub const MS_TO_SECONDS: f64 = 0.001;
}

/// Top-left corner of the canvas
#[inline]
pub fn screen_min() -> Vec2 {
    Vec2::ZERO
}

/// Bottom-right corner of the canvas
#[inline]
pub fn screen_max() -> Vec2 {
    Vec2::new(consts::SCREEN_WIDTH, consts::SCREEN_HEIGHT)
}
