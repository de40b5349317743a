//! Game state and top-level phases
//!
//! Everything the simulation mutates lives in `GameState`, owned by the host
//! and passed by reference into `tick` and the renderer.

use serde::{Deserialize, Serialize};

use super::boost::BoostGauge;
use super::input::EdgeLatch;
use super::obstacle::{Obstacle, default_obstacles};
use super::player::Player;
use super::score::ScoreTimer;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for Space
    Title,
    /// Active gameplay (paused when the score timer is paused)
    Play,
    /// Player was hit; frozen until Space
    GameOver,
}

/// Notable things that happened during a tick, for the host to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new session started from the title screen
    Started,
    Paused,
    Resumed,
    /// Paused session abandoned with Escape
    Quit,
    /// Player collided with an obstacle
    GameOver { score: u32 },
    /// A score beat the stored high score and should be persisted
    NewHighScore(u32),
    /// Back on the title screen after a game over
    ReturnedToTitle,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    /// Seconds of unpaused play this session (drives animations)
    pub elapsed: f32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub boost: BoostGauge,
    pub score_timer: ScoreTimer,
    pub latch: EdgeLatch,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameState {
    /// Create a game sitting on the title screen
    pub fn new(high_score: u32) -> Self {
        Self {
            phase: GamePhase::Title,
            score: 0,
            high_score,
            elapsed: 0.0,
            player: Player::default(),
            obstacles: default_obstacles(),
            boost: BoostGauge::default(),
            score_timer: ScoreTimer::default(),
            latch: EdgeLatch::new(),
        }
    }

    /// Whether a Play session is paused
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Play && self.score_timer.paused
    }

    /// Reset every entity for a fresh session and enter Play
    pub fn start_session(&mut self) {
        self.score = 0;
        self.score_timer.reset();
        self.player.reset();
        for obstacle in &mut self.obstacles {
            obstacle.reset();
        }
        self.boost.reset();
        self.elapsed = 0.0;
        self.phase = GamePhase::Play;
    }

    /// Pause a running session from outside the input flow (focus loss)
    ///
    /// Returns `GameEvent::Paused` if the game was running and is now paused.
    pub fn suspend(&mut self) -> Option<GameEvent> {
        if self.phase == GamePhase::Play && !self.score_timer.paused {
            self.score_timer.paused = true;
            Some(GameEvent::Paused)
        } else {
            None
        }
    }
}
