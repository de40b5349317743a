//! Score timer: one point per whole second of unpaused play

use serde::{Deserialize, Serialize};

use crate::consts::SCORE_INTERVAL;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTimer {
    /// Time accumulated toward the next point
    pub time: f32,
    pub paused: bool,
}

impl ScoreTimer {
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.paused = false;
    }

    /// Advance the timer, adding any earned point to `score`
    ///
    /// The excess past the interval carries into the next point.
    pub fn update(&mut self, dt: f32, score: &mut u32) {
        if self.paused {
            return;
        }

        self.time += dt;
        if self.time >= SCORE_INTERVAL {
            self.time -= SCORE_INTERVAL;
            *score += 1;
        }
    }
}
