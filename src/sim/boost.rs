//! Boost gauge resource
//!
//! Time accumulates into a timer every frame, except while the key is held
//! on a drained gauge. Each time the timer passes
//! `rate`, one decision is made: drain `flow` while boosting, refill while
//! the boost key is up. Once drained to zero the gauge stays unavailable
//! until it has refilled completely and a further refill tick passes with
//! the key still released.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What the gauge label shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeStatus {
    /// Boost usable, show the level
    Ready(u32),
    /// Drained and the key is still held
    Unavailable,
    /// Drained and refilling
    CoolingDown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostGauge {
    /// Boost level (0..=BOOST_MAX)
    pub boost: u32,
    /// Time accumulated toward the next decision
    pub timer: f32,
    /// Seconds per decision
    pub rate: f32,
    /// Units drained per decision
    pub flow: u32,
    pub available: bool,
}

impl Default for BoostGauge {
    fn default() -> Self {
        Self {
            boost: BOOST_MAX,
            timer: 0.0,
            rate: BOOST_RATE,
            flow: BOOST_FLOW,
            available: true,
        }
    }
}

impl BoostGauge {
    pub fn reset(&mut self) {
        self.boost = BOOST_MAX;
        self.timer = 0.0;
        self.available = true;
    }

    /// Units restored per refill decision
    #[inline]
    pub fn refill_amount(&self) -> u32 {
        1 + (0.33 * self.flow as f32).floor() as u32
    }

    /// Whether a boosted move is allowed this frame
    #[inline]
    pub fn boosting(&self, held: bool) -> bool {
        held && self.available
    }

    /// Speed multiplier for the player this frame
    pub fn multiplier(&self, held: bool) -> f32 {
        if self.boosting(held) {
            BOOST_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn update(&mut self, dt: f32, held: bool) {
        // Held while drained: the gauge is frozen, no time is banked
        if held && !self.available {
            return;
        }
        self.timer += dt;

        if held {
            if self.take_tick() && self.boost > 0 {
                self.boost = self.boost.saturating_sub(self.flow);
                if self.boost == 0 {
                    self.available = false;
                }
            }
        } else if self.take_tick() {
            if self.boost < BOOST_MAX {
                self.boost = (self.boost + self.refill_amount()).min(BOOST_MAX);
            } else {
                self.available = true;
            }
        }
    }

    /// Consume one decision's worth of time if enough has accumulated
    fn take_tick(&mut self) -> bool {
        if self.timer > self.rate {
            self.timer -= self.rate;
            true
        } else {
            false
        }
    }

    /// Fill fraction for drawing (0.0 - 1.0)
    pub fn fraction(&self) -> f32 {
        self.boost as f32 / BOOST_MAX as f32
    }

    pub fn status(&self, held: bool) -> GaugeStatus {
        if self.available {
            GaugeStatus::Ready(self.boost)
        } else if held {
            GaugeStatus::Unavailable
        } else {
            GaugeStatus::CoolingDown
        }
    }
}
