//! Frame clock
//!
//! Converts millisecond timestamps into per-frame delta seconds and keeps a
//! rolling frames-per-second estimate.

use crate::consts::MS_TO_SECONDS;

/// Frames kept for the FPS estimate
const FPS_WINDOW: usize = 60;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    frames_seen: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames_seen: 0,
            fps: 0,
        }
    }

    /// Start measuring from `now_ms` (the first frame then gets a real delta)
    pub fn start(now_ms: f64) -> Self {
        let mut clock = Self::new();
        clock.last_time = Some(now_ms);
        clock
    }

    /// Record a frame at `now_ms` and return seconds since the previous one
    ///
    /// The very first frame of an unstarted clock returns 0. Timestamps that
    /// go backwards also return 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((now_ms - last) * MS_TO_SECONDS).max(0.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(now_ms);
        self.record_frame(now_ms);
        dt
    }

    fn record_frame(&mut self, now_ms: f64) {
        self.frame_times[self.frame_index] = now_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames_seen = (self.frames_seen + 1).min(FPS_WINDOW);

        // The slot about to be overwritten holds the oldest sample
        if self.frames_seen == FPS_WINDOW {
            let oldest = self.frame_times[self.frame_index];
            let elapsed = now_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    /// Frames per second over the last window (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(5000.0), 0.0);
        assert!((clock.advance(5016.0) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_started_clock() {
        let mut clock = FrameClock::start(1000.0);
        assert!((clock.advance(1250.0) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::start(1000.0);
        assert_eq!(clock.advance(900.0), 0.0);
    }

    #[test]
    fn test_fps_estimate() {
        let mut clock = FrameClock::new();
        for i in 0..59 {
            clock.advance(i as f64 * 20.0);
        }
        assert_eq!(clock.fps(), 0);

        clock.advance(59.0 * 20.0);
        assert_eq!(clock.fps(), 50);

        for i in 60..200 {
            clock.advance(i as f64 * 20.0);
        }
        assert_eq!(clock.fps(), 50);
    }
}
