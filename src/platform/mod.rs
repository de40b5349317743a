//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (`FrameClock`)
//! - Storage (LocalStorage on web, see `highscores` and `settings`)
//!
//! Keyboard and focus listeners are wired in the wasm entry point.

pub mod clock;

pub use clock::FrameClock;
