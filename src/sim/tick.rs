//! Per-frame simulation step
//!
//! Advances the game by one variable timestep and drives the phase machine.

use super::input::{InputState, Key};
use super::player::PlayerStep;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by `dt` seconds
///
/// Returns the events raised this frame, in order.
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Title => {
            // Press space to play
            if state.latch.released(Key::Space, input) {
                state.start_session();
                events.push(GameEvent::Started);
            }
        }
        GamePhase::Play if state.score_timer.paused => {
            // Resume on space
            if state.latch.released(Key::Space, input) {
                state.score_timer.paused = false;
                events.push(GameEvent::Resumed);
            }

            // Quit to title on escape, leaving the session as it is
            if state.latch.released(Key::Escape, input) {
                state.phase = GamePhase::Title;
                events.push(GameEvent::Quit);
            }
        }
        GamePhase::Play => {
            step_play(state, input, dt, &mut events);

            // Pause on space (a hit this frame already froze the timer)
            if state.latch.released(Key::Space, input) && state.phase == GamePhase::Play {
                state.score_timer.paused = true;
                events.push(GameEvent::Paused);
            }
        }
        GamePhase::GameOver => {
            if state.latch.released(Key::Space, input) {
                if state.score > state.high_score {
                    state.high_score = state.score;
                    events.push(GameEvent::NewHighScore(state.score));
                }
                state.phase = GamePhase::Title;
                events.push(GameEvent::ReturnedToTitle);
            }
        }
    }

    events
}

/// Run the simulation for a running Play frame
fn step_play(state: &mut GameState, input: &InputState, dt: f32, events: &mut Vec<GameEvent>) {
    state.elapsed += dt;

    for obstacle in &mut state.obstacles {
        obstacle.update(dt);
    }

    let boost_held = input.is_down(Key::Shift);
    state.boost.update(dt, boost_held);

    let multiplier = state.boost.multiplier(boost_held);
    if let PlayerStep::Hit(_) = state.player.update(input, multiplier, &state.obstacles, dt) {
        state.score_timer.paused = true;
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver { score: state.score });
    }

    state.score_timer.update(dt, &mut state.score);
}
