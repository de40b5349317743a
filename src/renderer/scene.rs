//! Scene drawing
//!
//! Renders a snapshot of the game state. Drawing never touches the
//! simulation; every style change is scoped with `save`/`restore` so the
//! canvas leaves each frame in the state `prepare` set up.

use super::{Canvas, TextAlign, TextBaseline};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, GaugeStatus, InputState, Key, Obstacle, Rect};

/// Base text size
const FONT_SIZE: u32 = 16;
/// Banner text size (PAUSED / GAME OVER)
const BANNER_FONT_SIZE: u32 = 48;

/// Boost gauge layout
const GAUGE_WIDTH: f32 = SCREEN_WIDTH * 0.33;
const GAUGE_HEIGHT: f32 = 16.0;
const GAUGE_MARGIN: f32 = 10.0;

/// Text row for the score and high score
const HUD_TEXT_Y: f32 = 16.0;

/// Configure text and color defaults once after acquiring the canvas
pub fn prepare(canvas: &mut impl Canvas, settings: &Settings) {
    canvas.set_text_align(TextAlign::Center);
    canvas.set_text_baseline(TextBaseline::Middle);
    canvas.set_font(&settings.font(FONT_SIZE));
    canvas.set_fill_style(&settings.hud_color);
    canvas.set_stroke_style(&settings.hud_color);
}

/// Everything needed to draw one frame
pub struct Scene<'a> {
    pub state: &'a GameState,
    pub input: &'a InputState,
    pub settings: &'a Settings,
    /// FPS to display, if the counter is enabled
    pub fps: Option<u32>,
}

impl<'a> Scene<'a> {
    pub fn new(state: &'a GameState, input: &'a InputState, settings: &'a Settings) -> Self {
        Self {
            state,
            input,
            settings,
            fps: None,
        }
    }

    pub fn with_fps(mut self, fps: Option<u32>) -> Self {
        self.fps = fps;
        self
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.clear_rect(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);

        match self.state.phase {
            GamePhase::Title => self.draw_title(canvas),
            GamePhase::Play => {
                self.draw_obstacles(canvas);
                self.draw_player(canvas);
                self.draw_gauge(canvas);
                canvas.stroke_rect(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
                self.draw_score(canvas);

                if self.state.score_timer.paused {
                    self.draw_banner(
                        canvas,
                        "PAUSED",
                        "white",
                        &["Press Space to Resume", "Press ESC to Quit"],
                    );
                }
            }
            GamePhase::GameOver => {
                canvas.stroke_rect(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
                self.draw_score(canvas);
                self.draw_obstacles(canvas);
                self.draw_player(canvas);
                self.draw_gauge(canvas);
                self.draw_banner(canvas, "GAME OVER", "red", &["Press Space to Restart"]);
            }
        }

        if let Some(fps) = self.fps {
            canvas.save();
            canvas.set_text_align(TextAlign::Left);
            canvas.fill_text(&format!("FPS: {}", fps), 8.0, SCREEN_HEIGHT - HUD_TEXT_Y);
            canvas.restore();
        }
    }

    fn draw_title(&self, canvas: &mut impl Canvas) {
        if self.state.high_score > 0 {
            canvas.fill_text(
                &format!("HIGH SCORE: {}", self.state.high_score),
                SCREEN_WIDTH * 0.5,
                HUD_TEXT_Y,
            );
        }
        canvas.fill_text("Press Space to Play", SCREEN_WIDTH * 0.5, SCREEN_HEIGHT * 0.5);
    }

    fn draw_score(&self, canvas: &mut impl Canvas) {
        canvas.fill_text(
            &format!("SCORE: {}", self.state.score),
            SCREEN_WIDTH * 0.5,
            HUD_TEXT_Y,
        );
    }

    fn draw_obstacles(&self, canvas: &mut impl Canvas) {
        canvas.save();
        canvas.set_stroke_style(&self.settings.obstacle_color);
        canvas.set_fill_style(&self.settings.obstacle_color);
        for obstacle in &self.state.obstacles {
            self.draw_obstacle(canvas, obstacle);
        }
        canvas.restore();
    }

    fn draw_obstacle(&self, canvas: &mut impl Canvas, obstacle: &Obstacle) {
        let pos = obstacle.rect.pos;
        canvas.translate(pos.x, pos.y);

        match obstacle.thruster(self.state.elapsed) {
            Some(thruster) => {
                canvas.save();
                canvas.set_fill_style(&self.settings.patrol_color);
                fill_local(canvas, &obstacle.rect);
                canvas.fill_rect(
                    thruster.origin.x,
                    thruster.origin.y,
                    thruster.size,
                    thruster.size,
                );
                canvas.restore();
            }
            None => fill_local(canvas, &obstacle.rect),
        }

        canvas.translate(-pos.x, -pos.y);
    }

    fn draw_player(&self, canvas: &mut impl Canvas) {
        let rect = &self.state.player.rect;
        canvas.save();
        canvas.translate(rect.pos.x, rect.pos.y);
        fill_local(canvas, rect);
        canvas.restore();
    }

    fn draw_gauge(&self, canvas: &mut impl Canvas) {
        let gauge = &self.state.boost;
        let bar_x = SCREEN_WIDTH - (GAUGE_WIDTH + GAUGE_MARGIN);
        let bar_y = GAUGE_MARGIN;
        let fill_width = (GAUGE_WIDTH * gauge.fraction()).floor();
        let label_x = bar_x + GAUGE_WIDTH * 0.5;
        let label_y = bar_y + GAUGE_HEIGHT + GAUGE_MARGIN;

        canvas.stroke_rect(bar_x, bar_y, GAUGE_WIDTH, GAUGE_HEIGHT);

        // Drains from the left, so the fill hugs the right end
        if fill_width > 0.0 {
            canvas.fill_rect(
                bar_x + GAUGE_WIDTH - fill_width,
                bar_y,
                fill_width,
                GAUGE_HEIGHT,
            );
        }

        let label = match gauge.status(self.input.is_down(Key::Shift)) {
            GaugeStatus::Ready(boost) => format!("{} %", boost),
            GaugeStatus::Unavailable => "boost is unavailable".to_string(),
            GaugeStatus::CoolingDown => "cooling down".to_string(),
        };
        canvas.fill_text(&label, label_x, label_y);
    }

    /// Dim the playfield and show a large message with prompts below it
    fn draw_banner(&self, canvas: &mut impl Canvas, title: &str, color: &str, prompts: &[&str]) {
        canvas.save();
        canvas.set_global_alpha(0.5);
        canvas.set_fill_style("black");
        canvas.fill_rect(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
        canvas.restore();

        canvas.save();
        canvas.set_fill_style(color);
        canvas.set_font(&self.settings.font(BANNER_FONT_SIZE));
        canvas.fill_text(title, SCREEN_WIDTH * 0.5, SCREEN_HEIGHT * 0.5);

        canvas.set_font(&self.settings.font(FONT_SIZE));
        canvas.set_fill_style(&self.settings.hud_color);
        for (i, prompt) in prompts.iter().enumerate() {
            let y = SCREEN_HEIGHT * (0.65 + 0.1 * i as f32);
            canvas.fill_text(prompt, SCREEN_WIDTH * 0.5, y);
        }
        canvas.restore();
    }
}

/// Fill `rect` around the current origin (after translating to its center)
fn fill_local(canvas: &mut impl Canvas, rect: &Rect) {
    let origin = rect.local_origin();
    canvas.fill_rect(origin.x, origin.y, rect.size.x, rect.size.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recorder::{DrawCommand, Recorder};

    fn render(state: &GameState, input: &InputState) -> Recorder {
        let settings = Settings::default();
        let mut recorder = Recorder::default();
        Scene::new(state, input, &settings).render(&mut recorder);
        recorder
    }

    fn is_save(c: &DrawCommand) -> bool {
        *c == DrawCommand::Save
    }

    fn is_restore(c: &DrawCommand) -> bool {
        *c == DrawCommand::Restore
    }

    #[test]
    fn test_prepare_sets_defaults() {
        let mut recorder = Recorder::default();
        prepare(&mut recorder, &Settings::default());
        assert!(recorder.commands.contains(&DrawCommand::TextAlign(TextAlign::Center)));
        assert!(
            recorder
                .commands
                .contains(&DrawCommand::TextBaseline(TextBaseline::Middle))
        );
        assert!(
            recorder
                .commands
                .contains(&DrawCommand::FillStyle("lime".to_string()))
        );
    }

    #[test]
    fn test_title_screen() {
        let input = InputState::new();

        let recorder = render(&GameState::new(0), &input);
        assert_eq!(
            recorder.commands[0],
            DrawCommand::ClearRect(0.0, 0.0, 640.0, 400.0)
        );
        assert_eq!(recorder.texts(), vec!["Press Space to Play"]);

        let recorder = render(&GameState::new(12), &input);
        assert_eq!(
            recorder.texts(),
            vec!["HIGH SCORE: 12", "Press Space to Play"]
        );
    }

    #[test]
    fn test_play_screen() {
        let mut state = GameState::default();
        state.start_session();
        state.score = 4;
        let recorder = render(&state, &InputState::new());

        assert_eq!(recorder.texts(), vec!["100 %", "SCORE: 4"]);
        assert!(
            recorder
                .commands
                .contains(&DrawCommand::StrokeRect(0.0, 0.0, 640.0, 400.0))
        );
        // Player drawn at its center
        assert!(
            recorder
                .commands
                .contains(&DrawCommand::Translate(320.0, 340.0))
        );
        assert!(
            recorder
                .commands
                .contains(&DrawCommand::FillRect(-16.0, -16.0, 32.0, 32.0))
        );
        assert_eq!(recorder.count(is_save), recorder.count(is_restore));
    }

    #[test]
    fn test_full_gauge_fill() {
        let mut state = GameState::default();
        state.start_session();
        let recorder = render(&state, &InputState::new());

        let bar_x = SCREEN_WIDTH - (GAUGE_WIDTH + GAUGE_MARGIN);
        let full = GAUGE_WIDTH.floor();
        assert!(recorder.commands.contains(&DrawCommand::FillRect(
            bar_x + GAUGE_WIDTH - full,
            GAUGE_MARGIN,
            full,
            GAUGE_HEIGHT
        )));
    }

    #[test]
    fn test_empty_gauge_has_no_fill() {
        let mut state = GameState::default();
        state.start_session();
        state.boost.boost = 0;
        state.boost.available = false;
        let recorder = render(&state, &InputState::new());

        let bar_y = GAUGE_MARGIN;
        let gauge_fills = recorder.count(|c| {
            matches!(c, DrawCommand::FillRect(_, y, _, h) if *y == bar_y && *h == GAUGE_HEIGHT)
        });
        assert_eq!(gauge_fills, 0);
    }

    #[test]
    fn test_gauge_labels() {
        let mut state = GameState::default();
        state.start_session();
        state.boost.boost = 0;
        state.boost.available = false;

        let mut input = InputState::new();
        assert!(render(&state, &input).has_text("cooling down"));

        input.press(Key::Shift);
        assert!(render(&state, &input).has_text("boost is unavailable"));

        state.boost.boost = 45;
        state.boost.available = true;
        assert!(render(&state, &input).has_text("45 %"));
    }

    #[test]
    fn test_paused_overlay() {
        let mut state = GameState::default();
        state.start_session();
        state.score_timer.paused = true;
        let recorder = render(&state, &InputState::new());

        assert!(recorder.has_text("PAUSED"));
        assert!(recorder.has_text("Press Space to Resume"));
        assert!(recorder.has_text("Press ESC to Quit"));
        assert!(recorder.commands.contains(&DrawCommand::GlobalAlpha(0.5)));
        assert_eq!(recorder.count(is_save), recorder.count(is_restore));
    }

    #[test]
    fn test_game_over_screen() {
        let mut state = GameState::default();
        state.start_session();
        state.phase = GamePhase::GameOver;
        state.score = 9;
        let recorder = render(&state, &InputState::new());

        let texts = recorder.texts();
        assert_eq!(texts[0], "SCORE: 9");
        assert!(recorder.has_text("GAME OVER"));
        assert!(recorder.has_text("Press Space to Restart"));
        assert!(
            recorder
                .commands
                .contains(&DrawCommand::FillStyle("red".to_string()))
        );
    }

    #[test]
    fn test_patrol_obstacle_draws_thruster() {
        let mut state = GameState::default();
        state.start_session();
        let recorder = render(&state, &InputState::new());

        // Three box fills plus one thruster fill between the obstacle translates
        let patrol = &state.obstacles[2];
        assert!(
            recorder
                .commands
                .contains(&DrawCommand::Translate(patrol.rect.pos.x, patrol.rect.pos.y))
        );
        let thruster = patrol.thruster(state.elapsed).unwrap();
        assert!(recorder.commands.contains(&DrawCommand::FillRect(
            thruster.origin.x,
            thruster.origin.y,
            thruster.size,
            thruster.size
        )));
        assert!(
            recorder
                .commands
                .contains(&DrawCommand::FillStyle("crimson".to_string()))
        );
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut state = GameState::default();
        state.start_session();
        let before = format!("{:?}", state);
        render(&state, &InputState::new());
        assert_eq!(format!("{:?}", state), before);
    }

    #[test]
    fn test_fps_counter() {
        let state = GameState::default();
        let input = InputState::new();
        let settings = Settings::default();
        let mut recorder = Recorder::default();
        Scene::new(&state, &input, &settings)
            .with_fps(Some(58))
            .render(&mut recorder);
        assert!(recorder.has_text("FPS: 58"));
    }
}
