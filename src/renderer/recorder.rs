//! Canvas that records draw calls, for render tests

use super::{Canvas, TextAlign, TextBaseline};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect(f32, f32, f32, f32),
    FillRect(f32, f32, f32, f32),
    StrokeRect(f32, f32, f32, f32),
    FillText(String, f32, f32),
    Save,
    Restore,
    FillStyle(String),
    StrokeStyle(String),
    Font(String),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    GlobalAlpha(f32),
    Translate(f32, f32),
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText(text, _, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, text: &str) -> bool {
        self.texts().contains(&text)
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|&c| pred(c)).count()
    }
}

impl Canvas for Recorder {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::ClearRect(x, y, w, h));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::FillRect(x, y, w, h));
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::StrokeRect(x, y, w, h));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands
            .push(DrawCommand::FillText(text.to_string(), x, y));
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands
            .push(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::TextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.commands.push(DrawCommand::TextBaseline(baseline));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate(x, y));
    }
}
