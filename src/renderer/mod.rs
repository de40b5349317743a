//! Canvas 2D rendering
//!
//! The game draws through the `Canvas` trait, a passive drawing sink with
//! the subset of the 2D context API it needs. On the web it is backed by
//! `CanvasRenderingContext2d`; tests use a command recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
#[cfg(test)]
pub(crate) mod recorder;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;
pub use scene::{Scene, prepare};

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
        }
    }
}

/// A 2D drawing surface
///
/// Colors and fonts are CSS strings. `save`/`restore` push and pop the
/// style and transform state.
pub trait Canvas {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);

    fn save(&mut self);
    fn restore(&mut self);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn set_global_alpha(&mut self, alpha: f32);
    fn translate(&mut self, x: f32, y: f32);
}
