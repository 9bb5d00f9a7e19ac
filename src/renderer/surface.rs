//! Abstract 2D drawing surface
//!
//! Mirrors an immediate-mode canvas context: a transform stack, a current
//! path built from lines, arcs and curves, then a stroke or fill.

use serde::{Deserialize, Serialize};

/// Linear RGBA, components in [0, 1]
pub type Color = [f32; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Pixel height
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
}

pub trait Surface {
    /// Clear the whole surface to `color`
    fn clear(&mut self, width: f32, height: f32, color: Color);

    /// Push the current transform
    fn save(&mut self);
    /// Pop back to the last saved transform
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
    fn bezier_curve_to(&mut self, cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32);
    fn close_path(&mut self);

    fn stroke(&mut self, color: Color, width: f32);
    fn fill(&mut self, color: Color);

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
}
