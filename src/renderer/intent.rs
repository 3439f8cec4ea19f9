//! Render intents: backend-independent draw commands for one frame

use glam::Vec2;

use crate::Color;
use crate::sim::Rect;

/// Where a text's position is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// A single draw primitive. Alpha travels in the color's fourth channel.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        rect: Rect,
        color: Color,
        /// Corner rounding radius (0 = sharp)
        corner_radius: f32,
        /// Stroke width for outlines; `None` fills
        outline: Option<f32>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    },
}

/// Everything the rasterizer needs for one tick, in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Offset applied to the whole frame (screen shake)
    pub offset: Vec2,
    /// Background color
    pub clear: Color,
    pub commands: Vec<DrawCmd>,
}

impl Frame {
    pub fn new(clear: Color) -> Self {
        Self {
            offset: Vec2::ZERO,
            clear,
            commands: Vec::new(),
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color, corner_radius: f32) {
        self.commands.push(DrawCmd::Rect {
            rect,
            color,
            corner_radius,
            outline: None,
        });
    }

    pub fn outline_rect(&mut self, rect: Rect, color: Color, corner_radius: f32, width: f32) {
        self.commands.push(DrawCmd::Rect {
            rect,
            color,
            corner_radius,
            outline: Some(width),
        });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 || color[3] <= 0.0 {
            return;
        }
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn text(
        &mut self,
        pos: Vec2,
        text: impl Into<String>,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    ) {
        self.commands.push(DrawCmd::Text {
            pos,
            text: text.into(),
            size,
            color,
            anchor,
        });
    }

    /// Count of commands of each kind: (rects, circles, texts)
    pub fn census(&self) -> (usize, usize, usize) {
        self.commands
            .iter()
            .fold((0, 0, 0), |(r, c, t), cmd| match cmd {
                DrawCmd::Rect { .. } => (r + 1, c, t),
                DrawCmd::Circle { .. } => (r, c + 1, t),
                DrawCmd::Text { .. } => (r, c, t + 1),
            })
    }

    /// All text payloads, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
