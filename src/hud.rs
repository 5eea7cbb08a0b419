//! Heads-up display state: the countdown label and the round status banner.
//!
//! These are plain data. The renderer draws them; the scene only changes
//! their text, colour and visibility.

use sdl2::pixels::Color;

pub const WIN_COLOR: Color = Color::RGB(0x00, 0xFF, 0x00);
pub const LOSE_COLOR: Color = Color::RGB(0xFF, 0x00, 0x00);
pub const TEXT_COLOR: Color = Color::RGB(0xFF, 0xFF, 0xFF);

/// Formats remaining seconds as `Time: M:SS`.
pub fn format_countdown(seconds_left: i32) -> String {
    let seconds_left = seconds_left.max(0);
    let minutes = seconds_left / 60;
    let seconds = seconds_left % 60;
    format!("Time: {}:{:02}", minutes, seconds)
}

/// A line of text anchored at a point on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
    /// Nominal glyph height in pixels
    pub size: u32,
    pub color: Color,
    /// 0 is invisible, 255 fully opaque
    pub alpha: u8,
    /// When true, (x, y) is the centre of the text instead of its top-left corner
    pub centered: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, x: i32, y: i32, size: u32) -> Self {
        Label {
            text: text.into(),
            x,
            y,
            size,
            color: TEXT_COLOR,
            alpha: 255,
            centered: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0 && !self.text.is_empty()
    }
}

/// Large centred banner announcing the end of a round.
///
/// Starts empty and transparent; [`StatusBanner::show`] fills it in.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBanner {
    pub label: Label,
}

impl StatusBanner {
    pub fn new(center_x: i32, center_y: i32) -> Self {
        let mut label = Label::new("", center_x, center_y, 48);
        label.alpha = 0;
        label.centered = true;
        StatusBanner { label }
    }

    pub fn show(&mut self, text: &str, color: Color) {
        self.label.text = text.to_string();
        self.label.color = color;
        self.label.alpha = 255;
    }

    #[allow(dead_code)] // Read by tests
    pub fn text(&self) -> &str {
        &self.label.text
    }

    pub fn is_visible(&self) -> bool {
        self.label.is_visible()
    }
}
