use serde::{Deserialize, Serialize};

use super::Color;

/// Colors used to draw the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub name: String,

    pub background: Color,
    pub foreground: Color,
    pub caret: Color,
    /// Background of the line holding the caret
    pub line_highlight: Color,

    pub line_number: Color,
    pub line_number_active: Color,

    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub warning: Color,
}

impl Theme {
    /// Dark grey palette the editor ships with
    pub fn default_dark() -> Self {
        Self {
            name: "default".to_string(),
            background: Color::rgb(0x24, 0x24, 0x24),
            foreground: Color::rgb(0xc2, 0xc2, 0xc2),
            caret: Color::rgb(0xf0, 0xf0, 0xf0),
            line_highlight: Color::rgb(0x40, 0x40, 0x40),

            line_number: Color::rgb(0xa2, 0xa2, 0xa2),
            line_number_active: Color::rgb(0xe2, 0xe2, 0xe2),

            status_bar_bg: Color::rgb(0x40, 0x40, 0x40),
            status_bar_fg: Color::rgb(0xe2, 0xe2, 0xe2),
            warning: Color::rgb(0xfa, 0xbd, 0x2f),
        }
    }

    /// Gruvbox Dark - warm retro theme
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "gruvbox-dark".to_string(),
            background: Color::rgb(0x28, 0x28, 0x28),
            foreground: Color::rgb(0xeb, 0xdb, 0xb2),
            caret: Color::rgb(0xfe, 0x80, 0x19),
            line_highlight: Color::rgb(0x3c, 0x38, 0x36),

            line_number: Color::rgb(0x66, 0x5c, 0x54),
            line_number_active: Color::rgb(0xfa, 0xbd, 0x2f),

            status_bar_bg: Color::rgb(0x3c, 0x38, 0x36),
            status_bar_fg: Color::rgb(0xeb, 0xdb, 0xb2),
            warning: Color::rgb(0xfa, 0xbd, 0x2f),
        }
    }

    /// Nord
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::rgb(0x2e, 0x34, 0x40),
            foreground: Color::rgb(0xd8, 0xde, 0xe9),
            caret: Color::rgb(0x88, 0xc0, 0xd0),
            line_highlight: Color::rgb(0x3b, 0x42, 0x52),

            line_number: Color::rgb(0x4c, 0x56, 0x6a),
            line_number_active: Color::rgb(0xd8, 0xde, 0xe9),

            status_bar_bg: Color::rgb(0x3b, 0x42, 0x52),
            status_bar_fg: Color::rgb(0xd8, 0xde, 0xe9),
            warning: Color::rgb(0xeb, 0xcb, 0x8b),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
