// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "terminal" uses the terminal's ANSI palette, the others use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Text
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,

    // Surfaces
    pub background: Color,
    pub panel_background: Color,
    pub border: Color,
    pub border_type: BorderType,

    // Focused widget outline and status bar keys
    pub highlight: Color,
}

impl Theme {
    /// Names accepted by [`Theme::by_name`]
    pub const NAMES: [&'static str; 3] = ["terminal", "midnight", "paper"];

    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "midnight" => Self::midnight(),
            "paper" => Self::paper(),
            _ => Self::terminal(), // "terminal" or unknown
        }
    }

    /// Terminal theme - uses the terminal's ANSI palette
    pub fn terminal() -> Self {
        Self {
            name: "terminal".to_string(),
            foreground: Color::Reset,
            muted: Color::Gray,
            accent: Color::Green,
            error: Color::Red,
            background: Color::Reset,
            panel_background: Color::Reset,
            border: Color::DarkGray,
            border_type: BorderType::Plain,
            highlight: Color::Yellow,
        }
    }

    /// Midnight - black page with the mint accent
    pub fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            foreground: Color::Rgb(0xf5, 0xf5, 0xf5),
            muted: Color::Rgb(0x9c, 0xa3, 0xaf), // gray-400
            accent: Color::Rgb(0x3c, 0xcf, 0x91), // mint
            error: Color::Rgb(0xf8, 0x71, 0x71),
            background: Color::Rgb(0x00, 0x00, 0x00),
            panel_background: Color::Rgb(0x1f, 0x29, 0x37), // gray-800
            border: Color::Rgb(0x37, 0x41, 0x51),           // gray-700
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(0x3c, 0xcf, 0x91),
        }
    }

    /// Paper - light background
    pub fn paper() -> Self {
        Self {
            name: "paper".to_string(),
            foreground: Color::Rgb(0x1f, 0x29, 0x37),
            muted: Color::Rgb(0x6b, 0x72, 0x80),
            accent: Color::Rgb(0x04, 0x78, 0x57),
            error: Color::Rgb(0xb9, 0x1c, 0x1c),
            background: Color::Rgb(0xfa, 0xfa, 0xf9),
            panel_background: Color::Rgb(0xf3, 0xf4, 0xf6),
            border: Color::Rgb(0xd1, 0xd5, 0xdb),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(0x04, 0x78, 0x57),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::terminal()
    }
}
