//! Theme system for the layout widgets.
//!
//! Provides dark, light and custom palettes. Colors are stored as strings so
//! they can be written in the config file, and parsed into ratatui colors on use.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
    Custom,
}

/// Complete color theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub preset: ThemePreset,

    #[serde(default)]
    pub colors: ThemeColors,
}

/// Individual color definitions for the theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    /// Overflow indicator and other accents
    pub primary: String,
    /// Popover background
    pub background: String,
    /// Item text
    pub foreground: String,
    /// Popover and container borders
    pub border: String,
    /// Secondary text such as status lines
    pub muted: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::dark()
    }
}

impl ThemeColors {
    /// Creates a dark theme color palette
    pub fn dark() -> Self {
        Self {
            primary: "cyan".to_string(),
            background: "black".to_string(),
            foreground: "white".to_string(),
            border: "white".to_string(),
            muted: "darkgray".to_string(),
        }
    }

    /// Creates a light theme color palette
    pub fn light() -> Self {
        Self {
            primary: "blue".to_string(),
            background: "white".to_string(),
            foreground: "black".to_string(),
            border: "black".to_string(),
            muted: "gray".to_string(),
        }
    }

    /// Parses a color string into a ratatui Color
    ///
    /// Supports named colors (red, green, blue, etc.) and hex colors (#RRGGBB).
    /// Anything else falls back to white.
    pub fn parse_color(color_str: &str) -> Color {
        match color_str.to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "gray" | "grey" => Color::Gray,
            "darkgray" | "darkgrey" => Color::DarkGray,
            "lightred" => Color::LightRed,
            "lightgreen" => Color::LightGreen,
            "lightyellow" => Color::LightYellow,
            "lightblue" => Color::LightBlue,
            "lightmagenta" => Color::LightMagenta,
            "lightcyan" => Color::LightCyan,
            "white" => Color::White,
            s if s.starts_with('#') && s.len() == 7 => {
                let channel = |range: std::ops::Range<usize>| {
                    s.get(range).and_then(|hex| u8::from_str_radix(hex, 16).ok())
                };
                match (channel(1..3), channel(3..5), channel(5..7)) {
                    (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
                    _ => Color::White,
                }
            }
            _ => Color::White,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            preset: ThemePreset::Dark,
            colors: ThemeColors::dark(),
        }
    }
}

impl Theme {
    /// Creates a new theme from a preset
    pub fn from_preset(preset: ThemePreset) -> Self {
        let colors = match preset {
            ThemePreset::Dark | ThemePreset::Custom => ThemeColors::dark(),
            ThemePreset::Light => ThemeColors::light(),
        };

        Self { preset, colors }
    }

    /// Custom preset with explicit colors
    pub fn custom(colors: ThemeColors) -> Self {
        Self {
            preset: ThemePreset::Custom,
            colors,
        }
    }

    pub fn primary(&self) -> Color {
        ThemeColors::parse_color(&self.colors.primary)
    }

    pub fn background(&self) -> Color {
        ThemeColors::parse_color(&self.colors.background)
    }

    pub fn foreground(&self) -> Color {
        ThemeColors::parse_color(&self.colors.foreground)
    }

    pub fn border(&self) -> Color {
        ThemeColors::parse_color(&self.colors.border)
    }

    pub fn muted(&self) -> Color {
        ThemeColors::parse_color(&self.colors.muted)
    }

    /// The `+N` indicator looks like a link.
    pub fn indicator_style(&self) -> Style {
        Style::default()
            .fg(self.primary())
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn popover_style(&self) -> Style {
        Style::default().fg(self.foreground()).bg(self.background())
    }
}
