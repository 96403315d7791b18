//! UI support shared by the widgets and the showcase binary.
//!
//! - Theme system with dark/light/custom palettes
//! - Rect helpers for overlays and terminal size checks

pub mod theme;
pub mod utils;

pub use theme::{Theme, ThemeColors, ThemePreset};
pub use utils::{
    anchored_rect, centered_rect, validate_terminal_size, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH,
};
