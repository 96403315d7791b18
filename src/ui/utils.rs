//! Rect helpers for placing overlays and checking terminal size.

use ratatui::layout::Rect;

/// Minimum terminal dimensions for the showcase
pub const MIN_TERMINAL_WIDTH: u16 = 40;
pub const MIN_TERMINAL_HEIGHT: u16 = 12;

/// Validates that the terminal meets minimum size requirements
///
/// # Returns
/// Returns `Ok(())` if terminal is large enough, or an error message if too small
pub fn validate_terminal_size(width: u16, height: u16) -> Result<(), String> {
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        Err(format!(
            "Terminal too small! Minimum size: {MIN_TERMINAL_WIDTH}x{MIN_TERMINAL_HEIGHT}, Current: {width}x{height}"
        ))
    } else {
        Ok(())
    }
}

/// Creates a centered area within a parent area
///
/// Width and height are clamped to the parent's size.
pub fn centered_rect(parent: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(parent.width);
    let height = height.min(parent.height);

    Rect {
        x: parent.x + (parent.width.saturating_sub(width)) / 2,
        y: parent.y + (parent.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Places a `width` x `height` box next to `anchor`, inside `bounds`.
///
/// The box's right edge lines up with the anchor's right edge. It goes above
/// the anchor when there is room, below it otherwise, and is shifted or
/// clamped to stay inside `bounds`.
pub fn anchored_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    let x = anchor
        .right()
        .saturating_sub(width)
        .max(bounds.x)
        .min(bounds.right().saturating_sub(width));

    let room_above = anchor.y.saturating_sub(bounds.y);
    let y = if room_above >= height {
        anchor.y - height
    } else {
        anchor
            .bottom()
            .max(bounds.y)
            .min(bounds.bottom().saturating_sub(height))
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_terminal_size() {
        assert!(validate_terminal_size(40, 12).is_ok());
        assert!(validate_terminal_size(120, 40).is_ok());
        assert!(validate_terminal_size(39, 12).is_err());
        assert!(validate_terminal_size(40, 11).is_err());
    }

    #[test]
    fn test_validate_terminal_size_error_message() {
        let err = validate_terminal_size(30, 10).unwrap_err();
        assert!(err.contains("Terminal too small"));
        assert!(err.contains("40x12"));
        assert!(err.contains("30x10"));
    }

    #[test]
    fn test_centered_rect_normal() {
        let result = centered_rect(Rect::new(0, 0, 100, 50), 60, 30);
        assert_eq!(result, Rect::new(20, 10, 60, 30));
    }

    #[test]
    fn test_centered_rect_too_large() {
        let result = centered_rect(Rect::new(0, 0, 50, 25), 100, 50);
        assert_eq!(result, Rect::new(0, 0, 50, 25));
    }

    #[test]
    fn test_anchored_above_right_aligned() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(30, 10, 3, 1);
        assert_eq!(anchored_rect(anchor, 12, 4, bounds), Rect::new(21, 6, 12, 4));
    }

    #[test]
    fn test_anchored_flips_below_without_room() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(30, 2, 3, 1);
        assert_eq!(anchored_rect(anchor, 12, 4, bounds), Rect::new(21, 3, 12, 4));
    }

    #[test]
    fn test_anchored_stays_inside_bounds() {
        let bounds = Rect::new(5, 0, 20, 6);
        // anchor near the left edge: box is pushed right to the bounds
        let anchor = Rect::new(6, 3, 2, 1);
        assert_eq!(anchored_rect(anchor, 10, 5, bounds), Rect::new(5, 1, 10, 5));
        // oversized boxes are clamped
        assert_eq!(anchored_rect(anchor, 50, 50, bounds), bounds);
    }
}
