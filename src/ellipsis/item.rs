//! Items that can sit in an ellipsis row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

/// A single-line item with a known display width.
pub trait RowItem {
    /// Display width in cells.
    fn width(&self) -> u16;

    /// Draws the item on the first line of `area`, clipped to its width.
    fn render_item(&self, area: Rect, buf: &mut Buffer);
}

fn to_cells(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

impl RowItem for String {
    fn width(&self) -> u16 {
        self.as_str().width()
    }

    fn render_item(&self, area: Rect, buf: &mut Buffer) {
        self.as_str().render_item(area, buf);
    }
}

impl RowItem for &str {
    fn width(&self) -> u16 {
        to_cells(Span::raw(*self).width())
    }

    fn render_item(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_stringn(area.x, area.y, self, usize::from(area.width), Style::default());
    }
}

impl RowItem for Span<'_> {
    fn width(&self) -> u16 {
        to_cells(Span::width(self))
    }

    fn render_item(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_span(area.x, area.y, self, area.width);
    }
}

impl RowItem for Line<'_> {
    fn width(&self) -> u16 {
        to_cells(Line::width(self))
    }

    fn render_item(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_line(area.x, area.y, self, area.width);
    }
}
