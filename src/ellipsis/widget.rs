//! ratatui widgets for [`EllipsisRow`]: the row itself and its overflow popover.

use std::marker::PhantomData;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Clear, StatefulWidget, Widget},
};

use super::item::RowItem;
use super::measure::{inner_width, CellMeasurer};
use super::EllipsisRow;
use crate::layout::{flow_rows, flow_width, Placement};
use crate::style::CellScale;
use crate::ui::theme::Theme;
use crate::ui::utils::anchored_rect;

/// Widest the popover may grow, in pixels.
pub const POPOVER_MAX_WIDTH_PX: f64 = 800.0;

/// Where each visible item and the indicator land inside a row area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowGeometry {
    /// One rect per visible item; empty rects for items past the right edge
    pub items: Vec<Rect>,
    pub indicator: Option<Rect>,
}

fn clip(x: u32, width: u16, line: Rect) -> Rect {
    let right = u32::from(line.right());
    if x >= right {
        return Rect::new(line.right(), line.y, 0, line.height);
    }
    let available = u16::try_from(right - x).unwrap_or(u16::MAX);
    // x < right <= u16::MAX
    let x = u16::try_from(x).unwrap_or(u16::MAX);
    Rect::new(x, line.y, width.min(available), line.height)
}

/// Lays out the row for its current cut index on the first line of `area`.
pub fn row_geometry<T: RowItem>(row: &EllipsisRow<T>, area: Rect, scale: CellScale) -> RowGeometry {
    let gap = row.gap_cells(scale);
    let line = Rect {
        height: area.height.min(1),
        ..area
    };

    let widths: Vec<u16> = row.visible().iter().map(RowItem::width).collect();
    let mut x = u32::from(area.x);
    let mut items = Vec::with_capacity(widths.len());
    for width in &widths {
        items.push(clip(x, *width, line));
        x += u32::from(*width) + u32::from(gap);
    }

    let indicator = row.overflow_label().map(|label| {
        let start = u32::from(area.x) + inner_width(&widths, gap) + u32::from(gap);
        let width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
        clip(start, width, line)
    });

    RowGeometry { items, indicator }
}

/// Renders an [`EllipsisRow`], settling its cut index to the area first.
///
/// An empty area counts as an unattached container: the row keeps its cut
/// index and nothing is drawn.
#[derive(Debug, Clone, Copy)]
pub struct EllipsisRowWidget<T> {
    scale: CellScale,
    style: Style,
    indicator_style: Style,
    _items: PhantomData<fn() -> T>,
}

impl<T> Default for EllipsisRowWidget<T> {
    fn default() -> Self {
        Self {
            scale: CellScale::default(),
            style: Style::default(),
            indicator_style: Style::default().add_modifier(Modifier::UNDERLINED),
            _items: PhantomData,
        }
    }
}

impl<T> EllipsisRowWidget<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row styled from a theme: indicator in the primary color, underlined like a link.
    pub fn themed(theme: &Theme) -> Self {
        Self::default()
            .style(Style::default().fg(theme.foreground()))
            .indicator_style(theme.indicator_style())
    }

    pub fn scale(mut self, scale: CellScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn indicator_style(mut self, style: Style) -> Self {
        self.indicator_style = style;
        self
    }
}

impl<T: RowItem> StatefulWidget for EllipsisRowWidget<T> {
    type State = EllipsisRow<T>;

    fn render(self, area: Rect, buf: &mut Buffer, row: &mut Self::State) {
        let outer = (!area.is_empty()).then_some(area.width);
        let measurer = CellMeasurer::for_row(row, outer, self.scale);
        row.settle(&measurer);
        if area.is_empty() {
            return;
        }

        buf.set_style(area, self.style);
        let geometry = row_geometry(row, area, self.scale);
        for (item, rect) in row.visible().iter().zip(&geometry.items) {
            item.render_item(*rect, buf);
        }
        if let (Some(rect), Some(label)) = (geometry.indicator, row.overflow_label()) {
            if !rect.is_empty() {
                buf.set_stringn(
                    rect.x,
                    rect.y,
                    label,
                    usize::from(rect.width),
                    self.indicator_style,
                );
            }
        }
    }
}

/// Bordered overlay listing the hidden items of an [`EllipsisRow`].
///
/// Drawn only while the row's popover is open. It sits above the anchor with
/// matching right edges, or below it when there is no room above, and wraps
/// the hidden items onto as many lines as needed.
#[derive(Debug)]
pub struct OverflowPopover<'a, T> {
    row: &'a EllipsisRow<T>,
    anchor: Rect,
    scale: CellScale,
    max_width_px: f64,
    style: Style,
    border_style: Style,
}

impl<'a, T: RowItem> OverflowPopover<'a, T> {
    pub fn new(row: &'a EllipsisRow<T>, anchor: Rect) -> Self {
        Self {
            row,
            anchor,
            scale: CellScale::default(),
            max_width_px: POPOVER_MAX_WIDTH_PX,
            style: Style::default(),
            border_style: Style::default(),
        }
    }

    pub fn themed(row: &'a EllipsisRow<T>, anchor: Rect, theme: &Theme) -> Self {
        Self::new(row, anchor)
            .style(theme.popover_style())
            .border_style(Style::default().fg(theme.border()))
    }

    pub fn scale(mut self, scale: CellScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn max_width_px(mut self, max_width_px: f64) -> Self {
        self.max_width_px = max_width_px;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    fn lines(&self, bounds: Rect) -> Vec<Vec<Placement>> {
        let widths: Vec<u16> = self.row.overflow().iter().map(RowItem::width).collect();
        let max_outer = self.scale.px_to_cells(self.max_width_px).min(bounds.width);
        flow_rows(
            &widths,
            max_outer.saturating_sub(2),
            self.row.gap_cells(self.scale),
        )
    }

    /// The rect the popover occupies inside `bounds`, if it is drawn at all.
    pub fn area(&self, bounds: Rect) -> Option<Rect> {
        if !self.row.is_popover_open() || self.row.overflow().is_empty() {
            return None;
        }
        let lines = self.lines(bounds);
        if lines.is_empty() {
            return None;
        }
        let row_gap = self.row.gap_spec().row_cells(self.scale);
        let line_count = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let content_height =
            line_count.saturating_add(row_gap.saturating_mul(line_count.saturating_sub(1)));
        let width = flow_width(&lines).saturating_add(2);
        let height = content_height.saturating_add(2);
        Some(anchored_rect(self.anchor, width, height, bounds))
    }
}

impl<T: RowItem> Widget for OverflowPopover<'_, T> {
    fn render(self, bounds: Rect, buf: &mut Buffer) {
        let Some(area) = self.area(bounds) else {
            return;
        };

        let block = Block::bordered()
            .border_style(self.border_style)
            .style(self.style);
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);

        let row_gap = self.row.gap_spec().row_cells(self.scale);
        let overflow = self.row.overflow();
        let mut y = inner.y;
        for line in self.lines(bounds) {
            if y >= inner.bottom() {
                break;
            }
            let line_rect = Rect {
                y,
                height: 1,
                ..inner
            };
            for placement in line {
                let x = u32::from(inner.x) + u32::from(placement.x);
                overflow[placement.index].render_item(clip(x, placement.width, line_rect), buf);
            }
            y = y.saturating_add(1).saturating_add(row_gap);
        }
    }
}
