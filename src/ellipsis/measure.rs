//! Measurements taken after a row is laid out.

use ratatui::text::Span;

use super::item::RowItem;
use super::EllipsisRow;
use crate::style::CellScale;

/// The three regions measured after each layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowMeasurements {
    /// Width available to the whole row
    pub outer_width: u32,
    /// Natural width of the visible items and the gaps between them
    pub inner_width: u32,
    /// Indicator width plus its leading gap, or 0 when there is no indicator
    pub indicator_width: u32,
}

impl RowMeasurements {
    /// A zero-width indicator counts as absent and does not add a gap.
    ///
    /// `gap` is the row's column gap, the same spacing drawn between items,
    /// so a gapless row places the indicator flush against the last item.
    pub fn new(outer_width: u32, inner_width: u32, indicator: Option<u32>, gap: u32) -> Self {
        let indicator_width = indicator
            .filter(|width| *width > 0)
            .map_or(0, |width| width.saturating_add(gap));
        Self {
            outer_width,
            inner_width,
            indicator_width,
        }
    }

    pub fn required_width(&self) -> u32 {
        self.inner_width.saturating_add(self.indicator_width)
    }

    pub fn overflows(&self) -> bool {
        self.required_width() > self.outer_width
    }
}

/// Source of measurements for a row at a given cut index.
pub trait MeasureRow {
    /// Returns `None` while the row has no laid out container.
    fn measure(&self, cut_index: usize) -> Option<RowMeasurements>;
}

impl<F> MeasureRow for F
where
    F: Fn(usize) -> Option<RowMeasurements>,
{
    fn measure(&self, cut_index: usize) -> Option<RowMeasurements> {
        self(cut_index)
    }
}

/// Label of the overflow indicator.
pub fn indicator_label(hidden: usize) -> String {
    format!("+{hidden}")
}

fn label_width(hidden: usize) -> u32 {
    u32::try_from(Span::raw(indicator_label(hidden)).width()).unwrap_or(u32::MAX)
}

/// Width of `widths` laid side by side, `gap` cells apart.
pub fn inner_width(widths: &[u16], gap: u16) -> u32 {
    let items: u32 = widths.iter().map(|w| u32::from(*w)).sum();
    let gaps = u32::try_from(widths.len().saturating_sub(1)).unwrap_or(u32::MAX);
    items.saturating_add(gaps.saturating_mul(u32::from(gap)))
}

/// Measures a row of terminal cells without painting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMeasurer {
    outer_width: Option<u16>,
    item_widths: Vec<u16>,
    gap: u16,
}

impl CellMeasurer {
    pub fn new(outer_width: Option<u16>, item_widths: Vec<u16>, gap: u16) -> Self {
        Self {
            outer_width,
            item_widths,
            gap,
        }
    }

    /// Captures the item widths and column gap of `row`.
    pub fn for_row<T: RowItem>(
        row: &EllipsisRow<T>,
        outer_width: Option<u16>,
        scale: CellScale,
    ) -> Self {
        Self {
            outer_width,
            item_widths: row.items().iter().map(RowItem::width).collect(),
            gap: row.gap_cells(scale),
        }
    }

    pub fn gap(&self) -> u16 {
        self.gap
    }
}

impl MeasureRow for CellMeasurer {
    fn measure(&self, cut_index: usize) -> Option<RowMeasurements> {
        let outer = self.outer_width.filter(|w| *w > 0)?;
        let cut = cut_index.min(self.item_widths.len());
        let hidden = self.item_widths.len() - cut;
        let indicator = (hidden > 0).then(|| label_width(hidden));
        Some(RowMeasurements::new(
            u32::from(outer),
            inner_width(&self.item_widths[..cut], self.gap),
            indicator,
            u32::from(self.gap),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_adds_one_gap() {
        let m = RowMeasurements::new(20, 10, Some(3), 2);
        assert_eq!(m.indicator_width, 5);
        assert_eq!(m.required_width(), 15);
        assert!(!m.overflows());
    }

    #[test]
    fn test_absent_or_empty_indicator_is_free() {
        assert_eq!(RowMeasurements::new(20, 10, None, 2).indicator_width, 0);
        assert_eq!(RowMeasurements::new(20, 10, Some(0), 2).indicator_width, 0);
    }

    #[test]
    fn test_indicator_gap_follows_row_gap() {
        let measurer = CellMeasurer::new(Some(6), vec![2, 2, 2], 0);
        let two = measurer.measure(2).unwrap_or_default();
        assert_eq!(two.indicator_width, 2);
        assert!(!two.overflows());
    }

    #[test]
    fn test_exact_fit_does_not_overflow() {
        assert!(!RowMeasurements::new(10, 10, None, 1).overflows());
        assert!(RowMeasurements::new(10, 11, None, 1).overflows());
    }

    #[test]
    fn test_inner_width() {
        assert_eq!(inner_width(&[], 3), 0);
        assert_eq!(inner_width(&[4], 3), 4);
        assert_eq!(inner_width(&[4, 5, 6], 1), 17);
    }

    #[test]
    fn test_cell_measurer() {
        let measurer = CellMeasurer::new(Some(30), vec![4, 4, 4, 4], 1);
        let all = measurer.measure(4).unwrap_or_default();
        assert_eq!(all.inner_width, 19);
        assert_eq!(all.indicator_width, 0);

        let two = measurer.measure(2).unwrap_or_default();
        assert_eq!(two.inner_width, 9);
        assert_eq!(two.indicator_width, 3); // "+2" and one gap
    }

    #[test]
    fn test_cell_measurer_needs_a_container() {
        assert_eq!(CellMeasurer::new(None, vec![1], 1).measure(1), None);
        assert_eq!(CellMeasurer::new(Some(0), vec![1], 1).measure(1), None);
    }

    #[test]
    fn test_for_row_uses_column_gap() {
        let row = EllipsisRow::new(vec!["ab", "cde"]).gap(crate::style::Gap::axes(16, 0));
        let measurer = CellMeasurer::for_row(&row, Some(10), CellScale::default());
        assert_eq!(measurer.gap(), 2);
        assert_eq!(measurer.measure(2).map(|m| m.inner_width), Some(7));
    }

    #[test]
    fn test_label_width_grows_with_digits() {
        assert_eq!(indicator_label(7), "+7");
        assert_eq!(label_width(7), 2);
        assert_eq!(label_width(12), 3);
    }
}
