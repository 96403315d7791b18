//! Responsive truncation of a single row of items.
//!
//! [`EllipsisRow`] shows as many leading items as fit on one line and folds
//! the rest behind a `+N` indicator. The visible count (the cut index) starts
//! at `min(max_items, item_count)` and shrinks one item per layout pass while
//! the row overflows:
//!
//! ```text
//!   reset ──► cut = min(max, n)
//!                 │
//!                 ▼
//!   measure ──► inner + indicator > outer && cut > 0 ──► cut -= 1 ──┐
//!      ▲          │ no                                              │
//!      │          ▼                                                 │
//!      │        settled (Fits, or Saturated when cut == 0)          │
//!      └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Replacing the items or changing `max_items` resets the cut index.
//! [`EllipsisRow::settle`] runs the loop to a fixed point, capped at
//! [`MAX_RENDER_DEPTH`] shrinks per call. The cut index never starts above
//! [`MAX_VISIBLE_ITEMS`], so with the default bound a full collapse always
//! completes; [`EllipsisRow::settle_within`] takes a tighter bound.

pub mod item;
pub mod measure;
pub mod widget;

pub use item::RowItem;
pub use measure::{indicator_label, CellMeasurer, MeasureRow, RowMeasurements};
pub use widget::{row_geometry, EllipsisRowWidget, OverflowPopover, RowGeometry};

use std::cell::Cell;

use tracing::{debug, trace, warn};

use crate::style::{CellScale, Gap};

/// Upper bound on successive shrinks performed by one [`EllipsisRow::settle`] call.
pub const MAX_RENDER_DEPTH: usize = 50;

/// Hard cap on the number of visible items.
pub const MAX_VISIBLE_ITEMS: usize = 50;

/// Default gap between items, in pixels.
pub const BETWEEN_ITEMS_GAP: f64 = 8.0;

/// Clamps a requested maximum to the supported range.
///
/// Zero means "no explicit limit" and falls back to [`MAX_VISIBLE_ITEMS`].
pub fn effective_max_items(max_items: usize) -> usize {
    if max_items == 0 {
        MAX_VISIBLE_ITEMS
    } else {
        max_items.min(MAX_VISIBLE_ITEMS)
    }
}

/// Outcome of a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing could be measured; the cut index is unchanged
    Skipped,
    /// The row overflowed and one item moved into the overflow set
    Shrunk { from: usize, to: usize },
    /// Visible items and indicator fit the container
    Fits,
    /// Still overflowing with nothing left to hide
    Saturated,
}

/// Outcome of [`EllipsisRow::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Fits { shrinks: usize },
    /// Every item is hidden and the indicator alone still overflows
    Saturated { shrinks: usize },
    /// The container could not be measured; try again after the next paint
    Unmeasured { shrinks: usize },
    /// The shrink bound was hit before a fixed point
    DepthLimited,
}

impl Settled {
    /// Whether the row reached a fixed point for the current inputs.
    pub fn is_stable(&self) -> bool {
        matches!(self, Settled::Fits { .. } | Settled::Saturated { .. })
    }
}

/// Row of items that truncates itself to the available width.
///
/// # Examples
/// ```
/// use flex_spacer::ellipsis::{EllipsisRow, RowMeasurements, Settled};
///
/// let mut row = EllipsisRow::new(vec!["alpha", "beta", "gamma"]).max_items(2);
/// assert_eq!(row.cut_index(), 2);
///
/// // two items of 5 cells with a 1 cell gap, plus "+1" and its gap, in 10 cells
/// let settled = row.settle(&|cut: usize| {
///     let inner = (cut as u32) * 5 + (cut as u32).saturating_sub(1);
///     Some(RowMeasurements::new(10, inner, Some(2), 1))
/// });
/// assert_eq!(settled, Settled::Fits { shrinks: 1 });
/// assert_eq!(row.overflow_label().as_deref(), Some("+2"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EllipsisRow<T> {
    items: Vec<T>,
    gap: Gap,
    max_items: usize,
    cut_index: usize,
    popover_open: bool,
    last_settled: Option<Settled>,
    gap_cells: Cell<Option<(CellScale, u16)>>,
}

impl<T> EllipsisRow<T> {
    pub fn new(items: Vec<T>) -> Self {
        let max_items = MAX_VISIBLE_ITEMS;
        let cut_index = max_items.min(items.len());
        Self {
            items,
            gap: Gap::from(BETWEEN_ITEMS_GAP),
            max_items,
            cut_index,
            popover_open: false,
            last_settled: None,
            gap_cells: Cell::new(None),
        }
    }

    pub fn gap(mut self, gap: impl Into<Gap>) -> Self {
        self.set_gap(gap);
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.set_max_items(max_items);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn gap_spec(&self) -> &Gap {
        &self.gap
    }

    /// The clamped maximum in effect.
    pub fn max_visible(&self) -> usize {
        self.max_items
    }

    /// Number of leading items currently visible.
    pub fn cut_index(&self) -> usize {
        self.cut_index
    }

    pub fn visible(&self) -> &[T] {
        &self.items[..self.cut_index]
    }

    pub fn overflow(&self) -> &[T] {
        &self.items[self.cut_index..]
    }

    pub fn overflow_count(&self) -> usize {
        self.items.len() - self.cut_index
    }

    /// `+N` label of the indicator, if anything is hidden.
    pub fn overflow_label(&self) -> Option<String> {
        match self.overflow_count() {
            0 => None,
            hidden => Some(indicator_label(hidden)),
        }
    }

    /// Replaces the items and resets the cut index.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.reset();
    }

    /// Applies `update` to the items and resets the cut index.
    pub fn update_items(&mut self, update: impl FnOnce(&mut Vec<T>)) {
        update(&mut self.items);
        self.reset();
    }

    /// Changes the maximum; resets the cut index only if the clamped value changed.
    pub fn set_max_items(&mut self, max_items: usize) {
        let max_items = effective_max_items(max_items);
        if max_items != self.max_items {
            self.max_items = max_items;
            self.reset();
        }
    }

    /// Changes the gap. The next layout pass re-measures with it.
    pub fn set_gap(&mut self, gap: impl Into<Gap>) {
        self.gap = gap.into();
        self.gap_cells.set(None);
    }

    /// Column gap in cells, cached until the gap or the scale changes.
    pub fn gap_cells(&self, scale: CellScale) -> u16 {
        if let Some((cached_scale, cells)) = self.gap_cells.get() {
            if cached_scale == scale {
                return cells;
            }
        }
        let cells = self.gap.column_cells(scale);
        self.gap_cells.set(Some((scale, cells)));
        cells
    }

    fn reset(&mut self) {
        self.cut_index = self.max_items.min(self.items.len());
        if self.overflow_count() == 0 {
            self.popover_open = false;
        }
        self.last_settled = None;
        trace!(
            cut_index = self.cut_index,
            items = self.items.len(),
            max_items = self.max_items,
            "ellipsis row reset"
        );
    }

    /// Applies one post-layout measurement taken at the current cut index.
    pub fn layout_pass(&mut self, measurements: Option<RowMeasurements>) -> Transition {
        let Some(measurements) = measurements else {
            trace!(cut_index = self.cut_index, "row not measurable, skipping pass");
            return Transition::Skipped;
        };

        if !measurements.overflows() {
            return Transition::Fits;
        }
        if self.cut_index == 0 {
            return Transition::Saturated;
        }

        let from = self.cut_index;
        self.cut_index -= 1;
        debug!(
            from,
            to = self.cut_index,
            required = measurements.required_width(),
            available = measurements.outer_width,
            "row overflows, hiding one item"
        );
        Transition::Shrunk {
            from,
            to: self.cut_index,
        }
    }

    /// Measures and shrinks until the row fits, saturates, or the bound is hit.
    pub fn settle<M: MeasureRow + ?Sized>(&mut self, measurer: &M) -> Settled {
        self.settle_within(measurer, MAX_RENDER_DEPTH)
    }

    /// Like [`settle`](Self::settle), stopping after `max_shrinks` shrinks.
    ///
    /// A row stopped by the bound keeps its cut index, so a later call
    /// resumes from there.
    pub fn settle_within<M: MeasureRow + ?Sized>(
        &mut self,
        measurer: &M,
        max_shrinks: usize,
    ) -> Settled {
        let settled = self.run_to_fixed_point(measurer, max_shrinks.min(MAX_RENDER_DEPTH));
        self.last_settled = Some(settled);
        settled
    }

    /// Result of the most recent [`settle`](Self::settle), cleared by a reset.
    pub fn last_settled(&self) -> Option<Settled> {
        self.last_settled
    }

    fn run_to_fixed_point<M: MeasureRow + ?Sized>(
        &mut self,
        measurer: &M,
        max_shrinks: usize,
    ) -> Settled {
        let mut shrinks = 0;
        loop {
            match self.layout_pass(measurer.measure(self.cut_index)) {
                Transition::Fits => return Settled::Fits { shrinks },
                Transition::Saturated => return Settled::Saturated { shrinks },
                Transition::Skipped => return Settled::Unmeasured { shrinks },
                Transition::Shrunk { .. } => {
                    shrinks += 1;
                    if shrinks >= max_shrinks && self.cut_index > 0 {
                        warn!(
                            cut_index = self.cut_index,
                            bound = max_shrinks,
                            "ellipsis row did not settle within the shrink bound"
                        );
                        return Settled::DepthLimited;
                    }
                }
            }
        }
    }

    pub fn is_popover_open(&self) -> bool {
        self.popover_open
    }

    /// Opens or closes the overflow popover. Stays closed when nothing is hidden.
    pub fn toggle_popover(&mut self) {
        self.popover_open = !self.popover_open && self.overflow_count() > 0;
    }

    pub fn close_popover(&mut self) {
        self.popover_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Measurer for items of fixed widths with a fixed gap.
    fn fixed(outer: u16, widths: Vec<u16>, gap: u16) -> CellMeasurer {
        CellMeasurer::new(Some(outer), widths, gap)
    }

    #[test]
    fn test_initial_cut_index() {
        let row = EllipsisRow::new(vec![1, 2, 3]);
        assert_eq!(row.cut_index(), 3);
        assert_eq!(row.overflow_label(), None);

        let row = EllipsisRow::new((0..80).collect::<Vec<_>>());
        assert_eq!(row.cut_index(), MAX_VISIBLE_ITEMS);
        assert_eq!(row.overflow_count(), 30);
    }

    #[test]
    fn test_max_items_is_clamped() {
        let row = EllipsisRow::new((0..80).collect::<Vec<_>>()).max_items(500);
        assert_eq!(row.max_visible(), 50);
        assert_eq!(row.cut_index(), 50);
    }

    #[test]
    fn test_zero_max_items_means_unlimited() {
        let row = EllipsisRow::new(vec![1, 2, 3]).max_items(0);
        assert_eq!(row.cut_index(), 3);
    }

    #[test]
    fn test_reset_on_max_items_change() {
        let mut row = EllipsisRow::new((0..10).collect::<Vec<_>>());
        assert_eq!(row.cut_index(), 10);
        row.set_max_items(3);
        assert_eq!(row.cut_index(), 3);
        assert_eq!(row.visible(), &[0, 1, 2]);
        assert_eq!(row.overflow().len(), 7);
    }

    #[test]
    fn test_unchanged_max_items_keeps_cut_index() {
        let mut row = EllipsisRow::new((0..10).collect::<Vec<_>>());
        row.settle(&fixed(20, vec![4; 10], 1));
        let cut = row.cut_index();
        assert!(cut < 10);
        row.set_max_items(50);
        assert_eq!(row.cut_index(), cut);
    }

    #[test]
    fn test_reset_on_new_items() {
        let mut row = EllipsisRow::new((0..10).collect::<Vec<_>>());
        row.settle(&fixed(10, vec![4; 10], 1));
        assert!(row.cut_index() < 10);
        row.set_items(vec![7, 8]);
        assert_eq!(row.cut_index(), 2);
    }

    #[test]
    fn test_update_items_resets() {
        let mut row = EllipsisRow::new(vec![1, 2, 3]).max_items(2);
        row.update_items(|items| items.truncate(1));
        assert_eq!(row.cut_index(), 1);
    }

    #[test]
    fn test_skipped_pass_keeps_state() {
        let mut row = EllipsisRow::new(vec![1, 2, 3]);
        assert_eq!(row.layout_pass(None), Transition::Skipped);
        assert_eq!(row.cut_index(), 3);
        assert_eq!(
            row.settle(&CellMeasurer::new(None, vec![5; 3], 1)),
            Settled::Unmeasured { shrinks: 0 }
        );
    }

    #[test]
    fn test_last_settled_cleared_by_reset() {
        let mut row = EllipsisRow::new(vec![1, 2, 3]);
        assert_eq!(row.last_settled(), None);
        row.settle(&fixed(100, vec![1, 1, 1], 1));
        assert_eq!(row.last_settled(), Some(Settled::Fits { shrinks: 0 }));
        row.set_items(vec![4]);
        assert_eq!(row.last_settled(), None);
    }

    #[test]
    fn test_single_shrink() {
        let mut row = EllipsisRow::new(vec![1, 2, 3]);
        let overflowing = RowMeasurements::new(10, 12, None, 1);
        assert_eq!(
            row.layout_pass(Some(overflowing)),
            Transition::Shrunk { from: 3, to: 2 }
        );
        assert_eq!(row.overflow_label().as_deref(), Some("+1"));
    }

    #[test]
    fn test_settle_fits() {
        // 3 + 1 + 3 + 1 + 3 = 11 > 10; with two items: 7 + "+1" (2) + gap (1) = 10
        let mut row = EllipsisRow::new(vec!["a", "b", "c"]);
        let settled = row.settle(&fixed(10, vec![3, 3, 3], 1));
        assert_eq!(settled, Settled::Fits { shrinks: 1 });
        assert_eq!(row.cut_index(), 2);
    }

    #[test]
    fn test_settle_saturates_when_one_item_is_too_wide() {
        let mut row = EllipsisRow::new(vec!["wide"]);
        let settled = row.settle(&fixed(3, vec![10], 1));
        // hiding the only item leaves "+1" plus its gap, which fits in 3
        assert_eq!(settled, Settled::Fits { shrinks: 1 });
        assert_eq!(row.cut_index(), 0);

        let mut row = EllipsisRow::new(vec!["wide", "wider"]);
        let settled = row.settle(&fixed(2, vec![10, 10], 1));
        assert_eq!(settled, Settled::Saturated { shrinks: 2 });
        assert_eq!(row.cut_index(), 0);
        assert_eq!(row.layout_pass(Some(RowMeasurements::new(2, 0, Some(2), 1))), Transition::Saturated);
        assert_eq!(row.cut_index(), 0);
    }

    #[test]
    fn test_settle_is_idempotent() {
        let mut row = EllipsisRow::new((0..12).collect::<Vec<_>>());
        let measurer = fixed(30, vec![5; 12], 1);
        let first = row.settle(&measurer);
        assert!(first.is_stable());
        let cut = row.cut_index();
        assert_eq!(row.settle(&measurer), Settled::Fits { shrinks: 0 });
        assert_eq!(row.cut_index(), cut);
    }

    #[test]
    fn test_shrink_bound_covers_full_collapse() {
        let mut row = EllipsisRow::new(vec![0u8; 60]);
        assert_eq!(row.cut_index(), MAX_VISIBLE_ITEMS);
        let settled = row.settle(&|_cut: usize| Some(RowMeasurements::new(1, 100, Some(3), 1)));
        assert_eq!(settled, Settled::Saturated { shrinks: MAX_RENDER_DEPTH });
        assert_eq!(row.cut_index(), 0);
    }

    #[test]
    fn test_default_bound_covers_the_visible_cap() {
        assert!(MAX_VISIBLE_ITEMS <= MAX_RENDER_DEPTH);
    }

    #[test]
    fn test_settle_within_stops_at_bound_and_resumes() {
        let mut row = EllipsisRow::new((0..10).collect::<Vec<_>>());
        let measurer = fixed(9, vec![4; 10], 1);

        assert_eq!(row.settle_within(&measurer, 3), Settled::DepthLimited);
        assert_eq!(row.cut_index(), 7);
        assert_eq!(row.last_settled(), Some(Settled::DepthLimited));
        assert!(!Settled::DepthLimited.is_stable());

        // "+9" plus its gap leaves room for one item: 4 + 1 + 2 = 7
        assert_eq!(row.settle(&measurer), Settled::Fits { shrinks: 6 });
        assert_eq!(row.cut_index(), 1);
    }

    #[test]
    fn test_settle_within_ignores_bound_once_settled() {
        let mut row = EllipsisRow::new(vec![1, 2, 3]);
        // the third shrink empties the row, which counts as settled
        let settled = row.settle_within(&fixed(1, vec![5; 3], 1), 3);
        assert_eq!(settled, Settled::Saturated { shrinks: 3 });
        assert_eq!(row.settle_within(&fixed(100, vec![5; 3], 1), 0), Settled::Fits { shrinks: 0 });
    }

    #[test]
    fn test_popover_toggle() {
        let mut row = EllipsisRow::new(vec![1, 2, 3]);
        row.toggle_popover();
        assert!(!row.is_popover_open(), "nothing hidden, nothing to open");

        row.set_max_items(1);
        row.toggle_popover();
        assert!(row.is_popover_open());
        row.toggle_popover();
        assert!(!row.is_popover_open());

        row.toggle_popover();
        row.set_max_items(10);
        assert!(!row.is_popover_open(), "popover closes once overflow is empty");
    }

    #[test]
    fn test_gap_cells_follow_gap_and_scale() {
        let mut row = EllipsisRow::new(vec!["a", "b"]);
        assert_eq!(row.gap_cells(CellScale::default()), 1);
        assert_eq!(row.gap_cells(CellScale::new(4.0)), 2);

        row.set_gap(Gap::axes("3ch", 0));
        assert_eq!(row.gap_cells(CellScale::new(4.0)), 3);
    }
}
