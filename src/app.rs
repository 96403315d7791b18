//! Showcase application state.
//!
//! Holds one ellipsis row of sample tags inside a container whose width the
//! user controls, plus the bits of UI state the renderer needs.

use std::collections::BTreeMap;

use flex_spacer::config::Config;
use flex_spacer::ellipsis::{EllipsisRow, MAX_VISIBLE_ITEMS};
use flex_spacer::layout::{Align, FlexSpace, SpacerColumn, SpacerRow};
use flex_spacer::style::{CellScale, StyleDeclaration};
use flex_spacer::ui::Theme;
use tracing::debug;

/// Tags shown in the row, cycled when items are added.
pub const SAMPLE_TAGS: [&str; 16] = [
    "rust",
    "ratatui",
    "crossterm",
    "flexbox",
    "layout",
    "terminal",
    "widgets",
    "serde",
    "toml",
    "tracing",
    "overflow",
    "ellipsis",
    "popover",
    "spacer",
    "gap",
    "columns",
];

/// Narrowest container the user can shrink to, in cells.
pub const MIN_CONTAINER_WIDTH: u16 = 4;
/// Widest container the user can grow to, in cells.
pub const MAX_CONTAINER_WIDTH: u16 = 200;
const WIDTH_STEP: u16 = 2;
const INITIAL_ITEMS: usize = 10;
const INITIAL_WIDTH: u16 = 48;

/// Main application state container.
pub struct App {
    /// The row being showcased
    pub row: EllipsisRow<String>,
    /// Requested inner width of the container, in cells
    pub container_width: u16,
    /// Whether help overlay is shown
    pub show_help: bool,
    /// Status message displayed to user
    pub status_message: String,
    /// Application configuration
    pub config: Config,
    pub theme: Theme,
    next_tag: usize,
}

impl App {
    pub fn new(config: Config) -> Self {
        let items = (0..INITIAL_ITEMS).map(sample_tag).collect();
        let row = EllipsisRow::new(items)
            .gap(config.ellipsis_row.gap.clone())
            .max_items(config.ellipsis_row.max_items);
        let theme = config.theme();

        Self {
            row,
            container_width: INITIAL_WIDTH,
            show_help: false,
            status_message: "Resize the container with ←/→".to_string(),
            config,
            theme,
            next_tag: INITIAL_ITEMS,
        }
    }

    pub fn scale(&self) -> CellScale {
        self.config.scale()
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn widen(&mut self) {
        self.resize(self.container_width.saturating_add(WIDTH_STEP));
    }

    pub fn narrow(&mut self) {
        self.resize(self.container_width.saturating_sub(WIDTH_STEP));
    }

    /// A wider container may fit hidden items again, so the row starts over.
    fn resize(&mut self, width: u16) {
        let width = width.clamp(MIN_CONTAINER_WIDTH, MAX_CONTAINER_WIDTH);
        if width == self.container_width {
            return;
        }
        self.container_width = width;
        self.relayout();
        self.status_message = format!("Container width: {width} cells");
        debug!(width, "container resized");
    }

    /// Starts the row over from its maximum; the next draw settles it again.
    pub fn relayout(&mut self) {
        let items = self.row.items().to_vec();
        self.row.set_items(items);
    }

    pub fn increase_max_items(&mut self) {
        let max_items = (self.row.max_visible() + 1).min(MAX_VISIBLE_ITEMS);
        self.set_max_items(max_items);
    }

    /// Stops at 1; zero would mean "no limit".
    pub fn decrease_max_items(&mut self) {
        let max_items = self.row.max_visible().saturating_sub(1).max(1);
        self.set_max_items(max_items);
    }

    fn set_max_items(&mut self, max_items: usize) {
        self.row.set_max_items(max_items);
        self.status_message = format!("Max items: {}", self.row.max_visible());
    }

    pub fn add_item(&mut self) {
        let tag = sample_tag(self.next_tag);
        self.next_tag += 1;
        self.status_message = format!("Added \"{tag}\"");
        self.row.update_items(|items| items.push(tag));
    }

    pub fn remove_item(&mut self) {
        let mut removed = None;
        self.row.update_items(|items| removed = items.pop());
        self.status_message = match removed {
            Some(tag) => format!("Removed \"{tag}\""),
            None => "No items left".to_string(),
        };
    }

    pub fn toggle_popover(&mut self) {
        self.row.toggle_popover();
        if !self.row.is_popover_open() && self.row.overflow_count() == 0 {
            self.status_message = "Nothing hidden".to_string();
        }
    }

    /// Closes the popover, or the help overlay if no popover is open.
    pub fn back(&mut self) {
        if self.row.is_popover_open() {
            self.row.close_popover();
        } else {
            self.show_help = false;
        }
    }

    /// Style of the flex row holding the items and the indicator.
    pub fn row_style(&self) -> StyleDeclaration {
        row_spacer(&self.config).to_style()
    }
}

fn sample_tag(index: usize) -> String {
    let tag = SAMPLE_TAGS[index % SAMPLE_TAGS.len()];
    match index / SAMPLE_TAGS.len() {
        0 => tag.to_string(),
        round => format!("{tag}-{}", round + 1),
    }
}

fn row_spacer(config: &Config) -> SpacerRow {
    SpacerRow::new()
        .gap(config.ellipsis_row.gap.clone())
        .align(Align::Center)
        .nowrap(true)
}

/// Screen layout: header, body and footer stacked with no gap.
pub fn screen_column() -> SpacerColumn {
    SpacerColumn::new().gap(0).max_height(true)
}

/// Style declarations of the primitives used by the showcase, keyed by name.
pub fn showcase_styles(config: &Config) -> BTreeMap<&'static str, StyleDeclaration> {
    BTreeMap::from([
        ("screen", screen_column().to_style()),
        ("ellipsis_row", row_spacer(config).to_style()),
        (
            "popover_content",
            SpacerRow::new()
                .gap(config.ellipsis_row.gap.clone())
                .to_style(),
        ),
        ("flex_space", FlexSpace::default().to_style()),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use flex_spacer::ellipsis::RowMeasurements;
    use pretty_assertions::assert_eq;

    fn create_test_app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn test_new_app_starts_with_sample_items() {
        let app = create_test_app();
        assert_eq!(app.row.len(), INITIAL_ITEMS);
        assert_eq!(app.row.cut_index(), INITIAL_ITEMS);
        assert_eq!(app.row.items()[0], "rust");
        assert_eq!(app.container_width, INITIAL_WIDTH);
    }

    #[test]
    fn test_new_app_uses_configured_max_items() {
        let mut config = Config::default();
        config.ellipsis_row.max_items = 3;
        let app = App::new(config);
        assert_eq!(app.row.max_visible(), 3);
        assert_eq!(app.row.cut_index(), 3);
    }

    #[test]
    fn test_sample_tags_get_suffix_after_first_round() {
        assert_eq!(sample_tag(0), "rust");
        assert_eq!(sample_tag(15), "columns");
        assert_eq!(sample_tag(16), "rust-2");
        assert_eq!(sample_tag(33), "ratatui-3");
    }

    #[test]
    fn test_widen_and_narrow_clamp() {
        let mut app = create_test_app();
        app.container_width = MIN_CONTAINER_WIDTH;
        app.narrow();
        assert_eq!(app.container_width, MIN_CONTAINER_WIDTH);

        app.widen();
        assert_eq!(app.container_width, MIN_CONTAINER_WIDTH + WIDTH_STEP);

        app.container_width = MAX_CONTAINER_WIDTH;
        app.widen();
        assert_eq!(app.container_width, MAX_CONTAINER_WIDTH);
    }

    #[test]
    fn test_resize_resets_cut_index() {
        let mut app = create_test_app();
        // pretend an earlier paint hid a few items
        app.row.layout_pass(Some(RowMeasurements::new(1, 10, None, 0)));
        assert_eq!(app.row.cut_index(), INITIAL_ITEMS - 1);

        app.widen();
        assert_eq!(app.row.cut_index(), INITIAL_ITEMS);
    }

    #[test]
    fn test_max_items_bounds() {
        let mut app = create_test_app();
        app.increase_max_items();
        assert_eq!(app.row.max_visible(), MAX_VISIBLE_ITEMS);

        for _ in 0..100 {
            app.decrease_max_items();
        }
        assert_eq!(app.row.max_visible(), 1);
        assert_eq!(app.row.cut_index(), 1);
        assert_eq!(app.status_message, "Max items: 1");
    }

    #[test]
    fn test_add_and_remove_items() {
        let mut app = create_test_app();
        app.add_item();
        assert_eq!(app.row.len(), INITIAL_ITEMS + 1);
        assert_eq!(app.row.items().last().unwrap(), "overflow");

        app.remove_item();
        app.remove_item();
        assert_eq!(app.row.len(), INITIAL_ITEMS - 1);
        assert_eq!(app.status_message, "Removed \"tracing\"");
    }

    #[test]
    fn test_remove_from_empty_row() {
        let mut app = create_test_app();
        for _ in 0..INITIAL_ITEMS {
            app.remove_item();
        }
        app.remove_item();
        assert!(app.row.is_empty());
        assert_eq!(app.status_message, "No items left");
    }

    #[test]
    fn test_popover_needs_hidden_items() {
        let mut app = create_test_app();
        app.toggle_popover();
        assert!(!app.row.is_popover_open());
        assert_eq!(app.status_message, "Nothing hidden");

        app.row.set_max_items(2);
        app.toggle_popover();
        assert!(app.row.is_popover_open());

        app.back();
        assert!(!app.row.is_popover_open());
    }

    #[test]
    fn test_toggle_help() {
        let mut app = create_test_app();
        app.toggle_help();
        assert!(app.show_help);
        app.back();
        assert!(!app.show_help);
    }

    #[test]
    fn test_showcase_styles() {
        let styles = showcase_styles(&Config::default());
        assert_eq!(styles.len(), 4);
        assert_eq!(styles["ellipsis_row"].gap, "8px");
        assert_eq!(styles["ellipsis_row"].flex_wrap.as_css(), "nowrap");
        assert_eq!(styles["screen"].flex_direction.as_css(), "column");
        assert_eq!(styles["screen"].get("height").as_deref(), Some("100%"));
    }
}
