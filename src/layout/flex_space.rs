//! `FlexSpace`: the flex container every other primitive resolves into.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use serde::{Deserialize, Serialize};

use crate::style::{
    resolve_gap, AlignItems, BoxStyle, CellScale, FlexDirection, FlexWrap, Gap, JustifyContent,
    StyleDeclaration,
};

/// Flexible container with full control over the flex attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlexSpace {
    /// Space between children (default `0`)
    pub gap: Gap,
    /// Grow factor (default `0`)
    pub grow: f64,
    /// Shrink factor (default `1`)
    pub shrink: f64,
    /// Main axis (default `row`)
    pub direction: FlexDirection,
    /// Main axis distribution (default `flex-start`)
    pub justify_content: JustifyContent,
    /// Cross axis alignment (default `stretch`)
    pub align_items: AlignItems,
    /// Wrapping of children (default `wrap`)
    pub wrap: FlexWrap,
    /// Sizing attributes forwarded onto the container
    pub style: BoxStyle,
    /// Class attribute forwarded onto the container
    pub class_name: Option<String>,
}

impl Default for FlexSpace {
    fn default() -> Self {
        Self {
            gap: Gap::default(),
            grow: 0.0,
            shrink: 1.0,
            direction: FlexDirection::Row,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            wrap: FlexWrap::Wrap,
            style: BoxStyle::default(),
            class_name: None,
        }
    }
}

impl FlexSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(mut self, gap: impl Into<Gap>) -> Self {
        self.gap = gap.into();
        self
    }

    pub fn grow(mut self, grow: f64) -> Self {
        self.grow = grow;
        self
    }

    pub fn shrink(mut self, shrink: f64) -> Self {
        self.shrink = shrink;
        self
    }

    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn justify_content(mut self, justify_content: JustifyContent) -> Self {
        self.justify_content = justify_content;
        self
    }

    pub fn align_items(mut self, align_items: AlignItems) -> Self {
        self.align_items = align_items;
        self
    }

    pub fn wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Resolves the container style.
    pub fn to_style(&self) -> StyleDeclaration {
        StyleDeclaration {
            size: self.style.clone(),
            display: "flex",
            gap: resolve_gap(&self.gap),
            flex_direction: self.direction,
            justify_content: self.justify_content,
            align_items: self.align_items,
            flex_wrap: self.wrap,
            flex_grow: self.grow,
            flex_shrink: self.shrink,
        }
    }

    /// Builds the ratatui layout for this container.
    ///
    /// Spacing comes from the gap along the main axis. Wrapping is not
    /// modelled: children always share a single line. Constraints are in
    /// screen order, so reverse directions pack them against the far edge.
    pub fn layout<I>(&self, constraints: I, scale: CellScale) -> Layout
    where
        I: IntoIterator,
        I::Item: Into<Constraint>,
    {
        let (row_gap, column_gap) = self.gap.cells(scale);
        let spacing = if self.direction.is_row() {
            column_gap
        } else {
            row_gap
        };
        Layout::default()
            .direction(self.direction.to_direction())
            .flex(self.main_axis_flex())
            .spacing(spacing)
            .constraints(constraints)
    }

    /// Flex mode measured from the main-start edge of this direction.
    fn main_axis_flex(&self) -> Flex {
        match self.justify_content.to_flex() {
            Flex::Start if self.direction.is_reversed() => Flex::End,
            Flex::End if self.direction.is_reversed() => Flex::Start,
            flex => flex,
        }
    }

    /// Splits `area` into one rect per constraint, in child order.
    ///
    /// Reverse directions hand the first child the last slot.
    pub fn split<I>(&self, area: Rect, constraints: I, scale: CellScale) -> Vec<Rect>
    where
        I: IntoIterator,
        I::Item: Into<Constraint>,
    {
        let constraints: Vec<Constraint> = constraints.into_iter().map(Into::into).collect();
        let mut ordered = constraints.clone();
        if self.direction.is_reversed() {
            ordered.reverse();
        }
        let mut rects = self.layout(ordered, scale).split(area).to_vec();
        if self.direction.is_reversed() {
            rects.reverse();
        }
        rects
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let style = FlexSpace::default().to_style();
        assert_eq!(style.display, "flex");
        assert_eq!(style.gap, "0px");
        assert_eq!(style.flex_direction, FlexDirection::Row);
        assert_eq!(style.justify_content, JustifyContent::FlexStart);
        assert_eq!(style.align_items, AlignItems::Stretch);
        assert_eq!(style.flex_wrap, FlexWrap::Wrap);
        assert_eq!(style.flex_grow, 0.0);
        assert_eq!(style.flex_shrink, 1.0);
        assert_eq!(style.size, BoxStyle::default());
    }

    #[test]
    fn test_builder_overrides() {
        let style = FlexSpace::new()
            .gap([4, 8])
            .direction(FlexDirection::Column)
            .justify_content(JustifyContent::SpaceBetween)
            .align_items(AlignItems::FlexEnd)
            .wrap(FlexWrap::NoWrap)
            .grow(2.0)
            .shrink(0.0)
            .to_style();

        assert_eq!(
            style.to_css(),
            "display: flex; gap: 4px 8px; flex-direction: column; justify-content: space-between; \
             align-items: flex-end; flex-wrap: nowrap; flex-grow: 2; flex-shrink: 0"
        );
    }

    #[test]
    fn test_class_name_is_forwarded_not_styled() {
        let space = FlexSpace::new().class_name("toolbar");
        assert_eq!(space.class_name.as_deref(), Some("toolbar"));
        assert_eq!(space.to_style().get("class"), None);
    }

    #[test]
    fn test_split_row_uses_column_gap() {
        let area = Rect::new(0, 0, 20, 1);
        let rects = FlexSpace::new().gap(Gap::axes(16, 0)).split(
            area,
            [Constraint::Length(5), Constraint::Length(5)],
            CellScale::default(),
        );
        assert_eq!(rects[0], Rect::new(0, 0, 5, 1));
        assert_eq!(rects[1], Rect::new(7, 0, 5, 1));
    }

    #[test]
    fn test_split_column_uses_row_gap() {
        let area = Rect::new(0, 0, 10, 10);
        let rects = FlexSpace::new()
            .direction(FlexDirection::Column)
            .gap(Gap::axes(0, 8))
            .split(area, [Constraint::Length(2), Constraint::Length(3)], CellScale::default());
        assert_eq!(rects[0], Rect::new(0, 0, 10, 2));
        assert_eq!(rects[1], Rect::new(0, 3, 10, 3));
    }

    #[test]
    fn test_split_reverse_keeps_child_order() {
        let area = Rect::new(0, 0, 10, 1);
        let rects = FlexSpace::new().direction(FlexDirection::RowReverse).split(
            area,
            [Constraint::Length(3), Constraint::Length(4)],
            CellScale::default(),
        );
        // packed against the right edge, first child rightmost
        assert_eq!(rects[0], Rect::new(7, 0, 3, 1));
        assert_eq!(rects[1], Rect::new(3, 0, 4, 1));
    }

    #[test]
    fn test_split_reverse_flex_end_packs_at_main_start_edge() {
        let area = Rect::new(0, 0, 10, 1);
        let rects = FlexSpace::new()
            .direction(FlexDirection::RowReverse)
            .justify_content(JustifyContent::FlexEnd)
            .split(area, [Constraint::Length(3), Constraint::Length(4)], CellScale::default());
        assert_eq!(rects[0], Rect::new(4, 0, 3, 1));
        assert_eq!(rects[1], Rect::new(0, 0, 4, 1));
    }

    #[test]
    fn test_forward_flex_modes_are_untouched() {
        let space = FlexSpace::new().justify_content(JustifyContent::FlexEnd);
        assert_eq!(space.main_axis_flex(), Flex::End);
        let space = space.direction(FlexDirection::ColumnReverse);
        assert_eq!(space.main_axis_flex(), Flex::Start);
        let space = space.justify_content(JustifyContent::SpaceBetween);
        assert_eq!(space.main_axis_flex(), Flex::SpaceBetween);
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let space: FlexSpace =
            serde_json::from_str(r#"{"gap": {"horizontal": 10, "vertical": "3em"}, "wrap": "nowrap"}"#)
                .unwrap();
        assert_eq!(space.to_style().gap, "3em 10px");
        assert_eq!(space.wrap, FlexWrap::NoWrap);
        assert_eq!(space.shrink, 1.0);
    }
}
