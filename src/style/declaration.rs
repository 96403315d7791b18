//! Style declarations produced by the layout primitives.
//!
//! Every primitive ends up as a [`StyleDeclaration`]: a flex container
//! description whose attribute strings match the CSS flexible box model.

use ratatui::layout::{Direction, Flex};
use serde::{Deserialize, Serialize};

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    pub fn as_css(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::Column => "column",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }

    pub fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }

    /// The ratatui direction along the main axis.
    pub fn to_direction(self) -> Direction {
        if self.is_row() {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }
}

/// Distribution of free space along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    Center,
    #[serde(rename = "safe center")]
    SafeCenter,
    #[default]
    FlexStart,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    Baseline,
}

impl JustifyContent {
    pub fn as_css(self) -> &'static str {
        match self {
            JustifyContent::Center => "center",
            JustifyContent::SafeCenter => "safe center",
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
            JustifyContent::Baseline => "baseline",
        }
    }

    /// The closest ratatui flex mode. Baseline has no meaning on a character grid.
    pub fn to_flex(self) -> Flex {
        match self {
            JustifyContent::Center | JustifyContent::SafeCenter => Flex::Center,
            JustifyContent::FlexStart | JustifyContent::Baseline => Flex::Start,
            JustifyContent::FlexEnd => Flex::End,
            JustifyContent::SpaceBetween => Flex::SpaceBetween,
            JustifyContent::SpaceAround => Flex::SpaceAround,
        }
    }
}

/// Alignment of children on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    Center,
    #[serde(rename = "safe center")]
    SafeCenter,
    FlexStart,
    FlexEnd,
    #[default]
    Stretch,
    Baseline,
}

impl AlignItems {
    pub fn as_css(self) -> &'static str {
        match self {
            AlignItems::Center => "center",
            AlignItems::SafeCenter => "safe center",
            AlignItems::FlexStart => "flex-start",
            AlignItems::FlexEnd => "flex-end",
            AlignItems::Stretch => "stretch",
            AlignItems::Baseline => "baseline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    #[serde(rename = "nowrap")]
    NoWrap,
    #[default]
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    pub fn as_css(self) -> &'static str {
        match self {
            FlexWrap::NoWrap => "nowrap",
            FlexWrap::Wrap => "wrap",
            FlexWrap::WrapReverse => "wrap-reverse",
        }
    }

    pub fn from_flag(wrap: bool) -> Self {
        if wrap {
            FlexWrap::Wrap
        } else {
            FlexWrap::NoWrap
        }
    }
}

/// Sizing attributes forwarded verbatim onto a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
}

impl BoxStyle {
    /// Height, max-height and min-height pinned to the parent's height.
    pub fn full_height() -> Self {
        let full = Some("100%".to_string());
        Self {
            height: full.clone(),
            max_height: full.clone(),
            min_height: full,
        }
    }
}

/// A resolved flex container style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDeclaration {
    #[serde(flatten)]
    pub size: BoxStyle,
    pub display: &'static str,
    pub gap: String,
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub flex_wrap: FlexWrap,
    pub flex_grow: f64,
    pub flex_shrink: f64,
}

impl StyleDeclaration {
    /// `(attribute, value)` pairs in declaration order. Unset sizing attributes are omitted.
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        let mut props = Vec::with_capacity(11);
        let sizes = [
            ("height", &self.size.height),
            ("max-height", &self.size.max_height),
            ("min-height", &self.size.min_height),
        ];
        for (name, value) in sizes {
            if let Some(value) = value {
                props.push((name, value.clone()));
            }
        }
        props.extend([
            ("display", self.display.to_string()),
            ("gap", self.gap.clone()),
            ("flex-direction", self.flex_direction.as_css().to_string()),
            ("justify-content", self.justify_content.as_css().to_string()),
            ("align-items", self.align_items.as_css().to_string()),
            ("flex-wrap", self.flex_wrap.as_css().to_string()),
            ("flex-grow", self.flex_grow.to_string()),
            ("flex-shrink", self.flex_shrink.to_string()),
        ]);
        props
    }

    /// Looks up a single attribute by its CSS name.
    pub fn get(&self, name: &str) -> Option<String> {
        self.properties()
            .into_iter()
            .find(|(prop, _)| *prop == name)
            .map(|(_, value)| value)
    }

    /// Renders the declaration as an inline style string.
    pub fn to_css(&self) -> String {
        self.properties()
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
