//! Spacers: opinionated flex containers with boolean switches.
//!
//! [`Spacer`] turns a handful of flags into a [`FlexSpace`]. [`SpacerRow`] and
//! [`SpacerColumn`] pin the direction and stretching behaviour.

use serde::{Deserialize, Serialize};

use super::flex_space::FlexSpace;
use crate::style::{
    AlignItems, BoxStyle, FlexDirection, FlexWrap, Gap, JustifyContent, StyleDeclaration,
};

/// Direction of a spacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacerDirection {
    #[default]
    Row,
    Column,
}

impl From<SpacerDirection> for FlexDirection {
    fn from(direction: SpacerDirection) -> Self {
        match direction {
            SpacerDirection::Row => FlexDirection::Row,
            SpacerDirection::Column => FlexDirection::Column,
        }
    }
}

/// Cross axis alignment of a spacer's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    #[default]
    #[serde(rename = "safe center")]
    SafeCenter,
    End,
    Stretch,
    Baseline,
}

impl From<Align> for AlignItems {
    fn from(align: Align) -> Self {
        match align {
            Align::Start => AlignItems::FlexStart,
            Align::End => AlignItems::FlexEnd,
            Align::Center => AlignItems::Center,
            Align::SafeCenter => AlignItems::SafeCenter,
            Align::Stretch => AlignItems::Stretch,
            Align::Baseline => AlignItems::Baseline,
        }
    }
}

/// Provides spacing between elements.
///
/// # Examples
/// ```
/// use flex_spacer::layout::Spacer;
/// use flex_spacer::style::Gap;
///
/// let style = Spacer::new().gap(Gap::axes(12, 8)).fill_space(true).to_style();
/// assert_eq!(style.gap, "8px 12px");
/// assert_eq!(style.justify_content.as_css(), "space-between");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spacer {
    pub direction: SpacerDirection,
    pub gap: Gap,
    /// Let children wrap onto further lines
    pub wrap: bool,
    /// Stretch children on the cross axis; overrides `align`
    pub stretch: bool,
    /// Push children apart with `space-between`; ignored when `middle` is set
    pub fill_space: bool,
    /// Pin height, min-height and max-height to 100%
    pub max_height: bool,
    /// Center children on both axes
    pub middle: bool,
    pub align: Align,
    pub grow: bool,
    pub shrink: bool,
}

impl Default for Spacer {
    fn default() -> Self {
        Self {
            direction: SpacerDirection::Row,
            gap: Gap::default(),
            wrap: true,
            stretch: false,
            fill_space: false,
            max_height: false,
            middle: false,
            align: Align::SafeCenter,
            grow: false,
            shrink: true,
        }
    }
}

impl Spacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: SpacerDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: impl Into<Gap>) -> Self {
        self.gap = gap.into();
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    pub fn fill_space(mut self, fill_space: bool) -> Self {
        self.fill_space = fill_space;
        self
    }

    pub fn max_height(mut self, max_height: bool) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn middle(mut self, middle: bool) -> Self {
        self.middle = middle;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn grow(mut self, grow: bool) -> Self {
        self.grow = grow;
        self
    }

    pub fn shrink(mut self, shrink: bool) -> Self {
        self.shrink = shrink;
        self
    }

    /// Stretch wins over the explicit alignment.
    pub fn align_items(&self) -> AlignItems {
        if self.stretch {
            AlignItems::Stretch
        } else {
            self.align.into()
        }
    }

    /// Middle wins over fill space, which wins over the default.
    pub fn justify_content(&self) -> JustifyContent {
        if self.middle {
            JustifyContent::SafeCenter
        } else if self.fill_space {
            JustifyContent::SpaceBetween
        } else {
            JustifyContent::FlexStart
        }
    }

    pub fn to_flex_space(&self) -> FlexSpace {
        FlexSpace {
            gap: self.gap.clone(),
            grow: if self.grow { 1.0 } else { 0.0 },
            shrink: if self.shrink { 1.0 } else { 0.0 },
            direction: self.direction.into(),
            justify_content: self.justify_content(),
            align_items: self.align_items(),
            wrap: FlexWrap::from_flag(self.wrap),
            style: if self.max_height {
                BoxStyle::full_height()
            } else {
                BoxStyle::default()
            },
            class_name: None,
        }
    }

    pub fn to_style(&self) -> StyleDeclaration {
        self.to_flex_space().to_style()
    }
}

/// Horizontal spacer that never stretches its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacerRow {
    pub gap: Gap,
    pub fill_space: bool,
    pub max_height: bool,
    pub align: Align,
    pub grow: bool,
    pub shrink: bool,
    /// Keep children on one line
    pub nowrap: bool,
}

impl Default for SpacerRow {
    fn default() -> Self {
        let base = Spacer::default();
        Self {
            gap: base.gap,
            fill_space: base.fill_space,
            max_height: base.max_height,
            align: base.align,
            grow: base.grow,
            shrink: base.shrink,
            nowrap: false,
        }
    }
}

impl SpacerRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(mut self, gap: impl Into<Gap>) -> Self {
        self.gap = gap.into();
        self
    }

    pub fn fill_space(mut self, fill_space: bool) -> Self {
        self.fill_space = fill_space;
        self
    }

    pub fn max_height(mut self, max_height: bool) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn grow(mut self, grow: bool) -> Self {
        self.grow = grow;
        self
    }

    pub fn shrink(mut self, shrink: bool) -> Self {
        self.shrink = shrink;
        self
    }

    pub fn nowrap(mut self, nowrap: bool) -> Self {
        self.nowrap = nowrap;
        self
    }

    pub fn to_spacer(&self) -> Spacer {
        Spacer {
            direction: SpacerDirection::Row,
            gap: self.gap.clone(),
            wrap: !self.nowrap,
            stretch: false,
            fill_space: self.fill_space,
            max_height: self.max_height,
            middle: false,
            align: self.align,
            grow: self.grow,
            shrink: self.shrink,
        }
    }

    pub fn to_flex_space(&self) -> FlexSpace {
        self.to_spacer().to_flex_space()
    }

    pub fn to_style(&self) -> StyleDeclaration {
        self.to_spacer().to_style()
    }
}

/// Vertical spacer that stretches its children unless told otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacerColumn {
    pub gap: Gap,
    pub fill_space: bool,
    pub middle: bool,
    pub max_height: bool,
    pub align: Align,
    pub grow: bool,
    pub shrink: bool,
    pub wrap: bool,
    /// Keep children at their natural cross-axis size
    pub no_stretch: bool,
}

impl Default for SpacerColumn {
    fn default() -> Self {
        let base = Spacer::default();
        Self {
            gap: base.gap,
            fill_space: base.fill_space,
            middle: base.middle,
            max_height: base.max_height,
            align: base.align,
            grow: base.grow,
            shrink: base.shrink,
            wrap: base.wrap,
            no_stretch: false,
        }
    }
}

impl SpacerColumn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(mut self, gap: impl Into<Gap>) -> Self {
        self.gap = gap.into();
        self
    }

    pub fn fill_space(mut self, fill_space: bool) -> Self {
        self.fill_space = fill_space;
        self
    }

    pub fn middle(mut self, middle: bool) -> Self {
        self.middle = middle;
        self
    }

    pub fn max_height(mut self, max_height: bool) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn grow(mut self, grow: bool) -> Self {
        self.grow = grow;
        self
    }

    pub fn shrink(mut self, shrink: bool) -> Self {
        self.shrink = shrink;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn no_stretch(mut self, no_stretch: bool) -> Self {
        self.no_stretch = no_stretch;
        self
    }

    pub fn to_spacer(&self) -> Spacer {
        Spacer {
            direction: SpacerDirection::Column,
            gap: self.gap.clone(),
            wrap: self.wrap,
            stretch: !self.no_stretch,
            fill_space: self.fill_space,
            max_height: self.max_height,
            middle: self.middle,
            align: self.align,
            grow: self.grow,
            shrink: self.shrink,
        }
    }

    pub fn to_flex_space(&self) -> FlexSpace {
        self.to_spacer().to_flex_space()
    }

    pub fn to_style(&self) -> StyleDeclaration {
        self.to_spacer().to_style()
    }
}
