//! Gap specifications and their resolution into style strings and terminal cells.
//!
//! A gap is either a single scalar used for both axes, an ordered pair, or a
//! named `{ horizontal, vertical }` record. Pairs always resolve in CSS order:
//! the vertical (row) gap first, the horizontal (column) gap second.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Default number of pixels covered by one terminal cell.
pub const DEFAULT_PX_PER_CELL: f64 = 8.0;

/// A scalar gap value: pixels, or a pre-formatted CSS length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GapValue {
    /// Pixel amount, rendered as `<n>px`
    Number(f64),
    /// Length string passed through untouched (e.g. `"3em"`)
    Length(String),
}

/// Gap specification accepted by every layout primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gap {
    /// Same gap on both axes
    Single(GapValue),
    /// Ordered pair; index 0 is emitted first, index 1 second
    Pair([GapValue; 2]),
    /// Named pair, always emitted as `vertical horizontal`
    Axes {
        horizontal: GapValue,
        vertical: GapValue,
    },
    /// Any other shape read from untyped input. Resolves to nothing.
    Malformed(serde_json::Value),
}

/// Conversion factor between style pixels and terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellScale {
    pub px_per_cell: f64,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            px_per_cell: DEFAULT_PX_PER_CELL,
        }
    }
}

impl CellScale {
    pub fn new(px_per_cell: f64) -> Self {
        Self { px_per_cell }
    }

    /// Converts a pixel amount into whole cells, rounding to the nearest cell.
    pub fn px_to_cells(&self, px: f64) -> u16 {
        if self.px_per_cell.is_nan() || self.px_per_cell <= 0.0 {
            return 0;
        }
        clamp_cells(px / self.px_per_cell)
    }
}

fn clamp_cells(value: f64) -> u16 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(f64::from(u16::MAX)) as u16
}

fn length_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\s*(-?(?:\d+(?:\.\d*)?|\.\d+))\s*([a-zA-Z]*)\s*$").ok())
        .as_ref()
}

impl GapValue {
    /// Formats the value for a style attribute.
    pub fn to_css(&self) -> String {
        match self {
            GapValue::Number(n) => format!("{n}px"),
            GapValue::Length(s) => s.clone(),
        }
    }

    /// Converts the value into terminal cells.
    ///
    /// Numbers and `px` lengths are divided by the scale; `ch`, `em` and `rem`
    /// count one cell per unit. Anything else (`%`, `auto`, garbage) is zero.
    pub fn cells(&self, scale: CellScale) -> u16 {
        match self {
            GapValue::Number(n) => scale.px_to_cells(*n),
            GapValue::Length(s) => {
                let Some(caps) = length_pattern().and_then(|re| re.captures(s)) else {
                    return 0;
                };
                let Ok(amount) = caps[1].parse::<f64>() else {
                    return 0;
                };
                match caps[2].to_ascii_lowercase().as_str() {
                    "" | "px" => scale.px_to_cells(amount),
                    "ch" | "em" | "rem" => clamp_cells(amount),
                    _ => 0,
                }
            }
        }
    }
}

impl Default for Gap {
    fn default() -> Self {
        Gap::Single(GapValue::Number(0.0))
    }
}

impl Gap {
    /// Builds the named `{ horizontal, vertical }` form.
    pub fn axes(horizontal: impl Into<GapValue>, vertical: impl Into<GapValue>) -> Self {
        Gap::Axes {
            horizontal: horizontal.into(),
            vertical: vertical.into(),
        }
    }

    /// The value emitted first (vertical) and second (horizontal), if well formed.
    fn parts(&self) -> Option<(&GapValue, &GapValue)> {
        match self {
            Gap::Single(value) => Some((value, value)),
            Gap::Pair([first, second]) => Some((first, second)),
            Gap::Axes {
                horizontal,
                vertical,
            } => Some((vertical, horizontal)),
            Gap::Malformed(_) => None,
        }
    }

    /// Returns `(row_gap, column_gap)` in cells. Malformed gaps are zero.
    pub fn cells(&self, scale: CellScale) -> (u16, u16) {
        self.parts()
            .map(|(row, column)| (row.cells(scale), column.cells(scale)))
            .unwrap_or((0, 0))
    }

    /// Gap between items laid out left to right.
    pub fn column_cells(&self, scale: CellScale) -> u16 {
        self.cells(scale).1
    }

    /// Gap between lines stacked top to bottom.
    pub fn row_cells(&self, scale: CellScale) -> u16 {
        self.cells(scale).0
    }
}

/// Resolves a gap specification into the value of a `gap` style attribute.
///
/// # Examples
/// ```
/// use flex_spacer::style::{resolve_gap, Gap};
///
/// assert_eq!(resolve_gap(&Gap::from(10)), "10px");
/// assert_eq!(resolve_gap(&Gap::axes(10, "3em")), "3em 10px");
/// assert_eq!(resolve_gap(&Gap::from(("1rem", 4))), "1rem 4px");
/// ```
pub fn resolve_gap(gap: &Gap) -> String {
    match gap {
        Gap::Single(value) => value.to_css(),
        Gap::Malformed(_) => String::new(),
        pair => match pair.parts() {
            Some((first, second)) => format!("{} {}", first.to_css(), second.to_css()),
            None => String::new(),
        },
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&resolve_gap(self))
    }
}

impl From<f64> for GapValue {
    fn from(value: f64) -> Self {
        GapValue::Number(value)
    }
}

impl From<f32> for GapValue {
    fn from(value: f32) -> Self {
        GapValue::Number(f64::from(value))
    }
}

impl From<i32> for GapValue {
    fn from(value: i32) -> Self {
        GapValue::Number(f64::from(value))
    }
}

impl From<u16> for GapValue {
    fn from(value: u16) -> Self {
        GapValue::Number(f64::from(value))
    }
}

impl From<u32> for GapValue {
    fn from(value: u32) -> Self {
        GapValue::Number(f64::from(value))
    }
}

impl From<&str> for GapValue {
    fn from(value: &str) -> Self {
        GapValue::Length(value.to_string())
    }
}

impl From<String> for GapValue {
    fn from(value: String) -> Self {
        GapValue::Length(value)
    }
}

macro_rules! impl_single_gap {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Gap {
            fn from(value: $ty) -> Self {
                Gap::Single(value.into())
            }
        }
    )*};
}

impl_single_gap!(f64, f32, i32, u16, u32, &str, String, GapValue);

impl<A: Into<GapValue>, B: Into<GapValue>> From<(A, B)> for Gap {
    fn from((first, second): (A, B)) -> Self {
        Gap::Pair([first.into(), second.into()])
    }
}

impl<T: Into<GapValue>> From<[T; 2]> for Gap {
    fn from([first, second]: [T; 2]) -> Self {
        Gap::Pair([first.into(), second.into()])
    }
}
