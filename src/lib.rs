//! Flex Spacer - flexbox layout primitives and a self-truncating item row for ratatui
//!
//! - [`layout`]: `FlexSpace`, `Spacer`, `SpacerRow` and `SpacerColumn` map
//!   boolean props onto flex container styles and split areas with ratatui's
//!   `Layout`.
//! - [`ellipsis`]: `EllipsisRow` shows as many leading items as fit and
//!   collapses the rest behind a `+N` indicator with an overflow popover.
//! - [`style`]: gap resolution and the resolved style declaration.
//! - [`config`]: `~/.flex-spacer/config.toml` loading and saving.

pub mod config;
pub mod ellipsis;
pub mod layout;
pub mod style;
pub mod ui;

pub use config::Config;
pub use ellipsis::{EllipsisRow, EllipsisRowWidget, OverflowPopover, Settled, Transition};
pub use layout::{FlexSpace, Spacer, SpacerColumn, SpacerRow};
pub use style::{resolve_gap, CellScale, Gap, GapValue, StyleDeclaration};
