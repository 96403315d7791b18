//! Layout primitives.
//!
//! - [`FlexSpace`]: the raw flex container
//! - [`Spacer`], [`SpacerRow`], [`SpacerColumn`]: flag-driven containers built on it
//! - [`flow_rows`]: wrapped placement of fixed-width items

pub mod flex_space;
pub mod flow;
pub mod spacer;

pub use flex_space::FlexSpace;
pub use flow::{flow_rows, flow_width, Placement};
pub use spacer::{Align, Spacer, SpacerColumn, SpacerDirection, SpacerRow};
