//! Style mapping: gap resolution and flex container attributes.

pub mod declaration;
pub mod gap;

pub use declaration::{
    AlignItems, BoxStyle, FlexDirection, FlexWrap, JustifyContent, StyleDeclaration,
};
pub use gap::{resolve_gap, CellScale, Gap, GapValue, DEFAULT_PX_PER_CELL};
