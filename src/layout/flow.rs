//! Wrapped flow of fixed-width items, the host side of a wrapping row.

/// Horizontal slot of one item inside a flowed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the item in the input
    pub index: usize,
    /// Offset from the start of the line
    pub x: u16,
    pub width: u16,
}

/// Breaks items into lines no wider than `max_width`, `gap` cells apart.
///
/// An item wider than `max_width` gets a line of its own and is clipped to
/// `max_width`. Returns no lines for a zero width.
pub fn flow_rows(widths: &[u16], max_width: u16, gap: u16) -> Vec<Vec<Placement>> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines: Vec<Vec<Placement>> = Vec::new();
    let mut current: Vec<Placement> = Vec::new();
    let mut cursor: u16 = 0;

    for (index, &width) in widths.iter().enumerate() {
        let width = width.min(max_width);
        let space_needed = if current.is_empty() { 0 } else { gap };

        if !current.is_empty()
            && u32::from(cursor) + u32::from(space_needed) + u32::from(width) > u32::from(max_width)
        {
            lines.push(std::mem::take(&mut current));
            cursor = 0;
        }

        let x = if current.is_empty() { 0 } else { cursor + gap };
        current.push(Placement { index, x, width });
        cursor = x + width;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Width of the widest flowed line.
pub fn flow_width(lines: &[Vec<Placement>]) -> u16 {
    lines
        .iter()
        .filter_map(|line| line.last().map(|p| p.x + p.width))
        .max()
        .unwrap_or(0)
}
