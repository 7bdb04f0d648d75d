//! Stonehenge board geometry.
//!
//! A board of size `n` has `n + 1` rows: lengths 2, 3, ..., n + 1,
//! then a final row of length `n`. Cells are numbered row-major and
//! labelled `A`, `B`, `C`, ... in the same order.
//!
//! Every row is a horizontal ley line. Each diagonal direction adds
//! another `n + 1` lines, for `3(n + 1)` in total.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Largest supported board (25 cells, labels `A` to `Y`).
pub const MAX_BOARD_SIZE: usize = 5;

/// Direction of a ley line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeyKind {
    /// Along a row.
    Horizontal,
    /// Up-right diagonal.
    DownUp,
    /// Down-right diagonal.
    DownDown,
}

impl LeyKind {
    /// All directions, in marker order.
    pub const ALL: [LeyKind; 3] = [LeyKind::Horizontal, LeyKind::DownUp, LeyKind::DownDown];

    /// Position of this direction's block in the marker list.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            LeyKind::Horizontal => 0,
            LeyKind::DownUp => 1,
            LeyKind::DownDown => 2,
        }
    }
}

/// Row lengths for a board of `size`.
#[must_use]
pub fn row_lengths(size: usize) -> Vec<usize> {
    (2..=size + 1).chain(std::iter::once(size)).collect()
}

/// Number of cells on a board of `size`.
#[must_use]
pub const fn cell_count(size: usize) -> usize {
    // 2 + 3 + ... + (size + 1), plus the final row of `size`.
    (size + 1) * (size + 2) / 2 - 1 + size
}

/// Number of ley lines on a board of `size`.
#[must_use]
pub const fn ley_count(size: usize) -> usize {
    3 * (size + 1)
}

/// Label of the cell at `index`.
#[must_use]
pub fn label(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Cell index named by `label`, if it is on a board of `size`.
#[must_use]
pub fn index_of(label: char, size: usize) -> Option<usize> {
    if !label.is_ascii_uppercase() {
        return None;
    }
    let index = (label as u8 - b'A') as usize;
    (index < cell_count(size)).then_some(index)
}

/// Cell indices of every ley line, grouped by `LeyKind::ALL` order.
///
/// Line `i` of kind `k` is at `k.offset() * (size + 1) + i`.
#[must_use]
pub fn ley_lines(size: usize) -> Vec<Vec<usize>> {
    let rows = size + 1;
    let mut horizontal = vec![Vec::new(); rows];
    let mut down_up = vec![Vec::new(); rows];
    let mut down_down = vec![Vec::new(); rows];

    let mut index = 0;
    for (row, len) in row_lengths(size).into_iter().enumerate() {
        let last = row == rows - 1;
        for col in 0..len {
            horizontal[row].push(index);
            if last {
                down_up[col + 1].push(index);
                down_down[col].push(index);
            } else {
                down_up[col].push(index);
                down_down[rows - 2 - row + col].push(index);
            }
            index += 1;
        }
    }

    horizontal
        .into_iter()
        .chain(down_up)
        .chain(down_down)
        .collect()
}

/// `ley_lines` for every supported size, built once.
static LEY_LINES: Lazy<Vec<Vec<Vec<usize>>>> =
    Lazy::new(|| (0..=MAX_BOARD_SIZE).map(ley_lines).collect());

/// Shared `ley_lines(size)`, or `None` past `MAX_BOARD_SIZE`.
#[must_use]
pub fn cached_ley_lines(size: usize) -> Option<&'static [Vec<usize>]> {
    LEY_LINES.get(size).map(Vec::as_slice)
}
