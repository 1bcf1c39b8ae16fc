//! Win detection through a single cell
//!
//! After each placement only the four lines through the new stone can have
//! changed, so a win is detected by measuring the contiguous same-owner run
//! through that cell along each orientation. Nothing else on the grid is
//! rescanned.

use crate::board::{Cell, Grid, Player, Pos};

/// Line orientations through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along a row
    Horizontal,
    /// Along a column
    Vertical,
    /// Top-left to bottom-right (↘)
    Diagonal,
    /// Top-right to bottom-left (↙)
    AntiDiagonal,
}

/// All four orientations, in the order they are checked
pub const ORIENTATIONS: [Orientation; 4] = [
    Orientation::Horizontal,
    Orientation::Vertical,
    Orientation::Diagonal,
    Orientation::AntiDiagonal,
];

impl Orientation {
    /// Forward step `(row, col)` of this orientation
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
            Orientation::AntiDiagonal => (1, -1),
        }
    }
}

/// A contiguous run of one owner's stones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub orientation: Orientation,
    /// First stone of the run, at its backward end
    pub start: Pos,
    pub len: usize,
}

impl Run {
    /// Positions covered by the run, from `start` forward
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let dir = self.orientation.delta();
        (0..self.len as i32).map(move |i| self.start.offset(dir, i))
    }

    /// Check if the run covers a position
    pub fn contains(&self, pos: Pos) -> bool {
        self.positions().any(|p| p == pos)
    }
}

/// Measure the run of `owner` stones through `pos` along `orientation`.
///
/// Steps backward while the next in-bounds cell belongs to `owner` to find
/// the start of the run, then counts forward from there until the line
/// leaves the grid or reaches a cell `owner` does not hold. A `pos` not held
/// by `owner` yields a run of length zero.
pub fn scan_run(grid: &Grid, pos: Pos, owner: Player, orientation: Orientation) -> Run {
    let cell = Cell::from(owner);
    let owned = |p: Pos| matches!(grid.get(p), Ok(c) if c == cell);
    let dir = orientation.delta();

    if !owned(pos) {
        return Run {
            orientation,
            start: pos,
            len: 0,
        };
    }

    let mut start = pos;
    while owned(start.offset(dir, -1)) {
        start = start.offset(dir, -1);
    }

    let mut len = 0;
    let mut cur = start;
    while owned(cur) {
        len += 1;
        cur = cur.offset(dir, 1);
    }

    Run {
        orientation,
        start,
        len,
    }
}

/// Find a run of at least `k` stones through `pos`, checking the four
/// orientations in order. Runs longer than `k` (overlines) also win.
pub fn find_winning_run(grid: &Grid, pos: Pos, owner: Player, k: usize) -> Option<Run> {
    ORIENTATIONS
        .iter()
        .map(|&orientation| scan_run(grid, pos, owner, orientation))
        .find(|run| run.len >= k)
}

/// Check if `owner` has a run of at least `k` through `pos`
#[inline]
pub fn has_run_at_pos(grid: &Grid, pos: Pos, owner: Player, k: usize) -> bool {
    find_winning_run(grid, pos, owner, k).is_some()
}
