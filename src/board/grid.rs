//! Fixed-size cell storage

use super::{Cell, Pos};
use crate::error::MoveError;

/// M×N array of cell ownership.
///
/// Dimensions are fixed at construction. Accessors bounds-check and fail
/// with [`MoveError::OutOfRange`] instead of clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if position lies inside the grid
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    #[inline]
    fn index(&self, pos: Pos) -> Result<usize, MoveError> {
        if self.contains(pos) {
            Ok(pos.row as usize * self.cols + pos.col as usize)
        } else {
            Err(MoveError::OutOfRange {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Result<Cell, MoveError> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Overwrite cell at position
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) -> Result<(), MoveError> {
        let idx = self.index(pos)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Iterate positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols;
        (0..self.cells.len()).map(move |idx| Pos::new((idx / cols) as i32, (idx % cols) as i32))
    }

    /// Iterate `(position, cell)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }
}
