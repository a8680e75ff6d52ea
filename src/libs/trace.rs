//! Traceback from the maximal cell to a zero cell.

use crate::libs::error::AlignError;
use crate::libs::matrix::{MaxCell, ScoreMatrix};
use itertools::Itertools;

/// A step from a cell to one of its predecessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// (x, y) -> (x-1, y-1)
    Diagonal,
    /// (x, y) -> (x, y-1), steps back along B
    Up,
    /// (x, y) -> (x-1, y), steps back along A
    Left,
}

impl Move {
    /// Predecessor of `(row, col)`. Both must be >= 1.
    pub fn apply(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Move::Diagonal => (row - 1, col - 1),
            Move::Up => (row, col - 1),
            Move::Left => (row - 1, col),
        }
    }

    /// The move that leads from `from` to its predecessor `to`.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Self> {
        match (from.0.checked_sub(to.0), from.1.checked_sub(to.1)) {
            (Some(1), Some(1)) => Some(Move::Diagonal),
            (Some(0), Some(1)) => Some(Move::Up),
            (Some(1), Some(0)) => Some(Move::Left),
            _ => None,
        }
    }
}

/// Candidate order for cells whose diagonal predecessor is an interior or edge cell.
const INTERIOR_ORDER: [Move; 3] = [Move::Diagonal, Move::Up, Move::Left];
/// Candidate order for cell (1, 1), whose diagonal predecessor is the (0, 0) corner.
const CORNER_ORDER: [Move; 3] = [Move::Up, Move::Diagonal, Move::Left];

/// Tie-break table: among equally scored predecessors the earliest listed wins.
pub fn tie_break_order(row: usize, col: usize) -> &'static [Move; 3] {
    if row == 1 && col == 1 {
        &CORNER_ORDER
    } else {
        &INTERIOR_ORDER
    }
}

/// Cells visited by a traceback, max cell first, zero cell last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracePath {
    cells: Vec<(usize, usize)>,
}

impl TracePath {
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The max cell the trace started from.
    pub fn head(&self) -> (usize, usize) {
        self.cells[0]
    }

    /// The zero cell the trace stopped at.
    pub fn origin(&self) -> (usize, usize) {
        self.cells[self.cells.len() - 1]
    }

    /// `(6, 7) -> (5, 6) -> ...`
    pub fn to_arrow_string(&self) -> String {
        self.cells
            .iter()
            .map(|(r, c)| format!("({}, {})", r, c))
            .join(" -> ")
    }
}

/// Walks back from `max` until a cell scoring 0 is reached.
///
/// A diagonal predecessor exactly `match_score` below the current score is
/// taken outright. Otherwise the highest scoring predecessor wins, with ties
/// settled by [`tie_break_order`].
pub fn traceback(
    matrix: &ScoreMatrix,
    max: &MaxCell,
    match_score: i32,
) -> Result<TracePath, AlignError> {
    let (mut x, mut y) = (max.row, max.col);
    let mut current = matrix.get(x, y);
    let mut cells = vec![(x, y)];

    while current != 0 {
        if x == 0 || y == 0 {
            return Err(AlignError::TraceBoundaryExit {
                row: x,
                col: y,
                partial: cells,
            });
        }

        let (dx, dy) = Move::Diagonal.apply(x, y);
        let step = if current.checked_sub(match_score) == Some(matrix.get(dx, dy)) {
            Move::Diagonal
        } else {
            let order = tie_break_order(x, y);
            let mut best = order[0];
            let mut best_score = {
                let (px, py) = best.apply(x, y);
                matrix.get(px, py)
            };
            for &candidate in &order[1..] {
                let (px, py) = candidate.apply(x, y);
                if matrix.get(px, py) > best_score {
                    best = candidate;
                    best_score = matrix.get(px, py);
                }
            }
            best
        };

        (x, y) = step.apply(x, y);
        current = matrix.get(x, y);
        cells.push((x, y));
    }

    log::info!(
        "Traced {} cells from ({}, {}) to ({}, {})",
        cells.len(),
        max.row,
        max.col,
        x,
        y
    );

    Ok(TracePath { cells })
}
