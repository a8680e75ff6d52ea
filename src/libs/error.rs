use thiserror::Error;

/// Failures of the alignment pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// A sequence holds a byte outside `ACGT` (case-insensitive)
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("sequence is empty")]
    EmptySequence,

    /// Every cell of the score matrix is <= 0
    #[error("no positive-scoring local alignment found")]
    NoAlignmentFound,

    /// A cell score does not fit in an `i32`
    #[error("score at ({row}, {col}) overflows a 32-bit integer")]
    ScoreOverflow { row: usize, col: usize },

    /// Traceback hit row 0 or column 0 on a non-zero cell.
    ///
    /// `partial` holds the cells visited so far, max-first.
    #[error("traceback left the matrix at ({row}, {col}) before reaching a zero cell")]
    TraceBoundaryExit {
        row: usize,
        col: usize,
        partial: Vec<(usize, usize)>,
    },
}
