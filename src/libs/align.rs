use crate::libs::error::AlignError;
use crate::libs::matrix::{FillMode, MatrixBuilder, MaxCell, ScoreMatrix};
use crate::libs::nt::Sequence;
use crate::libs::render::{render, AlignmentResult};
use crate::libs::score::ScoreParams;
use crate::libs::trace::{traceback, TracePath};

/// Everything produced by one local alignment run.
#[derive(Debug, Clone)]
pub struct Alignment {
    pub matrix: ScoreMatrix,
    pub max: MaxCell,
    pub path: TracePath,
    pub result: AlignmentResult,
}

/// Runs fill, traceback and rendering in order.
///
/// ```
/// use swalign::libs::align::LocalAligner;
/// let a = "TGTTACGG".parse().unwrap();
/// let b = "GGTTGACTA".parse().unwrap();
/// let alignment = LocalAligner::default().align(&a, &b).unwrap();
/// assert_eq!(alignment.max.score, 16);
/// assert_eq!(alignment.result.indicator, "  *** **..");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAligner {
    pub params: ScoreParams,
    pub mode: FillMode,
}

impl LocalAligner {
    pub fn new(params: ScoreParams, mode: FillMode) -> Self {
        Self { params, mode }
    }

    pub fn align(&self, seq_a: &Sequence, seq_b: &Sequence) -> Result<Alignment, AlignError> {
        let (matrix, max) = MatrixBuilder::new(self.params, self.mode).build(seq_a, seq_b)?;
        let path = traceback(&matrix, &max, self.params.match_score)?;
        let result = render(seq_a, seq_b, &path, &matrix, &self.params);

        log::info!(
            "Aligned A[{}..{}] with B[{}..{}], score {}",
            result.range_a.start,
            result.range_a.end,
            result.range_b.start,
            result.range_b.end,
            result.score
        );

        Ok(Alignment {
            matrix,
            max,
            path,
            result,
        })
    }
}
