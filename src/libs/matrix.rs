//! Score matrix construction.
//!
//! Rows are indexed by sequence A and columns by sequence B. Row 0 and
//! column 0 are the local-alignment boundary and always hold 0.

use crate::libs::error::AlignError;
use crate::libs::nt::Sequence;
use crate::libs::score::ScoreParams;
use itertools::Itertools;

/// Whether cell scores are floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// `max(diag, up, left)`; cells may go negative
    #[default]
    Unclamped,
    /// `max(0, diag, up, left)`
    Clamped,
}

/// Dense (m+1) x (n+1) grid of scores, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[i32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Formats the matrix as TSV with base labels.
    ///
    /// The header is an empty corner, `-` for the boundary, then one column
    /// per base. With `transpose`, B runs down the rows instead of A.
    pub fn to_tsv(&self, seq_a: &Sequence, seq_b: &Sequence, transpose: bool) -> String {
        let labels = |seq: &Sequence| -> Vec<String> {
            std::iter::once("-".to_string())
                .chain(seq.bases().iter().map(|b| b.to_string()))
                .collect()
        };
        let (row_labels, col_labels) = if transpose {
            (labels(seq_b), labels(seq_a))
        } else {
            (labels(seq_a), labels(seq_b))
        };

        let mut out = String::new();
        out += &format!("\t{}\n", col_labels.iter().join("\t"));
        for (i, label) in row_labels.iter().enumerate() {
            let mut values = (0..col_labels.len()).map(|j| {
                if transpose {
                    self.get(j, i)
                } else {
                    self.get(i, j)
                }
            });
            out += &format!("{}\t{}\n", label, values.join("\t"));
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<i32>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        Self {
            data: rows.into_iter().flatten().collect(),
            rows: n_rows,
            cols: n_cols,
        }
    }
}

/// The first cell, in row-major order, holding the matrix maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxCell {
    pub row: usize,
    pub col: usize,
    pub score: i32,
}

pub struct MatrixBuilder {
    pub params: ScoreParams,
    pub mode: FillMode,
}

impl MatrixBuilder {
    pub fn new(params: ScoreParams, mode: FillMode) -> Self {
        Self { params, mode }
    }

    /// Fills the score matrix in one row-major pass and locates its maximum.
    ///
    /// `max` only moves on a strictly greater score, so ties keep the first
    /// cell seen. A matrix without any positive cell yields
    /// [`AlignError::NoAlignmentFound`], and a candidate score outside the
    /// `i32` range yields [`AlignError::ScoreOverflow`].
    pub fn build(
        &self,
        seq_a: &Sequence,
        seq_b: &Sequence,
    ) -> Result<(ScoreMatrix, MaxCell), AlignError> {
        let rows = seq_a.len() + 1;
        let cols = seq_b.len() + 1;
        log::debug!("Filling a {} x {} score matrix ({:?})", rows, cols, self.mode);

        let mut matrix = ScoreMatrix::new(rows, cols);
        let mut max: Option<MaxCell> = None;
        let mut max_score = 0;

        for i in 1..rows {
            let base_a = seq_a.get(i - 1);
            for j in 1..cols {
                let similarity = self.params.substitution(base_a, seq_b.get(j - 1));

                let overflow = || AlignError::ScoreOverflow { row: i, col: j };
                let diag = matrix
                    .get(i - 1, j - 1)
                    .checked_add(similarity)
                    .ok_or_else(overflow)?;
                let up = matrix
                    .get(i - 1, j)
                    .checked_add(self.params.gap)
                    .ok_or_else(overflow)?;
                let left = matrix
                    .get(i, j - 1)
                    .checked_add(self.params.gap)
                    .ok_or_else(overflow)?;

                let mut score = diag.max(up).max(left);
                if self.mode == FillMode::Clamped {
                    score = score.max(0);
                }
                matrix.set(i, j, score);

                if score > max_score {
                    max_score = score;
                    max = Some(MaxCell {
                        row: i,
                        col: j,
                        score,
                    });
                }
            }
        }

        let max = max.ok_or(AlignError::NoAlignmentFound)?;
        log::info!("Max cell ({}, {}) = {}", max.row, max.col, max.score);

        Ok((matrix, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(a: &str, b: &str, mode: FillMode) -> Result<(ScoreMatrix, MaxCell), AlignError> {
        let seq_a: Sequence = a.parse().unwrap();
        let seq_b: Sequence = b.parse().unwrap();
        MatrixBuilder::new(ScoreParams::default(), mode).build(&seq_a, &seq_b)
    }

    #[test]
    fn test_build_unclamped() {
        let (matrix, max) = build("TGTTACGG", "GGTTGACTA", FillMode::Unclamped).unwrap();

        assert_eq!(matrix.rows(), 9);
        assert_eq!(matrix.cols(), 10);
        assert_eq!(matrix.row(0), &[0; 10]);
        assert_eq!(matrix.row(1), &[0, -2, -2, 4, 4, 2, 0, -2, 4, 2]);
        assert_eq!(matrix.row(6), &[0, -2, -4, 0, 6, 6, 10, 16, 14, 12]);
        assert_eq!(matrix.row(8), &[0, 4, 8, 6, 4, 8, 8, 12, 10, 10]);

        assert_eq!(
            max,
            MaxCell {
                row: 6,
                col: 7,
                score: 16
            }
        );
    }

    #[test]
    fn test_build_clamped() {
        let (matrix, max) = build("TGTTACGG", "GGTTGACTA", FillMode::Clamped).unwrap();

        assert_eq!(matrix.row(1), &[0, 0, 0, 4, 4, 2, 0, 0, 4, 2]);
        assert_eq!(matrix.row(6), &[0, 0, 0, 2, 8, 8, 12, 18, 16, 14]);
        assert_eq!(max.score, 18);
        assert_eq!((max.row, max.col), (6, 7));

        for i in 0..matrix.rows() {
            assert!(matrix.row(i).iter().all(|&v| v >= 0));
        }
    }

    #[test]
    fn test_boundary_is_zero() {
        let (matrix, _) = build("TTAGG", "CCAGGTT", FillMode::Unclamped).unwrap();
        for i in 0..matrix.rows() {
            assert_eq!(matrix.get(i, 0), 0);
        }
        assert!(matrix.row(0).iter().all(|&v| v == 0));
        // unclamped cells may go negative
        assert_eq!(matrix.get(2, 2), -4);
    }

    #[test]
    fn test_first_max_wins() {
        // "A" vs "AA": both (1, 1) and (1, 2) score 4
        let (_, max) = build("A", "AA", FillMode::Unclamped).unwrap();
        assert_eq!((max.row, max.col, max.score), (1, 1, 4));
    }

    #[test]
    fn test_no_alignment_found() {
        let err = build("AAAA", "TTTT", FillMode::Unclamped).unwrap_err();
        assert_eq!(err, AlignError::NoAlignmentFound);

        let err = build("AAAA", "TTTT", FillMode::Clamped).unwrap_err();
        assert_eq!(err, AlignError::NoAlignmentFound);
    }

    #[test]
    fn test_score_overflow() {
        let seq: Sequence = "AAAA".parse().unwrap();
        let params = ScoreParams::new(2_000_000_000, -2, -4, -2);

        // (1, 1) holds 2e9; its diagonal successor does not fit
        for mode in [FillMode::Unclamped, FillMode::Clamped] {
            let err = MatrixBuilder::new(params, mode).build(&seq, &seq).unwrap_err();
            assert_eq!(err, AlignError::ScoreOverflow { row: 2, col: 2 });
        }

        // large but representable
        let params = ScoreParams::new(500_000_000, -2, -4, -2);
        let (_, max) = MatrixBuilder::new(params, FillMode::Unclamped)
            .build(&seq, &seq)
            .unwrap();
        assert_eq!((max.row, max.col, max.score), (4, 4, 2_000_000_000));
    }

    #[test]
    fn test_to_tsv() {
        let seq_a: Sequence = "ACGT".parse().unwrap();
        let seq_b: Sequence = "ACG".parse().unwrap();
        let (matrix, _) = MatrixBuilder::new(ScoreParams::default(), FillMode::Unclamped)
            .build(&seq_a, &seq_b)
            .unwrap();

        let tsv = matrix.to_tsv(&seq_a, &seq_b, false);
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "\t-\tA\tC\tG");
        assert_eq!(lines[1], "-\t0\t0\t0\t0");
        assert_eq!(lines[2], "A\t0\t4\t2\t0");

        let tsv = matrix.to_tsv(&seq_a, &seq_b, true);
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "\t-\tA\tC\tG\tT");
        assert_eq!(lines[2], "A\t0\t4\t2\t0\t-2");
    }
}
