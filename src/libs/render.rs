//! Turns a trace path into printable alignment strings.

use crate::libs::matrix::ScoreMatrix;
use crate::libs::nt::Sequence;
use crate::libs::score::{ScoreParams, Substitution};
use crate::libs::trace::{Move, TracePath};
use itertools::Itertools;
use std::fmt;
use std::ops::Range;

pub const GAP: char = '-';

/// One column of the aligned core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignOp {
    Match,
    Transition,
    Transversion,
    /// base from B against a gap in A
    Insertion,
    /// base from A against a gap in B
    Deletion,
}

impl AlignOp {
    pub fn indicator(self) -> char {
        match self {
            AlignOp::Match => '*',
            AlignOp::Transition | AlignOp::Transversion => '.',
            AlignOp::Insertion | AlignOp::Deletion => ' ',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: usize,
    pub transitions: usize,
    pub transversions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl AlignmentStats {
    pub fn mismatches(&self) -> usize {
        self.transitions + self.transversions
    }

    pub fn gaps(&self) -> usize {
        self.insertions + self.deletions
    }

    /// Number of core columns
    pub fn columns(&self) -> usize {
        self.matches + self.mismatches() + self.gaps()
    }
}

/// A rendered local alignment, flanks included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub aligned_a: String,
    pub aligned_b: String,
    pub indicator: String,
    /// Score of the max cell
    pub score: i32,
    /// 0-based half-open range of A covered by the core
    pub range_a: Range<usize>,
    pub range_b: Range<usize>,
    /// Core columns, in sequence order
    pub ops: Vec<AlignOp>,
}

impl AlignmentResult {
    pub fn stats(&self) -> AlignmentStats {
        let mut stats = AlignmentStats::default();
        for op in &self.ops {
            match op {
                AlignOp::Match => stats.matches += 1,
                AlignOp::Transition => stats.transitions += 1,
                AlignOp::Transversion => stats.transversions += 1,
                AlignOp::Insertion => stats.insertions += 1,
                AlignOp::Deletion => stats.deletions += 1,
            }
        }
        stats
    }
}

impl fmt::Display for AlignmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.aligned_a)?;
        writeln!(f, "{}", self.aligned_b)?;
        writeln!(f, "{}", self.indicator)
    }
}

/// Builds the three display lines from a max-first trace path.
///
/// Core columns come from the coordinate step between consecutive path
/// cells. Unaligned residues before and after the core are added as flanks,
/// padded with gaps so that all lines have the same width.
pub fn render(
    seq_a: &Sequence,
    seq_b: &Sequence,
    path: &TracePath,
    matrix: &ScoreMatrix,
    params: &ScoreParams,
) -> AlignmentResult {
    let (x0, y0) = path.origin();
    let (x1, y1) = path.head();

    let mut core_a = String::new();
    let mut core_b = String::new();
    let mut ops = vec![];

    // origin first
    for (&(px, py), &(x, y)) in path.cells().iter().rev().tuple_windows() {
        let step = match Move::between((x, y), (px, py)) {
            Some(step) => step,
            None => unreachable!("trace path cells are not adjacent"),
        };

        let expected = match step {
            Move::Diagonal => {
                let (a, b) = (seq_a.get(x - 1), seq_b.get(y - 1));
                core_a.push(a.to_char());
                core_b.push(b.to_char());
                ops.push(match Substitution::classify(a, b) {
                    Substitution::Match => AlignOp::Match,
                    Substitution::Transition => AlignOp::Transition,
                    Substitution::Transversion => AlignOp::Transversion,
                });
                params.substitution(a, b)
            }
            Move::Up => {
                core_a.push(GAP);
                core_b.push(seq_b.get(y - 1).to_char());
                ops.push(AlignOp::Insertion);
                params.gap
            }
            Move::Left => {
                core_a.push(seq_a.get(x - 1).to_char());
                core_b.push(GAP);
                ops.push(AlignOp::Deletion);
                params.gap
            }
        };

        let delta = i64::from(matrix.get(x, y)) - i64::from(matrix.get(px, py));
        if delta != i64::from(expected) {
            log::debug!(
                "Step ({}, {}) -> ({}, {}) changes the score by {}, expected {}",
                px,
                py,
                x,
                y,
                delta,
                expected
            );
        }
    }

    // leading flanks end flush against the core
    let lead_a = seq_a.slice_string(0..x0);
    let lead_b = seq_b.slice_string(0..y0);
    let lead_width = lead_a.len().max(lead_b.len());
    let lead_a = format!("{:->width$}", lead_a, width = lead_width);
    let lead_b = format!("{:->width$}", lead_b, width = lead_width);

    // trailing flanks start flush against the core
    let trail_a = seq_a.slice_string(x1..seq_a.len());
    let trail_b = seq_b.slice_string(y1..seq_b.len());
    let trail_width = trail_a.len().max(trail_b.len());
    let trail_a = format!("{:-<width$}", trail_a, width = trail_width);
    let trail_b = format!("{:-<width$}", trail_b, width = trail_width);

    let mut indicator = flank_indicator(&lead_a, &lead_b);
    indicator.extend(ops.iter().map(|op| op.indicator()));
    indicator += &flank_indicator(&trail_a, &trail_b);

    AlignmentResult {
        aligned_a: format!("{}{}{}", lead_a, core_a, trail_a),
        aligned_b: format!("{}{}{}", lead_b, core_b, trail_b),
        indicator,
        score: matrix.get(x1, y1),
        range_a: x0..x1,
        range_b: y0..y1,
        ops,
    }
}

/// `.` where both flanks hold differing bases, space elsewhere.
fn flank_indicator(flank_a: &str, flank_b: &str) -> String {
    flank_a
        .chars()
        .zip(flank_b.chars())
        .map(|(a, b)| {
            if a != b && a != GAP && b != GAP {
                '.'
            } else {
                ' '
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::matrix::{FillMode, MatrixBuilder};
    use crate::libs::trace::traceback;

    fn align(a: &str, b: &str, mode: FillMode) -> AlignmentResult {
        let seq_a: Sequence = a.parse().unwrap();
        let seq_b: Sequence = b.parse().unwrap();
        let params = ScoreParams::default();
        let (matrix, max) = MatrixBuilder::new(params, mode)
            .build(&seq_a, &seq_b)
            .unwrap();
        let path = traceback(&matrix, &max, params.match_score).unwrap();
        render(&seq_a, &seq_b, &path, &matrix, &params)
    }

    #[test]
    fn test_render_unclamped() {
        let result = align("TGTTACGG", "GGTTGACTA", FillMode::Unclamped);

        assert_eq!(result.aligned_a, "T-GTT-ACGG");
        assert_eq!(result.aligned_b, "-GGTTGACTA");
        assert_eq!(result.indicator, "  *** **..");
        assert_eq!(result.score, 16);
        assert_eq!(result.range_a, 1..6);
        assert_eq!(result.range_b, 0..7);
        assert_eq!(
            result.to_string(),
            "T-GTT-ACGG\n-GGTTGACTA\n  *** **..\n"
        );

        let stats = result.stats();
        assert_eq!(stats.matches, 5);
        assert_eq!(stats.mismatches(), 0);
        assert_eq!(stats.insertions, 2);
        assert_eq!(stats.deletions, 0);
        assert_eq!(stats.columns(), 7);
    }

    #[test]
    fn test_render_clamped() {
        let result = align("TGTTACGG", "GGTTGACTA", FillMode::Clamped);

        assert_eq!(result.aligned_a, "TG-TTACGG");
        assert_eq!(result.aligned_b, "GGTTGACTA");
        assert_eq!(result.indicator, ".* *.**..");
        assert_eq!(result.score, 18);

        let stats = result.stats();
        assert_eq!(stats.matches, 4);
        assert_eq!(stats.transitions, 0);
        assert_eq!(stats.transversions, 1);
        assert_eq!(stats.insertions, 1);
    }

    #[test]
    fn test_render_deletion() {
        let result = align("ACCGT", "ACGT", FillMode::Unclamped);

        assert_eq!(result.aligned_a, "ACCGT");
        assert_eq!(result.aligned_b, "A-CGT");
        assert_eq!(result.indicator, "* ***");
        assert_eq!(result.stats().deletions, 1);
    }

    #[test]
    fn test_render_long_flanks() {
        let result = align("TTAGG", "CCAGGTT", FillMode::Unclamped);

        assert_eq!(result.aligned_a, "-----TTAGG");
        assert_eq!(result.aligned_b, "CCAGGTT---");
        assert_eq!(result.indicator, "     **   ");
        assert_eq!(result.range_a, 0..2);
        assert_eq!(result.range_b, 5..7);
    }

    #[test]
    fn test_render_mismatching_flank() {
        let result = align("TTAGG", "CCAGGTT", FillMode::Clamped);

        assert_eq!(result.aligned_a, "TTAGG--");
        assert_eq!(result.aligned_b, "CCAGGTT");
        assert_eq!(result.indicator, "..***  ");
    }

    #[test]
    fn test_render_whole_sequences() {
        let result = align("ACGT", "ACGT", FillMode::Unclamped);
        assert_eq!(result.aligned_a, "ACGT");
        assert_eq!(result.aligned_b, "ACGT");
        assert_eq!(result.indicator, "****");
        assert_eq!(result.range_a, 0..4);
    }
}
