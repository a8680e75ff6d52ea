//! Local alignment of two nucleotide sequences.
//!
//! The pipeline runs leaf-first:
//!
//! * [`score`] - substitution scores with distinct transition/transversion penalties.
//! * [`matrix`] - fills the (m+1) x (n+1) score matrix and finds its first maximum.
//! * [`trace`] - walks back from the maximum to a zero cell.
//! * [`render`] - lays the traced path and the unaligned flanks out as three lines.
//!
//! [`align::LocalAligner`] chains all four.

pub mod align;
pub mod error;
pub mod io;
pub mod matrix;
pub mod nt;
pub mod render;
pub mod score;
pub mod trace;
