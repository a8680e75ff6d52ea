//! Nucleotides and validated nucleotide sequences.

use crate::libs::error::AlignError;
use std::fmt;
use std::str::FromStr;

/// One of the four DNA bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// Case-insensitive conversion from an ASCII byte.
    ///
    /// ```
    /// use swalign::libs::nt::Base;
    /// assert_eq!(Base::from_byte(b'g'), Some(Base::G));
    /// assert_eq!(Base::from_byte(b'N'), None);
    /// ```
    pub fn from_byte(b: u8) -> Option<Self> {
        match b.to_ascii_uppercase() {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'T' => Some(Base::T),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        u8::try_from(c).ok().and_then(Base::from_byte)
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Base::A => b'A',
            Base::C => b'C',
            Base::G => b'G',
            Base::T => b'T',
        }
    }

    pub fn to_char(self) -> char {
        self.to_byte() as char
    }

    /// A and G are purines; C and T are pyrimidines.
    pub fn is_purine(self) -> bool {
        matches!(self, Base::A | Base::G)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// An immutable, non-empty run of bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    bases: Vec<Base>,
}

impl Sequence {
    /// Validates `seq` and builds a sequence from it.
    ///
    /// Empty input and symbols outside `ACGTacgt` are rejected. UTF-8 input
    /// is checked per character, anything else per byte.
    pub fn new(seq: &[u8]) -> Result<Self, AlignError> {
        match std::str::from_utf8(seq) {
            Ok(s) => Self::from_symbols(s.chars()),
            Err(_) => Self::from_symbols(seq.iter().map(|&b| b as char)),
        }
    }

    fn from_symbols(symbols: impl Iterator<Item = char>) -> Result<Self, AlignError> {
        let bases = symbols
            .enumerate()
            .map(|(position, symbol)| {
                Base::from_char(symbol).ok_or(AlignError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if bases.is_empty() {
            return Err(AlignError::EmptySequence);
        }

        Ok(Self { bases })
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    /// The base at 0-based `idx`.
    pub fn get(&self, idx: usize) -> Base {
        self.bases[idx]
    }

    /// Upper-case text of `self[range]`.
    pub fn slice_string(&self, range: std::ops::Range<usize>) -> String {
        self.bases[range].iter().map(|b| b.to_char()).collect()
    }
}

impl FromStr for Sequence {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sequence::from_symbols(s.chars())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bases {
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}
