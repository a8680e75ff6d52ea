use crate::libs::nt::Base;

/// Substitution classes of an aligned base pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    Match,
    /// purine <-> purine, or pyrimidine <-> pyrimidine
    Transition,
    /// purine <-> pyrimidine
    Transversion,
}

impl Substitution {
    /// ```
    /// use swalign::libs::nt::Base;
    /// use swalign::libs::score::Substitution;
    /// assert_eq!(Substitution::classify(Base::A, Base::G), Substitution::Transition);
    /// assert_eq!(Substitution::classify(Base::T, Base::C), Substitution::Transition);
    /// assert_eq!(Substitution::classify(Base::A, Base::T), Substitution::Transversion);
    /// ```
    pub fn classify(a: Base, b: Base) -> Self {
        if a == b {
            Substitution::Match
        } else if a.is_purine() == b.is_purine() {
            Substitution::Transition
        } else {
            Substitution::Transversion
        }
    }
}

/// Scoring constants for a linear-gap local alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreParams {
    pub match_score: i32,
    pub transition: i32,
    pub transversion: i32,
    pub gap: i32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            match_score: 4,
            transition: -2,
            transversion: -4,
            gap: -2,
        }
    }
}

impl ScoreParams {
    pub fn new(match_score: i32, transition: i32, transversion: i32, gap: i32) -> Self {
        Self {
            match_score,
            transition,
            transversion,
            gap,
        }
    }

    /// Score for aligning `a` (from A) against `b` (from B).
    pub fn substitution(&self, a: Base, b: Base) -> i32 {
        match Substitution::classify(a, b) {
            Substitution::Match => self.match_score,
            Substitution::Transition => self.transition,
            Substitution::Transversion => self.transversion,
        }
    }
}
