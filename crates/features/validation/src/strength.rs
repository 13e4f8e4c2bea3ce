//! # Password Strength
//!
//! Five independent character-class checks worth [`POINTS_PER_CHECK`] each are summed into a
//! 0–100 score. The score falls into one of four bands, each lighting a number of meter
//! segments:
//!
//! | Score     | Level  | Segments |
//! |-----------|--------|----------|
//! | 0..=40    | WEAK   | 1        |
//! | 41..=60   | FAIR   | 2        |
//! | 61..=80   | GOOD   | 3        |
//! | 81..=100  | STRONG | 4        |
//!
//! An empty password has no report at all. The three [`Requirements`] indicators are
//! tracked separately and are meaningful for any input, including the empty one.

use crate::rules;
use strum_macros::{AsRefStr, Display, IntoStaticStr};

pub const POINTS_PER_CHECK: u8 = 20;

/// Number of segments in the strength meter.
pub const METER_SEGMENTS: usize = 4;

/// Qualitative strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=40 => Self::Weak,
            41..=60 => Self::Fair,
            61..=80 => Self::Good,
            _ => Self::Strong,
        }
    }

    /// Number of meter segments lit for this band.
    #[must_use]
    pub const fn segments(self) -> usize {
        match self {
            Self::Weak => 1,
            Self::Fair => 2,
            Self::Good => 3,
            Self::Strong => 4,
        }
    }
}

/// Which character classes a password contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrengthChecks {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl StrengthChecks {
    pub fn of(password: &str) -> Self {
        Self {
            length: rules::has_min_length(password),
            lowercase: rules::has_lowercase(password),
            uppercase: rules::has_uppercase(password),
            digit: rules::has_digit(password),
            special: rules::has_special(password),
        }
    }

    /// Weighted sum of the passed checks, 0–100.
    #[must_use]
    pub fn score(&self) -> u8 {
        [self.length, self.lowercase, self.uppercase, self.digit, self.special]
            .into_iter()
            .filter(|passed| *passed)
            .map(|_| POINTS_PER_CHECK)
            .sum()
    }
}

/// Strength of a non-empty password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub checks: StrengthChecks,
    pub score: u8,
    pub level: StrengthLevel,
}

impl StrengthReport {
    #[must_use]
    pub const fn segments(&self) -> usize {
        self.level.segments()
    }
}

/// Scores `password`; returns `None` for the empty password.
pub fn analyze(password: &str) -> Option<StrengthReport> {
    if password.is_empty() {
        return None;
    }

    let checks = StrengthChecks::of(password);
    let score = checks.score();

    Some(StrengthReport { checks, score, level: StrengthLevel::from_score(score) })
}

/// The three requirement indicators shown under the password field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    pub length: bool,
    pub digit: bool,
    pub special: bool,
}

impl Requirements {
    pub fn of(password: &str) -> Self {
        Self {
            length: rules::has_min_length(password),
            digit: rules::has_digit(password),
            special: rules::has_special(password),
        }
    }

    #[must_use]
    pub const fn all_met(&self) -> bool {
        self.length && self.digit && self.special
    }
}
