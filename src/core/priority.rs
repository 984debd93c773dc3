//! Layer 2: priority codec
//!
//! A two-tier priority rank packed into one byte:
//!
//! ```text
//! bit 7 6 5 | 4 3 | 2 1 | 0
//!  high band| major| minor| unused
//! ```
//!
//! The letter rank is a function of the major field alone; minor and
//! high-band bits never change the letter. Stepping saturates at both ends
//! of the scale instead of erroring.

use serde::{Deserialize, Serialize};

/// Letter ladder, declared lowest to highest so `Ord` follows rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLetter {
    C,
    B,
    A,
}

impl PriorityLetter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
        }
    }
}

/// Which way a priority step moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    Increase,
    Decrease,
}

/// Outcome of a saturating step: the new code plus the signed numeric
/// delta the storage collaborator persists. `delta == 0` means the step
/// was a no-op at the scale's end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityStep {
    pub delta: i16,
    pub code: PriorityCode,
}

impl PriorityStep {
    pub fn saturated(&self) -> bool {
        self.delta == 0
    }
}

const UNUSED_BIT: u8 = 0b0000_0001;
const MINOR_SHIFT: u8 = 1;
const MAJOR_SHIFT: u8 = 3;
const FIELD_MASK: u8 = 0b11;
const MINOR_MASK: u8 = FIELD_MASK << MINOR_SHIFT;
const MAJOR_MASK: u8 = FIELD_MASK << MAJOR_SHIFT;
const HIGH_BAND_MASK: u8 = 0b1110_0000;
const FIELD_CEILING: u8 = 3;

/// Packed priority rank. Every byte value is representable; construction
/// never fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriorityCode(u8);

impl PriorityCode {
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn major(self) -> u8 {
        (self.0 >> MAJOR_SHIFT) & FIELD_MASK
    }

    pub const fn minor(self) -> u8 {
        (self.0 >> MINOR_SHIFT) & FIELD_MASK
    }

    /// Any nonzero bit in the high band signals an elevated state,
    /// consulted only when demoting.
    pub const fn high_band(self) -> bool {
        self.0 & HIGH_BAND_MASK != 0
    }

    /// Letter rank of the major field. Major 0 is unranked.
    pub fn letter(self) -> Option<PriorityLetter> {
        match self.major() {
            0 => None,
            1 => Some(PriorityLetter::C),
            2 => Some(PriorityLetter::B),
            _ => Some(PriorityLetter::A),
        }
    }

    /// Saturating step in either direction. Never fails; `delta == 0`
    /// means the code was already at the end of the scale.
    pub fn step(self, direction: StepDirection) -> PriorityStep {
        let next = match direction {
            StepDirection::Increase => self.step_up(),
            StepDirection::Decrease => self.step_down(),
        };
        PriorityStep {
            delta: i16::from(next.0) - i16::from(self.0),
            code: next,
        }
    }

    fn step_up(self) -> Self {
        if self.major() < FIELD_CEILING {
            self.with_major(self.major() + 1)
        } else if self.minor() < FIELD_CEILING {
            self.with_minor(self.minor() + 1)
        } else {
            self
        }
    }

    fn step_down(self) -> Self {
        if self.high_band() {
            // Hard demotion out of the elevated band: major 2, minor 0,
            // band cleared, whatever the current fields say.
            return Self(self.0 & UNUSED_BIT).with_major(2);
        }
        match self.major() {
            0 => self,
            // Lowest named major keeps its letter; only minor detail drops.
            1 if self.minor() != 0 => self.with_minor(0),
            m => Self(self.0 & !(MINOR_MASK | UNUSED_BIT)).with_major(m - 1),
        }
    }

    const fn with_major(self, major: u8) -> Self {
        Self((self.0 & !MAJOR_MASK) | ((major & FIELD_MASK) << MAJOR_SHIFT))
    }

    const fn with_minor(self, minor: u8) -> Self {
        Self((self.0 & !MINOR_MASK) | ((minor & FIELD_MASK) << MINOR_SHIFT))
    }
}

/// Presentation sort key over an optional code.
///
/// Unset and a numeric zero code collapse to the same key. The original
/// system's sort helpers conflate the two and boards depend on that
/// ordering, so this reproduces it rather than distinguishing them.
pub fn priority_sort_key(code: Option<PriorityCode>) -> u8 {
    code.map(PriorityCode::value).unwrap_or(0)
}
