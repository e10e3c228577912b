//! The closed set of agent kinds and their cyclic dominance relation.

use std::fmt;

/// One of the three agent kinds.
///
/// Each kind beats exactly one other kind and is beaten by exactly one,
/// forming a 3-cycle: Rock beats Scissors, Scissors beats Paper, Paper
/// beats Rock.
///
/// # Examples
///
/// ```
/// use triad_core::Kind;
///
/// assert_eq!(Kind::Rock.beats(), Kind::Scissors);
/// assert_eq!(Kind::Rock.fears(), Kind::Paper);
/// assert!(Kind::Paper.dominates(Kind::Rock));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Kind {
    /// Chases scissors, flees paper.
    Rock = 0,
    /// Chases rock, flees scissors.
    Paper = 1,
    /// Chases paper, flees rock.
    Scissors = 2,
}

impl Kind {
    /// All kinds, in population seeding order.
    pub const ALL: [Kind; 3] = [Kind::Rock, Kind::Paper, Kind::Scissors];

    /// The kind this kind converts on contact.
    pub fn beats(self) -> Kind {
        match self {
            Kind::Rock => Kind::Scissors,
            Kind::Paper => Kind::Rock,
            Kind::Scissors => Kind::Paper,
        }
    }

    /// The kind that converts this kind on contact.
    pub fn fears(self) -> Kind {
        match self {
            Kind::Rock => Kind::Paper,
            Kind::Paper => Kind::Scissors,
            Kind::Scissors => Kind::Rock,
        }
    }

    /// Whether `self` converts `other` on contact.
    pub fn dominates(self, other: Kind) -> bool {
        self.beats() == other
    }

    /// Dense index in `0..3`, matching [`Kind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Rock => "rock",
            Kind::Paper => "paper",
            Kind::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
