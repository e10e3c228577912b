//! Per-kind population counts.

use crate::kind::Kind;
use std::fmt;

/// Number of agents of each [`Kind`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Census {
    counts: [usize; 3],
}

impl Census {
    /// Count the kinds yielded by `kinds`.
    pub fn from_kinds<I: IntoIterator<Item = Kind>>(kinds: I) -> Self {
        let mut census = Self::default();
        for kind in kinds {
            census.counts[kind.index()] += 1;
        }
        census
    }

    /// Number of agents of `kind`.
    pub fn count(&self, kind: Kind) -> usize {
        self.counts[kind.index()]
    }

    /// Total number of agents.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Whether no agent of `kind` remains.
    pub fn is_extinct(&self, kind: Kind) -> bool {
        self.count(kind) == 0
    }

    /// The only kind with a non-zero count, if exactly one remains.
    pub fn dominant(&self) -> Option<Kind> {
        let mut alive = Kind::ALL.into_iter().filter(|&k| !self.is_extinct(k));
        match (alive.next(), alive.next()) {
            (Some(kind), None) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rock={} paper={} scissors={}",
            self.count(Kind::Rock),
            self.count(Kind::Paper),
            self.count(Kind::Scissors),
        )
    }
}
