//! Position lists: parsing `1,3-5,7-` into a merged set of intervals.
//!
//! Positions are 1-based throughout. An interval may be open-ended
//! ([`Bound::Unbounded`]), in which case it runs to the end of whatever line
//! it is applied to.

pub mod parse;
pub mod set;

use std::fmt;
use std::ops::RangeInclusive;

pub use parse::parse_list;
pub use set::IntervalSet;

/// Upper end of an [`Interval`].
///
/// Every `Finite` bound orders below `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bound {
    Finite(usize),
    Unbounded,
}

impl Bound {
    /// Resolves the bound against a concrete length, clamping to it.
    #[must_use]
    pub fn clamp_to(self, len: usize) -> usize {
        match self {
            Bound::Finite(end) => end.min(len),
            Bound::Unbounded => len,
        }
    }

    /// True if an interval ending here touches or overlaps one starting at `start`.
    #[must_use]
    pub fn reaches(self, start: usize) -> bool {
        match self {
            Bound::Finite(end) => end.saturating_add(1) >= start,
            Bound::Unbounded => true,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Finite(end) => write!(f, "{end}"),
            Bound::Unbounded => Ok(()),
        }
    }
}

/// A closed range of 1-based positions `[start, end]`.
///
/// Always satisfies `start >= 1` and, for a finite end, `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: usize,
    end: Bound,
}

impl Interval {
    /// A single position `[n, n]`.
    ///
    /// # Panics
    ///
    /// If `n` is 0.
    #[must_use]
    pub fn single(n: usize) -> Self {
        Self::new(n, n)
    }

    /// # Panics
    ///
    /// If `start` is 0 or `end < start`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start >= 1, "positions are numbered from 1, got {start}");
        assert!(end >= start, "decreasing interval {start}-{end}");
        Self {
            start,
            end: Bound::Finite(end),
        }
    }

    /// `[start, ∞)`.
    ///
    /// # Panics
    ///
    /// If `start` is 0.
    #[must_use]
    pub fn starting_at(start: usize) -> Self {
        assert!(start >= 1, "positions are numbered from 1, got {start}");
        Self {
            start,
            end: Bound::Unbounded,
        }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Bound {
        self.end
    }

    /// True if this interval covers every position of `other`.
    #[must_use]
    pub fn covers(&self, other: &Interval) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && self.end >= Bound::Finite(position)
    }

    /// Resolves the interval against a sequence of `len` items.
    ///
    /// Returns `None` when the interval starts past the end.
    #[must_use]
    pub fn resolve(&self, len: usize) -> Option<RangeInclusive<usize>> {
        let end = self.end.clamp_to(len);
        (self.start <= end).then_some(self.start..=end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Bound::Finite(end) if end == self.start => write!(f, "{}", self.start),
            end => write!(f, "{}-{end}", self.start),
        }
    }
}
