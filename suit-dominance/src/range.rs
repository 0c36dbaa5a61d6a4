//! Per-distribution aggregation of line-of-play outcomes.
//!
//! One candidate line of play, solved across many card distributions,
//! produces one [`Outcome`] per distribution visit. A [`Range`] folds
//! the repeated outcomes of one distribution into an inclusive trick
//! interval plus the winner sets at each bound; a [`Ranges`] keeps one
//! range per distribution and is the unit of comparison between two
//! candidate lines.

use crate::compare::Compare;
use crate::winners::Winners;
use std::fmt;
use suit_core::{Dist, Tricks};

/// One outcome of one candidate line for one card distribution.
/// Produced by the search driver; read-only here.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub dist: Dist,
    pub tricks: Tricks,
    pub winners: Winners,
}

impl Outcome {
    pub fn new(dist: Dist, tricks: Tricks, winners: Winners) -> Outcome {
        Outcome {
            dist,
            tricks,
            winners,
        }
    }
}

/// Aggregated trick interval for one distribution.
///
/// `lower`/`upper` are the observed extremes of this line;
/// `minimum` is the smallest trick count seen for this distribution
/// across *all* lines merged so far, the shared baseline the profile
/// packing in [`crate::Study`] is built against.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    dist: Dist,
    lower: Tricks,
    upper: Tricks,
    minimum: Tricks,
    winners_low: Winners,
    winners_high: Winners,
}

impl Range {
    /// Start a range from the first outcome of a distribution.
    pub fn new(outcome: &Outcome) -> Range {
        Range {
            dist: outcome.dist,
            lower: outcome.tricks,
            upper: outcome.tricks,
            minimum: outcome.tricks,
            winners_low: outcome.winners.clone(),
            winners_high: outcome.winners.clone(),
        }
    }

    pub fn dist(&self) -> Dist {
        self.dist
    }

    pub fn lower(&self) -> Tricks {
        self.lower
    }

    pub fn upper(&self) -> Tricks {
        self.upper
    }

    pub fn minimum(&self) -> Tricks {
        self.minimum
    }

    pub fn winners_low(&self) -> &Winners {
        &self.winners_low
    }

    pub fn winners_high(&self) -> &Winners {
        &self.winners_high
    }

    /// Fold one more outcome of the same distribution into the interval.
    ///
    /// A tie at a bound widens that bound's winner set; a strict
    /// extension replaces both the bound and its winners.
    pub fn extend(&mut self, outcome: &Outcome) {
        assert_eq!(
            self.dist, outcome.dist,
            "extend with an outcome of another distribution"
        );
        if outcome.tricks < self.lower {
            self.lower = outcome.tricks;
            self.winners_low = outcome.winners.clone();
        } else if outcome.tricks == self.lower {
            self.winners_low.add(&outcome.winners);
        }
        if outcome.tricks > self.upper {
            self.upper = outcome.tricks;
            self.winners_high = outcome.winners.clone();
        } else if outcome.tricks == self.upper {
            self.winners_high.add(&outcome.winners);
        }
        self.minimum = self.minimum.min(outcome.tricks);
    }

    /// Whether the interval has collapsed onto the shared baseline with
    /// one winner set: the distribution is fully resolved.
    pub fn constant(&self) -> bool {
        self.lower == self.minimum
            && self.upper == self.minimum
            && self.winners_low == self.winners_high
    }

    /// Merge with the range of a sibling subtree for the same
    /// distribution. The defenders choose between the subtrees, so the
    /// interval that is worse for declarer carries: smaller `upper`
    /// first, then smaller `lower`. With identical intervals the winner
    /// sets break the tie, compared from the defenders' point of view;
    /// an inconclusive winner comparison keeps the incumbent (the
    /// intervals coincide, so nothing separates a point from a range
    /// any more).
    pub fn multiply(&mut self, other: &Range) {
        assert_eq!(
            self.dist, other.dist,
            "multiply with a range of another distribution"
        );
        self.minimum = self.minimum.min(other.minimum);
        let take_other = match other.upper.cmp(&self.upper) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => match other.lower.cmp(&self.lower) {
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Greater => false,
                std::cmp::Ordering::Equal => {
                    let defense = other
                        .winners_high
                        .compare_for_declarer(&self.winners_low)
                        .invert();
                    defense == Compare::First
                }
            },
        };
        if take_other {
            self.lower = other.lower;
            self.upper = other.upper;
            self.winners_low = other.winners_low.clone();
            self.winners_high = other.winners_high.clone();
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "d{}: {}..{} (min {}) low[{}] high[{}]",
            self.dist, self.lower, self.upper, self.minimum, self.winners_low, self.winners_high
        )
    }
}

/// One range per explored distribution, strictly increasing by
/// distribution id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranges {
    items: Vec<Range>,
}

impl Ranges {
    pub fn new() -> Ranges {
        Ranges { items: Vec::new() }
    }

    /// Build from a line's outcome list.
    pub fn from_outcomes(outcomes: &[Outcome]) -> Ranges {
        let mut ranges = Ranges::new();
        for outcome in outcomes {
            ranges.extend(outcome);
        }
        ranges
    }

    /// Fold one outcome in, creating its distribution's range on first
    /// sight.
    pub fn extend(&mut self, outcome: &Outcome) {
        match self.items.binary_search_by_key(&outcome.dist, Range::dist) {
            Ok(pos) => self.items[pos].extend(outcome),
            Err(pos) => self.items.insert(pos, Range::new(outcome)),
        }
    }

    pub fn get(&self, dist: Dist) -> Option<&Range> {
        self.items
            .binary_search_by_key(&dist, Range::dist)
            .ok()
            .map(|pos| &self.items[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether every explored distribution is fully resolved.
    pub fn constant(&self) -> bool {
        self.items.iter().all(Range::constant)
    }

    /// Merge with a sibling line's ranges by sorted join on the
    /// distribution id. A distribution present on only one side passes
    /// through unchanged: absence means not yet explored there, never a
    /// worst-case zero. Matching distributions merge via
    /// [`Range::multiply`].
    pub fn multiply(&mut self, other: &Ranges) {
        let mut merged = Vec::with_capacity(self.items.len().max(other.items.len()));
        let mut left = std::mem::take(&mut self.items).into_iter().peekable();
        let mut right = other.items.iter().peekable();
        loop {
            match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => match l.dist.cmp(&r.dist) {
                    std::cmp::Ordering::Less => {
                        merged.push(left.next().unwrap());
                    }
                    std::cmp::Ordering::Greater => {
                        merged.push(right.next().unwrap().clone());
                    }
                    std::cmp::Ordering::Equal => {
                        let mut range = left.next().unwrap();
                        range.multiply(right.next().unwrap());
                        merged.push(range);
                    }
                },
                (Some(_), None) => {
                    merged.push(left.next().unwrap());
                }
                (None, Some(_)) => {
                    merged.push(right.next().unwrap().clone());
                }
                (None, None) => break,
            }
        }
        self.items = merged;
    }
}

impl fmt::Display for Ranges {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, range) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}
