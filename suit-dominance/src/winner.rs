//! A single card-based claim to an outcome.

use crate::compare::Compare;
use std::fmt;
use suit_core::{Rank, Side};

/// One atomic claim: the outcome is achieved because North holds a
/// given card, South holds a given card, or both are required.
///
/// A winner with neither card set is *empty*: the outcome needs no card
/// at all and is unconditional. A non-empty winner requires every card
/// it names; its governing rank is the highest rank among them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Winner {
    north: Option<Rank>,
    south: Option<Rank>,
}

impl Winner {
    /// The unconditional claim: no card is needed.
    pub fn empty() -> Winner {
        Winner {
            north: None,
            south: None,
        }
    }

    /// Claim requiring one card in the given hand.
    pub fn of_side(side: Side, rank: Rank) -> Winner {
        match side {
            Side::North => Winner::north(rank),
            Side::South => Winner::south(rank),
        }
    }

    /// Claim requiring a North card.
    pub fn north(rank: Rank) -> Winner {
        Winner {
            north: Some(rank),
            south: None,
        }
    }

    /// Claim requiring a South card.
    pub fn south(rank: Rank) -> Winner {
        Winner {
            north: None,
            south: Some(rank),
        }
    }

    /// Claim carrying one card in each hand, governed by the higher of
    /// the two ranks.
    pub fn higher_of(north: Rank, south: Rank) -> Winner {
        Winner {
            north: Some(north),
            south: Some(south),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.north.is_none() && self.south.is_none()
    }

    pub fn north_rank(&self) -> Option<Rank> {
        self.north
    }

    pub fn south_rank(&self) -> Option<Rank> {
        self.south
    }

    /// Governing rank of a non-empty claim: the highest rank required.
    ///
    /// Panics on an empty winner; asking is a caller bug.
    pub fn rank(&self) -> Rank {
        match self.north.max(self.south) {
            Some(rank) => rank,
            None => panic!("rank of an empty winner"),
        }
    }

    /// Whether this claim's governing rank beats the other's.
    pub fn rank_exceeds(&self, other: &Winner) -> bool {
        self.rank() > other.rank()
    }

    /// Dominance between two non-empty claims, declarer's perspective.
    ///
    /// The higher governing rank wins outright. At equal rank the claims
    /// are compared hand by hand: needing no card in a hand beats
    /// needing one, and between two required cards the higher rank wins.
    /// Opposite verdicts in the two hands leave the claims
    /// incommensurate.
    pub fn compare_non_empties(&self, other: &Winner) -> Compare {
        assert!(
            !self.is_empty() && !other.is_empty(),
            "compare_non_empties on an empty winner"
        );
        if self.rank() != other.rank() {
            return if self.rank_exceeds(other) {
                Compare::First
            } else {
                Compare::Second
            };
        }
        let north = Self::compare_hand(self.north, other.north);
        let south = Self::compare_hand(self.south, other.south);
        match (north, south) {
            (a, b) if a == b => a,
            (Compare::Equal, b) => b,
            (a, Compare::Equal) => a,
            _ => Compare::Different,
        }
    }

    fn compare_hand(a: Option<Rank>, b: Option<Rank>) -> Compare {
        match (a, b) {
            (None, None) => Compare::Equal,
            // A hand that needs no card dominates one that does.
            (None, Some(_)) => Compare::First,
            (Some(_), None) => Compare::Second,
            (Some(x), Some(y)) => {
                if x > y {
                    Compare::First
                } else if x < y {
                    Compare::Second
                } else {
                    Compare::Equal
                }
            }
        }
    }

    /// Combine two claims into their dual requirement: every card named
    /// by either is required. The empty claim is the identity.
    pub fn multiply(&self, other: &Winner) -> Winner {
        Winner {
            north: self.north.max(other.north),
            south: self.south.max(other.south),
        }
    }

    /// Swap the North and South roles, used under suit symmetry.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.north, &mut self.south);
    }

    /// Shift every required rank upward by a fixed offset, used when
    /// composing tricks across suit lengths.
    pub fn expand(&mut self, offset: u8) {
        self.north = self.north.map(|r| r.offset(offset));
        self.south = self.south.map(|r| r.offset(offset));
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.north, self.south) {
            (None, None) => write!(f, "-"),
            (Some(n), None) => write!(f, "N:{}", n),
            (None, Some(s)) => write!(f, "S:{}", s),
            (Some(n), Some(s)) => write!(f, "N:{}+S:{}", n, s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let w = Winner::empty();
        assert!(w.is_empty());
        assert!(!Winner::north(Rank::ACE).is_empty());
    }

    #[test]
    fn test_of_side() {
        assert_eq!(Winner::of_side(Side::North, Rank::KING), Winner::north(Rank::KING));
        assert_eq!(Winner::of_side(Side::South, Rank::KING), Winner::south(Rank::KING));
    }

    #[test]
    fn test_rank_is_highest_required() {
        assert_eq!(Winner::north(Rank::KING).rank(), Rank::KING);
        assert_eq!(Winner::higher_of(Rank::QUEEN, Rank::ACE).rank(), Rank::ACE);
    }

    #[test]
    #[should_panic(expected = "empty winner")]
    fn test_rank_of_empty_panics() {
        Winner::empty().rank();
    }

    #[test]
    fn test_rank_decides_across_ranks() {
        let ace = Winner::north(Rank::ACE);
        let king = Winner::south(Rank::KING);
        assert!(ace.rank_exceeds(&king));
        assert_eq!(ace.compare_non_empties(&king), Compare::First);
        assert_eq!(king.compare_non_empties(&ace), Compare::Second);
    }

    #[test]
    fn test_equal_rank_same_hand() {
        let a = Winner::north(Rank::ACE);
        assert_eq!(a.compare_non_empties(&a), Compare::Equal);
    }

    #[test]
    fn test_equal_rank_opposite_hands_incommensurate() {
        let n = Winner::north(Rank::ACE);
        let s = Winner::south(Rank::ACE);
        assert_eq!(n.compare_non_empties(&s), Compare::Different);
        assert_eq!(s.compare_non_empties(&n), Compare::Different);
    }

    #[test]
    fn test_fewer_requirements_dominate() {
        let single = Winner::north(Rank::ACE);
        let dual = Winner::higher_of(Rank::ACE, Rank::KING);
        assert_eq!(single.compare_non_empties(&dual), Compare::First);
        assert_eq!(dual.compare_non_empties(&single), Compare::Second);
    }

    #[test]
    fn test_multiply_identity_and_union() {
        let n = Winner::north(Rank::ACE);
        assert_eq!(Winner::empty().multiply(&n), n);
        assert_eq!(n.multiply(&Winner::empty()), n);

        let s = Winner::south(Rank::KING);
        let both = n.multiply(&s);
        assert_eq!(both.north_rank(), Some(Rank::ACE));
        assert_eq!(both.south_rank(), Some(Rank::KING));
        assert_eq!(both.rank(), Rank::ACE);

        // Same hand: the stronger requirement absorbs the weaker.
        let high = Winner::north(Rank::ACE).multiply(&Winner::north(Rank::QUEEN));
        assert_eq!(high, Winner::north(Rank::ACE));
    }

    #[test]
    fn test_flip_and_expand() {
        let mut w = Winner::higher_of(Rank::ACE, Rank::KING);
        w.flip();
        assert_eq!(w.north_rank(), Some(Rank::KING));
        assert_eq!(w.south_rank(), Some(Rank::ACE));

        let mut w = Winner::north(Rank::TWO);
        w.expand(3);
        assert_eq!(w, Winner::north(Rank::FIVE));
    }

    #[test]
    fn test_display() {
        assert_eq!(Winner::empty().to_string(), "-");
        assert_eq!(Winner::north(Rank::ACE).to_string(), "N:A");
        assert_eq!(
            Winner::higher_of(Rank::ACE, Rank::KING).to_string(),
            "N:A+S:K"
        );
    }
}
