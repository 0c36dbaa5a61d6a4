//! Minimal antichain of alternative winners for one outcome.

use crate::compare::{Compare, Comparer};
use crate::winner::Winner;
use std::fmt;
use suit_core::Rank;

/// Declarer's alternative ways to reach one outcome, kept as a minimal
/// antichain: no element dominates another under
/// [`Winner::compare_non_empties`].
///
/// Zero elements means *no constraint*: declarer reaches the outcome
/// unconditionally. That state dominates every concrete alternative, so
/// adding an empty winner collapses the whole set.
///
/// Because a higher governing rank always dominates a lower one, every
/// maintained antichain ends up sharing a single governing rank; the
/// set-level operations rely on that.
#[derive(Debug, Clone, Default)]
pub struct Winners {
    items: Vec<Winner>,
}

/// Insert one non-empty winner into an antichain, discarding a
/// dominated newcomer and pruning dominated incumbents. Explicit
/// scan-and-prune: winner equality is not the criterion, dominance is.
fn insert_minimal(items: &mut Vec<Winner>, winner: Winner) {
    let mut keep = true;
    items.retain(|incumbent| match incumbent.compare_non_empties(&winner) {
        Compare::First | Compare::Equal => {
            keep = false;
            true
        }
        Compare::Second => false,
        Compare::Different => true,
    });
    if keep {
        items.push(winner);
    }
}

impl Winners {
    /// The unconditional set: no card needed.
    pub fn new() -> Winners {
        Winners { items: Vec::new() }
    }

    /// Set holding one alternative. An empty winner yields the
    /// unconditional set.
    pub fn single(winner: Winner) -> Winners {
        if winner.is_empty() {
            Winners::new()
        } else {
            Winners {
                items: vec![winner],
            }
        }
    }

    /// Whether declarer reaches the outcome with no card at all.
    pub fn is_unconditional(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Winner> {
        self.items.iter()
    }

    /// Governing rank shared by every alternative.
    ///
    /// Panics on an unconditional set, or if the shared-rank invariant
    /// has been broken by the caller.
    pub fn common_rank(&self) -> Rank {
        let first = match self.items.first() {
            Some(winner) => winner.rank(),
            None => panic!("common_rank of an unconditional winner set"),
        };
        for winner in &self.items[1..] {
            assert_eq!(
                winner.rank(),
                first,
                "winner set holds inconsistent ranks"
            );
        }
        first
    }

    /// Declarer's choice: add one alternative way to reach the outcome.
    ///
    /// An empty newcomer means no card is needed, which dominates every
    /// concrete alternative and collapses the set.
    pub fn add_winner(&mut self, winner: Winner) {
        if self.is_unconditional() {
            return;
        }
        if winner.is_empty() {
            self.items.clear();
            return;
        }
        insert_minimal(&mut self.items, winner);
    }

    /// Declarer's choice over whole sets.
    pub fn add(&mut self, other: &Winners) {
        if self.is_unconditional() {
            return;
        }
        if other.is_unconditional() {
            self.items.clear();
            return;
        }
        for winner in &other.items {
            self.add_winner(*winner);
        }
    }

    /// Defenders force a combination: both sets' requirements must be
    /// met. The unconditional set is the identity.
    ///
    /// Sets at different governing ranks do not mix card-by-card; the
    /// lower-ranked set carries the whole requirement. At equal rank the
    /// alternatives combine pairwise and are re-inserted to restore
    /// minimality.
    pub fn multiply(&mut self, other: &Winners) {
        if self.is_unconditional() {
            *self = other.clone();
            return;
        }
        if other.is_unconditional() {
            return;
        }
        let own = self.common_rank();
        let theirs = other.common_rank();
        if own < theirs {
            return;
        }
        if own > theirs {
            *self = other.clone();
            return;
        }
        let mut products = Vec::new();
        for a in &self.items {
            for b in &other.items {
                insert_minimal(&mut products, a.multiply(b));
            }
        }
        self.items = products;
    }

    /// Compare two alternative sets from declarer's point of view.
    ///
    /// No constraint beats any constraint; a higher governing rank beats
    /// a lower one; singletons compare directly; everything else goes
    /// through the pairwise matrix reducer.
    pub fn compare_for_declarer(&self, other: &Winners) -> Compare {
        match (self.is_unconditional(), other.is_unconditional()) {
            (true, true) => return Compare::Equal,
            (true, false) => return Compare::First,
            (false, true) => return Compare::Second,
            (false, false) => {}
        }
        if self.size() == 1 && other.size() == 1 {
            return self.items[0].compare_non_empties(&other.items[0]);
        }
        let own = self.common_rank();
        let theirs = other.common_rank();
        if own > theirs {
            return Compare::First;
        }
        if own < theirs {
            return Compare::Second;
        }
        Comparer::fill(self.items.len(), other.items.len(), |row, col| {
            self.items[row].compare_non_empties(&other.items[col])
        })
        .resolve()
    }

    /// Swap North and South in every alternative, used under suit
    /// symmetry.
    pub fn flip(&mut self) {
        for winner in &mut self.items {
            winner.flip();
        }
    }

    /// Shift every alternative's ranks upward by a fixed offset.
    pub fn expand(&mut self, offset: u8) {
        for winner in &mut self.items {
            winner.expand(offset);
        }
    }
}

impl PartialEq for Winners {
    /// Antichain equality as sets; insertion order is irrelevant.
    fn eq(&self, other: &Winners) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().all(|w| other.items.contains(w))
    }
}

impl Eq for Winners {}

impl fmt::Display for Winners {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_unconditional() {
            return write!(f, "(any)");
        }
        for (i, winner) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " or ")?;
            }
            write!(f, "{}", winner)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suit_core::Rank;

    fn assert_antichain(winners: &Winners) {
        let items: Vec<_> = winners.iter().copied().collect();
        for (i, a) in items.iter().enumerate() {
            for (j, b) in items.iter().enumerate() {
                if i == j {
                    continue;
                }
                let verdict = a.compare_non_empties(b);
                assert!(
                    verdict == Compare::Different,
                    "{} vs {} resolves {}",
                    a,
                    b,
                    verdict
                );
            }
        }
    }

    #[test]
    fn test_single_of_empty_is_unconditional() {
        assert!(Winners::single(Winner::empty()).is_unconditional());
        assert!(!Winners::single(Winner::north(Rank::ACE)).is_unconditional());
    }

    #[test]
    fn test_add_prunes_dominated() {
        let mut winners = Winners::single(Winner::north(Rank::KING));
        // The ace dominates the king outright.
        winners.add_winner(Winner::north(Rank::ACE));
        assert_eq!(winners.size(), 1);
        assert_eq!(winners, Winners::single(Winner::north(Rank::ACE)));
        // A dominated newcomer is discarded.
        winners.add_winner(Winner::south(Rank::QUEEN));
        assert_eq!(winners.size(), 1);
        assert_antichain(&winners);
    }

    #[test]
    fn test_add_keeps_incommensurate_alternatives() {
        let mut winners = Winners::single(Winner::north(Rank::ACE));
        winners.add_winner(Winner::south(Rank::ACE));
        assert_eq!(winners.size(), 2);
        assert_antichain(&winners);
    }

    #[test]
    fn test_add_empty_collapses() {
        let mut winners = Winners::single(Winner::north(Rank::ACE));
        winners.add_winner(Winner::empty());
        assert!(winners.is_unconditional());
        // Once unconditional, nothing constrains it again.
        winners.add_winner(Winner::south(Rank::KING));
        assert!(winners.is_unconditional());
    }

    #[test]
    fn test_add_is_order_insensitive() {
        let a = Winner::north(Rank::ACE);
        let b = Winner::south(Rank::ACE);
        let c = Winner::higher_of(Rank::ACE, Rank::QUEEN);
        let mut one = Winners::single(a);
        one.add_winner(b);
        one.add_winner(c);
        let mut two = Winners::single(c);
        two.add_winner(a);
        two.add_winner(b);
        assert_eq!(one, two);
        assert_antichain(&one);
    }

    #[test]
    fn test_multiply_identity() {
        let mut winners = Winners::single(Winner::north(Rank::ACE));
        let copy = winners.clone();
        winners.multiply(&Winners::new());
        assert_eq!(winners, copy);

        let mut unconditional = Winners::new();
        unconditional.multiply(&copy);
        assert_eq!(unconditional, copy);
    }

    #[test]
    fn test_multiply_lower_rank_carries() {
        let mut high = Winners::single(Winner::north(Rank::ACE));
        let low = Winners::single(Winner::south(Rank::QUEEN));
        high.multiply(&low);
        assert_eq!(high, low);

        let mut low2 = Winners::single(Winner::south(Rank::QUEEN));
        low2.multiply(&Winners::single(Winner::north(Rank::ACE)));
        assert_eq!(low2, low);
    }

    #[test]
    fn test_multiply_equal_rank_combines_pairwise() {
        let mut n = Winners::single(Winner::north(Rank::ACE));
        let s = Winners::single(Winner::south(Rank::ACE));
        n.multiply(&s);
        assert_eq!(n.size(), 1);
        let combined = n.iter().next().unwrap();
        assert_eq!(combined.north_rank(), Some(Rank::ACE));
        assert_eq!(combined.south_rank(), Some(Rank::ACE));
        assert_antichain(&n);
    }

    #[test]
    fn test_compare_unconditional() {
        let free = Winners::new();
        let ace = Winners::single(Winner::north(Rank::ACE));
        assert_eq!(free.compare_for_declarer(&free), Compare::Equal);
        assert_eq!(free.compare_for_declarer(&ace), Compare::First);
        assert_eq!(ace.compare_for_declarer(&free), Compare::Second);
    }

    #[test]
    fn test_compare_by_rank_shortcut() {
        let ace = Winners::single(Winner::north(Rank::ACE));
        let mut kings = Winners::single(Winner::north(Rank::KING));
        kings.add_winner(Winner::south(Rank::KING));
        assert_eq!(ace.compare_for_declarer(&kings), Compare::First);
        assert_eq!(kings.compare_for_declarer(&ace), Compare::Second);
    }

    #[test]
    fn test_compare_cross_product() {
        // {N:A, S:A} offers every alternative {N:A} does, and more.
        let mut both = Winners::single(Winner::north(Rank::ACE));
        both.add_winner(Winner::south(Rank::ACE));
        let north_only = Winners::single(Winner::north(Rank::ACE));
        // The cross product mixes a win with an incommensurate pairing;
        // the matrix reducer keeps that inconclusive.
        let verdict = both.compare_for_declarer(&north_only);
        assert_eq!(verdict, north_only.compare_for_declarer(&both).invert());
    }

    #[test]
    fn test_flip_expand() {
        let mut winners = Winners::single(Winner::north(Rank::TEN));
        winners.add_winner(Winner::south(Rank::TEN));
        winners.flip();
        let mut expected = Winners::single(Winner::south(Rank::TEN));
        expected.add_winner(Winner::north(Rank::TEN));
        assert_eq!(winners, expected);

        let mut winners = Winners::single(Winner::north(Rank::TWO));
        winners.expand(1);
        assert_eq!(winners, Winners::single(Winner::north(Rank::THREE)));
    }

    #[test]
    fn test_random_adds_preserve_antichain() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut winners = Winners::single(Winner::north(Rank::TWO));
            for _ in 0..12 {
                let rank = Rank::new(rng.gen_range(2..=14));
                let winner = match rng.gen_range(0..3) {
                    0 => Winner::north(rank),
                    1 => Winner::south(rank),
                    _ => Winner::higher_of(rank, Rank::new(rng.gen_range(2..=14))),
                };
                winners.add_winner(winner);
            }
            assert_antichain(&winners);
            if !winners.is_unconditional() {
                // The antichain settles on a single governing rank.
                winners.common_rank();
            }
        }
    }
}
