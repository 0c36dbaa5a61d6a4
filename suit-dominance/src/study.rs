//! Cheap surrogate comparisons between candidate lines.
//!
//! Exact dominance via the winners algebra is too expensive to run for
//! every pair of lines at search scale. A [`Study`] derives two cheap
//! surrogates from a line's outcomes:
//!
//! - a *summary* of group sums over the raw trick counts, a
//!   necessary-but-not-sufficient pre-test, and
//! - a *profile* sequence packing per-distribution trick excess over the
//!   shared [`Ranges`] baseline, five 2-bit values per 10-bit word,
//!   compared through a precomputed process-wide table.
//!
//! The table is built once behind a thread-safe guard and is read-only
//! afterwards; call [`init_profile_table`] at startup to take the build
//! out of the first comparison.

use crate::compare::Compare;
use crate::range::{Outcome, Ranges};
use std::sync::OnceLock;

/// Excess values packed per profile word.
const PROFILE_GROUP: usize = 5;
/// Bits per packed profile word.
const PROFILE_BITS: usize = 2 * PROFILE_GROUP;
/// Lookup entries: one per ordered pair of profile words.
const TABLE_SIZE: usize = 1 << (2 * PROFILE_BITS);

static PROFILE_TABLE: OnceLock<Box<[bool]>> = OnceLock::new();

fn build_profile_table() -> Box<[bool]> {
    let mut table = vec![false; TABLE_SIZE].into_boxed_slice();
    for left in 0..1u32 << PROFILE_BITS {
        for right in 0..1u32 << PROFILE_BITS {
            let mut ge = true;
            for slot in 0..PROFILE_GROUP {
                let shift = 2 * slot;
                if (left >> shift) & 3 < (right >> shift) & 3 {
                    ge = false;
                    break;
                }
            }
            table[table_index(left as u16, right as u16)] = ge;
        }
    }
    table
}

#[inline]
fn table_index(left: u16, right: u16) -> usize {
    ((left as usize) << PROFILE_BITS) | right as usize
}

/// Whether every 2-bit component of `left` is >= the matching
/// component of `right`, via the table.
#[inline]
fn profile_ge(table: &[bool], left: u16, right: u16) -> bool {
    table[table_index(left, right)]
}

/// Build the profile lookup table now. Safe to call from any thread,
/// any number of times; the table is built exactly once.
pub fn init_profile_table() {
    let _ = profile_table();
}

fn profile_table() -> &'static [bool] {
    PROFILE_TABLE.get_or_init(build_profile_table)
}

/// Surrogate representations of one candidate line, recomputable at any
/// time from the line's outcomes and the shared ranges baseline.
#[derive(Debug, Clone, Default)]
pub struct Study {
    summary: Vec<u32>,
    profiles: Vec<u16>,
}

impl Study {
    pub fn new() -> Study {
        Study::default()
    }

    pub fn summary(&self) -> &[u32] {
        &self.summary
    }

    pub fn profiles(&self) -> &[u16] {
        &self.profiles
    }

    /// Build the group-sum summary: about sqrt(n) equal-width groups of
    /// raw trick counts, each reduced to its sum.
    pub fn study(&mut self, outcomes: &[Outcome]) {
        self.summary.clear();
        if outcomes.is_empty() {
            return;
        }
        let groups = ((outcomes.len() as f64).sqrt().round() as usize).max(1);
        let width = outcomes.len().div_ceil(groups);
        for chunk in outcomes.chunks(width) {
            self.summary
                .push(chunk.iter().map(|o| o.tricks as u32).sum());
        }
    }

    /// Pre-test: can this line still dominate `other`?
    ///
    /// A group sum below the other line's sum rules dominance out; the
    /// converse proves nothing, and the caller must fall back to the
    /// exact comparison. No false negative is possible.
    pub fn summary_dominates(&self, other: &Study) -> bool {
        assert_eq!(
            self.summary.len(),
            other.summary.len(),
            "summaries built from different outcome counts"
        );
        self.summary
            .iter()
            .zip(&other.summary)
            .all(|(own, theirs)| own >= theirs)
    }

    /// Build the packed profiles against the shared ranges baseline.
    ///
    /// Outcomes and ranges are walked in lock-step by ascending
    /// distribution; ranges covering distributions this line never
    /// visited are skipped. Every outcome's distribution must be in the
    /// baseline, and every excess `tricks - minimum` must fit 2 bits;
    /// either violation is a caller bug and aborts.
    pub fn scrutinize(&mut self, outcomes: &[Outcome], ranges: &Ranges) {
        self.profiles.clear();
        let mut baseline = ranges.iter();
        let mut word = 0u16;
        let mut filled = 0;
        for outcome in outcomes {
            let range = loop {
                match baseline.next() {
                    Some(range) if range.dist() < outcome.dist => continue,
                    Some(range) if range.dist() == outcome.dist => break range,
                    _ => panic!(
                        "distribution {} missing from the ranges baseline",
                        outcome.dist
                    ),
                }
            };
            assert!(
                outcome.tricks >= range.minimum(),
                "outcome below the distribution minimum"
            );
            let excess = outcome.tricks - range.minimum();
            assert!(
                excess <= 3,
                "trick excess {} does not fit the 2-bit profile",
                excess
            );
            word = (word << 2) | excess as u16;
            filled += 1;
            if filled == PROFILE_GROUP {
                self.profiles.push(word);
                word = 0;
                filled = 0;
            }
        }
        // Flush a short final group.
        if filled > 0 {
            self.profiles.push(word);
        }
    }

    /// Whether this line's profile dominates the other's group by group.
    ///
    /// Both profiles must have been built against the same shared
    /// baseline; they then have equal length by construction.
    pub fn ge_by_profile(&self, other: &Study) -> bool {
        assert_eq!(
            self.profiles.len(),
            other.profiles.len(),
            "profiles built against different baselines"
        );
        let table = profile_table();
        self.profiles
            .iter()
            .zip(&other.profiles)
            .all(|(&own, &theirs)| profile_ge(table, own, theirs))
    }

    /// Directional profile comparison.
    ///
    /// Groups favoring both lines, or a single group favoring neither,
    /// leave the lines incommensurate; otherwise the consistent
    /// direction (or exact equality) is reported.
    pub fn compare_by_profile(&self, other: &Study) -> Compare {
        assert_eq!(
            self.profiles.len(),
            other.profiles.len(),
            "profiles built against different baselines"
        );
        let table = profile_table();
        let mut first = false;
        let mut second = false;
        for (&own, &theirs) in self.profiles.iter().zip(&other.profiles) {
            match (
                profile_ge(table, own, theirs),
                profile_ge(table, theirs, own),
            ) {
                (true, true) => {}
                (true, false) => first = true,
                (false, true) => second = true,
                (false, false) => return Compare::Different,
            }
            if first && second {
                return Compare::Different;
            }
        }
        if first {
            Compare::First
        } else if second {
            Compare::Second
        } else {
            Compare::Equal
        }
    }
}
