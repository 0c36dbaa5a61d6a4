//! Symmetry-equivalence store over encoded card holdings.
//!
//! The search engine asks one question here: is this holding known to
//! be strategically identical to one already solved? A hit lets the
//! engine reuse the earlier result instead of re-solving the position.
//! Membership only costs performance when absent, never correctness,
//! so a missing or short store file is a recoverable condition.

use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use suit_core::Holding;

/// Largest card count the store tracks (one full suit).
pub const MAX_CARDS: usize = 13;

/// Known symmetric holdings for the 10- and 11-card endings. Found by
/// an exhaustive offline solve and frozen here; the store file is the
/// extensible path for everything else.
const MANUAL_SYMMETRIES: &[(u64, Holding)] = &[
    (10, 0x0000_0000_0000_0021),
    (10, 0x0000_0000_0000_0085),
    (10, 0x0000_0000_0000_0129),
    (10, 0x0000_0000_0000_01ce),
    (10, 0x0000_0000_0000_0231),
    (10, 0x0000_0000_0000_0252),
    (10, 0x0000_0000_0000_02d6),
    (10, 0x0000_0000_0000_0318),
    (11, 0x0000_0000_0000_0463),
    (11, 0x0000_0000_0000_04a5),
    (11, 0x0000_0000_0000_0529),
    (11, 0x0000_0000_0000_05ad),
    (11, 0x0000_0000_0000_0631),
    (11, 0x0000_0000_0000_0718),
];

/// Per-card-count sets of holdings known to be symmetric equivalents
/// of an already-solved holding.
#[derive(Debug, Clone, Default)]
pub struct SymmetryStore {
    store: Vec<FxHashSet<Holding>>,
}

impl SymmetryStore {
    pub fn new() -> SymmetryStore {
        SymmetryStore {
            store: (0..=MAX_CARDS).map(|_| FxHashSet::default()).collect(),
        }
    }

    /// Record one symmetric holding.
    pub fn add(&mut self, cards: usize, holding: Holding) {
        assert!(cards <= MAX_CARDS, "card count {} out of range", cards);
        self.store[cards].insert(holding);
    }

    /// Membership query: is this holding a known symmetric equivalent?
    pub fn symmetrize(&self, cards: usize, holding: Holding) -> bool {
        self.store
            .get(cards)
            .map_or(false, |set| set.contains(&holding))
    }

    /// Total number of stored holdings.
    pub fn len(&self) -> usize {
        self.store.iter().map(FxHashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.store.iter().all(FxHashSet::is_empty)
    }

    /// Non-empty card counts with their holding counts, ascending.
    pub fn counts(&self) -> Vec<(usize, usize)> {
        self.store
            .iter()
            .enumerate()
            .filter(|(_, set)| !set.is_empty())
            .map(|(cards, set)| (cards, set.len()))
            .collect()
    }

    /// Seed the frozen hand-curated 10- and 11-card table.
    pub fn set_manual(&mut self) {
        for &(cards, holding) in MANUAL_SYMMETRIES {
            self.add(cards as usize, holding);
        }
    }

    /// Load records from a flat binary file of (card count, holding)
    /// pairs, merging them into the store.
    ///
    /// The format carries no header, checksum or length prefix; the
    /// record count is inferred from the file size and a trailing
    /// partial record is ignored. Records with an out-of-range card
    /// count are skipped rather than trusted.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let bytes = std::fs::read(path)?;
        let records = bytes.len() / 16;
        for record in 0..records {
            let at = record * 16;
            let cards = u64::from_ne_bytes(bytes[at..at + 8].try_into().unwrap());
            let holding = u64::from_ne_bytes(bytes[at + 8..at + 16].try_into().unwrap());
            if cards as usize <= MAX_CARDS {
                self.store[cards as usize].insert(holding);
            }
        }
        Ok(())
    }

    /// Write the full table as flat (card count, holding) pairs in
    /// ascending card-count order, holdings sorted within each count.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        for (cards, set) in self.store.iter().enumerate() {
            let mut holdings: Vec<Holding> = set.iter().copied().collect();
            holdings.sort_unstable();
            for holding in holdings {
                out.write_all(&(cards as u64).to_ne_bytes())?;
                out.write_all(&holding.to_ne_bytes())?;
            }
        }
        out.flush()
    }
}
