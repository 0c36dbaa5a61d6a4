//! Dominance/comparison engine for candidate lines of suit play.
//!
//! Given many candidate lines, each producing a distribution-indexed
//! set of achievable trick counts plus the card(s) that achieve them,
//! this crate decides which of any two lines is at least as good for
//! declarer. The pieces, leaves first:
//!
//! - [`Winner`]: one atomic card-based claim to an outcome
//! - [`Winners`]: the minimal antichain of alternative claims, with the
//!   declarer-choice (`add`) and defender-forced (`multiply`) algebra
//! - [`Comparer`]: generic pairwise-matrix dominance reducer
//! - [`Range`]/[`Ranges`]: per-distribution trick intervals and their
//!   sorted merge across sibling lines
//! - [`Study`]: bit-packed fast-path comparison over a shared baseline
//!
//! All comparisons are four-valued ([`Compare`]): an incommensurate
//! verdict is a legitimate result and means both lines must be kept.
//!
//! Everything here is a synchronous, CPU-bound value computation. The
//! only process-wide state is the profile lookup table in [`Study`],
//! built once behind a thread-safe guard; call [`init_profile_table`]
//! at startup to avoid paying for it inside the search.

mod compare;
mod range;
mod study;
mod winner;
mod winners;

pub use compare::{Compare, Comparer};
pub use range::{Outcome, Range, Ranges};
pub use study::{init_profile_table, Study};
pub use winner::Winner;
pub use winners::Winners;
