//! Card-domain primitives shared by the suit-combination solver crates.
//!
//! Only the pieces the dominance engine actually needs live here: an
//! ordered card rank, the two declaring-side hands, and the compact
//! aliases used throughout the solver. The full deck/deal machinery is
//! owned by the search driver.

mod card;

pub use card::{Rank, Side};

/// Identifier for one division of the outstanding cards among the
/// unseen hands.
pub type Dist = u32;

/// Number of tricks taken in one line of play.
pub type Tricks = u8;

/// Encoded card holding, as produced by the search driver's suit
/// encoder. Opaque to this workspace except as a lookup key.
pub type Holding = u64;
