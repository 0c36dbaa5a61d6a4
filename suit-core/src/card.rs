use std::fmt;

/// Rank of a card within its suit. Higher is stronger.
///
/// Stored as the plain 2..=14 value for the thirteen standard ranks
/// (2-9, T, J, Q, K, A). Values above 14 are legal: composing tricks
/// across suit lengths shifts ranks past the ace, and the engine only
/// ever relies on ordering and equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const TWO: Rank = Rank(2);
    pub const THREE: Rank = Rank(3);
    pub const FOUR: Rank = Rank(4);
    pub const FIVE: Rank = Rank(5);
    pub const SIX: Rank = Rank(6);
    pub const SEVEN: Rank = Rank(7);
    pub const EIGHT: Rank = Rank(8);
    pub const NINE: Rank = Rank(9);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// All thirteen standard ranks, low to high.
    pub const ALL: [Rank; 13] = [
        Rank::TWO,
        Rank::THREE,
        Rank::FOUR,
        Rank::FIVE,
        Rank::SIX,
        Rank::SEVEN,
        Rank::EIGHT,
        Rank::NINE,
        Rank::TEN,
        Rank::JACK,
        Rank::QUEEN,
        Rank::KING,
        Rank::ACE,
    ];

    /// Create a rank from its numeric value.
    pub fn new(value: u8) -> Rank {
        Rank(value)
    }

    /// Numeric value of the rank.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Shift the rank upward by a fixed offset.
    ///
    /// Panics on numeric overflow; an offset that large is a caller bug.
    pub fn offset(self, delta: u8) -> Rank {
        match self.0.checked_add(delta) {
            Some(value) => Rank(value),
            None => panic!("rank offset overflow: {} + {}", self.0, delta),
        }
    }

    /// Single-character form for the standard ranks (2-9, T, J, Q, K, A).
    /// Ranks shifted past the ace have no character form.
    pub fn to_char(self) -> Option<char> {
        match self.0 {
            2..=9 => Some((b'0' + self.0) as char),
            10 => Some('T'),
            11 => Some('J'),
            12 => Some('Q'),
            13 => Some('K'),
            14 => Some('A'),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// Which hand of the declaring partnership holds a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    South,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::North, Side::South];

    /// The partner hand.
    pub fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
        }
    }

    /// Single-character form (N or S).
    pub fn to_char(self) -> char {
        match self {
            Side::North => 'N',
            Side::South => 'S',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
