//! Error types for card operations.

use thiserror::Error;

/// Errors that can occur when building, updating, or parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}, expected 1 through 13")]
    InvalidRank(u8),
    /// Character that is not one of the four suit symbols.
    #[error("invalid suit {0:?}, expected one of ♥ ♦ ♣ ♠")]
    InvalidSuit(char),
    /// Suit text that is not a symbol, letter, or suit name.
    #[error("unknown suit name, expected a symbol, a letter (h, d, c, s), or a name such as hearts")]
    UnknownSuit,
    /// Nothing to parse.
    #[error("empty card text")]
    Empty,
    /// Rank text that is neither a face letter nor a number.
    #[error("unable to parse rank")]
    UnexpectedRank,
    /// Rank with no suit after it.
    #[error("missing suit after rank")]
    MissingSuit,
    /// Unparsed characters after the suit.
    #[error("extra characters found after the suit")]
    TrailingChars,
}
