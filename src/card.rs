//! Card types and rendering.

use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;

use log::debug;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the symbol printed on the card.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns the plural English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }

    /// Symbol or ASCII letter (`h`, `d`, `c`, `s`, any case).
    fn from_char_lenient(c: char) -> Result<Self, CardError> {
        Self::try_from(c).or_else(|_| match c.to_ascii_lowercase() {
            'h' => Ok(Self::Hearts),
            'd' => Ok(Self::Diamonds),
            'c' => Ok(Self::Clubs),
            's' => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit(c)),
        })
    }
}

/// Accepts only the four suit symbols.
impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '♥' => Ok(Self::Hearts),
            '♦' => Ok(Self::Diamonds),
            '♣' => Ok(Self::Clubs),
            '♠' => Ok(Self::Spades),
            other => Err(CardError::InvalidSuit(other)),
        }
    }
}

/// Parses a symbol, a single letter, or a name such as `hearts` or `Spade`.
impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let first = chars.next().ok_or(CardError::Empty)?;
        if chars.as_str().is_empty() {
            return Self::from_char_lenient(first);
        }

        let singular = s.strip_suffix(['s', 'S']).unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|suit| {
                let name = suit.name();
                name.strip_suffix('s')
                    .unwrap_or(name)
                    .eq_ignore_ascii_case(singular)
            })
            .ok_or(CardError::UnknownSuit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.symbol(), f)
    }
}

const PRINT_RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

const fn check_rank(rank: u8) -> Result<u8, CardError> {
    if rank >= Card::ACE && rank <= Card::KING {
        Ok(rank)
    } else {
        Err(CardError::InvalidRank(rank))
    }
}

/// A playing card.
///
/// The rank is always within [`Card::RANKS`]; every way of building or
/// updating a card validates its input first and leaves the card untouched
/// on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// 1 = Ace, 11 = Jack, 12 = Queen, 13 = King.
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Rank of an Ace.
    pub const ACE: u8 = 1;
    /// Rank of a Jack.
    pub const JACK: u8 = 11;
    /// Rank of a Queen.
    pub const QUEEN: u8 = 12;
    /// Rank of a King.
    pub const KING: u8 = 13;
    /// Every valid rank, in ascending order.
    pub const RANKS: RangeInclusive<u8> = Self::ACE..=Self::KING;

    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, CardError, Suit};
    ///
    /// let card = Card::new(10, Suit::Spades)?;
    /// assert_eq!(card.to_string(), "10♠");
    /// assert_eq!(Card::new(14, Suit::Spades), Err(CardError::InvalidRank(14)));
    /// # Ok::<(), CardError>(())
    /// ```
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        match check_rank(rank) {
            Ok(rank) => Ok(Self { rank, suit }),
            Err(err) => Err(err),
        }
    }

    /// Creates a new card from a rank and a suit symbol (`♥`, `♦`, `♣`, `♠`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] for a bad rank, otherwise
    /// [`CardError::InvalidSuit`] for a bad symbol.
    pub fn from_symbols(rank: u8, suit: char) -> Result<Self, CardError> {
        let rank = check_rank(rank)?;
        let suit = Suit::try_from(suit)?;
        Ok(Self { rank, suit })
    }

    /// Builds a card from parts already known to be valid.
    pub(crate) const fn from_parts(rank: u8, suit: Suit) -> Self {
        debug_assert!(rank >= Self::ACE && rank <= Self::KING);
        Self { rank, suit }
    }

    /// Returns the numeric rank (1 through 13).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether this is a Jack, Queen, or King.
    #[must_use]
    pub const fn is_face(&self) -> bool {
        self.rank >= Self::JACK
    }

    /// Sets the rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`, in
    /// which case the card is unchanged.
    pub fn set_rank(&mut self, rank: u8) -> Result<(), CardError> {
        let rank = check_rank(rank).inspect_err(|err| debug!("{self}: {err}"))?;
        self.rank = rank;
        Ok(())
    }

    /// Sets the suit.
    pub const fn set_suit(&mut self, suit: Suit) {
        self.suit = suit;
    }

    /// Sets the suit from its symbol.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if `symbol` is not one of `♥`, `♦`,
    /// `♣`, `♠`, in which case the card is unchanged.
    pub fn set_suit_symbol(&mut self, symbol: char) -> Result<(), CardError> {
        let suit = Suit::try_from(symbol).inspect_err(|err| debug!("{self}: {err}"))?;
        self.suit = suit;
        Ok(())
    }

    /// Sets rank and suit together.
    ///
    /// The update is all-or-nothing: if the rank is rejected the suit is not
    /// applied either.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Suit};
    ///
    /// let mut card = Card::default();
    /// assert!(card.set_all(0, Suit::Clubs).is_err());
    /// assert_eq!(card, Card::default());
    /// ```
    pub fn set_all(&mut self, rank: u8, suit: Suit) -> Result<(), CardError> {
        let card = Self::new(rank, suit).inspect_err(|err| debug!("{self}: {err}"))?;
        *self = card;
        Ok(())
    }

    /// Returns the rank as printed on the card: `A`, `2`-`10`, `J`, `Q`, `K`.
    #[must_use]
    pub const fn print_rank(&self) -> &'static str {
        PRINT_RANKS[(self.rank - 1) as usize]
    }

    /// Returns a view of the card that displays as five lines of ASCII art.
    ///
    /// ```
    /// use deckrs::{Card, Suit};
    ///
    /// let card = Card::new(1, Suit::Hearts)?;
    /// assert_eq!(
    ///     card.art().to_string(),
    ///     "--------\n| ♥  ♥ |\n|  A   |\n| ♥  ♥ |\n--------"
    /// );
    /// # Ok::<(), deckrs::CardError>(())
    /// ```
    #[must_use]
    pub const fn art(self) -> CardArt {
        CardArt(self)
    }

    /// Writes the ASCII art to `out`, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    pub fn write_art<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}", self.art())
    }

    /// Prints the ASCII art to standard output, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to standard output.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn print_art(&self) -> std::io::Result<()> {
        use std::io::Write;

        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", self.art())?;
        stdout.flush()
    }
}

/// The Ace of Hearts.
impl Default for Card {
    fn default() -> Self {
        Self::from_parts(Self::ACE, Suit::Hearts)
    }
}

/// A missing card is never equal to a card.
impl PartialEq<Option<Self>> for Card {
    fn eq(&self, other: &Option<Self>) -> bool {
        other.as_ref() == Some(self)
    }
}

/// Compact form, e.g. `A♥` or `10♠`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.print_rank(), self.suit)
    }
}

/// Parses the compact form.
///
/// The rank is `A`, `2`-`10`, `T`, `J`, `Q` or `K` (any case) and the suit is
/// a symbol or one of `h`, `d`, `c`, `s`.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (rank, rest) = if let Some(rest) = s.strip_prefix("10") {
            (10, rest)
        } else {
            let mut chars = s.chars();
            let rank = match chars.next().ok_or(CardError::Empty)? {
                'A' | 'a' => Self::ACE,
                c @ '2'..='9' => c as u8 - b'0',
                'T' | 't' => 10,
                'J' | 'j' => Self::JACK,
                'Q' | 'q' => Self::QUEEN,
                'K' | 'k' => Self::KING,
                _ => return Err(CardError::UnexpectedRank),
            };
            (rank, chars.as_str())
        };

        let mut chars = rest.chars();
        let suit = Suit::from_char_lenient(chars.next().ok_or(CardError::MissingSuit)?)?;
        if !chars.as_str().is_empty() {
            return Err(CardError::TrailingChars);
        }

        Ok(Self::from_parts(rank, suit))
    }
}

/// ASCII-art view of a [`Card`], returned by [`Card::art`].
///
/// Every line is eight columns wide and there is no trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardArt(Card);

impl fmt::Display for CardArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = self.0.suit.symbol();
        let rank = self.0.print_rank();

        f.write_str("--------\n")?;
        writeln!(f, "| {suit}  {suit} |")?;
        // "10" is the only rank two columns wide.
        if rank.len() == 1 {
            writeln!(f, "|  {rank}   |")?;
        } else {
            writeln!(f, "|  {rank}  |")?;
        }
        writeln!(f, "| {suit}  {suit} |")?;
        f.write_str("--------")
    }
}
