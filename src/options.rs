//! Rendering options for printing cards and decks.

use crate::card::{Card, Suit};

/// How each card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardStyle {
    /// Five-line ASCII-art box.
    #[default]
    Art,
    /// Compact form such as `A♥` or `10♠`.
    Compact,
}

/// Configuration options for rendering a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{CardStyle, RenderOptions, Suit};
///
/// let options = RenderOptions::default()
///     .with_style(CardStyle::Compact)
///     .with_separator(" ")
///     .with_suit(Suit::Spades);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// How each card is drawn.
    pub style: CardStyle,
    /// Text written after every card.
    pub separator: &'static str,
    /// Only render cards of this suit. `None` renders every card.
    pub suit: Option<Suit>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: CardStyle::Art,
            separator: "\n\n",
            suit: None,
        }
    }
}

impl RenderOptions {
    /// Sets the card style.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{CardStyle, RenderOptions};
    ///
    /// let options = RenderOptions::default().with_style(CardStyle::Compact);
    /// assert_eq!(options.style, CardStyle::Compact);
    /// ```
    #[must_use]
    pub const fn with_style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the text written after every card.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::RenderOptions;
    ///
    /// let options = RenderOptions::default().with_separator("\n");
    /// assert_eq!(options.separator, "\n");
    /// ```
    #[must_use]
    pub const fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    /// Restricts rendering to a single suit.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{RenderOptions, Suit};
    ///
    /// let options = RenderOptions::default().with_suit(Suit::Clubs);
    /// assert_eq!(options.suit, Some(Suit::Clubs));
    /// ```
    #[must_use]
    pub const fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = Some(suit);
        self
    }

    /// Returns whether `card` passes the suit filter.
    #[must_use]
    pub fn includes(&self, card: &Card) -> bool {
        self.suit.is_none_or(|suit| card.suit() == suit)
    }
}
