//! The standard 52-card deck.

extern crate alloc;

use alloc::vec::{self, Vec};
use core::fmt;
use core::ops::Index;
use core::slice;

use log::trace;

use crate::card::{Card, Suit};
use crate::options::{CardStyle, RenderOptions};

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// An ordered deck of all 52 cards.
///
/// Cards are ordered by suit (hearts, diamonds, clubs, spades) and, within
/// a suit, by ascending rank from Ace to King. The deck is never shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a new ordered deck.
    ///
    /// ```
    /// use deckrs::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck[0].to_string(), "A♥");
    /// assert_eq!(deck[DECK_SIZE - 1].to_string(), "K♠");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Card::RANKS {
                cards.push(Card::from_parts(rank, suit));
            }
        }

        trace!("built deck of {} cards", cards.len());
        Self { cards }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the cards in deck order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether `card` is in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Writes every card as ASCII art followed by a blank line.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    pub fn write_art<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        self.write_with(out, &RenderOptions::default())
    }

    /// Writes the cards selected by `options`, each followed by
    /// [`RenderOptions::separator`].
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    pub fn write_with<W: fmt::Write + ?Sized>(
        &self,
        out: &mut W,
        options: &RenderOptions,
    ) -> fmt::Result {
        for card in self.iter().filter(|card| options.includes(card)) {
            match options.style {
                CardStyle::Art => card.write_art(out)?,
                CardStyle::Compact => write!(out, "{card}")?,
            }
            out.write_str(options.separator)?;
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
