//! Playing cards with validated ranks and suits, rendered as ASCII art, with
//! optional `no_std` support.
//!
//! The crate provides a [`Card`] value type and an ordered 52-card [`Deck`].
//! Every fallible operation returns a [`CardError`]; the library never exits
//! the process on bad input.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, Deck, Suit};
//!
//! let card = Card::new(12, Suit::Diamonds)?;
//! assert_eq!(card.print_rank(), "Q");
//! assert_eq!(card.to_string(), "Q♦");
//!
//! let mut out = String::new();
//! Deck::new().write_art(&mut out)?;
//! assert!(out.starts_with("--------\n| ♥  ♥ |\n|  A   |\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, CardArt, Suit};
pub use deck::{DECK_SIZE, Deck};
pub use error::CardError;
pub use options::{CardStyle, RenderOptions};
