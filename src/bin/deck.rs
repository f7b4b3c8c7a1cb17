//! Prints a standard 52-card deck as ASCII art.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use deckrs::{CardStyle, Deck, RenderOptions, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    /// Five-line ASCII-art boxes.
    Art,
    /// Compact cards such as `A♥`.
    Compact,
}

impl From<Style> for CardStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Art => Self::Art,
            Style::Compact => Self::Compact,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// How each card is drawn.
    #[clap(long, short, value_enum, default_value_t = Style::Art)]
    style: Style,
    /// Only print cards of this suit (symbol, letter, or name).
    #[clap(long)]
    suit: Option<Suit>,
    /// Print compact cards on a single line.
    #[clap(long, conflicts_with = "style")]
    one_line: bool,
}

impl Cli {
    fn options(&self) -> RenderOptions {
        let mut options = if self.one_line {
            RenderOptions::default()
                .with_style(CardStyle::Compact)
                .with_separator(" ")
        } else {
            RenderOptions::default().with_style(self.style.into())
        };

        if let Some(suit) = self.suit {
            options = options.with_suit(suit);
        }
        options
    }

    /// Renders `deck` with these flags; one-line output ends in a newline
    /// instead of a separator.
    fn render(&self, deck: &Deck) -> Result<String> {
        let mut text = String::new();
        deck.write_with(&mut text, &self.options())
            .context("failed to render deck")?;

        if self.one_line {
            text.truncate(text.trim_end().len());
            text.push('\n');
        }
        Ok(text)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let options = cli.options();

    let deck = Deck::new();
    let text = cli.render(&deck)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write deck")?;

    let printed = deck.iter().filter(|card| options.includes(card)).count();
    info!("printed {printed} cards");

    Ok(())
}
