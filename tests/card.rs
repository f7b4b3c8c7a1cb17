//! Card integration tests.

use deckrs::{Card, CardError, Suit};

fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit).expect("valid card")
}

#[test]
fn new_round_trips_every_rank_and_suit() {
    for suit in Suit::ALL {
        for rank in 1..=13 {
            let card = card(rank, suit);
            assert_eq!(card.rank(), rank);
            assert_eq!(card.suit(), suit);
        }
    }
}

#[test]
fn new_rejects_out_of_range_ranks() {
    for rank in [0, 14, 255] {
        assert_eq!(
            Card::new(rank, Suit::Hearts),
            Err(CardError::InvalidRank(rank))
        );
    }
}

#[test]
fn from_symbols_validates_rank_then_suit() {
    assert_eq!(Card::from_symbols(7, '♣'), Ok(card(7, Suit::Clubs)));
    assert_eq!(Card::from_symbols(0, 'x'), Err(CardError::InvalidRank(0)));
    assert_eq!(Card::from_symbols(7, 'x'), Err(CardError::InvalidSuit('x')));
    // Letters are only accepted when parsing text.
    assert_eq!(Card::from_symbols(7, 'c'), Err(CardError::InvalidSuit('c')));
}

#[test]
fn default_is_ace_of_hearts() {
    let card = Card::default();
    assert_eq!(card.rank(), 1);
    assert_eq!(card.suit(), Suit::Hearts);
    assert_eq!(card.to_string(), "A♥");
}

#[test]
fn set_rank_keeps_previous_rank_on_failure() {
    let mut card = card(5, Suit::Spades);

    for rank in [0, 14, 200] {
        assert_eq!(card.set_rank(rank), Err(CardError::InvalidRank(rank)));
        assert_eq!(card.rank(), 5);
    }

    assert_eq!(card.set_rank(13), Ok(()));
    assert_eq!(card.rank(), 13);
    assert_eq!(card.suit(), Suit::Spades);
}

#[test]
fn set_suit_symbol_keeps_previous_suit_on_failure() {
    let mut card = card(9, Suit::Diamonds);

    for symbol in ['x', ' ', 'H', '♡'] {
        assert_eq!(card.set_suit_symbol(symbol), Err(CardError::InvalidSuit(symbol)));
        assert_eq!(card.suit(), Suit::Diamonds);
    }

    assert_eq!(card.set_suit_symbol('♠'), Ok(()));
    assert_eq!(card.suit(), Suit::Spades);

    card.set_suit(Suit::Clubs);
    assert_eq!(card.suit(), Suit::Clubs);
    assert_eq!(card.rank(), 9);
}

#[test]
fn set_all_is_atomic() {
    let mut four_hearts = card(4, Suit::Hearts);

    assert_eq!(
        four_hearts.set_all(14, Suit::Spades),
        Err(CardError::InvalidRank(14))
    );
    assert_eq!(four_hearts, card(4, Suit::Hearts));

    assert_eq!(four_hearts.set_all(12, Suit::Spades), Ok(()));
    assert_eq!(four_hearts, card(12, Suit::Spades));
}

#[test]
fn print_rank_maps_aces_and_faces() {
    assert_eq!(card(1, Suit::Hearts).print_rank(), "A");
    assert_eq!(card(11, Suit::Hearts).print_rank(), "J");
    assert_eq!(card(12, Suit::Hearts).print_rank(), "Q");
    assert_eq!(card(13, Suit::Hearts).print_rank(), "K");
    for rank in 2..=10 {
        assert_eq!(card(rank, Suit::Hearts).print_rank(), rank.to_string());
    }
}

#[test]
fn is_face_only_for_jack_queen_king() {
    let faces: Vec<u8> = Card::RANKS
        .filter(|&rank| card(rank, Suit::Clubs).is_face())
        .collect();
    assert_eq!(faces, [11, 12, 13]);
}

#[test]
fn display_uses_print_rank_and_symbol() {
    assert_eq!(card(1, Suit::Hearts).to_string(), "A♥");
    assert_eq!(card(10, Suit::Spades).to_string(), "10♠");
    assert_eq!(card(11, Suit::Diamonds).to_string(), "J♦");
    assert_eq!(card(2, Suit::Clubs).to_string(), "2♣");
}

#[test]
fn equality_is_exact() {
    let five_hearts = card(5, Suit::Hearts);

    assert_eq!(five_hearts, five_hearts);
    assert_eq!(five_hearts, card(5, Suit::Hearts));
    assert_eq!(card(5, Suit::Hearts), five_hearts);
    assert_ne!(five_hearts, card(5, Suit::Diamonds));
    assert_ne!(five_hearts, card(6, Suit::Hearts));
}

#[test]
fn equality_with_missing_card_is_false() {
    let five_hearts = card(5, Suit::Hearts);

    assert!(five_hearts != None);
    assert!(five_hearts == Some(card(5, Suit::Hearts)));
    assert!(five_hearts != Some(card(5, Suit::Clubs)));
}

#[test]
fn copies_are_independent() {
    let original = card(3, Suit::Clubs);
    let mut copy = original;
    assert_eq!(copy, original);

    copy.set_rank(8).expect("valid rank");
    assert_eq!(original.rank(), 3);
    assert_eq!(copy.rank(), 8);
}

#[test]
fn art_pads_single_column_ranks() {
    assert_eq!(
        card(1, Suit::Hearts).art().to_string(),
        "--------\n| ♥  ♥ |\n|  A   |\n| ♥  ♥ |\n--------"
    );
    assert_eq!(
        card(13, Suit::Clubs).art().to_string(),
        "--------\n| ♣  ♣ |\n|  K   |\n| ♣  ♣ |\n--------"
    );
}

#[test]
fn art_for_ten_is_same_width() {
    let art = card(10, Suit::Spades).art().to_string();
    assert_eq!(art, "--------\n| ♠  ♠ |\n|  10  |\n| ♠  ♠ |\n--------");
    assert!(art.lines().all(|line| line.chars().count() == 8));
}

#[test]
fn write_art_goes_to_sink() {
    let card = card(7, Suit::Diamonds);
    let mut out = String::new();
    card.write_art(&mut out).expect("write to string");
    assert_eq!(out, card.art().to_string());
    assert!(!out.ends_with('\n'));
}

#[test]
fn suit_symbols_and_parsing() {
    let symbols: String = Suit::ALL.iter().map(|suit| suit.symbol()).collect();
    assert_eq!(symbols, "♥♦♣♠");

    for suit in Suit::ALL {
        assert_eq!(Suit::try_from(suit.symbol()), Ok(suit));
        assert_eq!(suit.to_string().parse::<Suit>(), Ok(suit));
        assert_eq!(suit.name().parse::<Suit>(), Ok(suit));
    }

    assert_eq!("h".parse::<Suit>(), Ok(Suit::Hearts));
    assert_eq!("S".parse::<Suit>(), Ok(Suit::Spades));
    assert_eq!("club".parse::<Suit>(), Ok(Suit::Clubs));
    assert_eq!("DIAMONDS".parse::<Suit>(), Ok(Suit::Diamonds));
    assert_eq!("".parse::<Suit>(), Err(CardError::Empty));
    assert_eq!("x".parse::<Suit>(), Err(CardError::InvalidSuit('x')));
    assert_eq!("stars".parse::<Suit>(), Err(CardError::UnknownSuit));
    assert_eq!("xyz".parse::<Suit>(), Err(CardError::UnknownSuit));
    assert_eq!(Suit::try_from('h'), Err(CardError::InvalidSuit('h')));
}

#[test]
fn parse_compact_form() {
    assert_eq!("A♥".parse::<Card>(), Ok(card(1, Suit::Hearts)));
    assert_eq!("10♠".parse::<Card>(), Ok(card(10, Suit::Spades)));
    assert_eq!("Td".parse::<Card>(), Ok(card(10, Suit::Diamonds)));
    assert_eq!("qs".parse::<Card>(), Ok(card(12, Suit::Spades)));
    assert_eq!(" 7c ".parse::<Card>(), Ok(card(7, Suit::Clubs)));

    assert_eq!("".parse::<Card>(), Err(CardError::Empty));
    assert_eq!("1♥".parse::<Card>(), Err(CardError::UnexpectedRank));
    assert_eq!("Z♥".parse::<Card>(), Err(CardError::UnexpectedRank));
    assert_eq!("K".parse::<Card>(), Err(CardError::MissingSuit));
    assert_eq!("10".parse::<Card>(), Err(CardError::MissingSuit));
    assert_eq!("Kx".parse::<Card>(), Err(CardError::InvalidSuit('x')));
    assert_eq!("K♥♥".parse::<Card>(), Err(CardError::TrailingChars));
}

#[test]
fn display_parses_back_for_every_card() {
    for suit in Suit::ALL {
        for rank in Card::RANKS {
            let card = card(rank, suit);
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }
}

#[test]
fn errors_have_readable_messages() {
    assert_eq!(
        CardError::InvalidRank(14).to_string(),
        "invalid rank 14, expected 1 through 13"
    );
    assert_eq!(
        CardError::InvalidSuit('x').to_string(),
        "invalid suit 'x', expected one of ♥ ♦ ♣ ♠"
    );
    assert_eq!(
        CardError::UnknownSuit.to_string(),
        "unknown suit name, expected a symbol, a letter (h, d, c, s), or a name such as hearts"
    );
}
