//! Card and packet formatters for terminal display.
//!
//! Short notation uses Unicode suit symbols, with an ASCII fallback on
//! Windows consoles that cannot render them.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! Suitless cards carry no suit symbol: jokers print as `LJ`/`HJ` and the
//! premium card as `P`.
//!
//! ## Example
//!
//! ```rust
//! use riffle_engine::cards::{Card, Rank, Suit};
//! use riffle_cli::formatters::{format_card, format_packet};
//! use riffle_engine::packet::Packet;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spade);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let packet = Packet::from_cards(vec![ace_spades, Card::new(Rank::HighJoker, Suit::Suitless)]);
//! assert!(format_packet(&packet).ends_with(" HJ]"));
//! ```

use riffle_engine::cards::{Card, Rank, Suit};
use riffle_engine::deck::Deck;
use riffle_engine::packet::Packet;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Suitless => "",
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
            Suit::Spade => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Suitless => "",
            Suit::Heart => "h",
            Suit::Diamond => "d",
            Suit::Club => "c",
            Suit::Spade => "s",
        }
        .to_string()
    }
}

/// Format a Rank in short notation (A, 2-9, T, J, Q, K, P, LJ, HJ).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Premium => "P",
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::LowJoker => "LJ",
        Rank::HighJoker => "HJ",
    }
    .to_string()
}

/// Format a Card as rank then suit, e.g. "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank()), format_suit(&card.suit()))
}

/// Format a packet in bracket notation, top card first: "[A♠ K♥ Q♦]" or "[]".
pub fn format_packet(packet: &Packet) -> String {
    let formatted: Vec<String> = packet.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// One bracketed line per packet.
pub fn format_deck_short(deck: &Deck) -> String {
    deck.packets()
        .iter()
        .map(format_packet)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rank_covers_suitless_ranks() {
        assert_eq!(format_rank(&Rank::Premium), "P");
        assert_eq!(format_rank(&Rank::LowJoker), "LJ");
        assert_eq!(format_rank(&Rank::Ten), "T");
    }

    #[test]
    fn test_format_card_has_no_suit_for_jokers() {
        let joker = Card::new(Rank::LowJoker, Suit::Heart);
        assert_eq!(format_card(&joker), "LJ");
    }

    #[test]
    fn test_format_empty_packet() {
        assert_eq!(format_packet(&Packet::new()), "[]");
    }

    #[test]
    fn test_format_deck_short_one_line_per_packet() {
        let mut deck = Deck::new_with_seed(1);
        deck.cut(Some(2)).unwrap();
        let text = format_deck_short(&deck);
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.starts_with('[') && l.ends_with(']')));
    }
}
