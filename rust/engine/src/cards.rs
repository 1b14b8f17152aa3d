use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::DeckError;

/// Represents one of the five suits a card can carry.
/// Jokers and premium cards always carry [`Suit::Suitless`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// No suit (jokers, premium cards)
    Suitless,
    /// Spades suit (♠)
    Spade,
    /// Diamonds suit (♦)
    Diamond,
    /// Clubs suit (♣)
    Club,
    /// Hearts suit (♥)
    Heart,
}

impl Suit {
    /// All suits in identifier order (0-4).
    pub const ALL: [Suit; 5] = [
        Suit::Suitless,
        Suit::Spade,
        Suit::Diamond,
        Suit::Club,
        Suit::Heart,
    ];

    pub fn from_id(id: usize) -> Result<Suit, DeckError> {
        Suit::ALL.get(id).copied().ok_or_else(|| {
            DeckError::InvalidArgumentType(format!(
                "suit id must be a valid numeric ID (0-4), got {}",
                id
            ))
        })
    }

    pub fn id(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Suitless => "",
            Suit::Spade => "Spade",
            Suit::Diamond => "Diamond",
            Suit::Club => "Club",
            Suit::Heart => "Heart",
        }
    }
}

/// Represents the rank of a card, including the two jokers and the
/// suitless premium card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Premium card (suitless)
    Premium,
    /// Ace
    Ace,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Low joker (suitless)
    LowJoker,
    /// High joker (suitless)
    HighJoker,
}

impl Rank {
    /// All ranks in identifier order (0-15).
    pub const ALL: [Rank; 16] = [
        Rank::Premium,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::LowJoker,
        Rank::HighJoker,
    ];

    pub fn from_id(id: usize) -> Result<Rank, DeckError> {
        Rank::ALL.get(id).copied().ok_or_else(|| {
            DeckError::InvalidArgumentType(format!(
                "rank id must be a valid numeric ID (0-15), got {}",
                id
            ))
        })
    }

    pub fn id(self) -> usize {
        self as usize
    }

    /// Jokers and the premium card never carry a suit.
    pub fn is_suitless(self) -> bool {
        matches!(self, Rank::Premium | Rank::LowJoker | Rank::HighJoker)
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Premium => "Premium Card",
            Rank::Ace => "Ace",
            Rank::Two => "Deuce",
            Rank::Three => "Trey",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::LowJoker => "Low Joker",
            Rank::HighJoker => "High Joker",
        }
    }
}

pub const FRENCH_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

pub const FACE_RANKS: [Rank; 3] = [Rank::Jack, Rank::Queen, Rank::King];

pub const ROYAL_RANKS: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

pub const NUM_RANKS: [Rank; 9] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
];

pub const FRENCH_SUITS: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

pub const RED_SUITS: [Suit; 2] = [Suit::Heart, Suit::Diamond];

pub const BLACK_SUITS: [Suit; 2] = [Suit::Spade, Suit::Club];

/// Looks up a named rank set (`french`, `face`, `royal`, `num`).
pub fn rank_set(name: &str) -> Option<&'static [Rank]> {
    match name.to_ascii_lowercase().as_str() {
        "french" => Some(&FRENCH_RANKS),
        "face" => Some(&FACE_RANKS),
        "royal" => Some(&ROYAL_RANKS),
        "num" => Some(&NUM_RANKS),
        _ => None,
    }
}

/// Looks up a named suit set (`french`, `red`, `black`).
pub fn suit_set(name: &str) -> Option<&'static [Suit]> {
    match name.to_ascii_lowercase().as_str() {
        "french" => Some(&FRENCH_SUITS),
        "red" => Some(&RED_SUITS),
        "black" => Some(&BLACK_SUITS),
        _ => None,
    }
}

/// A single playing card: a rank and a suit.
/// Fields are private so that every card, including deserialized ones, goes
/// through [`Card::new`] and keeps suitless ranks suitless.
///
/// # Examples
///
/// ```
/// use riffle_engine::cards::{Card, Rank, Suit};
///
/// let joker = Card::new(Rank::HighJoker, Suit::Heart);
/// assert_eq!(joker.suit(), Suit::Suitless);
/// assert_eq!(Card::new(Rank::Ace, Suit::Spade).to_string(), "Ace of Spades");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(from = "CardFields")]
pub struct Card {
    /// The rank of the card
    rank: Rank,
    /// The suit of the card (always `Suitless` for jokers and premium cards)
    suit: Suit,
}

#[derive(Deserialize)]
struct CardFields {
    rank: Rank,
    suit: Suit,
}

impl From<CardFields> for Card {
    fn from(f: CardFields) -> Self {
        Card::new(f.rank, f.suit)
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        let suit = if rank.is_suitless() {
            Suit::Suitless
        } else {
            suit
        };
        Self { rank, suit }
    }

    pub fn from_ids(rank_id: usize, suit_id: usize) -> Result<Self, DeckError> {
        Ok(Card::new(Rank::from_id(rank_id)?, Suit::from_id(suit_id)?))
    }

    /// Draws a card uniformly from `ranks` and `suits`.
    ///
    /// No suit is drawn when the chosen rank is suitless, so `suits` may be
    /// empty in that case.
    pub fn random<R: Rng + ?Sized>(
        ranks: &[Rank],
        suits: &[Suit],
        rng: &mut R,
    ) -> Result<Self, DeckError> {
        Card::draw(None, None, ranks, suits, rng)
    }

    /// Builds a card from an optional rank and suit, drawing whichever half
    /// is missing from the matching set.
    pub fn draw<R: Rng + ?Sized>(
        rank: Option<Rank>,
        suit: Option<Suit>,
        ranks: &[Rank],
        suits: &[Suit],
        rng: &mut R,
    ) -> Result<Self, DeckError> {
        let rank = match rank {
            Some(r) => r,
            None => *ranks.choose(rng).ok_or_else(|| {
                DeckError::InvalidArgumentType("rank set must not be empty".into())
            })?,
        };
        if rank.is_suitless() {
            return Ok(Card::new(rank, Suit::Suitless));
        }
        let suit = match suit {
            Some(s) => s,
            None => *suits.choose(rng).ok_or_else(|| {
                DeckError::InvalidArgumentType("suit set must not be empty".into())
            })?,
        };
        Ok(Card::new(rank, suit))
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suit == Suit::Suitless {
            write!(f, "{}", self.rank.name())
        } else {
            write!(f, "{} of {}s", self.rank.name(), self.suit.name())
        }
    }
}

/// Suit-major product of `suits` and `ranks`, the order a fresh pack comes in.
pub fn ordered_cards(ranks: &[Rank], suits: &[Suit]) -> Vec<Card> {
    let mut v = Vec::with_capacity(ranks.len() * suits.len());
    for &s in suits {
        for &r in ranks {
            v.push(Card::new(r, s));
        }
    }
    v
}

pub fn full_deck() -> Vec<Card> {
    ordered_cards(&FRENCH_RANKS, &FRENCH_SUITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn ids_follow_declaration_order() {
        for (i, r) in Rank::ALL.iter().enumerate() {
            assert_eq!(r.id(), i);
        }
        assert_eq!(Suit::Heart.id(), 4);
    }

    #[test]
    fn premium_card_drops_suit_from_ids() {
        let c = Card::from_ids(0, 2).unwrap();
        assert_eq!(c.rank(), Rank::Premium);
        assert_eq!(c.suit(), Suit::Suitless);
    }

    #[test]
    fn random_joker_ignores_empty_suit_set() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let c = Card::random(&[Rank::LowJoker], &[], &mut rng).unwrap();
        assert_eq!(c, Card::new(Rank::LowJoker, Suit::Suitless));
    }

    #[test]
    fn named_sets_resolve() {
        assert_eq!(rank_set("Royal").map(|s| s.len()), Some(5));
        assert_eq!(suit_set("red"), Some(&RED_SUITS[..]));
        assert!(rank_set("tarot").is_none());
    }
}
