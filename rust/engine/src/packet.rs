use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::errors::DeckError;

/// One ordered pile of cards; index 0 is the top of the pile.
/// A packet owns its cards outright: [`Packet::cut`] and [`Packet::join`]
/// move cards between packets rather than sharing them.
///
/// # Examples
///
/// ```
/// use riffle_engine::cards::full_deck;
/// use riffle_engine::packet::Packet;
///
/// let mut top = Packet::from_cards(full_deck());
/// let mut bottom = top.cut(None).unwrap();
/// assert_eq!((top.len(), bottom.len()), (26, 26));
///
/// top.join(&mut bottom);
/// assert_eq!(top.cards(), &full_deck()[..]);
/// assert!(bottom.is_empty());
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Packet {
    cards: Vec<Card>,
}

impl Packet {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn append(&mut self, card: Card) -> &mut Self {
        self.cards.push(card);
        self
    }

    /// Inserts `card` before `index`.
    ///
    /// Only positions in `[0, len)` are accepted; adding at the tail (or into
    /// an empty packet) goes through [`Packet::append`].
    pub fn insert(&mut self, index: usize, card: Card) -> Result<(), DeckError> {
        if index >= self.cards.len() {
            return Err(DeckError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        self.cards.insert(index, card);
        Ok(())
    }

    /// Removes and returns the first card equal to `card`.
    pub fn remove(&mut self, card: &Card) -> Result<Card, DeckError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(DeckError::NotFound(*card))?;
        Ok(self.cards.remove(pos))
    }

    pub fn get(&self, index: usize) -> Result<Card, DeckError> {
        self.cards
            .get(index)
            .copied()
            .ok_or(DeckError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            })
    }

    /// Appends copies of `other`'s cards, leaving `other` untouched.
    pub fn extend(&mut self, other: &Packet) -> &mut Self {
        self.cards.extend_from_slice(&other.cards);
        self
    }

    pub fn append_all<I: IntoIterator<Item = Card>>(&mut self, cards: I) -> &mut Self {
        self.cards.extend(cards);
        self
    }

    /// Moves every card of `other` onto the end of this packet.
    pub fn join(&mut self, other: &mut Packet) -> &mut Self {
        self.cards.append(&mut other.cards);
        self
    }

    /// Splits off the bottom `index` cards into a new packet.
    ///
    /// `None` (and `Some(0)`) cut at the midpoint, `len / 2`, which needs at
    /// least two cards. The remaining packet keeps cards `[0, len - index)`.
    pub fn cut(&mut self, index: Option<usize>) -> Result<Packet, DeckError> {
        let len = self.cards.len();
        let index = match index {
            None | Some(0) if len > 1 => len / 2,
            None | Some(0) => return Err(DeckError::PacketTooSmall { len }),
            Some(i) if i >= len => {
                return Err(DeckError::NotEnoughCards { requested: i, len });
            }
            Some(i) => i,
        };
        let tail = self.cards.split_off(len - index);
        debug!(index, kept = self.cards.len(), "cut packet");
        Ok(Packet { cards: tail })
    }
}

impl From<Vec<Card>> for Packet {
    fn from(cards: Vec<Card>) -> Self {
        Packet::from_cards(cards)
    }
}

impl FromIterator<Card> for Packet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Packet {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Packet {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Packet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
