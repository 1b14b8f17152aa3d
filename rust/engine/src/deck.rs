use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{full_deck, ordered_cards, Card, Rank, Suit, FRENCH_RANKS, FRENCH_SUITS};
use crate::errors::DeckError;
use crate::packet::Packet;
use crate::plan::{ShufflePlan, ShuffleStep};
use crate::riffle::{check_maxclump, riffle_into};

/// Clump size used by [`Deck::riffle`] callers that have no preference.
pub const DEFAULT_MAXCLUMP: u32 = 2;

/// How a [`Deck`] is populated by [`Deck::with_options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckOptions {
    /// Number of identical packets to build (must be at least 1)
    pub copies: u32,
    /// Ranks used when `cards` is not given
    pub ranks: Vec<Rank>,
    /// Suits used when `cards` is not given
    pub suits: Vec<Suit>,
    /// Explicit card list copied into every packet
    pub cards: Option<Vec<Card>>,
    /// Build no packets at all
    pub empty: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            copies: 1,
            ranks: FRENCH_RANKS.to_vec(),
            suits: FRENCH_SUITS.to_vec(),
            cards: None,
            empty: false,
        }
    }
}

/// The full working set of cards, held as an ordered list of packets.
/// Every card belongs to exactly one packet; cutting adds packets and
/// riffling or joining merges them back down to one.
///
/// The deck carries its own ChaCha20 RNG so that riffles are reproducible
/// from the construction seed.
///
/// # Examples
///
/// ```
/// use riffle_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(42);
/// deck.pharo().unwrap().riffle(6).unwrap().riffle(4).unwrap();
/// assert_eq!(deck.packet_count(), 1);
/// assert_eq!(deck.len(), 52);
///
/// // Same seed, same shuffle
/// let mut again = Deck::new_with_seed(42);
/// again.pharo().unwrap().riffle(6).unwrap().riffle(4).unwrap();
/// assert_eq!(deck.packets(), again.packets());
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Piles in order; packet 0 is the one riffles land in
    packets: Vec<Packet>,
    /// Source of clump sizes and directions
    rng: ChaCha20Rng,
}

impl Deck {
    /// One standard 52-card packet in suit-major order.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_packets(vec![Packet::from_cards(full_deck())], seed)
    }

    pub fn empty_with_seed(seed: u64) -> Self {
        Self::from_packets(Vec::new(), seed)
    }

    pub fn from_packets(packets: Vec<Packet>, seed: u64) -> Self {
        Self {
            packets,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn with_options(options: &DeckOptions, seed: u64) -> Result<Self, DeckError> {
        if options.copies < 1 {
            return Err(DeckError::InvalidConfiguration(format!(
                "copies must be a non-zero positive integer, got {}",
                options.copies
            )));
        }
        if options.empty {
            return Ok(Self::empty_with_seed(seed));
        }
        let cards = match &options.cards {
            Some(cards) => cards.clone(),
            None => ordered_cards(&options.ranks, &options.suits),
        };
        let packets = (0..options.copies)
            .map(|_| Packet::from_cards(cards.clone()))
            .collect();
        Ok(Self::from_packets(packets, seed))
    }

    /// One packet of `count` cards, each drawn from `ranks` and `suits` with
    /// the deck's own RNG.
    pub fn with_random_cards(
        count: usize,
        ranks: &[Rank],
        suits: &[Suit],
        seed: u64,
    ) -> Result<Self, DeckError> {
        let mut deck = Self::empty_with_seed(seed);
        let packet = (0..count)
            .map(|_| Card::random(ranks, suits, &mut deck.rng))
            .collect::<Result<Packet, _>>()?;
        deck.packets.push(packet);
        Ok(deck)
    }

    /// Total number of cards across all packets.
    pub fn len(&self) -> usize {
        self.packets.iter().map(Packet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn packet_count(&self) -> usize {
        self.packets.len()
    }

    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    pub fn into_packets(self) -> Vec<Packet> {
        self.packets
    }

    /// Every card in deck order, packet by packet.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.packets.iter().flat_map(|p| p.iter())
    }

    pub fn append(&mut self, packet: Packet) -> &mut Self {
        self.packets.push(packet);
        self
    }

    /// Cuts the last packet and pushes the cut-off cards as a new packet.
    pub fn cut(&mut self, index: Option<usize>) -> Result<&mut Self, DeckError> {
        let last = self
            .packets
            .last_mut()
            .ok_or_else(|| DeckError::InvalidConfiguration("deck has no packets to cut".into()))?;
        let tail = last.cut(index)?;
        self.packets.push(tail);
        debug!(packets = self.packets.len(), "cut deck");
        Ok(self)
    }

    /// Merges every packet into the first, in order.
    pub fn join_all(&mut self) -> &mut Self {
        if self.packets.len() > 1 {
            let rest = self.packets.split_off(1);
            let first = &mut self.packets[0];
            for mut p in rest {
                first.join(&mut p);
            }
            debug!(cards = first.len(), "joined all packets");
        }
        self
    }

    /// Appends independent copies of `other`'s packets.
    pub fn extend(&mut self, other: &Deck) -> &mut Self {
        self.packets.extend(other.packets.iter().cloned());
        self
    }

    /// Faro-style riffle: clumps of exactly one card.
    pub fn pharo(&mut self) -> Result<&mut Self, DeckError> {
        self.riffle(1)
    }

    pub fn riffle(&mut self, maxclump: u32) -> Result<&mut Self, DeckError> {
        riffle_packets(&mut self.packets, maxclump, &mut self.rng)?;
        Ok(self)
    }

    /// Same as [`Deck::riffle`] but draws from `rng` instead of the deck's RNG.
    pub fn riffle_with<R: Rng + ?Sized>(
        &mut self,
        maxclump: u32,
        rng: &mut R,
    ) -> Result<&mut Self, DeckError> {
        riffle_packets(&mut self.packets, maxclump, rng)?;
        Ok(self)
    }

    pub fn apply(&mut self, step: &ShuffleStep) -> Result<&mut Self, DeckError> {
        match *step {
            ShuffleStep::Cut(index) => self.cut(index),
            ShuffleStep::Riffle(maxclump) => self.riffle(maxclump),
            ShuffleStep::Pharo => self.pharo(),
            ShuffleStep::JoinAll => Ok(self.join_all()),
        }
    }

    /// Applies each step in order, stopping at the first failure.
    pub fn apply_plan(&mut self, plan: &ShufflePlan) -> Result<&mut Self, DeckError> {
        for step in plan.steps() {
            self.apply(step)?;
        }
        Ok(self)
    }
}

fn riffle_packets<R: Rng + ?Sized>(
    packets: &mut Vec<Packet>,
    maxclump: u32,
    rng: &mut R,
) -> Result<(), DeckError> {
    check_maxclump(maxclump)?;
    match packets.len() {
        0 => {
            return Err(DeckError::InvalidConfiguration(
                "deck has no packets to riffle".into(),
            ))
        }
        1 => {
            let tail = packets[0].cut(None)?;
            packets.push(tail);
        }
        2 => {}
        n => {
            return Err(DeckError::InvalidConfiguration(format!(
                "deck must be joined (or in exactly two packets) to riffle, found {} packets",
                n
            )))
        }
    }
    // len is exactly 2 here
    if let Some(incoming) = packets.pop() {
        riffle_into(&mut packets[0], incoming, maxclump, rng)?;
    }
    Ok(())
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.packets.iter().enumerate() {
            if i > 0 {
                write!(f, "\n-----------------\n")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_all_collapses_empty_packets() {
        let mut deck = Deck::new_with_seed(5);
        deck.append(Packet::new()).append(Packet::new());
        deck.join_all();
        assert_eq!(deck.packet_count(), 1);
        assert_eq!(deck.packets()[0].cards(), &full_deck()[..]);
    }

    #[test]
    fn cut_on_empty_deck_is_a_configuration_error() {
        let mut deck = Deck::empty_with_seed(5);
        let err = deck.cut(None).unwrap_err();
        assert!(matches!(err, DeckError::InvalidConfiguration(_)));
    }

    #[test]
    fn display_separates_packets() {
        let mut deck = Deck::new_with_seed(5);
        deck.cut(Some(1)).unwrap();
        let text = deck.to_string();
        assert!(text.ends_with("-----------------\nKing of Hearts"));
    }
}
