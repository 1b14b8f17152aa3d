//! Clump-based riffle of one packet into another.
//!
//! A human riffle drops cards from the two halves in uneven runs rather than
//! strictly alternating. This module simulates that with two registers: an
//! insertion `marker` into the base packet and the number of cards left in
//! the current run. The output is deliberately biased toward clumped,
//! semi-ordered results; it is not a uniform permutation.

use rand::Rng;
use tracing::{debug, trace};

use crate::errors::DeckError;
use crate::packet::Packet;

/// Riffles every card of `incoming` into `base`.
///
/// Runs are drawn uniformly from `[1, maxclump]` and made negative half of
/// the time. A negative run pushes the marker ahead by `|run| + 1` and draws
/// again on the next card; a positive run of `k` skips one base card and then
/// places the following `k - 1` incoming cards consecutively. Once the marker
/// passes the end of `base` the rest of `incoming` is appended in order.
///
/// With `maxclump == 1` the result is deterministic:
/// `[a0, a1, ..]` and `[b0, b1, ..]` become `[b0, a0, b1, a1, ..]`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use riffle_engine::cards::{Card, Rank, Suit};
/// use riffle_engine::packet::Packet;
/// use riffle_engine::riffle::riffle_into;
///
/// let a = Card::new(Rank::Ace, Suit::Spade);
/// let b = Card::new(Rank::Two, Suit::Spade);
/// let c = Card::new(Rank::Three, Suit::Spade);
/// let d = Card::new(Rank::Four, Suit::Spade);
///
/// let mut base = Packet::from_cards(vec![a, b]);
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// riffle_into(&mut base, Packet::from_cards(vec![c, d]), 1, &mut rng).unwrap();
/// assert_eq!(base.cards(), &[c, a, d, b]);
/// ```
pub fn riffle_into<R: Rng + ?Sized>(
    base: &mut Packet,
    incoming: Packet,
    maxclump: u32,
    rng: &mut R,
) -> Result<(), DeckError> {
    check_maxclump(maxclump)?;
    debug!(
        base = base.len(),
        incoming = incoming.len(),
        maxclump,
        "riffle"
    );
    riffle_runs(base, incoming, || {
        let clump = i64::from(rng.random_range(1..=maxclump));
        if rng.random_bool(0.5) { -clump } else { clump }
    })
}

/// Rejects a clump bound that would leave no run length to draw.
pub(crate) fn check_maxclump(maxclump: u32) -> Result<(), DeckError> {
    if maxclump < 1 {
        return Err(DeckError::InvalidConfiguration(format!(
            "clumping constraint must be a positive integer, got maxclump {}",
            maxclump
        )));
    }
    Ok(())
}

/// The marker/run loop. `next_run` yields a signed run length each time the
/// current run is used up.
fn riffle_runs<F>(base: &mut Packet, incoming: Packet, mut next_run: F) -> Result<(), DeckError>
where
    F: FnMut() -> i64,
{
    let mut marker: usize = 0;
    let mut run: i64 = 1;
    let mut cards = incoming.into_iter();
    while let Some(card) = cards.next() {
        if marker >= base.len() {
            trace!(marker, "ran off the end of the base packet");
            base.append(card).append_all(cards);
            return Ok(());
        }
        base.insert(marker, card)?;

        if run == 1 {
            run = next_run();
            trace!(run, marker, "drew clump");
            if run < 0 {
                // run is negative, so this moves the marker forward by |run| + 1
                marker += (1 - run) as usize;
                run = 1;
            } else {
                marker += 2;
            }
        } else {
            run -= 1;
            marker += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{full_deck, Card, Rank, Suit};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn spades(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Spade)).collect()
    }

    #[test]
    fn single_card_clumps_alternate_starting_with_incoming() {
        let a = spades(&[Rank::Ace, Rank::Two, Rank::Three]);
        let b = spades(&[Rank::Four, Rank::Five, Rank::Six]);
        let mut base = Packet::from_cards(a.clone());
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        riffle_into(&mut base, Packet::from_cards(b.clone()), 1, &mut rng).unwrap();
        assert_eq!(base.cards(), &[b[0], a[0], b[1], a[1], b[2], a[2]]);
    }

    #[test]
    fn empty_base_takes_incoming_in_order() {
        let mut base = Packet::new();
        let incoming = spades(&[Rank::King, Rank::Queen]);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        riffle_into(&mut base, Packet::from_cards(incoming.clone()), 3, &mut rng).unwrap();
        assert_eq!(base.cards(), &incoming[..]);
    }

    #[test]
    fn larger_incoming_spills_its_tail() {
        let a = spades(&[Rank::Ace]);
        let b = spades(&[Rank::Two, Rank::Three, Rank::Four]);
        let mut base = Packet::from_cards(a.clone());
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        riffle_into(&mut base, Packet::from_cards(b.clone()), 1, &mut rng).unwrap();
        assert_eq!(base.cards(), &[b[0], a[0], b[1], b[2]]);
    }

    #[test]
    fn zero_maxclump_is_rejected_before_mutation() {
        let mut base = Packet::from_cards(full_deck());
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let err = riffle_into(&mut base, Packet::new(), 0, &mut rng).unwrap_err();
        assert!(matches!(err, DeckError::InvalidConfiguration(_)));
        assert_eq!(base.cards(), &full_deck()[..]);
    }

    fn scripted(runs: &[i64]) -> (impl FnMut() -> i64 + '_, std::rc::Rc<std::cell::Cell<usize>>) {
        let drawn = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = drawn.clone();
        let next = move || {
            let i = counter.get();
            counter.set(i + 1);
            runs[i]
        };
        (next, drawn)
    }

    #[test]
    fn negative_and_positive_runs_place_cards_exactly() {
        let a = spades(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]);
        let b = spades(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]);
        let mut base = Packet::from_cards(a.clone());
        let (next, drawn) = scripted(&[-1, 2, -2, 1, 1]);
        riffle_runs(&mut base, Packet::from_cards(b.clone()), next).unwrap();

        // -1 skips a0; +2 skips a1 and lays b2 and b3 side by side; -2 skips a2 and a3
        assert_eq!(
            base.cards(),
            &[b[0], a[0], b[1], a[1], b[2], b[3], a[2], a[3], b[4], a[4], b[5], a[5]]
        );
        // b2 continues the +2 run without drawing
        assert_eq!(drawn.get(), 5);
    }

    #[test]
    fn positive_run_spills_tail_when_base_runs_out() {
        let a = spades(&[Rank::Ace, Rank::Two, Rank::Three]);
        let b = spades(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]);
        let mut base = Packet::from_cards(a.clone());
        let (next, drawn) = scripted(&[3, -5]);
        riffle_runs(&mut base, Packet::from_cards(b.clone()), next).unwrap();

        assert_eq!(
            base.cards(),
            &[b[0], a[0], b[1], b[2], b[3], a[1], a[2], b[4], b[5]]
        );
        assert_eq!(drawn.get(), 2);
    }

    #[test]
    fn keeps_every_card() {
        let mut all = full_deck();
        let mut base = Packet::from_cards(all.split_off(26));
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        riffle_into(&mut base, Packet::from_cards(all), 5, &mut rng).unwrap();
        let mut got = base.into_cards();
        got.sort();
        let mut want = full_deck();
        want.sort();
        assert_eq!(got, want);
    }
}
