//! # riffle-engine: Packet and Deck Shuffling Core
//!
//! Models a deck of playing cards as one or more ordered packets and provides
//! the operations a dealer performs on them: cutting a packet in two, joining
//! packets back together, and riffling two packets into one with uneven,
//! human-like clumps.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and named rank/suit sets
//! - [`packet`] - A single ordered pile of cards (append/insert/remove/cut/join)
//! - [`deck`] - Ordered collection of packets with a seeded ChaCha20 RNG
//! - [`riffle`] - The clump-based riffle algorithm
//! - [`plan`] - Parsed sequences of shuffle steps
//! - [`errors`] - Error types for packet and deck operations
//!
//! ## Quick Start
//!
//! ```rust
//! use riffle_engine::deck::Deck;
//!
//! let mut deck = Deck::new_with_seed(7);
//! deck.cut(None).unwrap();
//! assert_eq!(deck.packet_count(), 2);
//!
//! deck.riffle(3).unwrap();
//! assert_eq!(deck.packet_count(), 1);
//! assert_eq!(deck.len(), 52);
//! ```
//!
//! ## Deterministic Shuffles
//!
//! Riffles draw from the deck's own RNG, seeded at construction, so the same
//! seed and the same sequence of operations always give the same order. Any
//! other `rand::Rng` can be supplied through [`deck::Deck::riffle_with`].

pub mod cards;
pub mod deck;
pub mod errors;
pub mod packet;
pub mod plan;
pub mod riffle;
