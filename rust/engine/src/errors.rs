use thiserror::Error;

use crate::cards::Card;

/// Logical category of a [`DeckError`].
///
/// Several concrete variants share a kind (every bounds failure is an
/// `InvalidRange`), so callers that only care about the category match on this.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// An argument was not a valid value of the expected entity.
    InvalidArgumentType,
    /// An index or count fell outside the target sequence.
    InvalidRange,
    /// A structural precondition was violated.
    InvalidConfiguration,
    /// A card value was not present.
    NotFound,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Invalid argument: {0}")]
    InvalidArgumentType(String),
    #[error("Index {index} out of bounds for packet of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Not enough cards to cut {requested}: only {len} cards in packet")]
    NotEnoughCards { requested: usize, len: usize },
    #[error("Cannot cut a packet with {len} cards")]
    PacketTooSmall { len: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Card not found in packet: {0}")]
    NotFound(Card),
}

impl DeckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeckError::InvalidArgumentType(_) => ErrorKind::InvalidArgumentType,
            DeckError::IndexOutOfRange { .. }
            | DeckError::NotEnoughCards { .. }
            | DeckError::PacketTooSmall { .. } => ErrorKind::InvalidRange,
            DeckError::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            DeckError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
