//! Shuffle plans: a named, ordered list of deck operations.
//!
//! Steps have a short text form so they can come from a command line or a
//! config file: `cut`, `cut:N`, `riffle`, `riffle:N`, `pharo`, `join`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::deck::DEFAULT_MAXCLUMP;
use crate::errors::DeckError;

/// A single deck operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ShuffleStep {
    /// Cut the last packet, optionally at an explicit index
    Cut(Option<usize>),
    /// Riffle with the given maximum clump size
    Riffle(u32),
    /// Riffle with single-card clumps
    Pharo,
    /// Merge every packet into the first
    JoinAll,
}

impl FromStr for ShuffleStep {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let (name, arg) = match s.split_once(':') {
            Some((n, a)) => (n, Some(a)),
            None => (s.as_str(), None),
        };
        let number = |a: &str| {
            a.parse::<u32>().map_err(|_| {
                DeckError::InvalidArgumentType(format!("invalid number '{}' in step '{}'", a, s))
            })
        };
        match (name, arg) {
            ("cut", None) => Ok(ShuffleStep::Cut(None)),
            ("cut", Some(a)) => Ok(ShuffleStep::Cut(Some(number(a)? as usize))),
            ("riffle", None) => Ok(ShuffleStep::Riffle(DEFAULT_MAXCLUMP)),
            ("riffle", Some(a)) => Ok(ShuffleStep::Riffle(number(a)?)),
            ("pharo" | "faro", None) => Ok(ShuffleStep::Pharo),
            ("join", None) => Ok(ShuffleStep::JoinAll),
            _ => Err(DeckError::InvalidArgumentType(format!(
                "unknown shuffle step '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for ShuffleStep {
    type Error = DeckError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ShuffleStep> for String {
    fn from(step: ShuffleStep) -> Self {
        step.to_string()
    }
}

impl fmt::Display for ShuffleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShuffleStep::Cut(None) => write!(f, "cut"),
            ShuffleStep::Cut(Some(i)) => write!(f, "cut:{}", i),
            ShuffleStep::Riffle(n) => write!(f, "riffle:{}", n),
            ShuffleStep::Pharo => write!(f, "pharo"),
            ShuffleStep::JoinAll => write!(f, "join"),
        }
    }
}

/// Ordered list of [`ShuffleStep`]s applied by [`crate::deck::Deck::apply_plan`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShufflePlan {
    steps: Vec<ShuffleStep>,
}

impl ShufflePlan {
    pub fn new(steps: Vec<ShuffleStep>) -> Self {
        Self { steps }
    }

    pub fn parse<I, S>(items: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let steps = items
            .into_iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[ShuffleStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for ShufflePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.steps.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}
