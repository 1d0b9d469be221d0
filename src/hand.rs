use crate::cards::{parse_cards, Card, CardParseError};
use crate::evaluator::{evaluate_five, Category, Evaluation, HandValue};
use core::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a hand must have exactly five cards, got {0}")]
    Size(usize),
    #[error(transparent)]
    Card(#[from] CardParseError),
}

/// Five cards with their classification computed once at construction.
///
/// Equality and ordering are by strength: two hands compare equal when they
/// would split the pot, whatever their suits or card order.
///
/// ```
/// use poker_hands::evaluator::Category;
/// use poker_hands::hand::Hand;
///
/// let royal: Hand = "TD JD QD KD AD".parse().unwrap();
/// let straight_flush: Hand = "9D TD JD QD KD".parse().unwrap();
/// assert_eq!(royal.category(), Category::RoyalFlush);
/// assert!(royal > straight_flush);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    cards: [Card; 5],
    evaluation: Evaluation,
}

impl Hand {
    pub fn new(cards: [Card; 5]) -> Self {
        let evaluation = evaluate_five(&cards);
        Self { cards, evaluation }
    }

    pub fn try_from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; 5] = slice.try_into().map_err(|_| HandError::Size(slice.len()))?;
        Ok(Self::new(cards))
    }

    /// Parse whitespace-separated card tokens, e.g. `"4D 3D 3H TS AD"`.
    pub fn parse(text: &str) -> Result<Self, HandError> {
        let cards = parse_cards(text).map_err(|e| {
            log::debug!("rejected hand '{text}': {e}");
            e
        })?;
        Self::try_from_slice(&cards).map_err(|e| {
            log::debug!("rejected hand '{text}': {e}");
            e
        })
    }

    /// Cards in the order they were given.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn category(&self) -> Category {
        self.evaluation.category
    }

    /// Packed strength key; equal values mean a tie.
    pub fn value(&self) -> HandValue {
        self.evaluation.value()
    }

    /// Three-way strength comparison; `Equal` is a split pot.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.evaluation.cmp(&other.evaluation)
    }
}

impl From<[Card; 5]> for Hand {
    fn from(cards: [Card; 5]) -> Self {
        Self::new(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;
    fn try_from(slice: &[Card]) -> Result<Self, Self::Error> {
        Self::try_from_slice(slice)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        write!(f, "({})", self.category())
    }
}
