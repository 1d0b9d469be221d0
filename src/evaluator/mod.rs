pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use core::cmp::Ordering;
use std::fmt;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandValue(u64);

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Strength of the category, 1 (High Card) through 10 (Royal Flush).
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detailed evaluation result. `value` drives ordering.
///
/// Equality and ordering read `value` alone; this holds because `value` carries
/// the category in its high byte.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and its tie-break ranks (count-then-rank order) into a comparable value.
    ///
    /// Well-formed hands of one category share a signature length, so the zero padding
    /// after a short signature only matters for hands holding a repeated card.
    pub(crate) fn from_parts(category: Category, ranks: impl Iterator<Item = u8>) -> Self {
        // Layout (most significant -> least):
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in ranks.take(5).enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (r as u64) << offset;
        }
        HandValue(v)
    }
}

/// Classify exactly five cards and encode their tie-breakers.
///
/// ```
/// use poker_hands::cards::parse_cards;
/// use poker_hands::evaluator::{evaluate_five, Category};
///
/// let cards = parse_cards("AD 3S 5H 2D 4S").unwrap();
/// let eval = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
/// assert_eq!(eval.category, Category::Straight);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    let category = DETECTORS
        .iter()
        .find(|detector| detector.detect(&analysis))
        .map_or(Category::HighCard, |detector| detector.category());

    log::trace!(
        "classified {} {} {} {} {} as {}",
        cards[0],
        cards[1],
        cards[2],
        cards[3],
        cards[4],
        category
    );
    analysis.build_evaluation(category)
}

/// Compare two five-card hands by strength.
///
/// ```
/// use poker_hands::cards::parse_cards;
/// use poker_hands::evaluator::compare_five;
/// use std::cmp::Ordering;
///
/// let a = parse_cards("KH KC KS QD QC").unwrap();
/// let b = parse_cards("QD QS QH AD AS").unwrap();
/// let ord = compare_five(&[a[0], a[1], a[2], a[3], a[4]], &[b[0], b[1], b[2], b[3], b[4]]);
/// assert_eq!(ord, Ordering::Greater);
/// ```
pub fn compare_five(a: &[Card; 5], b: &[Card; 5]) -> Ordering {
    evaluate_five(a).cmp(&evaluate_five(b))
}
