use crate::cards::{Card, Suit, Value};
use crate::hand::Hand;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck.
///
/// Dealing from a single deck is the simplest way to obtain well-formed hands:
/// classification assumes no card appears twice in one hand.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Value::ALL.iter().map(move |&v| Card::new(v, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Deal a five-card hand, or `None` (leaving the deck untouched) when fewer than five remain.
    ///
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(1);
    /// let hands: Vec<_> = std::iter::from_fn(|| deck.deal_hand()).collect();
    /// assert_eq!(hands.len(), 10);
    /// assert_eq!(deck.len(), 2);
    /// ```
    pub fn deal_hand(&mut self) -> Option<Hand> {
        if self.cards.len() < 5 {
            return None;
        }
        let cards = self.draw_n(5);
        Hand::try_from_slice(&cards).ok()
    }
}
