use crate::cards::Card;

/// Information about whether all cards share the same suit (flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
}

impl SuitInfo {
    /// Detect if all 5 cards have the same suit.
    pub fn detect(cards: &[Card; 5]) -> Self {
        let first_suit = cards[0].suit();
        SuitInfo { is_flush: cards.iter().all(|c| c.suit() == first_suit) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(text: &str) -> [Card; 5] {
        let cards = parse_cards(text).unwrap();
        [cards[0], cards[1], cards[2], cards[3], cards[4]]
    }

    #[test]
    fn test_flush() {
        let info = SuitInfo::detect(&five("KH AH TH 5H 8H"));
        assert!(info.is_flush);
    }

    #[test]
    fn test_not_flush() {
        let info = SuitInfo::detect(&five("KS AH TS 5S 8S"));
        assert!(!info.is_flush);
    }

    #[test]
    fn test_odd_card_last() {
        let info = SuitInfo::detect(&five("2C 3C 4C 5C 7D"));
        assert!(!info.is_flush);
    }
}
