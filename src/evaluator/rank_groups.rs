use crate::cards::{Card, Value};

/// Rank given to the Ace when it plays low in A-2-3-4-5.
const WHEEL_ACE: u8 = 1;

const WHEEL: [u8; 5] = [
    Value::Ace.rank(),
    Value::Five.rank(),
    Value::Four.rank(),
    Value::Three.rank(),
    Value::Two.rank(),
];

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(14, 3), (13, 1), (12, 1)].
/// For the wheel (A-2-3-4-5 with no pair) the Ace is stored at rank 1,
/// so the signature reads [(5, 1), (4, 1), (3, 1), (2, 1), (1, 1)].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankSignature {
    groups: Vec<(u8, u8)>,
}

impl RankSignature {
    pub fn from_cards(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 15]; // indexed by rank, 2..=14 used
        for card in cards {
            counts[card.rank() as usize] += 1;
        }

        // Descending rank order up front; the stable sort below keeps it within equal counts.
        let mut groups: Vec<(u8, u8)> = Value::ALL
            .iter()
            .rev()
            .map(|v| v.rank())
            .filter(|&r| counts[r as usize] > 0)
            .map(|r| (r, counts[r as usize]))
            .collect();

        if groups.len() == 5 && groups.iter().map(|&(r, _)| r).eq(WHEEL) {
            groups.remove(0);
            groups.push((WHEEL_ACE, 1));
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Number of distinct ranks in the hand.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Ranks in tie-break order.
    pub fn ranks(&self) -> impl Iterator<Item = u8> + '_ {
        self.groups.iter().map(|&(rank, _)| rank)
    }

    /// Count of the `i`th group, or 0 past the end.
    pub fn count(&self, i: usize) -> u8 {
        self.groups.get(i).map_or(0, |&(_, count)| count)
    }

    /// Rank of the `i`th group, or 0 past the end.
    pub fn rank(&self, i: usize) -> u8 {
        self.groups.get(i).map_or(0, |&(rank, _)| rank)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(u8, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn signature(text: &str) -> RankSignature {
        let cards = parse_cards(text).unwrap();
        RankSignature::from_cards(&[cards[0], cards[1], cards[2], cards[3], cards[4]])
    }

    #[test]
    fn test_quad() {
        let sig = signature("AS AH AD AC KS");
        assert_eq!(sig.groups(), &[(14, 4), (13, 1)]);
        assert_eq!(sig.len(), 2);
    }

    #[test]
    fn test_trips_with_kickers() {
        let sig = signature("2D 2C 2H KH 3H");
        assert_eq!(sig.groups(), &[(2, 3), (13, 1), (3, 1)]);
    }

    #[test]
    fn test_full_house() {
        let sig = signature("5H 5C QD QC QS");
        assert_eq!(sig.groups(), &[(12, 3), (5, 2)]);
        assert_eq!(sig.count(0), 3);
        assert_eq!(sig.count(1), 2);
    }

    #[test]
    fn test_two_pair_higher_pair_first() {
        let sig = signature("JH JS 8D KH KS");
        assert_eq!(sig.groups(), &[(13, 2), (11, 2), (8, 1)]);
    }

    #[test]
    fn test_high_card_sorted_by_rank() {
        let sig = signature("5S KD 8C QH 9H");
        assert_eq!(sig.ranks().collect::<Vec<_>>(), vec![13, 12, 9, 8, 5]);
    }

    #[test]
    fn test_wheel_moves_ace_low() {
        let sig = signature("AD 3S 5H 2D 4S");
        assert_eq!(sig.ranks().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_ace_high_is_not_wheel() {
        let sig = signature("AD 3S 5H 2D 6S");
        assert_eq!(sig.rank(0), 14);
    }

    #[test]
    fn test_paired_wheel_ranks_keep_ace_high() {
        let sig = signature("AD AS 5H 2D 4S");
        assert_eq!(sig.groups(), &[(14, 2), (5, 1), (4, 1), (2, 1)]);
    }

    #[test]
    fn test_past_the_end_is_zero() {
        let sig = signature("AS AH AD AC KS");
        assert_eq!(sig.count(4), 0);
        assert_eq!(sig.rank(4), 0);
    }
}
