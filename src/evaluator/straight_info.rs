use super::rank_groups::RankSignature;

/// Information about whether a hand is a straight and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// Highest rank of the straight; 5 for the wheel.
    pub top_rank: Option<u8>,
}

impl StraightInfo {
    /// Five distinct ranks spanning exactly four steps form a straight.
    /// The wheel is covered because its Ace is already ranked 1 in the signature.
    pub fn detect(signature: &RankSignature) -> Self {
        if signature.len() == 5 && signature.rank(0) - signature.rank(4) == 4 {
            StraightInfo { is_straight: true, top_rank: Some(signature.rank(0)) }
        } else {
            StraightInfo { is_straight: false, top_rank: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn detect(text: &str) -> StraightInfo {
        let cards = parse_cards(text).unwrap();
        let sig = RankSignature::from_cards(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
        StraightInfo::detect(&sig)
    }

    #[test]
    fn test_regular_straight() {
        let info = detect("KD QH JC TS 9H");
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(13));
    }

    #[test]
    fn test_ace_high_straight() {
        let info = detect("AD KH QC JS TH");
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(14));
    }

    #[test]
    fn test_wheel() {
        let info = detect("AD 2H 3C 4S 5H");
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(5));
    }

    #[test]
    fn test_low_straight() {
        let info = detect("6D 5H 4C 3S 2H");
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(6));
    }

    #[test]
    fn test_no_wrap_around() {
        assert!(!detect("QD KH AC 2S 3H").is_straight);
    }

    #[test]
    fn test_not_straight() {
        let info = detect("AD KH QC JS 9H");
        assert!(!info.is_straight);
        assert_eq!(info.top_rank, None);
    }

    #[test]
    fn test_pair_is_never_straight() {
        assert!(!detect("AD AH KC QS JH").is_straight);
    }

    #[test]
    fn test_unsorted_input() {
        let info = detect("9D KH TC JS QH");
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(13));
    }
}
