use super::rank_groups::RankSignature;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Card;
use crate::evaluator::{Category, Evaluation, HandValue};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub signature: RankSignature,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let signature = RankSignature::from_cards(cards);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&signature);
        Self { signature, suit_info, straight_info }
    }

    /// True when no face value repeats; straights and flushes need this.
    pub fn all_distinct(&self) -> bool {
        self.signature.len() == 5
    }

    pub fn build_evaluation(&self, category: Category) -> Evaluation {
        let value = HandValue::from_parts(category, self.signature.ranks());
        Evaluation { category, value }
    }
}
