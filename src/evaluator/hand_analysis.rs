use super::histogram::RankHistogram;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Rank;
use crate::hand::Hand;

/// Pre-computed facts about a 5-card hand.
/// Built once per hand and kept for every later comparison.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ranks in ascending order.
    pub sorted_ranks: [Rank; 5],
    pub histogram: RankHistogram,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(hand: &Hand) -> Self {
        let cards = *hand.cards();
        let mut sorted_ranks = cards.map(|c| c.rank());
        sorted_ranks.sort_unstable();

        let histogram = RankHistogram::from_ranks(&sorted_ranks);
        let suit_info = SuitInfo::detect(&cards);
        let straight_info = StraightInfo::detect(&sorted_ranks);

        Self { sorted_ranks, histogram, suit_info, straight_info }
    }
}
