use super::hand_analysis::HandAnalysis;
use super::Category;
use crate::cards::Rank;

/// Map hand facts to a category. First matching row wins:
///
/// | row | condition                               | category        |
/// |-----|-----------------------------------------|-----------------|
/// | 1   | straight, flush, holds King and Ace     | RoyalFlush      |
/// | 2   | straight, flush                         | StraightFlush   |
/// | 3   | some rank four times                    | FourOfAKind     |
/// | 4   | some rank three times and another twice | FullHouse       |
/// | 5   | flush                                   | Flush           |
/// | 6   | straight                                | Straight        |
/// | 7   | some rank three times                   | ThreeOfAKind    |
/// | 8   | exactly two ranks twice                 | TwoPair         |
/// | 9   | exactly one rank twice                  | Pair            |
/// | 10  | otherwise                               | HighCard        |
pub fn classify(analysis: &HandAnalysis) -> Category {
    let straight = analysis.straight_info.is_straight;
    let flush = analysis.suit_info.is_flush;
    let histogram = &analysis.histogram;
    let broadway_top =
        analysis.sorted_ranks.contains(&Rank::King) && analysis.sorted_ranks.contains(&Rank::Ace);

    if straight && flush && broadway_top {
        Category::RoyalFlush
    } else if straight && flush {
        Category::StraightFlush
    } else if histogram.quad().is_some() {
        Category::FourOfAKind
    } else if histogram.has_count(3) && histogram.has_count(2) {
        Category::FullHouse
    } else if flush {
        Category::Flush
    } else if straight {
        Category::Straight
    } else if histogram.has_count(3) {
        Category::ThreeOfAKind
    } else {
        match histogram.pairs().len() {
            2 => Category::TwoPair,
            1 => Category::Pair,
            _ => Category::HighCard,
        }
    }
}
