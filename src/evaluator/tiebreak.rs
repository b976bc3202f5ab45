use super::histogram::RankHistogram;
use super::{Category, EvaluatedHand};
use crate::cards::Rank;
use core::cmp::Ordering;

/// Order two hands already known to share `category`. Greater means `a` is stronger.
pub fn compare(category: Category, a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    log::trace!("tie-break {category}: [{}] vs [{}]", a.description(), b.description());
    match category {
        Category::RoyalFlush | Category::Flush | Category::HighCard => {
            high_cards(a.sorted_ranks(), b.sorted_ranks())
        }
        Category::StraightFlush | Category::Straight => straights(a, b),
        Category::FourOfAKind => group_then_kickers(a.histogram(), b.histogram(), 4),
        Category::FullHouse => full_house(a.histogram(), b.histogram()),
        Category::ThreeOfAKind => group_then_kickers(a.histogram(), b.histogram(), 3),
        Category::TwoPair => two_pair(a.histogram(), b.histogram()),
        Category::Pair => group_then_kickers(a.histogram(), b.histogram(), 2),
    }
}

/// Position-by-position from the highest card down.
fn high_cards(a: &[Rank; 5], b: &[Rank; 5]) -> Ordering {
    a.iter().rev().cmp(b.iter().rev())
}

/// The wheel loses to every other straight of its category.
fn straights(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    match (a.is_wheel(), b.is_wheel()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => high_cards(a.sorted_ranks(), b.sorted_ranks()),
    }
}

/// Compare the rank held `n` times, then the remaining ranks highest first.
/// Covers quads (one kicker), trips (two kickers) and a single pair (three kickers).
fn group_then_kickers(a: &RankHistogram, b: &RankHistogram, n: u8) -> Ordering {
    let a_group = a.ranks_with_count(n);
    let b_group = b.ranks_with_count(n);
    a_group
        .first()
        .cmp(&b_group.first())
        .then_with(|| a.ranks_except(&a_group).cmp(&b.ranks_except(&b_group)))
}

/// Triple first, then pair. Nothing is left over to kick.
fn full_house(a: &RankHistogram, b: &RankHistogram) -> Ordering {
    a.trips().cmp(&b.trips()).then_with(|| a.pairs().first().cmp(&b.pairs().first()))
}

/// Higher pair, then lower pair, then the kicker.
fn two_pair(a: &RankHistogram, b: &RankHistogram) -> Ordering {
    let a_pairs = a.pairs();
    let b_pairs = b.pairs();
    a_pairs.cmp(&b_pairs).then_with(|| a.ranks_except(&a_pairs).cmp(&b.ranks_except(&b_pairs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::ParseOptions;

    fn hist(s: &str) -> RankHistogram {
        EvaluatedHand::parse_with(s, &ParseOptions::permissive()).unwrap().histogram().clone()
    }

    #[test]
    fn high_cards_compares_from_the_top() {
        use Rank::*;
        let a = [Two, Five, Nine, Jack, Ace];
        let b = [Three, Four, Nine, Jack, Ace];
        assert_eq!(high_cards(&a, &b), Ordering::Greater);
        assert_eq!(high_cards(&b, &a), Ordering::Less);
        assert_eq!(high_cards(&a, &a), Ordering::Equal);
    }

    #[test]
    fn quads_fall_back_to_kicker() {
        let (aces_king, aces_queen) = (hist("AH KH AS AC AD"), hist("AC QH AS AD AH"));
        assert_eq!(group_then_kickers(&aces_king, &aces_queen, 4), Ordering::Greater);
        let (twos, threes) = (hist("2H 2S 2C 2D AH"), hist("3C 3D 3H 3S 4C"));
        assert_eq!(group_then_kickers(&twos, &threes, 4), Ordering::Less);
    }

    #[test]
    fn trips_compare_both_kickers() {
        let a = hist("7C 7D 7H KS 3C");
        let b = hist("7C 7D 7H KS 2C");
        assert_eq!(group_then_kickers(&a, &b, 3), Ordering::Greater);
    }

    #[test]
    fn pair_compares_three_kickers() {
        let a = hist("9C 9D AS 8H 4C");
        let b = hist("9H 9S AD 8C 3D");
        assert_eq!(group_then_kickers(&a, &b, 2), Ordering::Greater);
        assert_eq!(group_then_kickers(&a, &a, 2), Ordering::Equal);
    }

    #[test]
    fn full_house_triple_before_pair() {
        assert_eq!(full_house(&hist("QH QC QS 3H 3D"), &hist("JH JC JS AH AD")), Ordering::Greater);
        assert_eq!(full_house(&hist("QH QC QS 3H 3D"), &hist("QD QH QS 2C 2D")), Ordering::Greater);
    }

    #[test]
    fn two_pair_high_low_kicker() {
        assert_eq!(two_pair(&hist("AS 3C KH AD KC"), &hist("8S 8D 2C KH KC")), Ordering::Greater);
        assert_eq!(two_pair(&hist("KS KD 9C 9H 2D"), &hist("KH KC 8S 8D AD")), Ordering::Greater);
        assert_eq!(two_pair(&hist("KS KD 9C 9H 2D"), &hist("KH KC 9S 9D 3D")), Ordering::Less);
    }
}
