use poker_hands::evaluator::{Category, EvaluatedHand};
use poker_hands::hand::ParseOptions;
use poker_hands::ranking::{rank_descriptions, sort_strongest_first};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Strongest first. Three entries repeat a card, so they only parse permissively.
const ORDERED: [(&str, Category); 19] = [
    ("JH AH TH KH QH", Category::RoyalFlush),
    ("8S 6S 5S 7S 4S", Category::StraightFlush),
    ("2D 6D 3D 4D 5D", Category::StraightFlush),
    ("AH KH AS AC AD", Category::FourOfAKind),
    ("AC QH AS AD AH", Category::FourOfAKind),
    ("QH QC QS 3H 3D", Category::FullHouse),
    ("QD QH QH 2C 2D", Category::FullHouse),
    ("4C 5C 9C 8C KC", Category::Flush),
    ("8C 9C 5C 3C TC", Category::Flush),
    ("JS QS 9H TS KH", Category::Straight),
    ("3C 5C 4C 2C 6H", Category::Straight),
    ("AC KH QH AH AS", Category::ThreeOfAKind),
    ("5C 5S 3S 7H 5S", Category::ThreeOfAKind),
    ("AS 3C KH AD KC", Category::TwoPair),
    ("8S 8D 2C KH KC", Category::TwoPair),
    ("KD 4S KD 3H 8S", Category::Pair),
    ("KS 9D 4D 9S 5S", Category::Pair),
    ("6C 7D JC 2D AS", Category::HighCard),
    ("3C 5D 9D TH JC", Category::HighCard),
];

#[test]
fn demo_hands_rank_strongest_first() {
    let inputs = [
        "AH 7C AD 10C 10S",
        "10C 10S 10D 4D 4C",
        "7S 7C 3S 3D 9H",
        "5D 6D 7D 8D 9D",
        "10H JH QH KH AH",
    ];
    let ranking = rank_descriptions(inputs, &ParseOptions::default());
    assert!(ranking.is_complete());
    let lines: Vec<String> = ranking.lines().collect();
    assert_eq!(
        lines,
        [
            "10H JH QH KH AH is a ROYAL_FLUSH",
            "5D 6D 7D 8D 9D is a STRAIGHT_FLUSH",
            "10C 10S 10D 4D 4C is a FULL_HOUSE",
            "AH 7C AD 10C 10S is a TWO_PAIR",
            "7S 7C 3S 3D 9H is a TWO_PAIR",
        ]
    );
}

#[test]
fn reference_order_survives_any_shuffle() {
    let opts = ParseOptions::permissive();
    for seed in 0..10u64 {
        let mut inputs: Vec<&str> = ORDERED.iter().map(|(s, _)| *s).collect();
        inputs.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let ranking = rank_descriptions(&inputs, &opts);
        assert!(ranking.is_complete(), "seed {seed}: {:?}", ranking.rejected);
        let got: Vec<(&str, Category)> =
            ranking.ranked.iter().map(|h| (h.description(), h.category())).collect();
        assert_eq!(got, ORDERED, "seed {seed}");
    }
}

#[test]
fn strict_mode_drops_hands_with_repeated_cards() {
    let ranking = rank_descriptions(ORDERED.iter().map(|(s, _)| *s), &ParseOptions::strict());
    let rejected: Vec<&str> = ranking.rejected.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(rejected, ["QD QH QH 2C 2D", "5C 5S 3S 7H 5S", "KD 4S KD 3H 8S"]);
    assert_eq!(ranking.ranked.len(), 16);
}

#[test]
fn fully_tied_hands_keep_input_order() {
    let inputs = ["9C 9D 5H 4S 2C", "9H 9S 5D 4C 2D", "KC KD 5H 4S 2C", "9S 9H 5C 4H 2H"];
    let hands: Vec<EvaluatedHand> = inputs
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let sorted = sort_strongest_first(hands);
    let order: Vec<&str> = sorted.iter().map(|h| h.description()).collect();
    assert_eq!(order, ["KC KD 5H 4S 2C", "9C 9D 5H 4S 2C", "9H 9S 5D 4C 2D", "9S 9H 5C 4H 2H"]);
}
