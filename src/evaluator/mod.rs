pub(crate) mod classifier;
pub(crate) mod hand_analysis;
pub(crate) mod histogram;
pub(crate) mod straight_info;
pub(crate) mod suit_info;
pub(crate) mod tiebreak;

pub use histogram::RankHistogram;

use crate::cards::{Card, ParseError, Rank};
use crate::hand::{Hand, ParseOptions};
use core::cmp::Ordering;
use hand_analysis::HandAnalysis;
use std::fmt;
use std::str::FromStr;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
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
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Primary sort key, `1..=10`.
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "HIGH_CARD",
            Category::Pair => "PAIR",
            Category::TwoPair => "TWO_PAIR",
            Category::ThreeOfAKind => "THREE_OF_A_KIND",
            Category::Straight => "STRAIGHT",
            Category::Flush => "FLUSH",
            Category::FullHouse => "FULL_HOUSE",
            Category::FourOfAKind => "FOUR_OF_A_KIND",
            Category::StraightFlush => "STRAIGHT_FLUSH",
            Category::RoyalFlush => "ROYAL_FLUSH",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a head-to-head comparison, from the left hand's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// `Win` maps to `Greater`: the left hand is stronger.
    pub const fn to_ordering(self) -> Ordering {
        match self {
            Outcome::Win => Ordering::Greater,
            Outcome::Loss => Ordering::Less,
            Outcome::Tie => Ordering::Equal,
        }
    }

    pub const fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// The same result seen from the other side.
    pub const fn reverse(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// A classified hand plus the facts its tie-breaks read.
///
/// Ordering compares strength only: `Greater` is the stronger hand and two hands
/// are equal exactly when they tie, whatever their suits.
///
/// ```
/// use poker_hands::evaluator::{Category, EvaluatedHand, Outcome};
///
/// let boat: EvaluatedHand = "10C 10S 10D 4D 4C".parse().unwrap();
/// let two_pair: EvaluatedHand = "AH 7C AD 10C 10S".parse().unwrap();
/// assert_eq!(boat.category(), Category::FullHouse);
/// assert_eq!(boat.compare_with(&two_pair), Outcome::Win);
/// assert!(boat > two_pair);
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatedHand {
    description: String,
    hand: Hand,
    category: Category,
    histogram: RankHistogram,
    sorted_ranks: [Rank; 5],
    is_wheel: bool,
}

impl EvaluatedHand {
    /// Evaluate a hand, describing it by its own rendering.
    pub fn new(hand: Hand) -> Self {
        Self::with_description(hand.to_string(), hand)
    }

    /// Evaluate a hand, keeping `description` (usually the caller's input text) for display.
    pub fn with_description(description: impl Into<String>, hand: Hand) -> Self {
        let description = description.into();
        let analysis = HandAnalysis::new(&hand);
        let category = classifier::classify(&analysis);
        log::debug!("{description} classified as {category}");
        let HandAnalysis { sorted_ranks, histogram, straight_info, .. } = analysis;
        Self {
            description,
            hand,
            category,
            histogram,
            sorted_ranks,
            is_wheel: straight_info.is_wheel,
        }
    }

    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let hand = Hand::parse_with(input, options)?;
        Ok(Self::with_description(input, hand))
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn histogram(&self) -> &RankHistogram {
        &self.histogram
    }

    /// Ranks in ascending order.
    pub fn sorted_ranks(&self) -> &[Rank; 5] {
        &self.sorted_ranks
    }

    /// True for a straight (flush) played as A-2-3-4-5.
    pub fn is_wheel(&self) -> bool {
        self.is_wheel
    }

    pub fn compare_with(&self, other: &Self) -> Outcome {
        Outcome::from_ordering(self.cmp(other))
    }
}

impl FromStr for EvaluatedHand {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &ParseOptions::default())
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is a {}", self.description, self.category)
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| tiebreak::compare(self.category, self, other))
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

/// Evaluate exactly five cards without checking for repeats.
pub fn evaluate_five(cards: &[Card; 5]) -> EvaluatedHand {
    EvaluatedHand::new(Hand::new(*cards))
}

/// Head-to-head on two hand strings under `options`.
///
/// ```
/// use poker_hands::evaluator::{compare_descriptions, Outcome};
/// use poker_hands::hand::ParseOptions;
///
/// let res = compare_descriptions("5D 6D 7D 8D 9D", "AD 2D 3D 4D 5D", &ParseOptions::default());
/// assert_eq!(res.unwrap(), Outcome::Win);
/// ```
pub fn compare_descriptions(
    a: &str,
    b: &str,
    options: &ParseOptions,
) -> Result<Outcome, ParseError> {
    let ea = EvaluatedHand::parse_with(a, options)?;
    let eb = EvaluatedHand::parse_with(b, options)?;
    Ok(ea.compare_with(&eb))
}
