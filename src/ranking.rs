//! Rank whole collections of hands, strongest first.

use crate::cards::ParseError;
use crate::evaluator::EvaluatedHand;
use crate::hand::ParseOptions;

/// Stable sort, strongest first. Fully tied hands keep their input order.
pub fn sort_strongest_first(mut hands: Vec<EvaluatedHand>) -> Vec<EvaluatedHand> {
    hands.sort_by(|a, b| b.cmp(a));
    hands
}

/// Outcome of ranking a batch of hand strings.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    /// Hands that parsed, strongest first.
    pub ranked: Vec<EvaluatedHand>,
    /// Inputs that failed to parse, in input order. They never enter `ranked`.
    pub rejected: Vec<(String, ParseError)>,
}

impl Ranking {
    /// One `"<input> is a <LABEL>"` line per ranked hand.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.ranked.iter().map(|hand| hand.to_string())
    }

    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse, evaluate and sort a batch of hand strings.
///
/// ```
/// use poker_hands::hand::ParseOptions;
/// use poker_hands::ranking::rank_descriptions;
///
/// let inputs = ["7S 7C 3S 3D 9H", "10H JH QH KH AH", "XX"];
/// let ranking = rank_descriptions(inputs, &ParseOptions::default());
/// let lines: Vec<String> = ranking.lines().collect();
/// assert_eq!(lines, ["10H JH QH KH AH is a ROYAL_FLUSH", "7S 7C 3S 3D 9H is a TWO_PAIR"]);
/// assert_eq!(ranking.rejected.len(), 1);
/// ```
pub fn rank_descriptions<I, S>(inputs: I, options: &ParseOptions) -> Ranking
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut evaluated = Vec::new();
    let mut rejected = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        match EvaluatedHand::parse_with(input, options) {
            Ok(hand) => evaluated.push(hand),
            Err(err) => {
                log::warn!("skipping '{input}': {err}");
                rejected.push((input.to_string(), err));
            }
        }
    }
    log::debug!("ranking {} hands ({} rejected)", evaluated.len(), rejected.len());
    Ranking { ranked: sort_strongest_first(evaluated), rejected }
}
