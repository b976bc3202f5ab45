use crate::cards::{Card, ParseError};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// How strictly a hand string is checked beyond its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Reject hands that repeat a (rank, suit) pair.
    #[default]
    Strict,
    /// Accept repeated cards. Evaluation stays total for such hands.
    Permissive,
}

/// Options for turning hand strings into [`Hand`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub validation: Validation,
}

impl ParseOptions {
    pub const fn strict() -> Self {
        Self { validation: Validation::Strict }
    }

    pub const fn permissive() -> Self {
        Self { validation: Validation::Permissive }
    }
}

/// Exactly five cards, kept in input order.
///
/// ```
/// use poker_hands::cards::{Card, Rank, Suit};
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "AH 7C AD 10C 10S".parse().unwrap();
/// assert_eq!(hand.cards()[3], Card::new(Rank::Ten, Suit::Clubs));
/// assert_eq!(hand.to_string(), "AH 7C AD 10C 10S");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// Build a hand without checking for repeated cards.
    pub const fn new(cards: [Card; 5]) -> Self {
        Self { cards }
    }

    /// Build a hand, rejecting repeated cards.
    pub fn try_new(cards: [Card; 5]) -> Result<Self, ParseError> {
        let mut seen = HashSet::with_capacity(5);
        for card in cards {
            if !seen.insert(card) {
                return Err(ParseError::DuplicateCard(card));
            }
        }
        Ok(Self { cards })
    }

    pub fn from_slice(slice: &[Card], options: &ParseOptions) -> Result<Self, ParseError> {
        let cards: [Card; 5] = slice.try_into().map_err(|_| ParseError::CardCount(slice.len()))?;
        match options.validation {
            Validation::Strict => Self::try_new(cards),
            Validation::Permissive => Ok(Self::new(cards)),
        }
    }

    /// Parse `"<rank><suit> <rank><suit> ..."` with explicit options.
    ///
    /// ```
    /// use poker_hands::cards::ParseError;
    /// use poker_hands::hand::{Hand, ParseOptions};
    ///
    /// let text = "KD 4S KD 3H 8S";
    /// let strict = Hand::parse_with(text, &ParseOptions::strict());
    /// assert!(matches!(strict, Err(ParseError::DuplicateCard(_))));
    /// assert!(Hand::parse_with(text, &ParseOptions::permissive()).is_ok());
    /// ```
    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = input.split_ascii_whitespace().collect();
        if tokens.len() != 5 {
            return Err(ParseError::CardCount(tokens.len()));
        }
        let cards = tokens.into_iter().map(Card::from_str).collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&cards, options)
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }
}

impl FromStr for Hand {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &ParseOptions::default())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn parses_numeric_and_face_ranks() {
        let hand: Hand = "AH 7C AD 10C TS".parse().unwrap();
        assert_eq!(
            hand.cards(),
            &[
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::Seven, Suit::Clubs),
                Card::new(Rank::Ace, Suit::Diamonds),
                Card::new(Rank::Ten, Suit::Clubs),
                Card::new(Rank::Ten, Suit::Spades),
            ]
        );
    }

    #[test]
    fn token_count_must_be_five() {
        assert_eq!("AH 7C AD 10C".parse::<Hand>(), Err(ParseError::CardCount(4)));
        assert_eq!("AH 7C AD 10C 10S 2D".parse::<Hand>(), Err(ParseError::CardCount(6)));
        assert_eq!("".parse::<Hand>(), Err(ParseError::CardCount(0)));
    }

    #[test]
    fn extra_whitespace_is_ignored() {
        let hand: Hand = "  AH   7C AD\t10C 10S ".parse().unwrap();
        assert_eq!(hand.to_string(), "AH 7C AD 10C 10S");
    }

    #[test]
    fn bad_tokens_surface_their_error() {
        assert_eq!("AH 7C AD 1C 10S".parse::<Hand>(), Err(ParseError::Rank("1".into())));
        assert_eq!("AH 7C AD 10X 10S".parse::<Hand>(), Err(ParseError::Suit("X".into())));
        assert_eq!("AH 7C A 10C 10S".parse::<Hand>(), Err(ParseError::MalformedCard("A".into())));
        assert_eq!("AH 7C AD 10 10S".parse::<Hand>(), Err(ParseError::MalformedCard("10".into())));
    }

    #[test]
    fn strict_rejects_duplicates_permissive_accepts() {
        let dup = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!("QD QH QH 2C 2D".parse::<Hand>(), Err(ParseError::DuplicateCard(dup)));
        let hand = Hand::parse_with("QD QH QH 2C 2D", &ParseOptions::permissive()).unwrap();
        assert_eq!(hand.cards()[2], dup);
    }

    #[test]
    fn from_slice_checks_length() {
        let cards = [Card::new(Rank::Two, Suit::Clubs); 3];
        assert_eq!(
            Hand::from_slice(&cards, &ParseOptions::permissive()),
            Err(ParseError::CardCount(3))
        );
    }
}
