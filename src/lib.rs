//! poker-hands: five-card poker hand classification and ranking
//!
//! Goals:
//! - Classify any five-card hand into one of ten categories, Royal Flush included
//! - A total, kicker-correct order over hands; the wheel is the lowest straight
//! - No panics for invalid input; parsing returns `Result`, evaluation is infallible
//!
//! ## Quick start: rank a few hands
//! ```
//! use poker_hands::hand::ParseOptions;
//! use poker_hands::ranking::rank_descriptions;
//!
//! let ranking = rank_descriptions(
//!     ["AH 7C AD 10C 10S", "10C 10S 10D 4D 4C", "5D 6D 7D 8D 9D"],
//!     &ParseOptions::default(),
//! );
//! let lines: Vec<String> = ranking.lines().collect();
//! assert_eq!(lines[0], "5D 6D 7D 8D 9D is a STRAIGHT_FLUSH");
//! assert_eq!(lines[2], "AH 7C AD 10C 10S is a TWO_PAIR");
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-hands -- "AH 7C AD 10C 10S" "10H JH QH KH AH"
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod ranking;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
