//! poker-hands: five-card poker hand classification and comparison
//!
//! Goals:
//! - Classify any five cards into one of ten categories, High Card through Royal Flush
//! - A total order between hands, with kicker tie-breaks and the Ace-low wheel
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: compare two hands
//! ```
//! use poker_hands::evaluator::Category;
//! use poker_hands::hand::Hand;
//!
//! let six_high: Hand = "2D 3D 4S 5H 6C".parse().unwrap();
//! let wheel: Hand = "AD 2D 3S 4H 5C".parse().unwrap();
//!
//! assert_eq!(wheel.category(), Category::Straight);
//! assert!(six_high > wheel);
//! ```
//!
//! The crate logs through the `log` facade (`trace` per classification,
//! `debug` for rejected input) and never installs a logger itself.

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
