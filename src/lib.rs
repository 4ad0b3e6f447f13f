//! A rummy game engine with optional `no_std` support.
//!
//! The crate provides the rules of a simplified rummy: a [`DeckManager`] for
//! the deck and discard pile, the meld checks in [`validator`], and a [`Game`]
//! type that runs a player against a computer opponent.
//!
//! # Example
//!
//! ```
//! use rummyrs::{Game, GameOptions, TurnOutcome};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let card = game.player_draw_from_deck().unwrap();
//! match game.player_discard(card).unwrap() {
//!     TurnOutcome::PlayerWins => println!("You win!"),
//!     TurnOutcome::ComputerWins(_) => println!("Computer wins!"),
//!     TurnOutcome::PlayerTurn(_) => println!("Your turn!"),
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod validator;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit, get_rank_value};
pub use deck::DeckManager;
pub use error::{ActionError, ParseCardError};
pub use game::{Game, GameState, select_discard};
pub use hand::Hand;
pub use options::{DiscardPolicy, GameOptions};
pub use result::{ComputerTurn, Seat, TurnOutcome};
pub use validator::{check_for_rummy, find_runs, find_sets, validate_hand};
