//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The game already has a winner.
    #[error("the game is over")]
    GameOver,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
    /// The discard pile is empty.
    #[error("the discard pile is empty")]
    EmptyDiscardPile,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card")]
    Empty,
    /// The rank symbol was not recognized.
    #[error("invalid rank")]
    InvalidRank,
    /// The suit letter was not recognized.
    #[error("invalid suit")]
    InvalidSuit,
}
