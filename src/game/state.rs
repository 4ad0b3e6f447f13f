//! Game state types.

use crate::result::Seat;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The player must draw from the deck or the discard pile.
    WaitingForDraw,
    /// The player must discard a card.
    WaitingForDiscard,
    /// The game has been won.
    GameOver(Seat),
}

impl GameState {
    /// Returns the winner if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::GameOver(seat) => Some(seat),
            _ => None,
        }
    }
}
