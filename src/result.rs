//! Turn result types.

use crate::card::Card;

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

/// What the computer did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTurn {
    /// The card drawn from the deck, if the deck was not empty.
    pub drawn: Option<Card>,
    /// The card put on the discard pile, if the computer had one to give.
    pub discarded: Option<Card>,
}

/// Result of a player's discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player's hand is a winning hand.
    PlayerWins,
    /// The computer played and won.
    ComputerWins(ComputerTurn),
    /// The computer played without winning; the player draws next.
    PlayerTurn(ComputerTurn),
}

impl TurnOutcome {
    /// Returns the winner, if the turn ended the game.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        match self {
            Self::PlayerWins => Some(Seat::Player),
            Self::ComputerWins(_) => Some(Seat::Computer),
            Self::PlayerTurn(_) => None,
        }
    }

    /// Returns the computer's move, if it played.
    #[must_use]
    pub const fn computer_turn(&self) -> Option<&ComputerTurn> {
        match self {
            Self::PlayerWins => None,
            Self::ComputerWins(turn) | Self::PlayerTurn(turn) => Some(turn),
        }
    }
}
