use log::info;
use rand::Rng;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Seat, TurnOutcome};

use super::{Game, GameState};

impl<R: Rng> Game<R> {
    fn ensure_state(&self, expected: GameState) -> Result<(), ActionError> {
        match self.state {
            GameState::GameOver(_) => Err(ActionError::GameOver),
            state if state == expected => Ok(()),
            _ => Err(ActionError::InvalidState),
        }
    }

    /// Player action: draw the top card of the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the player has already drawn
    /// this turn, or the deck is empty.
    pub fn player_draw_from_deck(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(GameState::WaitingForDraw)?;

        let card = self.deck.draw_from_deck().ok_or(ActionError::NoCards)?;
        self.player_hand.add_card(card);
        self.state = GameState::WaitingForDiscard;

        Ok(card)
    }

    /// Player action: draw the top card of the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the player has already drawn
    /// this turn, or the discard pile is empty.
    pub fn player_draw_from_discard(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(GameState::WaitingForDraw)?;

        let card = self
            .deck
            .draw_from_discard()
            .ok_or(ActionError::EmptyDiscardPile)?;
        self.player_hand.add_card(card);
        self.state = GameState::WaitingForDiscard;

        Ok(card)
    }

    /// Player action: discard a card, then check for a win.
    ///
    /// If the player's hand is not a winning hand the computer takes its turn
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the player has not drawn yet, or
    /// the card is not in the player's hand.
    pub fn player_discard(&mut self, card: Card) -> Result<TurnOutcome, ActionError> {
        self.ensure_state(GameState::WaitingForDiscard)?;

        let card = self
            .player_hand
            .remove_card(card)
            .ok_or(ActionError::CardNotInHand)?;
        self.deck.discard(card);

        if self.player_hand.is_rummy() {
            info!("player wins");
            self.state = GameState::GameOver(Seat::Player);
            return Ok(TurnOutcome::PlayerWins);
        }

        Ok(self.computer_turn())
    }
}
