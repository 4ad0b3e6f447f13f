use log::{info, trace};
use rand::Rng;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::DiscardPolicy;
use crate::result::{ComputerTurn, Seat, TurnOutcome};

use super::{Game, GameState};

/// Picks the card the computer throws away.
///
/// Returns `None` only for an empty hand.
#[must_use]
pub fn select_discard(hand: &Hand, policy: DiscardPolicy) -> Option<Card> {
    match policy {
        DiscardPolicy::Last => hand.last().copied(),
        DiscardPolicy::First => hand.cards().first().copied(),
    }
}

impl<R: Rng> Game<R> {
    /// Computer draws from the deck, discards, and checks for a win.
    pub(super) fn computer_turn(&mut self) -> TurnOutcome {
        let drawn = self.deck.draw_from_deck();
        if let Some(card) = drawn {
            self.computer_hand.add_card(card);
        }

        let discarded = select_discard(&self.computer_hand, self.options.computer_discard)
            .and_then(|card| self.computer_hand.remove_card(card));
        if let Some(card) = discarded {
            self.deck.discard(card);
        }
        trace!("computer drew {drawn:?}, discarded {discarded:?}");

        let turn = ComputerTurn { drawn, discarded };
        if self.computer_hand.is_rummy() {
            info!("computer wins");
            self.state = GameState::GameOver(Seat::Computer);
            TurnOutcome::ComputerWins(turn)
        } else {
            self.state = GameState::WaitingForDraw;
            TurnOutcome::PlayerTurn(turn)
        }
    }
}
