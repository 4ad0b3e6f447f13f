//! Game engine and state management.

use alloc::vec::Vec;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::DeckManager;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Seat;

mod actions;
mod computer;
pub mod state;

pub use computer::select_discard;
pub use state::GameState;

/// A rummy game between one player and the computer.
///
/// The game owns the deck, the discard pile, and both hands. The player
/// always draws and then discards; each discard that does not win hands the
/// turn to the computer, which plays immediately.
///
/// # Example
///
/// ```
/// use rummyrs::{Game, GameOptions, GameState};
///
/// let game = Game::new(GameOptions::default(), 42);
/// assert_eq!(game.state(), GameState::WaitingForDraw);
/// assert_eq!(game.player_hand().len(), 13);
/// assert_eq!(game.total_cards(), 52);
/// ```
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// Deck and discard pile.
    deck: DeckManager<R>,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// The human player's hand.
    player_hand: Hand,
    /// The computer's hand.
    computer_hand: Hand,
}

impl Game<ChaCha8Rng> {
    /// Creates and starts a new game with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates and starts a new game using the given random source.
    ///
    /// The hands are dealt from the deck shuffled by the new [`DeckManager`].
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        let mut game = Self {
            deck: DeckManager::with_rng(rng),
            options,
            state: GameState::WaitingForDraw,
            player_hand: Hand::new(),
            computer_hand: Hand::new(),
        };
        game.deal();
        game
    }

    /// Starts a new game, discarding all prior state.
    ///
    /// The deck is rebuilt and shuffled, the discard pile emptied, and both
    /// hands dealt.
    pub fn start_game(&mut self) {
        self.deck.reset();
        self.deal();
    }

    /// Starts a new game from a prearranged deck, without shuffling.
    ///
    /// The player is dealt from the front of `cards`, then the computer; draws
    /// come from the back.
    pub fn start_game_with_deck(&mut self, cards: Vec<Card>) {
        self.deck.clear_discard_pile();
        self.deck.replace_deck(cards);
        self.deal();
    }

    fn deal(&mut self) {
        self.player_hand = self.deck.deal(self.options.hand_size).into();
        self.computer_hand = self.deck.deal(self.options.hand_size).into();
        self.state = GameState::WaitingForDraw;
        debug!(
            "new game: dealt {} and {} cards, {} left in deck",
            self.player_hand.len(),
            self.computer_hand.len(),
            self.deck.cards_remaining()
        );
    }
}

impl<R> Game<R> {
    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the computer's hand.
    pub const fn computer_hand(&self) -> &Hand {
        &self.computer_hand
    }

    /// Returns the deck and discard pile.
    pub const fn deck(&self) -> &DeckManager<R> {
        &self.deck
    }

    /// Returns the winner, if any.
    pub const fn winner(&self) -> Option<Seat> {
        self.state.winner()
    }

    /// Returns whose turn it is, or `None` once the game is over.
    ///
    /// The computer plays inside [`Game::player_discard`], so between calls it
    /// is always the player's turn.
    pub const fn next_turn(&self) -> Option<Seat> {
        match self.state {
            GameState::WaitingForDraw | GameState::WaitingForDiscard => Some(Seat::Player),
            GameState::GameOver(_) => None,
        }
    }

    /// Returns the number of cards across the deck, discard pile, and both hands.
    ///
    /// This is always 52 for games started from a full deck.
    pub fn total_cards(&self) -> usize {
        self.deck.deck().len()
            + self.deck.discard_pile().len()
            + self.player_hand.len()
            + self.computer_hand.len()
    }
}
