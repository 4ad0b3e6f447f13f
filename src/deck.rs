//! Deck and discard pile management.

use alloc::vec::Vec;

use log::trace;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};

/// Owns the draw deck and the discard pile.
///
/// The end of each vector is its top: draws pop from the end and discards push
/// onto it. The random source is injected so a seed fully determines every
/// shuffle.
///
/// ```
/// use rummyrs::DeckManager;
///
/// let mut deck = DeckManager::new(7);
/// let hand = deck.deal_hand();
/// assert_eq!(hand.len(), 13);
/// assert_eq!(deck.cards_remaining(), 39);
/// ```
#[derive(Debug, Clone)]
pub struct DeckManager<R = ChaCha8Rng> {
    deck: Vec<Card>,
    discard_pile: Vec<Card>,
    rng: R,
}

impl DeckManager<ChaCha8Rng> {
    /// Creates a shuffled deck from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DeckManager<R> {
    /// Creates a shuffled deck using the given random source.
    pub fn with_rng(rng: R) -> Self {
        let mut manager = Self {
            deck: Vec::with_capacity(DECK_SIZE),
            discard_pile: Vec::new(),
            rng,
        };
        manager.initialize_deck();
        manager
    }

    /// Rebuilds the full 52-card deck in canonical order and shuffles it.
    ///
    /// The discard pile is left untouched; see [`DeckManager::reset`].
    pub fn initialize_deck(&mut self) {
        self.deck.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.deck.push(Card::new(suit, rank));
            }
        }
        self.shuffle_deck();
    }

    /// Shuffles the deck in place with `rand`'s uniform Fisher-Yates shuffle.
    pub fn shuffle_deck(&mut self) {
        self.deck.shuffle(&mut self.rng);
        trace!("shuffled {} cards", self.deck.len());
    }

    /// Clears the discard pile and rebuilds a shuffled deck.
    pub fn reset(&mut self) {
        self.clear_discard_pile();
        self.initialize_deck();
    }

    /// Removes and returns the first [`HAND_SIZE`] cards of the deck.
    ///
    /// Returns fewer cards if the deck runs short.
    pub fn deal_hand(&mut self) -> Vec<Card> {
        self.deal(HAND_SIZE)
    }

    /// Removes and returns up to `count` cards from the front of the deck.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.deck.len());
        self.deck.drain(..count).collect()
    }

    /// Draws the top card of the deck.
    pub fn draw_from_deck(&mut self) -> Option<Card> {
        let card = self.deck.pop();
        trace!("drew {card:?} from deck, {} left", self.deck.len());
        card
    }

    /// Draws the top card of the discard pile.
    pub fn draw_from_discard(&mut self) -> Option<Card> {
        self.discard_pile.pop()
    }

    /// Puts a card on top of the discard pile.
    ///
    /// The card is not checked against any hand.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Empties the discard pile.
    pub fn clear_discard_pile(&mut self) {
        self.discard_pile.clear();
    }

}

impl<R> DeckManager<R> {
    /// Replaces the deck with a prearranged order, returning the previous cards.
    ///
    /// The last card of `cards` is the top of the deck. No shuffle is applied.
    pub const fn replace_deck(&mut self, cards: Vec<Card>) -> Vec<Card> {
        core::mem::replace(&mut self.deck, cards)
    }

    /// Returns the deck, bottom first.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the discard pile, bottom first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Returns the top card of the discard pile without removing it.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
