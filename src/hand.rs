//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::validator;

/// A player's hand, in the order the cards were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first card equal to `card`.
    ///
    /// Returns `None` if the hand does not hold it.
    pub fn remove_card(&mut self, card: Card) -> Option<Card> {
        let index = self.cards.iter().position(|c| *c == card)?;
        Some(self.cards.remove(index))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the most recently received card.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the sets in the hand.
    #[must_use]
    pub fn sets(&self) -> Vec<Vec<Card>> {
        validator::find_sets(&self.cards)
    }

    /// Returns the runs in the hand.
    #[must_use]
    pub fn runs(&self) -> Vec<Vec<Card>> {
        validator::find_runs(&self.cards)
    }

    /// Returns whether the hand holds at least one set and one run.
    #[must_use]
    pub fn is_rummy(&self) -> bool {
        validator::validate_hand(&self.cards)
    }

    /// Clears the hand for a new game.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
