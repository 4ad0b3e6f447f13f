//! Game configuration options.

use crate::card::HAND_SIZE;

/// How the computer picks the card it throws away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DiscardPolicy {
    /// Discard the last card in hand (usually the one just drawn).
    #[default]
    Last,
    /// Discard the first card in hand.
    First,
}

/// Configuration options for a rummy game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use rummyrs::{DiscardPolicy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_hand_size(10)
///     .with_computer_discard(DiscardPolicy::First);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt to each player.
    ///
    /// Default: 13
    pub hand_size: usize,
    /// Discard choice of the computer player.
    ///
    /// Default: [`DiscardPolicy::Last`]
    pub computer_discard: DiscardPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            computer_discard: DiscardPolicy::Last,
        }
    }
}

impl GameOptions {
    /// Creates a new `GameOptions` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of cards dealt to each player.
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the computer's discard policy.
    #[must_use]
    pub const fn with_computer_discard(mut self, policy: DiscardPolicy) -> Self {
        self.computer_discard = policy;
        self
    }
}
