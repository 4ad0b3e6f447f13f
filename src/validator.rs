//! Meld detection and the win check.
//!
//! A hand wins ("rummy") when it contains at least one set and at least one
//! run anywhere in it. The cards do not need to be partitioned into melds,
//! and a card may count towards both a set and a run.

use alloc::vec::Vec;

use crate::card::Card;

/// Minimum number of cards in a set or run.
pub const MIN_MELD_SIZE: usize = 3;

/// Groups cards by a key, keeping groups in first-seen order.
fn group_by<K: PartialEq>(hand: &[Card], key: impl Fn(&Card) -> K) -> Vec<(K, Vec<Card>)> {
    let mut groups: Vec<(K, Vec<Card>)> = Vec::new();
    for card in hand {
        let k = key(card);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, cards)) => cards.push(*card),
            None => groups.push((k, alloc::vec![*card])),
        }
    }
    groups
}

/// Finds every set: all cards sharing a rank, when there are three or more.
///
/// Four of a kind is a single set of four.
#[must_use]
pub fn find_sets(hand: &[Card]) -> Vec<Vec<Card>> {
    group_by(hand, |card| card.rank)
        .into_iter()
        .filter_map(|(_, cards)| (cards.len() >= MIN_MELD_SIZE).then_some(cards))
        .collect()
}

/// Finds every maximal run of three or more consecutive ranks in one suit.
///
/// Cards are ordered by [`Rank::value`](crate::card::Rank::value), so aces only run high (Q-K-A).
/// A duplicate rank breaks the run it interrupts.
#[must_use]
pub fn find_runs(hand: &[Card]) -> Vec<Vec<Card>> {
    let mut runs = Vec::new();

    for (_, mut cards) in group_by(hand, |card| card.suit) {
        cards.sort_by_key(|card| card.rank.value());

        let mut current: Vec<Card> = Vec::new();
        for card in cards {
            let extends = current
                .last()
                .is_some_and(|prev| card.rank.value() == prev.rank.value() + 1);
            if !extends {
                if current.len() >= MIN_MELD_SIZE {
                    runs.push(core::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
            current.push(card);
        }
        if current.len() >= MIN_MELD_SIZE {
            runs.push(current);
        }
    }

    runs
}

/// Returns whether the hand holds at least one set and at least one run.
#[must_use]
pub fn validate_hand(hand: &[Card]) -> bool {
    !find_sets(hand).is_empty() && !find_runs(hand).is_empty()
}

/// Alias of [`validate_hand`] under the name the game table uses.
#[must_use]
pub fn check_for_rummy(hand: &[Card]) -> bool {
    validate_hand(hand)
}
