//! Player hands and scoring.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank};

/// Number of card slots in a hand.
pub const HAND_SIZE: usize = 4;

/// Scores a set of cards with the pair-cancellation rule.
///
/// Cards are grouped by rank. Exactly two of a rank cancel to zero; any other
/// count contributes the rank's value once per unpaired card, so three of a
/// kind leave one card standing and four of a kind cancel entirely.
///
/// ```
/// use golfrs::{Card, hand_score};
///
/// let cards: Vec<Card> = ["7-H", "7-D", "7-C", "2-S"]
///     .iter()
///     .map(|text| text.parse().unwrap())
///     .collect();
/// assert_eq!(hand_score(&cards), 9);
/// ```
#[must_use]
pub fn hand_score(cards: &[Card]) -> u8 {
    let mut counts: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(rank, count)| if count % 2 == 1 { rank.value() } else { 0 })
        .sum()
}

/// A player's four-card hand.
///
/// Every slot holds a card and starts face-down. Slots only ever turn
/// face-up; a swap replaces the card and reveals the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: [Card; HAND_SIZE],
    /// Whether each slot is face-up.
    face_up: [bool; HAND_SIZE],
}

impl Hand {
    /// Creates a hand with every slot face-down.
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self {
            cards,
            face_up: [false; HAND_SIZE],
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the card in the given slot.
    #[must_use]
    pub fn card(&self, slot: usize) -> Option<Card> {
        self.cards.get(slot).copied()
    }

    /// Returns whether the slot is face-up. Out-of-range slots are not.
    #[must_use]
    pub fn is_face_up(&self, slot: usize) -> bool {
        self.face_up.get(slot).copied().unwrap_or(false)
    }

    /// Returns whether the slot exists and is still face-down.
    #[must_use]
    pub fn is_face_down(&self, slot: usize) -> bool {
        slot < HAND_SIZE && !self.face_up[slot]
    }

    /// Returns the face-down slot indices in ascending order.
    #[must_use]
    pub fn face_down_slots(&self) -> Vec<usize> {
        (0..HAND_SIZE).filter(|&slot| !self.face_up[slot]).collect()
    }

    /// Returns the face-up slot indices in ascending order.
    #[must_use]
    pub fn face_up_slots(&self) -> Vec<usize> {
        (0..HAND_SIZE).filter(|&slot| self.face_up[slot]).collect()
    }

    /// Returns whether every slot is face-up.
    #[must_use]
    pub fn all_face_up(&self) -> bool {
        self.face_up.iter().all(|&up| up)
    }

    /// Turns a face-down slot over.
    ///
    /// Returns `false` if the slot is out of range or already face-up.
    pub fn reveal(&mut self, slot: usize) -> bool {
        if !self.is_face_down(slot) {
            return false;
        }
        self.face_up[slot] = true;
        true
    }

    /// Puts `card` into a face-down slot, revealing it.
    ///
    /// Returns the replaced card, or `None` if the slot is out of range or
    /// already face-up.
    pub fn swap(&mut self, slot: usize, card: Card) -> Option<Card> {
        if !self.is_face_down(slot) {
            return None;
        }
        let replaced = core::mem::replace(&mut self.cards[slot], card);
        self.face_up[slot] = true;
        Some(replaced)
    }

    /// Returns the cards visible to other players (`None` for face-down slots).
    #[must_use]
    pub fn visible(&self) -> [Option<Card>; HAND_SIZE] {
        core::array::from_fn(|slot| self.face_up[slot].then_some(self.cards[slot]))
    }

    /// Calculates the score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        hand_score(&self.cards)
    }
}
