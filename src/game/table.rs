//! Draw pile and discard pile shared by every player.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, create_deck};
use crate::player::Action;

/// The deck and discard pile.
///
/// Both piles are stacks: the last element is the top card.
#[derive(Debug)]
pub struct Table {
    /// Cards in the draw pile.
    pub deck: Vec<Card>,
    /// Cards in the discard pile.
    pub discard: Vec<Card>,
    /// Number of cards drawn from the deck since creation.
    draws: usize,
    /// Number of times the discard pile was recycled.
    reshuffles: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with a freshly shuffled deck and an empty discard pile.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = create_deck(&mut rng);

        Self {
            deck,
            discard: Vec::new(),
            draws: 0,
            reshuffles: 0,
            rng,
        }
    }

    /// Returns the top of the discard pile.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards drawn from the deck.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// Returns the number of reshuffles performed.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }

    /// Pops a card from the deck without reshuffling. Used for dealing.
    pub(crate) fn pop_deck(&mut self) -> Option<Card> {
        self.deck.pop()
    }

    /// Draws a card, recycling the discard pile first if the deck is empty.
    ///
    /// Returns `None` only if both the deck and the discard pile below its
    /// top card are empty.
    pub fn draw(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            self.reshuffle();
        }

        let card = self.deck.pop()?;
        self.draws += 1;
        Some(card)
    }

    /// Takes the top card of the discard pile.
    pub fn take_discard(&mut self) -> Option<Card> {
        self.discard.pop()
    }

    /// Places a card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Returns a card obtained through `source` to the pile it came from.
    pub(crate) fn put_back(&mut self, card: Card, source: Action) {
        match source {
            Action::DrawDeck => {
                self.deck.push(card);
                self.draws = self.draws.saturating_sub(1);
            }
            Action::TakeDiscard | Action::TurnOver => self.discard.push(card),
        }
    }

    /// Moves every discarded card except the top one into the deck and
    /// shuffles it.
    ///
    /// Cards already in the deck stay there. Does nothing if the discard pile
    /// holds one card or fewer.
    pub fn reshuffle(&mut self) {
        let Some(top) = self.discard.pop() else {
            return;
        };
        if self.discard.is_empty() {
            self.discard.push(top);
            return;
        }

        log::debug!("deck is empty, reshuffling {} discarded cards", self.discard.len());
        self.deck.append(&mut self.discard);
        self.deck.shuffle(&mut self.rng);
        self.discard.push(top);
        self.reshuffles += 1;
    }
}
