use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::PromptError;

use super::{Action, Decision, Strategy, TurnView};

/// A strategy that picks uniformly among the legal options.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates a random strategy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn pick_face_down(&mut self, view: &TurnView<'_>) -> usize {
        view.hand
            .face_down_slots()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(0)
    }
}

impl Strategy for RandomStrategy {
    fn display_state(&mut self, view: &TurnView<'_>) -> Result<(), PromptError> {
        log::debug!("{} holds {:?}", view.name, view.hand.cards());
        Ok(())
    }

    fn choose_action(&mut self, _view: &TurnView<'_>) -> Result<Action, PromptError> {
        let index = self.rng.random_range(0..Action::ALL.len());
        Ok(Action::ALL[index])
    }

    fn choose_swap_or_discard(
        &mut self,
        _drawn: Card,
        _view: &TurnView<'_>,
    ) -> Result<Decision, PromptError> {
        Ok(if self.rng.random_bool(0.5) {
            Decision::Swap
        } else {
            Decision::Discard
        })
    }

    fn choose_swap_slot(
        &mut self,
        _drawn: Card,
        view: &TurnView<'_>,
    ) -> Result<usize, PromptError> {
        Ok(self.pick_face_down(view))
    }

    fn choose_turn_over_slot(&mut self, view: &TurnView<'_>) -> Result<usize, PromptError> {
        Ok(self.pick_face_down(view))
    }
}
