use crate::card::Card;
use crate::error::PromptError;
use crate::hand::Hand;

use super::{Action, Decision, Strategy, TurnView};

/// Cards valued below this are worth keeping.
pub const GREEDY_THRESHOLD: u8 = 6;

/// A strategy that keeps any low card it sees.
///
/// It takes the discard when its value is below [`GREEDY_THRESHOLD`] and
/// draws otherwise. A low card replaces the highest face-down card; a high
/// card is discarded and the lowest face-down card is turned over. It peeks
/// at its own face-down cards to rank them.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    /// Creates a greedy strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Picks a face-down slot by card value. Earlier slots win ties.
fn pick_face_down(hand: &Hand, prefer: impl Fn(u8, u8) -> bool) -> usize {
    let mut best: Option<(usize, u8)> = None;
    for slot in hand.face_down_slots() {
        let value = hand.card(slot).map_or(0, Card::value);
        match best {
            Some((_, current)) if !prefer(value, current) => {}
            _ => best = Some((slot, value)),
        }
    }
    best.map_or(0, |(slot, _)| slot)
}

impl Strategy for GreedyStrategy {
    fn display_state(&mut self, view: &TurnView<'_>) -> Result<(), PromptError> {
        log::debug!("{} holds {:?}", view.name, view.hand.cards());
        Ok(())
    }

    fn choose_action(&mut self, view: &TurnView<'_>) -> Result<Action, PromptError> {
        Ok(match view.top {
            Some(top) if top.value() < GREEDY_THRESHOLD => Action::TakeDiscard,
            _ => Action::DrawDeck,
        })
    }

    fn choose_swap_or_discard(
        &mut self,
        drawn: Card,
        _view: &TurnView<'_>,
    ) -> Result<Decision, PromptError> {
        Ok(if drawn.value() < GREEDY_THRESHOLD {
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
        Ok(pick_face_down(view.hand, |value, best| value > best))
    }

    fn choose_turn_over_slot(&mut self, view: &TurnView<'_>) -> Result<usize, PromptError> {
        Ok(pick_face_down(view.hand, |value, best| value < best))
    }
}
