//! Players and the strategies that drive their decisions.
//!
//! Every player runs the same turn protocol in [`Player::make_move`]. The
//! [`Strategy`] a player is built with only answers the questions the
//! protocol asks: which action to take, whether to keep a drawn card, and
//! which slot to swap or turn over.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{PromptError, TurnError};
use crate::game::Table;
use crate::hand::{HAND_SIZE, Hand};

mod greedy;
mod interactive;
mod random;

pub use greedy::{GREEDY_THRESHOLD, GreedyStrategy};
#[cfg(feature = "std")]
pub use interactive::ConsolePrompt;
pub use interactive::{InteractiveStrategy, Prompt};
pub use random::RandomStrategy;

/// What a player does at the start of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take the top card of the discard pile.
    TakeDiscard,
    /// Draw the top card of the deck.
    DrawDeck,
    /// Turn one face-down card over without drawing.
    TurnOver,
}

impl Action {
    /// All actions.
    pub const ALL: [Self; 3] = [Self::TakeDiscard, Self::DrawDeck, Self::TurnOver];
}

/// What a player does with a card they are holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Swap the card into a face-down slot.
    Swap,
    /// Discard the card and turn a face-down slot over.
    Discard,
}

/// Something that happened during a turn, reported back to the strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// A card was drawn from the deck.
    Drew(Card),
    /// The top of the discard pile was taken.
    TookDiscard(Card),
    /// A card was swapped into a slot, replacing `replaced`.
    Swapped {
        /// Slot the card went into.
        slot: usize,
        /// Card that left the hand.
        replaced: Card,
    },
    /// A slot was turned face-up.
    TurnedOver(usize),
    /// A swap was requested with no face-down slot left; the card was discarded.
    ForcedDiscard(Card),
    /// A turn-over was requested with no face-down slot left.
    NothingToTurn,
}

/// What another player's hand looks like from across the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentView {
    /// The player's name.
    pub name: String,
    /// Face-up cards, `None` for face-down slots.
    pub visible: [Option<Card>; HAND_SIZE],
}

/// Shared state a strategy may consult when making a decision.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// Name of the player taking the turn.
    pub name: &'a str,
    /// The player's own hand, including face-down cards.
    pub hand: &'a Hand,
    /// Top of the discard pile.
    pub top: Option<Card>,
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// The other players, in seating order.
    pub opponents: &'a [OpponentView],
}

/// Decision policy for a player.
///
/// Slot-choosing methods are only called while at least one face-down slot
/// remains, and must return one of [`Hand::face_down_slots`].
pub trait Strategy {
    /// Shows the state at the start of a turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy's output channel fails.
    fn display_state(&mut self, _view: &TurnView<'_>) -> Result<(), PromptError> {
        Ok(())
    }

    /// Chooses the turn's action.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy's input channel fails.
    fn choose_action(&mut self, view: &TurnView<'_>) -> Result<Action, PromptError>;

    /// Chooses whether to swap in or discard a card that was just obtained.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy's input channel fails.
    fn choose_swap_or_discard(
        &mut self,
        drawn: Card,
        view: &TurnView<'_>,
    ) -> Result<Decision, PromptError>;

    /// Chooses the face-down slot `drawn` replaces.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy's input channel fails.
    fn choose_swap_slot(&mut self, drawn: Card, view: &TurnView<'_>)
    -> Result<usize, PromptError>;

    /// Chooses the face-down slot to turn over.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy's input channel fails.
    fn choose_turn_over_slot(&mut self, view: &TurnView<'_>) -> Result<usize, PromptError>;

    /// Receives a report of something that happened during the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy's output channel fails.
    fn notify(&mut self, _event: TurnEvent) -> Result<(), PromptError> {
        Ok(())
    }
}

/// Where a held card ended up.
enum Placed {
    /// Swapped into `slot`, pushing `replaced` onto the discard pile.
    Swapped { slot: usize, replaced: Card },
    /// Discarded by choice; a face-down card still has to be turned over.
    Discarded,
    /// Discarded because no face-down slot was left.
    Forced,
}

/// A seated player: a name, a hand, and a strategy.
pub struct Player {
    name: String,
    hand: Option<Hand>,
    strategy: Box<dyn Strategy>,
}

impl core::fmt::Debug for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Creates a player without a hand. Cards are dealt by the game.
    pub fn new(name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        Self {
            name: name.into(),
            hand: None,
            strategy: Box::new(strategy),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand, if one has been dealt.
    #[must_use]
    pub const fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Gives the player a new hand.
    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = Some(hand);
    }

    /// Returns the player's hand as seen by others.
    #[must_use]
    pub fn opponent_view(&self) -> OpponentView {
        OpponentView {
            name: self.name.clone(),
            visible: self.hand.as_ref().map_or([None; HAND_SIZE], Hand::visible),
        }
    }

    /// Plays one turn.
    ///
    /// Returns whether every slot of the hand is face-up afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has no hand, a pile is unexpectedly
    /// empty, the strategy picks an invalid slot, or its prompt fails.
    pub fn make_move(
        &mut self,
        table: &mut Table,
        opponents: &[OpponentView],
    ) -> Result<bool, TurnError> {
        let hand = self.hand.as_ref().ok_or(TurnError::InvalidState)?;
        let top = table.top().ok_or(TurnError::EmptyDiscard)?;

        log::debug!("{}'s turn, stack shows {}", self.name, top.rank);
        let view = TurnView {
            name: &self.name,
            hand,
            top: Some(top),
            cards_remaining: table.cards_remaining(),
            opponents,
        };
        self.strategy.display_state(&view)?;
        let action = self.strategy.choose_action(&view)?;

        let Some(card) = self.draw_or_take(action, table)? else {
            self.turn_card_over(table, opponents)?;
            return Ok(self.hand.as_ref().is_some_and(Hand::all_face_up));
        };

        let placed = match self.place_held(card, table, opponents) {
            Ok(placed) => placed,
            Err(err) => {
                table.put_back(card, action);
                return Err(err);
            }
        };
        match placed {
            Placed::Swapped { slot, replaced } => {
                self.strategy.notify(TurnEvent::Swapped { slot, replaced })?;
            }
            Placed::Forced => self.strategy.notify(TurnEvent::ForcedDiscard(card))?,
            Placed::Discarded => self.turn_card_over(table, opponents)?,
        }

        Ok(self.hand.as_ref().is_some_and(Hand::all_face_up))
    }

    /// Obtains a card for the chosen action.
    ///
    /// Drawing from an empty deck recycles the discard pile first. Returns
    /// `None` for [`Action::TurnOver`].
    ///
    /// # Errors
    ///
    /// Returns an error if the pile to draw from has no cards or the
    /// strategy's prompt fails. On a prompt failure the card goes back to
    /// the pile it came from.
    pub fn draw_or_take(
        &mut self,
        action: Action,
        table: &mut Table,
    ) -> Result<Option<Card>, TurnError> {
        let (card, event) = match action {
            Action::TurnOver => return Ok(None),
            Action::DrawDeck => {
                let card = table.draw().ok_or(TurnError::NoCards)?;
                log::debug!("{} drew {}", self.name, card.rank);
                (card, TurnEvent::Drew(card))
            }
            Action::TakeDiscard => {
                let card = table.take_discard().ok_or(TurnError::EmptyDiscard)?;
                log::debug!("{} took {} from the discard pile", self.name, card.rank);
                (card, TurnEvent::TookDiscard(card))
            }
        };
        if let Err(err) = self.strategy.notify(event) {
            table.put_back(card, action);
            return Err(err.into());
        }
        Ok(Some(card))
    }

    /// Asks the strategy what to do with a held card and puts it in the hand
    /// or on the discard pile.
    ///
    /// On error the card has not been placed anywhere and the hand is
    /// unchanged.
    fn place_held(
        &mut self,
        card: Card,
        table: &mut Table,
        opponents: &[OpponentView],
    ) -> Result<Placed, TurnError> {
        let hand = self.hand.as_ref().ok_or(TurnError::InvalidState)?;
        let view = TurnView {
            name: &self.name,
            hand,
            top: table.top(),
            cards_remaining: table.cards_remaining(),
            opponents,
        };
        match self.strategy.choose_swap_or_discard(card, &view)? {
            Decision::Swap => self.place_swap(card, table, opponents),
            Decision::Discard => {
                log::debug!("{} discarded {}", self.name, card);
                table.discard(card);
                Ok(Placed::Discarded)
            }
        }
    }

    /// Puts `drawn` into a face-down slot chosen by the strategy, or onto the
    /// discard pile if none is left. Leaves everything untouched on error.
    fn place_swap(
        &mut self,
        drawn: Card,
        table: &mut Table,
        opponents: &[OpponentView],
    ) -> Result<Placed, TurnError> {
        let hand = self.hand.as_ref().ok_or(TurnError::InvalidState)?;
        if hand.all_face_up() {
            log::debug!("{} has no face-down cards, discarding {}", self.name, drawn);
            table.discard(drawn);
            return Ok(Placed::Forced);
        }

        let view = TurnView {
            name: &self.name,
            hand,
            top: table.top(),
            cards_remaining: table.cards_remaining(),
            opponents,
        };
        let slot = self.strategy.choose_swap_slot(drawn, &view)?;

        let hand = self.hand.as_mut().ok_or(TurnError::InvalidState)?;
        let replaced = hand.swap(slot, drawn).ok_or(TurnError::InvalidSlot(slot))?;
        table.discard(replaced);
        log::debug!(
            "{} swapped {} into position {} for {}",
            self.name,
            drawn,
            slot,
            replaced
        );
        Ok(Placed::Swapped { slot, replaced })
    }

    /// Swaps `drawn` into a face-down slot chosen by the strategy and
    /// discards the replaced card.
    ///
    /// With no face-down slot left, `drawn` is discarded instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy picks a slot that is not face-down or
    /// its prompt fails. If the error comes before the swap, `drawn` was not
    /// placed and the hand is unchanged.
    pub fn swap_card(
        &mut self,
        drawn: Card,
        table: &mut Table,
        opponents: &[OpponentView],
    ) -> Result<(), TurnError> {
        match self.place_swap(drawn, table, opponents)? {
            Placed::Swapped { slot, replaced } => {
                self.strategy.notify(TurnEvent::Swapped { slot, replaced })?;
            }
            Placed::Forced | Placed::Discarded => {
                self.strategy.notify(TurnEvent::ForcedDiscard(drawn))?;
            }
        }
        Ok(())
    }

    /// Turns over a face-down slot chosen by the strategy.
    ///
    /// Does nothing if every slot is already face-up.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy picks a slot that is not face-down or
    /// its prompt fails.
    pub fn turn_card_over(
        &mut self,
        table: &Table,
        opponents: &[OpponentView],
    ) -> Result<(), TurnError> {
        let hand = self.hand.as_ref().ok_or(TurnError::InvalidState)?;
        if hand.all_face_up() {
            log::debug!("{} has no face-down cards to turn over", self.name);
            self.strategy.notify(TurnEvent::NothingToTurn)?;
            return Ok(());
        }

        let view = TurnView {
            name: &self.name,
            hand,
            top: table.top(),
            cards_remaining: table.cards_remaining(),
            opponents,
        };
        let slot = self.strategy.choose_turn_over_slot(&view)?;

        let hand = self.hand.as_mut().ok_or(TurnError::InvalidState)?;
        if !hand.reveal(slot) {
            return Err(TurnError::InvalidSlot(slot));
        }
        log::debug!("{} turned over card at position {}", self.name, slot);
        self.strategy.notify(TurnEvent::TurnedOver(slot))?;
        Ok(())
    }
}

/// Collects the views of every player except the one at `seat`.
pub(crate) fn opponents_of(players: &[Player], seat: usize) -> Vec<OpponentView> {
    players
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != seat)
        .map(|(_, player)| player.opponent_view())
        .collect()
}
