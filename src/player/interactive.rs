use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PromptError;
use crate::hand::{HAND_SIZE, Hand};

use super::{Action, Decision, Strategy, TurnEvent, TurnView};

/// Slots whose value the owner may look at while they are face-down.
const PEEK_SLOTS: usize = 2;

/// A text channel to a human (or a script standing in for one).
pub trait Prompt {
    /// Shows a line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the output channel is closed.
    fn show(&mut self, message: &str) -> Result<(), PromptError>;

    /// Shows `question` and waits for a line of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input channel is closed.
    fn ask(&mut self, question: &str) -> Result<String, PromptError>;
}

/// A strategy that asks a [`Prompt`] for every decision.
///
/// Answers are re-requested until they are valid, so a typo never ends the
/// turn. Only a closed prompt does.
#[derive(Debug, Clone)]
pub struct InteractiveStrategy<P> {
    prompt: P,
}

impl<P: Prompt> InteractiveStrategy<P> {
    /// Creates an interactive strategy over `prompt`.
    pub const fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Returns the underlying prompt.
    pub fn into_inner(self) -> P {
        self.prompt
    }

    fn ask_choice(&mut self, question: &str, choices: &[&str]) -> Result<String, PromptError> {
        loop {
            let answer = self.prompt.ask(question)?.trim().to_lowercase();
            if choices.contains(&answer.as_str()) {
                return Ok(answer);
            }
        }
    }

    fn ask_slot(&mut self, hand: &Hand, question: &str) -> Result<usize, PromptError> {
        self.prompt.show("Your face-down card positions are:")?;
        for slot in hand.face_down_slots() {
            let line = match hand.card(slot) {
                Some(card) if slot < PEEK_SLOTS => format!("{slot}: {card}"),
                _ => format!("{slot} : ???"),
            };
            self.prompt.show(&line)?;
        }

        loop {
            let answer = self.prompt.ask(question)?;
            match answer.trim().parse::<usize>() {
                Ok(slot) if hand.is_face_down(slot) => return Ok(slot),
                Ok(slot) if slot < HAND_SIZE => {
                    self.prompt
                        .show("That card is already face up. Choose a face-down card.")?;
                }
                _ => self
                    .prompt
                    .show("Invalid input. Please enter a valid card position.")?,
            }
        }
    }
}

fn describe_own_hand(hand: &Hand) -> String {
    let slots: Vec<String> = (0..HAND_SIZE)
        .map(|slot| match hand.card(slot) {
            Some(card) if hand.is_face_up(slot) => format!("{} (up)", card.value()),
            Some(card) if slot < PEEK_SLOTS => format!("{} (down)", card.value()),
            _ => String::from("???"),
        })
        .collect();
    slots.join(", ")
}

fn describe_visible(visible: &[Option<Card>; HAND_SIZE]) -> String {
    let slots: Vec<String> = visible
        .iter()
        .map(|card| card.map_or_else(|| String::from("X"), |card| format!("{card}")))
        .collect();
    slots.join(", ")
}

impl<P: Prompt> Strategy for InteractiveStrategy<P> {
    fn display_state(&mut self, view: &TurnView<'_>) -> Result<(), PromptError> {
        self.prompt.show(&format!("\n--- {}'s Turn ---", view.name))?;
        for opponent in view.opponents {
            self.prompt.show(&format!(
                "{}'s hand: {}",
                opponent.name,
                describe_visible(&opponent.visible)
            ))?;
        }
        self.prompt
            .show(&format!("\nYour Hand: [{}]", describe_own_hand(view.hand)))?;
        if let Some(top) = view.top {
            self.prompt.show(&format!("Stack: {}", top.rank))?;
        }
        Ok(())
    }

    fn choose_action(&mut self, _view: &TurnView<'_>) -> Result<Action, PromptError> {
        let answer = self.ask_choice(
            "Do you want to (s)wap for the current card, (d)raw a new one or (t)urn over one of your cards? ",
            &["s", "d", "t"],
        )?;
        Ok(match answer.as_str() {
            "s" => Action::TakeDiscard,
            "d" => Action::DrawDeck,
            _ => Action::TurnOver,
        })
    }

    fn choose_swap_or_discard(
        &mut self,
        _drawn: Card,
        _view: &TurnView<'_>,
    ) -> Result<Decision, PromptError> {
        let answer = self.ask_choice(
            "Do you want to (s)wap with a card in your hand, or (d)iscard the drawn card? ",
            &["s", "d"],
        )?;
        Ok(if answer == "s" {
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
        self.ask_slot(
            view.hand,
            "Enter the position (0-3) of the card you want to turn over and swap: ",
        )
    }

    fn choose_turn_over_slot(&mut self, view: &TurnView<'_>) -> Result<usize, PromptError> {
        self.ask_slot(
            view.hand,
            "Enter the position (0-3) of the card you want to turn over: ",
        )
    }

    fn notify(&mut self, event: TurnEvent) -> Result<(), PromptError> {
        match event {
            TurnEvent::Drew(card) => self.prompt.show(&format!("You drew: {}", card.rank)),
            TurnEvent::TookDiscard(card) => self
                .prompt
                .show(&format!("You took from discard pile: {}", card.rank)),
            TurnEvent::ForcedDiscard(_) => self
                .prompt
                .show("All your cards are already face up. You must discard."),
            TurnEvent::NothingToTurn => self
                .prompt
                .show("All your cards are already face up. You can't turn another one up."),
            TurnEvent::Swapped { .. } | TurnEvent::TurnedOver(_) => Ok(()),
        }
    }
}

/// A [`Prompt`] over a line reader and a writer, usually stdin and stdout.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

#[cfg(feature = "std")]
impl ConsolePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Creates a prompt on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

#[cfg(feature = "std")]
impl<R, W> ConsolePrompt<R, W> {
    /// Creates a prompt reading lines from `reader` and writing to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the writer, with everything shown so far.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(feature = "std")]
impl<R: std::io::BufRead, W: std::io::Write> Prompt for ConsolePrompt<R, W> {
    fn show(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{message}").map_err(|_| PromptError::Closed)
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.writer, "{question}").map_err(|_| PromptError::Closed)?;
        self.writer.flush().map_err(|_| PromptError::Closed)?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => Err(PromptError::Closed),
            Ok(_) => Ok(line),
        }
    }
}
