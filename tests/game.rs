//! Game integration tests.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use golfrs::{
    Action, Card, DECK_SIZE, DealError, Decision, Game, GameOptions, GameState, GreedyStrategy,
    HAND_SIZE, Hand, InteractiveStrategy, ParseCardError, PlayError, Player, Prompt, PromptError,
    RandomStrategy, Rank, SetupError, Strategy, Suit, Table, Tally, TurnError, TurnView,
    full_deck, hand_score,
};

fn card(text: &str) -> Card {
    text.parse().unwrap()
}

fn hand(texts: [&str; HAND_SIZE]) -> Hand {
    Hand::new(texts.map(card))
}

fn set_deck_from_draws(game: &mut Game, draws: &[&str]) {
    let mut deck: Vec<Card> = draws.iter().map(|text| card(text)).collect();
    deck.reverse();
    game.table_mut().deck = deck;
}

fn all_cards(game: &Game) -> Vec<Card> {
    let table = game.table();
    let mut cards: Vec<Card> = table.deck.iter().chain(&table.discard).copied().collect();
    for player in game.players() {
        if let Some(hand) = player.hand() {
            cards.extend(hand.cards());
        }
    }
    cards
}

fn assert_full_deck(game: &Game) {
    let cards = all_cards(game);
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(game.cards_in_play(), DECK_SIZE);
    let unique: HashSet<Card> = cards.into_iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

/// Always turns over the first face-down card.
struct TurnOverFirst;

impl Strategy for TurnOverFirst {
    fn choose_action(&mut self, _view: &TurnView<'_>) -> Result<Action, PromptError> {
        Ok(Action::TurnOver)
    }

    fn choose_swap_or_discard(
        &mut self,
        _drawn: Card,
        _view: &TurnView<'_>,
    ) -> Result<Decision, PromptError> {
        Ok(Decision::Discard)
    }

    fn choose_swap_slot(
        &mut self,
        _drawn: Card,
        view: &TurnView<'_>,
    ) -> Result<usize, PromptError> {
        Ok(view.hand.face_down_slots()[0])
    }

    fn choose_turn_over_slot(&mut self, view: &TurnView<'_>) -> Result<usize, PromptError> {
        Ok(view.hand.face_down_slots()[0])
    }
}

/// Turns over a slot that does not exist.
struct OutOfRange;

impl Strategy for OutOfRange {
    fn choose_action(&mut self, _view: &TurnView<'_>) -> Result<Action, PromptError> {
        Ok(Action::TurnOver)
    }

    fn choose_swap_or_discard(
        &mut self,
        _drawn: Card,
        _view: &TurnView<'_>,
    ) -> Result<Decision, PromptError> {
        Ok(Decision::Swap)
    }

    fn choose_swap_slot(
        &mut self,
        _drawn: Card,
        _view: &TurnView<'_>,
    ) -> Result<usize, PromptError> {
        Ok(7)
    }

    fn choose_turn_over_slot(&mut self, _view: &TurnView<'_>) -> Result<usize, PromptError> {
        Ok(7)
    }
}

/// Takes a card with `action`, keeps it, and asks to swap it into `slot`.
struct SwapInto {
    action: Action,
    slot: usize,
}

impl Strategy for SwapInto {
    fn choose_action(&mut self, _view: &TurnView<'_>) -> Result<Action, PromptError> {
        Ok(self.action)
    }

    fn choose_swap_or_discard(
        &mut self,
        _drawn: Card,
        _view: &TurnView<'_>,
    ) -> Result<Decision, PromptError> {
        Ok(Decision::Swap)
    }

    fn choose_swap_slot(
        &mut self,
        _drawn: Card,
        _view: &TurnView<'_>,
    ) -> Result<usize, PromptError> {
        Ok(self.slot)
    }

    fn choose_turn_over_slot(&mut self, view: &TurnView<'_>) -> Result<usize, PromptError> {
        Ok(view.hand.face_down_slots()[0])
    }
}

fn dealt_game(first: impl Strategy + 'static) -> Game {
    let players = vec![
        Player::new("First", first),
        Player::new("Second", GreedyStrategy::new()),
    ];
    let mut game = Game::new(GameOptions::default(), players, 9).unwrap();
    game.deal().unwrap();
    game
}

#[derive(Clone, Default)]
struct Scripted {
    answers: Rc<RefCell<VecDeque<&'static str>>>,
    shown: Rc<RefCell<Vec<String>>>,
}

impl Scripted {
    fn new(answers: &[&'static str]) -> Self {
        Self {
            answers: Rc::new(RefCell::new(answers.iter().copied().collect())),
            shown: Rc::default(),
        }
    }

    fn saw(&self, text: &str) -> usize {
        self.shown
            .borrow()
            .iter()
            .filter(|line| line.contains(text))
            .count()
    }
}

impl Prompt for Scripted {
    fn show(&mut self, message: &str) -> Result<(), PromptError> {
        self.shown.borrow_mut().push(message.to_owned());
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.shown.borrow_mut().push(question.to_owned());
        self.answers
            .borrow_mut()
            .pop_front()
            .map(|answer| format!("{answer}\n"))
            .ok_or(PromptError::Closed)
    }
}

fn table_with(deck_draws: &[&str], discard: &[&str]) -> Table {
    let mut table = Table::new(1);
    table.deck = deck_draws.iter().rev().map(|text| card(text)).collect();
    table.discard = discard.iter().map(|text| card(text)).collect();
    table
}

#[test]
fn card_values_follow_rank() {
    assert_eq!(card("K-H").value(), 0);
    assert_eq!(card("A-S").value(), 10);
    assert_eq!(card("9-D").value(), 9);
    assert_eq!(card("J-C").value(), 10);
    assert_eq!(card("Q-H").value(), 10);
    assert_eq!(card("10-S").value(), 10);
    assert_eq!(card("2-S").value(), 2);
}

#[test]
fn card_text_encoding() {
    let ten = Card::new(Rank::Ten, Suit::Hearts);
    assert_eq!(ten.to_string(), "10-H");
    assert_eq!(card("10-H"), ten);
    assert_eq!(card("Q-C"), Card::new(Rank::Queen, Suit::Clubs));

    assert_eq!("QC".parse::<Card>(), Err(ParseCardError::MissingSeparator));
    assert_eq!("1-H".parse::<Card>(), Err(ParseCardError::InvalidRank));
    assert_eq!("K-X".parse::<Card>(), Err(ParseCardError::InvalidSuit));
}

#[test]
fn full_deck_has_every_card_once() {
    let deck = full_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<Card> = deck.into_iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn pairs_cancel() {
    assert_eq!(hand(["5-H", "5-D", "J-C", "J-S"]).score(), 0);
    assert_eq!(hand(["5-H", "5-D", "J-C", "2-S"]).score(), 12);
    assert_eq!(hand(["8-H", "8-D", "8-C", "8-S"]).score(), 0);
    assert_eq!(hand(["2-H", "3-D", "4-C", "K-S"]).score(), 9);
}

#[test]
fn three_of_a_kind_leaves_one_card() {
    assert_eq!(hand(["7-H", "7-D", "7-C", "2-S"]).score(), 9);
    assert_eq!(hand(["A-H", "A-D", "A-C", "K-S"]).score(), 10);
}

#[test]
fn score_counts_large_groups_by_parity() {
    assert_eq!(hand_score(&[card("7-H"); 256]), 0);
    assert_eq!(hand_score(&[card("7-H"); 257]), 7);
    assert_eq!(hand_score(&[card("A-S"); 1001]), 10);
}

#[test]
fn score_ignores_order() {
    let cards = [card("7-H"), card("7-D"), card("Q-C"), card("3-S")];
    let expected = hand_score(&cards);
    assert_eq!(expected, 13);

    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    let order = [a, b, c, d];
                    let unique: HashSet<usize> = order.into_iter().collect();
                    if unique.len() != 4 {
                        continue;
                    }
                    let permuted = order.map(|index| cards[index]);
                    assert_eq!(hand_score(&permuted), expected);
                }
            }
        }
    }
}

#[test]
fn hand_reveal_and_swap() {
    let mut hand = hand(["5-H", "K-S", "9-C", "2-D"]);
    assert_eq!(hand.face_down_slots(), vec![0, 1, 2, 3]);
    assert_eq!(hand.visible(), [None; HAND_SIZE]);

    assert!(hand.reveal(1));
    assert!(!hand.reveal(1));
    assert!(!hand.reveal(4));
    assert_eq!(hand.visible()[1], Some(card("K-S")));

    assert_eq!(hand.swap(2, card("3-H")), Some(card("9-C")));
    assert_eq!(hand.swap(2, card("4-H")), None);
    assert_eq!(hand.swap(9, card("4-H")), None);
    assert_eq!(hand.face_up_slots(), vec![1, 2]);
    assert!(!hand.all_face_up());

    assert!(hand.reveal(0));
    assert!(hand.reveal(3));
    assert!(hand.all_face_up());
    assert!(hand.face_down_slots().is_empty());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default().with_players(3).with_turn_limit(40);
    assert_eq!(options.players, 3);
    assert_eq!(options.turn_limit, Some(40));
    assert_eq!(options.without_turn_limit().turn_limit, None);
    assert_eq!(GameOptions::default().players, 2);
}

#[test]
fn setup_errors() {
    let err = Game::new(
        GameOptions::default().with_players(1),
        vec![Player::new("Solo", GreedyStrategy::new())],
        1,
    )
    .unwrap_err();
    assert_eq!(err, SetupError::PlayerCount(1));

    let players = (0..5)
        .map(|i| Player::new(format!("P{i}"), GreedyStrategy::new()))
        .collect();
    let err = Game::new(GameOptions::default().with_players(5), players, 1).unwrap_err();
    assert_eq!(err, SetupError::PlayerCount(5));

    let err = Game::new(
        GameOptions::default().with_players(3),
        vec![
            Player::new("A", GreedyStrategy::new()),
            Player::new("B", GreedyStrategy::new()),
        ],
        1,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SetupError::PlayerMismatch {
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn console_players_fill_every_seat() {
    let game = Game::with_console_players(GameOptions::default().with_players(3), 1).unwrap();

    assert_eq!(game.player_count(), 3);
    let names: Vec<&str> = game.players().iter().map(Player::name).collect();
    assert_eq!(names, ["Player 1", "Player 2", "Player 3"]);
    assert!(game.players().iter().all(|player| player.hand().is_none()));
    assert_eq!(game.state(), GameState::WaitingToDeal);
    assert_eq!(game.turns(), 0);

    let err = Game::with_console_players(GameOptions::default().with_players(5), 1).unwrap_err();
    assert_eq!(err, SetupError::PlayerCount(5));
}

#[test]
fn deal_gives_four_cards_each_and_seeds_discard() {
    let players = (0..4)
        .map(|i| Player::new(format!("P{i}"), GreedyStrategy::new()))
        .collect();
    let mut game = Game::new(GameOptions::default().with_players(4), players, 3).unwrap();
    assert_full_deck(&game);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.table().discard.len(), 1);
    assert_eq!(game.table().cards_remaining(), DECK_SIZE - 4 * HAND_SIZE - 1);
    for player in game.players() {
        let hand = player.hand().unwrap();
        assert_eq!(hand.face_down_slots().len(), HAND_SIZE);
    }
    assert_full_deck(&game);

    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn deal_without_enough_cards_fails() {
    let players = vec![
        Player::new("A", GreedyStrategy::new()),
        Player::new("B", GreedyStrategy::new()),
    ];
    let mut game = Game::new(GameOptions::default(), players, 1).unwrap();
    game.table_mut().deck.truncate(8);

    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(game.state(), GameState::WaitingToDeal);
    assert!(game.players().iter().all(|player| player.hand().is_none()));
    assert_eq!(
        game.play().unwrap_err(),
        PlayError::Deal(DealError::NotEnoughCards)
    );
}

#[test]
fn reshuffle_keeps_top_card() {
    let mut table = table_with(&[], &["2-H", "3-H", "4-H", "5-H"]);
    table.reshuffle();

    assert_eq!(table.discard, vec![card("5-H")]);
    let mut deck = table.deck.clone();
    deck.sort_by_key(|card| card.rank);
    assert_eq!(deck, vec![card("2-H"), card("3-H"), card("4-H")]);
    assert_eq!(table.reshuffles(), 1);
}

#[test]
fn draw_from_empty_deck_reshuffles() {
    let mut table = table_with(&[], &["2-H", "3-H", "4-H"]);
    let drawn = table.draw().unwrap();

    assert!(drawn == card("2-H") || drawn == card("3-H"));
    assert_eq!(table.discard, vec![card("4-H")]);
    assert_eq!(table.cards_remaining(), 1);
    assert_eq!(table.reshuffles(), 1);
    assert_eq!(table.draws(), 1);
}

#[test]
fn reshuffle_with_single_discard_does_nothing() {
    let mut table = table_with(&[], &["4-H"]);
    table.reshuffle();
    assert!(table.deck.is_empty());
    assert_eq!(table.discard, vec![card("4-H")]);
    assert_eq!(table.reshuffles(), 0);
    assert_eq!(table.draw(), None);
}

#[test]
fn draws_before_first_reshuffle_are_bounded() {
    for players in 2..=4 {
        let mut table = Table::new(players as u64);
        let dealt: Vec<Card> = (0..players * HAND_SIZE)
            .map(|_| table.deck.pop().unwrap())
            .collect();
        let first = table.deck.pop().unwrap();
        table.discard(first);

        let mut draws = 0;
        while table.reshuffles() == 0 {
            let card = table.draw().unwrap();
            table.discard(card);
            if table.reshuffles() == 0 {
                draws += 1;
            }
        }

        assert_eq!(draws, DECK_SIZE - players * HAND_SIZE - 1);
        assert_eq!(
            table.deck.len() + table.discard.len() + dealt.len(),
            DECK_SIZE
        );
    }
}

#[test]
fn greedy_takes_low_discard_and_replaces_highest_card() {
    let mut player = Player::new("Greedy", GreedyStrategy::new());
    player.set_hand(hand(["5-H", "K-S", "9-C", "2-D"]));
    let mut table = table_with(&["8-S"], &["Q-D", "3-H"]);

    let finished = player.make_move(&mut table, &[]).unwrap();

    assert!(!finished);
    let hand = player.hand().unwrap();
    assert_eq!(hand.card(2), Some(card("3-H")));
    assert_eq!(hand.face_up_slots(), vec![2]);
    assert_eq!(table.discard, vec![card("Q-D"), card("9-C")]);
    assert_eq!(table.deck, vec![card("8-S")]);
}

#[test]
fn greedy_discards_high_draw_and_turns_over_lowest_card() {
    let mut player = Player::new("Greedy", GreedyStrategy::new());
    player.set_hand(hand(["5-H", "K-S", "9-C", "2-D"]));
    let mut table = table_with(&["8-S"], &["Q-D"]);

    player.make_move(&mut table, &[]).unwrap();

    let hand = player.hand().unwrap();
    assert_eq!(hand.face_up_slots(), vec![1]);
    assert_eq!(hand.card(1), Some(card("K-S")));
    assert_eq!(table.discard, vec![card("Q-D"), card("8-S")]);
    assert!(table.deck.is_empty());
}

#[test]
fn greedy_keeps_low_draw() {
    let mut player = Player::new("Greedy", GreedyStrategy::new());
    let mut start = hand(["5-H", "K-S", "9-C", "J-D"]);
    start.reveal(2);
    player.set_hand(start);
    let mut table = table_with(&["4-S"], &["7-D"]);

    player.make_move(&mut table, &[]).unwrap();

    let hand = player.hand().unwrap();
    assert_eq!(hand.card(3), Some(card("4-S")));
    assert_eq!(hand.face_up_slots(), vec![2, 3]);
    assert_eq!(table.top(), Some(card("J-D")));
}

#[test]
fn swap_with_no_face_down_slot_discards() {
    let mut player = Player::new("Greedy", GreedyStrategy::new());
    let mut start = hand(["5-H", "K-S", "9-C", "J-D"]);
    for slot in 0..HAND_SIZE {
        start.reveal(slot);
    }
    player.set_hand(start.clone());
    let mut table = table_with(&["4-S"], &["7-D"]);

    player.swap_card(card("4-S"), &mut table, &[]).unwrap();
    player.turn_card_over(&table, &[]).unwrap();

    assert_eq!(player.hand(), Some(&start));
    assert_eq!(table.top(), Some(card("4-S")));
}

#[test]
fn invalid_slot_from_strategy_is_an_error() {
    let mut player = Player::new("Broken", OutOfRange);
    player.set_hand(hand(["5-H", "K-S", "9-C", "J-D"]));
    let mut table = table_with(&["4-S"], &["7-D"]);

    assert_eq!(
        player.make_move(&mut table, &[]).unwrap_err(),
        TurnError::InvalidSlot(7)
    );
}

#[test]
fn failed_swap_returns_drawn_card_to_deck() {
    let mut game = dealt_game(SwapInto {
        action: Action::DrawDeck,
        slot: 7,
    });
    let deck_before = game.table().deck.clone();
    let discard_before = game.table().discard.clone();
    let hand_before = game.players()[0].hand().cloned();

    assert_eq!(game.play_turn().unwrap_err(), TurnError::InvalidSlot(7));

    assert_eq!(game.cards_in_play(), DECK_SIZE);
    assert_full_deck(&game);
    assert_eq!(game.table().deck, deck_before);
    assert_eq!(game.table().discard, discard_before);
    assert_eq!(game.table().draws(), 0);
    assert_eq!(game.players()[0].hand().cloned(), hand_before);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.current_turn().player_index, 0);
    assert_eq!(game.turns(), 0);
}

#[test]
fn failed_swap_returns_taken_card_to_discard() {
    let mut game = dealt_game(SwapInto {
        action: Action::TakeDiscard,
        slot: 7,
    });
    let top = game.table().top();

    assert_eq!(game.play_turn().unwrap_err(), TurnError::InvalidSlot(7));

    assert_full_deck(&game);
    assert_eq!(game.table().top(), top);
    assert_eq!(game.table().discard.len(), 1);
}

#[test]
fn failed_swap_onto_face_up_slot_keeps_hand() {
    let mut player = Player::new("Broken", SwapInto {
        action: Action::DrawDeck,
        slot: 1,
    });
    let mut start = hand(["5-H", "K-S", "9-C", "J-D"]);
    start.reveal(1);
    player.set_hand(start.clone());
    let mut table = table_with(&["4-S"], &["7-D"]);

    assert_eq!(
        player.make_move(&mut table, &[]).unwrap_err(),
        TurnError::InvalidSlot(1)
    );
    assert_eq!(player.hand(), Some(&start));
    assert_eq!(table.deck, vec![card("4-S")]);
    assert_eq!(table.discard, vec![card("7-D")]);
}

#[test]
fn turn_without_hand_is_invalid() {
    let mut player = Player::new("Empty", GreedyStrategy::new());
    let mut table = table_with(&["4-S"], &["7-D"]);
    assert_eq!(
        player.make_move(&mut table, &[]).unwrap_err(),
        TurnError::InvalidState
    );
}

#[test]
fn interactive_reprompts_until_valid_slot() {
    let prompt = Scripted::new(&["x", "t", "9", "abc", "1", "2"]);
    let mut start = hand(["5-H", "K-S", "9-C", "J-D"]);
    start.reveal(1);
    let mut player = Player::new("Human", InteractiveStrategy::new(prompt.clone()));
    player.set_hand(start);
    let mut table = table_with(&["4-S"], &["7-D"]);

    let finished = player.make_move(&mut table, &[]).unwrap();

    assert!(!finished);
    assert_eq!(player.hand().unwrap().face_up_slots(), vec![1, 2]);
    assert_eq!(prompt.saw("Invalid input"), 2);
    assert_eq!(prompt.saw("already face up"), 1);
    assert_eq!(prompt.saw("Do you want to"), 2);
    assert_eq!(prompt.saw("Stack: 7"), 1);
    assert_eq!(table.deck, vec![card("4-S")]);
}

#[test]
fn interactive_draw_and_swap() {
    let prompt = Scripted::new(&["D", " s ", "3"]);
    let mut player = Player::new("Human", InteractiveStrategy::new(prompt.clone()));
    player.set_hand(hand(["5-H", "K-S", "9-C", "J-D"]));
    let mut table = table_with(&["4-S"], &["7-D"]);

    player.make_move(&mut table, &[]).unwrap();

    let hand = player.hand().unwrap();
    assert_eq!(hand.card(3), Some(card("4-S")));
    assert_eq!(hand.face_up_slots(), vec![3]);
    assert_eq!(table.top(), Some(card("J-D")));
    assert_eq!(prompt.saw("You drew: 4"), 1);
    assert_eq!(prompt.saw("0: 5-H"), 1);
    assert_eq!(prompt.saw("3 : ???"), 1);
}

#[test]
fn interactive_shows_opponents_with_hidden_cards() {
    let prompt = Scripted::new(&["t", "0"]);
    let mut human = Player::new("Human", InteractiveStrategy::new(prompt.clone()));
    human.set_hand(hand(["5-H", "K-S", "9-C", "J-D"]));
    let mut other = Player::new("Bot", GreedyStrategy::new());
    let mut other_hand = hand(["2-H", "3-S", "4-C", "6-D"]);
    other_hand.reveal(1);
    other.set_hand(other_hand);
    let mut table = table_with(&["4-S"], &["7-D"]);

    human
        .make_move(&mut table, &[other.opponent_view()])
        .unwrap();

    assert_eq!(prompt.saw("Bot's hand: X, 3-S, X, X"), 1);
    assert_eq!(prompt.saw("Your Hand: [5 (down), 0 (down), ???, ???]"), 1);
}

#[test]
fn interactive_closed_prompt_fails_turn() {
    let prompt = Scripted::new(&["t"]);
    let mut player = Player::new("Human", InteractiveStrategy::new(prompt));
    player.set_hand(hand(["5-H", "K-S", "9-C", "J-D"]));
    let mut table = table_with(&["4-S"], &["7-D"]);

    assert_eq!(
        player.make_move(&mut table, &[]).unwrap_err(),
        TurnError::Prompt(PromptError::Closed)
    );
}

#[test]
fn interactive_closed_prompt_after_draw_keeps_every_card() {
    let prompt = Scripted::new(&["d"]);
    let mut game = dealt_game(InteractiveStrategy::new(prompt.clone()));
    let deck_before = game.table().deck.clone();

    assert_eq!(
        game.play_turn().unwrap_err(),
        TurnError::Prompt(PromptError::Closed)
    );

    assert_eq!(prompt.saw("You drew"), 1);
    assert_eq!(prompt.saw("(d)iscard the drawn card"), 1);
    assert_full_deck(&game);
    assert_eq!(game.table().deck, deck_before);
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn console_prompt_reads_lines() {
    use golfrs::ConsolePrompt;
    use std::io::Cursor;

    let mut prompt = ConsolePrompt::new(Cursor::new("t\n"), Vec::new());
    prompt.show("hello").unwrap();
    assert_eq!(prompt.ask("Action? ").unwrap(), "t\n");
    assert_eq!(prompt.ask("Again? ").unwrap_err(), PromptError::Closed);

    let written = String::from_utf8(prompt.into_writer()).unwrap();
    assert_eq!(written, "hello\nAction? Again? ");
}

#[test]
fn round_ends_when_first_player_reveals_everything() {
    let players = vec![
        Player::new("Alice", TurnOverFirst),
        Player::new("Bob", TurnOverFirst),
    ];
    let mut game = Game::new(GameOptions::default(), players, 1).unwrap();
    set_deck_from_draws(
        &mut game,
        &[
            "5-H", "5-D", "2-C", "3-C", "9-H", "9-S", "K-C", "6-S", "7-D",
        ],
    );

    let result = game.play().unwrap();

    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(result.turns, 7);
    assert_eq!(result.finished_by, "Alice");
    assert_eq!(result.scores(), vec![("Alice", 5), ("Bob", 6)]);
    assert_eq!(result.winner().unwrap().name, "Alice");
    assert!(!result.is_tie());
    let bob = &game.players()[1];
    assert_eq!(bob.hand().unwrap().face_up_slots(), vec![0, 1, 2]);
    assert_eq!(game.play_turn().unwrap_err(), TurnError::InvalidState);
}

#[test]
fn ties_keep_seating_order() {
    let players = vec![
        Player::new("Alice", TurnOverFirst),
        Player::new("Bob", TurnOverFirst),
        Player::new("Carol", TurnOverFirst),
    ];
    let mut game = Game::new(GameOptions::default().with_players(3), players, 1).unwrap();
    set_deck_from_draws(
        &mut game,
        &[
            "Q-H", "2-D", "3-C", "4-C", // Alice: 19
            "5-H", "5-D", "2-C", "3-D", // Bob: 5
            "9-H", "9-S", "K-C", "5-S", // Carol: 5
            "7-D",
        ],
    );

    let result = game.play().unwrap();

    assert_eq!(result.turns, 10);
    assert_eq!(result.scores(), vec![("Bob", 5), ("Carol", 5), ("Alice", 19)]);
    assert!(result.is_tie());
    assert_eq!(result.score_of("Alice"), Some(19));
    assert_eq!(result.score_of("Dave"), None);
}

#[test]
fn random_players_conserve_cards_and_finish() {
    for seed in 0..20 {
        let players = vec![
            Player::new("Alice", RandomStrategy::new(seed)),
            Player::new("Bob", RandomStrategy::new(seed + 100)),
        ];
        let mut game = Game::new(GameOptions::default(), players, seed).unwrap();
        game.deal().unwrap();
        assert_full_deck(&game);

        let mut turns = 0;
        while game.state() == GameState::PlayerTurn {
            game.play_turn().unwrap();
            assert_full_deck(&game);
            turns += 1;
            assert!(turns <= 1000);
        }

        let result = game.result().unwrap();
        assert_eq!(result.standings.len(), 2);
        assert!(result.standings[0].score <= result.standings[1].score);
        assert!(game.players().iter().any(|p| p.hand().unwrap().all_face_up()));
    }
}

#[test]
fn greedy_table_of_four_plays_out() {
    let players = ["Alice", "Bob", "Carol", "Dave"]
        .into_iter()
        .map(|name| Player::new(name, GreedyStrategy::new()))
        .collect();
    let mut game = Game::new(GameOptions::default().with_players(4), players, 9).unwrap();

    let result = game.play().unwrap();

    assert_eq!(result.standings.len(), 4);
    assert!(
        result
            .standings
            .windows(2)
            .all(|pair| pair[0].score <= pair[1].score)
    );
    for standing in &result.standings {
        assert_eq!(standing.score, standing.hand.score());
    }
    assert_full_deck(&game);
}

#[test]
fn turn_limit_stops_play() {
    let players = vec![
        Player::new("Alice", TurnOverFirst),
        Player::new("Bob", TurnOverFirst),
    ];
    let mut game = Game::new(GameOptions::default().with_turn_limit(3), players, 1).unwrap();

    assert_eq!(game.play().unwrap_err(), PlayError::TurnLimitReached(3));
    assert_eq!(game.turns(), 3);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.current_player().unwrap().name(), "Bob");
    assert_eq!(game.current_turn().round, 2);
}

#[test]
fn tally_counts_wins_and_draws() {
    let tally = Tally::simulate(30, |seed| {
        let players = vec![
            Player::new("Alice", GreedyStrategy::new()),
            Player::new("Bob", RandomStrategy::new(seed)),
        ];
        Game::new(GameOptions::default(), players, seed).unwrap()
    })
    .unwrap();

    assert_eq!(tally.games, 30);
    let alice = tally.player("Alice").unwrap();
    let bob = tally.player("Bob").unwrap();
    assert_eq!(alice.wins + bob.wins + tally.draws, 30);

    let rates = tally.win_rate("Alice").unwrap() + tally.win_rate("Bob").unwrap() + tally.draw_rate();
    assert!((rates - 100.0).abs() < 1e-9);
    assert!(tally.average_score("Alice").unwrap() >= 0.0);
    assert_eq!(tally.win_rate("Nobody"), None);
}
