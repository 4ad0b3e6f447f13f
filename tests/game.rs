//! Game integration tests.

use std::collections::HashSet;

use rummyrs::{
    ActionError, Card, ComputerTurn, DECK_SIZE, DeckManager, DiscardPolicy, Game, GameOptions,
    GameState, Hand, Rank, Seat, Suit, TurnOutcome, select_discard,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

const PLAYER_JUNK: [Card; 6] = [
    card(Suit::Hearts, Rank::Two),
    card(Suit::Diamonds, Rank::Four),
    card(Suit::Spades, Rank::Six),
    card(Suit::Clubs, Rank::Eight),
    card(Suit::Hearts, Rank::Ten),
    card(Suit::Diamonds, Rank::Queen),
];

const COMPUTER_JUNK: [Card; 6] = [
    card(Suit::Clubs, Rank::Two),
    card(Suit::Spades, Rank::Four),
    card(Suit::Hearts, Rank::Six),
    card(Suit::Diamonds, Rank::Eight),
    card(Suit::Clubs, Rank::Ten),
    card(Suit::Spades, Rank::Queen),
];

fn options() -> GameOptions {
    GameOptions::default().with_hand_size(6)
}

/// Lays out a deck: player hand, computer hand, then the draw pile with the
/// next draw listed first.
fn stacked(player: &[Card], computer: &[Card], draws: &[Card]) -> Vec<Card> {
    let mut deck = Vec::new();
    deck.extend_from_slice(player);
    deck.extend_from_slice(computer);
    deck.extend(draws.iter().rev());
    deck
}

fn stacked_game(player: &[Card], computer: &[Card], draws: &[Card]) -> Game {
    let mut game = Game::new(options(), 0);
    game.start_game_with_deck(stacked(player, computer, draws));
    game
}

fn assert_conserved(game: &Game) {
    assert_eq!(game.total_cards(), DECK_SIZE);

    let mut seen = HashSet::new();
    let all = game
        .deck()
        .deck()
        .iter()
        .chain(game.deck().discard_pile())
        .chain(game.player_hand().cards())
        .chain(game.computer_hand().cards());
    for card in all {
        assert!(seen.insert(*card), "duplicate card {card}");
    }
}

#[test]
fn new_game_deals_two_hands() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.state(), GameState::WaitingForDraw);
    assert_eq!(game.player_hand().len(), 13);
    assert_eq!(game.computer_hand().len(), 13);
    assert_eq!(game.deck().cards_remaining(), 26);
    assert!(game.deck().discard_pile().is_empty());
    assert_eq!(game.next_turn(), Some(Seat::Player));
    assert_conserved(&game);
}

#[test]
fn start_game_discards_prior_state() {
    let mut game = Game::new(GameOptions::default(), 2);
    let drawn = game.player_draw_from_deck().unwrap();
    let _ = game.player_discard(drawn).unwrap();

    game.start_game();
    assert_eq!(game.state(), GameState::WaitingForDraw);
    assert!(game.deck().discard_pile().is_empty());
    assert_eq!(game.player_hand().len(), 13);
    assert_eq!(game.deck().cards_remaining(), 26);
}

#[test]
fn new_game_deals_from_a_single_shuffle() {
    let deck = DeckManager::new(17);
    let game = Game::new(GameOptions::default(), 17);

    assert_eq!(game.player_hand().cards(), &deck.deck()[..13]);
    assert_eq!(game.computer_hand().cards(), &deck.deck()[13..26]);
    assert_eq!(game.deck().deck(), &deck.deck()[26..]);
}

#[test]
fn same_seed_deals_same_hands() {
    let a = Game::new(GameOptions::default(), 99);
    let b = Game::new(GameOptions::default(), 99);
    assert_eq!(a.player_hand(), b.player_hand());
    assert_eq!(a.computer_hand(), b.computer_hand());
}

#[test]
fn draw_then_discard_sequence_is_enforced() {
    let mut game = stacked_game(
        &PLAYER_JUNK,
        &COMPUTER_JUNK,
        &[card(Suit::Clubs, Rank::Ace), card(Suit::Hearts, Rank::Ace)],
    );

    assert_eq!(
        game.player_discard(PLAYER_JUNK[0]).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(
        game.player_draw_from_discard().unwrap_err(),
        ActionError::EmptyDiscardPile
    );

    let drawn = game.player_draw_from_deck().unwrap();
    assert_eq!(drawn, card(Suit::Clubs, Rank::Ace));
    assert_eq!(game.state(), GameState::WaitingForDiscard);
    assert_eq!(
        game.player_draw_from_deck().unwrap_err(),
        ActionError::InvalidState
    );

    assert_eq!(
        game.player_discard(card(Suit::Spades, Rank::Ace)).unwrap_err(),
        ActionError::CardNotInHand
    );
    assert_eq!(game.state(), GameState::WaitingForDiscard);
    assert_eq!(game.player_hand().len(), 7);
}

#[test]
fn computer_plays_after_a_non_winning_discard() {
    let mut game = stacked_game(
        &PLAYER_JUNK,
        &COMPUTER_JUNK,
        &[card(Suit::Clubs, Rank::Ace), card(Suit::Hearts, Rank::Ace)],
    );

    let drawn = game.player_draw_from_deck().unwrap();
    let outcome = game.player_discard(drawn).unwrap();

    let expected = ComputerTurn {
        drawn: Some(card(Suit::Hearts, Rank::Ace)),
        discarded: Some(card(Suit::Hearts, Rank::Ace)),
    };
    assert_eq!(outcome, TurnOutcome::PlayerTurn(expected));
    assert_eq!(outcome.winner(), None);
    assert_eq!(game.state(), GameState::WaitingForDraw);
    assert_eq!(game.computer_hand().len(), 6);
    assert_eq!(
        game.deck().discard_pile(),
        &[card(Suit::Clubs, Rank::Ace), card(Suit::Hearts, Rank::Ace)]
    );

    let taken = game.player_draw_from_discard().unwrap();
    assert_eq!(taken, card(Suit::Hearts, Rank::Ace));
    assert!(game.player_hand().contains(&taken));
}

#[test]
fn player_wins_with_a_set_and_a_run() {
    let player = [
        card(Suit::Hearts, Rank::Five),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Clubs, Rank::Eight),
        card(Suit::Clubs, Rank::Two),
    ];
    let mut game = stacked_game(&player, &COMPUTER_JUNK, &[card(Suit::Spades, Rank::Eight)]);

    game.player_draw_from_deck().unwrap();
    let outcome = game.player_discard(card(Suit::Clubs, Rank::Two)).unwrap();

    assert_eq!(outcome, TurnOutcome::PlayerWins);
    assert_eq!(game.state(), GameState::GameOver(Seat::Player));
    assert_eq!(game.winner(), Some(Seat::Player));
    assert_eq!(game.next_turn(), None);
    assert_eq!(game.computer_hand().len(), 6);
    assert_eq!(
        game.player_draw_from_deck().unwrap_err(),
        ActionError::GameOver
    );
}

#[test]
fn computer_wins_after_its_discard() {
    let computer = [
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Diamonds, Rank::Four),
        card(Suit::Spades, Rank::Four),
    ];
    let mut game = stacked_game(
        &PLAYER_JUNK,
        &computer,
        &[card(Suit::Spades, Rank::Ace), card(Suit::Hearts, Rank::Queen)],
    );

    let drawn = game.player_draw_from_deck().unwrap();
    let outcome = game.player_discard(drawn).unwrap();

    assert_eq!(
        outcome,
        TurnOutcome::ComputerWins(ComputerTurn {
            drawn: Some(card(Suit::Hearts, Rank::Queen)),
            discarded: Some(card(Suit::Hearts, Rank::Queen)),
        })
    );
    assert_eq!(game.winner(), Some(Seat::Computer));
    assert_eq!(
        game.player_draw_from_discard().unwrap_err(),
        ActionError::GameOver
    );
}

#[test]
fn first_card_discard_policy() {
    let computer = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Diamonds, Rank::Four),
        card(Suit::Spades, Rank::Four),
    ];
    let mut game = Game::new(options().with_computer_discard(DiscardPolicy::First), 0);
    game.start_game_with_deck(stacked(
        &PLAYER_JUNK,
        &computer,
        &[card(Suit::Spades, Rank::Ace), card(Suit::Clubs, Rank::Jack)],
    ));

    let drawn = game.player_draw_from_deck().unwrap();
    let outcome = game.player_discard(drawn).unwrap();

    assert_eq!(outcome.winner(), Some(Seat::Computer));
    assert_eq!(
        outcome.computer_turn(),
        Some(&ComputerTurn {
            drawn: Some(card(Suit::Clubs, Rank::Jack)),
            discarded: Some(card(Suit::Hearts, Rank::Two)),
        })
    );
}

#[test]
fn computer_turn_with_empty_deck() {
    let mut game = stacked_game(&PLAYER_JUNK, &COMPUTER_JUNK, &[card(Suit::Clubs, Rank::Ace)]);

    let drawn = game.player_draw_from_deck().unwrap();
    let outcome = game.player_discard(drawn).unwrap();

    assert_eq!(
        outcome,
        TurnOutcome::PlayerTurn(ComputerTurn {
            drawn: None,
            discarded: Some(card(Suit::Spades, Rank::Queen)),
        })
    );
    assert_eq!(game.computer_hand().len(), 5);
    assert_eq!(
        game.player_draw_from_deck().unwrap_err(),
        ActionError::NoCards
    );
    assert_eq!(
        game.player_draw_from_discard().unwrap(),
        card(Suit::Spades, Rank::Queen)
    );
}

#[test]
fn select_discard_follows_policy() {
    let hand: Hand = [
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Diamonds, Rank::Eight),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        select_discard(&hand, DiscardPolicy::Last),
        Some(card(Suit::Diamonds, Rank::Eight))
    );
    assert_eq!(
        select_discard(&hand, DiscardPolicy::First),
        Some(card(Suit::Hearts, Rank::Five))
    );
    assert_eq!(select_discard(&Hand::new(), DiscardPolicy::Last), None);
}

#[test]
fn cards_are_conserved_through_play() {
    for seed in 0..20 {
        let mut game = Game::new(GameOptions::default(), seed);
        assert_conserved(&game);

        for _ in 0..100 {
            if game.winner().is_some() {
                break;
            }

            let drew = game
                .player_draw_from_deck()
                .or_else(|_| game.player_draw_from_discard());
            if drew.is_err() {
                break;
            }
            assert_conserved(&game);

            let discard = game.player_hand().cards()[0];
            game.player_discard(discard).unwrap();
            assert_conserved(&game);
        }
    }
}
