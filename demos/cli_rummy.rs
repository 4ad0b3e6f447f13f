//! CLI rummy example.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rummyrs::{Card, ComputerTurn, Game, GameOptions, GameState, Hand, Suit, TurnOutcome};

fn main() {
    println!("Rummy CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    println!("New Game Started! Draw a card or discard.");

    loop {
        if game.winner().is_some() {
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.start_game();
                    println!("New Game Started! Draw a card or discard.");
                }
                _ => {
                    println!("Goodbye.");
                    return;
                }
            }
        }

        print_table(&game);

        if game.state() == GameState::WaitingForDraw {
            let result = match prompt_line("Draw from [d]eck or [p]ile: ").as_str() {
                "d" | "deck" => game.player_draw_from_deck(),
                "p" | "pile" => game.player_draw_from_discard(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };
            match result {
                Ok(card) => println!("You drew {}", format_card(&card)),
                Err(err) => println!("Draw error: {err}"),
            }
            continue;
        }

        let input = prompt_line("Discard which card (e.g. 10h, qs): ");
        if input == "q" || input == "quit" {
            return;
        }
        let card = match input.parse::<Card>() {
            Ok(card) => card,
            Err(err) => {
                println!("Cannot read card: {err}");
                continue;
            }
        };

        match game.player_discard(card) {
            Ok(TurnOutcome::PlayerWins) => {
                print_table(&game);
                println!("You win!");
            }
            Ok(TurnOutcome::ComputerWins(turn)) => {
                print_computer_turn(&turn);
                println!("Computer wins!");
                println!("Computer: {}", format_hand(game.computer_hand()));
            }
            Ok(TurnOutcome::PlayerTurn(turn)) => {
                print_computer_turn(&turn);
                println!("Your turn!");
            }
            Err(err) => println!("Discard error: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    read_command(&mut io::stdin().lock())
}

/// Reads one command line. End of input reads as `q`.
fn read_command(reader: &mut impl BufRead) -> String {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
        Err(_) => String::new(),
    }
}

fn print_table(game: &Game) {
    let remaining = game.deck().cards_remaining();
    let top = game
        .deck()
        .top_discard()
        .map_or_else(|| "(empty)".to_string(), format_card);
    println!("\nDeck: {remaining} cards | Discard pile: {top}");

    let hand = game.player_hand();
    println!("Your hand: {}", format_hand(hand));
    for set in hand.sets() {
        println!("  set: {}", format_cards(&set));
    }
    for run in hand.runs() {
        println!("  run: {}", format_cards(&run));
    }
    println!();
}

fn print_computer_turn(turn: &ComputerTurn) {
    match (turn.drawn, turn.discarded) {
        (Some(_), Some(card)) => {
            println!("Computer drew a card and discarded {}", format_card(&card));
        }
        (None, Some(card)) => {
            println!("Deck is empty. Computer discarded {}", format_card(&card));
        }
        (_, None) => println!("Computer had nothing to discard."),
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    format_cards(hand.cards())
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
