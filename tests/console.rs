//! Console front end tests.

use std::io::{self, Cursor, Write};

use bjsim::console::{ConsoleDecider, HIT_PROMPT, prompt_decision};
use bjsim::{Card, Deck, Decision, Game, GameOptions, Rank, Suit};

fn prompt(input: &str) -> (Decision, String) {
    let mut output = Vec::new();
    let decision = prompt_decision(&mut Cursor::new(input), &mut output, HIT_PROMPT).unwrap();
    (decision, String::from_utf8(output).unwrap())
}

#[test]
fn accepts_first_character_only() {
    assert_eq!(prompt("y\n").0, Decision::Hit);
    assert_eq!(prompt("yes please\n").0, Decision::Hit);
    assert_eq!(prompt("  N\n").0, Decision::Stand);
}

#[test]
fn reprompts_until_valid() {
    let (decision, output) = prompt("maybe\n\n7\nn\n");
    assert_eq!(decision, Decision::Stand);
    assert_eq!(output.matches(HIT_PROMPT).count(), 4);
}

#[test]
fn end_of_input_stands() {
    let (decision, output) = prompt("what\n");
    assert_eq!(decision, Decision::Stand);
    assert_eq!(output.matches(HIT_PROMPT).count(), 2);
}

#[test]
fn console_round_narration() {
    let draws = [
        Card::new(Suit::Hearts, Rank::Eight),
        Card::new(Suit::Diamonds, Rank::Seven),
        Card::new(Suit::Hearts, Rank::Four),
        Card::new(Suit::Clubs, Rank::Six),
        Card::new(Suit::Spades, Rank::Ten),
        Card::new(Suit::Clubs, Rank::Five),
    ];
    let mut game = Game::with_deck(GameOptions::default(), Deck::stacked(&draws, 1).unwrap());
    game.join("Player").unwrap();

    let mut decider = ConsoleDecider::new(Cursor::new("q\ny\nn\n"), Vec::new());
    let result = game.play_round(&mut decider).unwrap();
    decider.report(&result).unwrap();

    let output = String::from_utf8(decider.into_output()).unwrap();
    assert_eq!(output.matches(HIT_PROMPT).count(), 3);
    assert!(output.contains("Player draws 8H, score: 8"));
    assert!(output.contains("Player draws 4H, score: 19"));
    assert!(output.contains("Dealer draws 5C, score: 21"));
    assert!(output.contains("Player's total card value = 19"));
    assert!(output.contains("Dealer's total card value = 21"));
    assert!(output.trim_end().ends_with("Dealer won!"));
}

#[test]
fn console_marks_busts_and_names_each_verdict() {
    let draws = [
        Card::new(Suit::Hearts, Rank::King),
        Card::new(Suit::Clubs, Rank::Ten),
        Card::new(Suit::Diamonds, Rank::Queen),
        Card::new(Suit::Spades, Rank::Nine),
        Card::new(Suit::Hearts, Rank::Two),
        Card::new(Suit::Clubs, Rank::Seven),
        Card::new(Suit::Diamonds, Rank::Ten),
    ];
    let mut game = Game::with_deck(GameOptions::default(), Deck::stacked(&draws, 1).unwrap());
    game.join("Alice").unwrap();
    game.join("Bob").unwrap();

    // Alice hits 20 with a Two, Bob stands on 19.
    let mut decider = ConsoleDecider::new(Cursor::new("y\nn\n"), Vec::new());
    let result = game.play_round(&mut decider).unwrap();
    decider.report(&result).unwrap();

    let output = String::from_utf8(decider.into_output()).unwrap();
    assert!(output.contains("Alice draws 2H, score: 22, bust"));
    assert!(output.contains("Alice: Dealer won!"));
    assert!(output.contains("Bob: Player won!"));
}

/// Output that rejects every write.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

#[test]
fn write_errors_do_not_stop_the_round() {
    let draws = [
        Card::new(Suit::Hearts, Rank::Ten),
        Card::new(Suit::Diamonds, Rank::Eight),
        Card::new(Suit::Spades, Rank::Ten),
        Card::new(Suit::Clubs, Rank::Seven),
    ];
    let mut game = Game::with_deck(GameOptions::default(), Deck::stacked(&draws, 1).unwrap());
    let player = game.join("Player").unwrap();

    // The answer is never read: the prompt write fails first and the player stands.
    let mut decider = ConsoleDecider::new(Cursor::new("y\n"), BrokenPipe);
    let result = game.play_round(&mut decider).unwrap();

    assert_eq!(result.player(player).unwrap().score.total, 18);
    assert_eq!(result.dealer.total, 17);
    assert!(decider.report(&result).is_err());
}
