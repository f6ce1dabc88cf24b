//! Console blackjack against a dealer who stands on 17.

use std::io;

use bjsim::console::ConsoleDecider;
use bjsim::{Game, GameOptions};
use clap::Parser;

#[derive(Parser)]
#[command(name = "blackjack", about = "Play single-deck blackjack against the dealer")]
struct Args {
    /// Seed for the deck shuffle (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Player name; repeat to seat several players
    #[arg(long = "player", default_value = "Player")]
    players: Vec<String>,

    /// Number of rounds to play
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Total at which the dealer stops drawing
    #[arg(long, default_value_t = 17)]
    dealer_stands_at: u8,

    /// Dealer draws on a soft total equal to the threshold
    #[arg(long)]
    hit_soft_17: bool,

    /// Dealer shows a card during the opening deal
    #[arg(long)]
    dealer_up_card: bool,

    /// Print the shuffled deck before the first round
    #[arg(long)]
    show_deck: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let options = GameOptions::default()
        .with_dealer_stands_at(args.dealer_stands_at)
        .with_stand_on_soft_17(!args.hit_soft_17)
        .with_dealer_up_card(args.dealer_up_card);

    let mut game = match args.seed {
        Some(seed) => Game::new(options, seed),
        None => Game::from_entropy(options),
    };

    for name in args.players {
        if let Err(err) = game.join(name) {
            log::warn!("could not seat player: {err}");
        }
    }

    if args.show_deck {
        println!("{}\n", game.deck());
    }

    let mut decider = ConsoleDecider::new(io::stdin().lock(), io::stdout());

    for round in 1..=args.rounds {
        if args.rounds > 1 {
            println!("\n=== Round {round} ===");
        }

        match game.play_round(&mut decider) {
            Ok(result) => {
                if let Err(err) = decider.report(&result) {
                    log::error!("could not print the result: {err}");
                    break;
                }
            }
            Err(err) => {
                log::error!("round aborted: {err}");
                break;
            }
        }

        game.clear_round();
    }
}
