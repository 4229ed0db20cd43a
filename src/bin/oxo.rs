use clap::Parser;
use itertools::Itertools;
use oxo::game::{symbol_to_str, Actor, GameState, Policy, Symbol};
use std::sync::Arc;
use std::thread;

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    #[clap(long, default_value = "sequential")]
    x_policy: String,
    #[clap(long, default_value = "random")]
    o_policy: String,
    #[clap(long)]
    seed: Option<u64>,
}

fn parse_policy(s: &str) -> Policy {
    match s.to_lowercase().as_str() {
        "sequential" => Policy::Sequential,
        "random" => Policy::Random,
        unknown => panic!("unknown policy '{unknown}'"),
    }
}

fn main() {
    oxo::util::init_globals();

    let args = Args::parse();

    let game = Arc::new(GameState::new());

    let actors = [
        (Symbol::X, parse_policy(&args.x_policy)),
        (Symbol::O, parse_policy(&args.o_policy)),
    ];
    let threads = actors
        .into_iter()
        .enumerate()
        .map(|(idx, (symbol, policy))| {
            let actor = Actor::new(game.clone(), symbol);
            let seed = args.seed.map(|s| s.wrapping_add(idx as u64));
            thread::spawn(move || match (policy, seed) {
                (Policy::Random, Some(seed)) => actor.run_random_from_seed(seed),
                _ => actor.run(policy),
            })
        })
        .collect_vec();

    for t in threads {
        t.join().unwrap();
    }

    if !game.is_game_over() {
        println!("Game ended in a draw.");
    }

    println!("The winner is: {}, final board:", symbol_to_str(game.winner()));
    println!("{}", game.board());
}
