//! Plays a game between two random movers and prints every position.
//!
//! ```text
//! cargo run --features cli --bin selfplay -- --seed 7 --max-plies 200
//! ```

use std::error::Error;

use clap::Parser;
use gambit::{game::Game, selector::RandomMover};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Random self-play under the reduced rule set")]
struct Opt {
    /// Seed for the random movers.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Stop after this many half-moves. The game is then abandoned as a
    /// draw.
    #[arg(long, default_value_t = 300)]
    max_plies: u32,
    /// Only print the final position.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opt = Opt::parse();
    let mut mover = RandomMover::seed_from_u64(opt.seed);
    let mut game = Game::new();
    let mut plies = 0;

    while !game.is_over() {
        if plies >= opt.max_plies {
            game.abandon();
            break;
        }

        let turn = game.turn();
        let Some(m) = game.play_reply(mover.rng_mut()) else {
            break;
        };
        plies += 1;

        if !opt.quiet {
            println!("{plies}. {turn} {m}");
            println!("{}", game.board());
        }
    }

    println!("{}", game.board());
    println!("{} after {} plies", game.status(), plies);
    info!(seed = opt.seed, plies, status = %game.status(), "self-play finished");
    Ok(())
}
