use battleship_practice::{init_logging, GameConfig, GameSession, SessionStatus, BOARD_SIZE, SHIP_LENGTHS};
use clap::Parser;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

/// Play one game with uniformly random shots and print a JSON summary.
#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
    seed: u64,
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: usize,
    #[arg(long, value_delimiter = ',', default_values_t = SHIP_LENGTHS.to_vec())]
    ships: Vec<usize>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let config = GameConfig::new(args.size, args.ships);
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut session = GameSession::new(&config, &mut rng)?;

    while session.status() == SessionStatus::InProgress {
        let r = rng.random_range(0..config.board_size);
        let c = rng.random_range(0..config.board_size);
        session.fire(r, c)?;
    }

    let result = json!({
        "seed": args.seed,
        "board_size": config.board_size,
        "ship_lengths": config.ship_lengths,
        "status": session.status(),
        "shots": session.shots(),
        "hits": session.hits(),
        "misses": session.misses(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
