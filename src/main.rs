use std::io::{self, BufRead, Write};

use battleship_practice::terminal::{coord_to_string, parse_coord, render_board};
use battleship_practice::{
    init_logging, GameConfig, GameSession, Outcome, SessionStatus, BOARD_SIZE, SHIP_LENGTHS,
};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, default_value_t = BOARD_SIZE, help = "Side length of the square board")]
    size: usize,
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = SHIP_LENGTHS.to_vec(),
        help = "Ship lengths, placed in order (e.g., --ships 5,4,3,3,2)"
    )]
    ships: Vec<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

impl GameArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        let config = GameConfig::new(self.size, self.ships.clone());
        config.validate()?;
        Ok(config)
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal; enter coordinates like B3, or q to quit.
    Play {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Show ship positions (debugging)")]
        reveal: bool,
    },
    /// Print a random fleet layout and exit.
    Layout {
        #[command(flatten)]
        game: GameArgs,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game, reveal } => {
            let config = game.config()?;
            if let Some(s) = game.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let session = GameSession::new(&config, &mut game.rng())?;
            play(session, reveal)?;
        }
        Commands::Layout { game } => {
            let config = game.config()?;
            let session = GameSession::new(&config, &mut game.rng())?;
            print!("{}", render_board(session.board(), true));
            for ship in session.board().ships() {
                let (r, c) = ship.origin();
                println!(
                    "  length {} at {} {:?}",
                    ship.length(),
                    coord_to_string(r, c),
                    ship.orientation()
                );
            }
        }
    }
    Ok(())
}

fn play(mut session: GameSession, reveal: bool) -> anyhow::Result<()> {
    let size = session.board().size();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while session.status() == SessionStatus::InProgress {
        print!("{}", render_board(session.board(), reveal));
        print!("Target: ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                session.cancel();
                break;
            }
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            session.cancel();
            break;
        }
        let (r, c) = match parse_coord(line, size) {
            Ok(coord) => coord,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        let report = session.fire(r, c)?;
        let target = coord_to_string(r, c);
        match (report.outcome, report.sunk) {
            (Outcome::Hit, Some(len)) => println!("{} -> Hit! Ship of length {} sunk.", target, len),
            (Outcome::Hit, None) => println!("{} -> Hit!", target),
            (Outcome::Miss, _) => println!("{} -> Miss.", target),
            (Outcome::AlreadyResolved, _) => println!("{} was already targeted.", target),
        }
    }

    print!("{}", render_board(session.board(), true));
    match session.status() {
        SessionStatus::Won => println!(
            "You win! All ships sunk in {} shots ({} hits, {} misses).",
            session.shots(),
            session.hits(),
            session.misses()
        ),
        SessionStatus::Cancelled => println!("Game abandoned after {} shots.", session.shots()),
        SessionStatus::InProgress => {}
    }
    Ok(())
}
