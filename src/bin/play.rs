//! Console front end.
//!
//! Reads one command per line from stdin: `w`/`a`/`s`/`d` to move,
//! `u` to undo, `r` to redo, `q` to quit.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rust_2048::{Command, CommandOutcome, GameConfig, GameError, GameState, GameStatus};

#[derive(Parser, Debug)]
#[command(about = "Play 2048 in the terminal")]
struct Args {
    /// Number of rows.
    #[arg(long, default_value_t = 4)]
    rows: usize,
    /// Number of columns.
    #[arg(long, default_value_t = 4)]
    cols: usize,
    /// Tile value that wins the game.
    #[arg(long, default_value_t = 2048)]
    win: u32,
    /// Seed for tile spawns. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Tracing filter, e.g. "warn", "debug".
    #[arg(long, default_value = "warn")]
    log: String,
}

const PROMPT: &str =
    "Enter your move (w = up, s = down, a = left, d = right, u = undo, r = redo, q = quit): ";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(args.log.clone()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = GameConfig::new(args.rows, args.cols)
        .with_win_threshold(args.win)
        .with_seed(args.seed.unwrap_or_else(rand::random));
    let mut game = GameState::new(config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        writeln!(stdout, "{}", game)?;
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let Some(command) = line.trim().chars().next().and_then(Command::from_key) else {
            writeln!(stdout, "Invalid move. Please use 'w', 'a', 's', 'd', 'u', 'r' or 'q'.")?;
            continue;
        };

        match game.dispatch(command) {
            Ok(CommandOutcome::Quit) => {
                writeln!(stdout, "Thanks for playing!")?;
                break;
            }
            Ok(CommandOutcome::Blocked) => writeln!(stdout, "Nothing moved.")?,
            Ok(_) => {}
            Err(err @ GameError::EmptyHistory(_)) => writeln!(stdout, "{}", err)?,
            Err(err) => return Err(err.into()),
        }

        match game.status() {
            GameStatus::GameOver => {
                writeln!(stdout, "{}", game)?;
                writeln!(stdout, "GAME ENDED: Game Over! No more moves are possible.")?;
                break;
            }
            GameStatus::Won => {
                writeln!(stdout, "{}", game)?;
                writeln!(stdout, "GAME ENDED: Congratulations! You won!")?;
                break;
            }
            GameStatus::InProgress => {}
        }
    }

    Ok(())
}
