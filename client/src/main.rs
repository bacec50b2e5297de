mod colors;
mod config;
mod terminal;

use clap::Parser;
use common::games::tictactoe::{
    AiSide, Board, CONFIG_FILE, Mark, TicTacToeConfig, TicTacToeGameState, TicTacToeSession,
};
use common::version::VERSION;
use common::{log, logger};

use config::get_config_manager;
use terminal::TerminalIo;

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "TicTacToe against an unbeatable minimax opponent")]
struct Args {
    /// AI player: X, O or both. Omit for two human players
    #[arg(short, long)]
    ai: Option<AiSide>,

    /// Empty cells at or below which the AI searches instead of guessing (0 = unbeatable, 9 = random)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    difficulty: Option<u8>,

    /// Mark that makes the first move
    #[arg(long)]
    first: Option<Mark>,

    /// Seed for the AI's random guesses
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a position, e.g. "x.. .o. ..."
    #[arg(long)]
    board: Option<String>,

    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    /// Log AI decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_color: bool,

    /// Keep the previous boards on screen instead of redrawing
    #[arg(long)]
    no_clear: bool,
}

impl Args {
    fn apply_to(&self, config: &mut TicTacToeConfig) {
        if let Some(ai) = self.ai {
            config.ai = Some(ai);
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(first) = self.first {
            config.first_mark = first;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.verbose {
            config.log_enabled = true;
        }
        if self.no_color {
            config.color = false;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let manager = get_config_manager(&args.config);
    let mut config = manager.get_config()?;
    args.apply_to(&mut config);
    if args.save_config {
        manager.set_config(&config)?;
    }

    logger::init_logger(Some("TicTacToe".to_string()), config.log_enabled);
    log!("tictactoe {}", VERSION);
    log!("Using config file {}", manager.provider().path().display());

    let state = match args.board.as_deref() {
        Some(layout) => TicTacToeGameState::with_board(Board::parse(layout)?, config.first_mark)?,
        None => TicTacToeGameState::new(config.first_mark),
    };

    let mut session = TicTacToeSession::from_config(&config, state);
    let stdin = std::io::stdin();
    let mut io = TerminalIo::new(stdin.lock(), std::io::stdout(), config.color, !args.no_clear);
    session.run(&mut io)?;

    Ok(())
}
