//! Console front end: play block dominoes against the computer.
//!
//! Usage: domino [--seed 7] [--computer-first] [--depth 4] [--alpha-beta]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use domino_ai::{ComputerAction, Game, GameConfig, GameError, GameResult, Side};

/// Play block dominoes against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "domino")]
#[command(about = "Play two-player block dominoes against the computer", long_about = None)]
struct Args {
    /// JSON game config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shuffle seed
    #[arg(long)]
    seed: Option<u64>,

    /// Tiles dealt to each side
    #[arg(long)]
    hand_size: Option<usize>,

    /// Play without the blank suit (21 tiles)
    #[arg(long)]
    no_blanks: bool,

    /// Let the computer open
    #[arg(long)]
    computer_first: bool,

    /// Fixed search depth (default: computer hand size)
    #[arg(long)]
    depth: Option<u32>,

    /// Enable alpha-beta pruning
    #[arg(long)]
    alpha_beta: bool,

    /// Log filter, e.g. "info" or "domino_ai=debug" (RUST_LOG wins if set)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                GameConfig::from_json_str(&json)?
            }
            None => GameConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(hand_size) = self.hand_size {
            config = config.with_hand_size(hand_size);
        }
        if self.no_blanks {
            config = config.with_blanks(false);
        }
        if self.computer_first {
            config = config.with_computer_first(true);
        }
        if let Some(depth) = self.depth {
            config.search = config.search.with_depth(depth);
        }
        if self.alpha_beta {
            config.search = config.search.with_alpha_beta(true);
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// `None` means quit (EOF or `q`).
fn read_command(input: &mut impl BufRead) -> Result<Option<String>> {
    print!("Enter the index of the tile to play (d = draw, q = quit): ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim().to_lowercase();
    if line == "q" || line == "quit" {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Returns `false` if the human quit.
fn player_turn(game: &mut Game, input: &mut impl BufRead) -> Result<bool> {
    loop {
        println!("Your hand: {}", indexed_hand(game));
        println!("Board: {}", game.board());

        if game.legal_moves(Side::Player).is_empty() {
            match game.draw_for_player()? {
                Some(tile) => println!("No playable tiles. You drew {tile}."),
                None => println!("No playable tiles and the boneyard is empty. You pass."),
            }
            return Ok(true);
        }

        let Some(command) = read_command(input)? else {
            return Ok(false);
        };

        let result = if command == "d" {
            game.draw_for_player().map(|_| ())
        } else {
            match command.parse::<usize>() {
                Ok(index) => game.play_player(index).map(|_| ()),
                Err(_) => {
                    println!("Please enter a number.");
                    continue;
                }
            }
        };

        match result {
            Ok(()) => return Ok(true),
            Err(GameError::InvalidIndex { .. }) => println!("Invalid index. Try again."),
            Err(GameError::IllegalMove(_)) => println!("Invalid move. Try again."),
            Err(GameError::MustPlay) => println!("You have a playable tile. Try again."),
            Err(err) => return Err(err.into()),
        }
    }
}

fn computer_turn(game: &mut Game) -> Result<()> {
    println!("PC hand: {} tiles", game.computer_hand().len());

    match game.computer_turn()? {
        ComputerAction::Played(placement) => {
            println!("Computer plays {}", placement.tile);
        }
        ComputerAction::Drew(_) => println!("Computer has no playable tiles. Drawing a tile..."),
        ComputerAction::Passed => println!("No more tiles to draw. Computer passes turn..."),
    }
    println!("\n-----------------------------------------------------------\n");
    Ok(())
}

fn indexed_hand(game: &Game) -> String {
    game.player_hand()
        .iter()
        .enumerate()
        .map(|(i, tile)| format!("{i}:{tile}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut game = Game::new(args.game_config()?)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        if let Some(result) = game.outcome() {
            println!("Board: {}", game.board());
            match result {
                GameResult::Winner(Side::Player) => println!("You win!"),
                GameResult::Winner(Side::Computer) => println!("Computer wins!"),
                GameResult::Draw => println!("It's a draw!"),
            }
            return Ok(());
        }

        match game.turn() {
            Side::Player => {
                if !player_turn(&mut game, &mut input)? {
                    println!("Goodbye!");
                    return Ok(());
                }
            }
            Side::Computer => computer_turn(&mut game)?,
        }
    }
}
