//! Connect-k engine CLI
//!
//! `demo` runs fixed scenarios against the rule engine and the computer
//! player. `play` is a terminal game against the computer.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use connectk::config::EXHAUSTIVE_CELL_LIMIT;
use connectk::{AIEngine, Board, EngineConfig, GameMode, GameSession, Player, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run the built-in scenarios
    Demo,
    /// Play against the computer in the terminal
    Play,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Connect-k rule engine and computer opponent", long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board rows (overrides config)
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns (overrides config)
    #[arg(long)]
    cols: Option<usize>,

    /// Stones in a row needed to win (overrides config)
    #[arg(long)]
    win_length: Option<usize>,

    /// Search depth limit in plies (overrides config)
    #[arg(long)]
    depth: Option<usize>,

    #[arg(long, value_enum, default_value = "demo")]
    mode: Mode,
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load_or_default(path)?,
        None => EngineConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.board.cols = cols;
    }
    if let Some(k) = args.win_length {
        config.board.win_length = k;
    }
    if let Some(depth) = args.depth {
        config.search.depth_limit = depth;
    }
    config.validate()?;
    Ok(config)
}

/// Refuse boards whose exhaustive search would not finish, unless the
/// depth limit was chosen on the command line.
fn check_playable(config: &EngineConfig, depth_given: bool) -> Result<()> {
    if !depth_given && !config.fits_exhaustive_search() {
        bail!(
            "a {}x{} board is too large for the computer to search to the end; \
             pass --depth N to bound the search or pick a board of at most {} cells \
             (e.g. --rows 3 --cols 3 --win-length 3)",
            config.board.rows,
            config.board.cols,
            EXHAUSTIVE_CELL_LIMIT
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args)?;

    match args.mode {
        Mode::Demo => run_demo(),
        Mode::Play => {
            check_playable(&config, args.depth.is_some())?;
            play(config)?
        }
    }
    Ok(())
}

fn report(pass: bool) {
    println!("  Result: {}", if pass { "PASS" } else { "FAIL" });
}

fn run_demo() {
    println!("===========================================");
    println!("       Connect-k Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("===========================================\n");

    println!("--- Test 1: Five in a Row (15x15, k=5) ---");
    demo_five_in_row();

    println!("\n--- Test 2: Unwinnable Board (3x3, k=5) ---");
    demo_unwinnable();

    println!("\n--- Test 3: Computer Takes the Win ---");
    demo_computer_wins();

    println!("\n--- Test 4: Computer Blocks ---");
    demo_computer_blocks();

    println!("\n===========================================");
    println!("          All Tests Completed!");
    println!("===========================================");
}

fn demo_five_in_row() {
    let mut board = Board::new(15, 15, 5);
    let mut early_win = false;
    for col in 7..11 {
        board.mark(Player::One, Pos::new(7, col));
        early_win |= board.player_one_won();
    }
    board.mark(Player::One, Pos::new(7, 11));

    println!("  Player 1 marks (7,7) through (7,11)");
    println!("  Won after four: {}", early_win);
    println!("  Won after five: {}", board.player_one_won());
    report(!early_win && board.player_one_won());
}

fn demo_unwinnable() {
    let mut board = Board::new(3, 3, 5);
    let mut player = Player::One;
    for row in 0..3 {
        for col in 0..3 {
            board.mark(player, Pos::new(row, col));
            player = player.opponent();
        }
    }

    print!("{}", board);
    println!("  Game over: {}  Result: {}", board.game_over(), board.result());
    report(board.game_over() && !board.player_one_won() && !board.player_two_won());
}

fn demo_computer_wins() {
    let mut board = Board::new(3, 3, 3);
    for (r, c) in [(0, 0), (0, 2), (2, 2)] {
        board.mark(Player::One, Pos::new(r, c));
    }
    for (r, c) in [(1, 0), (1, 1)] {
        board.mark(Player::Two, Pos::new(r, c));
    }

    let mut engine = AIEngine::new();
    let result = engine.get_move_with_stats(&board);
    println!("  Player 2 has (1,0) and (1,1)");
    println!("  Computer plays: {:?}", result.best_move);
    println!("  Score: {}  Nodes: {}  Time: {}ms", result.score, result.nodes, result.time_ms);
    println!("  Expected: (1, 2) - Immediate Win");
    report(result.best_move == Some(Pos::new(1, 2)));
}

fn demo_computer_blocks() {
    let mut board = Board::new(3, 3, 3);
    board.mark(Player::One, Pos::new(2, 0));
    board.mark(Player::One, Pos::new(2, 1));
    board.mark(Player::Two, Pos::new(1, 1));

    let mut engine = AIEngine::new();
    let result = engine.get_move_with_stats(&board);
    println!("  Player 1 has (2,0) and (2,1)");
    println!("  Computer plays: {:?}", result.best_move);
    println!("  Score: {}  Nodes: {}  Time: {}ms", result.score, result.nodes, result.time_ms);
    println!("  Expected: (2, 2) - Defense");
    report(result.best_move == Some(Pos::new(2, 2)));
}

fn parse_move(line: &str) -> Option<Pos> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Pos::new(row, col))
}

fn play(config: EngineConfig) -> Result<()> {
    let mut session = GameSession::new(config, GameMode::HumanVsComputer);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_over() {
        if session.is_computer_turn() {
            println!("Thinking...");
            match session.computer_move() {
                Some(result) => {
                    if let Some(pos) = result.best_move {
                        println!("Computer plays: {} ({}ms)", pos, result.time_ms);
                    }
                }
                None => {
                    println!("No legal moves available!");
                    break;
                }
            }
            continue;
        }

        print!("\n{}", session.board());
        print!("Enter your move (row col): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        match parse_move(line.trim()) {
            Some(pos) => {
                if let Err(err) = session.place(pos) {
                    println!("Cannot mark there: {}", err);
                }
            }
            None => println!("Invalid move format! Use format like '7 7'"),
        }
    }

    print!("\n{}", session.board());
    println!("{}", session.result());
    Ok(())
}
