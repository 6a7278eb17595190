use chess_core::{Board, BoardConfig, Color, Position};
use chess_display::BoardDiagram;
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "chess-board")]
#[command(about = "Print a board and the pseudo-legal moves of chosen pieces")]
struct Args {
    /// Number of files (1-26)
    #[arg(long, default_value_t = 8)]
    files: u8,

    /// Number of ranks
    #[arg(long, default_value_t = 8)]
    ranks: u8,

    /// Start from an empty board instead of the standard layout
    #[arg(long)]
    empty: bool,

    /// Show the moves of the piece on this square (repeatable)
    #[arg(short, long = "moves", value_name = "SQUARE")]
    moves: Vec<String>,

    /// Report whether each side is in check
    #[arg(short, long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    let config = BoardConfig {
        file_count: args.files,
        rank_count: args.ranks,
        empty: args.empty,
    };
    let board = Board::with_config(&config)?;
    info!("board ready: {}x{}", board.file_count(), board.rank_count());

    println!();
    print!("{}", BoardDiagram(&board));

    for raw in &args.moves {
        let position = match raw.parse::<Position>() {
            Ok(position) => position,
            Err(err) => {
                println!("{raw}: {err}");
                continue;
            }
        };

        match board.get_piece(position) {
            Some(piece) => {
                let moves: Vec<String> = board.moves(position).iter().map(Position::to_string).collect();
                println!("{position} {:?} {:?}: {}", piece.color, piece.piece_type, moves.join(" "));
            }
            None => println!("{position}: no piece"),
        }
    }

    if args.check {
        for color in [Color::White, Color::Black] {
            println!("{color:?} in check: {}", board.is_in_check(color));
        }
    }

    Ok(())
}
