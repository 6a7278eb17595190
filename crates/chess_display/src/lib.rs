//! Plain-text board diagrams for terminals and logs.
//!
//! White pieces print upper-case, black pieces lower-case, empty squares as
//! `.`. The board is only read through `chess_core`'s accessors.

use std::fmt;

use chess_core::{file_letter, Board, Color, Piece, PieceType, Position};
use log::trace;

pub const EMPTY_SQUARE: char = '.';

pub fn notation_letter(piece_type: PieceType) -> char {
    match piece_type {
        PieceType::Pawn => 'p',
        PieceType::Bishop => 'b',
        PieceType::Knight => 'n',
        PieceType::Rook => 'r',
        PieceType::Queen => 'q',
        PieceType::King => 'k',
    }
}

pub fn notation(piece: &Piece) -> char {
    let letter = notation_letter(piece.piece_type);
    match piece.color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

/// Borrowing wrapper that formats a board as a framed diagram.
pub struct BoardDiagram<'a>(pub &'a Board);

impl BoardDiagram<'_> {
    fn write_file_letters(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for file in 1..=i32::from(self.0.file_count()) {
            write!(f, "{}", file_letter(file).unwrap_or(' '))?;
        }
        writeln!(f)
    }

    fn write_edge(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " +{}+", "-".repeat(usize::from(self.0.file_count())))
    }
}

impl fmt::Display for BoardDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;

        self.write_file_letters(f)?;
        self.write_edge(f)?;

        for rank in (1..=board.rank_count()).rev() {
            write!(f, "{rank}|")?;
            for file in 1..=board.file_count() {
                let cell = board
                    .get_piece(Position { file, rank })
                    .map_or(EMPTY_SQUARE, notation);
                write!(f, "{cell}")?;
            }
            writeln!(f, "|{rank}")?;
        }

        self.write_edge(f)?;
        self.write_file_letters(f)
    }
}

pub fn render(board: &Board) -> String {
    trace!("rendering {}x{} board", board.file_count(), board.rank_count());
    BoardDiagram(board).to_string()
}
