// Board model, coordinates and pseudo-legal move generation
pub mod board;
pub mod error;
pub mod moves;
pub mod piece;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, BoardConfig, Square};
pub use error::{BoardError, PositionError};
pub use moves::{is_in_check, moves_for};
pub use piece::{Color, Piece, PieceSubType, PieceType};
pub use position::{file_letter, file_number, square_color, Position};
