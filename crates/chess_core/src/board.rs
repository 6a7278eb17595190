use log::{debug, trace};

use crate::error::BoardError;
use crate::moves;
use crate::piece::{file_based_piece_type, file_based_sub_type, Color, Piece, PieceType};
use crate::position::{file_letter, file_number, Position, MAX_FILE_COUNT};

pub const DEFAULT_FILE_COUNT: u8 = 8;
pub const DEFAULT_RANK_COUNT: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub file_count: u8,
    pub rank_count: u8,
    /// Skip populating the back ranks and pawn ranks.
    pub empty: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            file_count: DEFAULT_FILE_COUNT,
            rank_count: DEFAULT_RANK_COUNT,
            empty: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    position: Position,
    pub piece: Option<Piece>,
}

impl Square {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// A rectangular grid holding exactly one square per (file, rank) pair.
///
/// Squares are created once by the constructor; afterwards only their piece
/// slots change, through [`Board::set_square`] and [`Board::empty_square`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Vec<Square>,
    file_count: u8,
    rank_count: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard 8x8 board in the starting layout.
    pub fn new() -> Self {
        Self::build(DEFAULT_FILE_COUNT, DEFAULT_RANK_COUNT, false)
    }

    /// 8x8 board with no pieces.
    pub fn empty() -> Self {
        Self::build(DEFAULT_FILE_COUNT, DEFAULT_RANK_COUNT, true)
    }

    pub fn with_config(config: &BoardConfig) -> Result<Self, BoardError> {
        if config.file_count == 0 || config.file_count > MAX_FILE_COUNT {
            return Err(BoardError::InvalidFileCount(config.file_count));
        }
        if config.rank_count == 0 {
            return Err(BoardError::InvalidRankCount(config.rank_count));
        }
        Ok(Self::build(config.file_count, config.rank_count, config.empty))
    }

    fn build(file_count: u8, rank_count: u8, empty: bool) -> Self {
        let mut squares = Vec::with_capacity(usize::from(file_count) * usize::from(rank_count));
        for file in 1..=file_count {
            for rank in 1..=rank_count {
                squares.push(Square {
                    position: Position { file, rank },
                    piece: None,
                });
            }
        }

        let mut board = Self {
            squares,
            file_count,
            rank_count,
        };
        if !empty {
            board.setup_initial_position();
        }
        debug!("built {}x{} board (empty: {})", file_count, rank_count, empty);
        board
    }

    pub fn setup_initial_position(&mut self) {
        let (file_count, rank_count) = (self.file_count, self.rank_count);

        for square in self.squares.iter_mut() {
            let Position { file, rank } = square.position;

            if rank == 1 || rank == rank_count {
                let color = if rank == 1 { Color::White } else { Color::Black };
                square.piece = file_based_piece_type(file, file_count).map(|piece_type| Piece {
                    sub_type: file_based_sub_type(file, file_count),
                    ..Piece::new(piece_type, color)
                });
            }

            // Pawn ranks are filled last so they win on boards too short to
            // keep them apart from the back ranks.
            if rank == 2 || i32::from(rank) == i32::from(rank_count) - 1 {
                let color = if rank == 2 { Color::White } else { Color::Black };
                square.piece = Some(Piece::new(PieceType::Pawn, color));
            }
        }
    }

    pub fn file_count(&self) -> u8 {
        self.file_count
    }

    pub fn rank_count(&self) -> u8 {
        self.rank_count
    }

    /// Every square, file by file, each file from rank 1 upwards.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if !self.is_position_valid(pos) {
            return None;
        }
        let file = usize::from(pos.file - 1);
        let rank = usize::from(pos.rank - 1);
        Some(file * usize::from(self.rank_count) + rank)
    }

    pub fn square(&self, pos: Position) -> Option<&Square> {
        self.index(pos).map(|i| &self.squares[i])
    }

    pub fn get_piece(&self, pos: Position) -> Option<&Piece> {
        self.square(pos).and_then(Square::piece)
    }

    /// Places `piece` on `pos`, replacing whatever stood there. Does nothing
    /// if `pos` is off the board.
    pub fn set_square(&mut self, pos: Position, piece: Piece) {
        match self.index(pos) {
            Some(i) => {
                trace!("set {} to {:?} {:?}", pos, piece.color, piece.piece_type);
                self.squares[i].piece = Some(piece);
            }
            None => debug!("ignoring set on off-board square {}", pos),
        }
    }

    /// Removes and returns the piece on `pos`, if any.
    pub fn empty_square(&mut self, pos: Position) -> Option<Piece> {
        match self.index(pos) {
            Some(i) => self.squares[i].piece.take(),
            None => {
                debug!("ignoring empty on off-board square {}", pos);
                None
            }
        }
    }

    pub fn empty_board(&mut self) {
        for square in self.squares.iter_mut() {
            square.piece = None;
        }
    }

    pub fn is_valid_file(&self, file: i32) -> bool {
        file >= 1 && file <= i32::from(self.file_count)
    }

    pub fn is_valid_rank(&self, rank: i32) -> bool {
        rank >= 1 && rank <= i32::from(self.rank_count)
    }

    pub fn is_position_valid(&self, pos: Position) -> bool {
        self.is_valid_file(i32::from(pos.file)) && self.is_valid_rank(i32::from(pos.rank))
    }

    /// Steps a file letter by `delta`, provided the result is still on the board.
    pub fn previous_or_next_file(&self, file: char, delta: i32) -> Option<char> {
        let stepped = i32::from(file_number(file)?) + delta;
        if self.is_valid_file(stepped) {
            file_letter(stepped)
        } else {
            None
        }
    }

    pub fn previous_file(&self, file: char) -> Option<char> {
        self.previous_or_next_file(file, -1)
    }

    pub fn next_file(&self, file: char) -> Option<char> {
        self.previous_or_next_file(file, 1)
    }

    pub fn previous_or_next_rank(&self, rank: u8, delta: i32) -> Option<u8> {
        let stepped = i32::from(rank) + delta;
        if self.is_valid_rank(stepped) {
            u8::try_from(stepped).ok()
        } else {
            None
        }
    }

    pub fn previous_rank(&self, rank: u8) -> Option<u8> {
        self.previous_or_next_rank(rank, -1)
    }

    pub fn next_rank(&self, rank: u8) -> Option<u8> {
        self.previous_or_next_rank(rank, 1)
    }

    /// `pos` shifted by the given deltas, each axis checked against the board
    /// on its own.
    pub fn offset(&self, pos: Position, file_delta: i32, rank_delta: i32) -> Option<Position> {
        let file = self.previous_or_next_file(pos.file_letter(), file_delta)?;
        let rank = self.previous_or_next_rank(pos.rank, rank_delta)?;
        Some(Position {
            file: file_number(file)?,
            rank,
        })
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.squares
            .iter()
            .find(|square| {
                square
                    .piece()
                    .is_some_and(|p| p.piece_type == PieceType::King && p.color == color)
            })
            .map(Square::position)
    }

    /// Sum of the point values of `color`'s pieces.
    pub fn material(&self, color: Color) -> u32 {
        self.squares
            .iter()
            .filter_map(Square::piece)
            .filter(|piece| piece.color == color)
            .map(Piece::points)
            .sum()
    }

    /// Pseudo-legal destinations of the piece on `pos`; never includes a king capture.
    pub fn moves(&self, pos: Position) -> Vec<Position> {
        moves::moves_for(self, pos, false)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        moves::is_in_check(self, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceSubType;

    fn pos(notation: &str) -> Position {
        Position::from_algebraic(notation).unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let board = Board::new();
        assert_eq!(board.squares().count(), 64);

        let rook = board.get_piece(pos("a1")).unwrap();
        assert_eq!(rook.piece_type, PieceType::Rook);
        assert_eq!(rook.color, Color::White);
        assert_eq!(rook.sub_type, Some(PieceSubType::West));

        let king = board.get_piece(pos("e8")).unwrap();
        assert_eq!(king.piece_type, PieceType::King);
        assert_eq!(king.color, Color::Black);
        assert_eq!(king.sub_type, None);

        let knight = board.get_piece(pos("g1")).unwrap();
        assert_eq!(knight.sub_type, Some(PieceSubType::East));

        assert_eq!(board.get_piece(pos("d1")).unwrap().piece_type, PieceType::Queen);
        for file in 1..=8 {
            let white = board.get_piece(Position { file, rank: 2 }).unwrap();
            let black = board.get_piece(Position { file, rank: 7 }).unwrap();
            assert_eq!((white.piece_type, white.color), (PieceType::Pawn, Color::White));
            assert_eq!((black.piece_type, black.color), (PieceType::Pawn, Color::Black));
            for rank in 3..=6 {
                assert!(board.square(Position { file, rank }).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn test_square_lookup_bounds() {
        let board = Board::new();
        assert_eq!(board.square(pos("a1")).unwrap().position(), pos("a1"));
        assert!(board.square(pos("z1")).is_none());
        assert!(board.square(pos("a9")).is_none());
    }

    #[test]
    fn test_empty_and_custom_boards() {
        let board = Board::empty();
        assert!(board.squares().all(Square::is_empty));

        let config = BoardConfig {
            file_count: 26,
            rank_count: 12,
            empty: true,
        };
        let board = Board::with_config(&config).unwrap();
        assert_eq!(board.squares().count(), 26 * 12);
        assert!(board.square(pos("z12")).is_some());
        assert!(board.square(pos("z13")).is_none());

        let bad_files = BoardConfig { file_count: 27, ..BoardConfig::default() };
        assert_eq!(Board::with_config(&bad_files), Err(BoardError::InvalidFileCount(27)));
        let bad_ranks = BoardConfig { rank_count: 0, ..BoardConfig::default() };
        assert_eq!(Board::with_config(&bad_ranks), Err(BoardError::InvalidRankCount(0)));
    }

    #[test]
    fn test_wide_board_pawns_span_every_file() {
        let config = BoardConfig { file_count: 10, rank_count: 10, empty: false };
        let board = Board::with_config(&config).unwrap();
        assert_eq!(board.get_piece(pos("j2")).unwrap().piece_type, PieceType::Pawn);
        assert_eq!(board.get_piece(pos("j9")).unwrap().color, Color::Black);
        assert_eq!(board.get_piece(pos("g1")).unwrap().piece_type, PieceType::King);
        assert!(board.get_piece(pos("e1")).is_none());
    }

    #[test]
    fn test_set_and_empty_square() {
        let mut board = Board::empty();
        let queen = Piece::new(PieceType::Queen, Color::Black);

        board.set_square(pos("d4"), queen);
        assert_eq!(board.get_piece(pos("d4")), Some(&queen));

        assert_eq!(board.empty_square(pos("d4")), Some(queen));
        assert_eq!(board.empty_square(pos("d4")), None);

        board.set_square(pos("k4"), queen);
        assert_eq!(board.empty_square(pos("k4")), None);
        assert!(board.squares().all(Square::is_empty));
    }

    #[test]
    fn test_empty_board_clears_everything() {
        let mut board = Board::new();
        board.empty_board();
        assert!(board.squares().all(Square::is_empty));
        assert_eq!(board.squares().count(), 64);
    }

    #[test]
    fn test_file_and_rank_stepping() {
        let board = Board::new();
        assert_eq!(board.previous_file('a'), None);
        assert_eq!(board.previous_file('b'), Some('a'));
        assert_eq!(board.next_file('g'), Some('h'));
        assert_eq!(board.next_file('h'), None);
        assert_eq!(board.previous_or_next_file('d', 2), Some('f'));
        assert_eq!(board.previous_or_next_file('d', -4), None);

        assert_eq!(board.previous_rank(1), None);
        assert_eq!(board.next_rank(7), Some(8));
        assert_eq!(board.next_rank(8), None);
        assert_eq!(board.previous_or_next_rank(4, -2), Some(2));
    }

    #[test]
    fn test_offset() {
        let board = Board::new();
        assert_eq!(board.offset(pos("d4"), -2, 1), Some(pos("b5")));
        assert_eq!(board.offset(pos("b1"), -2, 1), None);
        assert_eq!(board.offset(pos("h8"), 0, 1), None);
    }

    #[test]
    fn test_material_and_king_position() {
        let board = Board::new();
        assert_eq!(board.material(Color::White), 39);
        assert_eq!(board.material(Color::Black), 39);
        assert_eq!(board.king_position(Color::White), Some(pos("e1")));
        assert_eq!(board.king_position(Color::Black), Some(pos("e8")));
        assert_eq!(Board::empty().king_position(Color::White), None);
    }
}
