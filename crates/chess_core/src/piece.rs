#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    /// Material value used for scoring. Has no bearing on move legality.
    pub fn points(self) -> u32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Bishop | PieceType::Knight => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }
}

/// Tells apart the two copies of a back-rank piece by the side they start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceSubType {
    West,
    East,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
    pub sub_type: Option<PieceSubType>,
    // Castling and promotion are not generated; both flags stay at their
    // initial values for the life of the piece.
    pub has_never_moved: bool,
    pub is_from_promotion: bool,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Self {
            piece_type,
            color,
            sub_type: None,
            has_never_moved: true,
            is_from_promotion: false,
        }
    }

    pub fn with_sub_type(piece_type: PieceType, color: Color, sub_type: PieceSubType) -> Self {
        Self {
            sub_type: Some(sub_type),
            ..Self::new(piece_type, color)
        }
    }

    pub fn points(&self) -> u32 {
        self.piece_type.points()
    }
}

/// Back-rank piece for a 1-based file, mirrored around the middle of the board.
///
/// Only the file `file_count - 3` gets a king, so boards other than eight
/// files wide may leave some back-rank files without a piece.
pub fn file_based_piece_type(file: u8, file_count: u8) -> Option<PieceType> {
    let file = i32::from(file);
    let file_count = i32::from(file_count);

    if file == 1 || file == file_count {
        Some(PieceType::Rook)
    } else if file == 2 || file == file_count - 1 {
        Some(PieceType::Knight)
    } else if file == 3 || file == file_count - 2 {
        Some(PieceType::Bishop)
    } else if file == 4 {
        Some(PieceType::Queen)
    } else if file == file_count - 3 {
        Some(PieceType::King)
    } else {
        None
    }
}

pub fn file_based_sub_type(file: u8, file_count: u8) -> Option<PieceSubType> {
    if file <= 3 {
        Some(PieceSubType::West)
    } else if i32::from(file) > i32::from(file_count) - 3 {
        Some(PieceSubType::East)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points() {
        assert_eq!(PieceType::King.points(), 0);
        assert_eq!(PieceType::Pawn.points(), 1);
        assert_eq!(PieceType::Bishop.points(), 3);
        assert_eq!(PieceType::Knight.points(), 3);
        assert_eq!(PieceType::Rook.points(), 5);
        assert_eq!(PieceType::Queen.points(), 9);
    }

    #[test]
    fn test_new_piece_defaults() {
        let pawn = Piece::new(PieceType::Pawn, Color::White);
        assert_eq!(pawn.sub_type, None);
        assert!(pawn.has_never_moved);
        assert!(!pawn.is_from_promotion);

        let rook = Piece::with_sub_type(PieceType::Rook, Color::Black, PieceSubType::East);
        assert_eq!(rook.color, Color::Black);
        assert_eq!(rook.sub_type, Some(PieceSubType::East));
        assert!(rook.has_never_moved);
    }

    #[test]
    fn test_standard_back_rank() {
        let expected = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for (file, piece_type) in (1..=8).zip(expected) {
            assert_eq!(file_based_piece_type(file, 8), Some(piece_type), "file {file}");
        }
    }

    #[test]
    fn test_standard_sub_types() {
        use PieceSubType::{East, West};
        let expected = [Some(West), Some(West), Some(West), None, None, Some(East), Some(East), Some(East)];
        for (file, sub_type) in (1..=8).zip(expected) {
            assert_eq!(file_based_sub_type(file, 8), sub_type, "file {file}");
        }
    }

    #[test]
    fn test_wide_back_rank_leaves_gaps() {
        // Ten files: only file 7 gets the king, files 5 and 6 stay empty.
        assert_eq!(file_based_piece_type(4, 10), Some(PieceType::Queen));
        assert_eq!(file_based_piece_type(5, 10), None);
        assert_eq!(file_based_piece_type(6, 10), None);
        assert_eq!(file_based_piece_type(7, 10), Some(PieceType::King));
        assert_eq!(file_based_piece_type(8, 10), Some(PieceType::Bishop));
        assert_eq!(file_based_piece_type(10, 10), Some(PieceType::Rook));
    }

    #[test]
    fn test_opposite_color() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }
}
