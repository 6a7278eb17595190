//! Pseudo-legal move generation and check detection.
//!
//! Generators report destination squares only. They never look at whether
//! the move would leave the mover's own king attacked, and they never
//! mutate the board.

use log::{debug, trace};

use crate::{Board, Color, PieceType, Position, Square};

/// Northwest, northeast, southeast, southwest.
const DIAGONALS: [(i32, i32); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

/// North, east, south, west.
const ORTHOGONALS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// (file, rank) knight jumps, in emission order.
const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// The target square exists and is empty.
pub fn can_move_piece(square: Option<&Square>) -> bool {
    square.is_some_and(Square::is_empty)
}

/// The target square holds an enemy piece that may be taken. Kings are only
/// takeable when `allow_king_capture` is set, which only the check detector does.
pub fn can_take_piece(color: Color, square: Option<&Square>, allow_king_capture: bool) -> bool {
    match square.and_then(Square::piece) {
        Some(target) => {
            target.color != color && (allow_king_capture || target.piece_type != PieceType::King)
        }
        None => false,
    }
}

pub fn can_move_or_take_piece(color: Color, square: Option<&Square>, allow_king_capture: bool) -> bool {
    can_move_piece(square) || can_take_piece(color, square, allow_king_capture)
}

/// Walks from `origin` along one direction, nearest square first, stopping at
/// the board edge or the first occupied square. That square is included only
/// if it can be taken.
pub fn ray_moves(
    board: &Board,
    origin: Position,
    color: Color,
    (file_step, rank_step): (i32, i32),
    allow_king_capture: bool,
) -> Vec<Position> {
    let mut moves = Vec::new();
    if !board.is_position_valid(origin) {
        return moves;
    }

    let (mut file_delta, mut rank_delta) = (file_step, rank_step);
    while let Some(target) = board.offset(origin, file_delta, rank_delta) {
        let square = board.square(target);

        if can_move_piece(square) {
            moves.push(target);
        } else {
            if can_take_piece(color, square, allow_king_capture) {
                moves.push(target);
            }
            break;
        }

        file_delta += file_step;
        rank_delta += rank_step;
    }

    moves
}

fn rays(
    board: &Board,
    origin: Position,
    color: Color,
    directions: &[(i32, i32)],
    allow_king_capture: bool,
) -> Vec<Position> {
    directions
        .iter()
        .flat_map(|&direction| ray_moves(board, origin, color, direction, allow_king_capture))
        .collect()
}

pub fn bishop_moves(board: &Board, origin: Position, color: Color, allow_king_capture: bool) -> Vec<Position> {
    rays(board, origin, color, &DIAGONALS, allow_king_capture)
}

pub fn rook_moves(board: &Board, origin: Position, color: Color, allow_king_capture: bool) -> Vec<Position> {
    rays(board, origin, color, &ORTHOGONALS, allow_king_capture)
}

/// Bishop rays followed by rook rays.
pub fn queen_moves(board: &Board, origin: Position, color: Color, allow_king_capture: bool) -> Vec<Position> {
    let mut moves = bishop_moves(board, origin, color, allow_king_capture);
    moves.extend(rook_moves(board, origin, color, allow_king_capture));
    moves
}

pub fn knight_moves(board: &Board, origin: Position, color: Color, allow_king_capture: bool) -> Vec<Position> {
    if !board.is_position_valid(origin) {
        return Vec::new();
    }

    KNIGHT_JUMPS
        .iter()
        .filter_map(|&(file_delta, rank_delta)| board.offset(origin, file_delta, rank_delta))
        .filter(|&target| can_move_or_take_piece(color, board.square(target), allow_king_capture))
        .collect()
}

/// Neighbouring squares, clipped to the board, rank by rank from the bottom
/// and file by file from the west within each rank.
pub fn king_moves(board: &Board, origin: Position, color: Color, allow_king_capture: bool) -> Vec<Position> {
    let mut moves = Vec::new();
    if !board.is_position_valid(origin) {
        return moves;
    }

    let min_rank = board.previous_rank(origin.rank).unwrap_or(origin.rank);
    let max_rank = board.next_rank(origin.rank).unwrap_or(origin.rank);
    let min_file = board.offset(origin, -1, 0).map_or(origin.file, |p| p.file);
    let max_file = board.offset(origin, 1, 0).map_or(origin.file, |p| p.file);

    for rank in min_rank..=max_rank {
        for file in min_file..=max_file {
            let target = Position { file, rank };
            if target != origin && can_move_or_take_piece(color, board.square(target), allow_king_capture) {
                moves.push(target);
            }
        }
    }

    moves
}

/// Rank a pawn of `color` starts on: second from its own edge.
pub fn pawn_home_rank(board: &Board, color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => board.rank_count().saturating_sub(1),
    }
}

/// Single step, west capture, east capture, then the double step from the
/// home rank when the single step was open.
pub fn pawn_moves(board: &Board, origin: Position, color: Color, allow_king_capture: bool) -> Vec<Position> {
    let mut moves = Vec::new();
    if !board.is_position_valid(origin) {
        return moves;
    }

    let direction = match color {
        Color::White => 1,
        Color::Black => -1,
    };

    let forward = board.offset(origin, 0, direction);
    let single_step_open = forward.is_some_and(|target| can_move_piece(board.square(target)));
    if let Some(target) = forward.filter(|_| single_step_open) {
        moves.push(target);
    }

    for file_delta in [-1, 1] {
        if let Some(target) = board.offset(origin, file_delta, direction) {
            if can_take_piece(color, board.square(target), allow_king_capture) {
                moves.push(target);
            }
        }
    }

    if single_step_open && origin.rank == pawn_home_rank(board, color) {
        if let Some(target) = board.offset(origin, 0, 2 * direction) {
            if can_move_piece(board.square(target)) {
                moves.push(target);
            }
        }
    }

    moves
}

/// Pseudo-legal destinations of whatever piece stands on `origin`. Empty for
/// an empty or off-board square.
pub fn moves_for(board: &Board, origin: Position, allow_king_capture: bool) -> Vec<Position> {
    let Some(piece) = board.get_piece(origin) else {
        return Vec::new();
    };

    let generate: fn(&Board, Position, Color, bool) -> Vec<Position> = match piece.piece_type {
        PieceType::King => king_moves,
        PieceType::Queen => queen_moves,
        PieceType::Rook => rook_moves,
        PieceType::Bishop => bishop_moves,
        PieceType::Knight => knight_moves,
        PieceType::Pawn => pawn_moves,
    };
    let moves = generate(board, origin, piece.color, allow_king_capture);

    trace!("{:?} {:?} on {}: {} moves", piece.color, piece.piece_type, origin, moves.len());
    moves
}

/// Whether some enemy piece other than a king could move onto `color`'s king.
///
/// Kings are skipped as attackers, so two adjacent kings do not put each
/// other in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let is_own_king = |target: &Position| {
        board
            .get_piece(*target)
            .is_some_and(|p| p.piece_type == PieceType::King && p.color == color)
    };

    for square in board.squares() {
        let Some(attacker) = square.piece() else {
            continue;
        };
        if attacker.color == color || attacker.piece_type == PieceType::King {
            continue;
        }

        if moves_for(board, square.position(), true).iter().any(&is_own_king) {
            debug!(
                "{:?} is in check from {:?} on {}",
                color,
                attacker.piece_type,
                square.position()
            );
            return true;
        }
    }

    false
}
