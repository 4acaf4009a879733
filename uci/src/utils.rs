// cozy-chess uses "king captures rook" notation for castling internally (e.g., e1h1),
// but UCI expects standard notation (e.g., e1g1). These utils handle the conversion both ways.

use cozy_chess::{
    util::{display_uci_move, parse_uci_move},
    Board, Move,
};

#[inline]
pub fn move_to_uci(board: &Board, mv: Move) -> String {
    display_uci_move(board, mv).to_string()
}

/// Parses a UCI move and checks it is legal on `board`.
pub fn uci_to_move(board: &Board, mv: &str) -> Option<Move> {
    parse_uci_move(board, mv)
        .ok()
        .filter(|&mv| board.is_legal(mv))
}
