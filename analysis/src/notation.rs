use cozy_chess::{Board, GameStatus, Move, Piece, Square};

// cozy-chess only speaks UCI, so SAN is built by hand.

/// Standard Algebraic Notation for a legal move on `board`, with `+`/`#` suffixes.
pub fn to_san(board: &Board, mv: Move) -> String {
    let Some(moving_piece) = board.piece_on(mv.from) else {
        return mv.to_string();
    };

    let mut san = String::new();

    // Castling is encoded as the king capturing its own rook
    if moving_piece == Piece::King && board.colors(board.side_to_move()).has(mv.to) {
        san.push_str(if mv.to.file() as u8 > mv.from.file() as u8 {
            "O-O"
        } else {
            "O-O-O"
        });
    } else {
        let is_capture = board.colors(!board.side_to_move()).has(mv.to)
            || (moving_piece == Piece::Pawn && mv.from.file() != mv.to.file());

        if moving_piece != Piece::Pawn {
            san.push(piece_to_char(moving_piece));
            san.push_str(&disambiguation(board, mv, moving_piece));
        } else if is_capture {
            // For pawn captures, include source file
            san.push(file_to_char(mv.from));
        }

        if is_capture {
            san.push('x');
        }

        san.push_str(&square_to_string(mv.to));

        if let Some(promotion) = mv.promotion {
            san.push('=');
            san.push(piece_to_char(promotion));
        }
    }

    let mut after = board.clone();
    after.play_unchecked(mv);
    if !after.checkers().is_empty() {
        san.push(if after.status() == GameStatus::Won {
            '#'
        } else {
            '+'
        });
    }

    san
}

#[inline]
fn piece_to_char(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}

#[inline]
fn file_to_char(square: Square) -> char {
    (b'a' + square.file() as u8) as char
}

#[inline]
fn rank_to_char(square: Square) -> char {
    (b'1' + square.rank() as u8) as char
}

#[inline]
fn square_to_string(square: Square) -> String {
    format!("{}{}", file_to_char(square), rank_to_char(square))
}

fn disambiguation(board: &Board, mv: Move, piece: Piece) -> String {
    // Other pieces of the same type that could also reach the destination
    let mut rivals: Vec<Square> = Vec::new();
    board.generate_moves_for(board.colored_pieces(board.side_to_move(), piece), |moves| {
        if moves.from != mv.from && moves.to.has(mv.to) {
            rivals.push(moves.from);
        }
        false
    });

    if rivals.is_empty() {
        return String::new();
    }

    if !rivals.iter().any(|sq| sq.file() == mv.from.file()) {
        return file_to_char(mv.from).to_string();
    }
    if !rivals.iter().any(|sq| sq.rank() == mv.from.rank()) {
        return rank_to_char(mv.from).to_string();
    }

    square_to_string(mv.from)
}
