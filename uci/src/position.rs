//! Game input in UCI `position` syntax.
//!
//! `[position] startpos [moves <m1> <m2> ...]` or `[position] fen <FEN> [moves ...]`.
//! Moves use standard UCI castling notation (e1g1), as engines and GUIs write them.

use std::error::Error;
use std::fmt;

use cozy_chess::{Board, Move};

use crate::utils::uci_to_move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Neither `startpos` nor `fen` was given.
    MissingStart(String),
    InvalidFen(String),
    /// A move that does not parse, or is not legal where it is played. `ply` is 1-based.
    InvalidMove { ply: usize, mv: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingStart(input) => {
                write!(f, "expected 'startpos' or 'fen <FEN>', got '{}'", input)
            }
            PositionError::InvalidFen(fen) => write!(f, "invalid FEN '{}'", fen),
            PositionError::InvalidMove { ply, mv } => {
                write!(f, "illegal or malformed move '{}' at ply {}", mv, ply)
            }
        }
    }
}

impl Error for PositionError {}

/// Parses a start position and the moves played from it.
pub fn parse_position(input: &str) -> Result<(Board, Vec<Move>), PositionError> {
    let input = input.trim();
    let input = input.strip_prefix("position").unwrap_or(input).trim();

    let (setup, moves) = match input.split_once("moves") {
        Some((setup, moves)) => (setup.trim(), moves),
        None => (input, ""),
    };

    let mut board = if setup == "startpos" {
        Board::default()
    } else if let Some(fen) = setup.strip_prefix("fen") {
        let fen = fen.trim();
        Board::from_fen(fen, false).map_err(|_| PositionError::InvalidFen(fen.to_string()))?
    } else {
        return Err(PositionError::MissingStart(setup.to_string()));
    };
    let start = board.clone();

    let mut played = Vec::new();
    for (i, mv_str) in moves.split_whitespace().enumerate() {
        let mv = uci_to_move(&board, mv_str).ok_or_else(|| PositionError::InvalidMove {
            ply: i + 1,
            mv: mv_str.to_string(),
        })?;
        board.play_unchecked(mv);
        played.push(mv);
    }

    Ok((start, played))
}
