use cozy_chess::{Board, Move};
use uci::{parse_position, PositionError};

/// A start position and the legal moves played from it.
#[derive(Debug, Clone)]
pub struct Game {
    pub start: Board,
    pub moves: Vec<Move>,
}

impl Game {
    /// Reads a game in UCI position syntax. Blank lines and `#` comments are
    /// skipped, remaining lines are joined with spaces.
    pub fn parse(text: &str) -> Result<Self, PositionError> {
        let joined = text
            .lines()
            .map(|line| line.split_once('#').map_or(line, |(code, _)| code).trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let (start, moves) = parse_position(&joined)?;
        Ok(Self { start, moves })
    }

    /// A game from the standard start position.
    pub fn from_moves(moves: &str) -> Result<Self, PositionError> {
        Self::parse(&format!("startpos moves {}", moves))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
