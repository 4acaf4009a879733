use std::fmt;

use cozy_chess::Color;

use crate::error::ConfigError;
use crate::scores::{BLUNDER_CP, INACCURACY_CP, MISTAKE_CP};

/// Severity of a played move, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Ok,
    Inaccuracy,
    Mistake,
    Blunder,
    /// The move walked into a forced mate announced by the engine.
    ForcedMate,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Ok,
        Category::Inaccuracy,
        Category::Mistake,
        Category::Blunder,
        Category::ForcedMate,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Category::Ok => "OK",
            Category::Inaccuracy => "Inaccuracy",
            Category::Mistake => "Mistake",
            Category::Blunder => "Blunder",
            Category::ForcedMate => "Forced mate",
        }
    }

    /// Annotation glyph used next to a move.
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Ok => "",
            Category::Inaccuracy => "?!",
            Category::Mistake => "?",
            Category::Blunder | Category::ForcedMate => "??",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Centipawn regression limits. A move is placed in the worst category whose
/// threshold its regression strictly exceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    inaccuracy: i32,
    mistake: i32,
    blunder: i32,
    forced_mate: Option<i32>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            inaccuracy: INACCURACY_CP,
            mistake: MISTAKE_CP,
            blunder: BLUNDER_CP,
            forced_mate: None,
        }
    }
}

impl Thresholds {
    /// Builds a validated threshold table: `0 <= inaccuracy < mistake < blunder`.
    pub fn new(inaccuracy: i32, mistake: i32, blunder: i32) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("inaccuracy", inaccuracy),
            ("mistake", mistake),
            ("blunder", blunder),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeThreshold { name, value });
            }
        }

        if inaccuracy >= mistake {
            return Err(ConfigError::NotIncreasing {
                lower: "inaccuracy",
                lower_value: inaccuracy,
                upper: "mistake",
                upper_value: mistake,
            });
        }
        if mistake >= blunder {
            return Err(ConfigError::NotIncreasing {
                lower: "mistake",
                lower_value: mistake,
                upper: "blunder",
                upper_value: blunder,
            });
        }

        Ok(Self {
            inaccuracy,
            mistake,
            blunder,
            forced_mate: None,
        })
    }

    /// Reports moves that leave the mover facing a score at or beyond `boundary`
    /// as `ForcedMate`. Usually the mate mapping's `mate_cp`.
    pub fn with_forced_mate(mut self, boundary: i32) -> Result<Self, ConfigError> {
        if boundary <= self.blunder {
            return Err(ConfigError::ForcedMateTooLow {
                forced_mate: boundary,
                blunder: self.blunder,
            });
        }
        self.forced_mate = Some(boundary);
        Ok(self)
    }

    pub fn inaccuracy(&self) -> i32 {
        self.inaccuracy
    }

    pub fn mistake(&self) -> i32 {
        self.mistake
    }

    pub fn blunder(&self) -> i32 {
        self.blunder
    }

    pub fn forced_mate(&self) -> Option<i32> {
        self.forced_mate
    }

    /// Places a non-negative regression on the threshold ladder.
    #[inline]
    pub fn grade(&self, regression: i32) -> Category {
        if regression > self.blunder {
            Category::Blunder
        } else if regression > self.mistake {
            Category::Mistake
        } else if regression > self.inaccuracy {
            Category::Inaccuracy
        } else {
            Category::Ok
        }
    }
}

/// How much `side`'s own position got worse going from `prev` to `curr`.
/// Negative when the move improved the mover's score.
#[inline]
pub fn regression(prev: i32, curr: i32, side: Color) -> i32 {
    match side {
        Color::White => prev.saturating_sub(curr),
        Color::Black => curr.saturating_sub(prev),
    }
}

/// Classifies one move from the White-perspective scores before and after it.
///
/// A move that improved the mover's score is always `Ok`, however large the
/// swing. Otherwise the regression is graded against the thresholds.
pub fn classify(prev: i32, curr: i32, side_to_move: Color, thresholds: &Thresholds) -> Category {
    let lost = regression(prev, curr, side_to_move);
    if lost <= 0 {
        return Category::Ok;
    }

    if let Some(boundary) = thresholds.forced_mate {
        // Only the move that crosses into the mate line is flagged; later
        // moves inside it shorten the mate without being a new error.
        let before = own_score(prev, side_to_move);
        let after = own_score(curr, side_to_move);
        if before > -boundary && after <= -boundary {
            return Category::ForcedMate;
        }
    }

    thresholds.grade(lost)
}

#[inline]
fn own_score(score: i32, side: Color) -> i32 {
    match side {
        Color::White => score,
        Color::Black => score.saturating_neg(),
    }
}

/// Classifies a move by how far the score after it falls short of the score
/// the engine expected after its own best move in the same position.
pub fn classify_against_best(
    best: i32,
    played: i32,
    side_to_move: Color,
    thresholds: &Thresholds,
) -> Category {
    let lost = regression(best, played, side_to_move);
    if lost <= 0 {
        return Category::Ok;
    }
    thresholds.grade(lost)
}
