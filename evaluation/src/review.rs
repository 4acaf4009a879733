use cozy_chess::Color;

use crate::classify::{classify, Category, Thresholds};
use crate::scores::NO_PREVIOUS_SCORE;

/// Classifies a whole sequence of plies, each given as the side that moved
/// and the White-perspective score after the move.
///
/// Each ply is compared against the score after the ply before it; the
/// first ply is compared against `opening`, or `NO_PREVIOUS_SCORE` if none.
pub fn review(opening: Option<i32>, plies: &[(Color, i32)], thresholds: &Thresholds) -> Vec<Category> {
    let start = opening.unwrap_or(NO_PREVIOUS_SCORE);

    plies
        .iter()
        .scan(start, |prev, &(side, curr)| {
            let category = classify(*prev, curr, side, thresholds);
            *prev = curr;
            Some(category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_improvements_are_ok() {
        let plies = [
            (Color::White, 20),
            (Color::Black, -150),
            (Color::White, -140),
            (Color::Black, -800),
        ];
        let categories = review(Some(15), &plies, &Thresholds::default());
        assert_eq!(categories, vec![Category::Ok; 4]);
    }

    #[test]
    fn test_regressions_are_graded_per_ply() {
        let plies = [
            (Color::White, 30),
            (Color::Black, 100),
            (Color::White, -150),
            (Color::Black, 60),
        ];
        let categories = review(Some(15), &plies, &Thresholds::default());
        // W: 15 -> 30 improves. B: 30 -> 100 loses 70. W: 100 -> -150 loses 250. B: -150 -> 60 loses 210.
        assert_eq!(
            categories,
            vec![
                Category::Ok,
                Category::Inaccuracy,
                Category::Blunder,
                Category::Blunder
            ]
        );
    }

    #[test]
    fn test_missing_opening_uses_balanced_baseline() {
        let plies = [(Color::White, -95)];
        let categories = review(None, &plies, &Thresholds::default());
        assert_eq!(categories, vec![Category::Mistake]);
    }

    #[test]
    fn test_empty_game() {
        assert!(review(None, &[], &Thresholds::default()).is_empty());
    }
}
