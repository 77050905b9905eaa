//! Scoring module - score accumulation and highscore tracking
//!
//! A match is worth `match_count * multiplier` points, where the multiplier is
//! read from the [`Booster`](crate::booster::Booster) by the caller. The
//! highscore is loaded from the store once and written back whenever the
//! running score passes it.

use tracing::info;

use crate::store::HighscoreStore;
use crate::types::MILESTONE_MIN_SCORE;

/// Result of one `add_score` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreChange {
    pub before: u64,
    pub after: u64,
    pub points: u64,
    /// The score gained a decimal digit and is at least 100.
    pub milestone: bool,
    pub new_highscore: bool,
}

/// Number of decimal digits (0 has one digit).
pub fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

/// Milestone rule: the digit count grew and the new score is at least 100.
///
/// A jump that skips several digit boundaries still counts once.
pub fn crosses_milestone(before: u64, after: u64) -> bool {
    after >= MILESTONE_MIN_SCORE && digit_count(after) > digit_count(before)
}

/// Current score and persistent highscore.
#[derive(Debug)]
pub struct Score {
    current: u64,
    highscore: u64,
    store: Box<dyn HighscoreStore>,
}

impl Score {
    /// Create a score, loading the highscore from `store`
    pub fn new(store: Box<dyn HighscoreStore>) -> Self {
        let highscore = store.load_highscore();
        Self {
            current: 0,
            highscore,
            store,
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn highscore(&self) -> u64 {
        self.highscore
    }

    /// Add `match_count * multiplier` points.
    pub fn add_score(&mut self, match_count: u32, multiplier: u32) -> ScoreChange {
        let before = self.current;
        let points = u64::from(match_count) * u64::from(multiplier);
        self.current = self.current.saturating_add(points);

        let new_highscore = self.current > self.highscore;
        if new_highscore {
            self.highscore = self.current;
            self.store.store_highscore(self.highscore);
        }

        let milestone = crosses_milestone(before, self.current);
        if milestone {
            info!(score = self.current, "score milestone");
        }

        ScoreChange {
            before,
            after: self.current,
            points,
            milestone,
            new_highscore,
        }
    }

    /// Start a new game; the highscore is kept
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(999), 3);
        assert_eq!(digit_count(1000), 4);
    }

    #[test]
    fn test_milestones() {
        assert!(!crosses_milestone(9, 10)); // below 100
        assert!(crosses_milestone(99, 100));
        assert!(crosses_milestone(98, 104));
        assert!(!crosses_milestone(100, 150));
        assert!(crosses_milestone(999, 1001));
        assert!(crosses_milestone(95, 1200)); // two boundaries, one milestone
    }

    #[test]
    fn test_add_score_uses_multiplier() {
        let mut score = Score::new(Box::new(MemoryStore::new()));
        let change = score.add_score(1, 1);
        assert_eq!(change.points, 1);
        let change = score.add_score(1, 4);
        assert_eq!(change.before, 1);
        assert_eq!(change.after, 5);
        assert_eq!(score.current(), 5);
    }

    #[test]
    fn test_highscore_loaded_and_only_raised() {
        let mut score = Score::new(Box::new(MemoryStore::with_highscore(10)));
        assert_eq!(score.highscore(), 10);

        let change = score.add_score(1, 6);
        assert!(!change.new_highscore);
        assert_eq!(score.highscore(), 10);

        let change = score.add_score(1, 6);
        assert!(change.new_highscore);
        assert_eq!(score.highscore(), 12);
    }

    #[test]
    fn test_reset_keeps_highscore() {
        let mut score = Score::new(Box::new(MemoryStore::new()));
        score.add_score(1, 3);
        score.reset();
        assert_eq!(score.current(), 0);
        assert_eq!(score.highscore(), 3);
    }
}
