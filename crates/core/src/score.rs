//! Scoring module - score accumulation and per-event point values
//!
//! - Soft drop: +1 per player-driven step
//! - Hard drop: +2 per row travelled
//! - Line clear: `50 * n * n` for `n` rows at once (see [`line_clear_bonus`])
//!
//! [`line_clear_bonus`]: crate::matrix::line_clear_bonus

use crate::types::{HARD_DROP_POINTS_PER_ROW, SOFT_DROP_POINTS};

/// Running score. Only grows until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Add points, saturating at `u32::MAX`.
    pub fn add(&mut self, points: u32) {
        self.value = self.value.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells.saturating_mul(HARD_DROP_POINTS_PER_ROW)
    } else {
        cells.saturating_mul(SOFT_DROP_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_add_and_reset() {
        let mut score = Score::new();
        score.add(50);
        score.add(1);
        assert_eq!(score.value(), 51);
        score.reset();
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn test_score_saturates() {
        let mut score = Score::new();
        score.add(u32::MAX);
        score.add(10);
        assert_eq!(score.value(), u32::MAX);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(calculate_drop_score(10, false), 10);
        assert_eq!(calculate_drop_score(10, true), 20);
        assert_eq!(calculate_drop_score(0, true), 0);
    }
}
