//! Power-up module - skill points and the power-up inventory
//!
//! Score converts into skill points at one point per 10 score. Partial
//! progress is carried between awards, so five awards of 2 score still add up
//! to one skill point. Skill points buy power-ups; using one consumes a unit
//! from the inventory. Running the effect itself is the board's job, see
//! [`Board::activate_power_up`](crate::board::Board::activate_power_up).

use crate::types::{PowerUp, SCORE_PER_SKILL_POINT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerUpEconomy {
    inventory: [u32; PowerUp::ALL.len()],
    skill_points: u32,
    /// Score awarded but not yet converted, always below `SCORE_PER_SKILL_POINT`.
    carried_score: u32,
}

impl PowerUpEconomy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill_points(&self) -> u32 {
        self.skill_points
    }

    /// Carried partial skill point, in `[0, 1)`.
    pub fn fractional_skill_points(&self) -> f64 {
        self.carried_score as f64 / SCORE_PER_SKILL_POINT as f64
    }

    /// Convert earned score into skill points, keeping the remainder.
    ///
    /// Returns the whole skill points gained by this call.
    pub fn award(&mut self, score_delta: u32) -> u32 {
        let total = self.carried_score.saturating_add(score_delta);
        let whole = total / SCORE_PER_SKILL_POINT;
        self.carried_score = total % SCORE_PER_SKILL_POINT;
        self.skill_points = self.skill_points.saturating_add(whole);
        whole
    }

    /// Buy one unit of `kind` if enough skill points are available.
    pub fn purchase(&mut self, kind: PowerUp) -> bool {
        let cost = kind.cost();
        if self.skill_points < cost {
            return false;
        }
        self.skill_points -= cost;
        let owned = &mut self.inventory[kind.index()];
        *owned = owned.saturating_add(1);
        true
    }

    /// Consume one unit of `kind`. False, with nothing consumed, if none is owned.
    pub fn activate(&mut self, kind: PowerUp) -> bool {
        let owned = &mut self.inventory[kind.index()];
        if *owned == 0 {
            return false;
        }
        *owned -= 1;
        true
    }

    pub fn quantity(&self, kind: PowerUp) -> u32 {
        self.inventory[kind.index()]
    }

    /// Empty the inventory and forget all skill points, including carried progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_awards_accumulate() {
        let mut economy = PowerUpEconomy::new();
        assert_eq!(economy.award(5), 0);
        assert_eq!(economy.skill_points(), 0);
        assert_eq!(economy.award(5), 1);
        assert_eq!(economy.skill_points(), 1);
    }

    #[test]
    fn test_remainder_is_kept() {
        let mut economy = PowerUpEconomy::new();
        assert_eq!(economy.award(25), 2);
        assert_eq!(economy.skill_points(), 2);
        assert!((economy.fractional_skill_points() - 0.5).abs() < 1e-9);

        economy.award(5);
        assert_eq!(economy.skill_points(), 3);
        assert_eq!(economy.fractional_skill_points(), 0.0);
    }

    #[test]
    fn test_single_point_awards_reach_a_skill_point() {
        let mut economy = PowerUpEconomy::new();
        for _ in 0..9 {
            economy.award(1);
        }
        assert_eq!(economy.skill_points(), 0);
        economy.award(1);
        assert_eq!(economy.skill_points(), 1);
    }

    #[test]
    fn test_free_purchase_and_activation() {
        let mut economy = PowerUpEconomy::new();
        assert!(!economy.activate(PowerUp::BombPiece));

        assert!(economy.purchase(PowerUp::BombPiece));
        assert!(economy.purchase(PowerUp::BombPiece));
        assert_eq!(economy.quantity(PowerUp::BombPiece), 2);
        assert_eq!(economy.quantity(PowerUp::RowClearer), 0);

        assert!(economy.activate(PowerUp::BombPiece));
        assert_eq!(economy.quantity(PowerUp::BombPiece), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut economy = PowerUpEconomy::new();
        economy.award(37);
        economy.purchase(PowerUp::SlowMotion);
        economy.reset();

        assert_eq!(economy, PowerUpEconomy::new());
        assert_eq!(economy.fractional_skill_points(), 0.0);
    }
}
