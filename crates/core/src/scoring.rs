//! Scoring module - score table, levels and the speed curve
//!
//! - Line clears pay `LINE_SCORES[n] * level`, with 4 or more rows paying the
//!   4-row value. The level is the one in effect *before* the clear.
//! - Soft drops pay 1 point per cell, hard drops 2 points per cell.
//! - Level is `total_lines / 10 + 1`; the fall interval shrinks by 70ms per
//!   level down to an 80ms floor.

use crate::types::{
    BASE_FALL_INTERVAL_MS, FALL_INTERVAL_FLOOR_MS, FALL_INTERVAL_STEP_MS, HARD_DROP_POINTS,
    LINES_PER_LEVEL, LINE_SCORES, SOFT_DROP_POINTS,
};

/// Calculate line clear score
/// lines: number of lines cleared
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells.saturating_mul(HARD_DROP_POINTS)
    } else {
        cells.saturating_mul(SOFT_DROP_POINTS)
    }
}

/// Level for a cumulative line count (starts at 1)
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, in milliseconds
pub fn fall_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(FALL_INTERVAL_STEP_MS);
    BASE_FALL_INTERVAL_MS
        .saturating_sub(reduction)
        .max(FALL_INTERVAL_FLOOR_MS)
}

/// Running score, level and speed of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Progression {
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
}

impl Progression {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: fall_interval_ms(1),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Record a clear of `count` rows and return the points it earned.
    ///
    /// A zero clear changes nothing.
    pub fn on_lines_cleared(&mut self, count: usize) -> u32 {
        if count == 0 {
            return 0;
        }

        let delta = calculate_line_score(count, self.level);
        self.score = self.score.saturating_add(delta);
        self.lines = self.lines.saturating_add(count as u32);
        self.level = calculate_level(self.lines);
        self.fall_interval_ms = fall_interval_ms(self.level);
        delta
    }

    /// One cell of soft drop.
    pub fn on_soft_drop_cell(&mut self) -> u32 {
        let delta = calculate_drop_score(1, false);
        self.score = self.score.saturating_add(delta);
        delta
    }

    /// `cells` cells of hard drop.
    pub fn on_hard_drop_cells(&mut self, cells: u32) -> u32 {
        let delta = calculate_drop_score(cells, true);
        self.score = self.score.saturating_add(delta);
        delta
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        // Level 1
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 100);
        assert_eq!(calculate_line_score(2, 1), 300);
        assert_eq!(calculate_line_score(3, 1), 500);
        assert_eq!(calculate_line_score(4, 1), 800);

        // Level 3
        assert_eq!(calculate_line_score(1, 3), 300);
        assert_eq!(calculate_line_score(2, 3), 900);
        assert_eq!(calculate_line_score(3, 3), 1500);
        assert_eq!(calculate_line_score(4, 3), 2400);
    }

    #[test]
    fn test_more_than_four_lines_pays_four_line_value() {
        assert_eq!(calculate_line_score(5, 1), 800);
        assert_eq!(calculate_line_score(7, 2), 1600);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(calculate_drop_score(10, false), 10);
        assert_eq!(calculate_drop_score(10, true), 20);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(20), 3);
        assert_eq!(calculate_level(55), 6);
    }

    #[test]
    fn test_fall_intervals() {
        assert_eq!(fall_interval_ms(1), 1000);
        assert_eq!(fall_interval_ms(2), 930);
        assert_eq!(fall_interval_ms(3), 860);
        assert_eq!(fall_interval_ms(6), 650);
        assert_eq!(fall_interval_ms(14), 90);
        assert_eq!(fall_interval_ms(15), 80);
        assert_eq!(fall_interval_ms(100), 80);
    }

    #[test]
    fn test_zero_clear_changes_nothing() {
        let mut p = Progression::new();
        assert_eq!(p.on_lines_cleared(0), 0);
        assert_eq!(p, Progression::new());
    }

    #[test]
    fn test_clear_uses_level_before_update() {
        let mut p = Progression::new();
        p.on_lines_cleared(4);
        p.on_lines_cleared(4);
        assert_eq!(p.lines(), 8);
        assert_eq!(p.level(), 1);

        // Crosses into level 2, but pays at level 1.
        assert_eq!(p.on_lines_cleared(2), 300);
        assert_eq!(p.level(), 2);
        assert_eq!(p.fall_interval_ms(), 930);

        assert_eq!(p.on_lines_cleared(1), 200);
        assert_eq!(p.score(), 800 + 800 + 300 + 200);
    }

    #[test]
    fn test_progression_curve() {
        let mut p = Progression::new();
        for _ in 0..10 {
            p.on_lines_cleared(1);
        }
        assert_eq!(p.level(), 2);
        assert_eq!(p.fall_interval_ms(), 1000 - 70);

        for _ in 0..10 {
            p.on_lines_cleared(1);
        }
        assert_eq!(p.level(), 3);
        assert_eq!(p.fall_interval_ms(), 1000 - 140);

        for _ in 0..35 {
            p.on_lines_cleared(1);
        }
        assert_eq!(p.lines(), 55);
        assert_eq!(p.level(), 6);
        assert_eq!(p.fall_interval_ms(), 1000 - 350);
    }

    #[test]
    fn test_drop_points_accumulate() {
        let mut p = Progression::new();
        assert_eq!(p.on_soft_drop_cell(), 1);
        assert_eq!(p.on_hard_drop_cells(18), 36);
        assert_eq!(p.score(), 37);
    }
}
