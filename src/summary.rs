//! Daily nutrition totals

use crate::config::DEFAULT_DAILY_KCAL_GOAL;
use crate::model::FoodItem;

/// Rounded kilocalories for `quantity` grams of a food defined per `portion` grams
///
/// A zero portion yields 0 rather than an infinite value.
pub fn entry_energy(calories: f64, quantity: u32, portion: f64) -> i64 {
    if portion <= 0.0 {
        return 0;
    }

    (calories * quantity as f64 / portion).round() as i64
}

/// Totals derived from a day's entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutritionSummary {
    /// Sum of the per-entry rounded energies
    pub total_kcal: i64,
    /// Share of the daily goal, rounded, not capped at 100
    pub progress_percent: i64,
}

impl NutritionSummary {
    /// Summarize against the default 2400 kcal goal
    pub fn from_entries(entries: &[FoodItem]) -> Self {
        Self::with_goal(entries, DEFAULT_DAILY_KCAL_GOAL)
    }

    pub fn with_goal(entries: &[FoodItem], goal: u32) -> Self {
        let total_kcal = total_energy(entries);

        Self {
            total_kcal,
            progress_percent: progress_percent(total_kcal, goal),
        }
    }
}

/// Each entry is rounded before summing.
pub fn total_energy(entries: &[FoodItem]) -> i64 {
    entries.iter().map(FoodItem::energy).sum()
}

pub fn progress_percent(total_kcal: i64, goal: u32) -> i64 {
    if goal == 0 {
        return 0;
    }

    (total_kcal as f64 / goal as f64 * 100.0).round() as i64
}
