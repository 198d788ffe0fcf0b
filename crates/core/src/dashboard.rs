//! Dashboard chart shaping.
//!
//! The database returns sparse per-day aggregates; these helpers turn them
//! into fixed-length, chart-ready series. Labels use US short formats
//! (`Oct 18`, `Mon`).

use std::collections::HashMap;

use chrono::Duration;
use serde::Serialize;

use crate::types::Date;

/// Length of the plant growth series in days (today inclusive).
pub const GROWTH_WINDOW_DAYS: u32 = 30;

/// Length of the task completion series in days (today inclusive).
pub const TASK_WINDOW_DAYS: u32 = 7;

/// Number of beds shown in the capacity chart.
pub const CAPACITY_TOP_N: i64 = 10;

/// Fallback colour for categories without an assigned one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6366f1";

/// One point in the cumulative plant growth series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub date: String,
    pub plants: i64,
}

/// One day in the task completion series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDay {
    pub day: String,
    pub completed: i64,
    pub pending: i64,
}

/// First day of a window of `days` days ending on `today`.
pub fn window_start(today: Date, days: u32) -> Date {
    today - Duration::days(i64::from(days.saturating_sub(1)))
}

/// Build the growth series, carrying the last known cumulative value forward.
///
/// `cumulative` maps a day to the running total as of that day. Days before
/// the first known value report zero.
pub fn forward_fill_growth(cumulative: &[(Date, i64)], today: Date, days: u32) -> Vec<GrowthPoint> {
    let known: HashMap<Date, i64> = cumulative.iter().copied().collect();
    let start = window_start(today, days);
    let mut last = 0;

    (0..days)
        .map(|offset| {
            let date = start + Duration::days(i64::from(offset));
            if let Some(&value) = known.get(&date) {
                last = value;
            }
            GrowthPoint {
                date: date.format("%b %-d").to_string(),
                plants: last,
            }
        })
        .collect()
}

/// Build the task series: completions per day against the expected count.
///
/// Every day expects `bed_count * default_task_count` completions regardless
/// of which tasks apply to which bed.
pub fn task_completion_series(
    completed_per_day: &[(Date, i64)],
    today: Date,
    days: u32,
    bed_count: i64,
    default_task_count: i64,
) -> Vec<TaskDay> {
    let known: HashMap<Date, i64> = completed_per_day.iter().copied().collect();
    let expected = bed_count * default_task_count;
    let start = window_start(today, days);

    (0..days)
        .map(|offset| {
            let date = start + Duration::days(i64::from(offset));
            let completed = known.get(&date).copied().unwrap_or(0);
            TaskDay {
                day: date.format("%a").to_string(),
                completed,
                pending: (expected - completed).max(0),
            }
        })
        .collect()
}

/// Chart colour for a bed species category.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "Forestry" => "#22c55e",
        "Fruit Tree" => "#f97316",
        "Ornamental" => "#a855f7",
        _ => DEFAULT_CATEGORY_COLOR,
    }
}

/// Round a percentage to two decimals.
pub fn round_percentage(value: f64) -> f64 {
    crate::beds::round2(value)
}
