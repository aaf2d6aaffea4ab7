//! Calendar Grid Model
//!
//! Pure mapping from (year, assignment index, month costs) to a renderable
//! grid description: per month, a header of day/weekday pairs, one row per
//! meal slot, per-day totals and the authoritative month total. Identical
//! inputs always yield structurally identical output, so the grid is simply
//! recomputed after every local mutation.

use chrono::{Datelike, NaiveDate};

use crate::costs::CostAggregator;
use crate::domain::{weekday_label, MealAssignment, MealType, MonthCost};
use crate::index::AssignmentIndex;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

#[derive(Debug, Clone, PartialEq)]
pub struct YearGrid {
    pub year: i32,
    pub months: Vec<MonthGrid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub month: u32,
    pub name: &'static str,
    pub days: Vec<DayHeader>,
    pub rows: Vec<MealRow>,
    /// Indexed by day - 1, parallel to `days`
    pub day_totals: Vec<f64>,
    pub month_total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayHeader {
    pub day: u32,
    pub weekday: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealRow {
    pub meal_type: MealType,
    /// One cell per day of the month, in day order
    pub cells: Vec<Vec<MealAssignment>>,
}

/// Build the full renderable grid for one year, months 1-12
pub fn build_year_grid(year: i32, index: &AssignmentIndex, month_costs: &[MonthCost]) -> YearGrid {
    let costs = CostAggregator::new(index, month_costs);
    let months = (1..=12u32)
        .map(|month| {
            let len = days_in_month(year, month);
            let days = (1..=len)
                .map(|day| DayHeader { day, weekday: weekday_label(date_of(year, month, day)) })
                .collect();
            let rows = MealType::ALL
                .iter()
                .map(|&meal_type| MealRow {
                    meal_type,
                    cells: (1..=len)
                        .map(|day| index.cell(year, month, day, meal_type).to_vec())
                        .collect(),
                })
                .collect();
            let day_totals = (1..=len).map(|day| costs.day_total(year, month, day)).collect();
            MonthGrid {
                month,
                name: MONTH_NAMES[(month - 1) as usize],
                days,
                rows,
                day_totals,
                month_total: costs.month_total(month),
            }
        })
        .collect();
    YearGrid { year, months }
}

/// Actual length of a calendar month, leap years included
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

fn date_of(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
