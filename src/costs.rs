//! Cost Aggregation
//!
//! Day totals are derived from the assignment index on every read; the
//! dataset is bounded by year length times slot count, so no caching layer.
//! Month totals are the authoritative server-supplied values and are never
//! recomputed locally, even when they disagree with the local sum.

use crate::domain::MonthCost;
use crate::index::AssignmentIndex;

pub struct CostAggregator<'a> {
    index: &'a AssignmentIndex,
    month_costs: &'a [MonthCost],
}

impl<'a> CostAggregator<'a> {
    pub fn new(index: &'a AssignmentIndex, month_costs: &'a [MonthCost]) -> Self {
        Self { index, month_costs }
    }

    /// Sum of item prices across every meal slot of one day
    pub fn day_total(&self, year: i32, month: u32, day: u32) -> f64 {
        self.index.day(year, month, day).map(|a| a.item_price).sum()
    }

    /// Authoritative month total; zero before the first cost fetch lands
    pub fn month_total(&self, month: u32) -> f64 {
        self.month_costs
            .iter()
            .find(|mc| mc.month == month)
            .map(|mc| mc.cost)
            .unwrap_or(0.0)
    }
}
