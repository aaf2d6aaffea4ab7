//! Assignment Index
//!
//! Three-level grouping of the flat assignment collection:
//! (year, month) -> day -> meal type -> ordered list.
//!
//! Rebuilt from scratch whenever the flat collection changes; one pass,
//! linear in the number of assignments. Every assignment is indexed under
//! its actual calendar month, including dates outside the displayed year;
//! the grid simply never queries months of another year.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::domain::{MealAssignment, MealType};

type DayBuckets = BTreeMap<MealType, Vec<MealAssignment>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentIndex {
    months: BTreeMap<(i32, u32), BTreeMap<u32, DayBuckets>>,
}

impl AssignmentIndex {
    /// Build the grouping in one pass, preserving the relative order of the
    /// source collection within each cell.
    pub fn build(assignments: &[MealAssignment]) -> Self {
        let mut months: BTreeMap<(i32, u32), BTreeMap<u32, DayBuckets>> = BTreeMap::new();
        for a in assignments {
            months
                .entry((a.date.year(), a.date.month()))
                .or_default()
                .entry(a.date.day())
                .or_default()
                .entry(a.meal_type)
                .or_default()
                .push(a.clone());
        }
        Self { months }
    }

    /// Assignments scheduled in one cell, in source order.
    /// A key with no entries yields an empty slice, never an error.
    pub fn cell(&self, year: i32, month: u32, day: u32, meal_type: MealType) -> &[MealAssignment] {
        self.months
            .get(&(year, month))
            .and_then(|days| days.get(&day))
            .and_then(|buckets| buckets.get(&meal_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All assignments of one day, across every meal slot
    pub fn day(&self, year: i32, month: u32, day: u32) -> impl Iterator<Item = &MealAssignment> {
        self.months
            .get(&(year, month))
            .and_then(|days| days.get(&day))
            .into_iter()
            .flat_map(|buckets| buckets.values().flatten())
    }
}
