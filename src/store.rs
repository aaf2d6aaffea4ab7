//! Planner State Store
//!
//! The single application state: flat assignment collection, pantry
//! snapshot, authoritative month costs and the drag session. Mutated only
//! through the command layer; the index, cost totals and grid are derived
//! from it on demand and never persisted independently.

use crate::domain::{MealAssignment, MonthCost, PantryItem};
use crate::dragdrop::DragSession;
use crate::grid::{build_year_grid, YearGrid};
use crate::index::AssignmentIndex;

#[derive(Debug, Clone)]
pub struct PlannerState {
    /// The displayed calendar year
    pub year: i32,
    pub pantry: Vec<PantryItem>,
    pub assignments: Vec<MealAssignment>,
    pub month_costs: Vec<MonthCost>,
    pub drag: DragSession,
    next_placeholder_id: i64,
}

impl PlannerState {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            pantry: Vec::new(),
            assignments: Vec::new(),
            month_costs: Vec::new(),
            drag: DragSession::Idle,
            next_placeholder_id: -1,
        }
    }

    /// Next locally generated id for a row still awaiting its server id.
    /// Negative, so it can never collide with a server-assigned one.
    pub(crate) fn placeholder_id(&mut self) -> i64 {
        let id = self.next_placeholder_id;
        self.next_placeholder_id -= 1;
        id
    }

    /// Rebuild the derived index from the flat collection
    pub fn index(&self) -> AssignmentIndex {
        AssignmentIndex::build(&self.assignments)
    }

    /// Full renderable grid for the displayed year
    pub fn grid(&self) -> YearGrid {
        build_year_grid(self.year, &self.index(), &self.month_costs)
    }
}

// ========================
// Store Helper Functions
// ========================

/// Append an assignment to the flat collection
pub fn state_push_assignment(state: &mut PlannerState, assignment: MealAssignment) {
    state.assignments.push(assignment);
}

/// Replace an assignment in place, matched by id
pub fn state_update_assignment(state: &mut PlannerState, updated: MealAssignment) {
    if let Some(a) = state.assignments.iter_mut().find(|a| a.id == updated.id) {
        *a = updated;
    }
}

/// Remove an assignment from the flat collection by id
pub fn state_remove_assignment(state: &mut PlannerState, id: i64) {
    state.assignments.retain(|a| a.id != id);
}

/// Swap a placeholder id for the server-assigned one
pub fn state_replace_assignment_id(state: &mut PlannerState, old_id: i64, new_id: i64) {
    if let Some(a) = state.assignments.iter_mut().find(|a| a.id == old_id) {
        a.id = new_id;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::MealType;

    fn assignment(id: i64) -> MealAssignment {
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        MealAssignment {
            id,
            date,
            day_of_week: crate::domain::weekday_label(date).to_string(),
            meal_type: MealType::Lunch,
            item_type: "VEG".to_string(),
            item_name: format!("item-{id}"),
            item_colour: "#aabbcc".to_string(),
            item_price: 1.0,
        }
    }

    #[test]
    fn test_placeholder_ids_are_negative_and_unique() {
        let mut state = PlannerState::new(2025);
        let first = state.placeholder_id();
        let second = state.placeholder_id();
        assert!(first < 0 && second < 0);
        assert_ne!(first, second);
    }

    #[test]
    fn test_helpers_mutate_by_id() {
        let mut state = PlannerState::new(2025);
        state_push_assignment(&mut state, assignment(1));
        state_push_assignment(&mut state, assignment(2));

        let mut moved = assignment(2);
        moved.meal_type = MealType::Dinner;
        state_update_assignment(&mut state, moved);
        assert_eq!(state.assignments[1].meal_type, MealType::Dinner);

        state_replace_assignment_id(&mut state, 1, 41);
        assert_eq!(state.assignments[0].id, 41);

        state_remove_assignment(&mut state, 41);
        assert_eq!(state.assignments.len(), 1);
        assert_eq!(state.assignments[0].id, 2);
    }
}
