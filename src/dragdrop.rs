//! Drag Interaction State Machine
//!
//! Tracks the single payload currently being dragged and resolves what a
//! drop means, independent of any pointer device. At most one payload is
//! active; beginning a new drag replaces whatever was held (last drag wins).

use crate::domain::{MealAssignment, MealType, PantryItem};

/// The in-flight drag payload
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    DraggingItem(PantryItem),
    DraggingAssignment(MealAssignment),
}

impl DragSession {
    /// Start dragging a pantry item from the side panel
    pub fn begin_item(&mut self, item: PantryItem) {
        *self = DragSession::DraggingItem(item);
    }

    /// Start dragging an already scheduled cell occupant
    pub fn begin_assignment(&mut self, assignment: MealAssignment) {
        *self = DragSession::DraggingAssignment(assignment);
    }

    /// Abandon the current drag without any mutation
    pub fn abort(&mut self) {
        *self = DragSession::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }
}

/// Where a drop landed
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget {
    /// A calendar cell of the displayed year
    Cell { month: u32, day: u32, meal_type: MealType },
    /// The side panel that removes scheduled assignments
    RemovalZone,
}

/// What a drop should do, resolved from the session payload and the target
#[derive(Debug, Clone, PartialEq)]
pub enum DropAction {
    Add { item: PantryItem, month: u32, day: u32, meal_type: MealType },
    Move { assignment: MealAssignment, month: u32, day: u32, meal_type: MealType },
    Delete { assignment: MealAssignment },
    /// Any combination with no defined effect, e.g. a drop while idle or a
    /// pantry item dropped on the removal zone
    Nothing,
}

/// Resolve a drop against the current session.
///
/// Does not touch the session itself; the mutation commands reset it once
/// the triggered remote call has settled.
pub fn resolve_drop(session: &DragSession, target: &DropTarget) -> DropAction {
    match (session, target) {
        (DragSession::DraggingItem(item), DropTarget::Cell { month, day, meal_type }) => {
            DropAction::Add {
                item: item.clone(),
                month: *month,
                day: *day,
                meal_type: *meal_type,
            }
        }
        (DragSession::DraggingAssignment(a), DropTarget::Cell { month, day, meal_type }) => {
            DropAction::Move {
                assignment: a.clone(),
                month: *month,
                day: *day,
                meal_type: *meal_type,
            }
        }
        (DragSession::DraggingAssignment(a), DropTarget::RemovalZone) => {
            DropAction::Delete { assignment: a.clone() }
        }
        _ => DropAction::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn item(id: i64) -> PantryItem {
        PantryItem {
            id,
            item_name: format!("item-{id}"),
            item_type: "VEG".to_string(),
            item_colour: "#112233".to_string(),
            item_price_per_dosis: 2.5,
            item_total_dosis: 4,
        }
    }

    fn assignment(id: i64) -> MealAssignment {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        MealAssignment {
            id,
            date,
            day_of_week: crate::domain::weekday_label(date).to_string(),
            meal_type: MealType::Breakfast,
            item_type: "VEG".to_string(),
            item_name: format!("item-{id}"),
            item_colour: "#112233".to_string(),
            item_price: 2.5,
        }
    }

    #[test]
    fn test_begin_and_abort() {
        let mut session = DragSession::default();
        assert!(session.is_idle());

        session.begin_item(item(1));
        assert_eq!(session, DragSession::DraggingItem(item(1)));

        session.abort();
        assert!(session.is_idle());
    }

    #[test]
    fn test_last_drag_wins() {
        let mut session = DragSession::default();
        session.begin_item(item(1));
        session.begin_assignment(assignment(9));
        assert_eq!(session, DragSession::DraggingAssignment(assignment(9)));

        session.begin_item(item(2));
        assert_eq!(session, DragSession::DraggingItem(item(2)));
    }

    #[test]
    fn test_item_on_cell_is_add() {
        let session = DragSession::DraggingItem(item(1));
        let target = DropTarget::Cell { month: 3, day: 14, meal_type: MealType::Lunch };
        assert_eq!(
            resolve_drop(&session, &target),
            DropAction::Add { item: item(1), month: 3, day: 14, meal_type: MealType::Lunch }
        );
    }

    #[test]
    fn test_assignment_on_cell_is_move() {
        let session = DragSession::DraggingAssignment(assignment(9));
        let target = DropTarget::Cell { month: 1, day: 6, meal_type: MealType::Dinner };
        assert_eq!(
            resolve_drop(&session, &target),
            DropAction::Move { assignment: assignment(9), month: 1, day: 6, meal_type: MealType::Dinner }
        );
    }

    #[test]
    fn test_assignment_on_removal_zone_is_delete() {
        let session = DragSession::DraggingAssignment(assignment(9));
        assert_eq!(
            resolve_drop(&session, &DropTarget::RemovalZone),
            DropAction::Delete { assignment: assignment(9) }
        );
    }

    #[test]
    fn test_undefined_combinations_do_nothing() {
        let target = DropTarget::Cell { month: 1, day: 1, meal_type: MealType::Snack };
        assert_eq!(resolve_drop(&DragSession::Idle, &target), DropAction::Nothing);
        assert_eq!(resolve_drop(&DragSession::Idle, &DropTarget::RemovalZone), DropAction::Nothing);
        assert_eq!(
            resolve_drop(&DragSession::DraggingItem(item(1)), &DropTarget::RemovalZone),
            DropAction::Nothing
        );
    }
}
