//! Assignment Mutations
//!
//! Add and move apply their local effect before the remote call and keep it
//! on failure; local state then runs ahead of the server until the next full
//! refetch corrects it. Delete is pessimistic: local state changes only
//! after the server has acknowledged. That asymmetry is part of the
//! interaction contract, not an accident.

use chrono::NaiveDate;
use tracing::error;

use super::{Planner, ResyncKind};
use crate::domain::{weekday_label, MealAssignment, MealType, PantryItem};
use crate::error::PlannerError;
use crate::remote::RemoteStore;
use crate::store::{
    state_push_assignment, state_remove_assignment, state_replace_assignment_id,
    state_update_assignment,
};

impl<R: RemoteStore> Planner<R> {
    /// Schedule a pantry item on a calendar cell
    pub(super) async fn add(
        &mut self,
        item: PantryItem,
        month: u32,
        day: u32,
        meal_type: MealType,
    ) -> Result<(), PlannerError> {
        let Some(date) = NaiveDate::from_ymd_opt(self.state.year, month, day) else {
            error!(month, day, "drop target is not a valid calendar date");
            return Ok(());
        };

        let placeholder = self.state.placeholder_id();
        let assignment = MealAssignment {
            id: placeholder,
            date,
            day_of_week: weekday_label(date).to_string(),
            meal_type,
            item_type: item.item_type.clone(),
            item_name: item.item_name.clone(),
            item_colour: item.item_colour.clone(),
            item_price: item.item_price_per_dosis.max(0.0),
        };
        state_push_assignment(&mut self.state, assignment);

        match self.remote.create_assignment(item.id, date, meal_type).await {
            Ok(ack) => {
                if let Some(id) = ack.id {
                    state_replace_assignment_id(&mut self.state, placeholder, id);
                }
                self.resync_after(ResyncKind::Add).await
            }
            Err(err) => {
                // Optimistic row stays; the next full refetch corrects it
                error!(item = item.id, %date, %err, "create assignment failed");
                Ok(())
            }
        }
    }

    /// Reschedule an existing assignment onto another cell
    pub(super) async fn move_assignment(
        &mut self,
        assignment: MealAssignment,
        month: u32,
        day: u32,
        meal_type: MealType,
    ) -> Result<(), PlannerError> {
        let Some(date) = NaiveDate::from_ymd_opt(self.state.year, month, day) else {
            error!(month, day, "drop target is not a valid calendar date");
            return Ok(());
        };

        // Only the scheduling fields change; the denormalized item fields
        // travel with the row untouched.
        let mut moved = assignment.clone();
        moved.date = date;
        moved.day_of_week = weekday_label(date).to_string();
        moved.meal_type = meal_type;
        state_update_assignment(&mut self.state, moved);

        match self.remote.update_assignment(assignment.id, date, meal_type).await {
            Ok(()) => self.resync_after(ResyncKind::Move).await,
            Err(err) => {
                error!(assignment = assignment.id, %date, %err, "move assignment failed");
                Ok(())
            }
        }
    }

    /// Remove an assignment via the removal zone. Waits for the remote
    /// acknowledgement before touching local state.
    pub(super) async fn delete(&mut self, assignment: MealAssignment) -> Result<(), PlannerError> {
        match self.remote.delete_assignment(assignment.id).await {
            Ok(()) => {
                state_remove_assignment(&mut self.state, assignment.id);
                self.resync_after(ResyncKind::Delete).await
            }
            Err(err) => {
                error!(assignment = assignment.id, %err, "delete assignment failed, keeping row");
                Ok(())
            }
        }
    }
}
