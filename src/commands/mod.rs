//! Planner Commands
//!
//! The command surface over the planner state: loading, the drag lifecycle
//! and the three drag-driven mutations. Each mutation applies its local
//! effect (optimistically for add and move, after confirmation for delete),
//! issues the remote call, reconciles, and resets the drag session once the
//! call has settled.

mod assignment;
mod sync;

pub use sync::ResyncKind;

use crate::domain::{MealAssignment, PantryItem};
use crate::dragdrop::{resolve_drop, DropAction, DropTarget};
use crate::error::PlannerError;
use crate::remote::RemoteStore;
use crate::store::PlannerState;

/// Coordinates local state and the remote store.
///
/// Commands take `&mut self`, so two commands issued through the same
/// handle cannot interleave; overlapping in-flight mutations are the
/// embedding shell's concern and are deliberately not serialized here.
pub struct Planner<R: RemoteStore> {
    pub state: PlannerState,
    remote: R,
}

impl<R: RemoteStore> Planner<R> {
    pub fn new(year: i32, remote: R) -> Self {
        Self { state: PlannerState::new(year), remote }
    }

    /// Begin dragging a pantry item from the side panel (last drag wins)
    pub fn begin_drag_item(&mut self, item: PantryItem) {
        self.state.drag.begin_item(item);
    }

    /// Begin dragging an already scheduled assignment
    pub fn begin_drag_assignment(&mut self, assignment: MealAssignment) {
        self.state.drag.begin_assignment(assignment);
    }

    /// Abandon the current drag without any mutation
    pub fn abort_drag(&mut self) {
        self.state.drag.abort();
    }

    /// Handle a drop on the given target.
    ///
    /// Resolves the active session into an add, move, delete or no-op. The
    /// session goes back to Idle only after any triggered remote call has
    /// settled, never before it is issued. A `RemoteError` from the mutation
    /// itself is logged and swallowed; only a failed post-success resync
    /// fetch escapes as `FetchFailure`.
    pub async fn drop_on(&mut self, target: DropTarget) -> Result<(), PlannerError> {
        let action = resolve_drop(&self.state.drag, &target);
        let result = match action {
            DropAction::Add { item, month, day, meal_type } => {
                self.add(item, month, day, meal_type).await
            }
            DropAction::Move { assignment, month, day, meal_type } => {
                self.move_assignment(assignment, month, day, meal_type).await
            }
            DropAction::Delete { assignment } => self.delete(assignment).await,
            DropAction::Nothing => Ok(()),
        };
        self.state.drag.abort();
        result
    }
}
