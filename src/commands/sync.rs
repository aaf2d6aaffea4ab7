//! Loading and Reconciliation
//!
//! The full startup fetch plus the named post-mutation resync. Only
//! mutations that change remaining pantry stock trigger a refetch; moving
//! an assignment between cells touches nothing the server recomputes.

use tracing::debug;

use super::Planner;
use crate::error::PlannerError;
use crate::remote::RemoteStore;

/// Which mutation a resync follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResyncKind {
    Add,
    Move,
    Delete,
}

impl ResyncKind {
    /// Whether the mutation can change remaining pantry stock
    fn affects_pantry(self) -> bool {
        matches!(self, ResyncKind::Add | ResyncKind::Delete)
    }
}

impl<R: RemoteStore> Planner<R> {
    /// Fetch everything the planner renders from: the year's assignments,
    /// the pantry snapshot and the authoritative month costs. Any failure
    /// is blocking; nothing renders until a load succeeds.
    pub async fn load(&mut self) -> Result<(), PlannerError> {
        let year = self.state.year;
        self.state.assignments = self.remote.fetch_assignments(year).await?;
        self.state.pantry = self.remote.fetch_pantry().await?;
        self.state.month_costs = self.remote.fetch_month_costs(year).await?;
        Ok(())
    }

    /// Refresh the parts of local state a completed mutation may have
    /// invalidated server-side
    pub(super) async fn resync_after(&mut self, kind: ResyncKind) -> Result<(), PlannerError> {
        if kind.affects_pantry() {
            debug!(?kind, "refetching pantry snapshot");
            self.state.pantry = self.remote.fetch_pantry().await?;
        }
        Ok(())
    }
}
