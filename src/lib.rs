//! Pantry Planner Core
//!
//! Scheduling engine for a year-long meal calendar:
//! - domain: entities shared with the remote meal service
//! - index: (year, month) -> day -> meal-slot grouping of flat assignments
//! - costs: derived day totals plus authoritative month totals
//! - dragdrop: the drag session state machine and drop resolution
//! - remote: the remote store trait and its HTTP implementation
//! - store / commands: application state and the optimistic mutation protocol
//! - grid: the pure renderable calendar description
//!
//! The UI shell couples to this crate in two directions only: it renders
//! the flat assignment list and the grid model, and it drives the drag and
//! drop commands.

pub mod commands;
pub mod costs;
pub mod domain;
pub mod dragdrop;
pub mod error;
pub mod grid;
pub mod index;
pub mod remote;
pub mod store;

pub use commands::{Planner, ResyncKind};
pub use dragdrop::{DragSession, DropTarget};
pub use error::{PlannerError, RemoteError};
