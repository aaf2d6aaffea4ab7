//! Remote Store Interface
//!
//! The operations the planner consumes from the meal service, behind a
//! trait so the coordinator can be driven by an in-memory double in tests.
//! Identifiers, dates and meal tags cross this boundary as opaque values;
//! transport encoding is an implementation detail of the backend.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{MealAssignment, MealType, MonthCost, PantryItem};
use crate::error::RemoteError;

mod http;
pub use http::HttpRemoteStore;

/// Acknowledgement of a create call.
///
/// `id` is `None` when the response body carried no parseable identifier;
/// the caller then keeps its locally generated placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateAck {
    pub id: Option<i64>,
}

/// Connection settings for the HTTP store
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub base_url: String,
    /// Applied to every request; the core imposes no other timeout
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:9998".to_string(), timeout_secs: 10 }
    }
}

#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// All assignments scheduled in the given year
    async fn fetch_assignments(&self, year: i32) -> Result<Vec<MealAssignment>, RemoteError>;

    /// Current pantry snapshot
    async fn fetch_pantry(&self) -> Result<Vec<PantryItem>, RemoteError>;

    /// Authoritative per-month totals for the given year
    async fn fetch_month_costs(&self, year: i32) -> Result<Vec<MonthCost>, RemoteError>;

    /// Schedule a pantry item; returns the server-assigned id when readable
    async fn create_assignment(
        &self,
        pantry_item_id: i64,
        date: NaiveDate,
        meal_type: MealType,
    ) -> Result<CreateAck, RemoteError>;

    /// Reschedule an existing assignment
    async fn update_assignment(
        &self,
        assignment_id: i64,
        date: NaiveDate,
        meal_type: MealType,
    ) -> Result<(), RemoteError>;

    /// Remove an assignment, returning its stock to the pantry
    async fn delete_assignment(&self, assignment_id: i64) -> Result<(), RemoteError>;
}
