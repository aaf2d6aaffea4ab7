//! Pantry Item Entity
//!
//! A catalog entry available to be scheduled. Owned by the remote pantry
//! service; held locally as a read-only snapshot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    pub id: i64,
    pub item_name: String,
    pub item_type: String,
    pub item_colour: String,
    /// Unit price per scheduled dose
    pub item_price_per_dosis: f64,
    /// Remaining stock; scheduling consumes it server-side
    pub item_total_dosis: i64,
}
