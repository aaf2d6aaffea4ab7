//! Month Cost Value
//!
//! Authoritative per-month total supplied by the remote store. The server
//! may apply rounding or discounts the client does not replicate, so this
//! value is displayed as-is and never recomputed locally.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthCost {
    /// Month number, 1-12
    pub month: u32,
    pub cost: f64,
}
