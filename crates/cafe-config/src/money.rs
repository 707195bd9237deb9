//! Money handling configuration.

use cafe_core::money::RoundingPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MoneyConfig {
    /// Rounding applied when an order total is stored (`half_up` or `half_even`).
    #[serde(default)]
    pub rounding: RoundingPolicy,
}
