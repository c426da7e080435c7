use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a fallback taken when an external scoring component
/// failed. Accumulated per run and reported, never raised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
