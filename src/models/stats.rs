//! Per-user statistics summary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Statistics for one user, kept exactly as the backend produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsSummary(Value);

impl From<Value> for StatsSummary {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nested_stats_are_preserved() {
        let raw = json!({
            "location_count": 12,
            "visited_location_count": 7,
            "trekking": { "total_hikes": 4, "monthly_stats": [{ "month": "2025-05", "count": 2 }] }
        });
        let stats: StatsSummary = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(stats, StatsSummary::from(raw.clone()));
        assert_eq!(serde_json::to_value(&stats).unwrap(), raw);
    }
}
