use serde::{Deserialize, Serialize};

/// Aggregate counters for the dashboard tiles. Missing counters render as
/// zero rather than failing the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStats {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub active: i64,
    #[serde(default)]
    pub in_progress: i64,
    #[serde(default)]
    pub failed: i64,
}
