// ==========================================
// Stock Aging Analytics - domain type definitions
// ==========================================
// Red line: tier is a classification, not a score
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Aging tier (risk classification per lot)
// ==========================================
// Boundaries: days < alert threshold        -> Normal
//             alert <= days < critical      -> Alert
//             days >= critical threshold    -> Critical
// Serialization format: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgingTier {
    Normal,   // fresh stock
    Alert,    // aging, needs attention
    Critical, // stale stock, act now
}

impl AgingTier {
    /// All tiers in display order. Aggregations zero-fill from this list so
    /// every tier is always present in their output.
    pub const ALL: [AgingTier; 3] = [AgingTier::Normal, AgingTier::Alert, AgingTier::Critical];

    /// pt-BR label used by the detail table and charts.
    pub fn display_label(&self) -> &'static str {
        match self {
            AgingTier::Normal => "Normal",
            AgingTier::Alert => "Alerta",
            AgingTier::Critical => "Crítico",
        }
    }
}

impl fmt::Display for AgingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgingTier::Normal => write!(f, "NORMAL"),
            AgingTier::Alert => write!(f, "ALERT"),
            AgingTier::Critical => write!(f, "CRITICAL"),
        }
    }
}
