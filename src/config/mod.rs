// ==========================================
// Stock Aging Analytics - config layer
// ==========================================
// Responsibility: thresholds, bounds and source-format constants
// Red line: no file access; callers own where values come from
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Source format constants
// ==========================================

/// Leading non-data rows in the export before the header row.
/// The header itself sits at 0-based row index `HEADER_ROW_SKIP`.
pub const HEADER_ROW_SKIP: usize = 3;

/// Positional column slots every data row must provide.
pub const EXPECTED_COLUMN_COUNT: usize = 8;

/// Export file name probed when no input path is given.
/// External convention from the warehouse export job, not a protocol.
pub const DEFAULT_EXPORT_FILE: &str = "EXPORT_20250211_144147.xlsx";

// ==========================================
// Top-N bounds
// ==========================================

pub const TOP_N_MIN: usize = 5;
pub const TOP_N_MAX: usize = 20;

/// Clamp a caller-supplied top-N into the supported range.
pub fn clamp_top_n(n: usize) -> usize {
    n.clamp(TOP_N_MIN, TOP_N_MAX)
}

// ==========================================
// AgingConfig - pipeline configuration
// ==========================================

/// Tier thresholds and ingestion toggles.
///
/// Tier boundaries: `days < alert_threshold_days` is Normal,
/// `alert_threshold_days <= days < critical_threshold_days` is Alert,
/// `days >= critical_threshold_days` is Critical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgingConfig {
    pub alert_threshold_days: i64,
    pub critical_threshold_days: i64,
    /// Validate the discarded header row against the expected export
    /// labels and fail fast on mismatch. Off by default: the source
    /// format is positional and header text varies between SAP layouts.
    pub validate_headers: bool,
}

impl Default for AgingConfig {
    fn default() -> Self {
        Self {
            alert_threshold_days: 10,
            critical_threshold_days: 20,
            validate_headers: false,
        }
    }
}
