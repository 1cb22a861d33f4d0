// ==========================================
// Stock Aging Analytics - run reports and derived views
// ==========================================
// Responsibility: ingestion run output and aggregation result types
// ==========================================

use crate::domain::stock::StockRow;
use crate::domain::types::AgingTier;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ==========================================
// IngestReport - one ingestion run summary
// ==========================================
// Row rejections are a silent filtering outcome, visible only here as
// counts; they are never surfaced as per-row errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    pub run_id: String,            // uuid of the ingestion run
    pub file_name: Option<String>, // source file name (no path)
    pub total_rows: usize,         // data rows read (after the 3-row preamble)
    pub surviving_rows: usize,     // rows that passed every coercion
    pub rejected_missing_id: usize,
    pub rejected_quantity: usize,
    pub rejected_date: usize,
    #[serde(with = "duration_millis")]
    pub elapsed: Duration,
}

// Serialize elapsed time as whole milliseconds.
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        (d.as_millis() as u64).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}

// ==========================================
// IngestSnapshot - immutable pipeline output
// ==========================================
// Held for the duration of one analysis session; a new ingestion fully
// replaces it (no merge/append semantics). Zero rows is a valid snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSnapshot {
    pub rows: Vec<StockRow>,
    // The single "as-of" date every days_in_stock in `rows` was computed
    // against. Captured once per run, never per row.
    pub reference_date: NaiveDate,
    pub report: IngestReport,
}

// ==========================================
// TierCounts - distinct materials per tier
// ==========================================
// All three tiers are always present (zero-filled); dropping zero-count
// tiers for a pie chart is a display-time decision, not done here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub normal: usize,
    pub alert: usize,
    pub critical: usize,
}

impl TierCounts {
    pub fn get(&self, tier: AgingTier) -> usize {
        match tier {
            AgingTier::Normal => self.normal,
            AgingTier::Alert => self.alert,
            AgingTier::Critical => self.critical,
        }
    }

    /// (tier, count) pairs in display order.
    pub fn entries(&self) -> [(AgingTier, usize); 3] {
        [
            (AgingTier::Normal, self.normal),
            (AgingTier::Alert, self.alert),
            (AgingTier::Critical, self.critical),
        ]
    }
}

// ==========================================
// MaterialRollup - per-material aggregation
// ==========================================
// Grouped by (material id, description); used for top-N ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRollup {
    pub material_id: String,
    pub material_description: String,
    pub mean_days_in_stock: f64,
    pub distinct_lots: usize,
    pub total_quantity: f64,
}

// ==========================================
// DashboardKpis - headline metrics
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub unique_materials: usize,
    pub mean_aging_days: f64, // 0.0 when there are no rows
    pub critical_lots: usize, // row (lot) count in the Critical tier
    // critical_lots as a percentage of unique_materials; 0.0 when there
    // are no materials
    pub critical_pct: f64,
}

// ==========================================
// DetailRow - display-ready table row
// ==========================================
// Locale formatting applied: quantity as pt-BR decimal, date as DD/MM/YYYY.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailRow {
    pub material_id: String,
    pub material_description: String,
    pub lot: String,
    pub quantity: String,
    pub unit_of_measure: String,
    pub last_movement: String,
    pub days_in_stock: i64,
    pub status: String, // tier display label
}
