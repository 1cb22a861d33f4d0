// ==========================================
// Stock Aging Analytics - stock domain model
// ==========================================
// Responsibility: records flowing through the ingestion pipeline
// Red line: ingestion layer writes, engine layer reads only
// ==========================================

use crate::domain::types::AgingTier;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// RawStockRecord - ingestion intermediate
// ==========================================
// Produced by the field mapper from one positional source row.
// Coercion failures stay as None; the row filter decides what survives.
// Lifetime: ingestion pipeline only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStockRecord {
    // ===== Identity (column 0, always read as text) =====
    pub material_id: Option<String>, // material code, leading zeros preserved

    // ===== Descriptive fields =====
    pub material_description: Option<String>,
    pub lot: Option<String>,
    pub unit_of_measure: Option<String>,

    // ===== Coerced values (None = rejected by the coercer) =====
    pub available_quantity: Option<f64>,
    pub last_movement_date: Option<NaiveDate>,

    // ===== Carried but unused downstream =====
    pub stock_type: Option<String>,
    pub entry_date: Option<NaiveDate>,

    // Source row number (1-based, incl. skipped preamble), for diagnostics
    pub row_number: usize,
}

// ==========================================
// StockRow - post-pipeline record
// ==========================================
// Invariants: quantity and movement date are always valid (rows failing
// either coercion were dropped, never defaulted); days_in_stock and tier
// are derived from the single reference date of the ingestion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRow {
    // ===== Lot identity =====
    pub material_id: String, // non-empty, leading zeros preserved
    pub material_description: String,
    pub lot: String,

    // ===== Stock figures =====
    pub available_quantity: f64,
    pub unit_of_measure: String,

    // ===== Movement dates =====
    pub last_movement_date: NaiveDate,

    // ===== Derived aging =====
    // Whole days between the run's reference date and the last movement.
    // Negative when the movement is future-dated; passed through uncapped.
    pub days_in_stock: i64,
    pub aging_tier: AgingTier,

    // ===== Carried for future extension, unused downstream =====
    pub stock_type: Option<String>,
    pub entry_date: Option<NaiveDate>,
}
