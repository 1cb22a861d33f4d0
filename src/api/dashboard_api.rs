// ==========================================
// Stock Aging Analytics - dashboard API
// ==========================================
// Responsibility: KPIs, tier distribution, top-N ranking and the
//                 display-ready detail table for one snapshot
// Architecture: API layer -> engine layer (AggregateEngine)
// ==========================================
// The presentation layer (web dashboard, CLI) owns upload, session
// persistence and chart rendering; it consumes these views only.
// ==========================================

use crate::config::clamp_top_n;
use crate::domain::report::{DashboardKpis, DetailRow, IngestSnapshot, MaterialRollup, TierCounts};
use crate::domain::types::AgingTier;
use crate::engine::aggregate::{filter_by_description, AggregateEngine};
use std::collections::HashSet;

// ==========================================
// DashboardApi
// ==========================================
pub struct DashboardApi {
    engine: AggregateEngine,
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardApi {
    pub fn new() -> Self {
        Self {
            engine: AggregateEngine::new(),
        }
    }

    /// Headline metrics for one snapshot.
    ///
    /// # Returns
    /// - unique material count, mean aging in days, Critical-tier lot
    ///   count and its percentage of the unique materials (0 when the
    ///   filtered snapshot is empty)
    pub fn kpis(
        &self,
        snapshot: &IngestSnapshot,
        description_filter: Option<&HashSet<String>>,
    ) -> DashboardKpis {
        let rows: Vec<_> = filter_by_description(&snapshot.rows, description_filter).collect();

        let unique_materials: usize = rows
            .iter()
            .map(|row| row.material_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        let mean_aging_days = if rows.is_empty() {
            0.0
        } else {
            rows.iter().map(|row| row.days_in_stock).sum::<i64>() as f64 / rows.len() as f64
        };

        let critical_lots = rows
            .iter()
            .filter(|row| row.aging_tier == AgingTier::Critical)
            .count();

        let critical_pct = if unique_materials > 0 {
            critical_lots as f64 / unique_materials as f64 * 100.0
        } else {
            0.0
        };

        DashboardKpis {
            unique_materials,
            mean_aging_days,
            critical_lots,
            critical_pct,
        }
    }

    /// Distinct materials per tier (all three tiers always present).
    pub fn tier_counts(
        &self,
        snapshot: &IngestSnapshot,
        description_filter: Option<&HashSet<String>>,
    ) -> TierCounts {
        self.engine.tier_counts(&snapshot.rows, description_filter)
    }

    /// Top materials by mean aging; `top_n` is clamped to the supported
    /// [5, 20] range before it reaches the engine.
    pub fn top_materials(
        &self,
        snapshot: &IngestSnapshot,
        top_n: usize,
        description_filter: Option<&HashSet<String>>,
    ) -> Vec<MaterialRollup> {
        self.engine
            .top_materials(&snapshot.rows, clamp_top_n(top_n), description_filter)
    }

    /// Display-ready detail table: pt-BR quantity formatting, DD/MM/YYYY
    /// dates and the tier label as the status column.
    pub fn detail_rows(
        &self,
        snapshot: &IngestSnapshot,
        description_filter: Option<&HashSet<String>>,
    ) -> Vec<DetailRow> {
        filter_by_description(&snapshot.rows, description_filter)
            .map(|row| DetailRow {
                material_id: row.material_id.clone(),
                material_description: row.material_description.clone(),
                lot: row.lot.clone(),
                quantity: format_quantity_br(row.available_quantity),
                unit_of_measure: row.unit_of_measure.clone(),
                last_movement: row.last_movement_date.format("%d/%m/%Y").to_string(),
                days_in_stock: row.days_in_stock,
                status: row.aging_tier.display_label().to_string(),
            })
            .collect()
    }
}

// ==========================================
// pt-BR quantity formatting
// ==========================================

/// Format a quantity the way the warehouse reads it: 3 decimal places,
/// `.` as the thousands separator, `,` as the decimal separator.
///
/// Inverse of the ingestion coercer for round-trip stability:
/// `parse_quantity("1.234,500")` is 1234.5 and formatting 1234.5 yields
/// `"1.234,500"` again.
pub fn format_quantity_br(value: f64) -> String {
    let negative = value.is_sign_negative() && value != 0.0;
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "000"));

    // Group the integer digits in threes, right to left
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity_br_round_trip() {
        assert_eq!(format_quantity_br(1234.5), "1.234,500");
        assert_eq!(
            crate::ingest::data_cleaner::parse_quantity("1.234,500"),
            Some(1234.5)
        );
    }

    #[test]
    fn test_format_quantity_br_small_and_large() {
        assert_eq!(format_quantity_br(0.0), "0,000");
        assert_eq!(format_quantity_br(12.0), "12,000");
        assert_eq!(format_quantity_br(999.999), "999,999");
        assert_eq!(format_quantity_br(12345678.9), "12.345.678,900");
    }

    #[test]
    fn test_format_quantity_br_negative() {
        assert_eq!(format_quantity_br(-1234.5), "-1.234,500");
    }
}
