// ==========================================
// Stock Aging Analytics - stock import engine
// ==========================================
// Responsibility: file parsing + positional mapping + coercion
//                 + row filtering + aging derivation, one pass
// Red line: no UI logic; deterministic for (source bytes, reference date)
// ==========================================

use crate::config::AgingConfig;
use crate::domain::report::{IngestReport, IngestSnapshot};
use crate::domain::stock::{RawStockRecord, StockRow};
use crate::engine::aging::{classify_tier, days_in_stock};
use crate::ingest::error::IngestResult;
use crate::ingest::field_mapper::{map_row, validate_headers};
use crate::ingest::file_parser::UniversalFileParser;
use chrono::NaiveDate;
use std::path::Path;
use uuid::Uuid;

// ==========================================
// StockImporter
// ==========================================
/// Ingestion pipeline entry point.
///
/// # Responsibilities
/// 1. Parse the CSV/Excel export into an untyped grid
/// 2. Map positional columns onto canonical fields
/// 3. Coerce locale-specific quantity and date values
/// 4. Drop rows failing a required coercion (counted, never errored)
/// 5. Derive days_in_stock and aging tier against one reference date
///
/// # Red lines
/// - Stateless per invocation; re-running on the same bytes with the
///   same reference date yields identical output
/// - Rejected rows are a silent filtering outcome, only visible as
///   counts on the IngestReport
pub struct StockImporter {
    config: AgingConfig,
}

impl Default for StockImporter {
    fn default() -> Self {
        Self::new(AgingConfig::default())
    }
}

impl StockImporter {
    pub fn new(config: AgingConfig) -> Self {
        Self { config }
    }

    /// Ingest one export file.
    ///
    /// # Parameters
    /// - `path`: .csv / .xlsx / .xls source
    /// - `reference_date`: the run's "as-of" date; captured once by the
    ///   caller and applied to every row
    ///
    /// # Returns
    /// - Ok(IngestSnapshot): surviving rows + run report; zero surviving
    ///   rows is a valid empty snapshot, not an error
    /// - Err(ImportError): unreadable source or structural mismatch
    pub fn ingest<P: AsRef<Path>>(
        &self,
        path: P,
        reference_date: NaiveDate,
    ) -> IngestResult<IngestSnapshot> {
        let path = path.as_ref();
        let start_time = std::time::Instant::now();
        let run_id = Uuid::new_v4().to_string();

        tracing::info!(
            run_id = %run_id,
            file = %path.display(),
            %reference_date,
            "starting stock ingestion"
        );

        // === Step 1: parse file into an untyped grid ===
        let grid = UniversalFileParser.parse(path)?;
        let total_rows = grid.rows.len();

        // === Step 2: optional header validation (opt-in) ===
        if self.config.validate_headers {
            validate_headers(&grid.header)?;
        }

        // === Step 3: positional mapping + value coercion ===
        let records: Vec<RawStockRecord> = grid.rows.iter().map(map_row).collect();

        // === Step 4: row filtering (independent predicates, counted) ===
        let mut rejected_missing_id = 0usize;
        let mut rejected_quantity = 0usize;
        let mut rejected_date = 0usize;

        // === Step 5: aging derivation per surviving row ===
        let mut rows: Vec<StockRow> = Vec::with_capacity(records.len());
        for record in records {
            let Some(material_id) = record.material_id else {
                rejected_missing_id += 1;
                tracing::debug!(row = record.row_number, "row dropped: missing material id");
                continue;
            };
            let Some(available_quantity) = record.available_quantity else {
                rejected_quantity += 1;
                tracing::debug!(row = record.row_number, "row dropped: unparseable quantity");
                continue;
            };
            let Some(last_movement_date) = record.last_movement_date else {
                rejected_date += 1;
                tracing::debug!(row = record.row_number, "row dropped: unparseable movement date");
                continue;
            };

            let days = days_in_stock(reference_date, last_movement_date);

            rows.push(StockRow {
                material_id,
                material_description: record.material_description.unwrap_or_default(),
                lot: record.lot.unwrap_or_default(),
                available_quantity,
                unit_of_measure: record.unit_of_measure.unwrap_or_default(),
                last_movement_date,
                days_in_stock: days,
                aging_tier: classify_tier(days, &self.config),
                stock_type: record.stock_type,
                entry_date: record.entry_date,
            });
        }

        let report = IngestReport {
            run_id,
            file_name: path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.to_string()),
            total_rows,
            surviving_rows: rows.len(),
            rejected_missing_id,
            rejected_quantity,
            rejected_date,
            elapsed: start_time.elapsed(),
        };

        tracing::info!(
            run_id = %report.run_id,
            total = report.total_rows,
            surviving = report.surviving_rows,
            rejected_missing_id = report.rejected_missing_id,
            rejected_quantity = report.rejected_quantity,
            rejected_date = report.rejected_date,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "stock ingestion finished"
        );

        Ok(IngestSnapshot {
            rows,
            reference_date,
            report,
        })
    }
}
