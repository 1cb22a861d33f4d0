// ==========================================
// Stock Aging Analytics - field mapper
// ==========================================
// Responsibility: positional slots -> canonical field names
// Red line: position is authoritative, header text is discarded
// ==========================================
// Known fragility: an inserted or removed column in the source silently
// misaligns every field after it. The optional header validation below
// turns that drift into a hard ImportError instead; it is off by default
// to preserve the observed export behavior.
// ==========================================

use crate::ingest::data_cleaner::{parse_movement_date, parse_quantity, parse_text};
use crate::ingest::error::{ImportError, IngestResult};
use crate::domain::stock::RawStockRecord;
use crate::ingest::file_parser::RawRow;

// ==========================================
// Positional column slots (0-based)
// ==========================================

pub const COL_MATERIAL: usize = 0;
pub const COL_DESCRIPTION: usize = 1;
pub const COL_LOT: usize = 2;
pub const COL_AVAILABLE_QUANTITY: usize = 3;
pub const COL_UNIT_OF_MEASURE: usize = 4;
pub const COL_STOCK_TYPE: usize = 5;
pub const COL_ENTRY_DATE: usize = 6;
pub const COL_LAST_MOVEMENT: usize = 7;

/// Header labels of the warehouse export, used only by the opt-in
/// header validation. Compared case-insensitively after trimming.
pub const EXPECTED_HEADERS: [&str; 8] = [
    "Material",
    "Descrição Material",
    "Lote",
    "Estoque Disponível",
    "UMB",
    "Tipo de Estoque",
    "Data de Entrada",
    "Último Movimento",
];

/// Map one positional source row onto canonical field names.
///
/// Quantity and movement date are coerced here; a failed coercion stays
/// as None on the record so the row filter can drop it without touching
/// any other row.
pub fn map_row(row: &RawRow) -> RawStockRecord {
    RawStockRecord {
        material_id: parse_text(row.cell(COL_MATERIAL)),
        material_description: parse_text(row.cell(COL_DESCRIPTION)),
        lot: parse_text(row.cell(COL_LOT)),
        available_quantity: parse_quantity(row.cell(COL_AVAILABLE_QUANTITY)),
        unit_of_measure: parse_text(row.cell(COL_UNIT_OF_MEASURE)),
        stock_type: parse_text(row.cell(COL_STOCK_TYPE)),
        entry_date: parse_movement_date(row.cell(COL_ENTRY_DATE)),
        last_movement_date: parse_movement_date(row.cell(COL_LAST_MOVEMENT)),
        row_number: row.row_number,
    }
}

/// Fail fast when the discarded header row does not carry the expected
/// export labels. Opt-in via AgingConfig::validate_headers.
pub fn validate_headers(header: &[String]) -> IngestResult<()> {
    for (column, expected) in EXPECTED_HEADERS.iter().enumerate() {
        let found = header.get(column).map(|s| s.trim()).unwrap_or("");
        if !found.eq_ignore_ascii_case(expected) {
            return Err(ImportError::HeaderMismatch {
                column,
                expected: (*expected).to_string(),
                found: found.to_string(),
            });
        }
    }
    Ok(())
}
