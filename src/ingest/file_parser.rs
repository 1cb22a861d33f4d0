// ==========================================
// Stock Aging Analytics - file parser implementations
// ==========================================
// Stage 0 of the pipeline: file reading and raw-grid extraction
// Supported: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================
// Contract: skip the 3-row preamble, capture the row at index 3 as the
// header (its text is discarded downstream; positions are authoritative),
// return every later row as untyped text cells. Column 0 is always kept
// as raw text so material codes keep their leading zeros.
// ==========================================

use crate::config::{EXPECTED_COLUMN_COUNT, HEADER_ROW_SKIP};
use crate::ingest::error::{ImportError, IngestResult};
use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// Raw grid types
// ==========================================

/// One untyped source row: positional text cells plus the 1-based row
/// number in the file (preamble included) for diagnostics.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub row_number: usize,
    pub cells: Vec<String>,
}

impl RawRow {
    /// Cell at a positional slot; empty slots and short rows read as "".
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(|s| s.as_str()).unwrap_or("")
    }
}

/// Untyped row/column grid produced by a parser.
#[derive(Debug, Clone)]
pub struct RawGrid {
    /// Text of the discarded header row (kept for optional validation).
    pub header: Vec<String>,
    pub rows: Vec<RawRow>,
}

// ==========================================
// FileParser trait
// ==========================================

pub trait FileParser {
    fn parse_grid(&self, file_path: &Path) -> IngestResult<RawGrid>;
}

// ==========================================
// CSV parser
// ==========================================

pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_grid(&self, file_path: &Path) -> IngestResult<RawGrid> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        // No header handling here: the real header sits after the preamble,
        // so every line is read as a plain record.
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut header: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;

            if row_idx < HEADER_ROW_SKIP {
                continue; // preamble
            }

            let cells: Vec<String> = record.iter().map(|c| c.trim().to_string()).collect();

            if row_idx == HEADER_ROW_SKIP {
                header = Some(check_header_width(cells)?);
                continue;
            }

            push_data_row(&mut rows, row_idx + 1, cells);
        }

        let header = header.ok_or(ImportError::MissingHeaderRow {
            skipped: HEADER_ROW_SKIP,
        })?;

        Ok(RawGrid { header, rows })
    }
}

// ==========================================
// Excel parser
// ==========================================

pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_grid(&self, file_path: &Path) -> IngestResult<RawGrid> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no sheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut header: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for (row_idx, sheet_row) in range.rows().enumerate() {
            if row_idx < HEADER_ROW_SKIP {
                continue; // preamble
            }

            let cells: Vec<String> = sheet_row.iter().map(cell_to_text).collect();

            if row_idx == HEADER_ROW_SKIP {
                header = Some(check_header_width(cells)?);
                continue;
            }

            push_data_row(&mut rows, row_idx + 1, cells);
        }

        let header = header.ok_or(ImportError::MissingHeaderRow {
            skipped: HEADER_ROW_SKIP,
        })?;

        Ok(RawGrid { header, rows })
    }
}

/// Render one Excel cell as the text the pipeline coerces later.
///
/// Numeric cells are rendered without a trailing `.0` and never in
/// scientific notation, so a material code stored as a number survives
/// the round trip through column 0 intact.
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(dt) if dt.time() == chrono::NaiveTime::MIN => dt.format("%Y-%m-%d").to_string(),
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => cell.to_string(),
        },
        other => other.to_string().trim().to_string(),
    }
}

// ==========================================
// Shared row handling
// ==========================================

/// The header row defines the 8 positional slots; fewer is a structural
/// failure of the whole source, not a row-level one.
fn check_header_width(cells: Vec<String>) -> IngestResult<Vec<String>> {
    if cells.len() < EXPECTED_COLUMN_COUNT {
        return Err(ImportError::ColumnCountMismatch {
            expected: EXPECTED_COLUMN_COUNT,
            found: cells.len(),
        });
    }
    Ok(cells)
}

fn push_data_row(rows: &mut Vec<RawRow>, row_number: usize, mut cells: Vec<String>) {
    // Skip fully blank rows (trailing export padding)
    if cells.iter().all(|c| c.is_empty()) {
        return;
    }

    // Short data rows are padded; the coercers reject what is missing.
    while cells.len() < EXPECTED_COLUMN_COUNT {
        cells.push(String::new());
    }

    rows.push(RawRow { row_number, cells });
}

// ==========================================
// Universal parser (dispatch on extension)
// ==========================================

pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> IngestResult<RawGrid> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_grid(path),
            "xlsx" | "xls" => ExcelParser.parse_grid(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
