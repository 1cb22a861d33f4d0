// ==========================================
// Stock Aging Analytics - ingestion layer
// ==========================================
// Responsibility: file parsing + positional mapping + value coercion
//                 + row filtering + aging derivation
// Red line: no UI logic; one synchronous pass per source file
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod stock_importer;

// Re-export core ingestion types
pub use error::{ImportError, IngestResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawGrid, RawRow, UniversalFileParser};
pub use stock_importer::StockImporter;
