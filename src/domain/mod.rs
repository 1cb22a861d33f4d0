// ==========================================
// Stock Aging Analytics - domain layer
// ==========================================
// Responsibility: domain entities, types, derived views
// Red line: no file access, no engine logic
// ==========================================

pub mod report;
pub mod stock;
pub mod types;

// Re-export core types
pub use report::{DashboardKpis, DetailRow, IngestReport, IngestSnapshot};
pub use stock::{RawStockRecord, StockRow};
pub use types::AgingTier;

// Aggregation views
pub use report::{MaterialRollup, TierCounts};
