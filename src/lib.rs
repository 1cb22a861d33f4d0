// ==========================================
// Stock Aging Analytics - core library
// ==========================================
// Purpose: batch ingestion of raw-material inventory exports,
//          aging derivation and aggregation for dashboards
// Position: pure data core; presentation layers consume the output
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Ingestion layer - external data
pub mod ingest;

// Engine layer - business rules
pub mod engine;

// Config layer - thresholds and bounds
pub mod config;

// Logging
pub mod logging;

// API layer - presentation-facing surface
pub mod api;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::AgingTier;

// Domain entities
pub use domain::{
    DashboardKpis, DetailRow, IngestReport, IngestSnapshot, MaterialRollup, RawStockRecord,
    StockRow, TierCounts,
};

// Ingestion
pub use ingest::{ImportError, StockImporter};

// Engine
pub use engine::AggregateEngine;

// API
pub use api::DashboardApi;

// Config
pub use config::AgingConfig;

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Stock Aging Analytics";
