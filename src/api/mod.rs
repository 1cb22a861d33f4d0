// ==========================================
// Stock Aging Analytics - API layer
// ==========================================
// Responsibility: presentation-facing surface over the engines
// Red line: reads snapshots, never mutates them
// ==========================================

pub mod dashboard_api;

pub use dashboard_api::{format_quantity_br, DashboardApi};
