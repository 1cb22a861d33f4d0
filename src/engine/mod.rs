// ==========================================
// Stock Aging Analytics - engine layer
// ==========================================
// Responsibility: pure business rules (aging derivation, aggregation)
// Red line: stateless, no file access, no presentation concerns
// ==========================================

pub mod aggregate;
pub mod aging;

pub use aggregate::{filter_by_description, AggregateEngine};
pub use aging::{classify_tier, days_in_stock};
