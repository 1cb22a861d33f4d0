// ==========================================
// Stock Aging Analytics - aging calculator
// ==========================================
// Responsibility: elapsed-days derivation and tier classification
// Red line: one reference date per ingestion run, threaded explicitly;
//           never recomputed per row
// ==========================================

use crate::config::AgingConfig;
use crate::domain::types::AgingTier;
use chrono::NaiveDate;

/// Whole days between the run's reference date and a lot's last movement.
///
/// Future-dated movements produce a negative value, which is passed
/// through uncapped; clamping would silently shift the dashboard KPIs.
pub fn days_in_stock(reference_date: NaiveDate, last_movement_date: NaiveDate) -> i64 {
    (reference_date - last_movement_date).num_days()
}

/// Classify elapsed days into an aging tier.
///
/// Total and deterministic: `days < alert` is Normal (negatives included),
/// `alert <= days < critical` is Alert, `days >= critical` is Critical.
pub fn classify_tier(days: i64, config: &AgingConfig) -> AgingTier {
    if days < config.alert_threshold_days {
        AgingTier::Normal
    } else if days < config.critical_threshold_days {
        AgingTier::Alert
    } else {
        AgingTier::Critical
    }
}
