// ==========================================
// Stock Aging Analytics - aggregation engine
// ==========================================
// Responsibility: tier counts and per-material rollups over a snapshot
// Input: surviving StockRows (+ optional description restriction)
// Output: TierCounts / Vec<MaterialRollup>
// ==========================================

use crate::domain::report::{MaterialRollup, TierCounts};
use crate::domain::stock::StockRow;
use crate::domain::types::AgingTier;
use std::collections::{HashMap, HashSet};

// ==========================================
// AggregateEngine
// ==========================================
// Stateless engine; callers own the snapshot it reads.
pub struct AggregateEngine;

impl Default for AggregateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateEngine {
    pub fn new() -> Self {
        Self
    }

    /// Count distinct materials per tier.
    ///
    /// All three tiers are present in the result (zero-filled). A material
    /// whose lots fall into several tiers is counted once per tier it
    /// appears in, so the counts may sum to more than the distinct
    /// material total.
    ///
    /// # Parameters
    /// - `rows`: surviving rows of one snapshot
    /// - `description_filter`: restrict to these material descriptions;
    ///   None or an empty set means no restriction
    pub fn tier_counts(
        &self,
        rows: &[StockRow],
        description_filter: Option<&HashSet<String>>,
    ) -> TierCounts {
        let mut per_tier: HashMap<AgingTier, HashSet<&str>> = HashMap::new();

        for row in filter_by_description(rows, description_filter) {
            per_tier
                .entry(row.aging_tier)
                .or_default()
                .insert(row.material_id.as_str());
        }

        let count = |tier: AgingTier| per_tier.get(&tier).map(|s| s.len()).unwrap_or(0);

        TierCounts {
            normal: count(AgingTier::Normal),
            alert: count(AgingTier::Alert),
            critical: count(AgingTier::Critical),
        }
    }

    /// Rank materials by mean aging, descending, truncated to `top_n`.
    ///
    /// Grouping key is (material id, description). Per group: arithmetic
    /// mean of days_in_stock, distinct lot count, summed quantity. Ties on
    /// the mean keep first-seen order (groups are built in row order and
    /// the sort is stable).
    ///
    /// `top_n` is applied as given; dashboard surfaces clamp it to the
    /// supported [5, 20] range before calling in.
    pub fn top_materials(
        &self,
        rows: &[StockRow],
        top_n: usize,
        description_filter: Option<&HashSet<String>>,
    ) -> Vec<MaterialRollup> {
        struct Group<'a> {
            material_id: &'a str,
            description: &'a str,
            total_days: i64,
            row_count: usize,
            lots: HashSet<&'a str>,
            total_quantity: f64,
        }

        let mut order: Vec<Group> = Vec::new();
        let mut index: HashMap<(&str, &str), usize> = HashMap::new();

        for row in filter_by_description(rows, description_filter) {
            let key = (row.material_id.as_str(), row.material_description.as_str());
            let idx = *index.entry(key).or_insert_with(|| {
                order.push(Group {
                    material_id: key.0,
                    description: key.1,
                    total_days: 0,
                    row_count: 0,
                    lots: HashSet::new(),
                    total_quantity: 0.0,
                });
                order.len() - 1
            });

            let group = &mut order[idx];
            group.total_days += row.days_in_stock;
            group.row_count += 1;
            group.lots.insert(row.lot.as_str());
            group.total_quantity += row.available_quantity;
        }

        let mut rollups: Vec<MaterialRollup> = order
            .into_iter()
            .map(|g| MaterialRollup {
                material_id: g.material_id.to_string(),
                material_description: g.description.to_string(),
                mean_days_in_stock: g.total_days as f64 / g.row_count as f64,
                distinct_lots: g.lots.len(),
                total_quantity: g.total_quantity,
            })
            .collect();

        // Stable sort: equal means keep first-seen group order
        rollups.sort_by(|a, b| {
            b.mean_days_in_stock
                .partial_cmp(&a.mean_days_in_stock)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rollups.truncate(top_n);
        rollups
    }
}

/// Apply the optional description restriction. An empty set behaves like
/// no restriction at all (every material included).
///
/// Shared by every snapshot view (tier counts, rollups, KPIs, detail
/// table) so the empty-set rule lives in one place.
pub fn filter_by_description<'a>(
    rows: &'a [StockRow],
    description_filter: Option<&'a HashSet<String>>,
) -> impl Iterator<Item = &'a StockRow> {
    rows.iter().filter(move |row| match description_filter {
        Some(allowed) if !allowed.is_empty() => allowed.contains(&row.material_description),
        _ => true,
    })
}
