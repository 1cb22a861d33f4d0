// ==========================================
// DashboardApi - integration tests
// ==========================================
// Target: KPIs, clamped top-N, display-ready detail rows
// ==========================================

use chrono::NaiveDate;
use std::collections::HashSet;
use std::time::Duration;
use stock_aging::engine::aging::classify_tier;
use stock_aging::{
    AgingConfig, DashboardApi, IngestReport, IngestSnapshot, StockRow,
};

// ==========================================
// Test helpers
// ==========================================

fn stock_row(material_id: &str, description: &str, lot: &str, days: i64, qty: f64) -> StockRow {
    let reference = NaiveDate::from_ymd_opt(2025, 2, 11).unwrap();
    StockRow {
        material_id: material_id.to_string(),
        material_description: description.to_string(),
        lot: lot.to_string(),
        available_quantity: qty,
        unit_of_measure: "KG".to_string(),
        last_movement_date: reference - chrono::Duration::days(days),
        days_in_stock: days,
        aging_tier: classify_tier(days, &AgingConfig::default()),
        stock_type: None,
        entry_date: None,
    }
}

fn snapshot(rows: Vec<StockRow>) -> IngestSnapshot {
    let surviving = rows.len();
    IngestSnapshot {
        rows,
        reference_date: NaiveDate::from_ymd_opt(2025, 2, 11).unwrap(),
        report: IngestReport {
            run_id: "test-run".to_string(),
            file_name: Some("export.csv".to_string()),
            total_rows: surviving,
            surviving_rows: surviving,
            rejected_missing_id: 0,
            rejected_quantity: 0,
            rejected_date: 0,
            elapsed: Duration::from_millis(1),
        },
    }
}

// ==========================================
// Case 1: KPIs
// ==========================================

#[test]
fn test_kpis_counts_and_critical_percentage() {
    let api = DashboardApi::new();
    let snap = snapshot(vec![
        stock_row("M001", "A", "L1", 6, 1.0),
        stock_row("M001", "A", "L2", 12, 1.0),
        stock_row("M002", "B", "L1", 20, 1.0),
        stock_row("M003", "C", "L1", 32, 1.0),
    ]);

    let kpis = api.kpis(&snap, None);
    assert_eq!(kpis.unique_materials, 3);
    assert!((kpis.mean_aging_days - 17.5).abs() < 1e-9);
    assert_eq!(kpis.critical_lots, 2);
    // 2 critical lots over 3 unique materials
    assert!((kpis.critical_pct - 66.666_666_666_666_67).abs() < 1e-9);
}

#[test]
fn test_kpis_on_empty_snapshot() {
    let api = DashboardApi::new();
    let snap = snapshot(vec![]);

    let kpis = api.kpis(&snap, None);
    assert_eq!(kpis.unique_materials, 0);
    assert_eq!(kpis.mean_aging_days, 0.0);
    assert_eq!(kpis.critical_lots, 0);
    assert_eq!(kpis.critical_pct, 0.0);
}

#[test]
fn test_kpis_respect_description_filter() {
    let api = DashboardApi::new();
    let snap = snapshot(vec![
        stock_row("M001", "ACIDO", "L1", 6, 1.0),
        stock_row("M002", "SORBITOL", "L1", 30, 1.0),
    ]);

    let allowed: HashSet<String> = ["ACIDO".to_string()].into_iter().collect();
    let kpis = api.kpis(&snap, Some(&allowed));
    assert_eq!(kpis.unique_materials, 1);
    assert_eq!(kpis.critical_lots, 0);
}

// ==========================================
// Case 2: clamped top-N
// ==========================================

#[test]
fn test_top_n_is_clamped_to_supported_range() {
    let api = DashboardApi::new();
    let rows: Vec<StockRow> = (0..8)
        .map(|i| {
            stock_row(
                &format!("M{:03}", i),
                &format!("MAT {}", i),
                "L1",
                i as i64,
                1.0,
            )
        })
        .collect();
    let snap = snapshot(rows);

    // Requested 2, clamp raises it to 5
    assert_eq!(api.top_materials(&snap, 2, None).len(), 5);
    // Requested 100, clamp lowers it to 20 (only 8 materials exist)
    assert_eq!(api.top_materials(&snap, 100, None).len(), 8);
}

// ==========================================
// Case 3: detail table formatting
// ==========================================

#[test]
fn test_detail_rows_locale_formatting() {
    let api = DashboardApi::new();
    let snap = snapshot(vec![stock_row("000123", "ACIDO CITRICO", "L001", 20, 1234.5)]);

    let detail = api.detail_rows(&snap, None);
    assert_eq!(detail.len(), 1);

    let row = &detail[0];
    assert_eq!(row.material_id, "000123");
    assert_eq!(row.quantity, "1.234,500");
    // 20 days before 11/02/2025
    assert_eq!(row.last_movement, "22/01/2025");
    assert_eq!(row.days_in_stock, 20);
    assert_eq!(row.status, "Crítico");
}

#[test]
fn test_detail_rows_follow_filter() {
    let api = DashboardApi::new();
    let snap = snapshot(vec![
        stock_row("M001", "ACIDO", "L1", 5, 1.0),
        stock_row("M002", "SORBITOL", "L1", 15, 2.0),
    ]);

    let allowed: HashSet<String> = ["SORBITOL".to_string()].into_iter().collect();
    let detail = api.detail_rows(&snap, Some(&allowed));
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0].status, "Alerta");
}
