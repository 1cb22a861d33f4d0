// ==========================================
// Stock Aging Analytics - CLI entry point
// ==========================================
// Thin presentation collaborator: resolves the input file, captures the
// reference date once, runs the pipeline and prints a JSON report.
// ==========================================

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::Parser;
use serde_json::json;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use stock_aging::config::DEFAULT_EXPORT_FILE;
use stock_aging::{AgingConfig, DashboardApi, StockImporter};

/// Raw-material stock aging report over a warehouse export (CSV/Excel).
#[derive(Parser, Debug)]
#[command(name = "stock-aging", version, about)]
struct Cli {
    /// Input export file (.csv / .xlsx / .xls). Falls back to the
    /// conventional export file name in the working directory.
    input: Option<PathBuf>,

    /// Reference ("as-of") date for aging, YYYY-MM-DD. Defaults to today,
    /// captured once for the whole run.
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// How many materials to rank by mean aging (clamped to 5..=20).
    #[arg(long, default_value_t = 10)]
    top_n: usize,

    /// Restrict the analysis to these material descriptions (repeatable).
    #[arg(long = "filter")]
    filters: Vec<String>,

    /// Fail fast when the export header labels do not match the
    /// expected layout instead of trusting column positions.
    #[arg(long)]
    validate_headers: bool,
}

fn main() -> anyhow::Result<()> {
    stock_aging::logging::init();

    let cli = Cli::parse();

    tracing::info!("{} v{}", stock_aging::APP_NAME, stock_aging::VERSION);

    let input = match cli.input {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_EXPORT_FILE);
            if !default.exists() {
                bail!(
                    "no input file given and '{}' not found in the working directory",
                    DEFAULT_EXPORT_FILE
                );
            }
            tracing::info!("auto-discovered default export '{}'", DEFAULT_EXPORT_FILE);
            default.to_path_buf()
        }
    };

    // Captured once; every row of this run ages against the same date.
    let reference_date = cli
        .reference_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let config = AgingConfig {
        validate_headers: cli.validate_headers,
        ..AgingConfig::default()
    };

    let importer = StockImporter::new(config);
    let snapshot = importer
        .ingest(&input, reference_date)
        .with_context(|| format!("failed to ingest '{}'", input.display()))?;

    let filter: Option<HashSet<String>> = if cli.filters.is_empty() {
        None
    } else {
        Some(cli.filters.into_iter().collect())
    };

    let api = DashboardApi::new();
    let kpis = api.kpis(&snapshot, filter.as_ref());
    let tier_counts = api.tier_counts(&snapshot, filter.as_ref());
    let top_materials = api.top_materials(&snapshot, cli.top_n, filter.as_ref());
    let detail = api.detail_rows(&snapshot, filter.as_ref());

    let report = json!({
        "reference_date": snapshot.reference_date,
        "ingest": snapshot.report,
        "kpis": kpis,
        "tier_counts": tier_counts,
        "top_materials": top_materials,
        "detail": detail,
    });

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
