use analytics::{
    sector_stats, sort_sectors, SectorAggregator, SeededRandom, SortDirection, SortField,
};
use api_client::{fetch_many, YahooClient};
use chrono::Utc;
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use configuration::{AppConfig, ServerOverrides};
use core_types::{SectorCategory, SectorRecord, Trend};
use reference_data::{profile, DEFAULT_SECTOR_COUNTRY};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// The main entry point for the Oracle Portfolio application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Secrets (credential digest, signing key) usually come from .env; it is optional.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => configuration::load_config_from(path)?,
        None => configuration::load_config()?,
    };
    let _guard = configuration::init_tracing(&config.logging)?;

    match cli.command {
        Commands::Serve(args) => {
            config.apply_overrides(&args.server);
            web_server::run_server(config).await
        }
        Commands::Sectors(args) => handle_sectors(args, &config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Portfolio dashboard backend: macro regimes, allocations and sector analytics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults to `config.toml` if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve(ServeArgs),
    /// Print the sector breakdown for a country.
    Sectors(SectorsArgs),
}

#[derive(Parser)]
struct ServeArgs {
    #[command(flatten)]
    server: ServerOverrides,
}

#[derive(Parser)]
struct SectorsArgs {
    /// Country code or name (e.g. "FRA", "Japon").
    #[arg(long, default_value = DEFAULT_SECTOR_COUNTRY)]
    country: String,

    /// Fetch live ETF series instead of using the static figures.
    #[arg(long)]
    live: bool,

    /// Sort column: name, allocation, performance, risk, grade or trend.
    #[arg(long, default_value = "allocation", value_parser = parse_sort_field)]
    sort: SortField,

    /// Print the records as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn parse_sort_field(value: &str) -> Result<SortField, String> {
    serde_json::from_value(serde_json::Value::String(value.to_lowercase()))
        .map_err(|_| format!("unknown sort field '{value}'"))
}

// ==============================================================================
// Sectors Command Logic
// ==============================================================================

async fn handle_sectors(args: SectorsArgs, config: &AppConfig) -> anyhow::Result<()> {
    let random = Arc::new(SeededRandom::from_optional_seed(config.randomness.seed));
    let aggregator = SectorAggregator::new(random);

    let live = if args.live {
        let client = YahooClient::new(&config.market_data)?;
        let symbols: Vec<&str> = SectorCategory::ALL
            .iter()
            .map(|&category| profile(category).etf_symbol)
            .collect();
        fetch_many(&client, &symbols).await
    } else {
        HashMap::new()
    };
    tracing::info!(country = %args.country, live_series = live.len(), "Aggregating sectors.");

    let mut records = aggregator.aggregate(&args.country, &live, Utc::now());
    sort_sectors(&mut records, args.sort, SortDirection::Desc);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("{}", render_table(&records));
    if let Some(stats) = sector_stats(&records) {
        println!(
            concat!(
                "{} sectors | allocation {:.1}% | avg performance {:.2}% | ",
                "avg risk {:.1} | diversification {:.1}",
            ),
            stats.sectors_count,
            stats.total_allocation,
            stats.average_performance,
            stats.average_risk,
            stats.diversification_score,
        );
    }
    Ok(())
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Stable => "→",
    }
}

fn render_table(records: &[SectorRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Sector", "ETF", "Alloc %", "Perf %", "Risk", "Vol %", "Trend", "Grade", "Source",
    ]);

    for record in records {
        let m = &record.metrics;
        let perf_color = if m.performance >= 0.0 { Color::Green } else { Color::Red };
        table.add_row(vec![
            Cell::new(format!("{} {}", record.metadata.icon, record.metadata.name)),
            Cell::new(&record.metadata.etf_symbol),
            Cell::new(format!("{:.2}", m.allocation)),
            Cell::new(format!("{:+.2}", m.performance)).fg(perf_color),
            Cell::new(format!("{:.0}", m.risk_score)),
            Cell::new(format!("{:.1}", m.volatility)),
            Cell::new(trend_arrow(m.trend)),
            Cell::new(record.grade.to_string()),
            Cell::new(&record.source),
        ]);
    }
    table
}
