//! FOV star selection binary
//!
//! Reads a tab-separated catalog, keeps the stars inside a rectangular field
//! of view, ranks them by brightness and then by distance to the target, and
//! writes the result to `<unix-seconds>.csv`.
//!
//! # Usage
//!
//! ```bash
//! fov-select --catalog small_dataset.tsv --ra 10 --dec 0 --count 5 --fov-h 2 --fov-v 2
//!
//! # Missing query values are asked for on stdin
//! fov-select --catalog small_dataset.tsv
//! ```
//!
//! # Environment Variables
//!
//! - `FOV_CATALOG_PATH`: Catalog file (default: small_dataset.tsv)
//! - `FOV_EXPORT_DIR`: Directory for the exported CSV (default: .)
//! - `FOV_SORT_COLUMN`: Column for the first ranking (default: b)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use star_fov::config::{AppConfig, QuerySettings};
use star_fov::io::{complete_query, format_value};
use star_fov::models::StarTable;
use star_fov::services::run_catalog_pipeline;

#[derive(Parser, Debug)]
#[command(name = "fov-select")]
#[command(about = "Select and rank catalog stars inside a field of view")]
struct Cli {
    /// TOML configuration file (default: fov.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tab-separated catalog file
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Target right ascension in degrees
    #[arg(long, allow_negative_numbers = true)]
    ra: Option<f64>,

    /// Target declination in degrees
    #[arg(long, allow_negative_numbers = true)]
    dec: Option<f64>,

    /// Number of stars to keep
    #[arg(long)]
    count: Option<usize>,

    /// Horizontal field of view in degrees
    #[arg(long = "fov-h")]
    fov_horizontal: Option<f64>,

    /// Vertical field of view in degrees
    #[arg(long = "fov-v")]
    fov_vertical: Option<f64>,

    /// Column for the brightness ranking
    #[arg(long)]
    sort_column: Option<String>,

    /// Directory for the exported CSV
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Only list the brightest stars: no distance, no export
    #[arg(long)]
    print_only: bool,

    /// Do not write the CSV file
    #[arg(long)]
    no_export: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn query_overrides(&self, base: &QuerySettings) -> QuerySettings {
        QuerySettings {
            ra: self.ra.or(base.ra),
            dec: self.dec.or(base.dec),
            count: self.count.or(base.count),
            fov_horizontal: self.fov_horizontal.or(base.fov_horizontal),
            fov_vertical: self.fov_vertical.or(base.fov_vertical),
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::from_default_location()?,
    };
    config.apply_env();

    if let Some(catalog) = &cli.catalog {
        config.catalog.path = catalog.clone();
    }
    if let Some(column) = &cli.sort_column {
        config.ranking.sort_column = column.clone();
    }
    if let Some(dir) = &cli.export_dir {
        config.export.directory = dir.clone();
    }
    if cli.no_export || cli.print_only {
        config.export.enabled = false;
    }
    config.query = cli.query_overrides(&config.query);

    Ok(config)
}

fn print_table(out: &mut impl Write, table: &StarTable) -> io::Result<()> {
    let names: Vec<&str> = table.layout.roles().iter().map(|r| r.name()).collect();
    writeln!(out, "{}", names.join("\t"))?;
    for record in &table.records {
        let mut cells = vec![record.id.to_string()];
        cells.extend(record.fields.iter().map(|v| format_value(*v)));
        writeln!(out, "{}", cells.join("\t"))?;
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    let stdin = io::stdin();
    let query = complete_query(&config.query, &mut stdin.lock(), &mut io::stdout())
        .context("Failed to read query parameters")?;
    info!(
        "Searching {} around RA {} Dec {} ({} x {} deg)",
        config.catalog.path.display(),
        query.fov.center.ra.value(),
        query.fov.center.dec.value(),
        query.fov.horizontal.value(),
        query.fov.vertical.value()
    );

    let output = run_catalog_pipeline(&config, query, !cli.print_only)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &output)?;
        writeln!(out)?;
    } else {
        print_table(&mut out, &output.table)?;
    }

    if let Some(path) = &output.export_path {
        info!("Wrote {}", path.display());
    }

    Ok(())
}

fn main() {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        let kind = err
            .chain()
            .find_map(|e| e.downcast_ref::<star_fov::FovError>())
            .map(|e| e.kind())
            .unwrap_or("ERROR");
        error!("Run aborted");
        eprintln!("{}: {:#}", kind, err);
        std::process::exit(1);
    }
}
