//! @ai:module:intent CLI for onlineAssignment sweeps, result tables and maps
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oa_bench::{
    build_table_report,
    config::SweepConfig,
    map::{load_stops, load_warehouses},
    report::{MapChart, MapChartTrait, MapView, ReportGenerator, TableFormat},
    sweep::{plan, ProcessRunner, RunStatus, SweepExecutor, SweepSummary},
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "oa-bench")]
#[command(about = "Parameter sweeps and result tables for the onlineAssignment solver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the solver over the configured parameter grid
    Sweep {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log the planned command lines without running the solver
        #[arg(long)]
        dry_run: bool,

        /// Abort on the first failed run
        #[arg(long)]
        fail_fast: bool,
    },

    /// Print the invocation plan
    List {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Aggregate result files into a table
    Table {
        /// Directory holding result files
        dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TableFormat::Latex)]
        format: TableFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Plot client stops and warehouses on a map image
    Map {
        /// Headerless CSV of idx,latitude,longitude
        #[arg(long)]
        stops: PathBuf,

        /// JSON object of named warehouses with latitude and longitude
        #[arg(long)]
        warehouses: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = "map.png")]
        output: PathBuf,

        #[arg(long, default_value = "1200")]
        width: u32,

        #[arg(long, default_value = "900")]
        height: u32,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "oa-bench.toml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("oa_bench=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sweep {
            config,
            dry_run,
            fail_fast,
        } => run_sweep(config, dry_run, fail_fast).await,
        Commands::List { config } => list_plan(config),
        Commands::Table {
            dir,
            format,
            output,
        } => print_table(dir, format, output),
        Commands::Map {
            stops,
            warehouses,
            output,
            width,
            height,
        } => draw_map(stops, warehouses, output, width, height),
        Commands::Init { output } => init_config(output),
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

/// @ai:intent Run every planned invocation and report the outcome
/// @ai:effects process, fs:write
async fn run_sweep(config_path: Option<PathBuf>, dry_run: bool, fail_fast: bool) -> Result<()> {
    let mut config = load_or_default_config(config_path)?;
    config.run.dry_run |= dry_run;
    config.run.fail_fast |= fail_fast;

    let invocations = plan(&config);

    if invocations.is_empty() {
        tracing::warn!("The parameter grid is empty. Nothing to run.");
        return Ok(());
    }

    tracing::info!("Planned {} solver runs", invocations.len());

    let collect_dir = config.paths.collect_dir.clone();
    let executor = SweepExecutor::new(Arc::new(ProcessRunner::new()), config);
    let summary = executor.execute_all(&invocations).await?;

    if let Some(dir) = collect_dir.filter(|d| d.exists()) {
        let path = dir.join("sweep.json");
        summary.save(&path)?;
        tracing::info!("Sweep summary saved to {}", path.display());
    }

    print_summary(&summary);
    Ok(())
}

/// @ai:intent Print the invocation plan without running anything
/// @ai:effects fs:read
fn list_plan(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_or_default_config(config_path)?;
    let invocations = plan(&config);

    println!("Planned runs ({}):", invocations.len());
    println!();

    for (i, invocation) in invocations.iter().enumerate() {
        println!(
            "{:>4}  {}",
            i + 1,
            invocation.command_line(&config.solver.binary)
        );
    }

    Ok(())
}

/// @ai:intent Aggregate a result directory and render the table
/// @ai:effects fs:read, fs:write
fn print_table(dir: PathBuf, format: TableFormat, output: Option<PathBuf>) -> Result<()> {
    let report = build_table_report(&dir)
        .with_context(|| format!("Failed to build table from {}", dir.display()))?;

    tracing::info!(
        "Aggregated {} values from {} files into {} rows",
        report.record_count,
        report.file_count,
        report.table.rows.len()
    );

    let generator = ReportGenerator::new();

    match output {
        Some(path) => generator.write(&report, format, &path)?,
        None => print!("{}", generator.render(&report, format)?),
    }

    Ok(())
}

/// @ai:intent Draw the stop and warehouse map
/// @ai:effects fs:read, fs:write
fn draw_map(
    stops_path: PathBuf,
    warehouses_path: PathBuf,
    output: PathBuf,
    width: u32,
    height: u32,
) -> Result<()> {
    let stops = load_stops(&stops_path)
        .with_context(|| format!("Failed to load stops from {}", stops_path.display()))?;
    let warehouses = load_warehouses(&warehouses_path).with_context(|| {
        format!("Failed to load warehouses from {}", warehouses_path.display())
    })?;

    let view = MapView {
        width,
        height,
        ..MapView::default()
    };

    let drawn = MapChart::new(view).render(&stops, &warehouses, &output)?;

    println!("Map with {} markers written to {}", drawn, output.display());
    Ok(())
}

/// @ai:intent Write the default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    if output.exists() {
        anyhow::bail!("{} already exists. Remove it first or edit it.", output.display());
    }

    SweepConfig::default().save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration from path or fall back to defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<SweepConfig> {
    match path {
        Some(p) => SweepConfig::load(&p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => {
            let default_path = PathBuf::from("oa-bench.toml");

            if default_path.exists() {
                SweepConfig::load(&default_path)
            } else {
                tracing::info!("No oa-bench.toml found, using default grid");
                Ok(SweepConfig::default())
            }
        }
    }
}

/// @ai:intent Print a short summary of the sweep outcomes
/// @ai:effects io
fn print_summary(summary: &SweepSummary) {
    println!();
    println!("Sweep Results");
    println!("=============");
    println!();
    println!("{:<12} {:>6}", "Succeeded", summary.count(RunStatus::Succeeded));
    println!("{:<12} {:>6}", "Failed", summary.count(RunStatus::Failed));
    println!("{:<12} {:>6}", "Skipped", summary.count(RunStatus::Skipped));
    println!("{}", "-".repeat(19));
    println!(
        "{:<12} {:>5}s",
        "Elapsed",
        summary.total_elapsed_ms() / 1000
    );

    let collected = summary
        .outcomes
        .iter()
        .filter(|o| o.collected.is_some())
        .count();

    if collected > 0 {
        println!("{:<12} {:>6}", "Collected", collected);
    }
}
