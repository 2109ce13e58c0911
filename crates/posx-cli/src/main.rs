use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{ReportArgs, Section};

#[derive(Parser)]
#[command(name = "posx")]
#[command(about = "Position averaging, PnL and target-price calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full report: analysis, per-fill table, target prices, adjustment advice
    Report(ReportArgs),

    /// Average price, quantity and long/short PnL at take-profit and stop-loss
    Analyze(ReportArgs),

    /// Per-fill cumulative table
    Table(ReportArgs),

    /// Target prices for the configured return on position and on principal
    Targets(ReportArgs),

    /// Hedge and add-on sizing to reach the target return at the desired price
    Adjust(ReportArgs),

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order (base -> overlays)
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Optional local overrides (RUST_LOG etc). Missing file is fine.
    let _ = dotenvy::from_filename(".env.local");
    init_tracing();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report(args) => commands::report::run(Section::All, &args)?,
        Commands::Analyze(args) => commands::report::run(Section::Analysis, &args)?,
        Commands::Table(args) => commands::report::run(Section::Table, &args)?,
        Commands::Targets(args) => commands::report::run(Section::Targets, &args)?,
        Commands::Adjust(args) => commands::report::run(Section::Adjustment, &args)?,

        Commands::ConfigHash { paths } => {
            let loaded = posx_config::load_layered_yaml(paths.as_slice())?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays a clean report.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();
}
