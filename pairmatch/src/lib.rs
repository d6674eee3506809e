use clap::Parser;
use pairing_core::models::{Config, NegotiationPolicy};
use pairing_solver::io::{Outcome, Problem};
use std::path::PathBuf;
use tracing::{Level, event};

mod config;
pub use config::AppConfig;

mod io;
pub use io::*;

mod records;
pub use records::*;

mod commands;
pub use commands::*;

// We use non-std collections here for their ordering semantics and performance
pub(crate) type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;

// The top-level arguments: the configuration overrides and which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "PAIRMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured negotiation policy (min-of-willingness or midpoint)
    #[arg(short, long, global = true)]
    pub policy: Option<NegotiationPolicy>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let app = AppConfig::load(self.config.as_deref())?;
        let config = match self.policy {
            Some(policy) => Config {
                policy,
                ..app.pricing
            },
            None => app.pricing,
        };
        event!(
            Level::DEBUG,
            unit_price = config.pricing.unit_price(),
            leftover_fraction = config.pricing.leftover_fraction(),
            policy = %config.policy,
            "configured"
        );

        match self.command {
            Commands::Solve {
                tables,
                output,
                method,
                format,
            } => {
                let (items, requesters) = tables.load()?;
                method.check_size(items.len(), requesters.len(), app.exhaustive_limit)?;
                let outcome = method.solve(&config, &items, &requesters)?;
                summarize(&outcome);

                let format = match format {
                    Some(format) => format,
                    None => output
                        .extension()
                        .and_then(|ext| ext.parse().ok())
                        .unwrap_or(ReportFormat::Tsv),
                };

                // Render fully before touching the destination, so a failure never leaves a partial file
                let report = format.render(&outcome)?;
                output.write_all(&report)?;
            }
            Commands::Run { io, method } => {
                let problem = serde_json::from_reader::<_, Problem>(io.read()?)?;
                let size = (problem.items.len(), problem.requesters.len());
                method.check_size(size.0, size.1, app.exhaustive_limit)?;
                let outcome = method.run(&problem, config)?;
                summarize(&outcome);

                let report = ReportFormat::Json.render(&outcome)?;
                io.output.write_all(&report)?;
            }
            Commands::Compare { tables } => {
                let (items, requesters) = tables.load()?;
                let comparison = compare(&config, &items, &requesters, app.exhaustive_limit)?;
                let mut report = serde_json::to_vec_pretty(&comparison)?;
                report.push(b'\n');
                PathOrStd::Std.write_all(&report)?;
            }
        }

        Ok(())
    }
}

fn summarize(outcome: &Outcome) {
    event!(
        Level::INFO,
        value = outcome.value,
        sales = outcome.sales,
        salvage = outcome.salvage,
        unmatched = outcome.unmatched().count(),
        leftovers = outcome.leftovers.len(),
        "solved"
    );
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Input of size {size} exceeds the exhaustive limit of {limit}, use the optimized method")]
    TooLarge { size: usize, limit: usize },
    #[error("Solvers disagree: exhaustive found {exhaustive}, optimized found {optimized}")]
    Disagreement { exhaustive: f64, optimized: f64 },
}
