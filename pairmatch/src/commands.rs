use super::{IOArgs, PathOrStd, TableArgs};
use clap::Subcommand;

mod compare;
pub use compare::{Comparison, compare};

mod report;
pub use report::{ReportFormat, ReportFormatError};

mod solve;
pub use solve::SolverMethod;

#[derive(Subcommand)]
pub enum Commands {
    /// Pair the items with the requesters and report who gets what
    Solve {
        #[command(flatten)]
        tables: TableArgs,

        /// The report file ("-" implies stdout)
        #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
        output: PathOrStd,

        /// Request a specific solution method
        #[arg(short, long, default_value = "optimized")]
        method: SolverMethod,

        /// The report format (if omitted, will infer based on filename, defaulting to tsv)
        #[arg(short, long)]
        format: Option<ReportFormat>,
    },

    /// Solve a JSON problem document and report the outcome as JSON
    Run {
        #[command(flatten)]
        io: IOArgs,

        /// Request a specific solution method
        #[arg(short, long, default_value = "optimized")]
        method: SolverMethod,
    },

    /// Solve with both methods and check that they reach the same value
    Compare {
        #[command(flatten)]
        tables: TableArgs,
    },
}
