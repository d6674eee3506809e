use crate::CliError;
use clap::ValueEnum;
use pairing_core::models::{Config, Item, Requester};
use pairing_solver::{
    ExhaustiveSolver, HungarianSolver, LpSolver, Solver,
    io::{Outcome, Problem},
};

// This explicitly articulates the available methods for the `solve` and `run` subcommands
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum SolverMethod {
    Exhaustive,
    Optimized,
    Lp,
}

// Conveniently, we can use the same enum to handle the particulars of calling into
// the various solver implementations
impl SolverMethod {
    /// The exhaustive method grows factorially, so refuse inputs beyond the configured limit
    pub fn check_size(&self, items: usize, requesters: usize, limit: usize) -> Result<(), CliError> {
        let size = items.max(requesters);
        match self {
            Self::Exhaustive if size > limit => Err(CliError::TooLarge { size, limit }),
            _ => Ok(()),
        }
    }

    pub fn solve(
        &self,
        config: &Config,
        items: &[Item],
        requesters: &[Requester],
    ) -> anyhow::Result<Outcome> {
        let valuation = config.valuation();
        let pairing = match self {
            Self::Exhaustive => ExhaustiveSolver.solve(&valuation, items, requesters)?,
            Self::Optimized => HungarianSolver.solve(&valuation, items, requesters)?,
            Self::Lp => LpSolver.solve(&valuation, items, requesters)?,
        };
        Ok(Outcome::new(&valuation, items, requesters, &pairing))
    }

    pub fn run(&self, problem: &Problem, fallback: Config) -> anyhow::Result<Outcome> {
        let outcome = match self {
            Self::Exhaustive => problem.solve(&ExhaustiveSolver, fallback)?,
            Self::Optimized => problem.solve(&HungarianSolver, fallback)?,
            Self::Lp => problem.solve(&LpSolver, fallback)?,
        };
        Ok(outcome)
    }
}
