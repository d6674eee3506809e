use crate::{CliError, SolverMethod};
use pairing_core::models::{Config, Item, Requester};
use serde::Serialize;
use tracing::{Level, event};

/// The optimal values found by each method
#[derive(Debug, Serialize)]
pub struct Comparison {
    pub exhaustive: f64,
    pub optimized: f64,
}

/// Solve with both methods, failing if their optimal values differ beyond rounding
pub fn compare(
    config: &Config,
    items: &[Item],
    requesters: &[Requester],
    limit: usize,
) -> anyhow::Result<Comparison> {
    SolverMethod::Exhaustive.check_size(items.len(), requesters.len(), limit)?;

    let exhaustive = SolverMethod::Exhaustive
        .solve(config, items, requesters)?
        .value;
    let optimized = SolverMethod::Optimized
        .solve(config, items, requesters)?
        .value;

    let scale = exhaustive.abs().max(optimized.abs()).max(1.0);
    if (exhaustive - optimized).abs() > 1e-9 * scale {
        event!(Level::ERROR, exhaustive, optimized, "methods disagree");
        return Err(CliError::Disagreement {
            exhaustive,
            optimized,
        }
        .into());
    }

    event!(Level::INFO, value = optimized, "methods agree");
    Ok(Comparison {
        exhaustive,
        optimized,
    })
}
