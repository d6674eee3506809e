use crate::write_report;
use clap::ValueEnum;
use pairing_solver::io::Outcome;
use std::str::FromStr;

// Same story here with the ReportFormat enum, as with the SolverMethod enum
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum ReportFormat {
    Tsv,
    Json,
}

impl ReportFormat {
    /// Render the full report in memory
    pub fn render(&self, outcome: &Outcome) -> anyhow::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        match self {
            Self::Tsv => write_report(outcome, &mut buffer)?,
            Self::Json => {
                serde_json::to_writer_pretty(&mut buffer, outcome)?;
                buffer.push(b'\n');
            }
        };
        Ok(buffer)
    }
}

impl FromStr for ReportFormat {
    type Err = ReportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tsv" | "TSV" => Ok(Self::Tsv),
            "json" | "JSON" => Ok(Self::Json),
            _ => Err(Self::Err::ReportExtension(s.to_owned())),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ReportFormatError {
    #[error("Unknown report format: {0}")]
    ReportExtension(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("tsv", Some(ReportFormat::Tsv))]
    #[case("JSON", Some(ReportFormat::Json))]
    #[case("csv", None)]
    fn from_extension(#[case] ext: &str, #[case] expected: Option<ReportFormat>) {
        assert_eq!(ext.parse::<ReportFormat>().ok(), expected);
    }
}
