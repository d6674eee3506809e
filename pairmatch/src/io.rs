use crate::{LoadError, read_items, read_requesters};
use clap::Args;
use pairing_core::models::{Item, Requester};
use std::{
    fs::File,
    io::{BufReader, Read, Write, stdin, stdout},
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{Level, event};

// Subcommands that work from a single document have a notion of input and output.
// This struct standardizes their implementation.
#[derive(Args)]
pub struct IOArgs {
    /// The problem JSON file ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(PathOrStd))]
    pub input: PathOrStd,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    pub output: PathOrStd,
}

impl IOArgs {
    pub fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        match &self.input {
            PathOrStd::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            PathOrStd::Std => Ok(Box::new(stdin().lock())),
        }
    }
}

// Subcommands that work from the two tab-separated tables share these.
#[derive(Args)]
pub struct TableArgs {
    /// The items TSV file (a `weight` column)
    #[arg(long)]
    pub items: PathBuf,

    /// The requesters TSV file (`name`, `target_weight` and optional `notes` columns)
    #[arg(long)]
    pub requesters: PathBuf,
}

impl TableArgs {
    pub fn load(&self) -> anyhow::Result<(Vec<Item>, Vec<Requester>)> {
        let items = read_items(open(&self.items)?).map_err(|err| in_file(&self.items, err))?;
        let requesters = read_requesters(open(&self.requesters)?)
            .map_err(|err| in_file(&self.requesters, err))?;
        event!(
            Level::DEBUG,
            items = items.len(),
            requesters = requesters.len(),
            "loaded tables"
        );
        Ok((items, requesters))
    }
}

fn open(path: &Path) -> anyhow::Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|err| anyhow::anyhow!("Unable to open {}: {err}", path.display()))
}

fn in_file(path: &Path, err: LoadError) -> anyhow::Error {
    anyhow::Error::new(err).context(format!("Unable to load {}", path.display()))
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl PathOrStd {
    /// Write the whole buffer to the destination, creating the file only now
    pub fn write_all(&self, bytes: &[u8]) -> anyhow::Result<()> {
        match self {
            PathOrStd::Path(path) => {
                let mut file = File::create(path)?;
                file.write_all(bytes)?;
                file.flush()?;
            }
            PathOrStd::Std => {
                let mut out = stdout().lock();
                out.write_all(bytes)?;
                out.flush()?;
            }
        }
        Ok(())
    }

    pub fn extension(&self) -> Option<&str> {
        match self {
            PathOrStd::Path(path) => path.extension(),
            PathOrStd::Std => None,
        }
        .and_then(|ext| ext.to_str())
    }
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_is_std() {
        assert_eq!("-".parse::<PathOrStd>().unwrap(), PathOrStd::Std);
        assert_eq!(PathOrStd::Std.extension(), None);
    }

    #[test]
    fn extension_of_path() {
        let output = "out/report.json".parse::<PathOrStd>().unwrap();
        assert_eq!(output.extension(), Some("json"));
    }
}
