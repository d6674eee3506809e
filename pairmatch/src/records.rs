//! Tab-separated input tables and report.
//!
//! Both tables carry a header row. Fields are trimmed, and a requester's `notes`
//! column may be empty or missing altogether.

use crate::Set;
use pairing_core::models::{Item, Requester, ValidationError};
use pairing_solver::io::Outcome;
use serde::{Deserialize, de::DeserializeOwned};
use std::io::{Read, Write};
use thiserror::Error;

/// The marker written in place of an item weight for requesters without an item
pub const UNASSIGNED: &str = "unassigned";

#[derive(Deserialize)]
struct ItemRecord {
    weight: f64,
}

#[derive(Deserialize)]
struct RequesterRecord {
    #[serde(alias = "identity")]
    name: String,
    target_weight: f64,
    #[serde(default)]
    notes: String,
}

/// The ways in which an input table may be unusable.
///
/// Records are numbered from 1, not counting the header.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("header: {0}")]
    Header(#[source] csv::Error),
    #[error("record {record}: {source}")]
    Malformed {
        record: usize,
        #[source]
        source: csv::Error,
    },
    #[error("record {record}: {source}")]
    Invalid {
        record: usize,
        #[source]
        source: ValidationError,
    },
    #[error("record {record}: duplicate requester name {name:?}")]
    DuplicateName { record: usize, name: String },
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input)
}

// Deserialize every row against the header, numbering records from 1. Rows shorter than
// the header have their trailing columns read as empty fields.
fn rows<T: DeserializeOwned>(input: impl Read) -> Result<Vec<(usize, T)>, LoadError> {
    let mut reader = reader(input);
    let headers = reader.headers().map_err(LoadError::Header)?.clone();

    reader
        .records()
        .enumerate()
        .map(|(idx, row)| {
            let record = idx + 1;
            let mut row = row.map_err(|source| LoadError::Malformed { record, source })?;
            while row.len() < headers.len() {
                row.push_field("");
            }
            row.deserialize(Some(&headers))
                .map(|value| (record, value))
                .map_err(|source| LoadError::Malformed { record, source })
        })
        .collect()
}

/// Read the items table
pub fn read_items(input: impl Read) -> Result<Vec<Item>, LoadError> {
    rows::<ItemRecord>(input)?
        .into_iter()
        .map(|(record, ItemRecord { weight })| {
            Item::new(weight).map_err(|source| LoadError::Invalid { record, source })
        })
        .collect()
}

/// Read the requesters table, rejecting duplicate names
pub fn read_requesters(input: impl Read) -> Result<Vec<Requester>, LoadError> {
    let mut names = Set::<String>::default();
    let mut requesters = Vec::new();

    for (record, row) in rows::<RequesterRecord>(input)? {
        let RequesterRecord {
            name,
            target_weight,
            notes,
        } = row;

        if !names.insert(name.clone()) {
            return Err(LoadError::DuplicateName { record, name });
        }

        requesters.push(
            Requester::new(name, target_weight, notes)
                .map_err(|source| LoadError::Invalid { record, source })?,
        );
    }

    Ok(requesters)
}

/// Write the per-requester report: one row per requester, in input order, with the
/// weight and agreed price of the assigned item or the [`UNASSIGNED`] marker.
pub fn write_report(outcome: &Outcome, output: impl Write) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(output);

    writer.write_record([
        "name",
        "target_weight",
        "notes",
        "item_weight",
        "agreed_price",
    ])?;

    for requester in outcome.requesters.iter() {
        let weight = requester
            .weight
            .map_or_else(|| UNASSIGNED.to_owned(), |w| w.to_string());
        let price = requester.price.map(|p| p.to_string()).unwrap_or_default();
        let target = requester.target_weight.to_string();
        writer.write_record([
            requester.name.as_str(),
            target.as_str(),
            requester.notes.as_str(),
            weight.as_str(),
            price.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
