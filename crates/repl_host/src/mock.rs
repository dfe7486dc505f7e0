//! Mock datasets standing in for CSV files.
//!
//! Fixtures are declared as JSON. Each file carries its rows and a precomputed search index
//! whose entries point back into those rows by position.

use std::collections::BTreeMap;

use repl_contract::{Row, Table};
use serde::Deserialize;
use thiserror::Error;

use crate::source::{MemoryDatasetSource, SearchKey};

/// Bundled mock fixture document.
pub const MOCK_DATASETS_JSON: &str = include_str!("fixtures/mock_datasets.json");

/// Fixture decoding failures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture document is not valid JSON for the expected shape.
    #[error("invalid dataset fixture: {0}")]
    Json(#[from] serde_json::Error),
    /// A search entry points past the end of its file's rows.
    #[error("search entry `{column} {term}` in {file} references missing row {index}")]
    RowOutOfRange {
        /// Dataset name.
        file: String,
        /// Search column.
        column: String,
        /// Search term.
        term: String,
        /// Offending row position.
        index: usize,
    },
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    rows: Vec<Row>,
    #[serde(default)]
    search: Vec<FixtureSearch>,
}

#[derive(Debug, Deserialize)]
struct FixtureSearch {
    column: String,
    term: String,
    rows: Vec<usize>,
}

/// Builds the dataset source backing the bundled mock files.
///
/// # Errors
///
/// Returns [`FixtureError`] when the bundled fixture is malformed.
pub fn mock_dataset_source() -> Result<MemoryDatasetSource, FixtureError> {
    dataset_source_from_json(MOCK_DATASETS_JSON)
}

/// Builds a dataset source from a fixture document with the bundled layout.
///
/// # Errors
///
/// Returns [`FixtureError`] when `raw` cannot be decoded or a search entry points at a
/// missing row.
pub fn dataset_source_from_json(raw: &str) -> Result<MemoryDatasetSource, FixtureError> {
    let files: BTreeMap<String, FixtureFile> = serde_json::from_str(raw)?;
    let mut source = MemoryDatasetSource::default();

    for (name, file) in files {
        for entry in &file.search {
            let rows = entry
                .rows
                .iter()
                .map(|&index| {
                    file.rows
                        .get(index)
                        .cloned()
                        .ok_or_else(|| FixtureError::RowOutOfRange {
                            file: name.clone(),
                            column: entry.column.clone(),
                            term: entry.term.clone(),
                            index,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            source.insert_search(
                SearchKey::new(&name, &entry.column, &entry.term),
                Table::new(rows),
            );
        }
        source.insert_file(name, Table::new(file.rows));
    }

    Ok(source)
}
