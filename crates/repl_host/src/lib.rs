//! Dataset host contracts and in-memory adapters for the REPL.
//!
//! Command handlers only see [`DatasetSource`]. The mock fixtures used by the browser build are
//! one adapter among several, so a real file or database backend can be added without touching
//! handler logic.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod mock;
pub mod source;

pub use mock::{dataset_source_from_json, mock_dataset_source, FixtureError, MOCK_DATASETS_JSON};
pub use source::{DatasetSource, MemoryDatasetSource, NoopDatasetSource, SearchKey};
