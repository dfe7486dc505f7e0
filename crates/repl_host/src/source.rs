//! Read-only dataset lookup contracts and adapters.

use std::collections::HashMap;

use repl_contract::Table;

/// Host service that resolves dataset names and precomputed search results.
pub trait DatasetSource {
    /// Returns the table stored under `name`.
    fn lookup_file(&self, name: &str) -> Option<Table>;

    /// Returns the rows of `file` indexed under `(column, term)`.
    ///
    /// A hit may hold zero rows. Callers treat that the same as a miss.
    fn lookup_search(&self, file: &str, column: &str, term: &str) -> Option<Table>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Dataset source with nothing in it, for unsupported targets and baseline tests.
pub struct NoopDatasetSource;

impl DatasetSource for NoopDatasetSource {
    fn lookup_file(&self, _name: &str) -> Option<Table> {
        None
    }

    fn lookup_search(&self, _file: &str, _column: &str, _term: &str) -> Option<Table> {
        None
    }
}

/// Composite key of one precomputed search entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    /// Dataset name the entry belongs to.
    pub file: String,
    /// Column index as typed by the user.
    pub column: String,
    /// Exact search term.
    pub term: String,
}

impl SearchKey {
    /// Builds a key from borrowed parts.
    pub fn new(file: &str, column: &str, term: &str) -> Self {
        Self {
            file: file.to_string(),
            column: column.to_string(),
            term: term.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory dataset source.
pub struct MemoryDatasetSource {
    files: HashMap<String, Table>,
    searches: HashMap<SearchKey, Table>,
}

impl MemoryDatasetSource {
    /// Adds or replaces a named table.
    pub fn with_file(mut self, name: impl Into<String>, table: Table) -> Self {
        self.insert_file(name, table);
        self
    }

    /// Adds or replaces one precomputed search entry.
    pub fn with_search(mut self, key: SearchKey, rows: Table) -> Self {
        self.insert_search(key, rows);
        self
    }

    /// Adds or replaces a named table in place.
    pub fn insert_file(&mut self, name: impl Into<String>, table: Table) {
        self.files.insert(name.into(), table);
    }

    /// Adds or replaces one search entry in place.
    pub fn insert_search(&mut self, key: SearchKey, rows: Table) {
        self.searches.insert(key, rows);
    }

    /// Names of every stored table, sorted.
    pub fn file_names(&self) -> Vec<String> {
        let mut names = self.files.keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }
}

impl DatasetSource for MemoryDatasetSource {
    fn lookup_file(&self, name: &str) -> Option<Table> {
        self.files.get(name).cloned()
    }

    fn lookup_search(&self, file: &str, column: &str, term: &str) -> Option<Table> {
        self.searches
            .get(&SearchKey::new(file, column, term))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use repl_contract::Row;

    use super::*;

    fn people() -> Table {
        Table::new([Row::new(["tim", "nelson"]), Row::new(["jane", "doe"])])
    }

    #[test]
    fn memory_source_round_trips_files() {
        let source = MemoryDatasetSource::default().with_file("people.csv", people());
        assert_eq!(source.lookup_file("people.csv"), Some(people()));
        assert_eq!(source.lookup_file("missing.csv"), None);
        assert_eq!(source.file_names(), vec!["people.csv"]);
    }

    #[test]
    fn memory_search_is_scoped_by_file() {
        let hit = Table::new([Row::new(["tim", "nelson"])]);
        let source = MemoryDatasetSource::default()
            .with_file("people.csv", people())
            .with_search(SearchKey::new("people.csv", "0", "tim"), hit.clone());

        assert_eq!(source.lookup_search("people.csv", "0", "tim"), Some(hit));
        assert_eq!(source.lookup_search("other.csv", "0", "tim"), None);
        assert_eq!(source.lookup_search("people.csv", "1", "tim"), None);
    }

    #[test]
    fn noop_source_finds_nothing() {
        let source = NoopDatasetSource;
        assert_eq!(source.lookup_file("stringCSV.csv"), None);
        assert_eq!(source.lookup_search("stringCSV.csv", "0", "tim"), None);
    }
}
