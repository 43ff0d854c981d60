//! Indexed dialogue table built from rows of string cells.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ImportConfig;
use crate::csv::parse_csv;
use crate::error::{DialogueError, DialogueResult};
use crate::record::{header_issues, Column, DialogueRecord};

/// What to do with a data row whose line id cell is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyRowPolicy {
    /// Stop reading; the empty row and everything after it is dropped.
    #[default]
    Truncate,
    /// Drop only the empty row and keep reading.
    Skip,
}

/// Ordered dialogue records with an id index.
///
/// Ids are expected to be unique. When a sheet repeats an id, every row is
/// kept in `records()` and `keys()`, but `lookup` resolves to the last one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TableData")]
pub struct DialogueTable {
    records: Vec<DialogueRecord>,
    #[serde(skip)]
    index: HashMap<i32, usize>,
}

#[derive(Deserialize)]
struct TableData {
    records: Vec<DialogueRecord>,
}

impl From<TableData> for DialogueTable {
    fn from(data: TableData) -> Self {
        let mut table = Self::default();
        table.replace(data.records);
        table
    }
}

impl DialogueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from header + data rows.
    pub fn from_rows<R, S>(rows: &[R]) -> DialogueResult<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        table.import(rows)?;
        Ok(table)
    }

    /// Parses CSV text and builds a table from it.
    pub fn from_csv_str(text: &str) -> DialogueResult<Self> {
        let rows = parse_csv(text)?;
        Self::from_rows(&rows)
    }

    /// Replaces the table contents with the rows after the header.
    ///
    /// The first data row with an empty line id ends the import. On error
    /// the previous contents are kept. Returns the number of records stored.
    pub fn import<R, S>(&mut self, rows: &[R]) -> DialogueResult<usize>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.import_with(rows, EmptyRowPolicy::Truncate)
    }

    /// Same as [`DialogueTable::import`] with an explicit empty-row policy.
    pub fn import_with<R, S>(
        &mut self,
        rows: &[R],
        policy: EmptyRowPolicy,
    ) -> DialogueResult<usize>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let records = collect_records(rows, policy)?;
        let count = records.len();
        self.replace(records);
        debug!(records = count, ?policy, "imported dialogue table");
        Ok(count)
    }

    /// Imports with the header check and empty-row policy from `config`.
    pub fn import_with_config<R, S>(
        &mut self,
        rows: &[R],
        config: &ImportConfig,
    ) -> DialogueResult<usize>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        if let Some(header) = rows.first() {
            let issues = header_issues(header.as_ref());
            if let Some(first) = issues.first() {
                if config.strict_header {
                    return Err(DialogueError::HeaderMismatch {
                        column: first.column.index(),
                        expected: first.column.title(),
                        found: first.found.clone().unwrap_or_default(),
                    });
                }
                for issue in &issues {
                    warn!(
                        column = issue.column.title(),
                        found = issue.found.as_deref().unwrap_or("<missing>"),
                        "unexpected dialogue header cell"
                    );
                }
            }
        }
        self.import_with(rows, config.empty_row)
    }

    /// Record for `id`, or `None` when the id is unknown.
    pub fn lookup(&self, id: i32) -> Option<&DialogueRecord> {
        self.index
            .get(&id)
            .and_then(|&position| self.records.get(position))
    }

    /// Position of the record `lookup(id)` would return.
    pub fn position(&self, id: i32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Line ids in import order.
    pub fn keys(&self) -> Vec<i32> {
        self.records.iter().map(|record| record.id).collect()
    }

    /// Line ids in import order, formatted for selection menus.
    ///
    /// Labels come from the parsed id, so a sheet cell like ` 42 ` or `+5`
    /// is listed as `42` or `5`.
    pub fn key_labels(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.id.to_string())
            .collect()
    }

    pub fn records(&self) -> &[DialogueRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn replace(&mut self, records: Vec<DialogueRecord>) {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            index.insert(record.id, position);
        }
        self.records = records;
        self.index = index;
    }
}

fn collect_records<R, S>(
    rows: &[R],
    policy: EmptyRowPolicy,
) -> DialogueResult<Vec<DialogueRecord>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut records = Vec::with_capacity(rows.len().saturating_sub(1));
    for (row, cells) in rows.iter().enumerate().skip(1) {
        let cells = cells.as_ref();
        if cell(cells, Column::LineId).is_empty() {
            match policy {
                EmptyRowPolicy::Truncate => {
                    let dropped = rows.len() - row;
                    if dropped > 1 {
                        warn!(row, dropped, "empty line id, ignoring the rest of the sheet");
                    }
                    break;
                }
                EmptyRowPolicy::Skip => continue,
            }
        }
        records.push(record_from_cells(row, cells)?);
    }
    Ok(records)
}

fn record_from_cells<S: AsRef<str>>(row: usize, cells: &[S]) -> DialogueResult<DialogueRecord> {
    let raw_id = cell(cells, Column::LineId);
    let id = raw_id
        .trim()
        .parse::<i32>()
        .map_err(|_| DialogueError::MalformedRow {
            row,
            raw_id: raw_id.to_string(),
        })?;

    let mut record = DialogueRecord {
        id,
        ..DialogueRecord::default()
    };
    for column in Column::ALL {
        if let Some(slot) = record.text_mut(column) {
            cell(cells, column).clone_into(slot);
        }
    }
    Ok(record)
}

// Rows shorter than the schema read as empty cells.
fn cell<S: AsRef<str>>(cells: &[S], column: Column) -> &str {
    cells.get(column.index()).map_or("", AsRef::as_ref)
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
