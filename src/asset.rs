//! Dialogue assets: an imported table together with the sheet it came from.
//!
//! Sheets are picked up by naming convention (`...AF.csv` by default) and
//! each one is stored next to itself as a JSON `.asset` file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ImportConfig;
use crate::csv::parse_csv;
use crate::error::{DialogueError, DialogueResult};
use crate::table::DialogueTable;

const ASSET_EXTENSION: &str = "asset";
const SOURCE_EXTENSION: &str = "csv";

/// Whether `path` names a sheet that should be imported.
pub fn is_dialogue_source(path: &Path, suffix: &str) -> bool {
    !suffix.is_empty()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.contains(suffix))
}

/// Where the asset for a sheet is stored.
pub fn asset_path_for(source: &Path) -> PathBuf {
    source.with_extension(ASSET_EXTENSION)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogueAsset {
    pub source_path: PathBuf,
    pub table: DialogueTable,
}

impl DialogueAsset {
    /// Reads and imports the sheet at `path`.
    pub fn import_file(path: &Path, config: &ImportConfig) -> DialogueResult<Self> {
        let table = read_table(path, config)?;
        Ok(Self {
            source_path: path.to_path_buf(),
            table,
        })
    }

    pub fn save_json(&self, path: &Path) -> DialogueResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| DialogueError::Serialization(err.to_string()))?;
        fs::write(path, json).map_err(|err| DialogueError::io(path, err))
    }

    pub fn load_json(path: &Path) -> DialogueResult<Self> {
        let json = fs::read_to_string(path).map_err(|err| DialogueError::io(path, err))?;
        serde_json::from_str(&json).map_err(|err| DialogueError::Serialization(err.to_string()))
    }

    /// Re-reads the sheet this asset was imported from.
    ///
    /// When the recorded path is gone, the `.csv` sibling of that path is
    /// tried instead and remembered if it has lines. The table is only
    /// replaced when some lines were found. Returns whether it was replaced.
    pub fn refresh(&mut self, config: &ImportConfig) -> DialogueResult<bool> {
        let mut candidates = vec![self.source_path.clone()];
        let sibling = self.source_path.with_extension(SOURCE_EXTENSION);
        if sibling != self.source_path {
            candidates.push(sibling);
        }

        for candidate in candidates {
            if !candidate.is_file() {
                debug!(path = %candidate.display(), "no dialogue sheet at path");
                continue;
            }
            let table = read_table(&candidate, config)?;
            if table.is_empty() {
                debug!(path = %candidate.display(), "dialogue sheet has no lines");
                continue;
            }
            info!(path = %candidate.display(), records = table.len(), "refreshed dialogue asset");
            self.source_path = candidate;
            self.table = table;
            return Ok(true);
        }

        warn!(path = %self.source_path.display(), "no dialogue lines found, keeping current table");
        Ok(false)
    }
}

/// Outcome of importing one sheet during [`reimport_all`].
#[derive(Debug)]
pub struct ReimportEntry {
    pub source: PathBuf,
    pub asset: PathBuf,
    pub result: DialogueResult<usize>,
}

/// Imports every matching sheet in `paths` and writes its sibling asset.
///
/// A failing sheet does not stop the others; non-matching paths are ignored.
pub fn reimport_all<I, P>(paths: I, config: &ImportConfig) -> Vec<ReimportEntry>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .filter(|path| is_dialogue_source(path.as_ref(), &config.source_suffix))
        .map(|path| {
            let source = path.as_ref().to_path_buf();
            let asset = asset_path_for(&source);
            let result = reimport_one(&source, &asset, config);
            match &result {
                Ok(records) => info!(source = %source.display(), records, "reimported dialogue asset"),
                Err(err) => warn!(source = %source.display(), error = %err, "dialogue import failed"),
            }
            ReimportEntry {
                source,
                asset,
                result,
            }
        })
        .collect()
}

fn reimport_one(source: &Path, asset_path: &Path, config: &ImportConfig) -> DialogueResult<usize> {
    let imported = DialogueAsset::import_file(source, config)?;
    let records = imported.table.len();
    imported.save_json(asset_path)?;
    Ok(records)
}

fn read_table(path: &Path, config: &ImportConfig) -> DialogueResult<DialogueTable> {
    let text = fs::read_to_string(path).map_err(|err| DialogueError::io(path, err))?;
    let rows = parse_csv(&text)?;
    let mut table = DialogueTable::new();
    table.import_with_config(&rows, config)?;
    Ok(table)
}

#[cfg(test)]
#[path = "tests/asset_tests.rs"]
mod tests;
