//! Import, index and present Active Format dialogue sheets.
//!
//! A sheet is an 8-column CSV (`Line ID, Story, Section, Character, Line,
//! Voice Direction, Triggered, Context`). [`DialogueTable`] turns its rows
//! into indexed [`DialogueRecord`]s and [`DialogueLineRef`] resolves a line
//! by id and estimates how many display lines its text fields need.

mod asset;
mod config;
mod csv;
mod error;
mod line_ref;
mod record;
mod seq;
mod series;
mod table;

pub use asset::{asset_path_for, is_dialogue_source, reimport_all, DialogueAsset, ReimportEntry};
pub use config::{ConfigError, ImportConfig, DEFAULT_SOURCE_SUFFIX, DEFAULT_WRAP_WIDTH};
pub use csv::parse_csv;
pub use error::{DialogueError, DialogueResult};
pub use line_ref::{wrap_width_for_view, wrapped_height, DialogueLineRef, LineLayout};
pub use record::{header_issues, Column, DialogueRecord, HeaderIssue};
pub use seq::SliceExt;
pub use series::DialogueSeries;
pub use table::{DialogueTable, EmptyRowPolicy};
