//! References into a [`DialogueTable`] by line id, with derived text-box heights.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_WRAP_WIDTH;
use crate::error::DialogueResult;
use crate::record::{Column, DialogueRecord};
use crate::seq::SliceExt;
use crate::table::DialogueTable;

/// Pixels of editor width per wrapped character.
const VIEW_PIXELS_PER_CHAR: f32 = 12.0;
/// Inspector rows used by a reference with its record data collapsed.
const COLLAPSED_ROWS: u32 = 5;
/// Inspector rows used around the record data when it is expanded.
const EXPANDED_ROWS: u32 = COLLAPSED_ROWS + 4;

/// Display line counts for the long-text fields of one record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineLayout {
    pub line_height: u32,
    pub voice_height: u32,
    pub triggered_height: u32,
    pub context_height: u32,
    pub total_height: u32,
}

impl LineLayout {
    pub fn for_record(record: &DialogueRecord, wrap_width: u32) -> Self {
        let height =
            |column: Column| wrapped_height(record.text(column).unwrap_or_default(), wrap_width);
        let line_height = height(Column::Line);
        let voice_height = height(Column::VoiceDirection);
        let triggered_height = height(Column::Triggered);
        let context_height = height(Column::Context);
        Self {
            line_height,
            voice_height,
            triggered_height,
            context_height,
            total_height: line_height
                .saturating_add(voice_height)
                .saturating_add(triggered_height)
                .saturating_add(context_height),
        }
    }

    /// Single-line rows an inspector panel needs to show the reference.
    pub fn panel_rows(&self, ref_expanded: bool, data_expanded: bool) -> u32 {
        if data_expanded {
            EXPANDED_ROWS.saturating_add(self.total_height)
        } else if ref_expanded {
            COLLAPSED_ROWS
        } else {
            1
        }
    }
}

/// Estimated display lines for `text` when wrapped every `wrap_width` characters.
///
/// Always at least one line; a zero width is treated as one.
pub fn wrapped_height(text: &str, wrap_width: u32) -> u32 {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    1u32.saturating_add(chars / wrap_width.max(1))
}

/// Wrap width matching an editor view `view_width` pixels wide.
pub fn wrap_width_for_view(view_width: f32) -> u32 {
    let width = (view_width.max(0.0) / VIEW_PIXELS_PER_CHAR) as u32;
    width.max(1)
}

/// A line id resolved against a borrowed table.
///
/// The resolved record and layout are recomputed whenever the table, id
/// or wrap width changes, and the borrow keeps the table from being
/// re-imported underneath the cache.
#[derive(Clone, Debug)]
pub struct DialogueLineRef<'t> {
    table: Option<&'t DialogueTable>,
    target_id: i32,
    wrap_width: u32,
    resolved: Option<&'t DialogueRecord>,
    layout: LineLayout,
}

impl Default for DialogueLineRef<'_> {
    fn default() -> Self {
        Self::new(DEFAULT_WRAP_WIDTH)
    }
}

impl<'t> DialogueLineRef<'t> {
    /// Unresolved reference with no table.
    pub fn new(wrap_width: u32) -> Self {
        Self {
            table: None,
            target_id: 0,
            wrap_width,
            resolved: None,
            layout: LineLayout::default(),
        }
    }

    /// Reference already resolved against `table`.
    pub fn resolved(table: &'t DialogueTable, id: i32, wrap_width: u32) -> Self {
        let mut line = Self::new(wrap_width);
        line.resolve(table, id, wrap_width);
        line
    }

    /// Points the reference at `id` in `table` and refreshes the cache.
    ///
    /// An unknown id leaves the reference unresolved with an all-zero layout.
    pub fn resolve(&mut self, table: &'t DialogueTable, id: i32, wrap_width: u32) {
        self.table = Some(table);
        self.target_id = id;
        self.wrap_width = wrap_width;
        self.refresh();
    }

    pub fn set_table(&mut self, table: Option<&'t DialogueTable>) {
        self.table = table;
        self.refresh();
    }

    pub fn set_target_id(&mut self, id: i32) {
        if self.target_id != id {
            self.target_id = id;
            self.refresh();
        }
    }

    pub fn set_wrap_width(&mut self, wrap_width: u32) {
        if self.wrap_width != wrap_width {
            self.wrap_width = wrap_width;
            self.refresh();
        }
    }

    /// Targets the id at `index` in the table's key list.
    pub fn select_index(&mut self, index: usize) -> DialogueResult<i32> {
        let keys = self.table.map(DialogueTable::keys).unwrap_or_default();
        let id = *keys.get_checked(index)?;
        self.set_target_id(id);
        Ok(id)
    }

    /// Position of the target id in the table's key list.
    pub fn selected_index(&self) -> Option<usize> {
        self.table
            .and_then(|table| table.keys().index_of(&self.target_id))
    }

    /// Spoken line of the resolved record, or `""`.
    pub fn display_text(&self) -> &'t str {
        self.resolved.map_or("", |record| record.line.as_str())
    }

    pub fn resolved_record(&self) -> Option<&'t DialogueRecord> {
        self.resolved
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    pub fn layout(&self) -> LineLayout {
        self.layout
    }

    pub fn table(&self) -> Option<&'t DialogueTable> {
        self.table
    }

    pub fn target_id(&self) -> i32 {
        self.target_id
    }

    pub fn wrap_width(&self) -> u32 {
        self.wrap_width
    }

    fn refresh(&mut self) {
        self.resolved = self.table.and_then(|table| table.lookup(self.target_id));
        self.layout = self
            .resolved
            .map(|record| LineLayout::for_record(record, self.wrap_width))
            .unwrap_or_default();
    }
}

#[cfg(test)]
#[path = "tests/line_ref_tests.rs"]
mod tests;
