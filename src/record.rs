//! Dialogue record model and the fixed Active Format column schema.

use serde::{Deserialize, Serialize};

/// One column of an Active Format sheet, in sheet order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    LineId,
    Story,
    Section,
    Character,
    Line,
    VoiceDirection,
    Triggered,
    Context,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::LineId,
        Column::Story,
        Column::Section,
        Column::Character,
        Column::Line,
        Column::VoiceDirection,
        Column::Triggered,
        Column::Context,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position of the column within a row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Header text the column carries in exported sheets.
    pub fn title(self) -> &'static str {
        match self {
            Column::LineId => "Line ID",
            Column::Story => "Story",
            Column::Section => "Section",
            Column::Character => "Character",
            Column::Line => "Line",
            Column::VoiceDirection => "Voice Direction",
            Column::Triggered => "Triggered",
            Column::Context => "Context",
        }
    }

    /// Columns holding free text that may need more than one display line.
    pub fn is_long_text(self) -> bool {
        matches!(
            self,
            Column::Line | Column::VoiceDirection | Column::Triggered | Column::Context
        )
    }
}

/// One line of dialogue plus its metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueRecord {
    pub id: i32,
    pub story: String,
    pub section: String,
    pub character: String,
    pub line: String,
    pub voice_direction: String,
    pub triggered: String,
    pub context: String,
}

impl DialogueRecord {
    /// Text stored under a column. `LineId` has no text slot and yields `None`.
    pub fn text(&self, column: Column) -> Option<&str> {
        let value = match column {
            Column::LineId => return None,
            Column::Story => &self.story,
            Column::Section => &self.section,
            Column::Character => &self.character,
            Column::Line => &self.line,
            Column::VoiceDirection => &self.voice_direction,
            Column::Triggered => &self.triggered,
            Column::Context => &self.context,
        };
        Some(value.as_str())
    }

    pub(crate) fn text_mut(&mut self, column: Column) -> Option<&mut String> {
        match column {
            Column::LineId => None,
            Column::Story => Some(&mut self.story),
            Column::Section => Some(&mut self.section),
            Column::Character => Some(&mut self.character),
            Column::Line => Some(&mut self.line),
            Column::VoiceDirection => Some(&mut self.voice_direction),
            Column::Triggered => Some(&mut self.triggered),
            Column::Context => Some(&mut self.context),
        }
    }
}

/// A header cell that does not carry the expected column title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderIssue {
    pub column: Column,
    pub found: Option<String>,
}

/// Compares a header row against the column titles.
///
/// Titles are compared after trimming; a missing cell is reported with
/// `found: None`. Extra trailing cells are ignored.
pub fn header_issues<S: AsRef<str>>(header: &[S]) -> Vec<HeaderIssue> {
    Column::ALL
        .iter()
        .filter_map(|&column| {
            let found = header.get(column.index()).map(AsRef::as_ref);
            match found {
                Some(cell) if cell.trim() == column.title() => None,
                _ => Some(HeaderIssue {
                    column,
                    found: found.map(str::to_string),
                }),
            }
        })
        .collect()
}
