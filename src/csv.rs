//! Minimal CSV reader for exported dialogue sheets.
//!
//! Comma separated, double-quoted fields may span lines and escape quotes
//! as `""`. A quote in the middle of an unquoted field is kept verbatim.

use crate::error::{DialogueError, DialogueResult};

/// Splits CSV text into rows of cells.
///
/// A trailing line break does not produce an empty final row, but a blank
/// line between rows yields a row with a single empty cell. A leading
/// UTF-8 byte order mark is dropped.
pub fn parse_csv(text: &str) -> DialogueResult<Vec<Vec<String>>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut row_started = false;
    let mut in_quotes = false;
    let mut quote_line = 0usize;
    let mut line = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() => {
                in_quotes = true;
                quote_line = line;
                row_started = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                row_started = true;
            }
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                line += 1;
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
                row_started = false;
            }
            _ => {
                field.push(ch);
                row_started = true;
            }
        }
    }

    if in_quotes {
        return Err(DialogueError::Csv {
            line: quote_line,
            message: "quoted field is never closed".to_string(),
        });
    }
    if row_started {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}
