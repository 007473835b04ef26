use tracing::debug;

use crate::document::{Document, Table, TABLE_SEPARATOR};

/// Parse raw clipboard text into a document. Never fails: malformed
/// input degrades (an unterminated quote runs to end of input, stray
/// quotes just toggle quoting).
///
/// The text is split on the `--,,--` separator first; each segment is
/// trimmed and parsed as an independent table. Segments that parse to
/// zero rows are dropped entirely.
pub fn parse_document(text: &str) -> Document {
    let tables: Vec<Table> = text
        .split(TABLE_SEPARATOR)
        .map(|segment| parse_table(segment.trim()))
        .filter(|t| !t.rows.is_empty())
        .collect();

    debug!(tables = tables.len(), "parsed document");
    Document::new(tables)
}

/// Parse one CSV block: a single left-to-right scan with a quoted-state
/// flag. Supports quoted fields, embedded commas and newlines, and `""`
/// as an escaped quote. `\r` is skipped outside quotes so CRLF input
/// produces the same rows as bare LF.
pub fn parse_table(text: &str) -> Table {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    // escaped quote
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                '\r' => {}
                _ => field.push(c),
            }
        }
    }

    // input with no trailing newline still yields a final row
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    // a lone blank field is what an empty line scans to; it carries no data
    rows.retain(|r| r.len() > 1 || (r.len() == 1 && !r[0].trim().is_empty()));

    Table::new(rows)
}
