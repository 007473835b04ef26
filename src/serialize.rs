use crate::document::{Document, Table, TABLE_SEPARATOR};

/// Serialize a document back to CSV text, the inverse of parsing.
/// Tables are rejoined with the `--,,--` separator line.
pub fn serialize_document(document: &Document) -> String {
    document
        .tables
        .iter()
        .map(serialize_table)
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", TABLE_SEPARATOR))
}

fn serialize_table(table: &Table) -> String {
    table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|f| serialize_field(f))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape one field. Quote-containing fields get wrapped and their
/// quotes doubled; fields with a comma or newline only get wrapped.
fn serialize_field(field: &str) -> String {
    if field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else if field.contains(',') || field.contains('\n') {
        format!("\"{}\"", field)
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_document;

    fn doc(tables: Vec<Vec<Vec<&str>>>) -> Document {
        Document::new(
            tables
                .into_iter()
                .map(|t| {
                    Table::new(
                        t.into_iter()
                            .map(|r| r.into_iter().map(|s| s.to_string()).collect())
                            .collect(),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_plain_field_verbatim() {
        assert_eq!(serialize_field("abc"), "abc");
        assert_eq!(serialize_field(""), "");
    }

    #[test]
    fn test_comma_field_wrapped() {
        assert_eq!(serialize_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_newline_field_wrapped() {
        assert_eq!(serialize_field("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_quote_field_escaped() {
        assert_eq!(serialize_field("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_quote_beats_comma_rule() {
        // a field with both goes through the quote branch: doubled quotes, wrapped once
        assert_eq!(serialize_field("a\",b"), "\"a\"\",b\"");
    }

    #[test]
    fn test_rows_and_tables_joined() {
        let d = doc(vec![
            vec![vec!["a", "b"], vec!["1", "2"]],
            vec![vec!["x", "y"]],
        ]);
        assert_eq!(serialize_document(&d), "a,b\n1,2\n--,,--\nx,y");
    }

    #[test]
    fn test_round_trip() {
        let d = doc(vec![
            vec![vec!["a", "b,c", "line1\nline2"], vec!["", "q\"uote", "z"]],
            vec![vec!["x"], vec!["y", "w"]],
        ]);
        assert_eq!(parse_document(&serialize_document(&d)), d);
    }

    #[test]
    fn test_escaped_quote_round_trip() {
        // a field that already reads as `a""b` after one escape survives another pass
        let d = doc(vec![vec![vec!["a\"\"b", "c"]]]);
        assert_eq!(parse_document(&serialize_document(&d)), d);
    }

    #[test]
    fn test_ragged_round_trip() {
        let d = doc(vec![vec![vec!["a", "b", "c"], vec!["1", "2"]]]);
        assert_eq!(parse_document(&serialize_document(&d)), d);
    }
}
