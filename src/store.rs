use tracing::debug;

use crate::document::Document;

/// Coordinates of the cell currently being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCursor {
    pub table: usize,
    pub row: usize,
    pub col: usize,
}

/// Owns the current document and the in-progress edit, if any.
/// All mutation goes through the edit operations; the presentation
/// layer only ever reads the document.
#[derive(Debug, Default)]
pub struct EditStore {
    document: Document,
    cursor: Option<EditCursor>,
    value: String,
    dirty: bool,
}

impl EditStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Option<EditCursor> {
        self.cursor
    }

    /// True once a commit has landed since the last replace/export
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Begin editing a cell. Out-of-range coordinates are a no-op and
    /// return false; on success the working value is seeded from the
    /// current cell content.
    pub fn start_edit(&mut self, table: usize, row: usize, col: usize) -> bool {
        let Some(current) = self
            .document
            .tables
            .get(table)
            .and_then(|t| t.get_cell(row, col))
        else {
            return false;
        };

        self.value = current.clone();
        self.cursor = Some(EditCursor { table, row, col });
        true
    }

    /// Working edit value; empty when no edit is active
    pub fn edit_value(&self) -> &str {
        &self.value
    }

    /// Replace the working edit value. Ignored when no edit is active.
    pub fn set_edit_value(&mut self, value: String) {
        if self.cursor.is_some() {
            self.value = value;
        }
    }

    /// Write the working value into the document at the cursor and
    /// clear the cursor. No other cell is touched. No-op when no edit
    /// is active or the cursor no longer fits the document.
    pub fn commit_edit(&mut self) -> bool {
        let Some(cursor) = self.cursor.take() else {
            return false;
        };
        let value = std::mem::take(&mut self.value);

        let committed = self
            .document
            .tables
            .get_mut(cursor.table)
            .map(|t| t.set_cell(cursor.row, cursor.col, value))
            .unwrap_or(false);

        if committed {
            self.dirty = true;
            debug!(
                table = cursor.table,
                row = cursor.row,
                col = cursor.col,
                "committed cell edit"
            );
        }
        committed
    }

    /// Abandon the in-progress edit without touching the document
    pub fn cancel_edit(&mut self) {
        self.cursor = None;
        self.value.clear();
    }

    /// Wholesale document replacement (a new paste). Any active edit
    /// dies with the old document.
    pub fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.cursor = None;
        self.value.clear();
        self.dirty = false;
    }

    /// Called after a successful export so the dirty flag reflects
    /// unexported edits only
    pub fn mark_exported(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_document;

    fn store() -> EditStore {
        let mut s = EditStore::new();
        s.replace_document(parse_document("a,b\n1,2\n--,,--\nx,y\n3,4\n"));
        s
    }

    #[test]
    fn test_start_edit_seeds_value() {
        let mut s = store();
        assert!(s.start_edit(1, 0, 1));
        assert_eq!(s.edit_value(), "y");
        assert_eq!(s.cursor(), Some(EditCursor { table: 1, row: 0, col: 1 }));
    }

    #[test]
    fn test_start_edit_out_of_range() {
        let mut s = store();
        assert!(!s.start_edit(2, 0, 0));
        assert!(!s.start_edit(0, 5, 0));
        assert!(!s.start_edit(0, 0, 9));
        assert!(s.cursor().is_none());
    }

    #[test]
    fn test_commit_changes_only_target_cell() {
        let mut s = store();
        let before = s.document().clone();

        assert!(s.start_edit(0, 1, 1));
        s.set_edit_value("edited".to_string());
        assert!(s.commit_edit());

        let after = s.document();
        assert_eq!(after.tables[0].rows[1][1], "edited");

        // every other cell is untouched
        for (ti, table) in after.tables.iter().enumerate() {
            for (ri, row) in table.rows.iter().enumerate() {
                for (ci, cell) in row.iter().enumerate() {
                    if (ti, ri, ci) != (0, 1, 1) {
                        assert_eq!(cell, &before.tables[ti].rows[ri][ci]);
                    }
                }
            }
        }
        assert!(s.cursor().is_none());
        assert!(s.is_dirty());
    }

    #[test]
    fn test_commit_without_edit_is_noop() {
        let mut s = store();
        let before = s.document().clone();
        assert!(!s.commit_edit());
        assert_eq!(s.document(), &before);
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_cancel_leaves_document_unchanged() {
        let mut s = store();
        let before = s.document().clone();

        assert!(s.start_edit(0, 0, 0));
        s.set_edit_value("scratch".to_string());
        s.cancel_edit();

        assert_eq!(s.document(), &before);
        assert!(s.cursor().is_none());
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_replace_document_clears_edit() {
        let mut s = store();
        assert!(s.start_edit(0, 0, 0));
        s.set_edit_value("lost".to_string());

        s.replace_document(parse_document("q\n"));

        assert!(s.cursor().is_none());
        assert_eq!(s.edit_value(), "");
        // the edit cannot land on the new document
        assert!(!s.commit_edit());
        assert_eq!(s.document().tables[0].rows[0][0], "q");
    }

    #[test]
    fn test_set_edit_value_ignored_when_inactive() {
        let mut s = store();
        s.set_edit_value("stray".to_string());
        assert_eq!(s.edit_value(), "");
    }

    #[test]
    fn test_export_clears_dirty() {
        let mut s = store();
        s.start_edit(0, 0, 0);
        s.commit_edit();
        assert!(s.is_dirty());
        s.mark_exported();
        assert!(!s.is_dirty());
    }
}
