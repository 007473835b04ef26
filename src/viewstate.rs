use crate::document::Document;

/// Where the selection sits within the current document. This is the
/// presentation-layer cursor; the store's edit cursor only exists while
/// an edit is in progress.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub table: usize,
    pub row: usize,
    pub col: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first cell of the first table (after a new paste)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pull the selection back inside the document. Rows may be ragged,
    /// so the column clamps to the selected row's own width.
    pub fn clamp(&mut self, document: &Document) {
        if document.is_empty() {
            self.reset();
            return;
        }
        self.table = self.table.min(document.table_count() - 1);

        let table = &document.tables[self.table];
        if table.rows.is_empty() {
            // parser never emits an empty table, but don't index into one
            self.row = 0;
            self.col = 0;
            return;
        }
        self.row = self.row.min(table.row_count() - 1);
        let row_width = table.rows[self.row].len();
        self.col = self.col.min(row_width.saturating_sub(1));
    }

    pub fn next_table(&mut self, document: &Document) {
        if document.table_count() > 1 {
            self.table = (self.table + 1) % document.table_count();
            self.row = 0;
            self.col = 0;
        }
    }

    pub fn prev_table(&mut self, document: &Document) {
        if document.table_count() > 1 {
            self.table = (self.table + document.table_count() - 1) % document.table_count();
            self.row = 0;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self, document: &Document) {
        self.row = self.row.saturating_sub(1);
        self.clamp(document);
    }

    pub fn move_down(&mut self, document: &Document) {
        self.row += 1;
        self.clamp(document);
    }

    pub fn move_left(&mut self, document: &Document) {
        self.col = self.col.saturating_sub(1);
        self.clamp(document);
    }

    pub fn move_right(&mut self, document: &Document) {
        self.col += 1;
        self.clamp(document);
    }

    pub fn move_to_top(&mut self, document: &Document) {
        self.row = 0;
        self.clamp(document);
    }

    pub fn move_to_bottom(&mut self, document: &Document) {
        self.row = usize::MAX - 1;
        self.clamp(document);
    }
}
