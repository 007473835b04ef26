/// Literal line that separates tables in raw clipboard text
pub const TABLE_SEPARATOR: &str = "--,,--";

/// One parsed CSV block. Rows may be ragged; the first row is treated
/// as a header by the renderer only, the data model does not care.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row in the table (rows are not padded to a common width)
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<&String> {
        self.rows.get(row)?.get(col)
    }

    /// Write a cell in place. Out-of-range coordinates leave the table
    /// untouched and return false.
    pub fn set_cell(&mut self, row: usize, col: usize, value: String) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }
}

/// Everything parsed out of one paste: an ordered sequence of tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub tables: Vec<Table>,
}

impl Document {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn cell_count(&self) -> usize {
        self.tables
            .iter()
            .flat_map(|t| t.rows.iter())
            .map(|r| r.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<&str>>) -> Table {
        Table::new(
            rows.into_iter()
                .map(|r| r.into_iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_col_count_ragged() {
        let t = table(vec![vec!["a", "b"], vec!["c", "d", "e"], vec!["f"]]);
        assert_eq!(t.col_count(), 3);
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn test_col_count_empty() {
        assert_eq!(Table::default().col_count(), 0);
    }

    #[test]
    fn test_set_cell_in_range() {
        let mut t = table(vec![vec!["a", "b"], vec!["c", "d"]]);
        assert!(t.set_cell(1, 0, "x".to_string()));
        assert_eq!(t.get_cell(1, 0), Some(&"x".to_string()));
        assert_eq!(t.get_cell(0, 0), Some(&"a".to_string()));
    }

    #[test]
    fn test_set_cell_out_of_range() {
        let mut t = table(vec![vec!["a"]]);
        let before = t.clone();
        assert!(!t.set_cell(0, 5, "x".to_string()));
        assert!(!t.set_cell(3, 0, "x".to_string()));
        assert_eq!(t, before);
    }

    #[test]
    fn test_document_cell_count() {
        let d = Document::new(vec![
            table(vec![vec!["a", "b"], vec!["c"]]),
            table(vec![vec!["x"]]),
        ]);
        assert_eq!(d.cell_count(), 4);
        assert_eq!(d.table_count(), 2);
    }
}
