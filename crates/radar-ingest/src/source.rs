//! Tabular data source
//!
//! A source resolves a sheet into its tab names and, per tab, the column
//! names plus the ordered rows. Rows only live for the duration of one
//! ingestion run.

use crate::error::FetchError;
use crate::locator::SheetId;
use async_trait::async_trait;
use indexmap::IndexMap;

/// One spreadsheet row: column name to raw cell text, in column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: IndexMap<String, String>,
}

impl RawRow {
    /// Create empty row
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, replacing any previous value for the column
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Exact-match lookup
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Lookup that ignores header case and surrounding whitespace
    ///
    /// Exact matches win over case-insensitive ones.
    #[must_use]
    pub fn field(&self, column: &str) -> Option<&str> {
        self.get(column).or_else(|| {
            self.cells
                .iter()
                .find(|(key, _)| key.trim().eq_ignore_ascii_case(column))
                .map(|(_, value)| value.as_str())
        })
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether every cell is blank
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.trim().is_empty())
    }

    /// Iterate cells in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Contents of one tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    /// Header cells, in column order
    pub column_names: Vec<String>,
    /// Data rows, in sheet order
    pub rows: Vec<RawRow>,
}

impl SheetTable {
    /// Create table from headers and rows
    #[inline]
    #[must_use]
    pub fn new(column_names: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { column_names, rows }
    }

    /// Build table from a cell grid whose first row is the header
    ///
    /// Short rows are padded with empty cells, cells beyond the header are
    /// dropped, and rows with only blank cells are skipped.
    #[must_use]
    pub fn from_grid(grid: Vec<Vec<String>>) -> Self {
        let mut grid = grid.into_iter();
        let Some(header) = grid.next() else {
            return Self::default();
        };

        let rows = grid
            .map(|cells| {
                let mut cells = cells.into_iter();
                header
                    .iter()
                    .map(|column| (column.clone(), cells.next().unwrap_or_default()))
                    .collect::<RawRow>()
            })
            .filter(|row| !row.is_blank())
            .collect();

        Self {
            column_names: header,
            rows,
        }
    }
}

/// Spreadsheet-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkbookInfo {
    /// Display name of the spreadsheet
    pub title: String,
    /// Tab names, in sheet order
    pub sheet_names: Vec<String>,
}

impl WorkbookInfo {
    /// Create workbook metadata
    #[must_use]
    pub fn new<S: Into<String>>(title: impl Into<String>, sheet_names: impl IntoIterator<Item = S>) -> Self {
        Self {
            title: title.into(),
            sheet_names: sheet_names.into_iter().map(Into::into).collect(),
        }
    }

    /// First tab, used when no tab is requested
    #[inline]
    #[must_use]
    pub fn first_sheet(&self) -> Option<&str> {
        self.sheet_names.first().map(String::as_str)
    }

    /// Whether the workbook has a tab with this exact name
    #[must_use]
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheet_names.iter().any(|s| s == name)
    }
}

/// External reader of spreadsheet data
#[async_trait]
pub trait TabularSource: Send + Sync {
    /// Read spreadsheet title and tab names
    ///
    /// # Errors
    /// `FetchError` when the spreadsheet cannot be read.
    async fn describe(&self, sheet_id: &SheetId) -> Result<WorkbookInfo, FetchError>;

    /// Read one tab as column names plus rows
    ///
    /// # Errors
    /// `FetchError` when the tab cannot be read.
    async fn fetch(&self, sheet_id: &SheetId, sheet_name: &str) -> Result<SheetTable, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| (*c).to_string()).collect())
            .collect()
    }

    #[test]
    fn field_is_case_insensitive() {
        let row: RawRow = [(" IsNew ", "TRUE"), ("name", "Rust")].into_iter().collect();
        assert_eq!(row.field("isNew"), Some("TRUE"));
        assert_eq!(row.field("name"), Some("Rust"));
        assert_eq!(row.field("topic"), None);
        assert_eq!(row.get("isNew"), None);
    }

    #[test]
    fn from_grid_pads_and_skips_blank_rows() {
        let table = SheetTable::from_grid(grid(&[
            &["name", "ring", "quadrant"],
            &["Rust", "Adopt"],
            &["", " ", ""],
            &["Go", "Trial", "languages", "extra"],
        ]));

        assert_eq!(table.column_names, vec!["name", "ring", "quadrant"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get("quadrant"), Some(""));
        assert_eq!(table.rows[1].len(), 3);
        assert_eq!(table.rows[1].get("quadrant"), Some("languages"));
    }

    #[test]
    fn from_grid_header_only() {
        let table = SheetTable::from_grid(grid(&[&["name", "ring"]]));
        assert_eq!(table.column_names.len(), 2);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn from_empty_grid() {
        assert_eq!(SheetTable::from_grid(Vec::new()), SheetTable::default());
    }

    #[test]
    fn workbook_first_sheet() {
        let info = WorkbookInfo::new("Tech Radar", ["2024", "2023"]);
        assert_eq!(info.first_sheet(), Some("2024"));
        assert!(info.has_sheet("2023"));
        assert!(!info.has_sheet("2022"));
        assert_eq!(WorkbookInfo::default().first_sheet(), None);
    }
}
