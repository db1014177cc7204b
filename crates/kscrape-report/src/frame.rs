//! A loaded CSV as plain string cells, plus the column renaming step.

use std::io::Read;
use std::path::Path;

use crate::error::ReportError;

/// Source column name → display name used by the report.
pub const DISPLAY_NAMES: [(&str, &str); 12] = [
    ("title", "제목"),
    ("subtitle", "부제"),
    ("author", "저자"),
    ("publisher", "출판사"),
    ("pub_date", "출판일"),
    ("discount_rate", "할인율"),
    ("sale_price", "판매가"),
    ("original_price", "정가"),
    ("sales_index", "판매지수"),
    ("review_count", "리뷰수"),
    ("rating", "평점"),
    ("tags", "태그"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Frame {
    /// Reads a headed CSV. A leading byte-order mark is ignored.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`csv::Error`] for unreadable input or rows
    /// whose length differs from the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut reader = csv::Reader::from_reader(reader);
        let columns = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let name = if idx == 0 {
                    name.trim_start_matches('\u{feff}')
                } else {
                    name
                };
                name.trim().to_owned()
            })
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_owned).collect());
        }
        Ok(Self { columns, rows })
    }

    /// # Errors
    ///
    /// Returns [`ReportError::Load`] if the file is missing or malformed.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let load_err = |source| ReportError::Load {
            path: path.display().to_string(),
            source,
        };
        let file = std::fs::File::open(path).map_err(|e| load_err(csv::Error::from(e)))?;
        Self::from_reader(file).map_err(load_err)
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renames source columns to their display names. Columns that are
    /// already renamed, or unknown, are left alone.
    pub fn rename_columns(&mut self, mapping: &[(&str, &str)]) {
        for column in &mut self.columns {
            if let Some((_, display)) = mapping.iter().find(|(source, _)| source == column) {
                (*display).clone_into(column);
            }
        }
    }

    /// Cells of column `name` in row order, or `None` if the column is absent.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map_or("", String::as_str))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\u{feff}title,publisher,sale_price\n파이썬,길벗,\"12,000\"\n러스트,인사이트,30000\n";

    #[test]
    fn bom_is_stripped_from_first_header() {
        let frame = Frame::from_reader(SOURCE.as_bytes()).unwrap();
        assert_eq!(frame.columns(), ["title", "publisher", "sale_price"]);
        assert_eq!(frame.len(), 2);
    }

    #[test]
    fn rename_is_idempotent() {
        let mut frame = Frame::from_reader(SOURCE.as_bytes()).unwrap();
        frame.rename_columns(&DISPLAY_NAMES);
        let once = frame.clone();
        frame.rename_columns(&DISPLAY_NAMES);
        assert_eq!(frame, once);
        assert_eq!(frame.columns(), ["제목", "출판사", "판매가"]);
    }

    #[test]
    fn unknown_columns_keep_their_names() {
        let mut frame = Frame::from_reader("isbn,title\n1,a\n".as_bytes()).unwrap();
        frame.rename_columns(&DISPLAY_NAMES);
        assert_eq!(frame.columns(), ["isbn", "제목"]);
    }

    #[test]
    fn column_lookup_returns_cells_in_order() {
        let frame = Frame::from_reader(SOURCE.as_bytes()).unwrap();
        assert_eq!(frame.column("sale_price").unwrap(), vec!["12,000", "30000"]);
        assert!(frame.column("rating").is_none());
    }

    #[test]
    fn ragged_rows_are_a_load_error() {
        let result = Frame::from_reader("a,b\n1\n".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = Frame::load(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ReportError::Load { .. }));
    }
}
