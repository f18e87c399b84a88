// src/store.rs
//
// Immutable fixed-schema table. Built once by the parser, read-only
// thereafter: filtering and export both take `&Table` and can run
// concurrently without coordination.

use crate::error::StoreError;

/// The one schema this tool knows about, in display/export order.
pub const COLUMNS: [&str; 4] = ["Location", "Population", "% of World", "Date"];

/// One cell as produced upstream: either a single value or a run of values
/// that expands into consecutive cells. The explicit variant replaces any
/// runtime shape-checking at the flattening site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellValue {
    Scalar(String),
    Sequence(Vec<String>),
}

impl CellValue {
    /// Append this value's cells to `out`: a Scalar contributes one cell,
    /// a Sequence one cell per element, in order.
    pub fn flatten_into(self, out: &mut Vec<String>) {
        match self {
            CellValue::Scalar(v) => out.push(v),
            CellValue::Sequence(vs) => out.extend(vs),
        }
    }
}

/// Ordered rows under the fixed schema. No mutation after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build from plain rows. Every row is normalized to schema width:
    /// missing cells become empty strings, surplus cells are dropped.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        let columns: Vec<String> = COLUMNS.iter().map(|c| s!(*c)).collect();
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut r| { r.resize(width, s!()); r })
            .collect();
        Self { columns, rows }
    }

    /// Build from rows of `CellValue`, flattening sequences first.
    pub fn from_cell_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|r| {
                let mut flat = Vec::with_capacity(r.len());
                for v in r { v.flatten_into(&mut flat); }
                flat
            })
            .collect();
        Self::new(rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the schema, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Borrow a single row by index (no cloning).
    pub fn row(&self, i: usize) -> Option<&[String]> {
        self.rows.get(i).map(|r| r.as_slice())
    }

    /// Checked cell access by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Result<&str, StoreError> {
        let r = self.rows.get(row).ok_or(StoreError::IndexOutOfRange {
            index: row,
            rows: self.rows.len(),
        })?;
        let c = self
            .column_index(column)
            .ok_or_else(|| StoreError::UnknownColumn(s!(column)))?;
        // Rows are schema-width by construction
        Ok(&r[c])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(vec![
            vec![s!("China"), s!("1425887337"), s!("17.5%"), s!("2023")],
            vec![s!("Monaco"), s!("39000")],
        ])
    }

    #[test]
    fn schema_is_fixed_and_ordered() {
        let t = sample();
        assert_eq!(t.columns(), &["Location", "Population", "% of World", "Date"]);
    }

    #[test]
    fn short_rows_pad_to_schema_width() {
        let t = sample();
        assert_eq!(t.cell(1, "% of World").unwrap(), "");
        assert_eq!(t.cell(1, "Date").unwrap(), "");
    }

    #[test]
    fn cell_errors_name_the_misuse() {
        let t = sample();
        assert_eq!(
            t.cell(5, "Location").unwrap_err(),
            StoreError::IndexOutOfRange { index: 5, rows: 2 }
        );
        assert_eq!(
            t.cell(0, "Rank").unwrap_err(),
            StoreError::UnknownColumn(s!("Rank"))
        );
    }

    #[test]
    fn sequence_cells_flatten_in_order() {
        let t = Table::from_cell_rows(vec![vec![
            CellValue::Scalar(s!("India")),
            CellValue::Sequence(vec![s!("1417173173"), s!("17.8%")]),
            CellValue::Scalar(s!("2023")),
        ]]);
        assert_eq!(
            t.row(0).unwrap(),
            &[s!("India"), s!("1417173173"), s!("17.8%"), s!("2023")]
        );
    }
}
