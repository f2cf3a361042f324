use crate::stmt::Cell;

/// The result of executing a statement.
///
/// Only the first row is captured. Rows after it are skipped by the driver
/// without reading their cells.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Response {
    /// Column names as reported by the driver, in result order
    pub columns: Vec<String>,

    /// Cells of the first row, one per column
    pub first: Option<Vec<Cell>>,

    /// `true` if the statement produced more than one row
    pub more: bool,
}

impl Response {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            first: None,
            more: false,
        }
    }
}
