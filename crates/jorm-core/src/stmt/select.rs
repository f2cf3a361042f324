use super::Value;

/// A single-table `SELECT` with equality predicates.
///
/// `returning` is the projection in record declaration order; `filter` is
/// the conjunction of `column = value` clauses, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Name of the table to select from
    pub table: String,

    /// Columns to return
    pub returning: Vec<String>,

    /// Equality predicates, AND-ed together
    pub filter: Vec<Predicate>,
}

/// An equality clause `column = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub value: Value,
}

impl Select {
    pub fn new(table: impl Into<String>, returning: Vec<String>) -> Self {
        Self {
            table: table.into(),
            returning,
            filter: vec![],
        }
    }

    /// Adds an equality predicate.
    pub fn and_eq(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.filter.push(Predicate {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// Number of columns a result row is expected to have.
    pub fn width(&self) -> usize {
        self.returning.len()
    }
}
