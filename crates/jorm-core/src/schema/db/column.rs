use crate::stmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// Index of the record field stored in this column.
    pub field: usize,

    /// The column type, from jorm's point of view.
    pub ty: stmt::Type,
}
