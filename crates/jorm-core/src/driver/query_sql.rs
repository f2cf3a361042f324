use crate::stmt::Value;

/// A SQL statement with its positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySql {
    /// The statement text, with one `?` per argument
    pub sql: String,

    /// Arguments bound to the placeholders, in order
    pub params: Vec<Value>,
}
