use super::Field;

/// Static description of a record type, as declared in Rust.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Name of the Rust type
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,

    /// If the record specifies a table to map to, this is set.
    pub table_name: Option<String>,
}

impl Model {
    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }
}
