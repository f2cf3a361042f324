use crate::stmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name
    pub name: FieldName,

    /// The field's semantic type
    pub ty: stmt::Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    /// The name of the field in Rust
    pub app_name: String,

    /// Optional column name override
    pub storage_name: Option<String>,
}

impl Field {
    pub fn new(app_name: impl Into<String>, ty: stmt::Type) -> Self {
        Self {
            name: FieldName {
                app_name: app_name.into(),
                storage_name: None,
            },
            ty,
        }
    }
}
