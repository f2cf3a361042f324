pub mod app;

mod builder;
pub use builder::Builder;

pub mod db;

pub mod mapping;

/// The runtime view of one record type: its table and how result columns
/// map back onto fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Table-level schema
    pub table: db::Table,

    /// Maps column names to field indices
    pub mapping: mapping::Model,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }
}
