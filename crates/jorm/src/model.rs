use crate::{Error, Result};

use jorm_core::{schema::app, stmt};

/// A record type that can be loaded from a table row.
///
/// Usually implemented with `#[derive(Model)]`. A manual implementation must
/// describe its fields in declaration order and accept the same indices in
/// [`Model::field_value`] and [`Model::set_field`].
pub trait Model {
    /// Static description of the record type.
    fn schema() -> &'static app::Model;

    /// Reads field `index` as a value of its declared type.
    fn field_value(&self, index: usize) -> Result<stmt::Value>;

    /// Writes `value` into field `index`.
    fn set_field(&mut self, index: usize, value: stmt::Value) -> Result<()>;
}

/// Error for a field index that `M` does not declare.
pub fn field_out_of_range<M: Model>(index: usize) -> Error {
    Error::invalid_schema(format!(
        "model `{}` has no field at index {index}",
        M::schema().name
    ))
}
