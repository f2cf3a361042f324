use jorm_core::{
    stmt::{self, Cell},
    Error, Result,
};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

/// A statement argument in the form rusqlite binds.
#[derive(Debug)]
pub struct Value<'a>(&'a stmt::Value);

impl<'a> From<&'a stmt::Value> for Value<'a> {
    fn from(value: &'a stmt::Value) -> Self {
        Self(value)
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            stmt::Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            stmt::Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            stmt::Value::F32(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(stmt::widen_f32(*v)))),
        }
    }
}

/// Captures the cell at `index` of `row`.
///
/// Integers stay integers, text and blobs become bytes and reals travel as
/// their decimal rendering. `NULL` has no cell representation.
pub(crate) fn cell(row: &Row<'_>, index: usize, column: &str) -> Result<Cell> {
    let value = row.get_ref(index).map_err(Error::driver)?;

    match value {
        ValueRef::Integer(v) => Ok(Cell::I64(v)),
        ValueRef::Real(v) => Ok(Cell::Bytes(v.to_string().into_bytes())),
        ValueRef::Text(v) | ValueRef::Blob(v) => Ok(Cell::Bytes(v.to_vec())),
        ValueRef::Null => Err(Error::decode(column, "NULL values are not supported")),
    }
}
