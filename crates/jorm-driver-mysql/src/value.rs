use jorm_core::{
    stmt::{self, Cell},
    Error, Result,
};
use mysql_async::prelude::ToValue;

/// A statement argument in the form `mysql_async` binds.
#[derive(Debug)]
pub struct Value<'a>(&'a stmt::Value);

impl<'a> From<&'a stmt::Value> for Value<'a> {
    fn from(value: &'a stmt::Value) -> Self {
        Self(value)
    }
}

impl ToValue for Value<'_> {
    fn to_value(&self) -> mysql_async::Value {
        match self.0 {
            stmt::Value::I64(value) => value.to_value(),
            stmt::Value::String(value) => value.to_value(),
            // Sent as FLOAT so the server compares it at single precision
            // against FLOAT columns.
            stmt::Value::F32(value) => mysql_async::Value::Float(*value),
        }
    }
}

/// Captures one result value as a cell.
///
/// `None` is a value that was already taken out of the row.
pub(crate) fn cell(value: Option<mysql_async::Value>, column: &str) -> Result<Cell> {
    use mysql_async::Value;

    match value {
        Some(Value::Int(v)) => Ok(Cell::I64(v)),
        Some(Value::UInt(v)) => i64::try_from(v).map(Cell::I64).map_err(|_| {
            Error::decode(column, format!("{v} does not fit in a signed 64-bit integer"))
        }),
        Some(Value::Bytes(v)) => Ok(Cell::Bytes(v)),
        Some(Value::Float(v)) => Ok(Cell::Bytes(v.to_string().into_bytes())),
        Some(Value::Double(v)) => Ok(Cell::Bytes(v.to_string().into_bytes())),
        Some(Value::NULL) => Err(Error::decode(column, "NULL values are not supported")),
        Some(Value::Date(..)) | Some(Value::Time(..)) => Err(Error::decode(
            column,
            "date and time values are not supported",
        )),
        None => Err(Error::decode(column, "value missing from row")),
    }
}
