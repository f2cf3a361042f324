use super::gateway::RawRow;
use crate::{Error, Model, Result};

use jorm_core::{
    schema::Schema,
    stmt::{Cell, Type, Value},
};
use tracing::trace;

/// Writes every cell of `row` into the field its column maps to.
///
/// Columns are applied in result order and the first failure is returned
/// as is; fields written before it keep their new value. Fields whose
/// column is missing from the row are not touched.
pub(super) fn apply<M: Model>(schema: &Schema, row: RawRow, record: &mut M) -> Result<()> {
    for (column, cell) in row {
        let Some(field) = schema.mapping.field_for(&column) else {
            return Err(Error::decode(column, "column does not map to any field"));
        };

        let value = decode(&column, cell, schema.table.columns[field].ty)?;
        trace!(column = %column, value = ?value, "decoded column");

        record.set_field(field, value)?;
    }

    Ok(())
}

/// Converts one cell into a value of the field type `ty`.
pub(super) fn decode(column: &str, cell: Cell, ty: Type) -> Result<Value> {
    match (ty, cell) {
        (Type::I64, Cell::I64(v)) => Ok(Value::I64(v)),
        (Type::I64, Cell::Bytes(bytes)) => {
            let text = utf8(column, &bytes)?;
            text.parse::<i64>().map(Value::I64).map_err(|err| {
                Error::decode(column, format!("invalid integer literal `{text}`: {err}"))
            })
        }
        (Type::String, Cell::I64(v)) => Ok(Value::String(v.to_string())),
        (Type::String, Cell::Bytes(bytes)) => String::from_utf8(bytes)
            .map(Value::String)
            .map_err(|err| Error::decode(column, format!("invalid UTF-8: {err}"))),
        (Type::F32, Cell::I64(v)) => Ok(Value::F32(v as f32)),
        (Type::F32, Cell::Bytes(bytes)) => {
            let text = utf8(column, &bytes)?;
            let wide = text.parse::<f64>().map_err(|err| {
                Error::decode(column, format!("invalid float literal `{text}`: {err}"))
            })?;
            narrow(column, wide).map(Value::F32)
        }
    }
}

fn utf8<'a>(column: &str, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes)
        .map_err(|err| Error::decode(column, format!("invalid UTF-8: {err}")))
}

/// `f64` to `f32`, rejecting finite values that do not fit.
fn narrow(column: &str, wide: f64) -> Result<f32> {
    let narrow = wide as f32;

    if wide.is_finite() && narrow.is_infinite() {
        return Err(Error::decode(
            column,
            format!("{wide} is out of range for f32"),
        ));
    }

    Ok(narrow)
}
