use crate::{Error, Model, Result};

use jorm_core::{
    schema::{app, Schema},
    stmt::Select,
};

/// Builds the `SELECT` for `record`: every column projected, one equality
/// predicate per non-zero field, both in declaration order.
pub(super) fn select<M: Model>(model: &app::Model, schema: &Schema, record: &M) -> Result<Select> {
    let mut stmt = Select::new(&schema.table.name, schema.table.column_names());

    for column in &schema.table.columns {
        let value = record.field_value(column.field)?;

        if value.infer_ty() != column.ty {
            return Err(Error::invalid_schema(format!(
                "field `{}::{}` is declared as {} but holds a {} value",
                model.name,
                model.field(column.field).name.app_name,
                column.ty,
                value.infer_ty()
            )));
        }

        if !value.is_zero() {
            stmt.and_eq(&column.name, value);
        }
    }

    if stmt.filter.is_empty() {
        return Err(Error::empty_predicate(&model.name));
    }

    Ok(stmt)
}
