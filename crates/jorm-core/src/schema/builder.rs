use super::{app, db, mapping, Schema};
use crate::{Error, Result};

use std_util::str::{is_bare_ident, snake_case};

/// Reflects a record's static description into its table-level schema.
#[derive(Debug, Clone)]
pub struct Builder {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            table_name_prefix: None,
        }
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Derives the table name, the ordered columns and the column to field
    /// mapping for `model`.
    ///
    /// Names are snake-cased from the Rust identifiers unless the record
    /// overrides them. Overrides are used verbatim.
    pub fn build(&self, model: &app::Model) -> Result<Schema> {
        if model.fields.is_empty() {
            return Err(Error::invalid_schema(format!(
                "model `{}` has no fields",
                model.name
            )));
        }

        let table_name = match &model.table_name {
            Some(table_name) => table_name.clone(),
            None => snake_case(&model.name),
        };

        let table_name = match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{table_name}"),
            None => table_name,
        };

        if !is_bare_ident(&table_name) {
            return Err(Error::invalid_schema(format!(
                "table name `{table_name}` of model `{}` is not a bare SQL identifier",
                model.name
            )));
        }

        let mut columns = Vec::with_capacity(model.fields.len());
        let mut mapping = mapping::Model::default();

        for (index, field) in model.fields.iter().enumerate() {
            let name = match &field.name.storage_name {
                Some(name) => name.clone(),
                None => snake_case(&field.name.app_name),
            };

            if !is_bare_ident(&name) {
                return Err(Error::invalid_schema(format!(
                    "column name `{name}` of field `{}::{}` is not a bare SQL identifier",
                    model.name, field.name.app_name
                )));
            }

            if !mapping.insert(name.clone(), index) {
                return Err(Error::invalid_schema(format!(
                    "field `{}::{}` maps to column `{name}`, which is already taken",
                    model.name, field.name.app_name
                )));
            }

            columns.push(db::Column {
                name,
                field: index,
                ty: field.ty,
            });
        }

        Ok(Schema {
            table: db::Table {
                name: table_name,
                columns,
            },
            mapping,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
