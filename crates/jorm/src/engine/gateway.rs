use crate::{Error, Result};

use indexmap::IndexMap;
use jorm_core::{
    driver::{Connection, Response},
    stmt::{Cell, Select},
};
use jorm_sql::Serializer;
use tracing::debug;

/// The first result row, keyed by column name in result order.
pub(super) type RawRow = IndexMap<String, Cell>;

/// Serializes `stmt`, runs it and returns the first row it produced.
pub(super) async fn first_row(connection: &mut dyn Connection, stmt: &Select) -> Result<RawRow> {
    let query = Serializer::new().query_sql(stmt);

    debug!(sql = %query.sql, params = ?query.params, "executing statement");

    let response = connection.exec(query).await?;
    first(response, stmt)
}

fn first(response: Response, stmt: &Select) -> Result<RawRow> {
    let Response {
        columns,
        first: cells,
        more,
    } = response;

    if columns.len() != stmt.width() {
        return Err(Error::row_width(stmt.width(), columns.len()));
    }

    let Some(cells) = cells else {
        return Err(Error::record_not_found(format!("table={}", stmt.table)));
    };

    if more {
        debug!(table = %stmt.table, "ignoring extra rows");
    }

    if cells.len() != columns.len() {
        return Err(Error::row_width(columns.len(), cells.len()));
    }

    Ok(columns.into_iter().zip(cells).collect())
}
