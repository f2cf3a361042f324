mod decode;
mod gateway;
mod predicate;

use crate::{Model, Result};

use jorm_core::{driver::Connection, schema};

/// Loads the first row matching the non-zero fields of `record` into it.
///
/// Stages run in order: reflect the record's schema, extract predicates,
/// build and submit the statement, decode the first row into the record.
/// A failure at any stage returns immediately. Failures before submission
/// leave `record` untouched; decode failures leave the fields written so far.
pub(crate) async fn load_one<M: Model>(
    connection: &mut dyn Connection,
    builder: &schema::Builder,
    record: &mut M,
) -> Result<()> {
    let schema = builder.build(M::schema())?;
    let stmt = predicate::select(M::schema(), &schema, &*record)?;
    let row = gateway::first_row(connection, &stmt).await?;

    decode::apply(&schema, row, record)
}
