mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

use crate::{engine, Model, Result};

use jorm_core::{driver::Connection, schema, Schema};

/// A database handle owning one open connection.
pub struct Db {
    connection: Box<dyn Connection>,

    /// Reflects record types into table schemas
    schema: schema::Builder,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Loads the first row matching `record` into `record`.
    ///
    /// Every non-zero field of `record` becomes an equality predicate; a
    /// record whose fields are all zero is rejected before anything is sent
    /// to the database. On success every column of the row has been written
    /// back into `record`.
    pub async fn load_one<M: Model>(&mut self, record: &mut M) -> Result<()> {
        engine::load_one(&mut *self.connection, &self.schema, record).await
    }

    /// Returns the table schema `M` maps to on this handle.
    pub fn schema_of<M: Model>(&self) -> Result<Schema> {
        self.schema.build(M::schema())
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("connection", &self.connection)
            .finish()
    }
}
