use super::{Connect, Db};
use crate::Result;

use jorm_core::{
    driver::{Connection, Driver},
    schema,
};

#[derive(Debug, Default)]
pub struct Builder {
    /// Schema builder
    core: schema::Builder,
}

impl Builder {
    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    /// Connects to the database at `url`, picking the driver by URL scheme.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let connection = driver.connect().await?;
        Ok(self.with_connection(connection))
    }

    /// Wraps a connection that is already open.
    pub fn with_connection(&mut self, connection: Box<dyn Connection>) -> Db {
        Db {
            connection,
            schema: self.core.clone(),
        }
    }
}
