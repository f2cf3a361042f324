use jorm::{db::Connect, driver::Connection, driver::Driver};

use crate::Setup;

/// Every connection is a fresh in-memory database.
pub struct SetupSqlite;

impl SetupSqlite {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SetupSqlite {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Setup for SetupSqlite {
    async fn connect(&self) -> jorm::Result<Box<dyn Connection>> {
        Connect::new("sqlite::memory:")?.connect().await
    }
}
