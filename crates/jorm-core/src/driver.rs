mod query_sql;
pub use query_sql::QuerySql;

mod response;
pub use response::Response;

use crate::{async_trait, Result};

use std::{borrow::Cow, fmt::Debug};

/// A database driver: knows how to open connections to one database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The URL this driver connects to.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open connection, treated as externally synchronized: one statement
/// runs at a time.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Executes a statement and captures its first row.
    ///
    /// Later rows are skipped without converting their cells. Any cursor or
    /// prepared statement the driver opens is released before this returns,
    /// whether it succeeds or fails.
    async fn exec(&mut self, op: QuerySql) -> Result<Response>;
}

#[async_trait]
impl<T: Connection + ?Sized> Connection for Box<T> {
    async fn exec(&mut self, op: QuerySql) -> Result<Response> {
        (**self).exec(op).await
    }
}
