#[macro_use]
mod macros;

mod db_test;
mod exec_log;
pub mod fixtures;
mod isolation;
mod logging_connection;

pub use db_test::DbTest;
pub use exec_log::ExecLog;

use jorm::driver::Connection;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    /// Opens a connection to the database under test.
    async fn connect(&self) -> jorm::Result<Box<dyn Connection>>;

    /// Prefix that keeps this test's tables apart from concurrent tests.
    fn table_prefix(&self) -> Option<String> {
        None
    }

    /// Clean up tables created by this specific setup instance.
    async fn cleanup_my_tables(&self) -> jorm::Result<()> {
        Ok(())
    }
}
