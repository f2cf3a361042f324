use crate::{logging_connection::LoggingConnection, ExecLog, Setup};

use jorm::{
    driver::{Connection, QuerySql},
    Db,
};
use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
};

/// Per-test harness: owns the runtime, the driver setup and the log of
/// statements submitted by the `Db` under test.
///
/// Tests use `#[test]` with this managed current-thread runtime rather than
/// `#[tokio::test]` so cleanup can block before the test exits.
pub struct DbTest {
    runtime: Option<tokio::runtime::Runtime>,
    setup: Box<dyn Setup>,
    ops_log: Arc<Mutex<Vec<QuerySql>>>,
}

impl DbTest {
    /// Create a new DbTest with a current-thread runtime.
    pub fn new(setup: Box<dyn Setup>) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        Self {
            runtime: Some(runtime),
            setup,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Name of `table` as seen by this test's `Db`.
    pub fn table(&self, table: &str) -> String {
        match self.setup.table_prefix() {
            Some(prefix) => format!("{prefix}{table}"),
            None => table.to_string(),
        }
    }

    /// Opens a connection, runs `statements` on it and returns a `Db` over
    /// the same connection. Only statements issued through the `Db` are
    /// logged.
    pub async fn setup_db(&mut self, statements: &[String]) -> Db {
        self.try_setup_db(statements).await.unwrap()
    }

    pub async fn try_setup_db(&mut self, statements: &[String]) -> jorm::Result<Db> {
        let mut connection = self.setup.connect().await?;

        for sql in statements {
            connection
                .exec(QuerySql {
                    sql: sql.clone(),
                    params: vec![],
                })
                .await?;
        }

        self.ops_log = Arc::new(Mutex::new(Vec::new()));
        let connection = LoggingConnection::new(connection, self.ops_log.clone());

        let mut builder = Db::builder();
        if let Some(prefix) = self.setup.table_prefix() {
            builder.table_name_prefix(&prefix);
        }

        Ok(builder.with_connection(Box::new(connection)))
    }

    /// Statements submitted through the `Db` returned by `setup_db`.
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }

    /// Run a test function with a mutable reference to self, using our managed runtime.
    pub fn run_test<F>(&mut self, test_fn: F)
    where
        F: for<'a> FnOnce(&'a mut DbTest) -> Pin<Box<dyn Future<Output = ()> + 'a>>,
    {
        let runtime = self.runtime.take().expect("runtime already in use");
        runtime.block_on(test_fn(self));
        self.runtime = Some(runtime);
    }
}

impl Drop for DbTest {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            let setup = &self.setup;
            runtime.block_on(async {
                let _ = setup.cleanup_my_tables().await;
            });
        }
    }
}
