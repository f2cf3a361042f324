use jorm::driver::{Connection, QuerySql, Response};
use jorm_core::{async_trait, Result};
use std::sync::{Arc, Mutex};

/// A connection wrapper that records every statement submitted through it.
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually executes statements
    inner: Box<dyn Connection>,

    /// Statements submitted, in order, whether or not they succeeded
    ops_log: Arc<Mutex<Vec<QuerySql>>>,
}

impl LoggingConnection {
    pub fn new(inner: Box<dyn Connection>, ops_log: Arc<Mutex<Vec<QuerySql>>>) -> Self {
        Self { inner, ops_log }
    }
}

#[async_trait]
impl Connection for LoggingConnection {
    async fn exec(&mut self, op: QuerySql) -> Result<Response> {
        self.ops_log.lock().unwrap().push(op.clone());
        self.inner.exec(op).await
    }
}
