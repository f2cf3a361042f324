use jorm::{driver::QuerySql, stmt::Value};
use std::sync::{Arc, Mutex};

/// Read access to the statements a test's `Db` submitted.
#[derive(Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<QuerySql>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<QuerySql>>>) -> Self {
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// SQL text of the `index`th statement.
    pub fn sql(&self, index: usize) -> String {
        self.ops.lock().unwrap()[index].sql.clone()
    }

    /// Arguments of the `index`th statement.
    pub fn params(&self, index: usize) -> Vec<Value> {
        self.ops.lock().unwrap()[index].params.clone()
    }

    /// The most recent statement.
    pub fn last(&self) -> QuerySql {
        self.ops
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no statement was submitted")
    }
}
