pub use jorm_core::driver::{Connection, Driver, QuerySql, Response};
pub use jorm_core::stmt::Cell;
