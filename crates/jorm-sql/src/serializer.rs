#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod statement;

use jorm_core::{driver::QuerySql, stmt};

/// Serialize a statement to a SQL string
#[derive(Debug, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `stmt` as SQL text, pushing every bound value into `params` in
    /// placeholder order.
    pub fn serialize(&self, stmt: &stmt::Select, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    /// Serializes `stmt` into a statement ready to hand to a driver.
    pub fn query_sql(&self, stmt: &stmt::Select) -> QuerySql {
        let mut params = Vec::<stmt::Value>::with_capacity(stmt.filter.len());
        let sql = self.serialize(stmt, &mut params);
        QuerySql { sql, params }
    }
}
