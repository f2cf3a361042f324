mod value;
pub(crate) use value::Value;

use jorm_core::{
    async_trait,
    driver::{Driver, QuerySql, Response},
    Error, Result,
};
use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, Pool,
};
use std::borrow::Cow;
use tracing::trace;
use url::Url;

#[derive(Debug)]
pub struct MySQL {
    url: String,
    pool: Pool,
}

impl MySQL {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "connection url does not have a `mysql` scheme; url={url}"
            )));
        }

        if !matches!(url.host_str(), Some(host) if !host.is_empty()) {
            return Err(Error::invalid_connection_url(format!(
                "missing host in connection URL; url={url}"
            )));
        }

        if url.path().trim_start_matches('/').is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url}"
            )));
        }

        let opts = mysql_async::Opts::from_url(url.as_ref())
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        Ok(Self {
            url: url_str,
            pool: Pool::new(opts),
        })
    }
}

#[async_trait]
impl Driver for MySQL {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.url)
    }

    async fn connect(&self) -> Result<Box<dyn jorm_core::driver::Connection>> {
        let conn = self.pool.get_conn().await.map_err(Error::driver)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl jorm_core::driver::Connection for Connection {
    async fn exec(&mut self, op: QuerySql) -> Result<Response> {
        trace!(sql = %op.sql, params = op.params.len(), "mysql exec");

        let args = op
            .params
            .iter()
            .map(|param| Value::from(param).to_value())
            .collect::<Vec<_>>();

        let statement = self.conn.prep(&op.sql).await.map_err(Error::driver)?;

        let columns: Vec<String> = statement
            .columns()
            .iter()
            .map(|column| column.name_str().into_owned())
            .collect();

        let mut result = self
            .conn
            .exec_iter(&statement, mysql_async::Params::Positional(args))
            .await
            .map_err(Error::driver)?;

        let mut response = Response::new(columns);

        if let Some(mut row) = result.next().await.map_err(Error::driver)? {
            if row.len() != response.columns.len() {
                return Err(Error::row_width(response.columns.len(), row.len()));
            }

            let mut cells = Vec::with_capacity(row.len());

            for (index, column) in response.columns.iter().enumerate() {
                cells.push(value::cell(row.take(index), column)?);
            }

            response.first = Some(cells);
            response.more = result.next().await.map_err(Error::driver)?.is_some();
        }

        // Discards the remaining rows so the connection can be reused
        result.drop_result().await.map_err(Error::driver)?;

        Ok(response)
    }
}
