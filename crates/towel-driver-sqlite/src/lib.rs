mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::{path::Path, sync::Arc};
use towel_core::{
    driver::{
        operation::{QuerySql, QuerySqlMany},
        Connection, Operation, Response,
    },
    stmt, Error, Result, Schema,
};
use towel_sql as sql;
use url::Url;

/// A connection to a SQLite database, in memory or on disk.
///
/// Foreign key enforcement is switched on when the connection is opened.
#[derive(Debug)]
pub struct Sqlite {
    /// `None` once the connection has been closed.
    connection: Option<RusqliteConnection>,
}

impl Sqlite {
    /// Opens the database named by a `sqlite:` URL. `sqlite::memory:` opens a
    /// fresh in-memory database; anything else is a file path.
    pub fn connect(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        if parsed.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url}"
            )));
        }

        match parsed.path() {
            ":memory:" => Self::in_memory(),
            "" => Err(Error::invalid_connection_url(format!(
                "missing database path; url={url}"
            ))),
            path => Self::open(path),
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Self::init(connection)
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Self::init(connection)
    }

    fn init(connection: RusqliteConnection) -> Result<Self> {
        // Off by default in SQLite; references are not checked without it.
        connection
            .execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(Error::driver_operation_failed)?;

        Ok(Self {
            connection: Some(connection),
        })
    }

    fn connection(&self) -> Result<&RusqliteConnection> {
        self.connection
            .as_ref()
            .ok_or_else(|| Error::operational("connection is closed"))
    }

    fn exec_sql(&self, schema: &Schema, op: QuerySql) -> Result<Response> {
        let connection = self.connection()?;

        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::sqlite(schema).serialize(&op.stmt, &mut params);
        tracing::debug!(sql = %sql_str, params = params.len(), "sqlite exec");

        let mut prepared = connection.prepare_cached(&sql_str).map_err(error)?;
        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        let Some(ret_tys) = op.ret else {
            let count = prepared
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(error)?;

            return Ok(Response::count(count as u64));
        };

        let mut rows = prepared
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(error)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(error)? {
            let mut items = Vec::with_capacity(ret_tys.len());

            for (index, ty) in ret_tys.iter().enumerate() {
                items.push(Value::from_sql(row, index, *ty)?.into_inner());
            }

            ret.push(stmt::ValueRecord::from_vec(items));
        }

        Ok(Response::values(ret))
    }

    fn exec_sql_many(&self, schema: &Schema, op: QuerySqlMany) -> Result<Response> {
        let connection = self.connection()?;

        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::sqlite(schema).serialize(&op.stmt, &mut params);
        debug_assert!(params.is_empty(), "batch statements bind arguments only");
        tracing::debug!(sql = %sql_str, rows = op.rows.len(), "sqlite exec many");

        let mut prepared = connection.prepare_cached(&sql_str).map_err(error)?;
        let mut count = 0;

        for row in op.rows {
            let args = row.into_vec().into_iter().map(Value::from);
            count += prepared
                .execute(rusqlite::params_from_iter(args))
                .map_err(error)?;
        }

        Ok(Response::count(count as u64))
    }
}

impl Connection for Sqlite {
    fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => self.exec_sql(schema, op),
            Operation::QuerySqlMany(op) => self.exec_sql_many(schema, op),
        }
    }

    fn close(&mut self) -> Result<()> {
        match self.connection.take() {
            Some(connection) => connection
                .close()
                .map_err(|(_, err)| Error::driver_operation_failed(err)),
            None => Ok(()),
        }
    }
}

/// Maps a rusqlite error into the towel error taxonomy.
fn error(err: rusqlite::Error) -> Error {
    let foreign_key = matches!(
        &err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    );

    if foreign_key {
        Error::foreign_key_violation(err)
    } else {
        Error::driver_operation_failed(err)
    }
}
