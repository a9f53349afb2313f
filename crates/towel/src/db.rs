mod builder;
pub use builder::Builder;

mod connect;
pub use connect::connect;

use crate::{FieldSource, Objects, Record, Result};

use towel_core::{
    driver::{
        operation::{QuerySql, QuerySqlMany},
        Connection, Operation, Response,
    },
    err,
    schema::app::ModelId,
    stmt::{Statement, Type, ValueRecord},
    Schema,
};

use std::sync::{Arc, Mutex, MutexGuard};

/// A database handle: the registered models plus one connection.
///
/// Cloning is cheap; clones share the connection. Every operation blocks
/// until the database has answered.
#[derive(Clone, Debug)]
pub struct Db {
    schema: Arc<Schema>,
    connection: Arc<Mutex<Box<dyn Connection>>>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Query builder for the model registered as `model`.
    pub fn objects(&self, model: &str) -> Result<Objects<'_>> {
        let model = self.schema.model_by_name(model)?;
        Ok(Objects::new(self, model))
    }

    /// Creates an unsaved record of `model`.
    pub fn new_record(&self, model: &str, fields: impl FieldSource) -> Result<Record> {
        self.objects(model)?.new_record(fields)
    }

    /// Commits previously executed statements.
    pub fn commit(&self) -> Result<()> {
        self.lock()?.commit()
    }

    /// Closes the connection. Every later operation on this handle, or any
    /// clone of it, fails.
    pub fn close(&self) -> Result<()> {
        tracing::debug!("closing database connection");
        self.lock()?.close()
    }

    pub(crate) fn objects_for(&self, id: ModelId) -> Objects<'_> {
        Objects::new(self, self.schema.model(id))
    }

    pub(crate) fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let op = op.into();

        let stmt = op.stmt();
        tracing::trace!(model = %self.schema.model(stmt.model()).name, ?stmt, "exec");

        self.lock()?.exec(&self.schema, op)
    }

    /// Runs a statement returning rows with columns of the given types.
    pub(crate) fn query(
        &self,
        stmt: impl Into<Statement>,
        ret: Vec<Type>,
    ) -> Result<Vec<ValueRecord>> {
        self.exec(QuerySql::query(stmt, ret))?.rows.into_values()
    }

    /// Runs a statement returning a single integer.
    pub(crate) fn query_scalar(&self, stmt: impl Into<Statement>) -> Result<i64> {
        self.exec(QuerySql::query(stmt, vec![Type::Integer]))?
            .rows
            .into_scalar_i64()
    }

    /// Runs a statement returning the number of affected rows.
    pub(crate) fn execute(&self, stmt: impl Into<Statement>) -> Result<u64> {
        self.exec(QuerySql::exec(stmt))?.rows.into_count()
    }

    pub(crate) fn execute_many(
        &self,
        stmt: impl Into<Statement>,
        rows: Vec<ValueRecord>,
    ) -> Result<u64> {
        let op = QuerySqlMany {
            stmt: stmt.into(),
            rows,
        };
        self.exec(op)?.rows.into_count()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Box<dyn Connection>>> {
        self.connection
            .lock()
            .map_err(|_| err!("database connection lock poisoned"))
    }
}
