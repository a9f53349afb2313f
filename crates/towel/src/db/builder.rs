use super::Db;
use crate::Result;

use towel_core::{
    schema::{self, ModelBuilder},
    Connection, Error,
};

use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct Builder {
    /// Schema builder
    core: schema::Builder,

    /// Connection URL, used when no connection is supplied directly
    url: Option<String>,

    connection: Option<Box<dyn Connection>>,
}

impl Builder {
    pub fn register(&mut self, model: ModelBuilder) -> &mut Self {
        self.core.register(model);
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    /// Connect to `url` when building.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Use an already open connection. Takes precedence over [`Builder::url`].
    pub fn connection(&mut self, connection: impl Connection) -> &mut Self {
        self.connection = Some(Box::new(connection));
        self
    }

    pub fn connect(&mut self, url: &str) -> Result<Db> {
        self.url(url).build()
    }

    /// Resolves the registered models and opens the connection.
    ///
    /// Fails with an attribute error when neither a connection nor a URL was
    /// supplied.
    pub fn build(&mut self) -> Result<Db> {
        let schema = self.core.build()?;

        let connection = match (self.connection.take(), &self.url) {
            (Some(connection), _) => connection,
            (None, Some(url)) => super::connect(url)?,
            (None, None) => return Err(Error::attribute("database connection is not defined")),
        };

        tracing::info!(models = schema.models.len(), "database ready");

        Ok(Db {
            schema: Arc::new(schema),
            connection: Arc::new(Mutex::new(connection)),
        })
    }
}
