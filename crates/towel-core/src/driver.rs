mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{schema::Schema, Result};

use std::{fmt::Debug, sync::Arc};

/// A single, synchronous database connection.
///
/// Every call blocks until the database has answered. Connections are not
/// shared between threads without external locking.
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> Result<Response>;

    /// Makes the effects of previously executed operations durable.
    fn commit(&mut self) -> Result<()> {
        Ok(())
    }

    /// Closes the connection. Operations after `close` fail.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
