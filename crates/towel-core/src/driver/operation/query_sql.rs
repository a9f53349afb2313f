use super::Operation;

use crate::stmt;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The SQL query to execute
    pub stmt: stmt::Statement,

    /// Types of the returned columns, when the statement returns rows.
    pub ret: Option<Vec<stmt::Type>>,
}

impl QuerySql {
    /// A statement that returns no rows.
    pub fn exec(stmt: impl Into<stmt::Statement>) -> Self {
        Self {
            stmt: stmt.into(),
            ret: None,
        }
    }

    /// A statement returning rows with columns of the given types.
    pub fn query(stmt: impl Into<stmt::Statement>, ret: Vec<stmt::Type>) -> Self {
        Self {
            stmt: stmt.into(),
            ret: Some(ret),
        }
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
