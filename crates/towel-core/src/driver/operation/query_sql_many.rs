use super::Operation;

use crate::stmt;

/// Runs one statement once per row of arguments.
///
/// The statement's `stmt::Expr::Arg(i)` slots are bound to `rows[n][i]` on
/// the n-th execution. Execution stops at the first failing row.
#[derive(Debug, Clone)]
pub struct QuerySqlMany {
    pub stmt: stmt::Statement,
    pub rows: Vec<stmt::ValueRecord>,
}

impl From<QuerySqlMany> for Operation {
    fn from(value: QuerySqlMany) -> Self {
        Self::QuerySqlMany(value)
    }
}
