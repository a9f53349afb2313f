mod query_sql;
pub use query_sql::QuerySql;

mod query_sql_many;
pub use query_sql_many::QuerySqlMany;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a SQL statement once
    QuerySql(QuerySql),

    /// Execute a SQL statement once per row of arguments
    QuerySqlMany(QuerySqlMany),
}

impl Operation {
    pub fn stmt(&self) -> &crate::stmt::Statement {
        match self {
            Operation::QuerySql(op) => &op.stmt,
            Operation::QuerySqlMany(op) => &op.stmt,
        }
    }
}
