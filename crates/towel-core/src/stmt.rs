mod assignments;
pub use assignments::{Assignment, Assignments};

mod count;
pub use count::Count;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::{Delete, DeleteByKey};

mod expr;
pub use expr::Expr;

mod filter;
pub use filter::{Filter, Join, Predicate};

mod get_by_key;
pub use get_by_key::GetByKey;

mod insert;
pub use insert::Insert;

mod op_binary;
pub use op_binary::BinaryOp;

mod query;
pub use query::Query;

mod table_exists;
pub use table_exists::TableExists;

mod ty;
pub use ty::Type;

mod update;
pub use update::{Update, UpdateByKey};

mod value;
pub use value::Value;

mod value_cmp;

mod value_record;
pub use value_record::ValueRecord;

use crate::schema::app::ModelId;

/// A statement the SQL serializer knows how to render.
///
/// Statements only ever carry schema identifiers (model and column ids) and
/// bound values. Names are looked up in the schema at serialization time, so
/// nothing a caller passes at runtime is ever spliced into SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Count(Count),
    CreateTable(CreateTable),
    Delete(Delete),
    DeleteByKey(DeleteByKey),
    GetByKey(GetByKey),
    Insert(Insert),
    Query(Query),
    TableExists(TableExists),
    Update(Update),
    UpdateByKey(UpdateByKey),
}

impl Statement {
    /// The model the statement operates on.
    pub fn model(&self) -> ModelId {
        match self {
            Statement::Count(stmt) => stmt.source,
            Statement::CreateTable(stmt) => stmt.model,
            Statement::Delete(stmt) => stmt.from,
            Statement::DeleteByKey(stmt) => stmt.from,
            Statement::GetByKey(stmt) => stmt.source,
            Statement::Insert(stmt) => stmt.target,
            Statement::Query(stmt) => stmt.source,
            Statement::TableExists(stmt) => stmt.model,
            Statement::Update(stmt) => stmt.target,
            Statement::UpdateByKey(stmt) => stmt.target,
        }
    }

    /// Returns `true` if executing the statement produces rows.
    pub fn returns_rows(&self) -> bool {
        match self {
            Statement::Count(_)
            | Statement::GetByKey(_)
            | Statement::Query(_)
            | Statement::TableExists(_) => true,
            Statement::Insert(stmt) => stmt.returning,
            _ => false,
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Query(_))
    }
}
