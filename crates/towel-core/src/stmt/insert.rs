use super::{Expr, Statement};
use crate::schema::app::{ColumnId, ModelId};

/// `INSERT INTO "<table>" (<columns>) VALUES (<placeholders>) [RETURNING id]`
///
/// `columns` never contains the primary key; the database assigns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub target: ModelId,
    pub columns: Vec<ColumnId>,
    pub values: Vec<Expr>,

    /// Return the assigned `id`.
    pub returning: bool,
}

impl Insert {
    /// Builds an insert whose values are batch arguments, for executing once
    /// per row of a batch.
    pub fn batch(target: ModelId, columns: Vec<ColumnId>) -> Self {
        let values = (0..columns.len()).map(Expr::arg).collect();
        Self {
            target,
            columns,
            values,
            returning: false,
        }
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
