use super::{BinaryOp, Value};
use crate::schema::app::{ColumnId, ModelId};

/// Accumulated `WHERE` state of a query chain.
///
/// Predicates are conjoined left to right with `AND`; there is no `OR` and
/// no grouping. `values()` yields exactly one value per predicate, in the
/// order the placeholders appear in the rendered clause.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    pub predicates: Vec<Predicate>,

    /// At most one joined table per chain.
    pub join: Option<Join>,
}

/// `"<table>"."<column>" <op> ?`
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: ColumnId,
    pub op: BinaryOp,
    pub value: Value,
}

/// Inner join from the queried model to the model a foreign key references:
/// `"<table>"."id" = "<base>"."<foreign_key>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Join {
    /// The referenced model.
    pub table: ModelId,

    /// The foreign key column on the queried model.
    pub foreign_key: ColumnId,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn is_joined(&self) -> bool {
        self.join.is_some()
    }

    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    /// Bound values, aligned with the placeholders of the rendered predicates.
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.predicates.iter().map(|predicate| &predicate.value)
    }
}

impl Predicate {
    pub fn new(column: ColumnId, op: BinaryOp, value: impl Into<Value>) -> Self {
        Self {
            column,
            op,
            value: value.into(),
        }
    }
}
