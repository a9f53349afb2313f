use super::{Assignments, Filter, Statement, Value};
use crate::schema::app::ModelId;

/// `UPDATE "<table>" SET "<col>" = ?, ... [WHERE ...]`
///
/// Joined updates are not expressible; the filter must not carry a join.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub target: ModelId,
    pub assignments: Assignments,
    pub filter: Filter,
}

/// `UPDATE "<table>" SET "<col>" = ?, ... WHERE id = ?`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateByKey {
    pub target: ModelId,
    pub assignments: Assignments,
    pub key: Value,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}

impl From<UpdateByKey> for Statement {
    fn from(value: UpdateByKey) -> Self {
        Self::UpdateByKey(value)
    }
}
