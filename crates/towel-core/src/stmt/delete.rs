use super::{Filter, Statement, Value};
use crate::schema::app::ModelId;

/// `DELETE FROM "<table>" [WHERE ...]`
///
/// When the filter carries a join, the serializer rewrites the statement
/// into the flavor's joined-delete form.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub from: ModelId,
    pub filter: Filter,
}

/// `DELETE FROM "<table>" WHERE id = ?`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteByKey {
    pub from: ModelId,
    pub key: Value,
}

impl Statement {
    pub fn delete_by_key(from: ModelId, key: impl Into<Value>) -> Self {
        DeleteByKey {
            from,
            key: key.into(),
        }
        .into()
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}

impl From<DeleteByKey> for Statement {
    fn from(value: DeleteByKey) -> Self {
        Self::DeleteByKey(value)
    }
}
