use super::{Statement, Value};
use crate::schema::app::ModelId;

/// `SELECT * FROM "<table>" WHERE id = ?`
#[derive(Debug, Clone, PartialEq)]
pub struct GetByKey {
    pub source: ModelId,
    pub key: Value,
}

impl Statement {
    pub fn get_by_key(source: ModelId, key: impl Into<Value>) -> Self {
        GetByKey {
            source,
            key: key.into(),
        }
        .into()
    }
}

impl From<GetByKey> for Statement {
    fn from(value: GetByKey) -> Self {
        Self::GetByKey(value)
    }
}
