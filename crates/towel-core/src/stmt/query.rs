use super::{Filter, Statement, Value};
use crate::schema::app::ModelId;

/// `SELECT "<table>".* FROM "<table>" [INNER JOIN ...] [WHERE ...] [LIMIT ?]`
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub source: ModelId,
    pub filter: Filter,
    pub limit: Option<Value>,
}

impl Query {
    pub fn all(source: ModelId) -> Self {
        Self {
            source,
            filter: Filter::default(),
            limit: None,
        }
    }

    pub fn filter(source: ModelId, filter: Filter) -> Self {
        Self {
            source,
            filter,
            limit: None,
        }
    }

    pub fn limit(mut self, limit: impl Into<Value>) -> Self {
        self.limit = Some(limit.into());
        self
    }
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
