use super::Statement;
use crate::schema::app::ModelId;

/// `SELECT COUNT(*) FROM "<table>"`
#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    pub source: ModelId,
}

impl Statement {
    pub fn count(source: ModelId) -> Self {
        Count { source }.into()
    }
}

impl From<Count> for Statement {
    fn from(value: Count) -> Self {
        Self::Count(value)
    }
}
