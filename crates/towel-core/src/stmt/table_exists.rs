use super::Statement;
use crate::schema::app::ModelId;

/// Counts catalog entries naming the model's table. The result is a single
/// row holding `0` or `1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableExists {
    pub model: ModelId,
}

impl Statement {
    pub fn table_exists(model: ModelId) -> Self {
        TableExists { model }.into()
    }
}

impl From<TableExists> for Statement {
    fn from(value: TableExists) -> Self {
        Self::TableExists(value)
    }
}
