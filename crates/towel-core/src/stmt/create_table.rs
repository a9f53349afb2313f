use super::Statement;
use crate::schema::app::ModelId;

/// `CREATE TABLE "<table>" (id SERIAL PRIMARY KEY, <column defs>)`
///
/// Column definitions follow the model's declaration order, with the
/// primary key always first.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub model: ModelId,
}

impl Statement {
    pub fn create_table(model: ModelId) -> Self {
        CreateTable { model }.into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
