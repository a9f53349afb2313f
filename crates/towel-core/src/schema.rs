pub mod app;
use app::{ColumnId, ModelId};

mod builder;
pub use builder::Builder;

mod column;
pub use column::{Column, FieldTy, ForeignKey, DEFAULT_TEXT_LENGTH};

mod field;
pub use field::Field;

mod model;
pub use model::{Model, ModelBuilder};

mod name;
pub use name::JOIN_SEPARATOR;

mod verify;

use crate::{Error, Result};
use indexmap::IndexMap;

/// Every model registered with a database, in registration order.
///
/// A schema is built once by [`Builder::build`] and never changes afterwards.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    /// Get a column by ID
    #[track_caller]
    pub fn column(&self, id: ColumnId) -> &Column {
        self.model(id.model)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    /// Looks a model up by the name it was registered under.
    pub fn model_by_name(&self, name: &str) -> Result<&Model> {
        self.models()
            .find(|model| model.name == name)
            .ok_or_else(|| Error::attribute(format!("model {name} is not registered")))
    }

    /// The table a column belongs to.
    pub fn table_name_for(&self, id: ColumnId) -> &str {
        &self.model(id.model).table_name
    }
}
