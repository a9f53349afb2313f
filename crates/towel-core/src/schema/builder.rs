use super::{
    app::ModelId,
    model::ModelBuilder,
    name::validate_identifier,
    Column, FieldTy, Model, Schema,
};
use crate::{Error, Result};
use indexmap::IndexMap;

/// Registers models and turns them into a [`Schema`].
#[derive(Debug, Default, Clone)]
pub struct Builder {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,

    models: Vec<ModelBuilder>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn register(&mut self, model: ModelBuilder) -> &mut Self {
        self.models.push(model);
        self
    }

    /// Resolves every registered model.
    ///
    /// Models get ids in registration order. Each model gets the implicit
    /// `id` column first, a table name (the lowercased model name unless
    /// overridden, with the prefix prepended), and its foreign keys resolved
    /// against the other registered models. Foreign keys may reference models
    /// registered later.
    pub fn build(&self) -> Result<Schema> {
        let mut ids = IndexMap::new();

        for (index, model) in self.models.iter().enumerate() {
            validate_identifier("model", &model.name)?;

            if ids.insert(model.name.as_str(), ModelId(index)).is_some() {
                return Err(Error::attribute(format!(
                    "model {} is registered more than once",
                    model.name
                )));
            }
        }

        let mut models = IndexMap::new();

        for (index, decl) in self.models.iter().enumerate() {
            let id = ModelId(index);
            let model = self.build_model(id, decl, |name| ids.get(name).copied())?;
            models.insert(id, model);
        }

        let schema = Schema { models };
        schema.verify()?;

        for model in schema.models() {
            tracing::debug!(
                model = %model.name,
                table = %model.table_name,
                columns = model.columns.len(),
                "registered model"
            );
        }

        Ok(schema)
    }

    fn build_model(
        &self,
        id: ModelId,
        decl: &ModelBuilder,
        resolve: impl Fn(&str) -> Option<ModelId>,
    ) -> Result<Model> {
        let table_name = match &decl.table_name {
            Some(table_name) => table_name.clone(),
            None => decl.name.to_lowercase(),
        };

        let table_name = match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{table_name}"),
            None => table_name,
        };

        validate_identifier("table", &table_name)?;

        let mut columns = vec![Column {
            id: id.primary_key(),
            name: "id".to_string(),
            ty: FieldTy::Integer,
        }];

        for column in &decl.columns {
            column.verify(&decl.name)?;

            if columns.iter().any(|existing| existing.name == column.name) {
                return Err(Error::attribute(format!(
                    "column {} is declared more than once on model {}",
                    column.name, decl.name
                )));
            }

            columns.push(Column {
                id: id.column(columns.len()),
                name: column.name.clone(),
                ty: column.field_ty(&resolve)?,
            });
        }

        Ok(Model {
            id,
            name: decl.name.clone(),
            table_name,
            columns,
        })
    }
}
