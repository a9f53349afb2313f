use super::{
    app::{ColumnId, ModelId},
    Column, FieldTy, ForeignKey, DEFAULT_TEXT_LENGTH, JOIN_SEPARATOR,
};
use crate::{stmt, Error, Result};

/// A registered model: a table name and its ordered columns.
///
/// `columns[0]` is always the implicit `id` primary key, followed by the
/// declared columns in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name the model was declared with, e.g. `Fish`
    pub name: String,

    /// Name of the backing table, e.g. `fish`
    pub table_name: String,

    pub columns: Vec<Column>,
}

/// Declares a model before it is registered.
///
/// ```
/// use towel_core::schema::Model;
///
/// let fish = Model::builder("Fish")
///     .varchar("name")
///     .integer("age")
///     .foreign_key("aquarium_id", "Aquarium");
/// # let _ = fish;
/// ```
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    pub(super) name: String,
    pub(super) table_name: Option<String>,
    pub(super) columns: Vec<ColumnDecl>,
}

#[derive(Debug, Clone)]
pub(super) struct ColumnDecl {
    pub(super) name: String,
    pub(super) kind: ColumnKind,
}

#[derive(Debug, Clone)]
pub(super) enum ColumnKind {
    Integer,
    Real,
    Text { length: usize },
    Date,
    ForeignKey { target: String, entity_name: String },
}

impl Model {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            table_name: None,
            columns: vec![],
        }
    }

    pub fn primary_key(&self) -> &Column {
        &self.columns[0]
    }

    /// Declared columns, without the primary key.
    pub fn data_columns(&self) -> impl ExactSizeIterator<Item = &Column> {
        self.columns[1..].iter()
    }

    /// Primitive type of every column, in column order.
    pub fn column_types(&self) -> Vec<stmt::Type> {
        self.columns.iter().map(|column| column.ty.primitive()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    #[track_caller]
    pub fn column_by_id(&self, id: ColumnId) -> &Column {
        assert_eq!(id.model, self.id, "column belongs to another model");
        &self.columns[id.index]
    }

    /// Like [`Model::column`], failing with an attribute error naming the
    /// model when the column is not declared.
    pub fn expect_column(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| {
            Error::attribute(format!("{name} is not defined in model {}", self.name))
        })
    }

    /// Foreign key columns, in declaration order.
    pub fn foreign_keys(&self) -> impl Iterator<Item = (&Column, &ForeignKey)> {
        self.columns
            .iter()
            .filter_map(|column| column.ty.as_foreign_key().map(|fk| (column, fk)))
    }

    /// The foreign key column exposing the referenced record as `entity_name`.
    pub fn foreign_key_by_entity(&self, entity_name: &str) -> Option<(&Column, &ForeignKey)> {
        self.foreign_keys()
            .find(|(_, fk)| fk.entity_name == entity_name)
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl ModelBuilder {
    /// Overrides the table name, which defaults to the lowercased model name.
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn integer(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnKind::Integer)
    }

    pub fn real(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnKind::Real)
    }

    /// Text column holding at most `length` characters.
    pub fn text(self, name: impl Into<String>, length: usize) -> Self {
        self.column(name, ColumnKind::Text { length })
    }

    /// Text column with the default length.
    pub fn varchar(self, name: impl Into<String>) -> Self {
        self.text(name, DEFAULT_TEXT_LENGTH)
    }

    pub fn date(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnKind::Date)
    }

    /// Foreign key to the model registered as `target`. The referenced record
    /// is exposed as `foreign_entity`.
    pub fn foreign_key(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.foreign_key_as(name, target, "foreign_entity")
    }

    /// Foreign key to the model registered as `target`, exposing the
    /// referenced record as `entity_name`.
    pub fn foreign_key_as(
        self,
        name: impl Into<String>,
        target: impl Into<String>,
        entity_name: impl Into<String>,
    ) -> Self {
        self.column(
            name,
            ColumnKind::ForeignKey {
                target: target.into(),
                entity_name: entity_name.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn column(mut self, name: impl Into<String>, kind: ColumnKind) -> Self {
        self.columns.push(ColumnDecl {
            name: name.into(),
            kind,
        });
        self
    }
}

impl ColumnDecl {
    /// Checks the parts of the declaration that don't depend on other models.
    pub(super) fn verify(&self, model: &str) -> Result<()> {
        super::name::validate_identifier("column", &self.name)?;

        if self.name == "id" {
            return Err(Error::attribute(format!(
                "model {model} cannot declare `id`; the primary key is implicit"
            )));
        }

        if self.name.contains(JOIN_SEPARATOR) {
            return Err(Error::attribute(format!(
                "column name `{}` on model {model} must not contain `{JOIN_SEPARATOR}`",
                self.name
            )));
        }

        match &self.kind {
            ColumnKind::Text { length: 0 } => Err(Error::attribute(format!(
                "text column {} on model {model} must have a positive length",
                self.name
            ))),
            ColumnKind::ForeignKey { entity_name, .. } => {
                super::name::validate_identifier("entity", entity_name)
            }
            _ => Ok(()),
        }
    }

    /// Resolves the declaration into a field kind. Foreign key targets are
    /// looked up with `resolve`.
    pub(super) fn field_ty(
        &self,
        resolve: impl FnOnce(&str) -> Option<ModelId>,
    ) -> Result<FieldTy> {
        Ok(match &self.kind {
            ColumnKind::Integer => FieldTy::Integer,
            ColumnKind::Real => FieldTy::Real,
            ColumnKind::Text { length } => FieldTy::Text { length: *length },
            ColumnKind::Date => FieldTy::Date,
            ColumnKind::ForeignKey {
                target,
                entity_name,
            } => {
                let Some(target) = resolve(target) else {
                    return Err(Error::attribute(format!(
                        "foreign key {} references unregistered model {target}",
                        self.name
                    )));
                };

                FieldTy::ForeignKey(ForeignKey {
                    target,
                    entity_name: entity_name.clone(),
                })
            }
        })
    }
}
