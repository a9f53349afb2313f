use super::{app::ColumnId, app::ModelId, Field};
use crate::{stmt, Error, Result};

/// Length used by [`ModelBuilder::varchar`](super::ModelBuilder::varchar).
pub const DEFAULT_TEXT_LENGTH: usize = 50;

/// A named, typed column of a model.
///
/// Columns are descriptors only; values live in [`Field`]s owned by records.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column within the schema
    pub id: ColumnId,

    /// The column name, also used as the SQL column name
    pub name: String,

    pub ty: FieldTy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    Integer,
    Real,

    /// Text of at most `length` characters.
    Text {
        length: usize,
    },

    Date,

    /// Integer referencing the primary key of another model.
    ForeignKey(ForeignKey),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    /// The referenced model
    pub target: ModelId,

    /// Name under which a record exposes the referenced record
    pub entity_name: String,
}

impl Column {
    pub fn is_primary_key(&self) -> bool {
        self.id.is_primary_key()
    }

    pub fn is_foreign_key(&self) -> bool {
        self.ty.is_foreign_key()
    }

    /// An empty value slot for this column.
    pub fn field(&self) -> Field {
        self.ty.field()
    }

    /// Checks that `value` may be stored in this column.
    pub fn verify(&self, value: &stmt::Value) -> Result<()> {
        self.ty.verify(value).map_err(|_| {
            Error::invalid_value(format!(
                "value {value} is illegal for column {} of type {}",
                self.name,
                self.ty.name(),
            ))
        })
    }
}

impl FieldTy {
    /// The primitive type values of this kind are stored as.
    pub fn primitive(&self) -> stmt::Type {
        match self {
            Self::Integer | Self::ForeignKey(_) => stmt::Type::Integer,
            Self::Real => stmt::Type::Real,
            Self::Text { .. } => stmt::Type::Text,
            Self::Date => stmt::Type::Date,
        }
    }

    pub fn max_length(&self) -> Option<usize> {
        match self {
            Self::Text { length } => Some(*length),
            _ => None,
        }
    }

    pub fn is_foreign_key(&self) -> bool {
        matches!(self, Self::ForeignKey(_))
    }

    pub fn as_foreign_key(&self) -> Option<&ForeignKey> {
        match self {
            Self::ForeignKey(fk) => Some(fk),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Real => "Real",
            Self::Text { .. } => "Text",
            Self::Date => "Date",
            Self::ForeignKey(_) => "ForeignKey",
        }
    }

    pub fn field(&self) -> Field {
        Field::empty(self.primitive(), self.max_length())
    }

    pub fn verify(&self, value: &stmt::Value) -> Result<()> {
        self.field().set(value.clone())
    }
}
