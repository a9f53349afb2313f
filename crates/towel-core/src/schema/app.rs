use std::fmt;

/// Identifies a model within a [`Schema`](super::Schema).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelId(pub usize);

/// Identifies a column within a model. Index `0` is always the primary key.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ColumnId {
    pub model: ModelId,
    pub index: usize,
}

impl ModelId {
    pub const fn column(self, index: usize) -> ColumnId {
        ColumnId { model: self, index }
    }

    /// The implicit `id` column of the model.
    pub const fn primary_key(self) -> ColumnId {
        self.column(0)
    }
}

impl ColumnId {
    pub const fn is_primary_key(self) -> bool {
        self.index == 0
    }
}

impl From<&ModelId> for ModelId {
    fn from(value: &ModelId) -> Self {
        *value
    }
}

impl From<ColumnId> for ModelId {
    fn from(value: ColumnId) -> Self {
        value.model
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.model.0, self.index)
    }
}
