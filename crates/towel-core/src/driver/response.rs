use crate::{err, stmt::ValueRecord, Result};

#[derive(Debug, Clone)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Returned rows, each holding one value per selected column
    Values(Vec<ValueRecord>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(values: Vec<ValueRecord>) -> Self {
        Self {
            rows: Rows::Values(values),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            Rows::Values(_) => Err(err!("expected an affected-row count, got rows")),
        }
    }

    pub fn into_values(self) -> Result<Vec<ValueRecord>> {
        match self {
            Rows::Values(values) => Ok(values),
            Rows::Count(count) => Err(err!("expected rows, got an affected-row count ({count})")),
        }
    }

    /// The single integer of a one-row, one-column result, like
    /// `SELECT COUNT(*)` or `RETURNING id`.
    pub fn into_scalar_i64(self) -> Result<i64> {
        let mut rows = self.into_values()?.into_iter();

        let (Some(row), None) = (rows.next(), rows.next()) else {
            return Err(err!("expected exactly one row"));
        };

        match row.into_vec().as_slice() {
            [value] => value.clone().to_i64(),
            other => Err(err!("expected exactly one column, got {}", other.len())),
        }
    }
}
