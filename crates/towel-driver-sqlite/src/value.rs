use chrono::NaiveDate;
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use towel_core::{
    err,
    stmt::{self, Value as CoreValue},
    Error, Result,
};

/// Dates are stored as ISO-8601 text.
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core towel value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a towel value of type `ty`.
    pub fn from_sql(row: &Row, index: usize, ty: stmt::Type) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver_operation_failed)?;

        let core_value = match (value, ty) {
            (SqlValue::Null, _) => CoreValue::Null,
            (SqlValue::Integer(value), stmt::Type::Integer) => CoreValue::I64(value),
            // REAL affinity may hand back integral values as integers.
            (SqlValue::Integer(value), stmt::Type::Real) => CoreValue::F64(value as f64),
            (SqlValue::Real(value), stmt::Type::Real) => CoreValue::F64(value),
            (SqlValue::Text(value), stmt::Type::Text) => CoreValue::String(value),
            (SqlValue::Text(value), stmt::Type::Date) => {
                CoreValue::Date(NaiveDate::parse_from_str(&value, DATE_FORMAT)?)
            }
            (value, ty) => return Err(err!("cannot read SQLite value {value:?} as {ty}")),
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Date(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.format(DATE_FORMAT).to_string(),
            ))),
        }
    }
}
