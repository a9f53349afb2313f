use super::Type;
use crate::{Error, Result};

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// Calendar date
    Date(NaiveDate),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the primitive type of the value, or `None` for null.
    pub fn ty(&self) -> Option<Type> {
        match self {
            Self::Null => None,
            Self::I64(_) => Some(Type::Integer),
            Self::F64(_) => Some(Type::Real),
            Self::String(_) => Some(Type::Text),
            Self::Date(_) => Some(Type::Date),
        }
    }

    /// Returns `true` if the value can be stored in a slot of type `ty`.
    ///
    /// Null fits every type. Otherwise the match is strict: an integer is not
    /// a real and a string is not a date.
    pub fn is_a(&self, ty: Type) -> bool {
        match self.ty() {
            None => true,
            Some(actual) => actual == ty,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(v) => Some(*v),
            _ => None,
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            _ => Err(Error::invalid_value(format!(
                "cannot convert {self} to Integer"
            ))),
        }
    }

    pub fn to_option_i64(self) -> Result<Option<i64>> {
        match self {
            Self::Null => Ok(None),
            value => value.to_i64().map(Some),
        }
    }

    pub fn to_string_value(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(Error::invalid_value(format!("cannot convert {self} to Text"))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::I64(v) => v.fmt(f),
            Value::F64(v) => v.fmt(f),
            Value::String(v) => v.fmt(f),
            Value::Date(v) => v.fmt(f),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::I64(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

macro_rules! impl_try_from_value {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl TryFrom<Value> for $ty {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self> {
                match value {
                    Value::$variant(value) => Ok(value),
                    _ => Err(Error::invalid_value(format!(
                        "{value} is not an instance of {}",
                        $name
                    ))),
                }
            }
        }

        impl TryFrom<Value> for Option<$ty> {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self> {
                match value {
                    Value::Null => Ok(None),
                    value => <$ty>::try_from(value).map(Some),
                }
            }
        }
    };
}

impl_try_from_value!(i64, I64, "Integer");
impl_try_from_value!(f64, F64, "Real");
impl_try_from_value!(String, String, "Text");
impl_try_from_value!(NaiveDate, Date, "Date");
