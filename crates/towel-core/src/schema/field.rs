use crate::{
    stmt::{Type, Value},
    Error, Result,
};

/// A value slot bound to one primitive type.
///
/// The value is always either null or an instance of the slot's type; every
/// assignment is checked and a mismatch fails immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    ty: Type,

    /// Upper bound on the number of characters of a text value.
    max_length: Option<usize>,

    value: Value,
}

impl Field {
    /// Creates a slot holding `value`.
    pub fn new(ty: Type, value: impl Into<Value>) -> Result<Self> {
        let mut field = Self::empty(ty, None);
        field.set(value)?;
        Ok(field)
    }

    /// Creates a null slot.
    pub fn empty(ty: Type, max_length: Option<usize>) -> Self {
        Self {
            ty,
            max_length,
            value: Value::Null,
        }
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Replaces the value. On error the previous value is kept.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();

        if !value.is_a(self.ty) {
            return Err(Error::invalid_value(format!(
                "{value} is not an instance of {}",
                self.ty
            )));
        }

        if let (Some(max), Value::String(s)) = (self.max_length, &value) {
            let len = s.chars().count();
            if len > max {
                return Err(Error::invalid_value(format!(
                    "{s:?} is {len} characters long, longer than {max}"
                )));
            }
        }

        self.value = value;
        Ok(())
    }
}
