use super::Value;

/// A value slot inside a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A value bound when the statement is serialized.
    Value(Value),

    /// The n-th argument of a batch. The serializer emits a placeholder for
    /// it but no parameter; the driver binds one row of arguments per
    /// execution.
    Arg(usize),
}

impl Expr {
    pub fn arg(position: usize) -> Self {
        Self::Arg(position)
    }

    pub fn is_arg(&self) -> bool {
        matches!(self, Self::Arg(_))
    }
}

impl<T> From<T> for Expr
where
    Value: From<T>,
{
    fn from(value: T) -> Self {
        Self::Value(Value::from(value))
    }
}
