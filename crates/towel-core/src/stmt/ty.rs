use std::fmt;

/// The primitive type of a value.
///
/// Every column stores exactly one of these. Foreign keys store an
/// [`Type::Integer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Signed 64-bit integer
    Integer,

    /// 64-bit floating point number
    Real,

    /// UTF-8 string
    Text,

    /// Calendar date without a time zone
    Date,
}

impl Type {
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Integer)
    }

    pub fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }

    /// Name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Real => "Real",
            Self::Text => "Text",
            Self::Date => "Date",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
