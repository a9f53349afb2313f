use super::Error;

/// Error when a value does not satisfy a column's primitive type.
#[derive(Debug)]
pub(super) struct InvalidValue {
    message: Box<str>,
}

impl std::error::Error for InvalidValue {}

impl core::fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid value: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid value error.
    ///
    /// Raised at assignment time, before anything reaches the database.
    pub fn invalid_value(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidValue(InvalidValue {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid value error.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidValue(_))
    }
}
