use super::Error;

/// Error when an operation references something the schema does not declare,
/// or combines operations in a way that is not allowed.
///
/// This occurs when:
/// - A column, model, or keyword is not declared on the model
/// - A filter uses an operator outside `<`, `>`, `<=`, `>=`, `=`, `<>`
/// - The `id` column is targeted by an update
/// - A foreign key points at a model that is not registered, or at a row that
///   does not exist
/// - A model is used without a database connection
#[derive(Debug)]
pub(super) struct AttributeError {
    message: Box<str>,
}

impl std::error::Error for AttributeError {}

impl core::fmt::Display for AttributeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "attribute error: {}", self.message)
    }
}

impl Error {
    /// Creates an attribute error.
    pub fn attribute(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Attribute(AttributeError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an attribute error.
    pub fn is_attribute(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Attribute(_))
    }
}
