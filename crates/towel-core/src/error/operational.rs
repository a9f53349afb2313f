use super::Error;

/// Error when a precondition only observable at execution time fails.
///
/// This occurs when:
/// - The model's table does not exist
/// - A record is saved with an `id` that is already taken
/// - An update is requested while a join filter is active
/// - The driver fails while executing an update or remove
#[derive(Debug)]
pub(super) struct OperationalError {
    message: Box<str>,
}

impl std::error::Error for OperationalError {}

impl core::fmt::Display for OperationalError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "operational error: {}", self.message)
    }
}

impl Error {
    /// Creates an operational error.
    pub fn operational(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Operational(OperationalError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an operational error.
    pub fn is_operational(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Operational(_))
    }
}
