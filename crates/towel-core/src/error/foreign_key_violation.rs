use super::Error;

/// Error when the database rejects a statement because a foreign key value
/// does not reference an existing row.
///
/// Drivers raise this instead of [`Error::driver_operation_failed`] so callers
/// never need to match on a database specific error type.
#[derive(Debug)]
pub(super) struct ForeignKeyViolation {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ForeignKeyViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ForeignKeyViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "foreign key violation: {}", self.inner)
    }
}

impl Error {
    /// Creates a foreign key violation error from a driver error.
    pub fn foreign_key_violation(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::ForeignKeyViolation(ForeignKeyViolation {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a foreign key violation.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ForeignKeyViolation(_))
    }
}
