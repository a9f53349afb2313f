use crate::{Error, Result};

/// Separates a foreign key column from a column of the referenced model in
/// join filters: `aquarium_id__color`.
pub const JOIN_SEPARATOR: &str = "__";

/// Checks that `name` is a plain SQL identifier: `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Names that pass can be embedded in SQL text; everything a caller passes at
/// runtime is bound as a parameter instead.
pub(crate) fn validate_identifier(kind: &str, name: &str) -> Result<()> {
    let Some(first) = name.chars().next() else {
        return Err(Error::attribute(format!("{kind} name cannot be empty")));
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(Error::attribute(format!(
            "{kind} name `{name}` must start with a letter or underscore"
        )));
    }

    if let Some(c) = name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(Error::attribute(format!(
            "{kind} name `{name}` contains invalid character `{c}`"
        )));
    }

    Ok(())
}
