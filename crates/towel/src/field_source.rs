use crate::{Record, Row, Value};

use indexmap::IndexMap;
use std::collections::HashMap;

/// Anything that exposes named field values: the input of
/// [`Objects::new_record`](crate::Objects::new_record), the `update`
/// operations and [`Objects::save_from_sequence`](crate::Objects::save_from_sequence).
pub trait FieldSource {
    /// The value of the named field, if the source has one.
    fn field(&self, name: &str) -> Option<Value>;

    /// Every field of the source, in its own order.
    fn into_fields(self) -> Vec<(String, Value)>;
}

impl FieldSource for Vec<(&str, Value)> {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_slice().field(name)
    }

    fn into_fields(self) -> Vec<(String, Value)> {
        self.into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }
}

impl FieldSource for &[(&str, Value)] {
    fn field(&self, name: &str) -> Option<Value> {
        self.iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.clone())
    }

    fn into_fields(self) -> Vec<(String, Value)> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

impl<const N: usize> FieldSource for [(&str, Value); N] {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_slice().field(name)
    }

    fn into_fields(self) -> Vec<(String, Value)> {
        self.as_slice().into_fields()
    }
}

impl FieldSource for IndexMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn into_fields(self) -> Vec<(String, Value)> {
        self.into_iter().collect()
    }
}

impl FieldSource for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn into_fields(self) -> Vec<(String, Value)> {
        self.into_iter().collect()
    }
}

impl FieldSource for Row {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn into_fields(self) -> Vec<(String, Value)> {
        self.into_iter().collect()
    }
}

impl FieldSource for &Row {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn into_fields(self) -> Vec<(String, Value)> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

impl FieldSource for &Record {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn into_fields(self) -> Vec<(String, Value)> {
        self.to_row().into_fields()
    }
}
