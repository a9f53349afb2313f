use crate::Value;

use towel_core::{schema::Model, stmt::ValueRecord};

use std::{fmt, ops, sync::Arc};

/// One row returned by a query, with values addressable by column name.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    header: Arc<Header>,
    values: Vec<Value>,
}

/// Shared by every row of one result.
#[derive(Debug, PartialEq)]
struct Header {
    model: String,
    columns: Vec<String>,
}

impl Row {
    pub(crate) fn new(header: &RowHeader, values: ValueRecord) -> Self {
        debug_assert_eq!(header.0.columns.len(), values.len());

        Self {
            header: header.0.clone(),
            values: values.into_vec(),
        }
    }

    /// Name of the model the row was read from.
    pub fn model_name(&self) -> &str {
        &self.header.model
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> {
        self.header.columns.iter().map(String::as_str)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.header.columns.iter().position(|column| column == name)?;
        self.values.get(index)
    }

    /// The primary key, if set.
    pub fn id(&self) -> Option<i64> {
        self.get("id").and_then(Value::as_i64)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns().zip(self.values.iter())
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

/// Builds rows for one model.
pub(crate) struct RowHeader(Arc<Header>);

impl RowHeader {
    pub(crate) fn for_model(model: &Model) -> Self {
        RowHeader(Arc::new(Header {
            model: model.name.clone(),
            columns: model.columns.iter().map(|column| column.name.clone()).collect(),
        }))
    }
}

impl ops::Index<&str> for Row {
    type Output = Value;

    #[track_caller]
    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no column `{name}` in {} row", self.header.model),
        }
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<String>, std::vec::IntoIter<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        let columns = self.header.columns.clone();
        columns.into_iter().zip(self.values)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.header.model)?;

        let mut s = "";
        for (name, value) in self.iter() {
            write!(f, "{s}{name}={value}")?;
            s = ", ";
        }

        f.write_str(")")
    }
}
