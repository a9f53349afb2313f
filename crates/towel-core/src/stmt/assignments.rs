use super::Value;
use crate::schema::app::ColumnId;

/// The `SET` list of an update, in caller order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Assignments {
    assignments: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: ColumnId,
    pub value: Value,
}

impl Assignments {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Sets `column`, replacing an earlier assignment to the same column.
    pub fn set(&mut self, column: ColumnId, value: impl Into<Value>) {
        let value = value.into();
        match self.assignments.iter_mut().find(|a| a.column == column) {
            Some(existing) => existing.value = value,
            None => self.assignments.push(Assignment { column, value }),
        }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Assignment> + '_ {
        self.assignments.iter()
    }
}

impl<'a> IntoIterator for &'a Assignments {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
