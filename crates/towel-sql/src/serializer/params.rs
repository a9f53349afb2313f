use super::{Flavor, Formatter, ToSql};

use towel_core::stmt;

/// Collects the values bound to a statement's placeholders, in order.
pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// The 1-based position of a bound value.
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Postgresql => {
                f.dst.push('$');
                f.dst.push_str(&self.0.to_string());
            }
            Flavor::Sqlite => f.dst.push('?'),
        }
    }
}
