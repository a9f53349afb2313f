use super::{Formatter, Params, Placeholder, ToSql};

use towel_core::stmt;

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
    }
}

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Expr::Value(value) => value.to_sql(f),
            // Bound per batch row by the driver, so nothing is pushed here.
            stmt::Expr::Arg(position) => fmt!(f, Placeholder(position + 1)),
        }
    }
}
