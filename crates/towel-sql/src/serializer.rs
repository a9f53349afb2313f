#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{And, Comma};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod filter;
mod statement;
mod value;

use towel_core::{
    schema::{
        app::{ColumnId, ModelId},
        Schema,
    },
    stmt::Statement,
};

/// Serialize a statement to a SQL string
///
/// Only schema-declared names are written into the SQL text; every value is
/// pushed to `params` and replaced by a placeholder.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which the statement is to be serialized
    schema: &'a Schema,

    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    fn table_name(&self, id: impl Into<ModelId>) -> Ident<&'a str> {
        let schema: &'a Schema = self.schema;
        Ident(schema.model(id).table_name.as_str())
    }

    fn column_name(&self, id: ColumnId) -> Ident<&'a str> {
        let schema: &'a Schema = self.schema;
        Ident(schema.column(id).name.as_str())
    }

    /// `"<table>"."<column>"`
    fn qualified_column(&self, id: ColumnId) -> Qualified<'a> {
        Qualified {
            table: self.table_name(id.model),
            column: self.column_name(id),
        }
    }
}

struct Qualified<'a> {
    table: Ident<&'a str>,
    column: Ident<&'a str>,
}

impl ToSql for Qualified<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, self.table "." self.column);
    }
}
