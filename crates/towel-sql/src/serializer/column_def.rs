use super::{Flavor, Formatter, Params, ToSql};

use towel_core::schema::{Column, FieldTy};

/// `<name> <type>` inside `CREATE TABLE`.
pub(super) struct ColumnDef<'a>(pub(super) &'a Column);

impl ToSql for ColumnDef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = self.0;

        if column.is_primary_key() {
            // SQLite only assigns row ids automatically for this exact form.
            match f.serializer.flavor {
                Flavor::Postgresql => fmt!(f, "id SERIAL PRIMARY KEY"),
                Flavor::Sqlite => fmt!(f, "id INTEGER PRIMARY KEY"),
            }
            return;
        }

        let name = f.serializer.column_name(column.id);
        fmt!(f, name " ");

        match &column.ty {
            FieldTy::Integer => fmt!(f, "int"),
            // PostgreSQL `real` is single precision.
            FieldTy::Real => match f.serializer.flavor {
                Flavor::Postgresql => fmt!(f, "double precision"),
                Flavor::Sqlite => fmt!(f, "real"),
            },
            FieldTy::Text { length } => {
                let ty = match f.serializer.flavor {
                    Flavor::Postgresql => "varchar(",
                    Flavor::Sqlite => "text(",
                };
                fmt!(f, ty length.to_string().as_str() ")");
            }
            FieldTy::Date => fmt!(f, "date"),
            FieldTy::ForeignKey(fk) => {
                let target = f.serializer.table_name(fk.target);
                fmt!(f, "int references " target "(id)");
            }
        }
    }
}
