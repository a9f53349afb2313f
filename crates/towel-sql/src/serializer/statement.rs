use super::{
    column_def::ColumnDef,
    filter::{ByKey, InnerJoin, JoinOn, SelectKeys, Where},
    And, Comma, Flavor, Formatter, Params, ToSql,
};

use towel_core::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Count(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DeleteByKey(stmt) => stmt.to_sql(f),
            Statement::GetByKey(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
            Statement::TableExists(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::UpdateByKey(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Count {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = f.serializer.table_name(self.source);
        fmt!(f, "SELECT COUNT(*) FROM " table);
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let model = f.serializer.schema.model(self.model);
        let table = f.serializer.table_name(self.model);
        let columns = Comma(model.columns.iter().map(ColumnDef));

        fmt!(f, "CREATE TABLE " table " (" columns ")");
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = f.serializer.table_name(self.from);

        let Some(join) = &self.filter.join else {
            fmt!(f, "DELETE FROM " table Where(&self.filter));
            return;
        };

        match f.serializer.flavor {
            Flavor::Postgresql => {
                let joined = f.serializer.table_name(join.table);
                fmt!(f, "DELETE FROM " table " USING " joined " WHERE " JoinOn(join));

                if !self.filter.is_empty() {
                    fmt!(f, " AND " And(&self.filter.predicates));
                }
            }
            // No `DELETE ... USING`; select the doomed keys instead.
            Flavor::Sqlite => {
                let key = f.serializer.qualified_column(self.from.primary_key());
                let keys = SelectKeys {
                    source: self.from,
                    filter: &self.filter,
                };
                fmt!(f, "DELETE FROM " table " WHERE " key " IN (" keys ")");
            }
        }
    }
}

impl ToSql for &stmt::DeleteByKey {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = f.serializer.table_name(self.from);
        fmt!(f, "DELETE FROM " table ByKey(&self.key));
    }
}

impl ToSql for &stmt::GetByKey {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = f.serializer.table_name(self.source);
        fmt!(f, "SELECT * FROM " table ByKey(&self.key));
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = f.serializer.table_name(self.target);
        let returning = if self.returning { " RETURNING id" } else { "" };

        if self.columns.is_empty() {
            fmt!(f, "INSERT INTO " table " DEFAULT VALUES" returning);
            return;
        }

        let serializer = f.serializer;
        let columns = Comma(self.columns.iter().map(|id| serializer.column_name(*id)));
        let values = Comma(&self.values);

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")" returning);
    }
}

impl ToSql for &stmt::Query {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = f.serializer.table_name(self.source);

        fmt!(f, "SELECT " table ".* FROM " table InnerJoin(&self.filter) Where(&self.filter));

        if let Some(limit) = &self.limit {
            fmt!(f, " LIMIT " limit);
        }
    }
}

impl ToSql for &stmt::TableExists {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = stmt::Value::from(&f.serializer.schema.model(self.model).table_name);
        let table_name = &table_name;

        match f.serializer.flavor {
            Flavor::Postgresql => fmt!(
                f,
                "SELECT COUNT(*) FROM information_schema.tables \
                 WHERE table_schema = current_schema() AND table_name = " table_name
            ),
            Flavor::Sqlite => fmt!(
                f,
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = " table_name
            ),
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        assert!(!self.filter.is_joined(), "joined updates cannot be serialized");

        let table = f.serializer.table_name(self.target);
        let assignments = &self.assignments;
        fmt!(f, "UPDATE " table " SET " assignments Where(&self.filter));
    }
}

impl ToSql for &stmt::UpdateByKey {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = f.serializer.table_name(self.target);
        let assignments = &self.assignments;
        fmt!(f, "UPDATE " table " SET " assignments ByKey(&self.key));
    }
}

/// `"<col>" = ?, ...`
impl ToSql for &stmt::Assignments {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let mut s = "";
        for assignment in self {
            let column = f.serializer.column_name(assignment.column);
            let value = &assignment.value;
            fmt!(f, s column " = " value);
            s = ", ";
        }
    }
}
