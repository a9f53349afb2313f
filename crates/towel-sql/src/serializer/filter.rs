use super::{And, Formatter, Params, ToSql};

use towel_core::{
    schema::app::ModelId,
    stmt::{Filter, Join, Predicate},
};

/// `"<table>"."<column>" <op> ?`
impl ToSql for &Predicate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = f.serializer.qualified_column(self.column);
        let value = &self.value;
        fmt!(f, column " " self.op.as_str() " " value);
    }
}

/// `"<joined>"."id" = "<base>"."<foreign key>"`
pub(super) struct JoinOn<'a>(pub(super) &'a Join);

impl ToSql for JoinOn<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let joined = f.serializer.qualified_column(self.0.table.primary_key());
        let foreign_key = f.serializer.qualified_column(self.0.foreign_key);
        fmt!(f, joined " = " foreign_key);
    }
}

/// ` INNER JOIN "<joined>" ON <join predicate>`, if the filter joins.
pub(super) struct InnerJoin<'a>(pub(super) &'a Filter);

impl ToSql for InnerJoin<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(join) = &self.0.join {
            let table = f.serializer.table_name(join.table);
            fmt!(f, " INNER JOIN " table " ON " JoinOn(join));
        }
    }
}

/// ` WHERE <p1> AND <p2> ...`, if the filter has predicates.
pub(super) struct Where<'a>(pub(super) &'a Filter);

impl ToSql for Where<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if !self.0.is_empty() {
            fmt!(f, " WHERE " And(&self.0.predicates));
        }
    }
}

/// `WHERE id = ?`
pub(super) struct ByKey<'a>(pub(super) &'a towel_core::stmt::Value);

impl ToSql for ByKey<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, " WHERE id = " self.0);
    }
}

/// `SELECT "<table>"."id" FROM "<table>" INNER JOIN ... WHERE ...`
pub(super) struct SelectKeys<'a> {
    pub(super) source: ModelId,
    pub(super) filter: &'a Filter,
}

impl ToSql for SelectKeys<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = f.serializer.table_name(self.source);
        let key = f.serializer.qualified_column(self.source.primary_key());
        fmt!(f, "SELECT " key " FROM " table InnerJoin(self.filter) Where(self.filter));
    }
}
