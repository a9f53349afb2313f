use crate::{row::RowHeader, Db, FieldSource, Record, Result, Row};

use towel_core::{
    schema::{app::ModelId, Column, Model, JOIN_SEPARATOR},
    stmt::{
        Assignments, BinaryOp, Delete, Filter, Insert, Join, Predicate, Query, Statement,
        Update, Value, ValueRecord,
    },
    Error,
};

/// Query builder bound to one model.
///
/// Filters accumulate by chaining [`Objects::filter`], which consumes the
/// builder and returns it. The terminal operations [`Objects::get_all`],
/// [`Objects::update`] and [`Objects::remove`] consume the builder as well,
/// so accumulated predicates are used by exactly one statement.
///
/// ```
/// # fn main() -> towel::Result<()> {
/// # use towel::{fields, Db, Model};
/// # let db = Db::builder()
/// #     .register(Model::builder("Fish").varchar("name").integer("age"))
/// #     .connect("sqlite::memory:")?;
/// let fish = db.objects("Fish")?;
/// fish.save_from_sequence([
///     fields! { "name" => "lily", "age" => 2 },
///     fields! { "name" => "sam", "age" => 3 },
/// ])?;
///
/// let removed = db.objects("Fish")?.filter("age", ">", 2)?.remove()?;
/// assert_eq!(removed, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Objects<'a> {
    db: &'a Db,
    model: &'a Model,
    filter: Filter,
}

impl<'a> Objects<'a> {
    pub(crate) fn new(db: &'a Db, model: &'a Model) -> Self {
        Self {
            db,
            model,
            filter: Filter::default(),
        }
    }

    pub fn model(&self) -> &'a Model {
        self.model
    }

    /// Query builder for the model a foreign key exposes as `entity_name`.
    pub fn entity(&self, entity_name: &str) -> Result<Objects<'a>> {
        let Some((_, fk)) = self.model.foreign_key_by_entity(entity_name) else {
            return Err(Error::attribute(format!(
                "{entity_name} is not an entity of model {}",
                self.model.name
            )));
        };

        Ok(self.db.objects_for(fk.target))
    }

    /// Creates the model's table unless it already exists, along with the
    /// tables its foreign keys reference.
    pub fn create_table(&self) -> Result<()> {
        self.create_tables(&mut vec![])?;
        self.db.commit()
    }

    fn create_tables(&self, visited: &mut Vec<ModelId>) -> Result<()> {
        if visited.contains(&self.model.id) {
            return Ok(());
        }
        visited.push(self.model.id);

        for (_, fk) in self.model.foreign_keys() {
            self.db.objects_for(fk.target).create_tables(visited)?;
        }

        if !self.table_exists()? {
            self.db.execute(Statement::create_table(self.model.id))?;
            tracing::info!(model = %self.model.name, table = %self.model.table_name, "created table");
        }

        Ok(())
    }

    pub fn table_exists(&self) -> Result<bool> {
        Ok(self.db.query_scalar(Statement::table_exists(self.model.id))? > 0)
    }

    /// Number of rows in the table. Accumulated filters are not applied.
    pub fn count(&self) -> Result<u64> {
        self.ensure_table()?;
        let count = self.db.query_scalar(Statement::count(self.model.id))?;
        Ok(count.max(0) as u64)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }

    /// Looks up a record by primary key. A missing row is `None`, not an
    /// error.
    pub fn get(&self, id: i64) -> Result<Option<Record>> {
        self.ensure_table()?;

        let Some(values) = self.fetch(id)? else {
            return Ok(None);
        };

        let mut record = Record::from_values(self.db.schema().clone(), self.model, values)?;
        record.resolve_entities(self.db)?;
        Ok(Some(record))
    }

    /// Adds the predicate `column op value`, conjoined with earlier ones.
    ///
    /// `column` is either a column of this model or
    /// `<foreign_key>__<column>`, naming a column of the model the foreign
    /// key references. A chain joins at most one referenced table.
    pub fn filter(mut self, column: &str, op: &str, value: impl Into<Value>) -> Result<Self> {
        let op: BinaryOp = op.parse()?;
        let value = value.into();
        let column = self.filter_column(column)?;

        if !value.is_a(column.ty.primitive()) {
            return Err(Error::invalid_value(format!(
                "value {value} is illegal for column {} of type {}",
                column.name,
                column.ty.name(),
            )));
        }

        tracing::debug!(model = %self.model.name, column = %column.name, %op, "filter");

        self.filter.push(Predicate::new(column.id, op, value));
        Ok(self)
    }

    fn filter_column(&mut self, name: &str) -> Result<&'a Column> {
        let Some((fk_name, target_name)) = name.split_once(JOIN_SEPARATOR) else {
            return self.model.expect_column(name);
        };

        if fk_name.is_empty() || target_name.is_empty() || target_name.contains(JOIN_SEPARATOR) {
            return Err(Error::invalid_value(format!(
                "malformed join column {name:?}; expected <foreign_key>{JOIN_SEPARATOR}<column>"
            )));
        }

        let fk_column = self.model.expect_column(fk_name)?;
        let Some(fk) = fk_column.ty.as_foreign_key() else {
            return Err(Error::invalid_value(format!(
                "{fk_name} is not a foreign key of model {}",
                self.model.name
            )));
        };

        if fk.target == self.model.id {
            return Err(Error::attribute(format!(
                "{fk_name} references model {} itself and cannot be joined",
                self.model.name
            )));
        }

        let target = self.db.schema().model(fk.target);
        let column = target.expect_column(target_name)?;

        let join = Join {
            table: fk.target,
            foreign_key: fk_column.id,
        };

        match self.filter.join {
            Some(existing) if existing != join => {
                let joined = self.model.column_by_id(existing.foreign_key);
                return Err(Error::attribute(format!(
                    "query on {} already joins through {}; cannot also join through {fk_name}",
                    self.model.name, joined.name,
                )));
            }
            _ => self.filter.join = Some(join),
        }

        Ok(column)
    }

    /// Rows matching the accumulated filters, at most `limit` of them.
    pub fn get_all(self, limit: Option<i64>) -> Result<Vec<Row>> {
        if let Some(limit) = limit.filter(|limit| *limit < 0) {
            return Err(Error::attribute(format!(
                "limit must be a non-negative integer, got {limit}"
            )));
        }

        self.ensure_table()?;

        let mut query = Query::filter(self.model.id, self.filter);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let header = RowHeader::for_model(self.model);
        let rows = self.db.query(query, self.model.column_types())?;

        Ok(rows
            .into_iter()
            .map(|values| Row::new(&header, values))
            .collect())
    }

    /// Sets `fields` on every row matching the accumulated filters. Returns
    /// the number of updated rows.
    pub fn update(self, fields: impl FieldSource) -> Result<u64> {
        if self.filter.is_joined() {
            return Err(Error::operational(format!(
                "joined updates are not supported (model {})",
                self.model.name
            )));
        }

        let assignments = self.assignments(fields)?;
        self.ensure_table()?;

        let model = self.model;
        let stmt = Update {
            target: model.id,
            assignments,
            filter: self.filter,
        };

        let count = self
            .db
            .execute(stmt)
            .map_err(|err| failed(err, format!("failed to update {}", model.name)))?;

        self.db.commit()?;
        Ok(count)
    }

    /// Deletes every row matching the accumulated filters. Returns the number
    /// of deleted rows.
    pub fn remove(self) -> Result<u64> {
        self.ensure_table()?;

        let model = self.model;
        let stmt = Delete {
            from: model.id,
            filter: self.filter,
        };

        let count = self
            .db
            .execute(stmt)
            .map_err(|err| failed(err, format!("failed to remove {}", model.name)))?;

        self.db.commit()?;
        Ok(count)
    }

    /// Inserts one row per item, creating the table if needed.
    ///
    /// Every item must provide a value for each column except `id`. Items
    /// are checked before anything is inserted.
    pub fn save_from_sequence<S>(&self, items: impl IntoIterator<Item = S>) -> Result<u64>
    where
        S: FieldSource,
    {
        let columns: Vec<&Column> = self.model.data_columns().collect();

        let mut rows = vec![];
        for (i, item) in items.into_iter().enumerate() {
            let mut values = Vec::with_capacity(columns.len());

            for column in &columns {
                let Some(value) = item.field(&column.name) else {
                    return Err(Error::attribute(format!(
                        "item {i} has no field {} required by model {}",
                        column.name, self.model.name
                    )));
                };

                column.verify(&value)?;
                values.push(value);
            }

            rows.push(ValueRecord::from_vec(values));
        }

        self.create_table()?;

        if rows.is_empty() {
            return Ok(0);
        }

        let len = rows.len();
        let stmt = Insert::batch(self.model.id, columns.iter().map(|c| c.id).collect());
        let count = self
            .db
            .execute_many(stmt, rows)
            .map_err(|err| dangling(err, self.model))?;

        tracing::debug!(model = %self.model.name, rows = len, "saved sequence");

        self.db.commit()?;
        Ok(count)
    }

    /// Creates an unsaved record from named field values.
    pub fn new_record(&self, fields: impl FieldSource) -> Result<Record> {
        Record::new(self.db, self.model, fields)
    }

    /// Creates an unsaved record from a row read earlier.
    pub fn from_row(&self, row: &Row) -> Result<Record> {
        self.new_record(row)
    }

    /// Validates named values as `SET` assignments for this model.
    pub(crate) fn assignments(&self, fields: impl FieldSource) -> Result<Assignments> {
        let fields = fields.into_fields();

        if fields.iter().any(|(name, _)| name == "id") {
            return Err(Error::attribute(format!(
                "id of model {} cannot be updated",
                self.model.name
            )));
        }

        let mut assignments = Assignments::default();
        for (name, value) in fields {
            let column = self.model.expect_column(&name)?;
            column.verify(&value)?;
            assignments.set(column.id, value);
        }

        if assignments.is_empty() {
            return Err(Error::attribute(format!(
                "no fields to update on model {}",
                self.model.name
            )));
        }

        Ok(assignments)
    }

    pub(crate) fn ensure_table(&self) -> Result<()> {
        if self.table_exists()? {
            Ok(())
        } else {
            Err(Error::operational(format!(
                "table {:?} doesn't exist",
                self.model.table_name
            )))
        }
    }

    /// The row with primary key `id`.
    pub(crate) fn fetch(&self, id: i64) -> Result<Option<ValueRecord>> {
        let stmt = Statement::get_by_key(self.model.id, id);
        let mut rows = self.db.query(stmt, self.model.column_types())?;
        Ok(rows.pop())
    }

    /// Like [`Objects::get`], but a missing table is `None` and the record's
    /// own foreign keys are left unresolved.
    pub(crate) fn lookup(&self, id: i64) -> Result<Option<Record>> {
        if !self.table_exists()? {
            return Ok(None);
        }

        self.fetch(id)?
            .map(|values| Record::from_values(self.db.schema().clone(), self.model, values))
            .transpose()
    }
}

/// Wraps a driver failure of an update or delete.
pub(crate) fn failed(err: Error, message: String) -> Error {
    tracing::warn!(%err, "{message}");
    err.context(Error::operational(message))
}

/// Reports a foreign key referencing a missing row as an attribute error.
pub(crate) fn dangling(err: Error, model: &Model) -> Error {
    if !err.is_foreign_key_violation() {
        return err;
    }

    tracing::warn!(%err, model = %model.name, "foreign key violation");
    err.context(Error::attribute(format!(
        "a foreign key of {} references a row that does not exist",
        model.name
    )))
}
