use crate::{
    objects::{dangling, failed},
    row::RowHeader,
    Db, FieldSource, Result, Row,
};

use towel_core::{
    driver::operation::QuerySql,
    schema::{app::ModelId, Column, Field, Model},
    stmt::{Expr, Insert, Statement, Type, UpdateByKey, Value, ValueRecord},
    Error, Schema,
};

use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// One row of a model held in memory.
///
/// A record owns a value for every column of its model, including `id`,
/// which stays null until the record is saved. Values are type checked on
/// every assignment.
///
/// Records referenced through foreign keys are looked up when the record is
/// built and exposed by entity name through [`Record::entity`].
#[derive(Clone)]
pub struct Record {
    schema: Arc<Schema>,
    model: ModelId,
    fields: Vec<Field>,
    entities: IndexMap<String, Record>,
}

impl Record {
    pub(crate) fn new(db: &Db, model: &Model, fields: impl FieldSource) -> Result<Record> {
        let mut record = Record::empty(db.schema().clone(), model);

        for (name, value) in fields.into_fields() {
            let column = model.expect_column(&name)?;
            record.fields[column.id.index].set(value)?;
        }

        record.resolve_entities(db)?;
        Ok(record)
    }

    /// Builds a record from a row read from the database, without resolving
    /// foreign keys.
    pub(crate) fn from_values(
        schema: Arc<Schema>,
        model: &Model,
        values: ValueRecord,
    ) -> Result<Record> {
        let mut record = Record::empty(schema, model);

        for (field, value) in record.fields.iter_mut().zip(values) {
            field.set(value)?;
        }

        Ok(record)
    }

    fn empty(schema: Arc<Schema>, model: &Model) -> Record {
        Record {
            fields: model.columns.iter().map(Column::field).collect(),
            model: model.id,
            entities: IndexMap::new(),
            schema,
        }
    }

    /// Looks up the record each non-null foreign key references.
    pub(crate) fn resolve_entities(&mut self, db: &Db) -> Result<()> {
        let schema = self.schema.clone();
        let model = schema.model(self.model);

        self.entities.clear();

        for (column, fk) in model.foreign_keys() {
            let Some(id) = self.fields[column.id.index].value().as_i64() else {
                continue;
            };

            if let Some(entity) = db.objects_for(fk.target).lookup(id)? {
                self.entities.insert(fk.entity_name.clone(), entity);
            }
        }

        Ok(())
    }

    pub fn model(&self) -> &Model {
        self.schema.model(self.model)
    }

    /// The primary key, if the record has one.
    pub fn id(&self) -> Option<i64> {
        self.fields[0].value().as_i64()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let column = self.model().column(name)?;
        Some(self.fields[column.id.index].value())
    }

    /// Assigns one field in memory. Nothing is written until the record is
    /// saved.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let index = self.model().expect_column(name)?.id.index;
        self.fields[index].set(value)
    }

    /// The record referenced by the foreign key exposed as `name`.
    pub fn entity(&self, name: &str) -> Option<&Record> {
        self.entities.get(name)
    }

    pub fn to_row(&self) -> Row {
        let header = RowHeader::for_model(self.model());
        let values = self.fields.iter().map(|field| field.value().clone()).collect();
        Row::new(&header, values)
    }

    /// Inserts the record, creating the table first if needed, and stores the
    /// assigned primary key.
    ///
    /// Fails if a row with the record's `id` already exists. The `id` itself
    /// is never sent; the database assigns a fresh one.
    pub fn save(&mut self, db: &Db) -> Result<()> {
        self.check_db(db)?;

        let schema = self.schema.clone();
        let model = schema.model(self.model);
        let objects = db.objects_for(self.model);

        objects.create_table()?;

        if let Some(id) = self.id() {
            if objects.fetch(id)?.is_some() {
                return Err(Error::operational(format!(
                    "{} with id {id} already exists",
                    model.name
                )));
            }
        }

        let (columns, values): (Vec<_>, Vec<_>) = model
            .data_columns()
            .map(|column| {
                let value = self.fields[column.id.index].value().clone();
                (column.id, Expr::from(value))
            })
            .unzip();

        let insert = Insert {
            target: model.id,
            columns,
            values,
            returning: true,
        };

        let id = db
            .exec(QuerySql::query(insert, vec![Type::Integer]))
            .and_then(|response| response.rows.into_scalar_i64())
            .map_err(|err| dangling(err, model))?;

        self.fields[0].set(id)?;
        tracing::debug!(model = %model.name, id, "saved record");

        db.commit()
    }

    /// Assigns `fields` and writes them to the record's row.
    ///
    /// The record is left untouched if any field is rejected or the
    /// statement fails.
    pub fn update(&mut self, db: &Db, fields: impl FieldSource) -> Result<()> {
        self.check_db(db)?;
        let objects = db.objects_for(self.model);
        let assignments = objects.assignments(fields)?;

        let Some(id) = self.id() else {
            return Err(Error::operational(format!(
                "{} has not been saved",
                self.model().name
            )));
        };

        objects.ensure_table()?;

        let mut updated = self.clone();
        for assignment in &assignments {
            updated.fields[assignment.column.index].set(assignment.value.clone())?;
        }

        let stmt = UpdateByKey {
            target: self.model,
            assignments,
            key: Value::from(id),
        };

        db.execute(stmt)
            .map_err(|err| failed(err, format!("failed to update {} {id}", self.model().name)))?;
        db.commit()?;

        updated.resolve_entities(db)?;
        *self = updated;
        Ok(())
    }

    /// Deletes the record's row and clears its `id`.
    pub fn remove(&mut self, db: &Db) -> Result<()> {
        self.check_db(db)?;

        let Some(id) = self.id() else {
            return Err(Error::operational(format!(
                "{} has not been saved",
                self.model().name
            )));
        };

        db.objects_for(self.model).ensure_table()?;

        db.execute(Statement::delete_by_key(self.model, id))
            .map_err(|err| failed(err, format!("failed to remove {} {id}", self.model().name)))?;
        db.commit()?;

        self.fields[0].set(Value::Null)?;
        Ok(())
    }

    /// Records only persist through the database whose schema built them.
    fn check_db(&self, db: &Db) -> Result<()> {
        if Arc::ptr_eq(&self.schema, db.schema()) {
            Ok(())
        } else {
            Err(Error::attribute(format!(
                "{} record belongs to another database",
                self.model().name
            )))
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Record) -> bool {
        self.model == other.model && self.fields == other.fields
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_row(), f)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model();

        let mut s = f.debug_struct(&model.name);
        for (column, field) in model.columns.iter().zip(&self.fields) {
            s.field(&column.name, field.value());
        }
        for (name, entity) in &self.entities {
            s.field(name, entity);
        }
        s.finish()
    }
}
