//! A small ORM: declare models, then create, filter, update and remove rows
//! through parameterized SQL.
//!
//! ```
//! # fn main() -> towel::Result<()> {
//! use towel::{fields, Db, Model};
//!
//! let db = Db::builder()
//!     .register(Model::builder("Fish").varchar("name").integer("age"))
//!     .connect("sqlite::memory:")?;
//!
//! let mut lily = db.new_record("Fish", fields! { "name" => "lily", "age" => 2 })?;
//! lily.save(&db)?;
//!
//! let young = db.objects("Fish")?.filter("age", "<", 10)?.get_all(None)?;
//! assert_eq!(young.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub use db::Db;

mod field_source;
pub use field_source::FieldSource;

mod objects;
pub use objects::Objects;

mod record;
pub use record::Record;

mod row;
pub use row::Row;

pub use towel_core::{
    driver, fields,
    schema::{Model, ModelBuilder},
    stmt::{Type, Value},
    Error, Result,
};
