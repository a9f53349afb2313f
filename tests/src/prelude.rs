//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::{assert_eq_unordered, models, tests, DbTest};

pub use std_util::prelude::*;

pub use towel::{fields, Db, Model, ModelBuilder, Record, Row, Value};
