use super::Schema;
use crate::{Error, Result};

use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_primary_keys());

        self.verify_table_names_are_unique()?;
        self.verify_entity_names()?;
        Ok(())
    }

    fn verify_primary_keys(&self) -> bool {
        for model in self.schema.models() {
            let pk = model.primary_key();
            assert!(pk.is_primary_key());
            assert_eq!(pk.name, "id");
            assert_eq!(pk.id.model, model.id);
        }

        true
    }

    fn verify_table_names_are_unique(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for model in self.schema.models() {
            if !seen.insert(model.table_name.as_str()) {
                return Err(Error::attribute(format!(
                    "table {} is used by more than one model",
                    model.table_name
                )));
            }
        }

        Ok(())
    }

    /// Entity names share a namespace with columns when read off a record.
    fn verify_entity_names(&self) -> Result<()> {
        for model in self.schema.models() {
            let mut seen = HashSet::new();

            for (_, fk) in model.foreign_keys() {
                if model.column(&fk.entity_name).is_some() || !seen.insert(&fk.entity_name) {
                    return Err(Error::attribute(format!(
                        "entity name {} is ambiguous on model {}",
                        fk.entity_name, model.name
                    )));
                }
            }
        }

        Ok(())
    }
}
