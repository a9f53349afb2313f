use towel::{db::Builder, driver::Connection};

use crate::{isolation::TestIsolation, Setup};

/// Tests share one database; each gets its own table-name prefix.
pub struct SetupPostgreSQL {
    isolation: TestIsolation,
}

impl SetupPostgreSQL {
    pub fn new() -> Self {
        Self {
            isolation: TestIsolation::new(),
        }
    }
}

impl Default for SetupPostgreSQL {
    fn default() -> Self {
        Self::new()
    }
}

fn url() -> String {
    std::env::var("TOWEL_TEST_POSTGRES_URL")
        .unwrap_or_else(|_| "postgresql://localhost:5432/towel_test".to_string())
}

impl Setup for SetupPostgreSQL {
    fn connect(&self) -> towel::Result<Box<dyn Connection>> {
        towel::db::connect(&url())
    }

    fn configure_builder(&self, builder: &mut Builder) {
        builder.table_name_prefix(&self.isolation.table_prefix());
    }

    fn cleanup_my_tables(&self) -> towel::Result<()> {
        cleanup_postgresql_tables(&self.isolation)
            .map_err(|e| towel_core::err!("PostgreSQL cleanup failed: {e}"))
    }
}

fn cleanup_postgresql_tables(
    isolation: &TestIsolation,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut client = postgres::Client::connect(&url(), postgres::NoTls)?;

    let rows = client.query(
        "SELECT table_name::text FROM information_schema.tables
         WHERE table_schema = 'public' AND table_name LIKE $1",
        &[&format!("{}%", isolation.table_prefix())],
    )?;

    for row in rows {
        let table_name: String = row.get(0);
        if !isolation.owns_table(&table_name) {
            continue;
        }

        let query = format!("DROP TABLE IF EXISTS \"{table_name}\" CASCADE");
        let _ = client.execute(&query, &[]);
    }

    Ok(())
}
