#![cfg(feature = "sqlite")]

use tests::prelude::*;

fn fish() -> ModelBuilder {
    Model::builder("Fish").varchar("name").integer("age")
}

#[test]
fn build_requires_a_connection() {
    let err = assert_err!(Db::builder().register(fish()).build(), is_attribute);
    assert_eq!(
        err.to_string(),
        "attribute error: database connection is not defined"
    );
}

#[test]
fn unsupported_urls() {
    for url in ["mysql://localhost/fish", "not a url", "dynamodb://"] {
        assert_err!(
            Db::builder().register(fish()).connect(url),
            is_invalid_connection_url
        );
    }
}

#[test]
fn schema_errors_surface_at_build() {
    // Unknown foreign key target
    assert_err!(
        Db::builder()
            .register(fish().foreign_key("aquarium_id", "Aquarium"))
            .connect("sqlite::memory:"),
        is_attribute
    );

    // Same model twice
    assert_err!(
        Db::builder()
            .register(fish())
            .register(fish())
            .connect("sqlite::memory:"),
        is_attribute
    );

    // `id` is implicit
    assert_err!(
        Db::builder()
            .register(fish().integer("id"))
            .connect("sqlite::memory:"),
        is_attribute
    );
}

#[test]
fn table_name_defaults_and_prefix() {
    let db = assert_ok!(Db::builder()
        .table_name_prefix("app_")
        .register(fish())
        .register(Model::builder("Aquarium").table_name("tanks").varchar("color"))
        .connect("sqlite::memory:"));

    assert_eq!(assert_ok!(db.objects("Fish")).model().table_name, "app_fish");
    assert_eq!(assert_ok!(db.objects("Aquarium")).model().table_name, "app_tanks");
}

#[test]
fn closed_database_fails() {
    let db = assert_ok!(Db::builder().register(fish()).connect("sqlite::memory:"));
    let mut lily = assert_ok!(db.new_record("Fish", fields! { "name" => "lily", "age" => 2 }));
    assert_ok!(lily.save(&db));

    assert_ok!(db.close());
    assert_err!(assert_ok!(db.objects("Fish")).count(), is_operational);
}

#[test]
fn records_stay_with_their_database() {
    let db = assert_ok!(Db::builder().register(fish()).connect("sqlite::memory:"));
    let other = assert_ok!(Db::builder()
        .register(Model::builder("Aquarium").varchar("color"))
        .connect("sqlite::memory:"));

    let mut lily = assert_ok!(db.new_record("Fish", fields! { "name" => "lily", "age" => 2 }));
    assert_err!(lily.save(&other), is_attribute);
    assert_none!(lily.id());

    assert_ok!(lily.save(&db));
    assert_err!(lily.update(&other, fields! { "age" => 3 }), is_attribute);
    let err = assert_err!(lily.remove(&other), is_attribute);
    assert!(err.to_string().contains("another database"), "{err}");

    assert_eq!(lily.get("age"), Some(&Value::from(2)));
    assert_eq!(assert_ok!(assert_ok!(db.objects("Fish")).count()), 1);
    assert_err!(assert_ok!(other.objects("Aquarium")).count(), is_operational);
}
