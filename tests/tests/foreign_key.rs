use tests::prelude::*;

fn aquarium() -> ModelBuilder {
    Model::builder("Aquarium").varchar("color").real("price")
}

fn fish() -> ModelBuilder {
    Model::builder("Fish")
        .varchar("name")
        .integer("age")
        .foreign_key_as("aquarium_id", "Aquarium", "aquarium")
}

struct Tank {
    green: i64,
    blue: i64,
}

fn populate(db: &Db) -> Tank {
    let mut green = assert_ok!(db.new_record(
        "Aquarium",
        fields! { "color" => "green", "price" => 10.5 }
    ));
    let mut blue = assert_ok!(db.new_record(
        "Aquarium",
        fields! { "color" => "blue", "price" => 20.0 }
    ));
    assert_ok!(green.save(db));
    assert_ok!(blue.save(db));

    let tank = Tank {
        green: green.id().unwrap(),
        blue: blue.id().unwrap(),
    };

    assert_ok!(assert_ok!(db.objects("Fish")).save_from_sequence([
        fields! { "name" => "lily", "age" => 2, "aquarium_id" => tank.green },
        fields! { "name" => "sam", "age" => 3, "aquarium_id" => tank.blue },
        fields! { "name" => "dody clark", "age" => 432, "aquarium_id" => tank.green },
        fields! { "name" => "loner", "age" => 7, "aquarium_id" => Value::Null },
    ]));

    tank
}

fn names(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row["name"].as_str().unwrap().to_string())
        .collect()
}

fn filter_through_foreign_key(test: &mut DbTest) {
    let db = test.setup_db(models!(aquarium(), fish()));
    populate(&db);

    let rows = assert_ok!(assert_ok!(assert_ok!(db.objects("Fish"))
        .filter("aquarium_id__color", "=", "green"))
    .get_all(None));
    assert_eq_unordered!(names(&rows), ["lily", "dody clark"]);

    // Joined rows only carry the queried model's columns
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), ["id", "name", "age", "aquarium_id"]);
}

fn join_filters_share_one_join(test: &mut DbTest) {
    let db = test.setup_db(models!(aquarium(), fish()));
    populate(&db);

    let rows = assert_ok!(assert_ok!(db.objects("Fish"))
        .filter("aquarium_id__color", "=", "green")
        .and_then(|fish| fish.filter("aquarium_id__price", "<", 15.0))
        .and_then(|fish| fish.filter("age", "<", 10))
        .and_then(|fish| fish.get_all(None)));
    assert_eq!(names(&rows), ["lily"]);
}

fn remove_through_foreign_key(test: &mut DbTest) {
    let db = test.setup_db(models!(aquarium(), fish()));
    populate(&db);

    let removed = assert_ok!(assert_ok!(assert_ok!(db.objects("Fish"))
        .filter("aquarium_id__color", "=", "green"))
    .remove());
    assert_eq!(removed, 2);

    let rest = assert_ok!(assert_ok!(db.objects("Fish")).get_all(None));
    assert_eq_unordered!(names(&rest), ["sam", "loner"]);

    assert_eq!(assert_ok!(assert_ok!(db.objects("Aquarium")).count()), 2);
}

fn joined_update_is_rejected(test: &mut DbTest) {
    let db = test.setup_db(models!(aquarium(), fish()));
    populate(&db);

    let fish = assert_ok!(assert_ok!(db.objects("Fish")).filter("aquarium_id__color", "=", "blue"));
    assert_err!(fish.update(fields! { "age" => 1 }), is_operational);
}

fn entities_are_resolved(test: &mut DbTest) {
    let db = test.setup_db(models!(aquarium(), fish()));
    let tank = populate(&db);

    let rows = assert_ok!(assert_ok!(assert_ok!(db.objects("Fish")).filter("name", "=", "lily")).get_all(None));
    let lily = assert_some!(assert_ok!(assert_ok!(db.objects("Fish")).get(rows[0].id().unwrap())));

    let home = assert_some!(lily.entity("aquarium"));
    assert_eq!(home.id(), Some(tank.green));
    assert_eq!(home.get("color"), Some(&Value::from("green")));
    assert_none!(lily.entity("foreign_entity"));

    let loner = assert_ok!(db.new_record("Fish", fields! { "name" => "loner" }));
    assert_none!(loner.entity("aquarium"));

    // Updating the foreign key re-resolves the entity
    let mut lily = lily;
    assert_ok!(lily.update(&db, fields! { "aquarium_id" => tank.blue }));
    assert_eq!(
        lily.entity("aquarium").and_then(|home| home.get("color")),
        Some(&Value::from("blue"))
    );
}

fn dangling_foreign_key_is_an_attribute_error(test: &mut DbTest) {
    let db = test.setup_db(models!(aquarium(), fish()));
    populate(&db);

    let mut stray = assert_ok!(db.new_record(
        "Fish",
        fields! { "name" => "stray", "age" => 1, "aquarium_id" => 999 }
    ));
    assert_none!(stray.entity("aquarium"));

    assert_err!(stray.save(&db), is_attribute);
    assert_none!(stray.id());

    assert_err!(
        assert_ok!(db.objects("Fish")).save_from_sequence([
            fields! { "name" => "stray", "age" => 1, "aquarium_id" => 999 },
        ]),
        is_attribute
    );

    assert_eq!(assert_ok!(assert_ok!(db.objects("Fish")).count()), 4);
}

fn malformed_join_columns(test: &mut DbTest) {
    let db = test.setup_db(models!(aquarium(), fish()));
    let fish = assert_ok!(db.objects("Fish"));

    // Unknown foreign key or target column
    assert_err!(fish.clone().filter("tank__color", "=", "green"), is_attribute);
    assert_err!(fish.clone().filter("aquarium_id__size", "=", 3), is_attribute);

    // Not a foreign key, or not `<fk>__<column>`
    assert_err!(fish.clone().filter("name__color", "=", "green"), is_invalid_value);
    assert_err!(fish.clone().filter("aquarium_id__", "=", "green"), is_invalid_value);
    assert_err!(fish.clone().filter("__color", "=", "green"), is_invalid_value);
    assert_err!(
        fish.clone().filter("aquarium_id__color__name", "=", "green"),
        is_invalid_value
    );

    // Value must fit the target column
    assert_err!(fish.filter("aquarium_id__price", "<", "cheap"), is_invalid_value);
}

fn one_join_per_query(test: &mut DbTest) {
    let db = test.setup_db(models!(
        aquarium(),
        Model::builder("Fish")
            .varchar("name")
            .foreign_key_as("home_id", "Aquarium", "home")
            .foreign_key_as("spare_id", "Aquarium", "spare"),
    ));

    let fish = assert_ok!(assert_ok!(db.objects("Fish")).filter("home_id__color", "=", "green"));
    assert_err!(fish.filter("spare_id__color", "=", "blue"), is_attribute);
}

fn create_table_creates_referenced_tables(test: &mut DbTest) {
    let db = test.setup_db(models!(aquarium(), fish()));

    assert_ok!(assert_ok!(db.objects("Fish")).create_table());
    assert!(assert_ok!(assert_ok!(db.objects("Aquarium")).table_exists()));
}

fn entity_reaches_the_referenced_model(test: &mut DbTest) {
    let db = test.setup_db(models!(aquarium(), fish()));
    let tank = populate(&db);

    let fish = assert_ok!(db.objects("Fish"));
    let aquariums = assert_ok!(fish.entity("aquarium"));
    assert_eq!(aquariums.model().name, "Aquarium");

    let green = assert_some!(assert_ok!(aquariums.get(tank.green)));
    assert_eq!(green.get("color"), Some(&Value::from("green")));

    assert_err!(fish.entity("aquarium_id"), is_attribute);
    assert_err!(fish.entity("tank"), is_attribute);
}

tests!(
    filter_through_foreign_key,
    join_filters_share_one_join,
    remove_through_foreign_key,
    joined_update_is_rejected,
    entities_are_resolved,
    dangling_foreign_key_is_an_attribute_error,
    malformed_join_columns,
    one_join_per_query,
    create_table_creates_referenced_tables,
    entity_reaches_the_referenced_model,
);
