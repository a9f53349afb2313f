use tests::prelude::*;

fn fish() -> ModelBuilder {
    Model::builder("Fish").varchar("name").integer("age")
}

fn save_then_get_round_trips(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));

    let mut lily = assert_ok!(db.new_record("Fish", fields! { "name" => "lily", "age" => 2 }));
    assert_none!(lily.id());

    assert_ok!(lily.save(&db));
    let id = assert_some!(lily.id());

    let found = assert_some!(assert_ok!(assert_ok!(db.objects("Fish")).get(id)));
    assert_eq!(found, lily);
    assert_eq!(found.get("name"), Some(&Value::from("lily")));
    assert_eq!(found.get("age"), Some(&Value::from(2)));
}

fn get_missing_is_none(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    let fish = assert_ok!(db.objects("Fish"));

    assert_ok!(fish.create_table());
    assert_none!(assert_ok!(fish.get(1)));
}

fn unset_fields_are_null(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));

    let mut sam = assert_ok!(db.new_record("Fish", fields! { "name" => "sam" }));
    assert_eq!(sam.get("age"), Some(&Value::Null));
    assert_ok!(sam.save(&db));

    let found = assert_some!(assert_ok!(assert_ok!(db.objects("Fish")).get(sam.id().unwrap())));
    assert_eq!(found.get("age"), Some(&Value::Null));
}

fn saving_an_existing_id_fails(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));

    let mut lily = assert_ok!(db.new_record("Fish", fields! { "name" => "lily", "age" => 2 }));
    assert_ok!(lily.save(&db));
    let id = lily.id().unwrap();

    let mut copy = assert_ok!(db.new_record(
        "Fish",
        fields! { "id" => id, "name" => "lily", "age" => 2 }
    ));
    let err = assert_err!(copy.save(&db), is_operational);
    assert!(err.to_string().contains("already exists"), "{err}");

    assert_eq!(assert_ok!(assert_ok!(db.objects("Fish")).count()), 1);
}

fn saving_an_unknown_id_gets_a_fresh_one(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));

    let mut lily = assert_ok!(db.new_record("Fish", fields! { "id" => 42, "name" => "lily" }));
    assert_ok!(lily.save(&db));

    let id = assert_some!(lily.id());
    assert_some!(assert_ok!(assert_ok!(db.objects("Fish")).get(id)));
    assert_eq!(assert_ok!(assert_ok!(db.objects("Fish")).count()), 1);
}

fn update_persists_fields(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));

    let mut lily = assert_ok!(db.new_record("Fish", fields! { "name" => "lily", "age" => 2 }));
    assert_ok!(lily.save(&db));

    assert_ok!(lily.update(&db, fields! { "age" => 3 }));
    assert_eq!(lily.get("age"), Some(&Value::from(3)));

    let found = assert_some!(assert_ok!(assert_ok!(db.objects("Fish")).get(lily.id().unwrap())));
    assert_eq!(found.get("age"), Some(&Value::from(3)));
    assert_eq!(found.get("name"), Some(&Value::from("lily")));
}

fn update_rejects_bad_fields(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));

    let mut lily = assert_ok!(db.new_record("Fish", fields! { "name" => "lily", "age" => 2 }));

    // Not saved yet
    assert_err!(lily.update(&db, fields! { "age" => 3 }), is_operational);

    assert_ok!(lily.save(&db));
    let before = lily.clone();

    assert_err!(lily.update(&db, fields! { "id" => 5 }), is_attribute);
    assert_err!(lily.update(&db, fields! { "age" => 4, "id" => 5 }), is_attribute);
    assert_err!(lily.update(&db, fields! { "color" => "red" }), is_attribute);
    assert_err!(lily.update(&db, fields! { "age" => "old" }), is_invalid_value);
    assert_err!(lily.update(&db, fields! {}), is_attribute);

    assert_eq!(lily, before);
}

fn remove_deletes_the_row(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));

    let mut lily = assert_ok!(db.new_record("Fish", fields! { "name" => "lily", "age" => 2 }));
    let mut sam = assert_ok!(db.new_record("Fish", fields! { "name" => "sam", "age" => 3 }));
    assert_ok!(lily.save(&db));
    assert_ok!(sam.save(&db));

    let id = lily.id().unwrap();
    assert_ok!(lily.remove(&db));
    assert_none!(lily.id());

    let fish = assert_ok!(db.objects("Fish"));
    assert_none!(assert_ok!(fish.get(id)));
    assert_eq!(assert_ok!(fish.count()), 1);

    // Removing again needs an id
    assert_err!(lily.remove(&db), is_operational);
}

fn assignment_is_type_checked(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));

    assert_err!(
        db.new_record("Fish", fields! { "age" => "fjsk" }),
        is_invalid_value
    );
    assert_err!(db.new_record("Fish", fields! { "fins" => 2 }), is_attribute);
    assert_err!(db.new_record("Whale", fields! {}), is_attribute);

    let mut lily = assert_ok!(db.new_record("Fish", fields! { "name" => "lily", "age" => 2 }));
    assert_err!(lily.set("age", 2.5), is_invalid_value);
    assert_err!(lily.set("name", "x".repeat(51)), is_invalid_value);
    assert_eq!(lily.get("age"), Some(&Value::from(2)));

    assert_ok!(lily.set("age", Value::Null));
    assert_ok!(lily.set("name", "x".repeat(50)));
}

fn display_lists_every_column(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));

    let mut lily = assert_ok!(db.new_record("Fish", fields! { "name" => "lily", "age" => 2 }));
    assert_eq!(lily.to_string(), "Fish(id=null, name=lily, age=2)");

    assert_ok!(lily.save(&db));
    let id = lily.id().unwrap();
    assert_eq!(lily.to_string(), format!("Fish(id={id}, name=lily, age=2)"));
}

fn rows_convert_to_records(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));

    let mut lily = assert_ok!(db.new_record("Fish", fields! { "name" => "lily", "age" => 2 }));
    assert_ok!(lily.save(&db));

    let row = lily.to_row();
    assert_eq!(row.id(), lily.id());
    assert_eq!(row["name"], "lily");

    let rows = assert_ok!(assert_ok!(db.objects("Fish")).get_all(None));
    assert_eq!(rows, [row]);

    let mut copy = assert_ok!(assert_ok!(db.objects("Fish")).from_row(&rows[0]));
    assert_eq!(copy, lily);
    assert_err!(copy.save(&db), is_operational);
}

tests!(
    save_then_get_round_trips,
    get_missing_is_none,
    unset_fields_are_null,
    saving_an_existing_id_fails,
    saving_an_unknown_id_gets_a_fresh_one,
    update_persists_fields,
    update_rejects_bad_fields,
    remove_deletes_the_row,
    assignment_is_type_checked,
    display_lists_every_column,
    rows_convert_to_records,
);
