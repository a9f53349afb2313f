use tests::prelude::*;
use towel_core::stmt::Statement;

use indexmap::IndexMap;

fn fish() -> ModelBuilder {
    Model::builder("Fish").varchar("name").integer("age")
}

fn save_from_sequence_inserts_every_item(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    let fish = assert_ok!(db.objects("Fish"));

    let mut map = IndexMap::new();
    map.insert("age".to_string(), Value::from(5));
    map.insert("name".to_string(), Value::from("nemo"));
    assert_eq!(assert_ok!(fish.save_from_sequence([map])), 1);

    let saved = assert_ok!(fish.save_from_sequence([
        fields! { "name" => "lily", "age" => 2 },
        fields! { "name" => "sam", "age" => 3, "color" => "red" },
    ]));
    assert_eq!(saved, 2);
    assert_eq!(assert_ok!(fish.count()), 3);

    // Rows read back are valid items; their `id` is ignored
    let rows = assert_ok!(fish.clone().get_all(None));
    assert_eq!(assert_ok!(fish.save_from_sequence(rows)), 3);
    assert_eq!(assert_ok!(fish.count()), 6);

    assert_eq!(assert_ok!(fish.save_from_sequence(Vec::<Row>::new())), 0);
}

fn save_from_sequence_checks_items_first(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    let fish = assert_ok!(db.objects("Fish"));

    let err = assert_err!(
        fish.save_from_sequence([
            fields! { "name" => "lily", "age" => 2 },
            fields! { "name" => "sam" },
        ]),
        is_attribute
    );
    assert!(err.to_string().contains("age"), "{err}");

    assert_err!(
        fish.save_from_sequence([fields! { "name" => "lily", "age" => "two" }]),
        is_invalid_value
    );

    assert_eq!(test.log().count(|stmt| matches!(stmt, Statement::Insert(_))), 0);
    assert!(!assert_ok!(fish.table_exists()));
}

fn update_matching_rows(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    let fish = assert_ok!(db.objects("Fish"));
    assert_ok!(fish.save_from_sequence([
        fields! { "name" => "lily", "age" => 2 },
        fields! { "name" => "sam", "age" => 3 },
        fields! { "name" => "alexdwop", "age" => 123 },
    ]));

    let updated = assert_ok!(assert_ok!(fish.clone().filter("age", "<", 10)).update(fields! { "age" => 1 }));
    assert_eq!(updated, 2);

    let ones = assert_ok!(assert_ok!(fish.clone().filter("age", "=", 1)).get_all(None));
    assert_eq!(ones.len(), 2);

    // Without filters every row is updated
    let updated = assert_ok!(fish.clone().update(fields! { "name" => "fish" }));
    assert_eq!(updated, 3);
}

fn update_rejects_bad_assignments(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    let fish = assert_ok!(db.objects("Fish"));
    assert_ok!(fish.create_table());
    test.log().clear();

    assert_err!(fish.clone().update(fields! { "id" => 3 }), is_attribute);
    assert_err!(fish.clone().update(fields! { "name" => "x", "id" => 3 }), is_attribute);
    assert_err!(fish.clone().update(fields! { "color" => "red" }), is_attribute);
    assert_err!(fish.clone().update(fields! {}), is_attribute);
    assert_err!(fish.clone().update(fields! { "age" => "old" }), is_invalid_value);
    assert_err!(
        fish.clone().update(fields! { "name" => "x".repeat(51) }),
        is_invalid_value
    );

    assert!(test.log().is_empty());
}

fn remove_matching_rows(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    let fish = assert_ok!(db.objects("Fish"));
    assert_ok!(fish.save_from_sequence([
        fields! { "name" => "lily", "age" => 2 },
        fields! { "name" => "sam", "age" => 3 },
        fields! { "name" => "alexdwop", "age" => 123 },
    ]));

    let removed = assert_ok!(assert_ok!(fish.clone().filter("age", ">", 2)).remove());
    assert_eq!(removed, 2);
    assert_eq!(assert_ok!(fish.count()), 1);

    assert_eq!(assert_ok!(fish.clone().remove()), 1);
    assert!(assert_ok!(fish.is_empty()));
}

tests!(
    save_from_sequence_inserts_every_item,
    save_from_sequence_checks_items_first,
    update_matching_rows,
    update_rejects_bad_assignments,
    remove_matching_rows,
);
