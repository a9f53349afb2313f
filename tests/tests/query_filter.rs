use tests::prelude::*;

fn fish() -> ModelBuilder {
    Model::builder("Fish").varchar("name").integer("age")
}

fn populate(db: &Db) {
    let count = assert_ok!(assert_ok!(db.objects("Fish")).save_from_sequence([
        fields! { "name" => "lily", "age" => 2 },
        fields! { "name" => "sam", "age" => 3 },
        fields! { "name" => "dody clark", "age" => 432 },
        fields! { "name" => "alexdwop", "age" => 123 },
    ]));
    assert_eq!(count, 4);
}

fn names(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row["name"].as_str().unwrap().to_string())
        .collect()
}

fn filter_less_than(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    populate(&db);

    let young = assert_ok!(assert_ok!(assert_ok!(db.objects("Fish")).filter("age", "<", 10)).get_all(None));
    assert_eq_unordered!(names(&young), ["lily", "sam"]);

    // Stable under repeated calls
    let again = assert_ok!(assert_ok!(assert_ok!(db.objects("Fish")).filter("age", "<", 10)).get_all(None));
    assert_eq!(young, again);
}

fn filters_are_conjoined(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    populate(&db);

    let rows = assert_ok!(assert_ok!(db.objects("Fish"))
        .filter("age", ">", 2)
        .and_then(|fish| fish.filter("age", "<", 200))
        .and_then(|fish| fish.get_all(None)));
    assert_eq_unordered!(names(&rows), ["sam", "alexdwop"]);

    let rows = assert_ok!(assert_ok!(db.objects("Fish"))
        .filter("age", ">=", 3)
        .and_then(|fish| fish.filter("name", "<>", "sam"))
        .and_then(|fish| fish.get_all(None)));
    assert_eq_unordered!(names(&rows), ["dody clark", "alexdwop"]);

    let rows = assert_ok!(assert_ok!(db.objects("Fish"))
        .filter("name", "=", "lily")
        .and_then(|fish| fish.filter("age", "=", 3))
        .and_then(|fish| fish.get_all(None)));
    assert!(rows.is_empty());
}

fn limit_applies_with_filters(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    populate(&db);

    let rows = assert_ok!(assert_ok!(assert_ok!(db.objects("Fish")).filter("age", ">", 3)).get_all(Some(1)));
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["age"].as_i64().unwrap() > 3);

    let rows = assert_ok!(assert_ok!(db.objects("Fish")).get_all(Some(0)));
    assert!(rows.is_empty());

    let rows = assert_ok!(assert_ok!(db.objects("Fish")).get_all(Some(10)));
    assert_eq!(rows.len(), 4);

    assert_err!(assert_ok!(db.objects("Fish")).get_all(Some(-1)), is_attribute);
}

fn invalid_filters_fail_before_the_database(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    populate(&db);
    test.log().clear();

    let fish = assert_ok!(db.objects("Fish"));
    assert_err!(fish.clone().filter("color", "=", "red"), is_attribute);
    assert_err!(fish.clone().filter("age", "!=", 3), is_attribute);
    assert_err!(fish.clone().filter("age", "LIKE", 3), is_attribute);
    assert_err!(fish.clone().filter("age", "=", "three"), is_invalid_value);
    assert_err!(fish.clone().filter("name__color", "=", "red"), is_invalid_value);

    assert!(test.log().is_empty());
}

fn values_are_bound_not_spliced(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    populate(&db);

    let rows = assert_ok!(assert_ok!(assert_ok!(db.objects("Fish"))
        .filter("name", "=", "x'; DROP TABLE fish; --"))
    .get_all(None));
    assert!(rows.is_empty());

    assert_eq!(assert_ok!(assert_ok!(db.objects("Fish")).count()), 4);
}

fn missing_table_is_operational(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    let fish = assert_ok!(db.objects("Fish"));

    assert!(!assert_ok!(fish.table_exists()));

    let err = assert_err!(fish.clone().get_all(None), is_operational);
    assert!(err.to_string().contains("doesn't exist"), "{err}");

    assert_err!(fish.get(1), is_operational);
    assert_err!(fish.count(), is_operational);
    assert_err!(fish.clone().remove(), is_operational);
    assert_err!(fish.clone().update(fields! { "age" => 1 }), is_operational);
}

fn create_table_is_idempotent(test: &mut DbTest) {
    let db = test.setup_db(models!(fish()));
    let fish = assert_ok!(db.objects("Fish"));

    assert_ok!(fish.create_table());
    assert!(assert_ok!(fish.table_exists()));
    assert!(assert_ok!(fish.clone().get_all(None)).is_empty());

    assert_ok!(fish.create_table());
    assert!(assert_ok!(fish.is_empty()));
}

tests!(
    filter_less_than,
    filters_are_conjoined,
    limit_applies_with_filters,
    invalid_filters_fail_before_the_database,
    values_are_bound_not_spliced,
    missing_table_is_operational,
    create_table_is_idempotent,
);
