use towel::{fields, Db, Model};

fn main() -> towel::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // `DATABASE_URL=postgresql://postgres@localhost/towel` needs the
    // `postgresql` feature.
    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

    let db = Db::builder()
        .register(Model::builder("Aquarium").varchar("color").real("price"))
        .register(
            Model::builder("Fish")
                .varchar("name")
                .integer("age")
                .foreign_key_as("aquarium_id", "Aquarium", "aquarium"),
        )
        .connect(&url)?;

    println!("==> save aquariums");
    let mut green = db.new_record("Aquarium", fields! { "color" => "green", "price" => 10.5 })?;
    let mut blue = db.new_record("Aquarium", fields! { "color" => "blue", "price" => 20.0 })?;
    green.save(&db)?;
    blue.save(&db)?;
    println!("{green}\n{blue}");

    println!("==> save fish");
    db.objects("Fish")?.save_from_sequence([
        fields! { "name" => "lily", "age" => 2, "aquarium_id" => green.id() },
        fields! { "name" => "sam", "age" => 3, "aquarium_id" => blue.id() },
        fields! { "name" => "dody clark", "age" => 432, "aquarium_id" => green.id() },
        fields! { "name" => "alexdwop", "age" => 123, "aquarium_id" => blue.id() },
    ])?;

    println!("==> fish younger than 10");
    for row in db.objects("Fish")?.filter("age", "<", 10)?.get_all(None)? {
        println!("{row}");
    }

    println!("==> fish in green aquariums");
    for row in db
        .objects("Fish")?
        .filter("aquarium_id__color", "=", "green")?
        .get_all(None)?
    {
        let fish = db.objects("Fish")?.from_row(&row)?;
        let home = fish.entity("aquarium").map(ToString::to_string);
        println!("{fish} lives in {}", home.unwrap_or_default());
    }

    println!("==> birthday for everyone in a blue aquarium");
    let ids: Vec<_> = db
        .objects("Fish")?
        .filter("aquarium_id__color", "=", "blue")?
        .get_all(None)?
        .iter()
        .filter_map(|row| row.id())
        .collect();

    for id in ids {
        if let Some(mut fish) = db.objects("Fish")?.get(id)? {
            let age = fish.get("age").and_then(|age| age.as_i64()).unwrap_or(0);
            fish.update(&db, fields! { "age" => age + 1 })?;
            println!("{fish}");
        }
    }

    println!("==> remove fish in green aquariums");
    let removed = db
        .objects("Fish")?
        .filter("aquarium_id__color", "=", "green")?
        .remove()?;
    println!("removed {removed}; {} left", db.objects("Fish")?.count()?);

    db.close()
}
