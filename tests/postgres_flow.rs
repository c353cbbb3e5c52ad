use sea_orm::{ConnectionTrait, Statement};
use vne_techwear_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        Patch,
        products::{CreateProductRequest, UpdateProductRequest},
    },
    routes::params::ProductQuery,
    services::product_service,
    state::AppState,
};

// Runs the SQL migrations and the repository against a real Postgres store.
#[tokio::test]
async fn migrate_create_search_and_update_on_postgres() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run the Postgres flow."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let jacket = product_service::create_product(
        &state.orm,
        CreateProductRequest {
            name: "Urban Tech Jacket".into(),
            description: Some("Waterproof shell".into()),
            price: 299.99,
            category: "Jackets".into(),
            sizes: vec!["XL".into(), "S".into(), "M".into()],
            in_stock: true,
            image_url: Some("https://example.com/jacket.jpg".into()),
        },
    )
    .await?;
    let hoodie = product_service::create_product(
        &state.orm,
        CreateProductRequest {
            name: "Tech Hoodie Black".into(),
            description: Some("Made for URBAN commutes".into()),
            price: 129.99,
            category: "Hoodies".into(),
            sizes: vec!["M".into()],
            in_stock: true,
            image_url: None,
        },
    )
    .await?;
    product_service::create_product(
        &state.orm,
        CreateProductRequest {
            name: "Cargo Pants".into(),
            description: None,
            price: 159.99,
            category: "Pants".into(),
            sizes: vec!["L".into()],
            in_stock: false,
            image_url: None,
        },
    )
    .await?;

    // JSONB keeps the array order.
    let fetched = product_service::get_product(&state.orm, jacket.id)
        .await?
        .expect("jacket stored");
    assert_eq!(fetched.sizes.0, vec!["XL", "S", "M"]);

    // ILIKE search over name or description.
    let query = ProductQuery {
        search: Some("uRbAn".into()),
        ..Default::default()
    };
    let ids: Vec<i32> = product_service::list_products(&state.orm, &query)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![jacket.id, hoodie.id]);

    // Partial update: price changes, description is cleared, the rest stays.
    let updated = product_service::update_product(
        &state.orm,
        jacket.id,
        UpdateProductRequest {
            price: Patch::Value(249.5),
            description: Patch::Null,
            ..Default::default()
        },
    )
    .await?
    .expect("jacket exists");
    assert_eq!(updated.price, 249.5);
    assert_eq!(updated.description, None);
    assert_eq!(updated.name, jacket.name);
    assert_eq!(updated.sizes, jacket.sizes);
    assert_eq!(updated.image_url, jacket.image_url);

    // The table constraints hold even when validation is bypassed.
    let mut free = CreateProductRequest {
        name: "Free".into(),
        description: None,
        price: 0.0,
        category: "Misc".into(),
        sizes: vec!["M".into()],
        in_stock: true,
        image_url: None,
    };
    assert!(product_service::create_product(&state.orm, free.clone()).await.is_err());
    free.price = 1.0;
    free.sizes = Vec::new();
    assert!(product_service::create_product(&state.orm, free).await.is_err());

    assert_eq!(product_service::count_products(&state.orm).await?, 3);

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let config = AppConfig {
        database_url: database_url.to_string(),
        host: "127.0.0.1".into(),
        port: 0,
        db_max_connections: 2,
        db_connect_timeout_secs: 8,
    };
    let orm = create_orm_conn(&config).await?;
    // Applying twice checks the migrations are idempotent.
    run_migrations(&orm).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE products RESTART IDENTITY",
    ))
    .await?;

    Ok(AppState { orm })
}
