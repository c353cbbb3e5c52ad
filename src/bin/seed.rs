use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use vne_techwear_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::products::CreateProductRequest,
    entity::{Products, products::Column},
    services::product_service,
};
use validator::Validate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    seed_products(&orm).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_products(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let products = vec![
        (
            "Urban Tech Pants",
            "Water-repellent cargo pants with articulated knees",
            159.99,
            "Pants",
            vec!["S", "M", "L"],
        ),
        (
            "Tech Hoodie Black",
            "Heavyweight hoodie with hidden zip pockets",
            129.99,
            "Hoodies",
            vec!["M", "L", "XL"],
        ),
        (
            "Shell Jacket Storm",
            "Three-layer waterproof shell with taped seams",
            299.99,
            "Jackets",
            vec!["S", "M", "L", "XL"],
        ),
        (
            "Modular Sling Bag",
            "Sling bag with MOLLE webbing",
            89.99,
            "Accessories",
            vec!["One Size"],
        ),
    ];

    for (name, description, price, category, sizes) in products {
        let existing = Products::find()
            .filter(Column::Name.eq(name))
            .one(orm)
            .await?;
        if existing.is_some() {
            println!("Skipped {name}, already present");
            continue;
        }

        let payload = CreateProductRequest {
            name: name.to_string(),
            description: Some(description.to_string()),
            price,
            category: category.to_string(),
            sizes: sizes.into_iter().map(String::from).collect(),
            in_stock: true,
            image_url: None,
        };
        payload.validate()?;

        let product = product_service::create_product(orm, payload).await?;
        println!("Seeded {name} (id={})", product.id);
    }

    Ok(())
}
