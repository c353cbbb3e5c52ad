use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::products::Model as ProductModel;

/// A catalogue product as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Urban Tech Pants")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 159.99)]
    pub price: f64,
    #[schema(example = "Pants")]
    pub category: String,
    #[schema(example = json!(["S", "M", "L"]))]
    pub sizes: Vec<String>,
    pub in_stock: bool,
    pub image_url: Option<String>,
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            category: model.category,
            sizes: model.sizes.0,
            in_stock: model.in_stock,
            image_url: model.image_url,
        }
    }
}
