use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{dto::Patch, models::Product};

pub const NAME_MAX_LEN: u64 = 200;
pub const CATEGORY_MAX_LEN: u64 = 100;
pub const IMAGE_URL_MAX_LEN: u64 = 500;

fn default_in_stock() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Test Tech Jacket", min_length = 1, max_length = 200)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 299.99)]
    pub price: f64,
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Jackets", min_length = 1, max_length = 100)]
    pub category: String,
    #[validate(length(min = 1))]
    #[schema(example = json!(["S", "M", "L"]), min_items = 1)]
    pub sizes: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}

/// Partial update body. Keys left out of the JSON are not touched; an explicit
/// `null` clears `description` and `image_url` and is rejected elsewhere.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Patch<f64>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub category: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub sizes: Patch<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub in_stock: Patch<bool>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image_url: Patch<String>,
}

impl UpdateProductRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_absent()
            && self.description.is_absent()
            && self.price.is_absent()
            && self.category.is_absent()
            && self.sizes.is_absent()
            && self.in_stock.is_absent()
            && self.image_url.is_absent()
    }
}

impl Validate for UpdateProductRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.name {
            Patch::Null => errors.add("name", required()),
            Patch::Value(name) => {
                if let Some(err) = check_length(name, Some(1), Some(NAME_MAX_LEN)) {
                    errors.add("name", err);
                }
            }
            Patch::Absent => {}
        }

        match self.price {
            Patch::Null => errors.add("price", required()),
            Patch::Value(price) if price.is_nan() || price <= 0.0 => {
                let mut err = ValidationError::new("range");
                err.add_param(Cow::from("exclusive_min"), &0.0);
                err.add_param(Cow::from("value"), &price);
                errors.add("price", err);
            }
            _ => {}
        }

        match &self.category {
            Patch::Null => errors.add("category", required()),
            Patch::Value(category) => {
                if let Some(err) = check_length(category, Some(1), Some(CATEGORY_MAX_LEN)) {
                    errors.add("category", err);
                }
            }
            Patch::Absent => {}
        }

        match &self.sizes {
            Patch::Null => errors.add("sizes", required()),
            Patch::Value(sizes) if sizes.is_empty() => {
                let mut err = ValidationError::new("length");
                err.add_param(Cow::from("min"), &1);
                err.add_param(Cow::from("value"), sizes);
                errors.add("sizes", err);
            }
            _ => {}
        }

        if self.in_stock.is_null() {
            errors.add("in_stock", required());
        }

        if let Patch::Value(url) = &self.image_url {
            if let Some(err) = check_length(url, None, Some(IMAGE_URL_MAX_LEN)) {
                errors.add("image_url", err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn required() -> ValidationError {
    let mut err = ValidationError::new("required");
    err.add_param(Cow::from("value"), &serde_json::Value::Null);
    err.message = Some(Cow::from("field may be omitted but not null"));
    err
}

fn check_length(value: &str, min: Option<u64>, max: Option<u64>) -> Option<ValidationError> {
    let len = value.chars().count() as u64;
    let too_short = min.is_some_and(|min| len < min);
    let too_long = max.is_some_and(|max| len > max);
    if !too_short && !too_long {
        return None;
    }
    let mut err = ValidationError::new("length");
    if let Some(min) = min {
        err.add_param(Cow::from("min"), &min);
    }
    if let Some(max) = max {
        err.add_param(Cow::from("max"), &max);
    }
    err.add_param(Cow::from("value"), &value);
    Some(err)
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<Product>,
    /// Size of the whole catalogue; category and search filters do not apply.
    pub total: u64,
}
