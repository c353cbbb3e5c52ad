use serde_json::json;
use validator::Validate;
use vne_techwear_api::{
    dto::{
        Patch,
        products::{CreateProductRequest, UpdateProductRequest},
    },
    error::field_errors,
};

fn create(body: serde_json::Value) -> CreateProductRequest {
    serde_json::from_value(body).unwrap()
}

fn update(body: serde_json::Value) -> UpdateProductRequest {
    serde_json::from_value(body).unwrap()
}

#[test]
fn valid_create_passes() {
    let payload = create(json!({
        "name": "Urban Tech Pants",
        "price": 159.99,
        "category": "Pants",
        "sizes": ["S", "M", "L"]
    }));
    assert!(payload.validate().is_ok());
    assert!(payload.in_stock);
}

#[test]
fn name_length_bounds_are_inclusive() {
    let at_limit = create(json!({
        "name": "n".repeat(200),
        "price": 1.0,
        "category": "c".repeat(100),
        "sizes": ["M"]
    }));
    assert!(at_limit.validate().is_ok());

    let over = create(json!({
        "name": "n".repeat(201),
        "price": 1.0,
        "category": "Pants",
        "sizes": ["M"]
    }));
    let errors = field_errors(&over.validate().unwrap_err());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "name");
    assert_eq!(errors[0].constraint, "length");
    assert_eq!(errors[0].message, "length must be between 1 and 200");
}

#[test]
fn zero_price_is_rejected() {
    let payload = create(json!({
        "name": "Freebie",
        "price": 0.0,
        "category": "Misc",
        "sizes": ["One Size"]
    }));
    let errors = field_errors(&payload.validate().unwrap_err());
    assert_eq!(errors[0].field, "price");
    assert_eq!(errors[0].value, json!(0.0));
}

#[test]
fn long_image_url_is_rejected() {
    let payload = create(json!({
        "name": "Jacket",
        "price": 10.0,
        "category": "Jackets",
        "sizes": ["M"],
        "image_url": format!("https://example.com/{}", "a".repeat(500))
    }));
    let errors = field_errors(&payload.validate().unwrap_err());
    assert_eq!(errors[0].field, "image_url");
}

#[test]
fn update_distinguishes_absent_from_null() {
    let payload = update(json!({ "description": null, "price": 12.5 }));
    assert_eq!(payload.description, Patch::Null);
    assert_eq!(payload.price, Patch::Value(12.5));
    assert!(payload.name.is_absent());
    assert!(payload.image_url.is_absent());
    assert!(payload.validate().is_ok());
}

#[test]
fn empty_update_is_valid() {
    let payload = update(json!({}));
    assert!(payload.is_empty());
    assert!(payload.validate().is_ok());
}

#[test]
fn update_rejects_null_for_required_fields() {
    let payload = update(json!({
        "name": null,
        "price": null,
        "category": null,
        "sizes": null,
        "in_stock": null
    }));
    let errors = field_errors(&payload.validate().unwrap_err());
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["category", "in_stock", "name", "price", "sizes"]);
    assert!(errors.iter().all(|e| e.constraint == "required"));
}

#[test]
fn update_applies_the_same_bounds_as_create() {
    let payload = update(json!({
        "name": "",
        "price": -1.0,
        "category": "c".repeat(101),
        "sizes": []
    }));
    let errors = field_errors(&payload.validate().unwrap_err());
    let pairs: Vec<_> = errors
        .iter()
        .map(|e| (e.field.as_str(), e.constraint.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("category", "length"),
            ("name", "length"),
            ("price", "range"),
            ("sizes", "length"),
        ]
    );
    assert_eq!(errors[2].message, "must be greater than 0.0");
}
