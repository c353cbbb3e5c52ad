use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    error::{ErrorBody, FieldError},
    models::Product,
    response::MessageResponse,
    routes::{health, products},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VNE Techwear API",
        description = "REST API for the VNE techwear storefront catalogue"
    ),
    paths(
        health::root,
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
    ),
    components(
        schemas(
            Product,
            ProductList,
            CreateProductRequest,
            UpdateProductRequest,
            MessageResponse,
            health::HealthData,
            ErrorBody,
            FieldError,
        )
    ),
    tags(
        (name = "Health", description = "Service status endpoints"),
        (name = "Products", description = "Product catalogue endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
