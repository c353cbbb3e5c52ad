//! Queries over the `products` table.
//!
//! Every function borrows the pooled connection from [`AppState`] for the
//! duration of its statements only.
//!
//! [`AppState`]: crate::state::AppState

use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{BinOper, Expr, Func, SimpleExpr};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbBackend,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    dto::{
        Patch,
        products::{CreateProductRequest, UpdateProductRequest},
    },
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel, Sizes},
    error::AppResult,
    routes::params::ProductQuery,
};

/// One page of products in id order, narrowed by the optional category and
/// search filters.
pub async fn list_products(
    db: &DatabaseConnection,
    query: &ProductQuery,
) -> AppResult<Vec<ProductModel>> {
    let (offset, limit) = query.normalize();
    let mut condition = Condition::all();

    if let Some(category) = query.category() {
        condition = condition.add(Column::Category.eq(category));
    }

    if let Some(search) = query.search() {
        condition = condition.add(search_condition(db.get_database_backend(), search));
    }

    let items = Products::find()
        .filter(condition)
        .order_by_asc(Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;

    tracing::debug!(
        offset,
        limit,
        category = query.category(),
        search = query.search(),
        returned = items.len(),
        "listed products"
    );
    Ok(items)
}

/// Total number of products in the table. Filters are deliberately not applied.
pub async fn count_products(db: &DatabaseConnection) -> AppResult<u64> {
    Ok(Products::find().count(db).await?)
}

pub async fn get_product(db: &DatabaseConnection, id: i32) -> AppResult<Option<ProductModel>> {
    Ok(Products::find_by_id(id).one(db).await?)
}

pub async fn create_product(
    db: &DatabaseConnection,
    payload: CreateProductRequest,
) -> AppResult<ProductModel> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        category: Set(payload.category),
        sizes: Set(Sizes(payload.sizes)),
        in_stock: Set(payload.in_stock),
        image_url: Set(payload.image_url),
    };
    let product = active.insert(db).await?;

    tracing::info!(product_id = product.id, "product created");
    Ok(product)
}

/// Apply a partial update. Returns `None` when no product has this id.
///
/// Only [`Patch::Value`] changes a non-nullable column; `Patch::Null` on those
/// is rejected by validation before it gets here and is ignored if it does.
pub async fn update_product(
    db: &DatabaseConnection,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<Option<ProductModel>> {
    let Some(existing) = Products::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Patch::Value(name) = payload.name {
        active.name = Set(name);
    }
    match payload.description {
        Patch::Absent => {}
        Patch::Null => active.description = Set(None),
        Patch::Value(description) => active.description = Set(Some(description)),
    }
    if let Patch::Value(price) = payload.price {
        active.price = Set(price);
    }
    if let Patch::Value(category) = payload.category {
        active.category = Set(category);
    }
    if let Patch::Value(sizes) = payload.sizes {
        active.sizes = Set(Sizes(sizes));
    }
    if let Patch::Value(in_stock) = payload.in_stock {
        active.in_stock = Set(in_stock);
    }
    match payload.image_url {
        Patch::Absent => {}
        Patch::Null => active.image_url = Set(None),
        Patch::Value(url) => active.image_url = Set(Some(url)),
    }

    if !active.is_changed() {
        return Ok(Some(existing));
    }

    let product = active.update(db).await?;
    tracing::info!(product_id = product.id, "product updated");
    Ok(Some(product))
}

/// Remove a product. Returns `false` when there was nothing to delete.
pub async fn delete_product(db: &DatabaseConnection, id: i32) -> AppResult<bool> {
    let result = Products::delete_by_id(id).exec(db).await?;
    let deleted = result.rows_affected > 0;
    if deleted {
        tracing::info!(product_id = id, "product deleted");
    }
    Ok(deleted)
}

fn search_condition(backend: DbBackend, search: &str) -> Condition {
    let pattern = format!("%{search}%");
    match backend {
        DbBackend::Postgres => Condition::any()
            .add(Expr::col(Column::Name).ilike(pattern.clone()))
            .add(Expr::col(Column::Description).ilike(pattern)),
        // Fold both sides with the store's own lower() so they always agree.
        // SQLite only folds ASCII, so non-ASCII matching stays case-sensitive there.
        _ => Condition::any()
            .add(lower_like(Column::Name, &pattern))
            .add(lower_like(Column::Description, &pattern)),
    }
}

fn lower_like(column: Column, pattern: &str) -> SimpleExpr {
    SimpleExpr::from(Func::lower(Expr::col(column))).binary(
        BinOper::Like,
        Func::lower(Expr::val(pattern.to_owned())),
    )
}
