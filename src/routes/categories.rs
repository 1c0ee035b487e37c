use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};

use crate::{
    dto::categories::{AddMenuItemRequest, SaveCategoryRequest},
    error::AppResult,
    models::{Category, MenuItem},
    services::category_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(save_category))
        .route("/{id}", delete(delete_category))
        .route("/{category_id}/items", post(add_item))
        .route("/{category_id}/items/{item_id}", delete(delete_item))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories with their items", body = Vec<Category>)
    ),
    tag = "Categories"
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = category_service::list_categories(&state).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = SaveCategoryRequest,
    responses(
        (status = 200, description = "Created or updated category", body = Category),
        (status = 404, description = "Category id not found"),
    ),
    tag = "Categories"
)]
pub async fn save_category(
    State(state): State<AppState>,
    Json(payload): Json<SaveCategoryRequest>,
) -> AppResult<Json<Category>> {
    let category = category_service::save_category(&state, payload).await?;
    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category and its items deleted")
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<()> {
    category_service::delete_category(&state, id).await
}

#[utoipa::path(
    post,
    path = "/api/categories/{category_id}/items",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = AddMenuItemRequest,
    responses(
        (status = 200, description = "Saved menu item", body = MenuItem),
        (status = 404, description = "Category not found"),
    ),
    tag = "Categories"
)]
pub async fn add_item(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Json(payload): Json<AddMenuItemRequest>,
) -> AppResult<Json<MenuItem>> {
    let item = category_service::add_item_to_category(&state, category_id, payload).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}/items/{item_id}",
    params(
        ("category_id" = i32, Path, description = "Category ID"),
        ("item_id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Menu item deleted"),
        (status = 404, description = "Category or item not found"),
    ),
    tag = "Categories"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path((category_id, item_id)): Path<(i32, i32)>,
) -> AppResult<()> {
    category_service::delete_item_from_category(&state, category_id, item_id).await
}
