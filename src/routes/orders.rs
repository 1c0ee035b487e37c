use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::orders::{CreateOrderRequest, UpdateStatusRequest},
    error::{AppError, AppResult},
    models::Order,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order).delete(delete_order))
        .route("/{id}/status", put(update_order_status))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders with their items", body = Vec<Order>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order_service::list_orders(&state).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Created order", body = Order),
        (status = 500, description = "Order could not be created"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<Order>> {
    let order = order_service::create_order(&state, payload).await?;
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with items", body = Order),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Order>> {
    let order = order_service::get_order(&state, id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated order", body = Order),
        (status = 400, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<Order>> {
    let order = order_service::update_order_status(&state, id, payload.status)
        .await
        .map_err(|err| match err {
            AppError::NotFound(what) => AppError::BadRequest(format!("{what} {id} not found")),
            other => other,
        })?;
    Ok(Json(order))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order and its items deleted")
    ),
    tag = "Orders"
)]
pub async fn delete_order(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<()> {
    order_service::delete_order(&state, id).await
}
