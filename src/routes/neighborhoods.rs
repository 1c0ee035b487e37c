use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::neighborhoods::SaveNeighborhoodRequest,
    error::AppResult,
    models::Neighborhood,
    services::neighborhood_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_neighborhoods).post(create_neighborhood))
        .route("/city/{city}", get(list_by_city))
        .route("/{id}", put(update_neighborhood).delete(delete_neighborhood))
}

#[utoipa::path(
    get,
    path = "/api/neighborhoods",
    responses(
        (status = 200, description = "All neighborhoods", body = Vec<Neighborhood>)
    ),
    tag = "Neighborhoods"
)]
pub async fn list_neighborhoods(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Neighborhood>>> {
    let items = neighborhood_service::list_neighborhoods(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/neighborhoods",
    request_body = SaveNeighborhoodRequest,
    responses(
        (status = 200, description = "Saved neighborhood", body = Neighborhood)
    ),
    tag = "Neighborhoods"
)]
pub async fn create_neighborhood(
    State(state): State<AppState>,
    Json(payload): Json<SaveNeighborhoodRequest>,
) -> AppResult<Json<Neighborhood>> {
    let neighborhood = neighborhood_service::save_neighborhood(&state, payload).await?;
    Ok(Json(neighborhood))
}

#[utoipa::path(
    get,
    path = "/api/neighborhoods/city/{city}",
    params(
        ("city" = String, Path, description = "City name, matched exactly")
    ),
    responses(
        (status = 200, description = "Neighborhoods in the city", body = Vec<Neighborhood>)
    ),
    tag = "Neighborhoods"
)]
pub async fn list_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Json<Vec<Neighborhood>>> {
    let items = neighborhood_service::find_by_city(&state, &city).await?;
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/api/neighborhoods/{id}",
    params(
        ("id" = i32, Path, description = "Neighborhood ID")
    ),
    request_body = SaveNeighborhoodRequest,
    responses(
        (status = 200, description = "Replaced neighborhood", body = Neighborhood),
        (status = 404, description = "Neighborhood not found"),
    ),
    tag = "Neighborhoods"
)]
pub async fn update_neighborhood(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(mut payload): Json<SaveNeighborhoodRequest>,
) -> AppResult<Json<Neighborhood>> {
    payload.id = Some(id);
    let neighborhood = neighborhood_service::save_neighborhood(&state, payload).await?;
    Ok(Json(neighborhood))
}

#[utoipa::path(
    delete,
    path = "/api/neighborhoods/{id}",
    params(
        ("id" = i32, Path, description = "Neighborhood ID")
    ),
    responses(
        (status = 200, description = "Neighborhood deleted")
    ),
    tag = "Neighborhoods"
)]
pub async fn delete_neighborhood(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<()> {
    neighborhood_service::delete_neighborhood(&state, id).await
}
