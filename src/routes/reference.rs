use axum::{Json, Router, extract::Query, routing::get};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    reference::{self, CityInfo, SampleCategory, StateInfo},
    state::AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CityQuery {
    /// Optional here, though the old service required it and answered 400 without it.
    /// The list does not depend on it.
    pub state: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/states", get(list_states))
        .route("/cities", get(list_cities))
        .route("/reference/categories", get(sample_catalog))
}

#[utoipa::path(
    get,
    path = "/api/states",
    responses(
        (status = 200, description = "Fixed list of federative units", body = Vec<StateInfo>)
    ),
    tag = "Reference"
)]
pub async fn list_states() -> Json<Vec<StateInfo>> {
    Json(reference::states())
}

#[utoipa::path(
    get,
    path = "/api/cities",
    params(CityQuery),
    responses(
        (status = 200, description = "Fixed list of cities; `state` is ignored", body = Vec<CityInfo>)
    ),
    tag = "Reference"
)]
pub async fn list_cities(Query(query): Query<CityQuery>) -> Json<Vec<CityInfo>> {
    tracing::debug!(state = ?query.state, "serving stub city list");
    Json(reference::cities(query.state.as_deref()))
}

#[utoipa::path(
    get,
    path = "/api/reference/categories",
    responses(
        (status = 200, description = "Static sample menu catalog", body = Vec<SampleCategory>)
    ),
    tag = "Reference"
)]
pub async fn sample_catalog() -> Json<Vec<SampleCategory>> {
    Json(reference::sample_catalog())
}
