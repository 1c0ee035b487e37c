use axum::Router;

use crate::state::AppState;

pub mod categories;
pub mod doc;
pub mod health;
pub mod neighborhoods;
pub mod orders;
pub mod reference;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/neighborhoods", neighborhoods::router())
        .nest("/orders", orders::router())
        .merge(reference::router())
}
