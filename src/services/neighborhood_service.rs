use sea_orm::{ActiveValue::NotSet, Set};

use crate::{
    dto::neighborhoods::SaveNeighborhoodRequest,
    entity::{
        neighborhoods::{ActiveModel, Model as NeighborhoodModel},
        Neighborhoods,
    },
    error::{AppError, AppResult},
    models::Neighborhood,
    repository,
    state::AppState,
};

pub async fn list_neighborhoods(state: &AppState) -> AppResult<Vec<Neighborhood>> {
    let items = repository::find_all::<Neighborhoods, _>(&state.orm)
        .await?
        .into_iter()
        .map(neighborhood_from_entity)
        .collect();
    Ok(items)
}

pub async fn find_by_city(state: &AppState, city: &str) -> AppResult<Vec<Neighborhood>> {
    let items = repository::find_neighborhoods_by_city(&state.orm, city)
        .await?
        .into_iter()
        .map(neighborhood_from_entity)
        .collect();
    Ok(items)
}

/// Inserts a new neighborhood, or replaces every column of the one named by
/// `payload.id`. Coordinates left out of the payload end up null.
pub async fn save_neighborhood(
    state: &AppState,
    payload: SaveNeighborhoodRequest,
) -> AppResult<Neighborhood> {
    let id = match payload.id {
        Some(id) => {
            if repository::find_by_id::<Neighborhoods, _>(&state.orm, id)
                .await?
                .is_none()
            {
                return Err(AppError::not_found("Neighborhood"));
            }
            Set(id)
        }
        None => NotSet,
    };

    let active = ActiveModel {
        id,
        name: Set(payload.name),
        state: Set(payload.state),
        city: Set(payload.city),
        delivery_fee: Set(payload.delivery_fee),
        latitude: Set(payload.latitude),
        longitude: Set(payload.longitude),
    };
    let neighborhood = repository::save(&state.orm, active).await?;

    tracing::info!(neighborhood_id = neighborhood.id, city = %neighborhood.city, "neighborhood saved");
    Ok(neighborhood_from_entity(neighborhood))
}

pub async fn delete_neighborhood(state: &AppState, id: i32) -> AppResult<()> {
    let removed = repository::delete_by_id::<Neighborhoods, _>(&state.orm, id).await?;
    tracing::info!(neighborhood_id = id, removed, "neighborhood deleted");
    Ok(())
}

fn neighborhood_from_entity(model: NeighborhoodModel) -> Neighborhood {
    Neighborhood {
        id: model.id,
        name: model.name,
        state: model.state,
        city: model.city,
        delivery_fee: model.delivery_fee,
        latitude: model.latitude,
        longitude: model.longitude,
    }
}
