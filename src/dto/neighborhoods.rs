use serde::Deserialize;
use utoipa::ToSchema;

/// Full neighborhood record as sent by clients. Saving it replaces every column,
/// so omitted coordinates are stored as null.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveNeighborhoodRequest {
    pub id: Option<i32>,
    pub name: String,
    pub state: String,
    pub city: String,
    pub delivery_fee: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
