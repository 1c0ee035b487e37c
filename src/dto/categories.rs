use serde::Deserialize;
use utoipa::ToSchema;

/// Create-or-update payload: an `id` selects the category to overwrite.
///
/// A nested `items` array is accepted for compatibility but ignored; items are
/// managed through the item endpoints.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveCategoryRequest {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMenuItemRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}
