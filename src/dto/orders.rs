use serde::Deserialize;
use utoipa::ToSchema;

/// Transfer object for `POST /api/orders`.
///
/// `status` and `orderDate` are server-assigned; if a client sends them they are
/// dropped during deserialization.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub payment_method: Option<String>,
    pub delivery_type: Option<String>,
    pub total_amount: Option<f64>,
    pub cep: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub reference: Option<String>,
    pub neighborhood: Option<String>,
    pub delivery_fee: Option<f64>,
    /// Missing or `null` means an order without items.
    pub items: Option<Vec<CreateOrderItemRequest>>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemRequest {
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: String,
}
