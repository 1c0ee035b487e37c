use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: Option<String>,
    pub items: Vec<MenuItem>,
}

/// A menu entry; its owning category is implied by nesting and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i32,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub id: i32,
    pub name: String,
    pub state: String,
    pub city: String,
    pub delivery_fee: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub payment_method: Option<String>,
    pub delivery_type: Option<String>,
    pub status: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: Option<f64>,
    pub cep: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub reference: Option<String>,
    pub neighborhood: Option<String>,
    pub delivery_fee: Option<f64>,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i32,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub description: Option<String>,
}
