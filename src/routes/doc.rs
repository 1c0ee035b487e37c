use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        categories::{AddMenuItemRequest, SaveCategoryRequest},
        neighborhoods::SaveNeighborhoodRequest,
        orders::{CreateOrderItemRequest, CreateOrderRequest, UpdateStatusRequest},
    },
    models::{Category, MenuItem, Neighborhood, Order, OrderItem},
    reference::{CityInfo, SampleCategory, SampleMenuItem, StateInfo},
    response::ApiResponse,
    routes::{categories, health, neighborhoods, orders, reference},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        categories::save_category,
        categories::delete_category,
        categories::add_item,
        categories::delete_item,
        neighborhoods::list_neighborhoods,
        neighborhoods::create_neighborhood,
        neighborhoods::list_by_city,
        neighborhoods::update_neighborhood,
        neighborhoods::delete_neighborhood,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order_status,
        orders::delete_order,
        reference::list_states,
        reference::list_cities,
        reference::sample_catalog
    ),
    components(
        schemas(
            Category,
            MenuItem,
            Neighborhood,
            Order,
            OrderItem,
            SaveCategoryRequest,
            AddMenuItemRequest,
            SaveNeighborhoodRequest,
            CreateOrderRequest,
            CreateOrderItemRequest,
            UpdateStatusRequest,
            StateInfo,
            CityInfo,
            SampleCategory,
            SampleMenuItem,
            health::HealthData,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Categories", description = "Menu categories and their items"),
        (name = "Neighborhoods", description = "Delivery neighborhoods"),
        (name = "Orders", description = "Customer orders"),
        (name = "Reference", description = "Static placeholder reference data"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
