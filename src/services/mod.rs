pub mod category_service;
pub mod neighborhood_service;
pub mod order_service;
