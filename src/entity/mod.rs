pub mod categories;
pub mod menu_items;
pub mod neighborhoods;
pub mod order_items;
pub mod orders;

pub use categories::Entity as Categories;
pub use menu_items::Entity as MenuItems;
pub use neighborhoods::Entity as Neighborhoods;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
