pub mod categories;
pub mod neighborhoods;
pub mod orders;
