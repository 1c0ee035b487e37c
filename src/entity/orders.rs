use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub payment_method: Option<String>,
    pub delivery_type: Option<String>,
    pub status: String,
    pub order_date: DateTimeWithTimeZone,
    pub total_amount: Option<f64>,
    pub cep: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub reference: Option<String>,
    pub neighborhood: Option<String>,
    pub delivery_fee: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl Model {
    /// Links `item` to this order. Items are never re-parented afterwards.
    pub fn attach_item(
        &self,
        mut item: super::order_items::ActiveModel,
    ) -> super::order_items::ActiveModel {
        item.order_id = Set(self.id);
        item
    }
}

impl ActiveModelBehavior for ActiveModel {}
