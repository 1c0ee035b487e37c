use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::menu_items::Entity")]
    MenuItems,
}

impl Related<super::menu_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItems.def()
    }
}

impl Model {
    /// Links `item` to this category. The category side owns the relationship.
    pub fn attach_item(
        &self,
        mut item: super::menu_items::ActiveModel,
    ) -> super::menu_items::ActiveModel {
        item.category_id = Set(Some(self.id));
        item
    }
}

impl ActiveModelBehavior for ActiveModel {}
