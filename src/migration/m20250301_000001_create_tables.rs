use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{Categories, MenuItems, Neighborhoods, OrderItems, Orders};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Parents before children so the foreign keys resolve.
        create_table(manager, Categories).await?;
        create_table(manager, MenuItems).await?;
        create_table(manager, Neighborhoods).await?;
        create_table(manager, Orders).await?;
        create_table(manager, OrderItems).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table(manager, OrderItems).await?;
        drop_table(manager, Orders).await?;
        drop_table(manager, Neighborhoods).await?;
        drop_table(manager, MenuItems).await?;
        drop_table(manager, Categories).await?;
        Ok(())
    }
}

async fn create_table<E: EntityTrait>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr> {
    let schema = Schema::new(manager.get_database_backend());
    manager
        .create_table(schema.create_table_from_entity(entity).if_not_exists().to_owned())
        .await
}

async fn drop_table<E: EntityTrait>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr> {
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}
