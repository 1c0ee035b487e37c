use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::{
    dto::categories::{AddMenuItemRequest, SaveCategoryRequest},
    entity::{
        categories::{ActiveModel as CategoryActive, Model as CategoryModel},
        menu_items::{ActiveModel as MenuItemActive, Column as MenuItemCol, Model as MenuItemModel},
        Categories, MenuItems,
    },
    error::{AppError, AppResult},
    models::{Category, MenuItem},
    repository,
    state::AppState,
};

pub async fn list_categories(state: &AppState) -> AppResult<Vec<Category>> {
    let categories = Categories::find()
        .find_with_related(MenuItems)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(category, items)| category_from_entity(category, items))
        .collect();
    Ok(categories)
}

/// Creates the category, or overwrites the one named by `payload.id`.
pub async fn save_category(state: &AppState, payload: SaveCategoryRequest) -> AppResult<Category> {
    let id = match payload.id {
        Some(id) => {
            if repository::find_by_id::<Categories, _>(&state.orm, id)
                .await?
                .is_none()
            {
                return Err(AppError::not_found("Category"));
            }
            Set(id)
        }
        None => NotSet,
    };

    let category = repository::save(
        &state.orm,
        CategoryActive {
            id,
            name: Set(payload.name),
        },
    )
    .await?;

    let items = MenuItems::find()
        .filter(MenuItemCol::CategoryId.eq(category.id))
        .order_by_asc(MenuItemCol::Id)
        .all(&state.orm)
        .await?;

    tracing::info!(category_id = category.id, "category saved");
    Ok(category_from_entity(category, items))
}

/// Deletes the category together with its items. A missing id is a no-op.
pub async fn delete_category(state: &AppState, id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;

    MenuItems::delete_many()
        .filter(MenuItemCol::CategoryId.eq(id))
        .exec(&txn)
        .await?;
    let removed = repository::delete_by_id::<Categories, _>(&txn, id).await?;

    txn.commit().await?;

    tracing::info!(category_id = id, removed, "category deleted");
    Ok(())
}

pub async fn add_item_to_category(
    state: &AppState,
    category_id: i32,
    payload: AddMenuItemRequest,
) -> AppResult<MenuItem> {
    let txn = state.orm.begin().await?;

    let category = repository::find_by_id::<Categories, _>(&txn, category_id)
        .await?
        .ok_or_else(|| AppError::not_found("Category"))?;

    let item = category.attach_item(MenuItemActive {
        id: NotSet,
        name: Set(payload.name),
        price: Set(payload.price),
        description: Set(payload.description),
        category_id: NotSet,
    });
    let item = repository::save(&txn, item).await?;

    txn.commit().await?;

    tracing::info!(category_id, item_id = item.id, "menu item added");
    Ok(menu_item_from_entity(item))
}

/// Removes a menu item. Both ids must exist; the item is deleted even when it
/// currently hangs off a different category.
pub async fn delete_item_from_category(
    state: &AppState,
    category_id: i32,
    item_id: i32,
) -> AppResult<()> {
    let txn = state.orm.begin().await?;

    repository::find_by_id::<Categories, _>(&txn, category_id)
        .await?
        .ok_or_else(|| AppError::not_found("Category"))?;
    let item = repository::find_by_id::<MenuItems, _>(&txn, item_id)
        .await?
        .ok_or_else(|| AppError::not_found("Item"))?;

    repository::delete_by_id::<MenuItems, _>(&txn, item.id).await?;

    txn.commit().await?;

    tracing::info!(category_id, item_id, "menu item deleted");
    Ok(())
}

fn category_from_entity(model: CategoryModel, mut items: Vec<MenuItemModel>) -> Category {
    items.sort_by_key(|item| item.id);
    Category {
        id: model.id,
        name: model.name,
        items: items.into_iter().map(menu_item_from_entity).collect(),
    }
}

fn menu_item_from_entity(model: MenuItemModel) -> MenuItem {
    MenuItem {
        id: model.id,
        name: model.name,
        price: model.price,
        description: model.description,
    }
}
