//! Generic CRUD accessors shared by every entity.
//!
//! Each function takes any [`ConnectionTrait`], so the same call works against the
//! pooled connection or inside a [`sea_orm::DatabaseTransaction`].

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter,
    QueryOrder,
};

use crate::entity::{
    neighborhoods::{Column as NeighborhoodCol, Model as NeighborhoodModel},
    Neighborhoods,
};

type ModelOf<A> = <<A as ActiveModelTrait>::Entity as EntityTrait>::Model;
type IdOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Every row of `E`, ordered by primary key.
pub async fn find_all<E, C>(db: &C) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let mut finder = E::find();
    for key in E::PrimaryKey::iter() {
        finder = finder.order_by_asc(key.into_column());
    }
    finder.all(db).await
}

pub async fn find_by_id<E, C>(db: &C, id: impl Into<IdOf<E>>) -> Result<Option<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    E::find_by_id(id).one(db).await
}

/// Inserts when the primary key is not set, otherwise overwrites every set column
/// of the existing row.
pub async fn save<'a, A, C>(db: &'a C, model: A) -> Result<ModelOf<A>, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'a,
    ModelOf<A>: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let is_new = <A::Entity as EntityTrait>::PrimaryKey::iter()
        .any(|key| matches!(model.get(key.into_column()), ActiveValue::NotSet));
    if is_new {
        model.insert(db).await
    } else {
        model.update(db).await
    }
}

/// Returns the number of rows removed; deleting a missing id is not an error.
pub async fn delete_by_id<E, C>(db: &C, id: impl Into<IdOf<E>>) -> Result<u64, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let result = E::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}

pub async fn find_neighborhoods_by_city<C>(
    db: &C,
    city: &str,
) -> Result<Vec<NeighborhoodModel>, DbErr>
where
    C: ConnectionTrait,
{
    Neighborhoods::find()
        .filter(NeighborhoodCol::City.eq(city))
        .order_by_asc(NeighborhoodCol::Id)
        .all(db)
        .await
}
