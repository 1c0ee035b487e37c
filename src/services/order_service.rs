use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::{
    dto::orders::{CreateOrderItemRequest, CreateOrderRequest},
    entity::{
        order_items::{
            ActiveModel as OrderItemActive, Column as OrderItemCol, Model as OrderItemModel,
        },
        orders::{ActiveModel as OrderActive, Model as OrderModel},
        OrderItems, Orders,
    },
    error::{AppError, AppResult},
    models::{Order, OrderItem},
    repository,
    state::AppState,
};

/// Status every order starts in ("under review").
pub const INITIAL_ORDER_STATUS: &str = "EM ANÁLISE";

/// Delivery type whose orders carry an address and a delivery fee.
pub const DELIVERY: &str = "DELIVERY";

/// An order graph ready to be written: the order row plus its not-yet-linked items.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub order: OrderActive,
    pub items: Vec<OrderItemActive>,
}

/// Copies a create request into persistable records.
///
/// Always copied: customer name and phone, payment method, delivery type, total.
/// Copied only for `DELIVERY`: cep, street, number, complement, reference,
/// neighborhood, delivery fee; for any other delivery type they are stored null.
/// Server-assigned: status (`INITIAL_ORDER_STATUS`) and order date (`now`).
pub fn assemble_order(payload: CreateOrderRequest, now: DateTime<Utc>) -> OrderDraft {
    let is_delivery = payload.delivery_type.as_deref() == Some(DELIVERY);

    let mut order = OrderActive {
        id: NotSet,
        customer_name: Set(payload.customer_name),
        customer_phone: Set(payload.customer_phone),
        payment_method: Set(payload.payment_method),
        delivery_type: Set(payload.delivery_type),
        status: Set(INITIAL_ORDER_STATUS.to_string()),
        order_date: Set(now.into()),
        total_amount: Set(payload.total_amount),
        cep: Set(None),
        street: Set(None),
        number: Set(None),
        complement: Set(None),
        reference: Set(None),
        neighborhood: Set(None),
        delivery_fee: Set(None),
    };

    if is_delivery {
        order.cep = Set(payload.cep);
        order.street = Set(payload.street);
        order.number = Set(payload.number);
        order.complement = Set(payload.complement);
        order.reference = Set(payload.reference);
        order.neighborhood = Set(payload.neighborhood);
        order.delivery_fee = Set(payload.delivery_fee);
    }

    let items = payload
        .items
        .unwrap_or_default()
        .into_iter()
        .map(order_item_from_request)
        .collect();

    OrderDraft { order, items }
}

pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Order> {
    let draft = assemble_order(payload, Utc::now());
    let order = persist_order(state, draft).await.map_err(|err| {
        tracing::error!(error = ?err, "error creating order");
        AppError::OrderCreation(err.to_string())
    })?;

    tracing::info!(order_id = order.id, items = order.items.len(), "order created");
    Ok(order)
}

async fn persist_order(state: &AppState, draft: OrderDraft) -> Result<Order, DbErr> {
    let txn = state.orm.begin().await?;

    let order = repository::save(&txn, draft.order).await?;
    let mut items = Vec::with_capacity(draft.items.len());
    for item in draft.items {
        items.push(repository::save(&txn, order.attach_item(item)).await?);
    }

    txn.commit().await?;
    Ok(order_from_entity(order, items))
}

pub async fn list_orders(state: &AppState) -> AppResult<Vec<Order>> {
    let orders = Orders::find()
        .find_with_related(OrderItems)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(order, items)| order_from_entity(order, items))
        .collect();
    Ok(orders)
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<Order> {
    let order = repository::find_by_id::<Orders, _>(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found("Order"))?;
    let items = find_items(state, order.id).await?;
    Ok(order_from_entity(order, items))
}

/// Stores `status` verbatim. There is no fixed status set and no transition check.
pub async fn update_order_status(state: &AppState, id: i32, status: String) -> AppResult<Order> {
    let existing = repository::find_by_id::<Orders, _>(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found("Order"))?;

    let mut active: OrderActive = existing.into();
    active.status = Set(status);
    let order = active.update(&state.orm).await?;

    tracing::info!(order_id = order.id, status = %order.status, "order status updated");
    let items = find_items(state, order.id).await?;
    Ok(order_from_entity(order, items))
}

/// Deletes the order and its items. A missing id is a no-op.
pub async fn delete_order(state: &AppState, id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;

    OrderItems::delete_many()
        .filter(OrderItemCol::OrderId.eq(id))
        .exec(&txn)
        .await?;
    let removed = repository::delete_by_id::<Orders, _>(&txn, id).await?;

    txn.commit().await?;

    tracing::info!(order_id = id, removed, "order deleted");
    Ok(())
}

async fn find_items(state: &AppState, order_id: i32) -> Result<Vec<OrderItemModel>, DbErr> {
    OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order_id))
        .order_by_asc(OrderItemCol::Id)
        .all(&state.orm)
        .await
}

fn order_item_from_request(item: CreateOrderItemRequest) -> OrderItemActive {
    OrderItemActive {
        id: NotSet,
        order_id: NotSet,
        quantity: Set(item.quantity),
        price: Set(item.price),
        description: Set(item.description),
    }
}

fn order_from_entity(model: OrderModel, mut items: Vec<OrderItemModel>) -> Order {
    items.sort_by_key(|item| item.id);
    Order {
        id: model.id,
        customer_name: model.customer_name,
        customer_phone: model.customer_phone,
        payment_method: model.payment_method,
        delivery_type: model.delivery_type,
        status: model.status,
        order_date: model.order_date.with_timezone(&Utc),
        total_amount: model.total_amount,
        cep: model.cep,
        street: model.street,
        number: model.number,
        complement: model.complement,
        reference: model.reference,
        neighborhood: model.neighborhood,
        delivery_fee: model.delivery_fee,
        items: items.into_iter().map(order_item_from_entity).collect(),
    }
}

fn order_item_from_entity(model: OrderItemModel) -> OrderItem {
    OrderItem {
        id: model.id,
        quantity: model.quantity,
        price: model.price,
        description: model.description,
    }
}
