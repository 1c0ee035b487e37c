mod common;

use axum::http::StatusCode;
use sea_orm::ConnectionTrait;
use serde_json::json;

use common::{app, app_with_state, send, setup_state};

#[tokio::test]
async fn cities_ignore_the_state_parameter() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, sp) = send(&app, "GET", "/api/cities?state=35", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, rj) = send(&app, "GET", "/api/cities?state=33", None).await;
    let (_, none) = send(&app, "GET", "/api/cities", None).await;

    assert_eq!(sp, rj);
    assert_eq!(sp, none);
    assert_eq!(sp.as_array().map(Vec::len), Some(3));
    assert_eq!(sp[1], json!({ "id": "2", "nome": "Campinas" }));
    Ok(())
}

#[tokio::test]
async fn states_lists_all_federative_units() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(&app, "GET", "/api/states", None).await;

    assert_eq!(status, StatusCode::OK);
    let states = body.as_array().expect("array");
    assert_eq!(states.len(), 27);
    assert!(states.contains(&json!({ "id": "35", "sigla": "SP", "nome": "São Paulo" })));
    Ok(())
}

#[tokio::test]
async fn sample_catalog_is_static() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(&app, "GET", "/api/reference/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["name"], "Pizzas");
    assert_eq!(body[1]["items"].as_array().map(Vec::len), Some(3));

    // the persisted catalog is untouched
    let (_, persisted) = send(&app, "GET", "/api/categories", None).await;
    assert_eq!(persisted, json!([]));
    Ok(())
}

#[tokio::test]
async fn category_and_item_endpoints() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, category) =
        send(&app, "POST", "/api/categories", Some(json!({ "name": "Pizzas" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(category["items"], json!([]));
    let category_id = category["id"].as_i64().expect("id");

    let (status, item) = send(
        &app,
        "POST",
        &format!("/api/categories/{category_id}/items"),
        Some(json!({ "name": "Pizza Calabresa", "price": 42.9, "description": "Grande" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["name"], "Pizza Calabresa");
    assert!(item.get("categoryId").is_none());

    let (_, listed) = send(&app, "GET", "/api/categories", None).await;
    assert_eq!(listed[0]["items"][0]["price"], 42.9);

    let (status, _) = send(
        &app,
        "POST",
        "/api/categories/9999/items",
        Some(json!({ "name": "Orphan" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let item_id = item["id"].as_i64().expect("item id");
    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/categories/{category_id}/items/{item_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::Value::Null);

    let (status, _) = send(&app, "DELETE", &format!("/api/categories/{category_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, listed) = send(&app, "GET", "/api/categories", None).await;
    assert_eq!(listed, json!([]));
    Ok(())
}

#[tokio::test]
async fn neighborhood_put_takes_id_from_path_and_nulls_omitted_fields() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, created) = send(
        &app,
        "POST",
        "/api/neighborhoods",
        Some(json!({
            "name": "Centro",
            "state": "SP",
            "city": "Santos",
            "deliveryFee": 5.0,
            "latitude": -23.96,
            "longitude": -46.33
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().expect("id");

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/neighborhoods/{id}"),
        Some(json!({
            "id": id + 500,
            "name": "Gonzaga",
            "state": "SP",
            "city": "Santos",
            "deliveryFee": 8.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["name"], "Gonzaga");
    assert_eq!(updated["latitude"], serde_json::Value::Null);
    assert_eq!(updated["longitude"], serde_json::Value::Null);

    let (_, santos) = send(&app, "GET", "/api/neighborhoods/city/Santos", None).await;
    assert_eq!(santos.as_array().map(Vec::len), Some(1));
    let (_, elsewhere) = send(&app, "GET", "/api/neighborhoods/city/Campinas", None).await;
    assert_eq!(elsewhere, json!([]));

    let (status, _) = send(&app, "DELETE", &format!("/api/neighborhoods/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, all) = send(&app, "GET", "/api/neighborhoods", None).await;
    assert_eq!(all, json!([]));
    Ok(())
}

#[tokio::test]
async fn order_lifecycle_over_http() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, order) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "customerName": "Carlos",
            "customerPhone": "13988887777",
            "paymentMethod": "CARTÃO",
            "deliveryType": "DELIVERY",
            "status": "PRONTO",
            "totalAmount": 50.8,
            "cep": "11060-000",
            "street": "Av. Ana Costa",
            "number": "500",
            "neighborhood": "Gonzaga",
            "deliveryFee": 8.0,
            "items": [{ "quantity": 1, "price": 42.8, "description": "Pizza Calabresa - 1x" }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["status"], "EM ANÁLISE");
    assert_eq!(order["street"], "Av. Ana Costa");
    assert!(order["orderDate"].is_string());
    assert!(order["items"][0].get("orderId").is_none());
    let id = order["id"].as_i64().expect("id");

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/orders/{id}/status"),
        Some(json!({ "status": "SAIU PARA ENTREGA" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "SAIU PARA ENTREGA");

    let (status, _) = send(
        &app,
        "PUT",
        "/api/orders/4242/status",
        Some(json!({ "status": "PRONTO" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, orders) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(orders.as_array().map(Vec::len), Some(1));
    assert_eq!(orders[0]["status"], "SAIU PARA ENTREGA");

    let (status, _) = send(&app, "DELETE", &format!("/api/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", &format!("/api/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_rejected_by_the_extractor() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(
        &app,
        "POST",
        "/api/neighborhoods",
        Some(json!({ "name": "Sem cidade" })),
    )
    .await;

    assert!(status.is_client_error());
    assert!(body.as_str().is_some_and(|text| !text.is_empty()), "{body}");
    Ok(())
}

#[tokio::test]
async fn order_with_null_items_is_accepted() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, order) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({ "customerName": "A", "deliveryType": "RETIRADA", "items": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["items"], json!([]));
    Ok(())
}

#[tokio::test]
async fn order_creation_failure_is_a_server_error_with_detail() -> anyhow::Result<()> {
    let state = setup_state().await?;
    state.orm.execute_unprepared("DROP TABLE order_items").await?;
    let app = app_with_state(state);

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "customerName": "B",
            "deliveryType": "RETIRADA",
            "items": [{ "quantity": 1, "price": 8.9, "description": "Suco Natural - 1x" }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["message"].as_str().expect("message");
    assert!(message.starts_with("Error creating order: "), "{message}");
    assert!(message.contains("order_items"), "{message}");
    Ok(())
}
