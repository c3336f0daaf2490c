use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use pizza_api::config::DEFAULT_BODY_LIMIT;
use pizza_api::{app, apply_migrations, seed_sample_data, store, AppState};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

async fn setup() -> (Router, SqlitePool) {
    let pool = store::connect_url("sqlite::memory:", 1).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    seed_sample_data(&pool).await.unwrap();
    let router = app(AppState { pool: pool.clone() }, DEFAULT_BODY_LIMIT);
    (router, pool)
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder = builder.header(header::CONTENT_LENGTH, b.len());
            Body::from(b)
        }
        None => Body::empty(),
    };
    let resp = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, bytes.to_vec())
}

async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(router, method, uri, body.map(|v| v.to_string())).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn menu_count(pool: &SqlitePool, restaurant_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas WHERE restaurant_id = ?")
        .bind(restaurant_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

// ── Landing page ──

#[tokio::test]
async fn index_serves_html_placeholder() {
    let (r, _) = setup().await;
    let (status, bytes) = send(&r, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), "<h1>Code challenge</h1>");
}

// ── Restaurants ──

#[tokio::test]
async fn list_restaurants_omits_menus() {
    let (r, _) = setup().await;
    let (status, body) = call(&r, Method::GET, "/restaurants", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(
        list[0],
        json!({"id": 1, "name": "Karen's Pizza Shack", "address": "address1"})
    );
    assert!(list.iter().all(|r| r.get("restaurant_pizzas").is_none()));
}

#[tokio::test]
async fn list_restaurants_is_empty_array_without_rows() {
    let pool = store::connect_url("sqlite::memory:", 1).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    let r = app(AppState { pool }, DEFAULT_BODY_LIMIT);
    let (status, body) = call(&r, Method::GET, "/restaurants", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_restaurant_includes_menu_with_pizzas() {
    let (r, _) = setup().await;
    let (status, body) = call(&r, Method::GET, "/restaurants/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Karen's Pizza Shack");
    let menu = body["restaurant_pizzas"].as_array().unwrap();
    assert_eq!(menu.len(), 2);
    assert_eq!(
        menu[0],
        json!({
            "id": 1,
            "price": 1,
            "pizza_id": 1,
            "restaurant_id": 1,
            "pizza": {"id": 1, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"}
        })
    );
    assert!(menu.iter().all(|m| m.get("restaurant").is_none()));
}

#[tokio::test]
async fn get_missing_restaurant_is_404() {
    let (r, _) = setup().await;
    for uri in ["/restaurants/999", "/restaurants/0", "/restaurants/abc"] {
        let (status, body) = call(&r, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"error": "Restaurant not found"}));
    }
}

#[tokio::test]
async fn delete_restaurant_cascades_and_is_durable() {
    let (r, pool) = setup().await;
    assert_eq!(menu_count(&pool, 1).await, 2);

    let (status, bytes) = send(&r, Method::DELETE, "/restaurants/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (status, body) = call(&r, Method::GET, "/restaurants/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant not found"}));

    assert_eq!(menu_count(&pool, 1).await, 0);
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 4);

    let (_, body) = call(&r, Method::GET, "/restaurants", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_twice_is_404_the_second_time() {
    let (r, _) = setup().await;
    let (first, _) = call(&r, Method::DELETE, "/restaurants/2", None).await;
    assert_eq!(first, StatusCode::NO_CONTENT);
    let (second, body) = call(&r, Method::DELETE, "/restaurants/2", None).await;
    assert_eq!(second, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant not found"}));
}

// ── Pizzas ──

#[tokio::test]
async fn list_pizzas_omits_menus() {
    let (r, _) = setup().await;
    let (status, body) = call(&r, Method::GET, "/pizzas", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(
        list[1],
        json!({"id": 2, "name": "Geri", "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni"})
    );
    assert!(list.iter().all(|p| p.get("restaurant_pizzas").is_none()));
}

// ── Restaurant pizzas ──

#[tokio::test]
async fn create_restaurant_pizza_returns_full_record() {
    let (r, _) = setup().await;
    let (status, body) = call(
        &r,
        Method::POST,
        "/restaurant_pizzas",
        Some(json!({"price": 5, "pizza_id": 1, "restaurant_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"], 5);
    assert_eq!(body["pizza_id"], 1);
    assert_eq!(body["restaurant_id"], 1);
    assert_eq!(
        body["pizza"],
        json!({"id": 1, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"})
    );
    assert_eq!(
        body["restaurant"],
        json!({"id": 1, "name": "Karen's Pizza Shack", "address": "address1"})
    );
    assert!(body["id"].as_i64().unwrap() > 0);

    let (_, detail) = call(&r, Method::GET, "/restaurants/1", None).await;
    assert_eq!(detail["restaurant_pizzas"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn every_price_in_range_is_accepted() {
    let (r, _) = setup().await;
    for price in 1..=30 {
        let (status, body) = call(
            &r,
            Method::POST,
            "/restaurant_pizzas",
            Some(json!({"price": price, "pizza_id": 3, "restaurant_id": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "price {price}");
        assert_eq!(body["price"], price);
    }
}

#[tokio::test]
async fn out_of_range_price_is_rejected_regardless_of_ids() {
    let (r, pool) = setup().await;
    for price in [-5, 0, 31, 35, 1000] {
        for (pizza_id, restaurant_id) in [(1, 1), (999, 1), (1, 999)] {
            let (status, body) = call(
                &r,
                Method::POST,
                "/restaurant_pizzas",
                Some(json!({"price": price, "pizza_id": pizza_id, "restaurant_id": restaurant_id})),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({"errors": ["validation errors"]}));
        }
    }
    assert_eq!(menu_count(&pool, 1).await, 2);
}

#[tokio::test]
async fn unknown_ids_are_rejected() {
    let (r, _) = setup().await;
    for payload in [
        json!({"price": 5, "pizza_id": 999, "restaurant_id": 1}),
        json!({"price": 5, "pizza_id": 1, "restaurant_id": 999}),
        json!({"price": 5}),
    ] {
        let (status, body) = call(&r, Method::POST, "/restaurant_pizzas", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"errors": ["Invalid pizza_id or restaurant_id"]}));
    }
}

#[tokio::test]
async fn unreadable_bodies_are_validation_errors() {
    let (r, _) = setup().await;
    for raw in ["not json", "42", "{\"pizza_id\": 1, \"restaurant_id\": 1}", "{\"price\": \"5\"}"] {
        let (status, bytes) = send(&r, Method::POST, "/restaurant_pizzas", Some(raw.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{raw}");
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"errors": ["validation errors"]}));
    }
}

#[tokio::test]
async fn oversized_body_is_a_validation_error() {
    let pool = store::connect_url("sqlite::memory:", 1).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    seed_sample_data(&pool).await.unwrap();
    let r = app(AppState { pool }, 64);
    let raw = format!(
        "{{\"price\": 5, \"pizza_id\": 1, \"restaurant_id\": 1, \"note\": \"{}\"}}",
        "x".repeat(100)
    );
    let (status, bytes) = send(&r, Method::POST, "/restaurant_pizzas", Some(raw)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"errors": ["validation errors"]}));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writes_on_a_file_database_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("pizzas.db").display());
    let pool = store::connect_url(&url, 5).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    seed_sample_data(&pool).await.unwrap();
    let r = app(AppState { pool: pool.clone() }, DEFAULT_BODY_LIMIT);

    let mut creates = Vec::new();
    for i in 0..120 {
        let r = r.clone();
        let price = i % 30 + 1;
        creates.push(tokio::spawn(async move {
            call(
                &r,
                Method::POST,
                "/restaurant_pizzas",
                Some(json!({"price": price, "pizza_id": 1, "restaurant_id": 2})),
            )
            .await
            .0
        }));
    }
    let mut deletes = Vec::new();
    for id in [1, 3] {
        let r = r.clone();
        deletes.push(tokio::spawn(async move {
            call(&r, Method::DELETE, &format!("/restaurants/{id}"), None).await.0
        }));
    }

    for handle in creates {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }
    for handle in deletes {
        assert_eq!(handle.await.unwrap(), StatusCode::NO_CONTENT);
    }
    assert_eq!(menu_count(&pool, 2).await, 122);
    assert_eq!(menu_count(&pool, 1).await, 0);
    assert_eq!(menu_count(&pool, 3).await, 0);
}

// ── Operations ──

#[tokio::test]
async fn health_ready_and_version() {
    let (r, _) = setup().await;
    let (status, body) = call(&r, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = call(&r, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "database": "ok"}));

    let (status, body) = call(&r, Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "pizza-api");
}

#[tokio::test]
async fn ready_reports_missing_schema() {
    let pool = store::connect_url("sqlite::memory:", 1).await.unwrap();
    let r = app(AppState { pool }, DEFAULT_BODY_LIMIT);
    let (status, body) = call(&r, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({
            "status": "degraded",
            "database": "schema incomplete",
            "missing_tables": ["restaurants", "pizzas", "restaurant_pizzas"]
        })
    );
}

#[tokio::test]
async fn openapi_document_lists_domain_paths() {
    let (r, _) = setup().await;
    let (status, body) = call(&r, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in ["/restaurants", "/restaurants/{id}", "/pizzas", "/restaurant_pizzas"] {
        assert!(paths.contains_key(path), "{path}");
    }
}
