use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::{AppConfig, AssetsConfig, DatabaseConfig};
use models::db::Storage;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::startup::{build_app, on_shutdown, on_startup};

fn test_config() -> AppConfig {
    AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        },
        assets: AssetsConfig {
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../../static").into(),
        },
        ..Default::default()
    }
}

async fn build_test_app() -> anyhow::Result<(Storage, Router)> {
    let cfg = test_config();
    let storage = Storage::new(cfg.database.clone());
    on_startup(&storage).await?;
    let app = build_app(storage.clone(), &cfg);
    Ok((storage, app))
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Vec<u8>)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, bytes.to_vec()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap()
}

fn post_query(query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/contacts/?{query}"))
        .body(Body::empty())
        .unwrap()
}

fn post_form(form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contacts/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

const JANE: &str = "first_name=Jane&last_name=Doe&email=jane@x.com&phone=5551234&status=1";

async fn create_jane(app: &Router) -> anyhow::Result<Value> {
    let (status, body) = send(app, post_query(JANE)).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(serde_json::from_slice(&body)?)
}

#[tokio::test]
async fn root_returns_greeting() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let (status, body) = send(&app, get("/")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!({"message": "Contact Applications!"}));
    Ok(())
}

#[tokio::test]
async fn root_works_with_storage_closed() -> anyhow::Result<()> {
    let (storage, app) = build_test_app().await?;
    on_shutdown(&storage).await?;
    let (status, body) = send(&app, get("/")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!({"message": "Contact Applications!"}));
    Ok(())
}

#[tokio::test]
async fn end_to_end_create_view_delete() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;

    let created = create_jane(&app).await?;
    let id = created["id"].as_i64().expect("numeric id");
    assert_eq!(
        created,
        json!({"id": id, "first_name": "Jane", "last_name": "Doe", "email": "jane@x.com"})
    );

    let (status, body) = send(&app, get(&format!("/contacts/view/{id}"))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, created);

    let (status, body) = send(&app, delete(&format!("/contacts/remove/{id}"))).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, body) = send(&app, get(&format!("/contacts/view/{id}"))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!({"detail": "Contact not found"}));
    Ok(())
}

#[tokio::test]
async fn create_accepts_form_body() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let (status, body) = send(&app, post_form(JANE)).await?;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body)?;
    assert_eq!(v["first_name"], "Jane");
    assert_eq!(v["email"], "jane@x.com");
    Ok(())
}

#[tokio::test]
async fn responses_never_expose_phone_status_or_timestamp() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let created = create_jane(&app).await?;
    let obj = created.as_object().expect("object body");
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["email", "first_name", "id", "last_name"]);

    let (_, body) = send(&app, get("/contacts/")).await?;
    let list: Value = serde_json::from_slice(&body)?;
    for item in list.as_array().expect("array body") {
        assert!(item.get("phone").is_none());
        assert!(item.get("status").is_none());
        assert!(item.get("updated_at").is_none());
    }
    Ok(())
}

#[tokio::test]
async fn create_missing_param_is_unprocessable() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let (status, body) = send(&app, post_query("first_name=Jane&last_name=Doe&email=jane@x.com&phone=1")).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let v: Value = serde_json::from_slice(&body)?;
    assert!(v["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn create_non_integer_status_is_unprocessable() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let (status, _) = send(
        &app,
        post_query("first_name=Jane&last_name=Doe&email=jane@x.com&phone=1&status=active"),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn create_without_any_params_is_unprocessable() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let req = Request::builder().method("POST").uri("/contacts/").body(Body::empty())?;
    let (status, _) = send(&app, req).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn view_unknown_id_is_not_found() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let (status, body) = send(&app, get("/contacts/view/999999")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!({"detail": "Contact not found"}));
    Ok(())
}

#[tokio::test]
async fn delete_twice_second_is_not_found() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let id = create_jane(&app).await?["id"].as_i64().expect("numeric id");

    let (first, _) = send(&app, delete(&format!("/contacts/remove/{id}"))).await?;
    assert_eq!(first, StatusCode::OK);
    let (second, body) = send(&app, delete(&format!("/contacts/remove/{id}"))).await?;
    assert_eq!(second, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn list_returns_created_rows_and_respects_limit() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    for _ in 0..3 {
        create_jane(&app).await?;
    }

    let (status, body) = send(&app, get("/contacts/")).await?;
    assert_eq!(status, StatusCode::OK);
    let all: Value = serde_json::from_slice(&body)?;
    assert!(all.as_array().expect("array body").len() >= 3);

    let (_, body) = send(&app, get("/contacts/?limit=2")).await?;
    let limited: Value = serde_json::from_slice(&body)?;
    assert_eq!(limited.as_array().expect("array body").len(), 2);

    let (_, body) = send(&app, get("/contacts/?skip=2&limit=5")).await?;
    let tail: Value = serde_json::from_slice(&body)?;
    assert_eq!(tail.as_array().expect("array body").len(), 1);
    Ok(())
}

#[tokio::test]
async fn view_html_renders_contact() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let id = create_jane(&app).await?["id"].as_i64().expect("numeric id");

    let resp = app.clone().oneshot(get(&format!("/contacts/view_html/{id}"))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let ctype = resp.headers().get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ctype.starts_with("text/html"));
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let page = String::from_utf8(bytes.to_vec())?;
    assert!(page.contains("Jane Doe"));
    assert!(page.contains("jane@x.com"));
    Ok(())
}

#[tokio::test]
async fn view_html_unknown_id_is_json_not_found() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let (status, body) = send(&app, get("/contacts/view_html/424242")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!({"detail": "Contact not found"}));
    Ok(())
}

#[tokio::test]
async fn storage_closed_is_internal_error() -> anyhow::Result<()> {
    let (storage, app) = build_test_app().await?;
    on_shutdown(&storage).await?;
    let (status, body) = send(&app, get("/contacts/view/1")).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!({"detail": "Internal Server Error"}));
    Ok(())
}

#[tokio::test]
async fn static_assets_are_served() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let (status, body) = send(&app, get("/static/style.css")).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());

    let (status, _) = send(&app, get("/static/missing.png")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let (status, body) = send(&app, get("/openapi.json")).await?;
    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_slice(&body)?;
    assert_eq!(doc["info"]["title"], "Contact.ly");
    assert!(doc["paths"]["/contacts/view/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn non_integer_path_id_is_unprocessable_json() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    for uri in ["/contacts/view/abc", "/contacts/view_html/abc"] {
        let (status, body) = send(&app, get(uri)).await?;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        let v: Value = serde_json::from_slice(&body)?;
        assert!(v["detail"].is_string(), "{uri}");
    }
    let (status, body) = send(&app, delete("/contacts/remove/abc")).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(serde_json::from_slice::<Value>(&body)?["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn out_of_range_id_is_not_found() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let (status, body) = send(&app, get("/contacts/view/3000000000")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!({"detail": "Contact not found"}));

    let (status, _) = send(&app, get("/contacts/view/99999999999999999999999")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, delete("/contacts/remove/3000000000")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn malformed_list_params_are_unprocessable_json() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    for uri in ["/contacts/?limit=abc", "/contacts/?skip=-1"] {
        let (status, body) = send(&app, get(uri)).await?;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        let v: Value = serde_json::from_slice(&body)?;
        assert!(v["detail"].is_string(), "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn unrelated_query_params_fall_back_to_form_body() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let req = Request::builder()
        .method("POST")
        .uri("/contacts/?utm=x")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(JANE))?;
    let (status, body) = send(&app, req).await?;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body)?;
    assert_eq!(v["first_name"], "Jane");
    Ok(())
}

#[tokio::test]
async fn unrelated_query_params_without_body_are_unprocessable() -> anyhow::Result<()> {
    let (_storage, app) = build_test_app().await?;
    let (status, body) = send(&app, post_query("utm=x")).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(serde_json::from_slice::<Value>(&body)?["detail"].is_string());
    Ok(())
}
