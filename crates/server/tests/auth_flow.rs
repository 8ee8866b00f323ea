use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use configs::{AppConfig, PasswordStorage};
use server::startup::build_app;

async fn app() -> Router {
    build_app(&AppConfig::default()).await
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Option<String>, Vec<u8>)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, content_type, body.to_vec()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn registration(email: &str) -> Value {
    json!({
        "name": "A",
        "password": "p",
        "email": email,
        "phoneNumber": "1",
        "age": 30,
        "address": "addr",
        "role": "User"
    })
}

async fn register(app: &Router, body: Value) -> anyhow::Result<bool> {
    let (status, _, bytes) = send(app, post_json("/auth/register", body)).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(serde_json::from_slice(&bytes)?)
}

async fn login(app: &Router, email: &str, password: &str) -> anyhow::Result<String> {
    let (status, content_type, bytes) =
        send(app, post_json("/auth/login", json!({"email": email, "password": password}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap_or_default().starts_with("text/plain"));
    Ok(String::from_utf8(bytes)?)
}

async fn list(app: &Router) -> anyhow::Result<Vec<Value>> {
    let (status, _, bytes) = send(app, get("/user")).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_auth_probe_returns_auth_string() -> anyhow::Result<()> {
    let app = app().await;
    let (status, _, bytes) = send(&app, get("/auth")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"Auth");
    Ok(())
}

#[tokio::test]
async fn test_register_and_login_flow() -> anyhow::Result<()> {
    let app = app().await;

    assert!(register(&app, registration("a@x.com")).await?);
    assert_eq!(list(&app).await?.len(), 1);

    assert_eq!(login(&app, "a@x.com", "p").await?, "Login success");
    assert_eq!(login(&app, "a@x.com", "P").await?, "Login failed");
    assert_eq!(login(&app, "a@x.com ", "p").await?, "Login failed");
    assert_eq!(login(&app, "nobody@x.com", "p").await?, "Login failed");
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_rejected() -> anyhow::Result<()> {
    let app = app().await;
    assert!(register(&app, registration("a@x.com")).await?);

    let mut other = registration("a@x.com");
    other["name"] = json!("Jane");
    other["phoneNumber"] = json!("0987654321");
    other["age"] = json!(25);
    assert!(!register(&app, other).await?);
    assert_eq!(list(&app).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_blank_null_and_missing_fields_rejected() -> anyhow::Result<()> {
    let app = app().await;
    for field in ["name", "password", "email", "phoneNumber", "address", "role"] {
        for bad in [json!(null), json!(""), json!("  ")] {
            let mut body = registration("a@x.com");
            body[field] = bad;
            assert!(!register(&app, body).await?, "{field} should be required");
        }
        let mut body = registration("a@x.com");
        body.as_object_mut().unwrap().remove(field);
        assert!(!register(&app, body).await?);
    }
    for age in [json!(0), json!(-3), json!(null)] {
        let mut body = registration("a@x.com");
        body["age"] = age;
        assert!(!register(&app, body).await?);
    }
    assert!(list(&app).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_listing_hides_password_and_role() -> anyhow::Result<()> {
    let app = app().await;
    for email in ["c@x.com", "a@x.com", "b@x.com"] {
        assert!(register(&app, registration(email)).await?);
    }

    let users = list(&app).await?;
    let emails: Vec<&str> = users.iter().filter_map(|u| u["email"].as_str()).collect();
    assert_eq!(emails, vec!["c@x.com", "a@x.com", "b@x.com"]);
    for u in &users {
        let obj = u.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["address", "age", "email", "id", "name", "phoneNumber"]);
        assert_eq!(u["phoneNumber"], "1");
        assert_eq!(u["age"], 30);
    }
    Ok(())
}

#[tokio::test]
async fn test_seeded_demo_users_can_log_in() -> anyhow::Result<()> {
    let mut cfg = AppConfig::default();
    cfg.auth.seed_demo_users = true;
    let app = build_app(&cfg).await;

    assert_eq!(list(&app).await?.len(), 2);
    assert_eq!(login(&app, "email@gmail.com", "admin").await?, "Login success");
    assert_eq!(login(&app, "a", "user").await?, "Login success");
    assert!(!register(&app, registration("email@gmail.com")).await?);
    Ok(())
}

#[tokio::test]
async fn test_argon2_storage_keeps_wire_contract() -> anyhow::Result<()> {
    let mut cfg = AppConfig::default();
    cfg.auth.password_storage = PasswordStorage::Argon2;
    let app = build_app(&cfg).await;

    let mut body = registration("a@x.com");
    body["password"] = json!("Secret1");
    assert!(register(&app, body).await?);
    assert_eq!(login(&app, "a@x.com", "Secret1").await?, "Login success");
    assert_eq!(login(&app, "a@x.com", "secret1").await?, "Login failed");
    Ok(())
}

#[tokio::test]
async fn test_health_and_openapi_document() -> anyhow::Result<()> {
    let app = app().await;
    let (status, _, bytes) = send(&app, get("/health")).await?;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(health["status"], "ok");

    let (status, _, bytes) = send(&app, get("/api-docs/openapi.json")).await?;
    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_slice(&bytes)?;
    assert!(doc["paths"]["/auth/register"].is_object());
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_is_rejected_by_extractor() -> anyhow::Result<()> {
    let app = app().await;
    let req = Request::builder()
        .method("POST")
        .uri("/auth/register")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let (status, _, _) = send(&app, req).await?;
    assert!(status.is_client_error());
    assert!(list(&app).await?.is_empty());
    Ok(())
}
