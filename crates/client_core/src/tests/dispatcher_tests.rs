use super::*;
use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use tokio::{net::TcpListener, sync::Mutex};

async fn spawn_server(app: Router) -> anyhow::Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}/api"))
}

fn dispatcher_for(base_url: &str) -> HttpDispatcher {
    HttpDispatcher::new(ClientSettings::new(base_url).expect("settings"))
}

#[test]
fn blank_names_fall_back_to_default() {
    assert_eq!(normalize_name("  ", "World"), "World");
    assert_eq!(normalize_name("", "World"), "World");
    assert_eq!(normalize_name("  Ada \t", "World"), "Ada");
}

#[test]
fn greeting_request_carries_normalized_name() {
    let request = DispatchRequest::greeting(HttpMethod::Post, "\t ", "World");
    assert_eq!(request.endpoint, Endpoint::Greeting);
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.query_value(), Some("World"));
}

#[test]
fn endpoint_url_escapes_query_value() {
    let url = endpoint_url(
        "http://localhost:35000/api",
        Endpoint::Greeting,
        Some(("name", "Ana María & co")),
    )
    .expect("url");
    assert_eq!(url.path(), "/api/hello");
    assert_eq!(url.query(), Some("name=Ana+Mar%C3%ADa+%26+co"));
}

#[test]
fn endpoint_url_tolerates_trailing_slash() {
    let url = endpoint_url("http://localhost:35000/api/", Endpoint::Quote, None).expect("url");
    assert_eq!(url.as_str(), "http://localhost:35000/api/quote");
}

#[tokio::test]
async fn whitespace_name_is_sent_as_world() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let seen_by_route = seen.clone();
    let app = Router::new().route(
        "/api/hello",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let seen = seen_by_route.clone();
            async move {
                let name = params.get("name").cloned().unwrap_or_default();
                seen.lock().await.push(name.clone());
                Json(json!({ "message": format!("Hello, {name}!"), "status": "success" }))
            }
        }),
    );
    let base_url = spawn_server(app).await.expect("spawn server");

    let dispatcher = dispatcher_for(&base_url);
    let value = dispatcher
        .dispatch(&DispatchRequest::greeting(HttpMethod::Get, "  ", "World"))
        .await
        .expect("dispatch");

    assert_eq!(value["message"], "Hello, World!");
    assert_eq!(*seen.lock().await, vec!["World".to_string()]);
}

#[tokio::test]
async fn post_greeting_sends_json_content_type() {
    let app = Router::new().route(
        "/api/hello",
        axum::routing::post(|headers: axum::http::HeaderMap| async move {
            let content_type = headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({ "content_type": content_type }))
        }),
    );
    let base_url = spawn_server(app).await.expect("spawn server");

    let value = dispatcher_for(&base_url)
        .dispatch(&DispatchRequest::greeting(HttpMethod::Post, "Ada", "World"))
        .await
        .expect("dispatch");
    assert_eq!(value["content_type"], "application/json");
}

#[tokio::test]
async fn error_statuses_carry_code_and_text() {
    let app = Router::new()
        .route(
            "/api/weather",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/api/quote", get(|| async { StatusCode::NOT_FOUND }));
    let base_url = spawn_server(app).await.expect("spawn server");
    let dispatcher = dispatcher_for(&base_url);

    let err = dispatcher
        .dispatch(&DispatchRequest::get(Endpoint::Weather))
        .await
        .expect_err("500 must fail");
    assert_eq!(err, DispatchError::http_status(500, "Internal Server Error"));

    let err = dispatcher
        .dispatch(&DispatchRequest::get(Endpoint::Quote))
        .await
        .expect_err("404 must fail");
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), "Error HTTP 404: Not Found");
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let app = Router::new().route("/api/quote", get(|| async { "{\"content\": " }));
    let base_url = spawn_server(app).await.expect("spawn server");

    let err = dispatcher_for(&base_url)
        .dispatch(&DispatchRequest::get(Endpoint::Quote))
        .await
        .expect_err("truncated body must fail");
    assert!(err.is_parse(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn slow_server_times_out() {
    let app = Router::new().route(
        "/api/weather",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let base_url = spawn_server(app).await.expect("spawn server");
    let settings = ClientSettings::new(base_url)
        .expect("settings")
        .with_timeout(Some(Duration::from_millis(150)));

    let err = HttpDispatcher::new(settings)
        .dispatch(&DispatchRequest::get(Endpoint::Weather))
        .await
        .expect_err("request must time out");
    assert!(matches!(
        err,
        DispatchError::Transport {
            kind: TransportKind::Timeout,
            ..
        }
    ));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = dispatcher_for(&format!("http://{addr}/api"))
        .dispatch(&DispatchRequest::get(Endpoint::Quote))
        .await
        .expect_err("nothing is listening");
    assert!(err.is_transport());
    assert_eq!(err.status_code(), None);
}
