//! End-to-end tests for the bootstrap path: wire an app, serve its router
//! over TCP, and observe real responses.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::Json;
use serde_json::{json, Value};

use keel::{App, RunMode};

async fn home(_request: Request) -> Json<Value> {
    Json(json!({ "message": "Welcome" }))
}

#[tokio::test]
async fn test_bootstrap_serves_registered_routes() {
    let mut app = App::bootstrap().expect("bootstrap");
    // With an empty environment the mode falls back to debug.
    assert_eq!(app.mode(), RunMode::Debug);

    app.routes_mut().get("/", home);

    let base_url = common::spawn_instance(app.router()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["message"], "Welcome");
}

#[tokio::test]
async fn test_unregistered_route_is_not_found() {
    let mut app = App::bootstrap().expect("bootstrap");
    app.routes_mut().get("/known", |_req: Request| async { StatusCode::OK });

    let base_url = common::spawn_instance(app.router()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{base_url}/unknown"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_registered_hook_observes_each_request_once() {
    let counter = Arc::new(AtomicUsize::new(0));

    let mut app = App::bootstrap().expect("bootstrap");
    {
        let counter = counter.clone();
        app.integrations_mut()
            .register(move |request: Request, next: Next| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    next.run(request).await
                }
            });
    }
    app.routes_mut().get("/", home);

    let base_url = common::spawn_instance(app.router()).await;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        client
            .get(format!("{base_url}/"))
            .send()
            .await
            .expect("request should succeed");
    }

    assert_eq!(counter.load(Ordering::SeqCst), 3);
}
