use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;
use serde_json::{json, Value};

use keel::App;

/// Header carrying the per-request correlation ID.
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::bootstrap()?;

    app.middlewares_mut().register(request_id);
    app.routes_mut().get("/", home);

    let port = std::env::var("PORT").ok().and_then(|p| p.parse().ok());
    app.run(port).await?;

    Ok(())
}

/// Show the home page.
async fn home(_request: Request) -> Json<Value> {
    Json(json!({ "message": "Welcome to Keel" }))
}

/// Tag every request and its response with a correlation ID.
async fn request_id(mut request: Request, next: Next) -> Response {
    let id = match request.headers().get(&X_REQUEST_ID) {
        Some(existing) => existing.clone(),
        None => {
            let generated = uuid::Uuid::new_v4().to_string();
            let value = HeaderValue::from_str(&generated)
                .unwrap_or_else(|_| HeaderValue::from_static("invalid"));
            request.headers_mut().insert(X_REQUEST_ID.clone(), value.clone());
            value
        }
    };

    let mut response = next.run(request).await;
    response.headers_mut().insert(X_REQUEST_ID.clone(), id);
    response
}
