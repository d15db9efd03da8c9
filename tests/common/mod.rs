//! Shared utilities for integration tests.

use axum::Router;

/// Serve a built server instance on an ephemeral local port.
///
/// Returns the base URL for client requests. The listener task lives for
/// the rest of the test process.
pub async fn spawn_instance(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    format!("http://{addr}")
}
