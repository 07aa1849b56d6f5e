use axum::response::Json;
use axum::Router;
use serde_json::{json, Value};

/// Serve an axum router on an ephemeral local port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock server failed");
    });

    format!("http://{}", addr)
}

/// Build one page of repository objects the way the listing endpoint
/// returns them. Extra fields are present to mirror the real payload.
pub fn repo_page(count: usize, offset: usize) -> Json<Value> {
    let repos: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": 1000 + offset + i,
                "name": format!("repo-{}", offset + i),
                "full_name": format!("someone/repo-{}", offset + i),
                "description": "A test repository",
                "fork": false,
                "stargazers_count": offset + i,
                "language": "Rust",
                "created_at": "2023-01-01T00:00:00Z",
                "updated_at": "2023-06-01T00:00:00Z"
            })
        })
        .collect();

    Json(json!(repos))
}
