use axum::body::Body;
use axum::http::{Request, StatusCode};
use cicd_demo::server;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn get(uri: &str) -> axum::response::Response {
    let app = server::router();
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_index_returns_greeting() {
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("Hello World"));
}

#[tokio::test]
async fn test_health_returns_ok_json() {
    let response = get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let response = get("/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
