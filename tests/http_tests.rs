//! End-to-end HTTP behavior against the router.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use brownbear::assets::ingest::ingest_directory;
use brownbear::seed;
use brownbear::web;

async fn get(router: axum::Router, uri: &str) -> axum::http::Response<Body> {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_end_to_end_asset_serving() {
    let temp = TempDir::new().unwrap();
    let state = common::test_state(&temp).await;

    let src = temp.path().join("static");
    common::write_file(&src, "images/bear.png", &[0u8; 10]);
    common::write_file(&src, "audio/growl.mp3", &[0u8; 20]);
    ingest_directory(&state.assets, &src).await.unwrap();
    assert_eq!(state.assets.count().await.unwrap(), 2);

    let app = web::router(state);

    // Subdirectory prefix omitted; resolver fills it in.
    let response = get(app.clone(), "/static_db/bear.png").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=86400"
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(body.len(), 10);

    let response = get(app.clone(), "/static_db/growl.mp3").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "audio/mpeg"
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(body.len(), 20);

    let response = get(app, "/static_db/missing.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_not_found_body_does_not_leak_paths() {
    let temp = TempDir::new().unwrap();
    let state = common::test_state(&temp).await;
    let app = web::router(state);

    let response = get(app, "/static_db/secret/../etc/passwd.txt").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8_lossy(&body);
    assert!(!text.contains("passwd"));
    assert!(!text.contains("/"));
}

#[tokio::test]
async fn test_exact_path_request() {
    let temp = TempDir::new().unwrap();
    let state = common::test_state(&temp).await;

    state
        .assets
        .put_if_absent("images/bear.png", "image/png", vec![5u8; 10])
        .await
        .unwrap();

    let app = web::router(state);
    let response = get(app, "/static_db/images/bear.png").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_index_renders_without_seed() {
    let temp = TempDir::new().unwrap();
    let state = common::test_state(&temp).await;
    let app = web::router(state);

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("No pages yet"));
}

#[tokio::test]
async fn test_index_renders_seeded_book() {
    let temp = TempDir::new().unwrap();
    let state = common::test_state(&temp).await;

    // Static dir is absent; seed logs the ingest miss and still loads content.
    seed::seed(&state.db, &state.config).await.unwrap();
    // Second seed is a no-op.
    seed::seed(&state.db, &state.config).await.unwrap();

    let app = web::router(state);
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Brown Bear, Brown Bear, What Do You See?"));
    assert!(html.contains("I see a red bird looking at me"));
    assert!(html.contains("/static_db/images/brown_bear.png"));
    // One card per animal, not duplicated by the second seed run.
    assert_eq!(html.matches("class=\"page-card\"").count(), 9);
}

#[tokio::test]
async fn test_health_endpoint() {
    let temp = TempDir::new().unwrap();
    let state = common::test_state(&temp).await;
    let app = web::router(state);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("ok"));
}
