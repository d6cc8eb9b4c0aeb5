//! Retrieval resolver: exact-match priority and subdirectory fallback order.

mod common;

use tempfile::TempDir;

use brownbear::assets::resolve::{resolve, CANDIDATE_SUBDIRS};

#[tokio::test]
async fn test_exact_match_wins_over_fallback() {
    let temp = TempDir::new().unwrap();
    let store = common::test_store(&temp).await;

    store
        .put_if_absent("a.png", "image/png", b"exact".to_vec())
        .await
        .unwrap();
    store
        .put_if_absent("images/a.png", "image/png", b"fallback".to_vec())
        .await
        .unwrap();

    let asset = resolve(&store, "a.png").await.unwrap().unwrap();
    assert_eq!(asset.data, b"exact".to_vec());
}

#[tokio::test]
async fn test_fallback_order_is_list_order() {
    let temp = TempDir::new().unwrap();
    let store = common::test_store(&temp).await;

    // Contrived: the same filename under two candidate subdirectories.
    // "images" is listed before "js", so it wins.
    assert_eq!(CANDIDATE_SUBDIRS, ["images", "js", "audio"]);
    store
        .put_if_absent("js/a.png", "image/png", b"from-js".to_vec())
        .await
        .unwrap();
    store
        .put_if_absent("images/a.png", "image/png", b"from-images".to_vec())
        .await
        .unwrap();

    let asset = resolve(&store, "a.png").await.unwrap().unwrap();
    assert_eq!(asset.data, b"from-images".to_vec());
}

#[tokio::test]
async fn test_audio_fallback() {
    let temp = TempDir::new().unwrap();
    let store = common::test_store(&temp).await;

    store
        .put_if_absent("audio/growl.mp3", "audio/mpeg", vec![7u8; 20])
        .await
        .unwrap();

    let asset = resolve(&store, "growl.mp3").await.unwrap().unwrap();
    assert_eq!(asset.content_type, "audio/mpeg");
}

#[tokio::test]
async fn test_no_match_is_none() {
    let temp = TempDir::new().unwrap();
    let store = common::test_store(&temp).await;

    store
        .put_if_absent("images/a.png", "image/png", vec![1])
        .await
        .unwrap();

    assert!(resolve(&store, "missing.png").await.unwrap().is_none());
    // Nested requests are not prefixed a second time.
    assert!(resolve(&store, "deep/a.png").await.unwrap().is_none());
}
