//! Ingestion walker: idempotence, content types, missing source root.

mod common;

use tempfile::TempDir;

use brownbear::assets::ingest::ingest_directory;

#[tokio::test]
async fn test_ingest_directory_tree() {
    let temp = TempDir::new().unwrap();
    let store = common::test_store(&temp).await;

    let src = temp.path().join("static");
    common::write_file(&src, "images/bear.png", &[0u8; 10]);
    common::write_file(&src, "audio/growl.mp3", &[0u8; 20]);
    common::write_file(&src, "js/script.js", b"console.log('hi');");

    let report = ingest_directory(&store, &src).await.unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.inserted, 3);
    assert_eq!(report.already_present, 0);
    assert_eq!(report.failed, 0);
    assert_eq!(store.count().await.unwrap(), 3);

    let bear = store.get("images/bear.png").await.unwrap().unwrap();
    assert_eq!(bear.content_type, "image/png");
    assert_eq!(bear.data.len(), 10);

    let growl = store.get("audio/growl.mp3").await.unwrap().unwrap();
    assert_eq!(growl.content_type, "audio/mpeg");
    assert_eq!(growl.data.len(), 20);
}

#[tokio::test]
async fn test_ingest_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let store = common::test_store(&temp).await;

    let src = temp.path().join("static");
    common::write_file(&src, "images/bear.png", &[1u8; 10]);
    common::write_file(&src, "notes.txt", b"hello");

    let first = ingest_directory(&store, &src).await.unwrap();
    assert_eq!(first.inserted, 2);

    let second = ingest_directory(&store, &src).await.unwrap();
    assert_eq!(second.total, 2);
    assert_eq!(second.inserted, 0);
    assert_eq!(second.already_present, 2);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_unrecognized_extension_gets_octet_stream() {
    let temp = TempDir::new().unwrap();
    let store = common::test_store(&temp).await;

    let src = temp.path().join("static");
    common::write_file(&src, "data.xyz", &[9u8; 4]);

    ingest_directory(&store, &src).await.unwrap();
    let asset = store.get("data.xyz").await.unwrap().unwrap();
    assert_eq!(asset.content_type, "application/octet-stream");
}

#[tokio::test]
async fn test_missing_source_root_is_fatal() {
    let temp = TempDir::new().unwrap();
    let store = common::test_store(&temp).await;

    let missing = temp.path().join("nope");
    assert!(ingest_directory(&store, &missing).await.is_err());
}
