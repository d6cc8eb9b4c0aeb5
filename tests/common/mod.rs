//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use brownbear::assets::AssetStore;
use brownbear::config::{AppEnv, Config};
use brownbear::db;
use brownbear::web::AppState;

/// Fresh file-backed database in a temp directory. The TempDir must outlive
/// the connection.
pub async fn test_db(temp: &TempDir) -> DatabaseConnection {
    let db_path = temp.path().join("test.db");
    db::init_database(&db_path)
        .await
        .expect("failed to initialize test database")
}

pub fn test_config(temp: &TempDir) -> Config {
    Config {
        secret_key: "test-secret".to_string(),
        data_dir: temp.path().to_path_buf(),
        database_path: temp.path().join("test.db"),
        static_dir: temp.path().join("static"),
        host: "127.0.0.1".to_string(),
        port: 0,
        env: AppEnv::Testing,
        debug: false,
    }
}

pub async fn test_state(temp: &TempDir) -> Arc<AppState> {
    let db = test_db(temp).await;
    Arc::new(AppState::new(db, test_config(temp)))
}

pub async fn test_store(temp: &TempDir) -> AssetStore {
    AssetStore::new(test_db(temp).await)
}

/// Write a file under `root`, creating intermediate directories.
pub fn write_file(root: &Path, rel: &str, data: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, data).unwrap();
}
