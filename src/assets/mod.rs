//! Database-backed static asset store.
//!
//! Assets are write-once: a path is inserted at most once and its bytes are
//! never updated afterwards, so downstream caching needs no invalidation.

pub mod content_type;
pub mod ingest;
pub mod resolve;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};

use crate::db::entities::{static_file, StaticFile};

/// Outcome of [`AssetStore::put_if_absent`]. The already-present case is an
/// expected result during re-ingestion, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Inserted,
    AlreadyPresent,
}

#[derive(Clone)]
pub struct AssetStore {
    db: DatabaseConnection,
}

impl AssetStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Exact-match lookup by relative path.
    pub async fn get(&self, path: &str) -> Result<Option<static_file::Model>, DbErr> {
        StaticFile::find()
            .filter(static_file::Column::Path.eq(path))
            .one(&self.db)
            .await
    }

    /// Insert a new asset unless one with the same path exists.
    ///
    /// Check-then-insert is not atomic against a second concurrent writer;
    /// ingestion runs administratively with a single writer.
    pub async fn put_if_absent(
        &self,
        path: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<PutOutcome, DbErr> {
        if self.get(path).await?.is_some() {
            return Ok(PutOutcome::AlreadyPresent);
        }

        static_file::ActiveModel {
            path: Set(path.to_string()),
            content_type: Set(content_type.to_string()),
            data: Set(data),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(PutOutcome::Inserted)
    }

    /// Number of stored assets; used to decide whether ingestion has run.
    pub async fn count(&self) -> Result<u64, DbErr> {
        StaticFile::find().count(&self.db).await
    }

    /// Drop and recreate the whole schema. Administrative only.
    pub async fn reset(&self) -> Result<(), DbErr> {
        crate::db::reset_tables(&self.db).await
    }
}
