//! Static asset entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "static_files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Location relative to the static root, forward-slash separators.
    /// Unique; the lookup key.
    pub path: String,
    /// MIME type inferred at ingestion, never recomputed.
    pub content_type: String,
    pub data: Vec<u8>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
