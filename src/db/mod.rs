//! SQLite persistence using SeaORM.

pub mod entities;

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::path::Path;

/// Open (creating if missing) the database file and ensure tables exist.
pub async fn init_database(db_path: &Path) -> Result<DatabaseConnection, DbErr> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    // Rollback journal instead of WAL: backup and restore copy the database
    // file, and a WAL sidecar would make a bare file copy incomplete. SQLite
    // defaults to the rollback journal, and sqlx leaves journal_mode alone
    // unless asked, so no explicit setting is needed (sqlx also rejects
    // journal_mode as a URL parameter).
    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());
    tracing::info!("Connecting to database: {}", db_url);

    let db = Database::connect(&db_url).await?;

    create_tables(&db).await?;

    Ok(db)
}

/// Create all tables if they don't exist
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Static assets served from the database instead of the filesystem
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS static_files (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            path TEXT NOT NULL UNIQUE,
            content_type TEXT NOT NULL,
            data BLOB NOT NULL,
            created_at INTEGER NOT NULL
        )
        "#
        .to_string(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL
        )
        "#
        .to_string(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS animals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#
        .to_string(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS pages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            number INTEGER NOT NULL,
            content TEXT NOT NULL,
            book_id INTEGER NOT NULL,
            animal_id INTEGER NOT NULL,
            FOREIGN KEY (book_id) REFERENCES books(id) ON DELETE CASCADE,
            FOREIGN KEY (animal_id) REFERENCES animals(id) ON DELETE CASCADE
        )
        "#
        .to_string(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"CREATE INDEX IF NOT EXISTS idx_pages_book ON pages(book_id)"#.to_string(),
    ))
    .await?;

    tracing::info!("Database tables initialized");
    Ok(())
}

/// Drop every table. Destructive; confirmation is enforced at the CLI
/// boundary, not here.
pub async fn drop_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    for table in ["pages", "animals", "books", "static_files"] {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            format!("DROP TABLE IF EXISTS {table}"),
        ))
        .await?;
    }
    Ok(())
}

/// Drop and recreate the schema.
pub async fn reset_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    drop_tables(db).await?;
    create_tables(db).await?;
    tracing::info!("Database schema reset");
    Ok(())
}
