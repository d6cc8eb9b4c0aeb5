//! Administrative operations: schema reset, backup/restore of the SQLite
//! file, health check, and configuration audit.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::assets::AssetStore;
use crate::config::Config;
use crate::db;
use crate::error::{Result, ServerError};

/// Ask for interactive confirmation on stdin. Destructive commands refuse
/// to run without it unless `--yes` was passed.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Drop and recreate the schema.
pub async fn reset(db: &DatabaseConnection, assume_yes: bool) -> Result<()> {
    if !assume_yes && !confirm("This destroys ALL data in the database. Continue?")? {
        info!("Reset aborted");
        return Ok(());
    }
    db::reset_tables(db).await?;
    Ok(())
}

/// Copy the database file to a timestamped location. Returns the backup path.
pub fn backup(config: &Config, out: Option<PathBuf>) -> Result<PathBuf> {
    if !config.database_path.is_file() {
        return Err(ServerError::Config(format!(
            "database file {} does not exist",
            config.database_path.display()
        )));
    }

    let dest = match out {
        Some(path) => path,
        None => {
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            config.data_dir.join("backups").join(format!("app-{stamp}.db"))
        }
    };
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::copy(&config.database_path, &dest)?;
    info!("Backed up {} to {}", config.database_path.display(), dest.display());
    Ok(dest)
}

/// Copy a backup over the live database file.
pub fn restore(config: &Config, from: &Path, assume_yes: bool) -> Result<()> {
    if !from.is_file() {
        return Err(ServerError::Config(format!(
            "backup file {} does not exist",
            from.display()
        )));
    }
    if !assume_yes
        && !confirm(&format!(
            "This overwrites {} with {}. Continue?",
            config.database_path.display(),
            from.display()
        ))?
    {
        info!("Restore aborted");
        return Ok(());
    }

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(from, &config.database_path)?;
    info!("Restored {} from {}", config.database_path.display(), from.display());
    Ok(())
}

/// Verify that a trivial query succeeds and that the data directory is
/// writable. Also serves the request-path `/health` endpoint, so the
/// filesystem probe is async rather than blocking the runtime.
pub async fn health_check(db: &DatabaseConnection, config: &Config) -> Result<()> {
    let store = AssetStore::new(db.clone());
    let count = store.count().await?;
    info!("Database reachable, {count} assets stored");

    tokio::fs::create_dir_all(&config.data_dir).await?;
    let probe = config.data_dir.join(".health-probe");
    tokio::fs::write(&probe, b"ok").await?;
    tokio::fs::remove_file(&probe).await?;
    info!("Data directory {} is writable", config.data_dir.display());

    Ok(())
}

/// Report configuration defects as warnings. Returns how many were found.
pub fn check_config(config: &Config) -> usize {
    let defects = config.defects();
    if defects.is_empty() {
        info!("Configuration OK");
    } else {
        for defect in &defects {
            warn!("Configuration: {defect}");
        }
    }
    defects.len()
}
