//! Request-time path resolution.
//!
//! Some historical callers request `bear.png` when the stored path is
//! `images/bear.png`. After an exact-match miss we retry under each
//! candidate subdirectory, in order; the first hit wins. The order is a
//! deterministic tie-break, not an accident.

use sea_orm::DbErr;
use tracing::debug;

use super::AssetStore;
use crate::db::entities::static_file;

/// Conventional subdirectories tried, in order, when the exact path misses.
pub const CANDIDATE_SUBDIRS: [&str; 3] = ["images", "js", "audio"];

pub async fn resolve(
    store: &AssetStore,
    requested: &str,
) -> Result<Option<static_file::Model>, DbErr> {
    if let Some(asset) = store.get(requested).await? {
        debug!("Resolved {requested} exactly");
        return Ok(Some(asset));
    }

    for subdir in CANDIDATE_SUBDIRS {
        let candidate = format!("{subdir}/{requested}");
        if let Some(asset) = store.get(&candidate).await? {
            debug!("Resolved {requested} via {candidate}");
            return Ok(Some(asset));
        }
    }

    debug!("No asset found for {requested}");
    Ok(None)
}
