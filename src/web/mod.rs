//! HTTP surface: the book page, database-served static assets, and the
//! health endpoint.

pub mod templates;

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;
use tera::Context;
use tower_http::trace::TraceLayer;

use crate::assets::{resolve::resolve, AssetStore};
use crate::config::Config;
use crate::db::entities::{page, Animal, Book, Page};
use crate::error::{Result, ServerError};

/// Assets are immutable once stored, so clients may cache for a day.
const CACHE_CONTROL_VALUE: &str = "public, max-age=86400";

/// Application state shared across handlers
pub struct AppState {
    pub db: DatabaseConnection,
    pub assets: AssetStore,
    pub config: Config,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let assets = AssetStore::new(db.clone());
        Self { db, assets, config }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static_db/*path", get(serve_asset))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[derive(Serialize)]
struct PageView {
    number: i32,
    content: String,
    animal: String,
    image: String,
    audio: String,
    sound_id: String,
}

/// The single content page, rendered from the seeded rows.
async fn index(State(state): State<Arc<AppState>>) -> Result<Response> {
    let book = Book::find().one(&state.db).await?;
    let rows = Page::find()
        .find_also_related(Animal)
        .order_by_asc(page::Column::Number)
        .all(&state.db)
        .await?;

    let pages: Vec<PageView> = rows
        .into_iter()
        .map(|(page, animal)| {
            let name = animal.map(|a| a.name).unwrap_or_default();
            let slug = slugify(&name);
            PageView {
                number: page.number,
                content: page.content,
                image: format!("images/{slug}.png"),
                audio: format!("audio/{slug}.mp3"),
                sound_id: format!("sound-{slug}"),
                animal: name,
            }
        })
        .collect();

    let mut context = Context::new();
    if let Some(book) = &book {
        context.insert("title", &book.title);
        context.insert("author", &book.author);
    }
    context.insert("has_book", &book.is_some());
    context.insert("pages", &pages);

    let html = templates::render("index.html", &context)?;
    Ok(Html(html).into_response())
}

/// Serve a stored asset, tolerating requests that omit the subdirectory
/// prefix.
async fn serve_asset(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response> {
    let asset = resolve(&state.assets, &path)
        .await?
        .ok_or(ServerError::AssetNotFound(path))?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, asset.content_type)
        .header(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)
        .body(Body::from(asset.data))
        .map_err(|e| ServerError::Internal(format!("failed to build response: {e}")))?;
    Ok(response)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health(State(state): State<Arc<AppState>>) -> Response {
    match crate::admin::health_check(&state.db, &state.config).await {
        Ok(()) => (StatusCode::OK, Json(HealthBody { status: "ok" })).into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthBody { status: "unavailable" }),
            )
                .into_response()
        }
    }
}

fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Brown Bear"), "brown_bear");
        assert_eq!(slugify("Goldfish"), "goldfish");
    }
}
