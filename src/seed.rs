//! One-time content seeding: the book, its animals, and one page per animal,
//! followed by static-file ingestion.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::{info, warn};

use crate::assets::{ingest::ingest_directory, AssetStore};
use crate::config::Config;
use crate::db::entities::{animal, book, page, Page};
use crate::error::Result;

const BOOK_TITLE: &str = "Brown Bear, Brown Bear, What Do You See?";
const BOOK_AUTHOR: &str = "Bill Martin Jr.";

/// Reading order of the book. Each page's caption names the next animal.
const ANIMALS: &[&str] = &[
    "Brown Bear",
    "Red Bird",
    "Yellow Duck",
    "Blue Horse",
    "Green Frog",
    "Purple Cat",
    "White Dog",
    "Black Sheep",
    "Goldfish",
];

/// Create the book content unless pages already exist, then ingest the
/// static directory. Safe to run repeatedly.
pub async fn seed(db: &DatabaseConnection, config: &Config) -> Result<()> {
    let existing = Page::find().count(db).await?;
    if existing > 0 {
        info!("Database already contains {existing} pages, skipping content seed");
    } else {
        seed_book(db).await?;
    }

    let store = AssetStore::new(db.clone());
    match ingest_directory(&store, &config.static_dir).await {
        Ok(report) => info!(
            "Static ingestion after seed: {} inserted, {} already present",
            report.inserted, report.already_present
        ),
        // Content rows are still useful without assets; don't fail the seed.
        Err(e) => warn!("Static ingestion skipped: {e}"),
    }

    Ok(())
}

async fn seed_book(db: &DatabaseConnection) -> Result<()> {
    info!("No pages found, creating book content");

    let book = book::ActiveModel {
        title: Set(BOOK_TITLE.to_string()),
        author: Set(BOOK_AUTHOR.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mut animal_ids = Vec::with_capacity(ANIMALS.len());
    for name in ANIMALS {
        let row = animal::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        animal_ids.push(row.id);
    }

    let mut pages = Vec::with_capacity(ANIMALS.len());
    for (i, name) in ANIMALS.iter().enumerate() {
        pages.push(page::ActiveModel {
            number: Set(i as i32 + 1),
            content: Set(page_caption(name, ANIMALS.get(i + 1).copied())),
            book_id: Set(book.id),
            animal_id: Set(animal_ids[i]),
            ..Default::default()
        });
    }
    Page::insert_many(pages).exec(db).await?;

    info!("Seeded '{BOOK_TITLE}' with {} pages", ANIMALS.len());
    Ok(())
}

fn page_caption(animal: &str, next: Option<&str>) -> String {
    match next {
        Some(next) => format!(
            "{animal}, {animal}, what do you see? I see a {} looking at me.",
            next.to_lowercase()
        ),
        None => format!(
            "{animal}, {animal}, what do you see? I see children looking at me!"
        ),
    }
}
