use std::time::Duration;

use anyhow::Result;
use folio_persist::{create_document, DocumentStore, MongoStore, PersistError};
use folio_types::{ContactMessage, Record};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    println!("Document Store Smoke Test");
    println!("=========================");
    println!();

    let uri = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let database = std::env::var("DATABASE_NAME").unwrap_or_else(|_| "portfolio".to_string());

    print!("Connecting to {}... ", uri);
    let store = MongoStore::builder()
        .uri(&uri)
        .database(&database)
        .timeout(Duration::from_secs(3))
        .app_name("folio-store-smoke")
        .build()
        .await?;
    println!("✓");

    print!("Listing collections... ");
    let before = store.list_collection_names().await?;
    println!("✓");
    println!("✓ Database: {} ({} collections)", store.database_name(), before.len());
    println!();

    print!("Inserting contact message... ");
    let marker = format!("smoke-{}", chrono::Utc::now().timestamp());
    let message = ContactMessage::new(
        "Smoke Test",
        "smoke@example.com",
        "Store smoke test",
        "Inserted by the store-smoke binary",
    )
    .with_source(&marker);
    let id = create_document(&store, &message).await?;
    println!("✓");
    println!("✓ Inserted id: {}", id);
    println!();

    let after = store.list_collection_names().await?;
    anyhow::ensure!(
        after.iter().any(|name| name == ContactMessage::COLLECTION),
        "collection {} missing after insert",
        ContactMessage::COLLECTION
    );

    print!("Checking unreachable server is reported as unavailable... ");
    let unreachable = MongoStore::builder()
        .uri("mongodb://127.0.0.1:1")
        .database(&database)
        .timeout(Duration::from_millis(500))
        .app_name("folio-store-smoke")
        .build()
        .await?;
    let result = create_document(&unreachable, &message).await;
    anyhow::ensure!(
        matches!(result, Err(PersistError::Unavailable(_))),
        "expected an unavailable store, got {:?}",
        result
    );
    println!("✓");
    println!();

    println!("=========================");
    println!("All checks passed!");
    println!("=========================");
    println!();
    println!("To clean up test data:");
    println!(
        "  db.{}.deleteMany({{ source: '{}' }})",
        ContactMessage::COLLECTION,
        marker
    );

    Ok(())
}
