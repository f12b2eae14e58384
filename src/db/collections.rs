use mongodb::Database;

use crate::constants::{POSTS_COLLECTION, USERS_COLLECTION};
use crate::error::Result;

/// Collections the application expects to exist
const REQUIRED_COLLECTIONS: [&str; 2] = [USERS_COLLECTION, POSTS_COLLECTION];

/// Create the users and posts collections if they are missing.
///
/// `createCollection` errors on an existing namespace, so existing
/// collections are listed first to keep reruns clean.
pub async fn ensure_collections(database: &Database) -> Result<()> {
    let existing = database.list_collection_names().await?;

    for name in REQUIRED_COLLECTIONS {
        if existing.iter().any(|c| c == name) {
            tracing::debug!("Collection already exists: {}", name);
            continue;
        }
        database.create_collection(name).await?;
        tracing::info!("Created collection: {}", name);
    }

    Ok(())
}
