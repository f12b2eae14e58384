use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};

use crate::constants::{
    POSTS_COLLECTION, POST_AUTHOR_FIELD, POST_CREATED_AT_FIELD, USERS_COLLECTION, USER_EMAIL_FIELD,
};
use crate::error::Result;

/// Unique index over the account email
fn user_email_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { USER_EMAIL_FIELD: 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

/// Descending index over the post creation timestamp, for newest-first feeds
fn post_created_at_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { POST_CREATED_AT_FIELD: -1 })
        .build()
}

/// Non-unique index over the post author, for author-based lookups
fn post_author_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { POST_AUTHOR_FIELD: 1 })
        .build()
}

/// Declare the secondary indexes.
///
/// `createIndex` is a no-op when an index with the same specification
/// already exists, so reruns are safe without any lookup.
pub async fn ensure_indexes(database: &Database) -> Result<()> {
    let users = database.collection::<Document>(USERS_COLLECTION);
    users.create_index(user_email_index()).await?;
    tracing::info!(
        "Ensured unique index on {}.{}",
        USERS_COLLECTION,
        USER_EMAIL_FIELD
    );

    let posts = database.collection::<Document>(POSTS_COLLECTION);
    posts.create_index(post_created_at_index()).await?;
    tracing::info!(
        "Ensured descending index on {}.{}",
        POSTS_COLLECTION,
        POST_CREATED_AT_FIELD
    );

    posts.create_index(post_author_index()).await?;
    tracing::info!(
        "Ensured index on {}.{}",
        POSTS_COLLECTION,
        POST_AUTHOR_FIELD
    );

    Ok(())
}
