/// Collection holding user accounts
pub const USERS_COLLECTION: &str = "users";

/// Collection holding travel posts
pub const POSTS_COLLECTION: &str = "posts";

/// Field carrying the account email on users documents
/// Must be unique across the collection
pub const USER_EMAIL_FIELD: &str = "email";

/// Field carrying the creation timestamp on posts documents
/// Indexed descending for newest-first feeds
pub const POST_CREATED_AT_FIELD: &str = "createdAt";

/// Field carrying the author reference on posts documents
pub const POST_AUTHOR_FIELD: &str = "author";

/// Application name reported to the MongoDB server
pub const APP_NAME: &str = "wanderlust-db-init";
