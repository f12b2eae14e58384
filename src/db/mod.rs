pub mod collections;
pub mod indexes;

use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::error::Result;

/// Connect to MongoDB and select the target database
pub async fn connect(config: &Config) -> Result<Database> {
    tracing::info!("Connecting to MongoDB...");

    let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
    client_options.app_name = Some(APP_NAME.to_string());
    client_options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    client_options.server_selection_timeout =
        Some(Duration::from_secs(config.connect_timeout_secs));

    let client = Client::with_options(client_options)?;
    let database = client.database(&config.database_name);

    tracing::info!("Selected database: {}", database.name());

    Ok(database)
}

/// Run the full setup sequence: collections first, then their indexes
pub async fn initialize(database: &Database) -> Result<()> {
    collections::ensure_collections(database).await?;
    indexes::ensure_indexes(database).await?;
    Ok(())
}
