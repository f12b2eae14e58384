use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wanderlust_db_init::{db, Config, InitError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wanderlust_db_init=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wanderlust database initialization...");

    // Load configuration
    let config = Config::from_env().map_err(InitError::Config)?;

    let database = db::connect(&config).await?;

    db::initialize(&database).await?;

    println!("Database initialized successfully!");

    Ok(())
}
