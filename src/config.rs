use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub connect_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let mongodb_uri =
            env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "wanderlust".to_string());
        if database_name.is_empty() {
            return Err("DATABASE_NAME must not be empty".to_string());
        }

        let connect_timeout_secs = env::var("CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| "Invalid CONNECT_TIMEOUT_SECS")?;

        Ok(Config {
            mongodb_uri,
            database_name,
            connect_timeout_secs,
        })
    }
}
