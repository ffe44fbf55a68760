//! Server configuration, read from the environment.

use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to (`WTM_LISTEN_ADDR`).
    pub listen_addr: String,
    /// Path of the SQLite database file (`WTM_DB_PATH`).
    pub db_path: String,
    /// HMAC secret used to verify bearer tokens (`WTM_SECRET_KEY`).
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("WTM_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let db_path =
            std::env::var("WTM_DB_PATH").unwrap_or_else(|_| "./data/waitumusic.db".to_string());
        let secret_key = std::env::var("WTM_SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!(
                "WTM_SECRET_KEY is not set; using an ephemeral secret, existing tokens will \
                 not verify after a restart"
            );
            Uuid::new_v4().simple().to_string()
        });

        Config {
            listen_addr,
            db_path,
            secret_key,
        }
    }
}
