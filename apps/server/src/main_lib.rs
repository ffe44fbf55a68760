use std::sync::Arc;

use jsonwebtoken::DecodingKey;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use waitumusic_core::objectives::{ObjectiveService, ObjectiveServiceTrait};
use waitumusic_storage_sqlite::db::{self, write_actor};
use waitumusic_storage_sqlite::objectives::ObjectiveRepository;

use crate::config::Config;

pub struct AppState {
    pub objective_service: Arc<dyn ObjectiveServiceTrait>,
    pub jwt_decoding_key: DecodingKey,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("WTM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let objective_repository = Arc::new(ObjectiveRepository::new(pool, writer));
    let objective_service: Arc<dyn ObjectiveServiceTrait> =
        Arc::new(ObjectiveService::new(objective_repository));

    let jwt_decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

    Ok(Arc::new(AppState {
        objective_service,
        jwt_decoding_key,
        db_path,
    }))
}
