use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use configs::{AppConfig, LogFormat, StorageBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::book::{repo::seaorm::SeaOrmBookRepository, BookRepository};
use service::storage::InMemoryBookRepository;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Configuration plus the reason the config file was skipped, if it was.
pub struct LoadedConfig {
    pub config: AppConfig,
    pub fallback_reason: Option<String>,
}

/// Load `.env`, then `config.toml` (or `CONFIG_PATH`); fall back to environment variables.
pub fn load_config() -> Result<LoadedConfig, StartupError> {
    dotenv().ok();
    match AppConfig::load_and_validate() {
        Ok(config) => Ok(LoadedConfig { config, fallback_reason: None }),
        Err(file_err) => {
            let config = AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
            Ok(LoadedConfig { config, fallback_reason: Some(file_err.to_string()) })
        }
    }
}

pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => init_logging_default(),
        LogFormat::Json => init_logging_json(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Build the repository selected by `storage.backend`, applying migrations when asked.
pub async fn build_repository(cfg: &AppConfig) -> Result<Arc<dyn BookRepository>, StartupError> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            info!(backend = "memory", "book storage ready");
            Ok(Arc::new(InMemoryBookRepository::new()))
        }
        StorageBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database)
                .await
                .map_err(|e| StartupError::Storage(e.to_string()))?;
            if cfg.database.run_migrations {
                migration::Migrator::up(&db, None)
                    .await
                    .map_err(|e| StartupError::Storage(e.to_string()))?;
                info!("migrations applied");
            }
            info!(backend = "database", "book storage ready");
            Ok(Arc::new(SeaOrmBookRepository::new(db)))
        }
    }
}

/// Build the app and run the HTTP server until the listener fails.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let repo = build_repository(&cfg).await?;
    let state = ServerState::new(repo);
    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "bookshelf server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let cfg = AppConfig::default();
        assert_eq!(bind_addr(&cfg).unwrap(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bind_addr_rejects_bad_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn memory_backend_builds_without_database() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        let repo = build_repository(&cfg).await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
