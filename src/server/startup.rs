use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, identity::IdentityError, Error},
    service::identity::IdentityClient,
};

/// How long browsers may cache CORS preflight responses
const CORS_MAX_AGE: Duration = Duration::from_secs(86400);

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Build the identity provider client with the configured user agent
pub fn build_identity_client(config: &Config) -> Result<IdentityClient, Error> {
    let http = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()
        .map_err(IdentityError::from)?;

    Ok(IdentityClient::new(http, config.identity_api_url.clone()))
}

/// Build the CORS policy allowing the public API host
pub fn build_cors_layer(config: &Config) -> Result<CorsLayer, Error> {
    let origin =
        HeaderValue::from_str(&config.api_host).map_err(|e| ConfigError::InvalidEnvValue {
            var: "API_HOST".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::ORIGIN,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
        .max_age(CORS_MAX_AGE))
}
