//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers every API endpoint and serves Swagger UI for the generated OpenAPI document at
//! `/api/docs`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/login` - Exchange an identity provider username for a session token
/// - `GET /api/logout` - Clear the session cookie
/// - `GET /api/profile` - Identity provider profile of the logged in user
/// - `GET /api/wordlist/{*params}` - Paginated word list reads
///
/// The word list uses a wildcard so that unknown sub-routes of an authenticated request can
/// be answered with a 404 payload instead of falling through to the page router. The wildcard
/// never matches an empty tail, so `/api/wordlist` and `/api/wordlist/` are routed separately.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Word List", description = "Word List API"),
        paths(controller::wordlist::wordlist),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
            (name = controller::profile::PROFILE_TAG, description = "Identity profile API routes"),
            (name = controller::wordlist::WORDLIST_TAG, description = "Word list API routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::profile::get_profile))
        .split_for_parts();

    routes
        .route("/api/wordlist", get(controller::wordlist::wordlist_root))
        .route("/api/wordlist/", get(controller::wordlist::wordlist_root))
        .route("/api/wordlist/{*params}", get(controller::wordlist::wordlist))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
