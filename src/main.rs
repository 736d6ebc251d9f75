#![allow(non_snake_case)]

mod client;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::middleware;
        use dioxus_logger::tracing;
        use wordlist::server::{
            config::Config, controller::util::guard::require_session_cookie,
            model::app::AppState, router, service::token::TokenCodec, startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let db = startup::connect_to_database(&config).await?;
        let identity = startup::build_identity_client(&config)?;
        let token_codec = TokenCodec::new(&config.auth_secret);
        let cors = startup::build_cors_layer(&config)?;

        tracing::info!("Starting server");

        let api_routes = router::routes().layer(cors).with_state(AppState {
            db,
            identity,
            token_codec,
        });

        let router = dioxus::server::router(client::App)
            .merge(api_routes)
            .layer(middleware::from_fn(require_session_cookie));

        Ok(router)
    })
}
