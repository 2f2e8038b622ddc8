use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bunkhouse::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret.clone(),
    };

    let router = router::routes(&config.frontend_dir).with_state(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("Failed to bind listener");

    info!("Listening on port {}", config.port);

    axum::serve(listener, router)
        .await
        .expect("Server exited with an error");
}
