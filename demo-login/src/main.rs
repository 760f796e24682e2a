use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oauth2_login_axum::{AppConfig, AppState, app_router};

mod server;

use crate::server::{Listen, spawn_http_server, spawn_https_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Install default CryptoProvider for rustls to prevent:
    // "no process-level CryptoProvider available -- call CryptoProvider::install_default() before this point"
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install default CryptoProvider");

    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,oauth2_login=debug,oauth2_login_axum=debug,tower_http=info",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Refuse to start on incomplete configuration
    let config = AppConfig::from_env().inspect_err(|e| tracing::error!("{e}"))?;
    let listen = Listen::from_env()?;

    let app = app_router(AppState::new(config));

    let server = match &listen.tls {
        Some(tls) => spawn_https_server(listen.addr(), app, tls).await?,
        None => spawn_http_server(listen.addr(), app),
    };

    server.await??;
    Ok(())
}
