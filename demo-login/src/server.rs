use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use std::{io, net::SocketAddr, path::PathBuf};
use tokio::task::JoinHandle;

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TlsFiles {
    pub(crate) cert: PathBuf,
    pub(crate) key: PathBuf,
}

/// Where and how the demo server listens.
///
/// `PORT` selects the port (default 8000). Setting both `TLS_CERT_PATH` and
/// `TLS_KEY_PATH` switches the listener to HTTPS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Listen {
    pub(crate) port: u16,
    pub(crate) tls: Option<TlsFiles>,
}

impl Listen {
    pub(crate) fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|e| format!("Invalid PORT {port:?}: {e}"))?,
            None => DEFAULT_PORT,
        };

        let tls = match (get("TLS_CERT_PATH"), get("TLS_KEY_PATH")) {
            (Some(cert), Some(key)) => Some(TlsFiles {
                cert: cert.into(),
                key: key.into(),
            }),
            (None, None) => None,
            _ => return Err("TLS_CERT_PATH and TLS_KEY_PATH must be set together".to_string()),
        };

        Ok(Self { port, tls })
    }

    pub(crate) fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

pub(crate) fn spawn_http_server(addr: SocketAddr, app: Router) -> JoinHandle<io::Result<()>> {
    tokio::spawn(async move {
        tracing::info!("HTTP server listening on http://{}", addr);
        axum_server::bind(addr).serve(app.into_make_service()).await
    })
}

pub(crate) async fn spawn_https_server(
    addr: SocketAddr,
    app: Router,
    tls: &TlsFiles,
) -> io::Result<JoinHandle<io::Result<()>>> {
    let config = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;

    Ok(tokio::spawn(async move {
        tracing::info!("HTTPS server listening on https://{}", addr);
        axum_server::bind_rustls(addr, config)
            .serve(app.into_make_service())
            .await
    }))
}
