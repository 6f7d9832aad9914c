//! # Carta Server
//!
//! Restaurant menu catalog service.
//!
//! Serves two audiences from one binary: the public storefront reads the
//! catalog (ordered categories, grouped products, campaign highlights),
//! and the authenticated operator creates, reorders, and deletes catalog
//! entries. PostgreSQL holds the catalog; uploaded product images land on
//! the local filesystem and are served back under `/assets`.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use carta_core::{
    CatalogDatabase, LocalAssetStore, OperatorCredentials, SessionGate,
};
use carta_server::{AppState, Config, create_app};
use chrono::Duration;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "carta-server")]
#[command(about = "Restaurant menu catalog server with a gated operator API")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "CARTA_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "CARTA_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let load = Config::load().context("failed to load configuration")?;
    let mut config = load.config;
    for warning in &load.warnings {
        warn!("{warning}");
    }

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }

    let db = CatalogDatabase::connect_postgres(&config.database.url)
        .await
        .context("failed to connect to PostgreSQL")?;
    info!("catalog schema ready");

    let assets = Arc::new(LocalAssetStore::new(
        config.assets.dir.clone(),
        config.server.public_base_url.clone(),
    ));

    let gate = Arc::new(SessionGate::with_ttl(
        OperatorCredentials {
            email: config.auth.operator_email.clone(),
            password_hash: config.auth.operator_password_hash.clone(),
        },
        Duration::hours(config.auth.session_ttl_hours),
    ));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid host/port combination")?;

    let state = AppState::new(db, assets, gate, Arc::new(config));
    let app = create_app(state);

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
