use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dormwith::api::{create_router, AppState};
use dormwith::catalog::{Catalog, MockCatalog};
use dormwith::config::Config;

#[derive(Parser)]
#[command(name = "dormwith")]
#[command(about = "Roommate matching and community server for dormitory residents")]
struct Args {
    /// Bind address, overrides DORMWITH_HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides DORMWITH_PORT
    #[arg(long)]
    port: Option<u16>,

    /// Start with empty matching lists even if DORMWITH_SEED_MATCHING is on
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dormwith=info,tower_http=debug".into());
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if config.server.api_keys.is_empty() {
        tracing::warn!(
            "DORMWITH_API_KEYS is not set, every /api/v1 route is open. Set DORMWITH_API_KEYS to require a bearer token."
        );
    }

    let catalog: Arc<dyn Catalog> = Arc::new(MockCatalog::new()?);
    tracing::info!("Loaded seed catalog: {}", catalog.name());

    let seed = config.matching.seed_on_start && !args.no_seed;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, catalog)?;

    if seed {
        let counts = state.matching.initialize()?;
        tracing::info!(
            waiting = counts.waiting,
            received = counts.received,
            matched = counts.matched,
            "Matching lists seeded"
        );
    } else {
        tracing::info!("Matching lists start empty, POST /api/v1/matching:initialize to seed");
    }

    let app = create_router(state);

    tracing::info!("DormWith starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server...");
}
