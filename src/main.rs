//! Visibility HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use visibility::config::{Config, ScoringConfig};
use visibility::embedding::{SentenceConfig, SentenceEmbedder};
use visibility::gateway::{AppState, create_router_with_state};
use visibility::scoring::VisibilityScorer;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        version = env!("CARGO_PKG_VERSION"),
        "Visibility engine starting"
    );

    let scoring_config = ScoringConfig::load(config.scoring_config_path.as_deref())?;
    tracing::info!(
        weights = ?scoring_config.weights,
        templates = scoring_config.query_templates.len(),
        completeness_keywords = scoring_config.completeness_keywords.len(),
        "Scoring config loaded"
    );

    let sentence_config = match &config.model_path {
        Some(path) => SentenceConfig {
            model_dir: path.clone(),
            stub: false,
            ..SentenceConfig::from_env()
        },
        None => {
            tracing::warn!("No VISIBILITY_MODEL_PATH configured, running embedder in stub mode");
            SentenceConfig::stub()
        }
    };
    let embedder = Arc::new(SentenceEmbedder::load(sentence_config)?);

    let scorer = Arc::new(VisibilityScorer::new(embedder, scoring_config)?);
    let app = create_router_with_state(AppState::new(scorer));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Visibility engine shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("VISIBILITY_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(_) => return 1,
    };

    rt.block_on(async {
        let client = match reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        {
            Ok(client) => client,
            Err(_) => return 1,
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
