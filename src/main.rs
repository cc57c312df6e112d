use std::net::SocketAddr;
use std::sync::Arc;

use dotenv::dotenv;
use std::env;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{event, info, Level};
use tracing_subscriber::EnvFilter;

use taskboard::config::Config;
use taskboard::datastore::{self, MySqlTaskStore};
use taskboard::{api, log};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config_path = env::var("TASKBOARD_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
    let config = Config::from_file(&config_path)?;

    let env_filter = EnvFilter::try_from_env("TASKBOARD_LOG");
    log::setup(env_filter, &config.log);

    event!(Level::INFO, "Starting taskboard: {}", env!("FULL_VERSION"));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(config))
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let pool = datastore::connect(&config.storage).await?;
    let store = Arc::new(MySqlTaskStore::new(pool.clone()));

    let app = api::router(api::AppState::new(store));

    let host = config
        .listen
        .host
        .clone()
        .unwrap_or_else(|| "0.0.0.0".to_string());
    let addr: SocketAddr = format!("{}:{}", host, config.listen.port).parse()?;

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // release every pooled connection before the process exits
    pool.close().await;
    info!("Connection pool closed, shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(reason = %err, "Unable to install Ctrl+C handler.");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::warn!(reason = %err, "Unable to install SIGTERM handler.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down."),
        _ = terminate => info!("Received SIGTERM, shutting down."),
    }
}
