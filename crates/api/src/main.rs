use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_api::config::{ConfigError, ServerConfig};
use roster_api::router::build_app_router;
use roster_api::state::AppState;

/// Anything that stops the server from coming up.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("database unavailable: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("invalid HOST: {0}")]
    Host(#[from] AddrParseError),

    #[error("server I/O: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_api=debug,roster_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Roster API failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn serve() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let host: IpAddr = config.host.parse()?;
    let addr = SocketAddr::new(host, config.port);

    let pool = roster_db::create_pool(&config.database_url).await?;
    roster_db::health_check(&pool).await?;
    roster_db::run_migrations(&pool).await?;
    let schema_version = roster_db::schema_version(&pool).await?;
    tracing::info!(database_url = %config.database_url, ?schema_version, "Store ready");

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Roster API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Roster API stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where the platform has it.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => tracing::info!("SIGINT received, draining"),
                    _ = sigterm.recv() => tracing::info!("SIGTERM received, draining"),
                }
                return;
            }
            Err(e) => tracing::warn!(error = %e, "SIGTERM handler unavailable"),
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Ctrl-C handler unavailable; shutdown only on process exit");
        std::future::pending::<()>().await;
    }
    tracing::info!("SIGINT received, draining");
}
