use tracing::info;

use campus_api::AppStateInner;
use campus_api::config::Config;
use campus_api::storage::Storage;
use campus_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "campus=debug,campus_api=debug,campus_db=info,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;

    // Database and upload folders are resolved once, before serving
    let db = Database::open(&config.db_path)?;
    let storage = Storage::new(config.upload_root.clone()).await?;
    let state = AppStateInner::new(db, storage, config.public_url.clone());

    let app = campus_api::router(state, config.max_upload_bytes);

    let addr = config.addr()?;
    info!("Campus API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let Ok(mut sigterm) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        else {
            ctrl_c.await.ok();
            info!("Received Ctrl+C, shutting down...");
            return;
        };
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
