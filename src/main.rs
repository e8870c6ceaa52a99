use anyhow::Context;
use tokio::net::TcpListener;

use hello_backend::app;
use hello_backend::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("hello-backend starting");

    let config = Config::from_env()?;
    config.log_startup();

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    axum::serve(listener, app())
        .await
        .context("Server error")?;

    Ok(())
}
