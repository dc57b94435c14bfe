use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use solace_api::config;
use solace_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = config::load_config().wrap_err("failed to load configuration")?;
    let state = AppState::from_config(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "solace admin api listening");

    axum::serve(listener, solace_api::router(state)).await?;
    Ok(())
}
