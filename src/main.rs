// --- Extractor de Históricos - Archivo principal ---

use historico::{run_server, AppConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "historico=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    tracing::info!(
        bind = %config.bind,
        weekdays_file = %config.weekdays_file.display(),
        "=== Extractor de Históricos (API) ==="
    );
    run_server(config).await
}
