use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tone_converter::config_manager::Config;
use tone_converter::routes::build_app;
use tone_converter::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    let dotenv_path = dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tone_converter=debug,tower_http=debug")),
        )
        .init();

    if let Some(path) = dotenv_path {
        info!("Loaded environment from: {}", path.display());
    }

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                config = Some(cfg);
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    let mut config = config.unwrap_or_else(|| {
        info!("No config file found (tried {:?}), using defaults", config_paths);
        Config::default()
    });
    config.llm_config = config.llm_config.with_env_api_key();

    let addr = config.system_config.socket_addr();
    let app = build_app(AppState::new(config));

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
