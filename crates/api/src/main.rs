//! Car Price Prediction Service - Main Entry Point

use api::{init_logging, telemetry::install_recorder, run_server, AppState, ServerConfig};
use inference_engine::ModelAdapter;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    init_logging(config.level()?);

    info!("=== Car Price Service v{} ===", env!("CARGO_PKG_VERSION"));
    info!(
        "Config: bind={}, model={}, log_level={}",
        config.bind_addr(),
        config.model_path,
        config.log_level
    );

    // A missing model does not stop startup; /predict answers 500 until restart
    let model = ModelAdapter::load(&config.model_path);
    if !model.is_loaded() {
        warn!("Serving without a model; every prediction will fail");
    }

    let state = Arc::new(AppState::new(model).with_metrics(install_recorder()));
    run_server(state, &config.bind_addr()).await?;

    Ok(())
}
