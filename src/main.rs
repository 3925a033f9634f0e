use anyhow::Result;
use openmaster_dashboard::{api, config, dashboard, telemetry};
use config::Config;
use dashboard::AppState;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::load()?;
    init_tracing(&cfg.logging);

    let app_state = AppState::load(cfg.clone())?;
    if app_state.options.energy_sources.is_empty() {
        warn!("investment cost table is empty, costs charts will have no data");
    }

    let app = api::router(app_state, &cfg);
    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!("binding to 0.0.0.0, the dashboard will be reachable from the network");
    }

    info!(%addr, title = %cfg.dashboard.title, "starting dashboard");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
