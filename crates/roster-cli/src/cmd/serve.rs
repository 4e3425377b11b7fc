use anyhow::Context;
use roster_core::config::Config;
use roster_server::AppState;
use std::path::Path;

pub fn run(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    open: bool,
) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(config_path).context("failed to load config")?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let store = config.build_store().context("invalid activity roster")?;
    tracing::info!(activities = store.len(), "roster loaded");

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let addr = config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("failed to listen for ctrl-c: {e}");
                std::future::pending::<()>().await;
            }
        };

        roster_server::serve_on(
            listener,
            AppState::new(store),
            open || config.open_browser,
            shutdown,
        )
        .await
    })
}
