//! Gateway bootstrap
//!
//! Loads the deployment-provided `config.json` and builds the shared gateway.

use std::sync::Arc;

use reqwest::Url;
use repair_desk_core::{GatewayConfig, PostgrestGateway, SharedGateway};
use tracing::info;

/// Served next to `index.html`; never committed
const CONFIG_FILE: &str = "config.json";

async fn load_config() -> Result<GatewayConfig, String> {
    let window = web_sys::window().ok_or("no window available")?;
    let href = window
        .location()
        .href()
        .map_err(|e| format!("cannot read page location: {:?}", e))?;
    let url = Url::parse(&href)
        .and_then(|page| page.join(CONFIG_FILE))
        .map_err(|e| format!("cannot resolve {}: {}", CONFIG_FILE, e))?;

    let response = reqwest::get(url).await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("{} returned {}", CONFIG_FILE, response.status()));
    }
    let text = response.text().await.map_err(|e| e.to_string())?;
    GatewayConfig::from_json(&text).map_err(|e| format!("{}: {}", CONFIG_FILE, e))
}

pub async fn connect() -> Result<SharedGateway, String> {
    let config = load_config().await?;
    info!(?config, "[APP] gateway configured");
    let gateway = PostgrestGateway::new(config).map_err(|e| e.to_string())?;
    Ok(Arc::new(gateway))
}
