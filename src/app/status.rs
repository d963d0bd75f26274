use serde_json::{Value, json};
use tablemate::Config;

/// Effective configuration plus where it was loaded from.
pub fn render_config(config: &Config) -> anyhow::Result<Value> {
    Ok(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "config_path": config.config_path.display().to_string(),
        "settings": serde_json::to_value(config)?,
    }))
}
