//! Runtime configuration.
//!
//! An embedded default is compiled in. At start-up the app tries to fetch
//! `config.toml` served next to `index.html`, so a deployment can point the
//! client at another API without rebuilding.

use gloo_net::http::Request;
use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port `default_port`".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub default_port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub app_title: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_toast_ms")]
    pub toast_timeout_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            app_title: default_title(),
            currency_symbol: default_currency_symbol(),
            page_size: default_page_size(),
            toast_timeout_ms: default_toast_ms(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

fn default_title() -> String {
    "ShopDesk".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_page_size() -> usize {
    25
}

fn default_toast_ms() -> u32 {
    4000
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
default_port = 8000

[ui]
app_title = "ShopDesk"
currency_symbol = "$"
page_size = 25
toast_timeout_ms = 4000
"#;

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

pub fn parse_config(contents: &str) -> Result<AppConfig, String> {
    let config: AppConfig =
        toml::from_str(contents).map_err(|e| format!("Invalid config.toml: {}", e))?;
    if config.ui.page_size == 0 {
        return Err("ui.page_size must be greater than zero".to_string());
    }
    Ok(config)
}

fn default_config() -> AppConfig {
    // The embedded config is covered by a unit test
    parse_config(DEFAULT_CONFIG).unwrap_or(AppConfig {
        api: ApiConfig {
            base_url: String::new(),
            default_port: default_port(),
        },
        ui: UiConfig::default(),
    })
}

/// Loads `config.toml` from the page origin, falling back to the embedded
/// default. Only the first call has an effect.
pub async fn load_config() {
    if CONFIG.get().is_some() {
        return;
    }
    let loaded = match fetch_config().await {
        Ok(config) => {
            log::info!("Loaded config.toml (api base: '{}')", config.api.base_url);
            config
        }
        Err(e) => {
            log::warn!("{}; using embedded configuration", e);
            default_config()
        }
    };
    let _ = CONFIG.set(loaded);
}

async fn fetch_config() -> Result<AppConfig, String> {
    let response = Request::get("config.toml")
        .send()
        .await
        .map_err(|e| format!("config.toml not reachable: {}", e))?;
    if !response.ok() {
        return Err(format!("config.toml not found ({})", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("config.toml unreadable: {}", e))?;
    parse_config(&text)
}

/// Current configuration. Before `load_config` completes this is the default.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(default_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.default_port, 8000);
        assert_eq!(config.ui.page_size, 25);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://api.shop.example\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://api.shop.example");
        assert_eq!(config.api.default_port, 8000);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(parse_config("[api").is_err());
        assert!(parse_config("[api]\n[ui]\npage_size = 0\n").is_err());
    }
}
