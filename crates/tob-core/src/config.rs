//! Configuration parsing for the depth feed.
//!
//! The feed reads its settings from a single JSON config file: the symbol
//! list, the WebSocket base URL, and optional logging overrides. The config
//! is resolved once at startup and immutable thereafter.
//!
//! # Example config
//!
//! ```json
//! {
//!   "symbols": ["btcusdt", "ethusdt", "xlmusdt"],
//!   "ws_base": "wss://stream.binance.com:9443/ws",
//!   "log_level": "info",
//!   "log_path": "/tmp/log"
//! }
//! ```

use serde::Deserialize;

use crate::error::FeedError;

/// Default WebSocket base URL (Binance combined raw streams endpoint).
pub const DEFAULT_WS_BASE: &str = "wss://stream.binance.com:9443/ws";

/// Feed configuration, deserialized from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Symbols to subscribe, lower-case (e.g. `["btcusdt", "ethusdt"]`).
    pub symbols: Vec<String>,

    /// WebSocket base URL; the per-symbol stream path is appended to it.
    #[serde(default = "default_ws_base")]
    pub ws_base: String,

    /// Default log level if `RUST_LOG` is not set.
    pub log_level: Option<String>,

    /// Optional directory for daily-rotating log files.
    pub log_path: Option<String>,
}

fn default_ws_base() -> String {
    DEFAULT_WS_BASE.to_string()
}

impl FeedConfig {
    /// Build a config from a symbol list, with defaults for everything else.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            ws_base: default_ws_base(),
            log_level: None,
            log_path: None,
        }
    }

    /// Validate the config after loading.
    ///
    /// Symbols must be non-blank, free of whitespace (they are spliced into
    /// the stream URL path), and unique — each symbol owns exactly one
    /// stream.
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.symbols.is_empty() {
            return Err(FeedError::Config("no symbols configured".into()));
        }
        let mut seen = std::collections::HashSet::new();
        for symbol in &self.symbols {
            if symbol.trim().is_empty() {
                return Err(FeedError::Config("blank symbol in symbol list".into()));
            }
            if symbol.contains(char::is_whitespace) {
                return Err(FeedError::Config(format!(
                    "symbol {symbol:?} contains whitespace"
                )));
            }
            if !seen.insert(symbol.as_str()) {
                return Err(FeedError::Config(format!("duplicate symbol: {symbol}")));
            }
        }
        url::Url::parse(&self.ws_base)
            .map_err(|e| FeedError::Config(format!("invalid ws_base: {e}")))?;
        Ok(())
    }

    /// Full stream URL for one symbol: `<ws_base>/<symbol>@depth`.
    pub fn stream_url(&self, symbol: &str) -> String {
        format!("{}/{}@depth", self.ws_base.trim_end_matches('/'), symbol)
    }
}

/// Load and parse a JSON config file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<FeedConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: FeedConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_defaults() {
        let cfg: FeedConfig = serde_json::from_str(r#"{"symbols":["btcusdt"]}"#).unwrap();
        assert_eq!(cfg.ws_base, DEFAULT_WS_BASE);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_symbol_list_rejected() {
        let cfg = FeedConfig::from_symbols(Vec::<String>::new());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn duplicate_symbols_rejected() {
        let cfg = FeedConfig::from_symbols(["btcusdt", "ethusdt", "btcusdt"]);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn blank_or_whitespace_symbols_rejected() {
        assert!(FeedConfig::from_symbols([""]).validate().is_err());
        assert!(FeedConfig::from_symbols(["   "]).validate().is_err());
        assert!(FeedConfig::from_symbols(["btc usdt"]).validate().is_err());
    }

    #[test]
    fn bad_ws_base_rejected() {
        let mut cfg = FeedConfig::from_symbols(["btcusdt"]);
        cfg.ws_base = "not a url".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn stream_url_formation() {
        let cfg = FeedConfig::from_symbols(["btcusdt"]);
        assert_eq!(
            cfg.stream_url("btcusdt"),
            "wss://stream.binance.com:9443/ws/btcusdt@depth"
        );
    }

    #[test]
    fn stream_url_trims_trailing_slash() {
        let mut cfg = FeedConfig::from_symbols(["ethusdt"]);
        cfg.ws_base = "wss://example.test/ws/".into();
        assert_eq!(cfg.stream_url("ethusdt"), "wss://example.test/ws/ethusdt@depth");
    }
}
