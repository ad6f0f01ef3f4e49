use std::time::Duration;

use crate::domain::market_data::Symbol;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TICKER: &str = "AAPL";
/// Market poll period; fixed, not overridable from the page
pub const POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Runtime settings of the order form.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub ticker: Symbol,
    pub poll_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            ticker: Symbol::from(DEFAULT_TICKER),
            poll_interval: POLL_INTERVAL,
        }
    }
}

impl AppConfig {
    /// Applies `?api=` and `?symbol=` overrides; blank values keep the default.
    pub fn with_overrides(mut self, api: Option<String>, symbol: Option<String>) -> Self {
        if let Some(api) = api.map(|a| a.trim().trim_end_matches('/').to_string()) {
            if !api.is_empty() {
                self.api_base_url = api;
            }
        }
        if let Some(Ok(ticker)) = symbol.map(Symbol::new) {
            self.ticker = ticker;
        }
        self
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.api_base_url)
    }

    pub fn bollinger_bands_url(&self, symbol: &Symbol) -> String {
        format!("{}/bollinger_bands?symbol={}", self.api_base_url, symbol.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_contract() {
        let config = AppConfig::default();
        assert_eq!(config.analyze_url(), "http://localhost:8000/analyze");
        assert_eq!(
            config.bollinger_bands_url(&config.ticker),
            "http://localhost:8000/bollinger_bands?symbol=AAPL"
        );
        assert_eq!(config.poll_interval, Duration::from_secs(5));
    }

    #[test]
    fn overrides_trim_and_ignore_blanks() {
        let config = AppConfig::default()
            .with_overrides(Some("https://example.test/api/".to_string()), Some("msft".to_string()));
        assert_eq!(config.analyze_url(), "https://example.test/api/analyze");
        assert_eq!(config.ticker.value(), "MSFT");

        let config = AppConfig::default().with_overrides(Some("  ".to_string()), Some(String::new()));
        assert_eq!(config, AppConfig::default());
    }
}
