use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::domain::{
    errors::{AppError, NetworkResult},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::{AnalysisGateway, AnalysisSnapshot, MarketQuote, Symbol},
    order_form::AnalyzeRequest,
};

/// gloo-net client for the analysis backend
#[derive(Debug, Clone)]
pub struct AnalysisHttpClient {
    config: AppConfig,
}

impl AnalysisHttpClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> NetworkResult<T> {
        ensure_success(response.status(), response.status_text())?;
        parse_body(&body_text(response.text().await)?)
    }
}

/// Anything outside 2xx becomes [`AppError::HttpStatus`].
pub fn ensure_success(status: u16, status_text: String) -> NetworkResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(AppError::HttpStatus { status, status_text })
    }
}

pub fn body_text(body: Result<String, gloo_net::Error>) -> NetworkResult<String> {
    body.map_err(|e| AppError::Transport(format!("Failed to read body: {e:?}")))
}

/// Decodes a response body, reporting anything unparseable as malformed JSON.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> NetworkResult<T> {
    serde_json::from_str(body).map_err(|e| AppError::MalformedJson(e.to_string()))
}

impl AnalysisGateway for AnalysisHttpClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> NetworkResult<Vec<AnalysisSnapshot>> {
        let url = self.config.analyze_url();
        get_logger().log_with_metadata(
            LogLevel::Debug,
            LogComponent::Infrastructure("AnalysisHttp"),
            &format!("📤 POST {url}"),
            &serde_json::to_string(request).unwrap_or_default(),
        );

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| AppError::Transport(format!("Failed to encode request: {e:?}")))?
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to send request: {e:?}")))?;

        let snapshots: Vec<AnalysisSnapshot> = Self::read_json(response).await?;

        get_logger().info(
            LogComponent::Infrastructure("AnalysisHttp"),
            &format!("✅ Received {} analysis results", snapshots.len()),
        );

        Ok(snapshots)
    }

    async fn bollinger_bands(&self, symbol: &Symbol) -> NetworkResult<MarketQuote> {
        let url = self.config.bollinger_bands_url(symbol);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to send request: {e:?}")))?;

        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_status_carries_code_and_text() {
        assert_eq!(ensure_success(204, "No Content".into()), Ok(()));
        assert_eq!(
            ensure_success(503, "Unavailable".into()),
            Err(AppError::HttpStatus { status: 503, status_text: "Unavailable".into() })
        );
        assert!(ensure_success(302, "Found".into()).is_err());
    }

    #[test]
    fn unreadable_body_is_a_transport_error() {
        let result = body_text(Err(gloo_net::Error::GlooError("connection reset".into())));
        match result {
            Err(AppError::Transport(message)) => assert!(message.contains("connection reset")),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(body_text(Ok("[]".into())), Ok("[]".to_string()));
    }

    #[test]
    fn malformed_body_is_reported_as_json_error() {
        let result: NetworkResult<Vec<AnalysisSnapshot>> = parse_body("<html>502</html>");
        assert!(matches!(result, Err(AppError::MalformedJson(_))));
    }

    #[test]
    fn analysis_body_keeps_response_order() {
        let parsed: Vec<AnalysisSnapshot> =
            parse_body(r#"[{"Price":1},{"Price":2}]"#).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].price, Some(serde_json::json!(1)));
    }
}
