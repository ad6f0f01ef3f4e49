use super::entities::{AnalysisSnapshot, MarketQuote};
use super::value_objects::Symbol;
use crate::domain::errors::NetworkResult;
use crate::domain::order_form::AnalyzeRequest;

/// Backend the order form talks to.
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[allow(async_fn_in_trait)]
pub trait AnalysisGateway {
    /// `POST /analyze`, returning every result object in response order
    async fn analyze(&self, request: &AnalyzeRequest) -> NetworkResult<Vec<AnalysisSnapshot>>;

    /// `GET /bollinger_bands?symbol=...`
    async fn bollinger_bands(&self, symbol: &Symbol) -> NetworkResult<MarketQuote>;
}
