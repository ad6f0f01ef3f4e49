use serde::{Deserialize, Serialize};

use super::entities::SelectionSet;
use super::value_objects::{BandEdge, Indicator};

/// Body of `POST /analyze`.
///
/// Only RSI, Bollinger Band and the 100-period moving average reach the
/// backend; the other three indicators are not part of its contract yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub target_rsi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bband_band: Option<BandEdge>,
    pub msa: String,
}

/// Flattens a selection set into the analysis request. Pure.
pub fn build_request_payload(selection: &SelectionSet) -> AnalyzeRequest {
    let action_text = |indicator: Indicator| {
        selection
            .find(indicator)
            .and_then(|s| s.action)
            .map(|action| action.to_string())
            .unwrap_or_default()
    };

    AnalyzeRequest {
        target_rsi: action_text(Indicator::Rsi),
        bband_band: selection
            .find(Indicator::BollingerBand)
            .and_then(|s| s.action)
            .and_then(BandEdge::from_action),
        msa: action_text(Indicator::MovingAverage100),
    }
}
