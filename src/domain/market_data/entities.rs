use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::value_objects::Price;

/// One result object of `POST /analyze`.
///
/// Field types are up to the backend, so values are kept as raw JSON and only
/// turned into text for display. A field that is absent stays `None`; an
/// explicit `null` is kept as `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    #[serde(rename = "Price", default, deserialize_with = "present")]
    pub price: Option<Value>,
    #[serde(rename = "RSI", default, deserialize_with = "present")]
    pub rsi: Option<Value>,
    #[serde(rename = "UpperBand", default, deserialize_with = "present")]
    pub upper_band: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub date: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub msa: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Text a browser would produce for `"label" + value`
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => number_text(f),
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

/// Shortest round-trip digits, switching to exponent notation outside
/// `1e-6 <= |x| < 1e21` like `Number.prototype.toString`.
fn number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    match exponent.parse::<i32>() {
        Ok(exp) if (-6..21).contains(&exp) => value.to_string(),
        Ok(exp) if exp >= 0 => format!("{mantissa}e+{exp}"),
        _ => scientific,
    }
}

/// The five labelled order-detail fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub price: String,
    pub rsi: String,
    pub bollinger: String,
    pub date: String,
    pub ma_100: String,
}

impl OrderDetails {
    /// Element ids of the order area, in display order
    pub const FIELD_IDS: [&'static str; 5] =
        ["orderPrice", "orderRSI", "orderBollinger", "orderPNL", "100ma"];

    pub fn from_snapshot(snapshot: &AnalysisSnapshot) -> Self {
        Self {
            price: format!("Price: {}", display_text(snapshot.price.as_ref())),
            rsi: format!("RSI: {}", display_text(snapshot.rsi.as_ref())),
            bollinger: format!("Bollinger: {}", display_text(snapshot.upper_band.as_ref())),
            date: format!("Date: {}", display_text(snapshot.date.as_ref())),
            ma_100: format!("100MA: {}", display_text(snapshot.msa.as_ref())),
        }
    }

    /// `(element id, text)` pairs for rendering
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        let [price, rsi, bollinger, date, ma_100] = Self::FIELD_IDS;
        [
            (price, self.price.as_str()),
            (rsi, self.rsi.as_str()),
            (bollinger, self.bollinger.as_str()),
            (date, self.date.as_str()),
            (ma_100, self.ma_100.as_str()),
        ]
    }
}

/// Response of the periodic `GET /bollinger_bands` poll. Extra fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    #[serde(rename = "currentPrice")]
    pub current_price: Price,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_text_follows_string_concatenation() {
        assert_eq!(display_text(Some(&json!(150.2))), "150.2");
        assert_eq!(display_text(Some(&json!(65))), "65");
        assert_eq!(display_text(Some(&json!("2024-01-01"))), "2024-01-01");
        assert_eq!(display_text(Some(&Value::Null)), "null");
        assert_eq!(display_text(None), "undefined");
    }

    #[test]
    fn large_and_tiny_numbers_switch_to_exponent_form() {
        assert_eq!(display_text(Some(&json!(1e21))), "1e+21");
        assert_eq!(display_text(Some(&json!(1.5e22))), "1.5e+22");
        assert_eq!(display_text(Some(&json!(1e20))), "100000000000000000000");
        assert_eq!(display_text(Some(&json!(1e-7))), "1e-7");
        assert_eq!(display_text(Some(&json!(-2.5e-8))), "-2.5e-8");
        assert_eq!(display_text(Some(&json!(0.000001))), "0.000001");
        assert_eq!(display_text(Some(&json!(-0.0))), "0");
        assert_eq!(display_text(Some(&json!(-3.25))), "-3.25");
    }

    #[test]
    fn null_and_missing_fields_are_distinguished() {
        let snapshot: AnalysisSnapshot = serde_json::from_value(json!({ "Price": null })).unwrap();
        assert_eq!(snapshot.price, Some(Value::Null));
        assert_eq!(snapshot.rsi, None);
    }

    #[test]
    fn quote_reads_current_price_only() {
        let quote: MarketQuote =
            serde_json::from_str(r#"{"currentPrice":189.5,"upper":190.1,"lower":180.0}"#).unwrap();
        assert_eq!(quote.current_price.value(), 189.5);
    }
}
