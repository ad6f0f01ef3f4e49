use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// One of the three indicator positions on the form
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, StrumDisplay, EnumIter, Serialize, Deserialize,
)]
pub enum SlotId {
    #[strum(serialize = "slot 1")]
    One,
    #[strum(serialize = "slot 2")]
    Two,
    #[strum(serialize = "slot 3")]
    Three,
}

impl SlotId {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            SlotId::One => 0,
            SlotId::Two => 1,
            SlotId::Three => 2,
        }
    }

    pub fn all() -> impl Iterator<Item = SlotId> {
        SlotId::iter()
    }
}

/// Technical indicator offered in every slot picker.
///
/// The string forms are the option values the backend and the page agree on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Indicator {
    #[strum(serialize = "RSI")]
    #[serde(rename = "RSI")]
    Rsi,
    #[strum(serialize = "MACD")]
    #[serde(rename = "MACD")]
    Macd,
    #[strum(serialize = "200MA")]
    #[serde(rename = "200MA")]
    MovingAverage200,
    #[strum(serialize = "100MA")]
    #[serde(rename = "100MA")]
    MovingAverage100,
    #[strum(serialize = "50MA")]
    #[serde(rename = "50MA")]
    MovingAverage50,
    #[strum(serialize = "Bollinger Band")]
    #[serde(rename = "Bollinger Band")]
    BollingerBand,
}

impl Indicator {
    /// Action vocabulary of this indicator, in picker order.
    pub fn actions(self) -> &'static [Action] {
        use Action::*;
        match self {
            Indicator::Rsi => &[Above70, Below30],
            Indicator::Macd => &[Above0, Below0, CrossAbove, CrossBelow],
            Indicator::MovingAverage200 => &[AbovePrice, BelowPrice, GoldenCross, DeathCross],
            Indicator::MovingAverage100 => {
                &[AbovePrice, BelowPrice, FivePercentAboveLine, FivePercentBelowLine]
            }
            Indicator::MovingAverage50 => &[AbovePrice, BelowPrice],
            Indicator::BollingerBand => &[ReachTop, ReachBottom],
        }
    }

    pub fn accepts(self, action: Action) -> bool {
        self.actions().contains(&action)
    }

    /// Text shown in the picker
    pub fn label(self) -> &'static str {
        match self {
            Indicator::Rsi => "RSI",
            Indicator::Macd => "MACD",
            Indicator::MovingAverage200 => "200 Moving Average",
            Indicator::MovingAverage100 => "100 Moving Average",
            Indicator::MovingAverage50 => "50 Moving Average",
            Indicator::BollingerBand => "Bollinger Band",
        }
    }

    pub fn value(self) -> &'static str {
        self.into()
    }
}

/// Condition attached to an indicator. Several indicators share entries
/// (every moving average has `Above Price`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Action {
    #[strum(serialize = "Above 70")]
    #[serde(rename = "Above 70")]
    Above70,
    #[strum(serialize = "Below 30")]
    #[serde(rename = "Below 30")]
    Below30,
    #[strum(serialize = "Above 0")]
    #[serde(rename = "Above 0")]
    Above0,
    #[strum(serialize = "Below 0")]
    #[serde(rename = "Below 0")]
    Below0,
    #[strum(serialize = "Cross above")]
    #[serde(rename = "Cross above")]
    CrossAbove,
    #[strum(serialize = "Cross below")]
    #[serde(rename = "Cross below")]
    CrossBelow,
    #[strum(serialize = "Above Price")]
    #[serde(rename = "Above Price")]
    AbovePrice,
    #[strum(serialize = "Below Price")]
    #[serde(rename = "Below Price")]
    BelowPrice,
    #[strum(serialize = "Golden Cross")]
    #[serde(rename = "Golden Cross")]
    GoldenCross,
    #[strum(serialize = "Death Cross")]
    #[serde(rename = "Death Cross")]
    DeathCross,
    #[strum(serialize = "5% Above Line")]
    #[serde(rename = "5% Above Line")]
    FivePercentAboveLine,
    #[strum(serialize = "5% Below Line")]
    #[serde(rename = "5% Below Line")]
    FivePercentBelowLine,
    #[strum(serialize = "Reach Top")]
    #[serde(rename = "Reach Top")]
    ReachTop,
    #[strum(serialize = "Reach Bottom")]
    #[serde(rename = "Reach Bottom")]
    ReachBottom,
}

/// Bollinger band edge as the backend names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, Serialize, Deserialize)]
pub enum BandEdge {
    Top,
    Bottom,
}

impl BandEdge {
    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::ReachTop => Some(BandEdge::Top),
            Action::ReachBottom => Some(BandEdge::Bottom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_round_trip_through_strum() {
        for indicator in Indicator::iter() {
            assert_eq!(indicator.value().parse::<Indicator>(), Ok(indicator));
            assert_eq!(indicator.to_string(), indicator.value());
        }
        assert_eq!("5% Below Line".parse::<Action>(), Ok(Action::FivePercentBelowLine));
    }

    #[test]
    fn every_action_belongs_to_some_indicator() {
        for action in Action::iter() {
            assert!(
                Indicator::iter().any(|indicator| indicator.accepts(action)),
                "{action} is unreachable"
            );
        }
    }

    #[test]
    fn moving_averages_differ_past_price_crossings() {
        assert!(Indicator::MovingAverage200.accepts(Action::GoldenCross));
        assert!(!Indicator::MovingAverage100.accepts(Action::GoldenCross));
        assert!(Indicator::MovingAverage100.accepts(Action::FivePercentAboveLine));
        assert_eq!(Indicator::MovingAverage50.actions().len(), 2);
    }

    #[test]
    fn band_edge_only_for_bollinger_actions() {
        assert_eq!(BandEdge::from_action(Action::ReachTop), Some(BandEdge::Top));
        assert_eq!(BandEdge::from_action(Action::ReachBottom), Some(BandEdge::Bottom));
        assert_eq!(BandEdge::from_action(Action::AbovePrice), None);
    }
}
