use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Value Object - price as returned by the market-data endpoint
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - ticker symbol, always upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(symbol.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_normalised() {
        assert_eq!(Symbol::new(" aapl ".to_string()).unwrap().value(), "AAPL");
        assert!(Symbol::new("   ".to_string()).is_err());
    }
}
