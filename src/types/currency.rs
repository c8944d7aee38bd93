// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Currency metadata types

use serde::{Deserialize, Serialize};

/// Power-of-ten scale of a denomination
///
/// A raw on-chain integer amount is divided by `10^precision` to get the
/// human-readable amount. Cosmos SDK chains mostly use 6 (`uatom`), while
/// EVM-flavoured chains use 18 (`aevmos`).
///
/// # Examples
///
/// ```
/// use cosmoscan::Precision;
///
/// assert_eq!(Precision::from_prefix('u'), Precision::MICRO);
/// assert_eq!(Precision::from_prefix('a').as_u32(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Precision(u32);

impl Precision {
    /// Micro denominations (`u` prefix)
    pub const MICRO: Self = Self(6);

    /// Nano denominations (`n` prefix)
    pub const NANO: Self = Self(9);

    /// Atto denominations (`a` prefix)
    pub const ATTO: Self = Self(18);

    pub const fn new(precision: u32) -> Self {
        Self(precision)
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Guess a precision from the first character of a denomination
    ///
    /// Anything that isn't a recognised SI prefix is assumed to be micro.
    pub const fn from_prefix(prefix: char) -> Self {
        match prefix {
            'n' => Self::NANO,
            'a' => Self::ATTO,
            _ => Self::MICRO,
        }
    }
}

impl From<u32> for Precision {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

/// Display metadata for a denomination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub precision: Precision,
    #[serde(rename = "token_symbol")]
    pub symbol: String,
    pub chain: String,
}

impl CurrencyInfo {
    pub fn new(precision: impl Into<Precision>, symbol: impl Into<String>, chain: impl Into<String>) -> Self {
        Self {
            precision: precision.into(),
            symbol: symbol.into(),
            chain: chain.into(),
        }
    }
}

/// How confidently a denomination was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Found in the currency registry
    Registry,
    /// Synthesized from the denomination's prefix
    Guessed,
}

impl Resolution {
    pub fn is_guess(&self) -> bool {
        matches!(self, Resolution::Guessed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_from_prefix() {
        assert_eq!(Precision::from_prefix('u'), Precision::MICRO);
        assert_eq!(Precision::from_prefix('n'), Precision::NANO);
        assert_eq!(Precision::from_prefix('a'), Precision::ATTO);
        assert_eq!(Precision::from_prefix('b'), Precision::MICRO);
    }

    #[test]
    fn test_currency_info_registry_field_names() {
        let json = r#"{"precision":6,"token_symbol":"ATOM","chain":"cosmoshub"}"#;
        let info: CurrencyInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info, CurrencyInfo::new(6, "ATOM", "cosmoshub"));
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", Precision::ATTO), "18 decimals");
    }
}
