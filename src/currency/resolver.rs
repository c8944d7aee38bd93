// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denomination resolution
//!
//! A denomination code is resolved in decreasing order of confidence:
//!
//! 1. `ibc/<hash>` codes are first replaced by the base denomination recorded
//!    in the [`IbcIndex`] (or `unknown` when the hash was never discovered)
//! 2. An exact registry match gives precision, symbol and chain
//! 3. Otherwise the first character is read as an SI prefix (`u` → 6,
//!    `n` → 9, `a` → 18, anything else → 6) and the symbol is the upper-cased
//!    remainder

use tracing::warn;

use crate::amount::IBC_PREFIX;
use crate::{AmountError, CurrencyInfo, CurrencyRegistry, IbcIndex, Precision, RawCoin, Resolution};

/// Outcome of resolving a denomination code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCurrency {
    /// The code actually looked up, after IBC indirection
    pub denom: String,
    pub info: CurrencyInfo,
    pub resolution: Resolution,
}

/// A coin converted to a human-scale amount and display symbol
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCoin {
    pub amount: f64,
    pub symbol: String,
    pub chain: String,
    pub resolution: Resolution,
}

/// Read-only resolver over a currency registry and an IBC index
///
/// Build it once after the population phase and share it (for example in an
/// `Arc`) with every classifier. Resolution never mutates either table.
///
/// # Examples
///
/// ```
/// use cosmoscan::{CurrencyInfo, CurrencyRegistry, CurrencyResolver, IbcIndex, Resolution};
///
/// let mut registry = CurrencyRegistry::new();
/// registry.insert("uatom", CurrencyInfo::new(6, "ATOM", "cosmoshub"));
/// let resolver = CurrencyResolver::new(registry, IbcIndex::new());
///
/// let atom = resolver.normalize_str("1000000uatom").unwrap();
/// assert_eq!(atom.amount, 1.0);
/// assert_eq!(atom.symbol, "ATOM");
/// assert_eq!(atom.resolution, Resolution::Registry);
///
/// let guessed = resolver.resolve("nfoo");
/// assert_eq!(guessed.info.symbol, "FOO");
/// assert!(guessed.resolution.is_guess());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyResolver {
    registry: CurrencyRegistry,
    ibc: IbcIndex,
}

impl CurrencyResolver {
    pub fn new(registry: CurrencyRegistry, ibc: IbcIndex) -> Self {
        Self { registry, ibc }
    }

    pub fn registry(&self) -> &CurrencyRegistry {
        &self.registry
    }

    pub fn ibc_index(&self) -> &IbcIndex {
        &self.ibc
    }

    /// Resolve a denomination code to its currency metadata
    pub fn resolve(&self, denom: &str) -> ResolvedCurrency {
        let effective = match denom.strip_prefix(IBC_PREFIX) {
            Some(hash) => self.ibc.get(hash),
            None => denom,
        };

        match self.registry.get(effective) {
            Some(info) => ResolvedCurrency {
                denom: effective.to_string(),
                info: info.clone(),
                resolution: Resolution::Registry,
            },
            None => ResolvedCurrency {
                denom: effective.to_string(),
                info: guess_currency(effective),
                resolution: Resolution::Guessed,
            },
        }
    }

    /// Scale a parsed coin by its resolved precision
    ///
    /// Guessed resolutions are logged as warnings: the heuristic may pick the
    /// wrong precision for denominations it hasn't seen.
    pub fn normalize(&self, coin: &RawCoin) -> NormalizedCoin {
        let resolved = self.resolve(coin.denom());
        if resolved.resolution.is_guess() {
            warn!(
                denom = %coin.denom(),
                precision = resolved.info.precision.as_u32(),
                symbol = %resolved.info.symbol,
                "Could not look up token, using guessed precision and symbol"
            );
        }

        NormalizedCoin {
            amount: coin.to_f64(resolved.info.precision),
            symbol: resolved.info.symbol,
            chain: resolved.info.chain,
            resolution: resolved.resolution,
        }
    }

    /// Parse and normalize a single `<integer><denom>` string
    pub fn normalize_str(&self, amount: &str) -> Result<NormalizedCoin, AmountError> {
        RawCoin::parse(amount).map(|coin| self.normalize(&coin))
    }
}

fn guess_currency(denom: &str) -> CurrencyInfo {
    let mut chars = denom.chars();
    let (precision, symbol) = match chars.next() {
        Some(prefix @ ('u' | 'n' | 'a')) => (Precision::from_prefix(prefix), chars.as_str()),
        _ => (Precision::MICRO, denom),
    };
    let symbol = symbol.to_uppercase();
    CurrencyInfo::new(precision, symbol.clone(), symbol)
}
