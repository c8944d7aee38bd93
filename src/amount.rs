// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw coin amount parsing
//!
//! Cosmos SDK events report amounts as `<integer><denom>` strings such as
//! `1000000uatom` or `25ibc/27394FB0...`. This module splits those strings
//! into an unscaled magnitude and a denomination code, and scales magnitudes
//! by a denomination's precision.
//!
//! Scaling happens in [`BigDecimal`] space. Chains with 18-digit precision
//! produce raw integers that lose meaningful digits if divided as `f64`, so the
//! value is only narrowed to `f64` once it is human-scale.
//!
//! # Examples
//!
//! ```
//! use cosmoscan::{Precision, RawCoin};
//!
//! let coin = RawCoin::parse("1500000uatom").unwrap();
//! assert_eq!(coin.denom(), "uatom");
//! assert_eq!(coin.to_f64(Precision::MICRO), 1.5);
//! ```

use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use tracing::warn;

use crate::{AmountError, Precision};

/// Prefix of denominations that reference an IBC hash
pub const IBC_PREFIX: &str = "ibc/";

/// An unscaled amount and its denomination code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCoin {
    magnitude: BigDecimal,
    denom: String,
}

impl RawCoin {
    /// Parse a single `<integer><denom>` coin string
    ///
    /// The magnitude is the leading run of digits. The denomination is a
    /// trailing `ibc/<hash>` reference if present, otherwise the trailing run
    /// of letters and slashes.
    ///
    /// # Errors
    ///
    /// - [`AmountError::Malformed`] if no denomination or no leading integer can be found
    /// - [`AmountError::Zero`] if the magnitude is zero
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let denom = extract_denom(input)
            .ok_or_else(|| AmountError::malformed(input, "denom is empty string"))?;

        let digits_end = input
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(input.len());
        let digits = &input[..digits_end];
        if digits.is_empty() {
            return Err(AmountError::malformed(input, "no leading integer"));
        }

        let magnitude = BigDecimal::from_str(digits)
            .map_err(|e| AmountError::malformed(input, e.to_string()))?;
        if magnitude.is_zero() {
            return Err(AmountError::zero(input));
        }

        Ok(Self {
            magnitude,
            denom: denom.to_string(),
        })
    }

    /// The unscaled on-chain integer amount
    pub fn magnitude(&self) -> &BigDecimal {
        &self.magnitude
    }

    /// The denomination code, e.g. `uatom` or `ibc/27394FB0...`
    pub fn denom(&self) -> &str {
        &self.denom
    }

    /// Whether the denomination is an IBC hash reference
    pub fn is_ibc(&self) -> bool {
        self.denom.starts_with(IBC_PREFIX)
    }

    /// Scale the magnitude down by `10^precision`
    pub fn scaled(&self, precision: Precision) -> BigDecimal {
        scale_down(&self.magnitude, precision)
    }

    /// Scale the magnitude and narrow it to `f64`
    pub fn to_f64(&self, precision: Precision) -> f64 {
        // Narrow via the decimal string so the conversion is correctly rounded
        let scaled = self.scaled(precision).to_string();
        scaled.parse::<f64>().unwrap_or_else(|e| {
            warn!(
                amount = %scaled,
                denom = %self.denom,
                error = %e,
                "Failed to narrow scaled amount to f64, using 0.0"
            );
            0.0
        })
    }
}

/// Shift `value`'s decimal point left by `precision` digits, without rounding
pub(crate) fn scale_down(value: &BigDecimal, precision: Precision) -> BigDecimal {
    let (digits, exponent) = value.as_bigint_and_exponent();
    BigDecimal::new(digits, exponent + i64::from(precision.as_u32()))
}

impl std::fmt::Display for RawCoin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.magnitude, self.denom)
    }
}

/// Parse an `amount` attribute that may list several coins
///
/// Multi-denomination transfers report `100uatom,5ujuno`. Each coin is parsed
/// independently so one malformed coin doesn't hide the others.
///
/// # Examples
///
/// ```
/// use cosmoscan::parse_coins;
///
/// let coins = parse_coins("100uatom,0ujuno,5ibc/ABC");
/// assert_eq!(coins.len(), 3);
/// assert!(coins[0].is_ok());
/// assert!(coins[1].as_ref().unwrap_err().is_zero());
/// assert_eq!(coins[2].as_ref().unwrap().denom(), "ibc/ABC");
/// ```
pub fn parse_coins(input: &str) -> Vec<Result<RawCoin, AmountError>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|coin| !coin.is_empty())
        .map(RawCoin::parse)
        .collect()
}

fn extract_denom(input: &str) -> Option<&str> {
    ibc_denom(input).or_else(|| trailing_denom(input))
}

/// Leftmost `ibc/<word chars>` that runs to the end of the input
fn ibc_denom(input: &str) -> Option<&str> {
    input
        .match_indices(IBC_PREFIX)
        .map(|(start, _)| &input[start..])
        .find(|candidate| {
            let hash = &candidate[IBC_PREFIX.len()..];
            !hash.is_empty() && hash.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

fn trailing_denom(input: &str) -> Option<&str> {
    input
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_alphabetic() || *c == '/')
        .last()
        .map(|(start, _)| &input[start..])
}
