// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for raw coin amount parsing.

/// Errors that can occur when parsing a raw `<integer><denom>` coin string.
///
/// Neither variant is fatal to classification. A [`Malformed`] amount is
/// logged and the affected leg is left unset, while a [`Zero`] amount simply
/// means there is nothing to record.
///
/// [`Malformed`]: AmountError::Malformed
/// [`Zero`]: AmountError::Zero
///
/// # Examples
///
/// ```rust
/// use cosmoscan::{AmountError, RawCoin};
///
/// match RawCoin::parse("0uatom") {
///     Err(e) if e.is_zero() => println!("nothing to record"),
///     Err(e) => eprintln!("bad amount: {e}"),
///     Ok(coin) => println!("{} {}", coin.magnitude(), coin.denom()),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The amount string could not be split into a magnitude and a denomination.
    #[error("Malformed amount {input:?}: {reason}")]
    Malformed {
        /// The raw amount string as it appeared in the event
        input: String,
        /// Which part of the string could not be extracted
        reason: String,
    },

    /// The amount parsed cleanly but is exactly zero.
    #[error("Amount {input:?} is zero")]
    Zero {
        /// The raw amount string as it appeared in the event
        input: String,
    },
}

impl AmountError {
    /// Create a `Malformed` error for an input string.
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        AmountError::Malformed {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a `Zero` error for an input string.
    pub fn zero(input: impl Into<String>) -> Self {
        AmountError::Zero {
            input: input.into(),
        }
    }

    /// Whether this error only signals a zero amount.
    pub fn is_zero(&self) -> bool {
        matches!(self, AmountError::Zero { .. })
    }
}
