// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the currency registry and IBC index.

/// Errors raised while populating currency state.
///
/// These only occur during the one-time population phase. Resolution itself
/// never fails: unknown denominations fall back to a heuristic guess.
#[derive(Debug, thiserror::Error)]
pub enum CurrencyError {
    /// An IBC trace was missing its hash or its base denomination.
    #[error("IBC hash or denom empty, skipping: hash={hash:?} denom={denom:?}")]
    EmptyIbcEntry {
        /// The IBC hash, with or without its `ibc/` prefix
        hash: String,
        /// The base denomination the hash was supposed to map to
        denom: String,
    },

    /// The registry document could not be decoded.
    #[error("Failed to load currency registry: {details}")]
    RegistryLoad {
        /// Decoder error details
        details: String,
    },

    /// Reading the registry file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CurrencyError {
    /// Create an `EmptyIbcEntry` error.
    pub fn empty_ibc_entry(hash: impl Into<String>, denom: impl Into<String>) -> Self {
        CurrencyError::EmptyIbcEntry {
            hash: hash.into(),
            denom: denom.into(),
        }
    }

    /// Create a `RegistryLoad` error with details.
    pub fn registry_load(details: impl Into<String>) -> Self {
        CurrencyError::RegistryLoad {
            details: details.into(),
        }
    }
}
